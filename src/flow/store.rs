// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Flow store: the façade the wizard screens talk to.
//!
//! The store owns one draft repository and one flow repository. Screens
//! push partial updates in any order; completeness is only enforced when
//! `create_flow` commits the draft.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{info, warn};

use super::draft::{FlowDraft, FlowDraftPatch};
use super::error::CreateFlowError;
use super::factory::{create_flow_from_draft, Flow};
use super::repository::{
    FlowDraftRepository, FlowRepository, InMemoryFlowDraftRepository, InMemoryFlowRepository,
};

/// A store behind the single lock multi-threaded hosts need
pub type SharedFlowStore = Arc<Mutex<FlowStore>>;

/// Orchestrates drafts, commits and the flow list
#[derive(Debug, Clone, Default)]
pub struct FlowStore<D = InMemoryFlowDraftRepository, F = InMemoryFlowRepository> {
    drafts: D,
    flows: F,
}

impl FlowStore {
    /// Create a store with empty in-memory repositories
    pub fn new() -> Self {
        Self::with_repositories(InMemoryFlowDraftRepository::new(), InMemoryFlowRepository::new())
    }

    /// Create a store whose flow list starts with `seed`
    pub fn with_seed(seed: Vec<Flow>) -> Self {
        Self::with_repositories(
            InMemoryFlowDraftRepository::new(),
            InMemoryFlowRepository::with_seed(seed),
        )
    }

    /// Wrap this store in a mutex for shared use
    pub fn into_shared(self) -> SharedFlowStore {
        Arc::new(Mutex::new(self))
    }
}

impl<D: FlowDraftRepository, F: FlowRepository> FlowStore<D, F> {
    /// Create a store over the given repositories
    pub fn with_repositories(drafts: D, flows: F) -> Self {
        Self { drafts, flows }
    }

    /// Copy of the current draft
    pub fn draft(&self) -> FlowDraft {
        self.drafts.get()
    }

    /// Copy of the committed flows, most recent first
    pub fn flows(&self) -> Vec<Flow> {
        self.flows.list()
    }

    /// Merge a partial update into the current draft and save it
    ///
    /// Returns the draft as saved.
    pub fn update_draft(&mut self, patch: FlowDraftPatch) -> FlowDraft {
        let next = self.drafts.get().merged(patch);
        self.drafts.save(&next);
        next
    }

    /// Discard the current draft
    pub fn reset_draft(&mut self) {
        self.drafts.reset();
    }

    /// Commit the current draft using the system clock
    pub fn create_flow(&mut self, name: &str) -> Result<Flow, CreateFlowError> {
        self.create_flow_at(name, Utc::now(), &mut rand::thread_rng())
    }

    /// Commit the current draft at `now`, drawing the id suffix from `rng`
    ///
    /// On success the flow is added and the draft reset. On failure
    /// neither repository is touched.
    pub fn create_flow_at<R: Rng>(
        &mut self,
        name: &str,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<Flow, CreateFlowError> {
        let draft = self.drafts.get();

        match create_flow_from_draft(&draft, name, now, rng) {
            Ok(flow) => {
                info!(id = %flow.id, name = %flow.name, "flow created");
                self.flows.add(flow.clone());
                self.drafts.reset();
                Ok(flow)
            }
            Err(err) => {
                warn!(
                    errors = ?err.codes(),
                    missing_name = err.missing_name,
                    "flow creation rejected"
                );
                Err(err)
            }
        }
    }
}
