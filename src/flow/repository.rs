// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Draft and flow repositories.
//!
//! Both repositories hand out owned copies and store owned copies, so a
//! caller can never reach into stored state through a returned value.

use std::collections::VecDeque;

use tracing::debug;

use super::draft::{create_empty_flow_draft, FlowDraft};
use super::factory::Flow;

/// Holder of the single current draft
pub trait FlowDraftRepository {
    /// Copy of the current draft
    fn get(&self) -> FlowDraft;
    /// Replace the current draft with a copy of `draft`
    fn save(&mut self, draft: &FlowDraft);
    /// Replace the current draft with a fresh empty one
    fn reset(&mut self);
}

/// Collection of committed flows, most recent first
pub trait FlowRepository {
    /// Copy of every flow, most recently added first
    fn list(&self) -> Vec<Flow>;
    /// Add a flow in front; ids are not checked for duplicates
    fn add(&mut self, flow: Flow);
}

/// In-memory draft repository
#[derive(Debug, Clone)]
pub struct InMemoryFlowDraftRepository {
    draft: FlowDraft,
    create_empty: fn() -> FlowDraft,
}

impl InMemoryFlowDraftRepository {
    /// Create a repository holding an empty draft
    pub fn new() -> Self {
        Self::with_factory(create_empty_flow_draft)
    }

    /// Create a repository using `create_empty` for initialization and reset
    pub fn with_factory(create_empty: fn() -> FlowDraft) -> Self {
        Self {
            draft: create_empty(),
            create_empty,
        }
    }
}

impl Default for InMemoryFlowDraftRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowDraftRepository for InMemoryFlowDraftRepository {
    fn get(&self) -> FlowDraft {
        self.draft.clone()
    }

    fn save(&mut self, draft: &FlowDraft) {
        debug!(
            keys = draft.keys.len(),
            modes = draft.modes.len(),
            patterns = draft.slur_pattern_ids.len(),
            "draft saved"
        );
        self.draft = draft.clone();
    }

    fn reset(&mut self) {
        debug!("draft reset");
        self.draft = (self.create_empty)();
    }
}

/// In-memory flow repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryFlowRepository {
    flows: VecDeque<Flow>,
}

impl InMemoryFlowRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-loaded with `seed`, kept in the given order
    pub fn with_seed(seed: Vec<Flow>) -> Self {
        Self {
            flows: seed.into(),
        }
    }

    /// Number of stored flows
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    /// Check if no flows are stored
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }
}

impl FlowRepository for InMemoryFlowRepository {
    fn list(&self) -> Vec<Flow> {
        self.flows.iter().cloned().collect()
    }

    fn add(&mut self, flow: Flow) {
        debug!(id = %flow.id, name = %flow.name, "flow added");
        self.flows.push_front(flow);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Clef, KeySignature};
    use crate::flow::draft::PitchRange;

    fn flow(id: &str) -> Flow {
        Flow {
            id: id.to_string(),
            name: format!("Flow {}", id),
            config: create_empty_flow_draft(),
            progress_percent: 0,
            created_at: "2026-02-17T10:00:00.000Z".to_string(),
            updated_at: "2026-02-17T10:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_draft_repository_starts_empty() {
        let repo = InMemoryFlowDraftRepository::new();
        assert_eq!(repo.get(), create_empty_flow_draft());
    }

    #[test]
    fn test_draft_save_get_round_trip_is_a_copy() {
        let mut repo = InMemoryFlowDraftRepository::new();
        let mut draft = create_empty_flow_draft();
        draft.keys.push(KeySignature::A);
        draft.range = PitchRange::new("A3", "G5");
        repo.save(&draft);

        // Mutating the saved value does not reach the repository
        draft.keys.push(KeySignature::E);

        let mut fetched = repo.get();
        assert_eq!(fetched.keys, vec![KeySignature::A]);
        fetched.range.high = "C7".to_string();
        fetched.clef = Some(Clef::Bass);

        let again = repo.get();
        assert_eq!(again.range.high, "G5");
        assert_eq!(again.clef, None);
    }

    #[test]
    fn test_draft_reset() {
        let mut repo = InMemoryFlowDraftRepository::new();
        let mut draft = create_empty_flow_draft();
        draft.clef = Some(Clef::Treble);
        repo.save(&draft);
        repo.reset();
        assert_eq!(repo.get(), create_empty_flow_draft());
    }

    #[test]
    fn test_draft_reset_uses_factory() {
        fn treble_draft() -> FlowDraft {
            FlowDraft {
                clef: Some(Clef::Treble),
                ..create_empty_flow_draft()
            }
        }

        let mut repo = InMemoryFlowDraftRepository::with_factory(treble_draft);
        assert_eq!(repo.get().clef, Some(Clef::Treble));
        repo.save(&create_empty_flow_draft());
        repo.reset();
        assert_eq!(repo.get(), treble_draft());
    }

    #[test]
    fn test_flow_list_most_recent_first() {
        let mut repo = InMemoryFlowRepository::new();
        repo.add(flow("a"));
        repo.add(flow("b"));
        repo.add(flow("c"));

        let ids: Vec<String> = repo.list().into_iter().map(|f| f.id).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_flow_list_is_a_copy() {
        let mut repo = InMemoryFlowRepository::new();
        repo.add(flow("a"));

        let mut listed = repo.list();
        listed.clear();
        assert_eq!(repo.list().len(), 1);

        let mut listed = repo.list();
        listed[0].name = "Renamed".to_string();
        assert_eq!(repo.list()[0].name, "Flow a");
    }

    #[test]
    fn test_duplicate_ids_are_kept() {
        let mut repo = InMemoryFlowRepository::new();
        repo.add(flow("same"));
        repo.add(flow("same"));
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_seeded_repository() {
        let mut repo = InMemoryFlowRepository::with_seed(vec![flow("x"), flow("y")]);
        repo.add(flow("z"));
        let ids: Vec<String> = repo.list().into_iter().map(|f| f.id).collect();
        assert_eq!(ids, vec!["z", "x", "y"]);
        assert!(!repo.is_empty());
    }
}
