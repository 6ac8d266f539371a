// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Flow creation workflow.
//!
//! A flow is built up as a [`FlowDraft`] through partial updates, then
//! validated and committed into an immutable [`Flow`]:
//! - `draft` holds the working state and its normalizer
//! - `validate` and `error` report what is missing
//! - `factory` turns a valid draft and a name into a flow
//! - `repository` and `store` hold drafts and committed flows

pub mod draft;
pub mod error;
pub mod factory;
pub mod progress;
pub mod repository;
pub mod store;
pub mod validate;

pub use draft::{
    create_empty_flow_draft, normalize_flow_draft, FlowDraft, FlowDraftPatch, PitchRange,
    RangePatch, TempoSetting,
};
pub use error::{flow_creation_error_message, CreateFlowError, FlowDraftError};
pub use factory::{create_flow_from_draft, create_flow_id, iso_timestamp, Flow};
pub use progress::{step_index_for_route, WizardStep};
pub use repository::{
    FlowDraftRepository, FlowRepository, InMemoryFlowDraftRepository, InMemoryFlowRepository,
};
pub use store::{FlowStore, SharedFlowStore};
pub use validate::{is_valid_range, is_valid_tempo, validate_flow_draft};
