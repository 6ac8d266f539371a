// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! scaleflow - scale practice flow builder.
//!
//! Users assemble a practice routine ("flow") step by step: keys, clef,
//! range, modes, tempo and articulation. The draft is validated and
//! committed under a name, then expanded into practice exercises.

pub mod catalog;
pub mod config;
pub mod flow;
pub mod music;
pub mod practice;

pub use catalog::{Clef, KeySignature, ScaleMode, SlurPatternId, MAX_BPM, MIN_BPM};
pub use config::{AppConfig, FlowLibraryFile};
pub use flow::{
    create_empty_flow_draft, create_flow_from_draft, flow_creation_error_message,
    normalize_flow_draft, validate_flow_draft, CreateFlowError, Flow, FlowDraft, FlowDraftError,
    FlowDraftPatch, FlowStore, PitchRange, SharedFlowStore, TempoSetting, WizardStep,
};
pub use practice::{build_exercises, PracticeExercise, PracticeMode};
