// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Validation error taxonomy and user-facing messages.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A violated draft constraint
///
/// The `Display` text of each variant is the message shown to the user
/// when that error is the highest-priority one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowDraftError {
    #[error("Pick at least one key.")]
    MissingKeys,
    #[error("Pick a clef.")]
    MissingClef,
    #[error("Pick at least one mode.")]
    MissingModes,
    #[error("Pick at least one rhythm/articulation pattern.")]
    MissingSlurPatterns,
    #[error("Choose a valid range.")]
    InvalidRange,
    #[error("Choose a valid tempo.")]
    InvalidTempo,
}

impl FlowDraftError {
    /// Every error kind in check (and display priority) order
    pub const ALL: [FlowDraftError; 6] = [
        FlowDraftError::MissingKeys,
        FlowDraftError::MissingClef,
        FlowDraftError::MissingModes,
        FlowDraftError::MissingSlurPatterns,
        FlowDraftError::InvalidRange,
        FlowDraftError::InvalidTempo,
    ];

    /// Stable snake_case code
    pub fn code(self) -> &'static str {
        match self {
            FlowDraftError::MissingKeys => "missing_keys",
            FlowDraftError::MissingClef => "missing_clef",
            FlowDraftError::MissingModes => "missing_modes",
            FlowDraftError::MissingSlurPatterns => "missing_slur_patterns",
            FlowDraftError::InvalidRange => "invalid_range",
            FlowDraftError::InvalidTempo => "invalid_tempo",
        }
    }
}

pub const MISSING_NAME_MESSAGE: &str = "Please enter a name for this flow.";
pub const FALLBACK_MESSAGE: &str = "Unable to create flow.";

/// Pick the single message to show for a failed commit
///
/// An empty (or blank) name wins over every draft error; after that the
/// first error kind present in [`FlowDraftError::ALL`] order is used.
pub fn flow_creation_error_message(errors: &[FlowDraftError], name: &str) -> String {
    if name.trim().is_empty() {
        return MISSING_NAME_MESSAGE.to_string();
    }
    first_error_message(errors)
}

fn first_error_message(errors: &[FlowDraftError]) -> String {
    FlowDraftError::ALL
        .iter()
        .find(|kind| errors.contains(kind))
        .map(ToString::to_string)
        .unwrap_or_else(|| FALLBACK_MESSAGE.to_string())
}

/// Rejected commit
///
/// `errors` is the ordered validation result, which is empty when the
/// draft was valid but the name was blank. `missing_name` records the
/// blank name, which is not one of the [`FlowDraftError`] kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.message())]
pub struct CreateFlowError {
    pub errors: Vec<FlowDraftError>,
    pub missing_name: bool,
}

impl CreateFlowError {
    /// The single highest-priority message
    pub fn message(&self) -> String {
        if self.missing_name {
            return MISSING_NAME_MESSAGE.to_string();
        }
        first_error_message(&self.errors)
    }

    /// Snake_case codes of the validation errors, in order
    pub fn codes(&self) -> Vec<&'static str> {
        self.errors.iter().map(|e| e.code()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        let codes: Vec<&str> = FlowDraftError::ALL.iter().map(|e| e.code()).collect();
        assert_eq!(
            codes,
            vec![
                "missing_keys",
                "missing_clef",
                "missing_modes",
                "missing_slur_patterns",
                "invalid_range",
                "invalid_tempo"
            ]
        );
    }

    #[test]
    fn test_serde_uses_codes() {
        for kind in FlowDraftError::ALL {
            let yaml = serde_yaml::to_string(&kind).unwrap();
            assert_eq!(yaml.trim(), kind.code());
        }
    }

    #[test]
    fn test_single_error_message_is_its_display() {
        for kind in FlowDraftError::ALL {
            assert_eq!(flow_creation_error_message(&[kind], "Flow"), kind.to_string());
        }
        assert_eq!(
            FlowDraftError::MissingSlurPatterns.to_string(),
            "Pick at least one rhythm/articulation pattern."
        );
    }

    #[test]
    fn test_empty_name_takes_precedence() {
        let errors = [FlowDraftError::MissingKeys, FlowDraftError::InvalidTempo];
        assert_eq!(flow_creation_error_message(&errors, "   "), MISSING_NAME_MESSAGE);
        assert_eq!(flow_creation_error_message(&[], ""), MISSING_NAME_MESSAGE);
    }

    #[test]
    fn test_priority_ignores_list_order() {
        let errors = [FlowDraftError::InvalidTempo, FlowDraftError::MissingModes];
        assert_eq!(flow_creation_error_message(&errors, "Scales"), "Pick at least one mode.");

        let errors = [FlowDraftError::InvalidTempo, FlowDraftError::InvalidRange];
        assert_eq!(flow_creation_error_message(&errors, "Scales"), "Choose a valid range.");
    }

    #[test]
    fn test_fallback_message() {
        assert_eq!(flow_creation_error_message(&[], "Scales"), FALLBACK_MESSAGE);
    }

    #[test]
    fn test_create_flow_error_message() {
        let missing_name = CreateFlowError {
            errors: vec![],
            missing_name: true,
        };
        assert_eq!(missing_name.to_string(), MISSING_NAME_MESSAGE);
        assert!(missing_name.codes().is_empty());

        let invalid = CreateFlowError {
            errors: vec![FlowDraftError::MissingClef, FlowDraftError::InvalidTempo],
            missing_name: false,
        };
        assert_eq!(invalid.to_string(), "Pick a clef.");
        assert_eq!(invalid.message(), invalid.to_string());

        let source: &dyn std::error::Error = &invalid;
        assert!(source.source().is_none());
        assert_eq!(invalid.codes(), vec!["missing_clef", "invalid_tempo"]);
    }
}
