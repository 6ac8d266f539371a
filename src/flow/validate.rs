// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Draft validation.

use crate::catalog::{pitch_step_index, MAX_BPM, MIN_BPM};

use super::draft::{normalize_flow_draft, FlowDraft, PitchRange, TempoSetting};
use super::error::FlowDraftError;

/// Validate a draft, returning every violated constraint in check order
///
/// The draft is normalized first, so callers may pass it as-is. All
/// checks run; an empty result means the draft can be committed.
pub fn validate_flow_draft(input: &FlowDraft) -> Vec<FlowDraftError> {
    let draft = normalize_flow_draft(input);
    let mut errors = Vec::new();

    if draft.keys.is_empty() {
        errors.push(FlowDraftError::MissingKeys);
    }

    if draft.clef.is_none() {
        errors.push(FlowDraftError::MissingClef);
    }

    if draft.modes.is_empty() {
        errors.push(FlowDraftError::MissingModes);
    }

    if draft.slur_pattern_ids.is_empty() {
        errors.push(FlowDraftError::MissingSlurPatterns);
    }

    if !is_valid_range(&draft.range) {
        errors.push(FlowDraftError::InvalidRange);
    }

    if !is_valid_tempo(&draft.tempo) {
        errors.push(FlowDraftError::InvalidTempo);
    }

    errors
}

/// Both ends are catalog steps and low does not sit above high
pub fn is_valid_range(range: &PitchRange) -> bool {
    match (pitch_step_index(&range.low), pitch_step_index(&range.high)) {
        (Some(low), Some(high)) => low <= high,
        _ => false,
    }
}

/// Every bpm lies within [MIN_BPM, MAX_BPM] and a range is not inverted
pub fn is_valid_tempo(tempo: &TempoSetting) -> bool {
    let in_bounds = |bpm: u32| (MIN_BPM..=MAX_BPM).contains(&bpm);

    match *tempo {
        TempoSetting::Single { bpm } => in_bounds(bpm),
        TempoSetting::Range { min_bpm, max_bpm } => {
            in_bounds(min_bpm) && in_bounds(max_bpm) && min_bpm <= max_bpm
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Clef, KeySignature, ScaleMode, SlurPatternId};
    use crate::flow::draft::create_empty_flow_draft;

    fn valid_draft() -> FlowDraft {
        FlowDraft {
            keys: vec![KeySignature::C],
            clef: Some(Clef::Treble),
            modes: vec![ScaleMode::Major],
            slur_pattern_ids: vec![SlurPatternId::FullPhrase],
            ..create_empty_flow_draft()
        }
    }

    #[test]
    fn test_empty_draft_errors_in_order() {
        assert_eq!(
            validate_flow_draft(&create_empty_flow_draft()),
            vec![
                FlowDraftError::MissingKeys,
                FlowDraftError::MissingClef,
                FlowDraftError::MissingModes,
                FlowDraftError::MissingSlurPatterns,
            ]
        );
    }

    #[test]
    fn test_valid_draft() {
        assert!(validate_flow_draft(&valid_draft()).is_empty());
    }

    #[test]
    fn test_duplicates_do_not_affect_validity() {
        let draft = FlowDraft {
            keys: vec![KeySignature::C, KeySignature::C],
            ..valid_draft()
        };
        assert!(validate_flow_draft(&draft).is_empty());
    }

    #[test]
    fn test_checks_are_additive() {
        let draft = FlowDraft {
            keys: vec![],
            range: PitchRange::new("C6", "C4"),
            tempo: TempoSetting::Single { bpm: 300 },
            ..valid_draft()
        };
        assert_eq!(
            validate_flow_draft(&draft),
            vec![
                FlowDraftError::MissingKeys,
                FlowDraftError::InvalidRange,
                FlowDraftError::InvalidTempo,
            ]
        );
    }

    #[test]
    fn test_range_rules() {
        assert!(is_valid_range(&PitchRange::new("C4", "C4")));
        assert!(is_valid_range(&PitchRange::new("C3", "C7")));
        assert!(!is_valid_range(&PitchRange::new("D4", "C4")));
        assert!(!is_valid_range(&PitchRange::new("C#4", "G5")));
        assert!(!is_valid_range(&PitchRange::new("C4", "")));
        assert!(!is_valid_range(&PitchRange::new("B2", "C4")));
    }

    #[test]
    fn test_single_tempo_bounds() {
        assert!(is_valid_tempo(&TempoSetting::Single { bpm: 40 }));
        assert!(is_valid_tempo(&TempoSetting::Single { bpm: 200 }));
        assert!(!is_valid_tempo(&TempoSetting::Single { bpm: 39 }));
        assert!(!is_valid_tempo(&TempoSetting::Single { bpm: 201 }));
    }

    #[test]
    fn test_range_tempo_rules() {
        assert!(is_valid_tempo(&TempoSetting::Range { min_bpm: 80, max_bpm: 80 }));
        assert!(is_valid_tempo(&TempoSetting::Range { min_bpm: 40, max_bpm: 200 }));
        assert!(!is_valid_tempo(&TempoSetting::Range { min_bpm: 120, max_bpm: 80 }));
        assert!(!is_valid_tempo(&TempoSetting::Range { min_bpm: 30, max_bpm: 80 }));
        assert!(!is_valid_tempo(&TempoSetting::Range { min_bpm: 80, max_bpm: 220 }));
    }

    #[test]
    fn test_inverted_tempo_range_only_reports_tempo() {
        let draft = FlowDraft {
            tempo: TempoSetting::Range { min_bpm: 120, max_bpm: 80 },
            ..valid_draft()
        };
        assert_eq!(validate_flow_draft(&draft), vec![FlowDraftError::InvalidTempo]);
    }
}
