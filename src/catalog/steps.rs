// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch steps and slur patterns.
//!
//! Pitch steps are the natural notes from C3 up to C7, the index domain
//! of the range sliders. Slur patterns group notes of the fixed 14-note
//! reference rhythm into slurred spans.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::music::{Letter, SpelledPitch};

/// Number of notes in the reference rhythm the slur spans index into
pub const REFERENCE_RHYTHM_LEN: usize = 14;

/// One natural pitch in the range catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PitchStep {
    pub letter: Letter,
    pub octave: i8,
}

impl PitchStep {
    /// Label used in drafts, e.g. "G3"
    pub fn label(&self) -> String {
        self.pitch().label()
    }

    /// Notation key, e.g. "g/3"
    pub fn notation_key(&self) -> String {
        self.pitch().notation_key()
    }

    pub fn pitch(&self) -> SpelledPitch {
        SpelledPitch::natural(self.letter, self.octave)
    }
}

impl fmt::Display for PitchStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.octave)
    }
}

const PITCH_STEP_COUNT: usize = 29;

/// Every selectable range step, strictly ascending
pub const PITCH_STEPS: [PitchStep; PITCH_STEP_COUNT] = build_pitch_steps();

const fn build_pitch_steps() -> [PitchStep; PITCH_STEP_COUNT] {
    let mut steps = [PitchStep {
        letter: Letter::C,
        octave: 3,
    }; PITCH_STEP_COUNT];
    let mut i = 0;
    // C3..B6 followed by a lone C7
    while i < PITCH_STEP_COUNT {
        steps[i] = PitchStep {
            letter: Letter::ALL[i % 7],
            octave: 3 + (i / 7) as i8,
        };
        i += 1;
    }
    steps
}

/// Catalog index of an exact step label ("C#4" and "c4" do not match)
pub fn pitch_step_index(label: &str) -> Option<usize> {
    PITCH_STEPS.iter().position(|step| step.label() == label)
}

/// Slider position for any pitch label: the index of its natural step
///
/// Labels with accidentals sit on the step of their letter; labels that
/// cannot be placed fall back to `fallback`.
pub fn slider_index(label: &str, fallback: usize) -> usize {
    SpelledPitch::parse(label)
        .ok()
        .and_then(|pitch| pitch_step_index(&pitch.natural_step().label()))
        .unwrap_or(fallback)
}

/// Identifiers of the predefined articulation patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlurPatternId {
    #[serde(rename = "full-phrase")]
    FullPhrase,
    #[serde(rename = "every-beat")]
    EveryBeat,
    #[serde(rename = "tongue-1-slur-3")]
    Tongue1Slur3,
}

impl SlurPatternId {
    pub const ALL: [SlurPatternId; 3] = [
        SlurPatternId::FullPhrase,
        SlurPatternId::EveryBeat,
        SlurPatternId::Tongue1Slur3,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SlurPatternId::FullPhrase => "full-phrase",
            SlurPatternId::EveryBeat => "every-beat",
            SlurPatternId::Tongue1Slur3 => "tongue-1-slur-3",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.as_str() == s.trim())
    }

    /// The pattern definition for this id
    pub fn pattern(self) -> &'static SlurPattern {
        match self {
            SlurPatternId::FullPhrase => &SLUR_PATTERNS[0],
            SlurPatternId::EveryBeat => &SLUR_PATTERNS[1],
            SlurPatternId::Tongue1Slur3 => &SLUR_PATTERNS[2],
        }
    }
}

impl fmt::Display for SlurPatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A slur pattern: inclusive [start, end] note-index spans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlurPattern {
    pub id: SlurPatternId,
    pub spans: &'static [[usize; 2]],
}

impl SlurPattern {
    /// Span covering a note index, if the note is slurred
    pub fn span_containing(&self, index: usize) -> Option<[usize; 2]> {
        self.spans
            .iter()
            .copied()
            .find(|[start, end]| index >= *start && index <= *end)
    }
}

pub const SLUR_PATTERNS: [SlurPattern; 3] = [
    SlurPattern {
        id: SlurPatternId::FullPhrase,
        spans: &[[0, 13]],
    },
    SlurPattern {
        id: SlurPatternId::EveryBeat,
        spans: &[[0, 2], [3, 6], [7, 9], [10, 13]],
    },
    SlurPattern {
        id: SlurPatternId::Tongue1Slur3,
        spans: &[[1, 2], [4, 6], [8, 9], [11, 13]],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_step_bounds() {
        assert_eq!(PITCH_STEPS.len(), 29);
        assert_eq!(PITCH_STEPS[0].label(), "C3");
        assert_eq!(PITCH_STEPS[28].label(), "C7");
        assert_eq!(PITCH_STEPS[27].label(), "B6");
    }

    #[test]
    fn test_default_range_steps() {
        assert_eq!(PITCH_STEPS[4].label(), "G3");
        assert_eq!(PITCH_STEPS[16].label(), "E5");
    }

    #[test]
    fn test_pitch_steps_strictly_ascending() {
        for pair in PITCH_STEPS.windows(2) {
            assert!(pair[0].pitch().midi() < pair[1].pitch().midi());
        }
    }

    #[test]
    fn test_notation_key() {
        assert_eq!(PITCH_STEPS[0].notation_key(), "c/3");
        assert_eq!(PITCH_STEPS[12].notation_key(), "a/4");
    }

    #[test]
    fn test_pitch_step_index() {
        assert_eq!(pitch_step_index("C3"), Some(0));
        assert_eq!(pitch_step_index("C4"), Some(7));
        assert_eq!(pitch_step_index("C#4"), None);
        assert_eq!(pitch_step_index("c4"), None);
        assert_eq!(pitch_step_index("D7"), None);
    }

    #[test]
    fn test_slider_index() {
        assert_eq!(slider_index("C#4", 0), 7);
        assert_eq!(slider_index("Bb3", 0), 6);
        assert_eq!(slider_index("nonsense", 4), 4);
    }

    #[test]
    fn test_slur_spans_within_reference_rhythm() {
        for pattern in SLUR_PATTERNS.iter() {
            assert_eq!(pattern.id.pattern(), pattern);
            for [start, end] in pattern.spans.iter() {
                assert!(start <= end);
                assert!(*end < REFERENCE_RHYTHM_LEN);
            }
        }
    }

    #[test]
    fn test_span_containing() {
        let pattern = SlurPatternId::Tongue1Slur3.pattern();
        assert_eq!(pattern.span_containing(0), None);
        assert_eq!(pattern.span_containing(5), Some([4, 6]));
        assert_eq!(SlurPatternId::FullPhrase.pattern().span_containing(13), Some([0, 13]));
    }

    #[test]
    fn test_slur_pattern_id_parse() {
        assert_eq!(SlurPatternId::parse("every-beat"), Some(SlurPatternId::EveryBeat));
        assert_eq!(SlurPatternId::parse("legato"), None);
    }
}
