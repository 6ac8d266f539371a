// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Practice sessions for committed flows.
//!
//! A flow expands into one exercise per key, mode and slur pattern. Each
//! exercise can be shown in full (a two-octave scale up and back down)
//! or as the fixed 14-note reference rhythm carrying the slur spans.

pub mod notation;

pub use notation::{NotationRenderer, PracticeRenderOptions, RangeRenderOptions, TextRenderer};

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{
    Clef, KeySignature, ScaleMode, SlurPatternId, PITCH_STEPS, REFERENCE_RHYTHM_LEN,
};
use crate::flow::{normalize_flow_draft, Flow, FlowDraft, TempoSetting};
use crate::music::{Scale, SpelledPitch};

/// Octave used when the range low label cannot be placed
pub const DEFAULT_START_OCTAVE: i8 = 4;

/// Octaves a range low label may sit in to place the exercise
const LOWEST_START_OCTAVE: i8 = PITCH_STEPS[0].octave;
const HIGHEST_START_OCTAVE: i8 = PITCH_STEPS[PITCH_STEPS.len() - 1].octave;

/// Notes in a two-octave ascending run, tonic to tonic
const TWO_OCTAVE_NOTES: usize = 15;

/// Scale degrees of the reference rhythm: up an octave, then back to the second
const RHYTHM_DEGREES: [usize; REFERENCE_RHYTHM_LEN] = [0, 1, 2, 3, 4, 5, 6, 7, 6, 5, 4, 3, 2, 1];

/// How an exercise is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PracticeMode {
    #[default]
    Full,
    Rhythm,
}

impl PracticeMode {
    pub const ALL: [PracticeMode; 2] = [PracticeMode::Full, PracticeMode::Rhythm];

    pub fn as_str(self) -> &'static str {
        match self {
            PracticeMode::Full => "full",
            PracticeMode::Rhythm => "rhythm",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "full" => Some(PracticeMode::Full),
            "rhythm" => Some(PracticeMode::Rhythm),
            _ => None,
        }
    }

    /// Time signature printed on the first stave
    pub fn time_signature(self) -> &'static str {
        match self {
            PracticeMode::Full => "7/4",
            PracticeMode::Rhythm => "4/4",
        }
    }
}

impl fmt::Display for PracticeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Written note value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteDuration {
    Quarter,
    Eighth,
    Sixteenth,
}

impl NoteDuration {
    /// Notation duration code ("q", "8", "16")
    pub fn code(self) -> &'static str {
        match self {
            NoteDuration::Quarter => "q",
            NoteDuration::Eighth => "8",
            NoteDuration::Sixteenth => "16",
        }
    }

    /// Length in sixteenth notes
    pub fn sixteenths(self) -> u32 {
        match self {
            NoteDuration::Quarter => 4,
            NoteDuration::Eighth => 2,
            NoteDuration::Sixteenth => 1,
        }
    }
}

/// A single written note
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeNote {
    pub pitch: SpelledPitch,
    pub duration: NoteDuration,
}

impl PracticeNote {
    pub fn new(pitch: SpelledPitch, duration: NoteDuration) -> Self {
        Self { pitch, duration }
    }
}

/// One key, mode and slur pattern taken from a flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeExercise {
    pub key: KeySignature,
    pub mode: ScaleMode,
    pub slur_pattern: SlurPatternId,
    pub clef: Clef,
    pub tempo: TempoSetting,
    /// Octave of the lowest tonic
    pub start_octave: i8,
}

impl PracticeExercise {
    /// Build an exercise starting on the lowest tonic at or above `range_low`
    pub fn new(
        key: KeySignature,
        mode: ScaleMode,
        slur_pattern: SlurPatternId,
        clef: Clef,
        tempo: TempoSetting,
        range_low: &str,
    ) -> Self {
        let mut exercise = Self {
            key,
            mode,
            slur_pattern,
            clef,
            tempo,
            start_octave: DEFAULT_START_OCTAVE,
        };
        exercise.start_octave = start_octave(&exercise.scale(), range_low);
        exercise
    }

    /// The spelled scale practiced in this exercise
    pub fn scale(&self) -> Scale {
        let (letter, accidental) = self.key.tonic();
        Scale::new(letter, accidental, self.mode.scale_type())
    }

    /// Fifteen sixteenth notes from the low tonic up two octaves
    pub fn ascending_line(&self) -> Vec<PracticeNote> {
        self.scale()
            .ascending(self.start_octave, TWO_OCTAVE_NOTES)
            .into_iter()
            .map(|pitch| PracticeNote::new(pitch, NoteDuration::Sixteenth))
            .collect()
    }

    /// Back down from the top tonic, closing on a quarter-note tonic
    pub fn descending_line(&self) -> Vec<PracticeNote> {
        let pitches = self.scale().descending(self.start_octave, TWO_OCTAVE_NOTES);
        let last = pitches.len().saturating_sub(1);

        pitches
            .into_iter()
            .enumerate()
            .map(|(i, pitch)| {
                let duration = if i == last {
                    NoteDuration::Quarter
                } else {
                    NoteDuration::Sixteenth
                };
                PracticeNote::new(pitch, duration)
            })
            .collect()
    }

    /// The 14-note reference rhythm in this exercise's scale
    ///
    /// Eighth notes fall on the low tonic and the octave; everything
    /// else is a sixteenth.
    pub fn rhythm_line(&self) -> Vec<PracticeNote> {
        let scale = self.scale();
        let up = scale.ascending(self.start_octave, 8);
        // Top tonic first, low tonic last
        let down = scale.descending(self.start_octave, 8);

        RHYTHM_DEGREES
            .iter()
            .enumerate()
            .map(|(i, &degree)| {
                let pitch = if i < up.len() { up[degree] } else { down[7 - degree] };
                let duration = if degree == 0 || degree == 7 {
                    NoteDuration::Eighth
                } else {
                    NoteDuration::Sixteenth
                };
                PracticeNote::new(pitch, duration)
            })
            .collect()
    }

    /// Inclusive note-index spans slurred in the rhythm line
    pub fn slur_spans(&self) -> &'static [[usize; 2]] {
        self.slur_pattern.pattern().spans
    }

    /// Heading such as "Bb Natural Minor (every-beat)"
    pub fn title(&self) -> String {
        format!("{} {} ({})", self.key, self.mode, self.slur_pattern)
    }
}

impl fmt::Display for PracticeExercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title())
    }
}

/// Octave of the lowest tonic at or above the range low label
///
/// Labels that cannot be read or lie outside the catalog octaves use
/// [`DEFAULT_START_OCTAVE`].
fn start_octave(scale: &Scale, range_low: &str) -> i8 {
    let low = match SpelledPitch::parse(range_low) {
        Ok(pitch) if (LOWEST_START_OCTAVE..=HIGHEST_START_OCTAVE).contains(&pitch.octave) => pitch,
        _ => return DEFAULT_START_OCTAVE,
    };
    let (letter, accidental) = (scale.tonic(), scale.tonic_accidental());

    (low.octave - 1..=low.octave + 1)
        .find(|&octave| SpelledPitch::new(letter, accidental, octave).midi() >= low.midi())
        .unwrap_or(DEFAULT_START_OCTAVE)
}

/// Expand a draft configuration into exercises
///
/// Exercises follow config order: keys outermost, then modes, then slur
/// patterns. A configuration without a clef is shown on the treble clef.
pub fn build_exercises_for(config: &FlowDraft) -> Vec<PracticeExercise> {
    let config = normalize_flow_draft(config);
    let clef = config.clef.unwrap_or(Clef::Treble);

    let mut exercises =
        Vec::with_capacity(config.keys.len() * config.modes.len() * config.slur_pattern_ids.len());
    for &key in &config.keys {
        for &mode in &config.modes {
            for &pattern in &config.slur_pattern_ids {
                exercises.push(PracticeExercise::new(
                    key,
                    mode,
                    pattern,
                    clef,
                    config.tempo,
                    &config.range.low,
                ));
            }
        }
    }

    debug!(count = exercises.len(), "practice exercises built");
    exercises
}

/// Expand a committed flow into exercises
pub fn build_exercises(flow: &Flow) -> Vec<PracticeExercise> {
    build_exercises_for(&flow.config)
}
