// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale definitions and diatonic spelling.
//!
//! Scales are spelled letter by letter from the tonic, so every degree
//! uses the next note letter and carries whatever accidental is needed
//! to land on the right pitch class (e.g., D major spells F# and C#,
//! never Gb and Db).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::pitch::{accidental_symbol, Letter, SpelledPitch};

/// Seven-note scale types used by practice routines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    Major,        // Ionian
    NaturalMinor, // Aeolian
    HarmonicMinor,
    MelodicMinor, // Ascending form
}

impl ScaleType {
    /// Get the intervals (semitones from root) for this scale type
    pub fn intervals(self) -> [u8; 7] {
        match self {
            ScaleType::Major => [0, 2, 4, 5, 7, 9, 11],
            ScaleType::NaturalMinor => [0, 2, 3, 5, 7, 8, 10],
            ScaleType::HarmonicMinor => [0, 2, 3, 5, 7, 8, 11],
            ScaleType::MelodicMinor => [0, 2, 3, 5, 7, 9, 11],
        }
    }

    /// Scale type used when descending (melodic minor falls back to natural minor)
    pub fn descending(self) -> Self {
        match self {
            ScaleType::MelodicMinor => ScaleType::NaturalMinor,
            other => other,
        }
    }

    /// Get a human-readable name for this scale type
    pub fn name(self) -> &'static str {
        match self {
            ScaleType::Major => "Major",
            ScaleType::NaturalMinor => "Natural Minor",
            ScaleType::HarmonicMinor => "Harmonic Minor",
            ScaleType::MelodicMinor => "Melodic Minor",
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A scale with a spelled tonic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    tonic: Letter,
    tonic_accidental: i8,
    scale_type: ScaleType,
}

impl Scale {
    /// Create a new scale from a spelled tonic and type
    pub fn new(tonic: Letter, tonic_accidental: i8, scale_type: ScaleType) -> Self {
        Self {
            tonic,
            tonic_accidental,
            scale_type,
        }
    }

    /// Get the tonic letter
    pub fn tonic(&self) -> Letter {
        self.tonic
    }

    /// Get the tonic accidental
    pub fn tonic_accidental(&self) -> i8 {
        self.tonic_accidental
    }

    /// Get the scale type
    pub fn scale_type(&self) -> ScaleType {
        self.scale_type
    }

    /// Pitch class of the tonic
    pub fn tonic_pitch_class(&self) -> u8 {
        (self.tonic.pitch_class() as i16 + self.tonic_accidental as i16).rem_euclid(12) as u8
    }

    /// Spelled degrees (letter, accidental) from the tonic upward
    pub fn degrees(&self) -> [(Letter, i8); 7] {
        self.degrees_for(self.scale_type)
    }

    fn degrees_for(&self, scale_type: ScaleType) -> [(Letter, i8); 7] {
        let tonic_pc = self.tonic_pitch_class();
        let intervals = scale_type.intervals();
        let mut degrees = [(Letter::C, 0i8); 7];

        for (i, interval) in intervals.iter().enumerate() {
            let letter = Letter::from_index(self.tonic.index() as usize + i);
            let target = (tonic_pc + interval) % 12;
            let diff = (target as i16 - letter.pitch_class() as i16).rem_euclid(12);
            let accidental = (if diff > 6 { diff - 12 } else { diff }) as i8;
            degrees[i] = (letter, accidental);
        }

        degrees
    }

    /// Ascending run of `count` notes starting on the tonic in `octave`
    pub fn ascending(&self, octave: i8, count: usize) -> Vec<SpelledPitch> {
        self.run(self.scale_type, octave, count)
    }

    /// Descending run of `count` notes ending on the tonic in `octave`
    ///
    /// The run covers the same span as `ascending` but uses the
    /// descending form of the scale.
    pub fn descending(&self, octave: i8, count: usize) -> Vec<SpelledPitch> {
        let mut notes = self.run(self.scale_type.descending(), octave, count);
        notes.reverse();
        notes
    }

    fn run(&self, scale_type: ScaleType, octave: i8, count: usize) -> Vec<SpelledPitch> {
        let degrees = self.degrees_for(scale_type);
        let tonic_index = self.tonic.index() as usize;

        (0..count)
            .map(|n| {
                let (letter, accidental) = degrees[n % 7];
                // Octave numbers change when the letter passes B
                let octave_offset = ((tonic_index + n) / 7).min(i8::MAX as usize) as i8;
                SpelledPitch::new(letter, accidental, octave.saturating_add(octave_offset))
            })
            .collect()
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {}",
            self.tonic,
            accidental_symbol(self.tonic_accidental),
            self.scale_type
        )
    }
}
