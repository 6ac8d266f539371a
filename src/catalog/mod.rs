// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Option catalogs for flow configuration.
//!
//! Closed, ordered sets of the values a flow draft may select from:
//! - Key signatures, clefs and scale modes
//! - Slur (articulation) patterns over the reference rhythm
//! - Pitch steps used as the domain of the range sliders
//! - Tempo bounds and named tempo bands

pub mod options;
pub mod steps;

pub use options::{Clef, KeySignature, ScaleMode};
pub use steps::{
    pitch_step_index, slider_index, PitchStep, SlurPattern, SlurPatternId, PITCH_STEPS,
    REFERENCE_RHYTHM_LEN, SLUR_PATTERNS,
};

/// Slowest selectable tempo
pub const MIN_BPM: u32 = 40;
/// Fastest selectable tempo
pub const MAX_BPM: u32 = 200;
/// Tempo of a freshly created draft
pub const DEFAULT_SINGLE_BPM: u32 = 96;
/// Range offered when switching to range mode without a previous range
pub const DEFAULT_TEMPO_RANGE: (u32, u32) = (88, 124);

/// Round a slider value and clamp it into [MIN_BPM, MAX_BPM]
pub fn clamp_bpm(value: f64) -> u32 {
    if value.is_nan() {
        return MIN_BPM;
    }
    value.round().clamp(MIN_BPM as f64, MAX_BPM as f64) as u32
}

/// A named tempo marking shown alongside the tempo slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TempoBand {
    pub name: &'static str,
    pub min: u32,
    pub max: u32,
}

impl TempoBand {
    /// Check if a tempo falls within this band (inclusive)
    pub fn contains(&self, bpm: u32) -> bool {
        bpm >= self.min && bpm <= self.max
    }
}

/// Tempo bands in ascending order; bands may touch or leave gaps
pub const TEMPO_BANDS: [TempoBand; 4] = [
    TempoBand { name: "Largo", min: 40, max: 60 },
    TempoBand { name: "Andante", min: 76, max: 108 },
    TempoBand { name: "Allegro", min: 120, max: 168 },
    TempoBand { name: "Presto", min: 168, max: 200 },
];

/// First band containing `bpm`, if any
pub fn tempo_band(bpm: u32) -> Option<&'static TempoBand> {
    TEMPO_BANDS.iter().find(|band| band.contains(bpm))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tempo_constants() {
        assert_eq!(MIN_BPM, 40);
        assert_eq!(MAX_BPM, 200);
        assert_eq!(DEFAULT_SINGLE_BPM, 96);
        assert!(DEFAULT_SINGLE_BPM >= MIN_BPM && DEFAULT_SINGLE_BPM <= MAX_BPM);
    }

    #[test]
    fn test_clamp_bpm() {
        assert_eq!(clamp_bpm(12.0), 40);
        assert_eq!(clamp_bpm(96.4), 96);
        assert_eq!(clamp_bpm(96.5), 97);
        assert_eq!(clamp_bpm(500.0), 200);
        assert_eq!(clamp_bpm(f64::NAN), 40);
    }

    #[test]
    fn test_tempo_band_lookup() {
        assert_eq!(tempo_band(50).map(|b| b.name), Some("Largo"));
        assert_eq!(tempo_band(96).map(|b| b.name), Some("Andante"));
        assert_eq!(tempo_band(70), None);
        // 168 sits on the boundary; the slower band wins
        assert_eq!(tempo_band(168).map(|b| b.name), Some("Allegro"));
        assert_eq!(tempo_band(200).map(|b| b.name), Some("Presto"));
    }
}
