// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Key signature, clef and scale mode catalogs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::music::{Letter, ScaleType};

/// Key signatures offered by the key picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeySignature {
    C,
    G,
    D,
    A,
    E,
    B,
    #[serde(rename = "F#/Gb")]
    FsGb, // Enharmonic pair, spelled as F#
    F,
    Bb,
    Eb,
    Ab,
    Db,
}

impl KeySignature {
    /// All key signatures in picker order
    pub const ALL: [KeySignature; 12] = [
        KeySignature::C,
        KeySignature::G,
        KeySignature::D,
        KeySignature::A,
        KeySignature::E,
        KeySignature::B,
        KeySignature::FsGb,
        KeySignature::F,
        KeySignature::Bb,
        KeySignature::Eb,
        KeySignature::Ab,
        KeySignature::Db,
    ];

    /// Sharp keys, in order of added sharps
    pub const SHARP_KEYS: [KeySignature; 5] = [
        KeySignature::G,
        KeySignature::D,
        KeySignature::A,
        KeySignature::E,
        KeySignature::B,
    ];

    /// Flat keys, in order of added flats
    pub const FLAT_KEYS: [KeySignature; 5] = [
        KeySignature::F,
        KeySignature::Bb,
        KeySignature::Eb,
        KeySignature::Ab,
        KeySignature::Db,
    ];

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            KeySignature::C => "C",
            KeySignature::G => "G",
            KeySignature::D => "D",
            KeySignature::A => "A",
            KeySignature::E => "E",
            KeySignature::B => "B",
            KeySignature::FsGb => "F#/Gb",
            KeySignature::F => "F",
            KeySignature::Bb => "Bb",
            KeySignature::Eb => "Eb",
            KeySignature::Ab => "Ab",
            KeySignature::Db => "Db",
        }
    }

    /// Parse a key label; either half of the enharmonic pair is accepted
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "F#" | "Gb" => Some(KeySignature::FsGb),
            label => Self::ALL.iter().copied().find(|k| k.label() == label),
        }
    }

    /// Spelled tonic (letter, accidental)
    pub fn tonic(self) -> (Letter, i8) {
        match self {
            KeySignature::C => (Letter::C, 0),
            KeySignature::G => (Letter::G, 0),
            KeySignature::D => (Letter::D, 0),
            KeySignature::A => (Letter::A, 0),
            KeySignature::E => (Letter::E, 0),
            KeySignature::B => (Letter::B, 0),
            KeySignature::FsGb => (Letter::F, 1),
            KeySignature::F => (Letter::F, 0),
            KeySignature::Bb => (Letter::B, -1),
            KeySignature::Eb => (Letter::E, -1),
            KeySignature::Ab => (Letter::A, -1),
            KeySignature::Db => (Letter::D, -1),
        }
    }
}

impl fmt::Display for KeySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Staff clefs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Clef {
    #[serde(rename = "Bass Clef")]
    Bass,
    #[serde(rename = "Treble Clef")]
    Treble,
}

impl Clef {
    pub const ALL: [Clef; 2] = [Clef::Bass, Clef::Treble];

    pub fn label(self) -> &'static str {
        match self {
            Clef::Bass => "Bass Clef",
            Clef::Treble => "Treble Clef",
        }
    }

    /// Name understood by the notation renderer
    pub fn notation_name(self) -> &'static str {
        match self {
            Clef::Bass => "bass",
            Clef::Treble => "treble",
        }
    }

    /// Parse a clef from its label or short name
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "bass clef" | "bass" => Some(Clef::Bass),
            "treble clef" | "treble" => Some(Clef::Treble),
            _ => None,
        }
    }
}

impl fmt::Display for Clef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scale modes offered by the mode picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScaleMode {
    Major,
    #[serde(rename = "Natural Minor")]
    NaturalMinor,
    #[serde(rename = "Harmonic Minor")]
    HarmonicMinor,
    #[serde(rename = "Melodic Minor")]
    MelodicMinor,
}

impl ScaleMode {
    pub const ALL: [ScaleMode; 4] = [
        ScaleMode::Major,
        ScaleMode::NaturalMinor,
        ScaleMode::HarmonicMinor,
        ScaleMode::MelodicMinor,
    ];

    pub fn label(self) -> &'static str {
        self.scale_type().name()
    }

    /// Scale type used to spell this mode
    pub fn scale_type(self) -> ScaleType {
        match self {
            ScaleMode::Major => ScaleType::Major,
            ScaleMode::NaturalMinor => ScaleType::NaturalMinor,
            ScaleMode::HarmonicMinor => ScaleType::HarmonicMinor,
            ScaleMode::MelodicMinor => ScaleType::MelodicMinor,
        }
    }

    /// Parse a mode label (case, spaces, dashes and underscores are ignored)
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        match s.as_str() {
            "major" => Some(ScaleMode::Major),
            "naturalminor" | "minor" => Some(ScaleMode::NaturalMinor),
            "harmonicminor" => Some(ScaleMode::HarmonicMinor),
            "melodicminor" => Some(ScaleMode::MelodicMinor),
            _ => None,
        }
    }
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
