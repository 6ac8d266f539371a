// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Spelled pitches and pitch labels.
//!
//! A pitch label is a letter, an optional accidental and an octave
//! (e.g., "C4", "F#3", "Bb5"). Octaves follow the MIDI convention
//! where middle C is C4 = 60.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when parsing a pitch label
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PitchLabelError {
    #[error("pitch label is empty")]
    Empty,
    #[error("unknown note letter in pitch label {0:?}")]
    UnknownLetter(String),
    #[error("invalid accidental in pitch label {0:?}")]
    InvalidAccidental(String),
    #[error("missing or invalid octave in pitch label {0:?}")]
    InvalidOctave(String),
}

/// Natural note letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// All letters in ascending order within an octave
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Position within the octave (C = 0, B = 6)
    pub fn index(self) -> u8 {
        match self {
            Letter::C => 0,
            Letter::D => 1,
            Letter::E => 2,
            Letter::F => 3,
            Letter::G => 4,
            Letter::A => 5,
            Letter::B => 6,
        }
    }

    /// Letter at a position, wrapping every seven steps
    pub fn from_index(index: usize) -> Self {
        Letter::ALL[index % 7]
    }

    /// Pitch class (0-11) of the natural note
    pub fn pitch_class(self) -> u8 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// Parse an uppercase letter
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Letter::C => "C",
            Letter::D => "D",
            Letter::E => "E",
            Letter::F => "F",
            Letter::G => "G",
            Letter::A => "A",
            Letter::B => "B",
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Textual form of an accidental offset in semitones (-2..=2)
pub fn accidental_symbol(accidental: i8) -> &'static str {
    match accidental {
        2 => "##",
        1 => "#",
        -1 => "b",
        -2 => "bb",
        _ => "",
    }
}

/// A pitch spelled as letter + accidental + octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpelledPitch {
    /// Note letter
    pub letter: Letter,
    /// Accidental in semitones (-2 = double flat, 2 = double sharp)
    pub accidental: i8,
    /// Octave of the letter (MIDI convention, C4 = middle C)
    pub octave: i8,
}

impl SpelledPitch {
    /// Create a spelled pitch
    pub fn new(letter: Letter, accidental: i8, octave: i8) -> Self {
        Self {
            letter,
            accidental,
            octave,
        }
    }

    /// Create a natural (unaltered) pitch
    pub fn natural(letter: Letter, octave: i8) -> Self {
        Self::new(letter, 0, octave)
    }

    /// Parse a label like "C4", "F#3" or "Bb5"
    pub fn parse(label: &str) -> Result<Self, PitchLabelError> {
        let mut chars = label.chars().peekable();

        let first = chars.next().ok_or(PitchLabelError::Empty)?;
        let letter =
            Letter::from_char(first).ok_or_else(|| PitchLabelError::UnknownLetter(label.to_string()))?;

        let mut accidental: i8 = 0;
        while let Some(&c) = chars.peek() {
            let step = match c {
                '#' => 1,
                'b' => -1,
                _ => break,
            };
            // Mixed or triple accidentals are rejected
            if (accidental != 0 && accidental.signum() != step) || accidental.abs() == 2 {
                return Err(PitchLabelError::InvalidAccidental(label.to_string()));
            }
            accidental += step;
            chars.next();
        }

        let rest: String = chars.collect();
        if rest.is_empty() || !rest.chars().all(|c| c.is_ascii_digit()) {
            return Err(PitchLabelError::InvalidOctave(label.to_string()));
        }
        let octave: i8 = rest
            .parse()
            .map_err(|_| PitchLabelError::InvalidOctave(label.to_string()))?;

        Ok(Self::new(letter, accidental, octave))
    }

    /// Label form, e.g. "F#3"
    pub fn label(&self) -> String {
        format!("{}{}{}", self.letter, accidental_symbol(self.accidental), self.octave)
    }

    /// Notation key form, e.g. "f#/3"
    pub fn notation_key(&self) -> String {
        format!(
            "{}{}/{}",
            self.letter.as_str().to_lowercase(),
            accidental_symbol(self.accidental),
            self.octave
        )
    }

    /// MIDI note number (may fall outside 0-127 for extreme octaves)
    pub fn midi(&self) -> i16 {
        (self.octave as i16 + 1) * 12 + self.letter.pitch_class() as i16 + self.accidental as i16
    }

    /// Pitch class (0-11) after applying the accidental
    pub fn pitch_class(&self) -> u8 {
        (self.letter.pitch_class() as i16 + self.accidental as i16).rem_euclid(12) as u8
    }

    /// The same letter and octave with the accidental removed
    pub fn natural_step(&self) -> Self {
        Self::natural(self.letter, self.octave)
    }
}

impl FromStr for SpelledPitch {
    type Err = PitchLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SpelledPitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
