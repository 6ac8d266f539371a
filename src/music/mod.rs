// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory utilities for scaleflow.
//!
//! This module provides spelled pitches, pitch-label parsing and
//! diatonic scale spelling used by the option catalogs and the
//! practice exercise builder.

pub mod pitch;
pub mod scale;

pub use pitch::{Letter, PitchLabelError, SpelledPitch};
pub use scale::{Scale, ScaleType};
