// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Flow drafts: the in-progress configuration built by the wizard.
//!
//! A draft is pure working state. It starts empty, receives partial
//! updates from each wizard screen through [`FlowDraftPatch`], and is
//! normalized and validated only when it is committed.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::catalog::{
    clamp_bpm, Clef, KeySignature, ScaleMode, SlurPatternId, DEFAULT_SINGLE_BPM,
    DEFAULT_TEMPO_RANGE, PITCH_STEPS,
};

/// Catalog index of the default low range step
pub const DEFAULT_LOW_STEP: usize = 4;
/// Catalog index of the default high range step
pub const DEFAULT_HIGH_STEP: usize = 16;

/// Spread applied around a single tempo when switching to range mode
const RANGE_SPREAD_BPM: f64 = 10.0;

/// Low and high pitch labels of the practice range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchRange {
    pub low: String,
    pub high: String,
}

impl PitchRange {
    pub fn new(low: impl Into<String>, high: impl Into<String>) -> Self {
        Self {
            low: low.into(),
            high: high.into(),
        }
    }
}

impl Default for PitchRange {
    fn default() -> Self {
        Self::new(
            PITCH_STEPS[DEFAULT_LOW_STEP].label(),
            PITCH_STEPS[DEFAULT_HIGH_STEP].label(),
        )
    }
}

/// Tempo selection: one fixed tempo or a range to practice across
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TempoSetting {
    Single { bpm: u32 },
    Range { min_bpm: u32, max_bpm: u32 },
}

impl Default for TempoSetting {
    fn default() -> Self {
        TempoSetting::Single {
            bpm: DEFAULT_SINGLE_BPM,
        }
    }
}

impl TempoSetting {
    /// Convert to range mode, spreading a single tempo by +/-10 bpm
    pub fn to_range(self) -> Self {
        match self {
            TempoSetting::Single { bpm } => {
                let low = clamp_bpm(bpm as f64 - RANGE_SPREAD_BPM);
                let high = clamp_bpm(bpm as f64 + RANGE_SPREAD_BPM);
                TempoSetting::Range {
                    min_bpm: low.min(high),
                    max_bpm: low.max(high),
                }
            }
            range => range,
        }
    }

    /// Convert to single mode using the rounded midpoint of a range
    pub fn to_single(self) -> Self {
        match self {
            TempoSetting::Range { min_bpm, max_bpm } => TempoSetting::Single {
                bpm: clamp_bpm((min_bpm as f64 + max_bpm as f64) / 2.0),
            },
            single => single,
        }
    }

    /// Range offered before the user has chosen one
    pub fn default_range() -> Self {
        TempoSetting::Range {
            min_bpm: DEFAULT_TEMPO_RANGE.0,
            max_bpm: DEFAULT_TEMPO_RANGE.1,
        }
    }

    /// Slowest tempo covered by this setting
    pub fn slowest(&self) -> u32 {
        match *self {
            TempoSetting::Single { bpm } => bpm,
            TempoSetting::Range { min_bpm, .. } => min_bpm,
        }
    }
}

impl fmt::Display for TempoSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TempoSetting::Single { bpm } => write!(f, "{} bpm", bpm),
            TempoSetting::Range { min_bpm, max_bpm } => write!(f, "{}-{} bpm", min_bpm, max_bpm),
        }
    }
}

/// The mutable work-in-progress configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowDraft {
    /// Selected key signatures
    pub keys: Vec<KeySignature>,
    /// Selected clef (None until chosen)
    pub clef: Option<Clef>,
    /// Practice range
    pub range: PitchRange,
    /// Selected scale modes
    pub modes: Vec<ScaleMode>,
    /// Tempo setting
    pub tempo: TempoSetting,
    /// Selected articulation patterns
    pub slur_pattern_ids: Vec<SlurPatternId>,
}

impl Default for FlowDraft {
    fn default() -> Self {
        create_empty_flow_draft()
    }
}

/// Create the draft every wizard session starts from
pub fn create_empty_flow_draft() -> FlowDraft {
    FlowDraft {
        keys: Vec::new(),
        clef: None,
        range: PitchRange::default(),
        modes: Vec::new(),
        tempo: TempoSetting::default(),
        slur_pattern_ids: Vec::new(),
    }
}

fn unique<T: Copy + Eq + Hash>(values: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(values.len());
    values.iter().copied().filter(|v| seen.insert(*v)).collect()
}

/// Deduplicate multi-select fields, keeping first occurrences in order
pub fn normalize_flow_draft(draft: &FlowDraft) -> FlowDraft {
    FlowDraft {
        keys: unique(&draft.keys),
        clef: draft.clef,
        range: draft.range.clone(),
        modes: unique(&draft.modes),
        tempo: draft.tempo,
        slur_pattern_ids: unique(&draft.slur_pattern_ids),
    }
}

impl FlowDraft {
    /// Normalized copy of this draft
    pub fn normalized(&self) -> Self {
        normalize_flow_draft(self)
    }

    /// Apply a partial update in place
    ///
    /// Top-level fields present in the patch replace the current value;
    /// the range is merged field by field so a patch carrying only `low`
    /// keeps the current `high`.
    pub fn apply(&mut self, patch: FlowDraftPatch) {
        if let Some(keys) = patch.keys {
            self.keys = keys;
        }
        if let Some(clef) = patch.clef {
            self.clef = clef;
        }
        if let Some(range) = patch.range {
            if let Some(low) = range.low {
                self.range.low = low;
            }
            if let Some(high) = range.high {
                self.range.high = high;
            }
        }
        if let Some(modes) = patch.modes {
            self.modes = modes;
        }
        if let Some(tempo) = patch.tempo {
            self.tempo = tempo;
        }
        if let Some(ids) = patch.slur_pattern_ids {
            self.slur_pattern_ids = ids;
        }
    }

    /// Copy of this draft with a partial update applied
    pub fn merged(&self, patch: FlowDraftPatch) -> Self {
        let mut next = self.clone();
        next.apply(patch);
        next
    }
}

/// Partial update of a range
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangePatch {
    pub low: Option<String>,
    pub high: Option<String>,
}

/// Partial update of a draft; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowDraftPatch {
    pub keys: Option<Vec<KeySignature>>,
    /// `Some(None)` clears the clef
    pub clef: Option<Option<Clef>>,
    pub range: Option<RangePatch>,
    pub modes: Option<Vec<ScaleMode>>,
    pub tempo: Option<TempoSetting>,
    pub slur_pattern_ids: Option<Vec<SlurPatternId>>,
}

impl FlowDraftPatch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: replace keys
    pub fn keys(mut self, keys: impl IntoIterator<Item = KeySignature>) -> Self {
        self.keys = Some(keys.into_iter().collect());
        self
    }

    /// Builder: set the clef
    pub fn clef(mut self, clef: Clef) -> Self {
        self.clef = Some(Some(clef));
        self
    }

    /// Builder: clear the clef
    pub fn clear_clef(mut self) -> Self {
        self.clef = Some(None);
        self
    }

    /// Builder: set the low end of the range
    pub fn range_low(mut self, low: impl Into<String>) -> Self {
        self.range.get_or_insert_with(RangePatch::default).low = Some(low.into());
        self
    }

    /// Builder: set the high end of the range
    pub fn range_high(mut self, high: impl Into<String>) -> Self {
        self.range.get_or_insert_with(RangePatch::default).high = Some(high.into());
        self
    }

    /// Builder: replace modes
    pub fn modes(mut self, modes: impl IntoIterator<Item = ScaleMode>) -> Self {
        self.modes = Some(modes.into_iter().collect());
        self
    }

    /// Builder: set the tempo
    pub fn tempo(mut self, tempo: TempoSetting) -> Self {
        self.tempo = Some(tempo);
        self
    }

    /// Builder: replace slur patterns
    pub fn slur_patterns(mut self, ids: impl IntoIterator<Item = SlurPatternId>) -> Self {
        self.slur_pattern_ids = Some(ids.into_iter().collect());
        self
    }
}

impl From<FlowDraft> for FlowDraftPatch {
    /// A patch that replaces every field of the target draft
    fn from(draft: FlowDraft) -> Self {
        Self {
            keys: Some(draft.keys),
            clef: Some(draft.clef),
            range: Some(RangePatch {
                low: Some(draft.range.low),
                high: Some(draft.range.high),
            }),
            modes: Some(draft.modes),
            tempo: Some(draft.tempo),
            slur_pattern_ids: Some(draft.slur_pattern_ids),
        }
    }
}
