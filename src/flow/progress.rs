// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Wizard step ordering.
//!
//! Steps only drive the progress indicator. The store accepts draft
//! updates in any order regardless of the current step.

use std::fmt;

/// One screen of the flow-creation wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    ChooseKeys,
    ChooseInstrument,
    ChooseRange,
    ChooseMode,
    ChooseTempo,
    ChooseRhythmAndArticulation,
    NameFlow,
}

impl WizardStep {
    /// Every step in wizard order
    pub const ALL: [WizardStep; 7] = [
        WizardStep::ChooseKeys,
        WizardStep::ChooseInstrument,
        WizardStep::ChooseRange,
        WizardStep::ChooseMode,
        WizardStep::ChooseTempo,
        WizardStep::ChooseRhythmAndArticulation,
        WizardStep::NameFlow,
    ];

    /// Number of wizard steps
    pub const TOTAL: usize = Self::ALL.len();

    /// Zero-based position in the wizard
    pub fn index(self) -> usize {
        self as usize
    }

    /// Route of the screen that hosts this step
    pub fn route(self) -> &'static str {
        match self {
            WizardStep::ChooseKeys => "/choose-keys",
            WizardStep::ChooseInstrument => "/choose-instrument",
            WizardStep::ChooseRange => "/choose-range",
            WizardStep::ChooseMode => "/choose-mode",
            WizardStep::ChooseTempo => "/choose-tempo",
            WizardStep::ChooseRhythmAndArticulation => "/choose-rhythm-and-articulation",
            WizardStep::NameFlow => "/name-flow",
        }
    }

    /// Screen title
    pub fn title(self) -> &'static str {
        match self {
            WizardStep::ChooseKeys => "Choose Keys",
            WizardStep::ChooseInstrument => "Choose Instrument",
            WizardStep::ChooseRange => "Choose Range",
            WizardStep::ChooseMode => "Choose Mode",
            WizardStep::ChooseTempo => "Choose Tempo",
            WizardStep::ChooseRhythmAndArticulation => "Choose Rhythm & Articulation",
            WizardStep::NameFlow => "Name Flow",
        }
    }

    /// Look up a step by its route; a missing leading slash is tolerated
    pub fn from_route(route: &str) -> Option<Self> {
        let route = route.trim();
        let normalized = route.strip_prefix('/').unwrap_or(route);
        Self::ALL
            .iter()
            .copied()
            .find(|step| &step.route()[1..] == normalized)
    }

    /// Look up a step by index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Following step, `None` after the last
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Preceding step, `None` before the first
    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Progress through the wizard as a percentage (first step is 0)
    pub fn percent_complete(self) -> u8 {
        ((self.index() * 100) / (Self::TOTAL - 1)) as u8
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} {}", self.index() + 1, Self::TOTAL, self.title())
    }
}

/// Index of the step hosted at `route`
pub fn step_index_for_route(route: &str) -> Option<usize> {
    WizardStep::from_route(route).map(WizardStep::index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_follow_order() {
        for (i, step) in WizardStep::ALL.iter().enumerate() {
            assert_eq!(step.index(), i);
        }
        assert_eq!(WizardStep::TOTAL, 7);
    }

    #[test]
    fn test_route_lookup() {
        assert_eq!(step_index_for_route("/choose-keys"), Some(0));
        assert_eq!(step_index_for_route("/choose-tempo"), Some(4));
        assert_eq!(step_index_for_route("name-flow"), Some(6));
        assert_eq!(step_index_for_route("/unknown"), None);
        assert_eq!(step_index_for_route(""), None);
    }

    #[test]
    fn test_route_round_trip() {
        for step in WizardStep::ALL {
            assert_eq!(WizardStep::from_route(step.route()), Some(step));
        }
    }

    #[test]
    fn test_navigation() {
        assert_eq!(WizardStep::ChooseKeys.previous(), None);
        assert_eq!(WizardStep::ChooseKeys.next(), Some(WizardStep::ChooseInstrument));
        assert_eq!(WizardStep::ChooseTempo.previous(), Some(WizardStep::ChooseMode));
        assert_eq!(WizardStep::NameFlow.next(), None);
    }

    #[test]
    fn test_percent_complete() {
        assert_eq!(WizardStep::ChooseKeys.percent_complete(), 0);
        assert_eq!(WizardStep::ChooseMode.percent_complete(), 50);
        assert_eq!(WizardStep::NameFlow.percent_complete(), 100);
    }

    #[test]
    fn test_display() {
        assert_eq!(WizardStep::ChooseRange.to_string(), "3/7 Choose Range");
    }
}
