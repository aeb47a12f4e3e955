//! Sections: named, colored groups of consecutive steps.
//!
//! A section moves through an explicit lifecycle:
//!
//! ```text
//! Pending ──first step──▶ Open { first } ──close──▶ Closed { first, last }
//!    │
//!    └──────close before any step──────▶ Empty
//! ```
//!
//! Sections are kept in opening order and never removed, so step records
//! can refer to them by index.

use crate::color::Color;

/// Lifecycle state of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionState {
    /// Opened, no step added since.
    Pending,
    /// Spans steps from `first` onward.
    Open { first: usize },
    /// Spans steps `first..=last`.
    Closed { first: usize, last: usize },
    /// Closed before any step was added; never rendered.
    Empty,
}

/// A named group of steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    name: String,
    color: Color,
    state: SectionState,
}

impl Section {
    pub(crate) fn new(name: String, color: Color) -> Self {
        Self {
            name,
            color,
            state: SectionState::Pending,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn state(&self) -> SectionState {
        self.state
    }

    /// Returns `true` while the section still accepts steps.
    pub fn is_active(&self) -> bool {
        matches!(self.state, SectionState::Pending | SectionState::Open { .. })
    }

    /// Records the index of the first step added after opening.
    pub(crate) fn start_at(&mut self, step_index: usize) {
        if self.state == SectionState::Pending {
            self.state = SectionState::Open { first: step_index };
        }
    }

    /// Closes the section after the step at `last_step`.
    ///
    /// A section that never received a step becomes [`SectionState::Empty`].
    pub(crate) fn close(&mut self, last_step: Option<usize>) {
        self.state = match (self.state, last_step) {
            (SectionState::Open { first }, Some(last)) => SectionState::Closed { first, last },
            (SectionState::Pending, _) => SectionState::Empty,
            (state, _) => state,
        };
    }
}
