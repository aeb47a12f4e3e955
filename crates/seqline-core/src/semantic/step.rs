//! Steps: one interaction between two actors.
//!
//! A step is split into the caller's [`StepRequest`] and the [`Step`]
//! record fixed when the request is appended to a sequence. Horizontal
//! endpoints are not stored here; they depend on the final actor order and
//! are only known after layout.

use crate::{color::Color, identifier::Id, semantic::constants::extra_description_height};

/// What the caller asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct StepRequest {
    source: Id,
    target: Id,
    description: Vec<String>,
    color: Option<Color>,
}

impl StepRequest {
    /// Creates a request from `source` to `target`.
    ///
    /// The description is split on newlines, one entry per rendered line.
    ///
    /// ```
    /// # use seqline_core::{identifier::Id, semantic::StepRequest};
    /// let request = StepRequest::new(Id::new("Bob"), Id::new("Maria"), "Hi\nthere", None);
    /// assert_eq!(request.description(), ["Hi", "there"]);
    /// ```
    pub fn new(source: Id, target: Id, description: &str, color: Option<Color>) -> Self {
        Self {
            source,
            target,
            description: description.split('\n').map(str::to_string).collect(),
            color,
        }
    }

    pub fn source(&self) -> Id {
        self.source
    }

    pub fn target(&self) -> Id {
        self.target
    }

    pub fn description(&self) -> &[String] {
        &self.description
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Height added on top of the base step height by extra description lines.
    pub fn extra_height(&self) -> u32 {
        extra_description_height(self.description.len())
    }
}

/// A request after sequencing: its vertical position, resolved color and
/// the section it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    request: StepRequest,
    color: Color,
    y: f32,
    section: Option<usize>,
}

impl Step {
    pub(crate) fn new(request: StepRequest, default_color: Color, y: f32, section: Option<usize>) -> Self {
        let color = request.color().unwrap_or(default_color);
        Self {
            request,
            color,
            y,
            section,
        }
    }

    pub fn source(&self) -> Id {
        self.request.source()
    }

    pub fn target(&self) -> Id {
        self.request.target()
    }

    pub fn description(&self) -> &[String] {
        self.request.description()
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Baseline of the step line.
    pub fn y(&self) -> f32 {
        self.y
    }

    pub(crate) fn set_y(&mut self, y: f32) {
        self.y = y;
    }

    /// Index of the innermost section open when the step was added.
    pub fn section(&self) -> Option<usize> {
        self.section
    }

    /// Vertical space taken by this step for a given base step height.
    pub fn height(&self, base_step_height: u32) -> u32 {
        base_step_height.saturating_add(self.request.extra_height())
    }
}
