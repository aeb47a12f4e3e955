//! The [`Sequence`] aggregate: actors, steps, sections and display options.

use log::{debug, trace};

use crate::{
    color::Color,
    identifier::Id,
    semantic::{
        ActorRegistry, Section, Step, StepRequest,
        constants::{DEFAULT_DISTANCE, DEFAULT_STEP_HEIGHT, HEADER_HEIGHT},
    },
};

/// Display options of a sequence.
///
/// | Option | Default |
/// |--------|---------|
/// | `width`, `height` | `"100%"` (CSS size of the SVG element) |
/// | `distance` | [`DEFAULT_DISTANCE`] |
/// | `step_height` | [`DEFAULT_STEP_HEIGHT`] |
/// | `vertical_section_text` | `false` |
/// | `default_color` | black |
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceOptions {
    width: String,
    height: String,
    distance: u32,
    step_height: u32,
    vertical_section_text: bool,
    default_color: Color,
}

impl SequenceOptions {
    pub fn width(&self) -> &str {
        &self.width
    }

    pub fn height(&self) -> &str {
        &self.height
    }

    /// Horizontal distance between actor lanes.
    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// Base vertical space of a single-line step.
    pub fn step_height(&self) -> u32 {
        self.step_height
    }

    pub fn vertical_section_text(&self) -> bool {
        self.vertical_section_text
    }

    /// Color used by steps and sections that do not specify one.
    pub fn default_color(&self) -> Color {
        self.default_color
    }

    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = width.into();
        self
    }

    pub fn with_height(mut self, height: impl Into<String>) -> Self {
        self.height = height.into();
        self
    }

    pub fn with_distance(mut self, distance: u32) -> Self {
        self.distance = distance;
        self
    }

    pub fn with_step_height(mut self, step_height: u32) -> Self {
        self.step_height = step_height;
        self
    }

    pub fn with_vertical_section_text(mut self, vertical: bool) -> Self {
        self.vertical_section_text = vertical;
        self
    }

    pub fn with_default_color(mut self, color: Color) -> Self {
        self.default_color = color;
        self
    }
}

impl Default for SequenceOptions {
    fn default() -> Self {
        Self {
            width: "100%".to_string(),
            height: "100%".to_string(),
            distance: DEFAULT_DISTANCE,
            step_height: DEFAULT_STEP_HEIGHT,
            vertical_section_text: false,
            default_color: Color::default(),
        }
    }
}

/// A sequence diagram under construction.
///
/// Steps are sequenced as they are added: each one is placed below the
/// previous one and joins the innermost section open at that moment.
///
/// ```
/// # use seqline_core::{identifier::Id, semantic::Sequence};
/// let mut sequence = Sequence::new();
/// sequence.open_section("Greeting", None);
/// sequence.add_step(Id::new("Bob"), Id::new("Maria"), "Hi", None);
/// sequence.add_step(Id::new("Maria"), Id::new("Bob"), "Hello", None);
/// sequence.close_section();
///
/// assert_eq!(sequence.actors().len(), 2);
/// assert_eq!(sequence.steps()[0].y(), 68.0);
/// assert_eq!(sequence.steps()[1].y(), 118.0);
/// assert_eq!(sequence.steps()[1].section(), Some(0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Sequence {
    actors: ActorRegistry,
    steps: Vec<Step>,
    sections: Vec<Section>,
    options: SequenceOptions,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SequenceOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn actors(&self) -> &ActorRegistry {
        &self.actors
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn options(&self) -> &SequenceOptions {
        &self.options
    }

    /// Moves the named actors to the front, in the given order.
    ///
    /// See [`ActorRegistry::set_order`].
    pub fn set_actor_order(&mut self, ids: impl IntoIterator<Item = Id>) {
        self.actors.set_order(ids);
    }

    /// Appends a step from `source` to `target`.
    ///
    /// `description` may span several lines separated by `\n`; each extra
    /// line makes the step taller. A `None` color uses the default color.
    /// Empty actor names are accepted here and rejected by layout.
    pub fn add_step(&mut self, source: Id, target: Id, description: &str, color: Option<Color>) {
        let request = StepRequest::new(source, target, description, color);
        let index = self.steps.len();

        let previous_y = self
            .steps
            .last()
            .map_or(HEADER_HEIGHT as f32, Step::y);
        let y = previous_y + self.options.step_height.saturating_add(request.extra_height()) as f32;

        let mut section = None;
        for (section_index, candidate) in self.sections.iter_mut().enumerate() {
            if candidate.is_active() {
                candidate.start_at(index);
                section = Some(section_index);
            }
        }

        self.actors.ensure(source);
        self.actors.ensure(target);

        trace!(index, y, section:?; "Sequenced step");
        self.steps
            .push(Step::new(request, self.options.default_color, y, section));
    }

    /// Opens a new section nested inside any section already open.
    ///
    /// Empty names are ignored.
    pub fn open_section(&mut self, name: &str, color: Option<Color>) {
        if name.is_empty() {
            return;
        }
        let color = color.unwrap_or(self.options.default_color);
        debug!(name; "Opened section");
        self.sections.push(Section::new(name.to_string(), color));
    }

    /// Closes the innermost open section.
    ///
    /// A section closed before receiving any step is discarded. Does
    /// nothing when no section is open.
    pub fn close_section(&mut self) {
        let last_step = self.steps.len().checked_sub(1);
        if let Some(section) = self.sections.iter_mut().rev().find(|s| s.is_active()) {
            section.close(last_step);
            debug!(name = section.name(), state:? = section.state(); "Closed section");
        }
    }

    /// Closes every open section.
    pub fn close_all_sections(&mut self) {
        let last_step = self.steps.len().checked_sub(1);
        for section in self.sections.iter_mut().filter(|s| s.is_active()) {
            section.close(last_step);
        }
    }

    pub fn set_width(&mut self, width: impl Into<String>) {
        self.options.width = width.into();
    }

    pub fn set_height(&mut self, height: impl Into<String>) {
        self.options.height = height.into();
    }

    pub fn set_distance(&mut self, distance: u32) {
        self.options.distance = distance;
    }

    /// Changes the base step height and re-sequences existing steps.
    pub fn set_step_height(&mut self, step_height: u32) {
        self.options.step_height = step_height;

        let mut y = HEADER_HEIGHT as f32;
        for step in &mut self.steps {
            y += step.height(step_height) as f32;
            step.set_y(y);
        }
    }

    pub fn set_vertical_section_text(&mut self, vertical: bool) {
        self.options.vertical_section_text = vertical;
    }

    /// Changes the color used by steps and sections added afterwards.
    pub fn set_default_color(&mut self, color: Color) {
        self.options.default_color = color;
    }
}
