//! Layout resolution for sequence diagrams.
//!
//! [`Layout::resolve`] turns a fully built [`Sequence`] into concrete
//! coordinates in a single pass:
//!
//! 1. every actor gets a lane at a fixed horizontal distance from its
//!    neighbours, in registry order;
//! 2. every step gets its two end points from the lanes of its actors;
//! 3. every section that received steps gets a box folded from the
//!    footprints of its member steps;
//! 4. the canvas is sized from the lane count and the total step height.
//!
//! The sequence is only borrowed, so resolving the same sequence twice
//! yields the same layout.

mod section;

pub use section::PlacedSection;

use indexmap::IndexMap;
use log::{debug, info, trace};
use thiserror::Error;

use seqline_core::{
    color::Color,
    identifier::Id,
    semantic::{
        SectionState, Sequence,
        constants::{DASH_ARRAY_SIZE, HEADER_HEIGHT, MARGIN},
    },
};

use section::{SectionExtent, StepFootprint};

/// Reasons a sequence cannot be laid out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("sequence has no actors")]
    NoActors,

    #[error("sequence has no steps")]
    NoSteps,

    /// `position` is 1-based.
    #[error("step #{position} defined an actor with an empty name")]
    InvalidStep { position: usize },

    #[error("found open section: {name}")]
    UnclosedSection { name: String },
}

/// A step with its resolved end points.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedStep {
    x1: f32,
    x2: f32,
    y: f32,
    color: Color,
    description: Vec<String>,
}

impl PlacedStep {
    /// Lane of the source actor.
    pub fn x1(&self) -> f32 {
        self.x1
    }

    /// Lane of the target actor.
    pub fn x2(&self) -> f32 {
        self.x2
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn description(&self) -> &[String] {
        &self.description
    }

    /// Returns `true` when source and target share a lane.
    pub fn is_self_call(&self) -> bool {
        self.x1 == self.x2
    }
}

/// Resolved geometry of a sequence diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    lanes: IndexMap<Id, f32>,
    steps: Vec<PlacedStep>,
    sections: Vec<PlacedSection>,
    width: u32,
    height: u32,
    css_width: String,
    css_height: String,
    vertical_section_text: bool,
}

impl Layout {
    /// Computes the layout of `sequence`.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] when the sequence has no actors or no
    /// steps, when a step names an empty actor, or when a section that
    /// received steps was never closed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seqline::layout::Layout;
    /// # use seqline_core::{identifier::Id, semantic::Sequence};
    /// let mut sequence = Sequence::new();
    /// sequence.add_step(Id::new("Bob"), Id::new("Maria"), "Hi", None);
    ///
    /// let layout = Layout::resolve(&sequence).expect("valid sequence");
    /// assert_eq!(layout.lane_x(Id::new("Bob")), Some(110.0));
    /// assert_eq!(layout.lane_x(Id::new("Maria")), Some(290.0));
    /// assert_eq!(layout.width(), 400);
    /// assert_eq!(layout.height(), 96);
    /// ```
    pub fn resolve(sequence: &Sequence) -> Result<Self, LayoutError> {
        info!(
            actors = sequence.actors().len(),
            steps = sequence.steps().len();
            "Resolving layout"
        );

        validate(sequence)?;

        let options = sequence.options();
        let distance = options.distance();
        let base = options.step_height();

        let lanes: IndexMap<Id, f32> = sequence
            .actors()
            .iter()
            .enumerate()
            .map(|(i, actor)| (actor, lane_x(i, distance)))
            .collect();

        let mut extents: Vec<Option<SectionExtent>> = vec![None; sequence.sections().len()];
        let mut steps = Vec::with_capacity(sequence.steps().len());

        for (index, step) in sequence.steps().iter().enumerate() {
            let (Some(&x1), Some(&x2)) = (lanes.get(&step.source()), lanes.get(&step.target()))
            else {
                return Err(LayoutError::InvalidStep { position: index + 1 });
            };

            if let Some(section) = step.section() {
                let footprint = StepFootprint {
                    x1,
                    x2,
                    y: step.y(),
                    height: step.height(base),
                };
                let extent = &mut extents[section];
                *extent = Some(SectionExtent::fold(*extent, footprint, distance, base));
            }

            steps.push(PlacedStep {
                x1,
                x2,
                y: step.y(),
                color: step.color(),
                description: step.description().to_vec(),
            });
        }

        let sections: Vec<PlacedSection> = sequence
            .sections()
            .iter()
            .zip(extents)
            .filter_map(|(section, extent)| match (section.state(), extent) {
                (SectionState::Closed { .. }, Some(extent)) => Some(PlacedSection::new(
                    section.name(),
                    section.color(),
                    extent.to_bounds(),
                )),
                (state, _) => {
                    trace!(section = section.name(), state:?; "Section has no box");
                    None
                }
            })
            .collect();

        let width = canvas_width(lanes.len(), distance);
        let height = canvas_height(sequence.steps().iter().map(|step| step.height(base)), base);

        debug!(
            width,
            height,
            sections = sections.len();
            "Layout resolved"
        );

        Ok(Self {
            lanes,
            steps,
            sections,
            width,
            height,
            css_width: options.width().to_string(),
            css_height: options.height().to_string(),
            vertical_section_text: options.vertical_section_text(),
        })
    }

    /// Actors with their lane X, in left-to-right order.
    pub fn lanes(&self) -> impl Iterator<Item = (Id, f32)> + '_ {
        self.lanes.iter().map(|(id, x)| (*id, *x))
    }

    pub fn lane_x(&self, actor: Id) -> Option<f32> {
        self.lanes.get(&actor).copied()
    }

    pub fn steps(&self) -> &[PlacedStep] {
        &self.steps
    }

    /// Section boxes in opening order.
    pub fn sections(&self) -> &[PlacedSection] {
        &self.sections
    }

    /// Canvas width in user units (the `viewBox` width).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in user units, a multiple of [`DASH_ARRAY_SIZE`].
    pub fn height(&self) -> u32 {
        self.height
    }

    /// CSS width of the SVG element.
    pub fn css_width(&self) -> &str {
        &self.css_width
    }

    /// CSS height of the SVG element.
    pub fn css_height(&self) -> &str {
        &self.css_height
    }

    pub fn vertical_section_text(&self) -> bool {
        self.vertical_section_text
    }
}

fn validate(sequence: &Sequence) -> Result<(), LayoutError> {
    if sequence.actors().is_empty() {
        return Err(LayoutError::NoActors);
    }
    if sequence.steps().is_empty() {
        return Err(LayoutError::NoSteps);
    }

    if let Some(index) = sequence
        .steps()
        .iter()
        .position(|step| step.source().is_empty() || step.target().is_empty())
    {
        return Err(LayoutError::InvalidStep { position: index + 1 });
    }

    if let Some(section) = sequence
        .sections()
        .iter()
        .find(|section| matches!(section.state(), SectionState::Open { .. }))
    {
        return Err(LayoutError::UnclosedSection {
            name: section.name().to_string(),
        });
    }

    Ok(())
}

/// X of the lane at `index`; the half distance is an integer division.
fn lane_x(index: usize, distance: u32) -> f32 {
    (MARGIN + distance / 2) as f32 + index as f32 * distance as f32
}

/// Canvas totals saturate at `u32::MAX` instead of wrapping.
fn canvas_width(lane_count: usize, distance: u32) -> u32 {
    let lane_count = u32::try_from(lane_count).unwrap_or(u32::MAX);
    distance.saturating_mul(lane_count).saturating_add(2 * MARGIN)
}

/// Header, every step and half a base step below the last one, rounded up
/// so the lifeline dashes end on a full period.
fn canvas_height(step_heights: impl Iterator<Item = u32>, base_step_height: u32) -> u32 {
    let height = step_heights
        .fold(HEADER_HEIGHT, u32::saturating_add)
        .saturating_add(base_step_height / 2);
    height.div_ceil(DASH_ARRAY_SIZE).saturating_mul(DASH_ARRAY_SIZE)
}
