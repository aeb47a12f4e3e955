//! Drawable primitives for sequence diagrams.
//!
//! Every element of a rendered diagram is a [`Drawable`]: it knows how to
//! emit SVG nodes for a given position. Nodes are collected
//! in a [`LayeredOutput`] so the exporter can stack them in a fixed z-order
//! regardless of the order in which elements are visited.

mod layer;
mod lifeline;
mod marker;
mod message;
mod positioned;
mod section;
mod stroke;
mod text;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use lifeline::{Lifeline, LifelineDefinition};
pub use marker::{ARROW_MARKER_ID, DOT_MARKER_ID, marker_definitions};
pub use message::{Message, MessageDefinition};
pub use positioned::PositionedDrawable;
pub use section::{LabelOrientation, SectionBox, SectionDefinition};
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use text::{Text, TextAnchor, TextDefinition};

use crate::geometry::Point;

/// An element that can render itself to SVG layers.
pub trait Drawable {
    /// Renders the element with its reference point at `position`.
    fn render_to_layers(&self, position: Point) -> LayeredOutput;
}
