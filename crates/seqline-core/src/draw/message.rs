//! Step (message) drawable.
//!
//! A message is drawn relative to its source point: the position passed to
//! [`Drawable::render_to_layers`] is the source lane at the step's Y, and
//! the message stores the signed horizontal span to the target lane. A span
//! of zero is a self call and renders as a dot.

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{
        ARROW_MARKER_ID, DOT_MARKER_ID, Drawable, LayeredOutput, RenderLayer, StrokeDefinition,
        Text, TextAnchor, TextDefinition,
    },
    geometry::Point,
    semantic::constants::{DESCRIPTION_OFFSET, DESCRIPTION_OFFSET_FACTOR},
};

/// Gap left between the arrow head and the target lifeline.
const ARROW_GAP: f32 = 5.0;

/// Radius of the self-call dot.
const SELF_CALL_RADIUS: f32 = 4.0;

/// Styling for one step: a 2px line in the step color and small
/// `seq-desc` description labels.
#[derive(Debug, Clone)]
pub struct MessageDefinition {
    stroke: StrokeDefinition,
    description: TextDefinition,
}

impl MessageDefinition {
    pub fn new(color: Color) -> Self {
        let mut description = TextDefinition::new(10);
        description.set_anchor(TextAnchor::Middle);
        description.set_class("seq-desc");
        description.set_layer(RenderLayer::Step);
        description.set_color(Some(color));

        Self {
            stroke: StrokeDefinition::solid(color, 2.0),
            description,
        }
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn description(&self) -> &TextDefinition {
        &self.description
    }
}

/// A single step between two lanes.
#[derive(Debug, Clone)]
pub struct Message<'a> {
    definition: MessageDefinition,
    span: f32,
    description: &'a [String],
}

impl<'a> Message<'a> {
    /// Creates a message spanning `span` pixels from source to target lane.
    pub fn new(definition: MessageDefinition, span: f32, description: &'a [String]) -> Self {
        Self {
            definition,
            span,
            description,
        }
    }

    pub fn is_self_call(&self) -> bool {
        self.span == 0.0
    }

    fn render_line(&self, position: Point) -> Box<dyn svg::Node> {
        let color = self.definition.stroke().color();

        if self.is_self_call() {
            let dot = svg_element::Circle::new()
                .set("cx", position.x())
                .set("cy", position.y())
                .set("r", SELF_CALL_RADIUS)
                .set("fill", color);
            return Box::new(dot);
        }

        // Stop short of the target lifeline so the arrow head stays visible
        let end_x = if self.span > 0.0 {
            position.x() + self.span - ARROW_GAP
        } else {
            position.x() + self.span + ARROW_GAP
        };

        let line = svg_element::Line::new()
            .set("x1", position.x())
            .set("y1", position.y())
            .set("x2", end_x)
            .set("y2", position.y())
            .set("fill", color)
            .set("marker-start", format!("url(#{DOT_MARKER_ID})"))
            .set("marker-end", format!("url(#{ARROW_MARKER_ID})"));

        Box::new(crate::apply_stroke!(line, self.definition.stroke()))
    }
}

impl Drawable for Message<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Step, self.render_line(position));

        // Last line sits closest to the arrow; earlier lines stack upward.
        let center_x = position
            .midpoint(position.with_x(position.x() + self.span))
            .x();
        let line_step = (DESCRIPTION_OFFSET * DESCRIPTION_OFFSET_FACTOR) as f32;
        let mut offset = DESCRIPTION_OFFSET as f32;
        for line in self.description.iter().rev() {
            // Blank lines keep their slot in the stack but draw nothing
            if !line.is_empty() {
                let text = Text::new(self.definition.description(), line.as_str());
                let anchor = Point::new(center_x, position.y() - offset);
                output.add_to_layer(RenderLayer::Step, Box::new(text.to_svg(anchor)));
            }
            offset += line_step;
        }

        output
    }
}
