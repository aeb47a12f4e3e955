//! Lifeline drawable for sequence diagrams.
//!
//! A lifeline is the vertical dashed line below an actor's name. It stores
//! only its height; the absolute position comes from a
//! [`PositionedDrawable`](crate::draw::PositionedDrawable) wrapper and marks
//! the top end of the line.

use std::rc::Rc;

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::Point,
    semantic::constants::DASH_ARRAY_SIZE,
};

/// Styling configuration for lifelines.
///
/// The default is a light grey (`#CCCCCC`) dashed line, 2px wide, with
/// dashes of [`DASH_ARRAY_SIZE`].
#[derive(Debug, Clone)]
pub struct LifelineDefinition {
    stroke: StrokeDefinition,
}

impl LifelineDefinition {
    pub fn new(stroke: StrokeDefinition) -> Self {
        Self { stroke }
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }
}

impl Default for LifelineDefinition {
    fn default() -> Self {
        let color = Color::new("#CCCCCC").expect("'#CCCCCC' is a valid CSS color");
        Self {
            stroke: StrokeDefinition::dashed(color, 2.0, DASH_ARRAY_SIZE),
        }
    }
}

/// A vertical lifeline of fixed height.
#[derive(Debug, Clone)]
pub struct Lifeline {
    definition: Rc<LifelineDefinition>,
    height: f32,
}

impl Lifeline {
    pub fn new(definition: Rc<LifelineDefinition>, height: f32) -> Self {
        Self { definition, height }
    }
}

impl Drawable for Lifeline {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let line = svg_element::Line::new()
            .set("x1", position.x())
            .set("y1", position.y())
            .set("x2", position.x())
            .set("y2", position.y() + self.height);

        let line = crate::apply_stroke!(line, self.definition.stroke());

        output.add_to_layer(RenderLayer::Lifeline, Box::new(line));
        output
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_default_definition_is_dashed() {
        let definition = LifelineDefinition::default();
        assert_approx_eq!(f32, definition.stroke().width(), 2.0);
        assert_eq!(
            definition.stroke().style().to_svg_value().as_deref(),
            Some("8 8")
        );
    }

    #[test]
    fn test_lifeline_renders_vertical_line() {
        let lifeline = Lifeline::new(Rc::new(LifelineDefinition::default()), 94.0);
        let output = lifeline.render_to_layers(Point::new(110.0, 26.0));
        let svg: String = output.render().iter().map(|n| n.to_string()).collect();

        assert!(svg.contains("data-layer=\"actors\""));
        assert!(svg.contains("x1=\"110\""));
        assert!(svg.contains("x2=\"110\""));
        assert!(svg.contains("y1=\"26\""));
        assert!(svg.contains("y2=\"120\""));
        assert!(svg.contains("stroke-dasharray=\"8 8\""));
    }
}
