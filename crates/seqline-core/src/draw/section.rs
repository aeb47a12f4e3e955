//! Section box drawable.
//!
//! A section is a translucent rectangle behind a run of steps, labelled
//! with the section name either above its top edge or written vertically
//! along its left edge.

use svg::node::{Text as SvgText, element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition, Text, TextAnchor, TextDefinition},
    geometry::{Point, Size},
};

const FILL_OPACITY: f32 = 0.1;
const LABEL_FONT_SIZE: u16 = 10;
/// Space reserved between a horizontal label and the box.
const HORIZONTAL_LABEL_GAP: f32 = 2.0;
/// Distance of a vertical label from the left edge.
const VERTICAL_LABEL_GAP: f32 = 4.0;

/// Placement of the section name.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LabelOrientation {
    /// Above the top-left corner
    #[default]
    Horizontal,
    /// Top-to-bottom along the left edge
    Vertical,
}

/// Styling for one section: 1px border, fill at 10% opacity and a label in
/// the section color.
#[derive(Debug, Clone)]
pub struct SectionDefinition {
    stroke: StrokeDefinition,
    label: TextDefinition,
    orientation: LabelOrientation,
}

impl SectionDefinition {
    pub fn new(color: Color, orientation: LabelOrientation) -> Self {
        let mut label = TextDefinition::new(LABEL_FONT_SIZE);
        label.set_color(Some(color));
        label.set_anchor(TextAnchor::Start);
        label.set_layer(RenderLayer::Section);

        Self {
            stroke: StrokeDefinition::solid(color, 1.0),
            label,
            orientation,
        }
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn orientation(&self) -> LabelOrientation {
        self.orientation
    }
}

/// A named section rectangle.
///
/// The position passed to [`Drawable::render_to_layers`] is the top-left
/// corner resolved by layout; a horizontal label claims a thin strip at the
/// top of that area.
#[derive(Debug, Clone)]
pub struct SectionBox {
    definition: SectionDefinition,
    name: String,
    size: Size,
}

impl SectionBox {
    pub fn new(definition: SectionDefinition, name: impl Into<String>, size: Size) -> Self {
        Self {
            definition,
            name: name.into(),
            size,
        }
    }

    fn render_vertical_label(&self, position: Point) -> svg_element::Text {
        let pivot_x = (position.x() - VERTICAL_LABEL_GAP).trunc();
        let pivot_y = position.y().trunc();
        let label_y = position.y() - (self.size.height() / 2.0).trunc();

        svg_element::Text::new("")
            .set("x", position.x())
            .set("y", label_y)
            .set("fill", self.definition.stroke().color())
            .set("font-size", LABEL_FONT_SIZE)
            .set("writing-mode", "tb")
            .set("text-anchor", "middle")
            .set("transform", format!("rotate(180, {pivot_x}, {pivot_y})"))
            .add(SvgText::new(self.name.as_str()))
    }
}

impl Drawable for SectionBox {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let (box_position, box_height) = match self.definition.orientation() {
            LabelOrientation::Horizontal => {
                let label = Text::new(&self.definition.label, self.name.as_str());
                output.merge(label.render_to_layers(position));
                (
                    position.with_y(position.y() + HORIZONTAL_LABEL_GAP),
                    self.size.height() - 2.0 * HORIZONTAL_LABEL_GAP,
                )
            }
            LabelOrientation::Vertical => {
                output.add_to_layer(
                    RenderLayer::Section,
                    Box::new(self.render_vertical_label(position)),
                );
                (position, self.size.height())
            }
        };

        let rect = svg_element::Rectangle::new()
            .set("x", box_position.x())
            .set("y", box_position.y())
            .set("width", self.size.width())
            .set("height", box_height)
            .set("fill", self.definition.stroke().color())
            .set("fill-opacity", FILL_OPACITY);
        let rect = crate::apply_stroke!(rect, self.definition.stroke());

        output.add_to_layer(RenderLayer::Section, Box::new(rect));
        output
    }
}
