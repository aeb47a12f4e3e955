//! SVG rendering of lanes, sections and steps.

use std::{io, rc::Rc};

use seqline_core::{
    color::Color,
    draw::{
        Drawable as _, LabelOrientation, LayeredOutput, Lifeline, Message, MessageDefinition,
        PositionedDrawable, RenderLayer, SectionBox, SectionDefinition, Text,
        TextAnchor, TextDefinition,
    },
    geometry::Point,
    identifier::Id,
    semantic::constants::{ACTOR_FONT_SIZE, DASH_ARRAY_SIZE, HEADER_HEIGHT},
};

use super::Svg;
use crate::layout::{Layout, PlacedSection, PlacedStep};

impl<W: io::Write> Svg<W> {
    /// Renders an actor name and its dashed lifeline down to the canvas
    /// bottom.
    pub fn render_lane(&self, actor: Id, x: f32, layout: &Layout) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let mut label = TextDefinition::new(ACTOR_FONT_SIZE as u16);
        label.set_color(Some(Color::default()));
        label.set_anchor(TextAnchor::Middle);
        label.set_layer(RenderLayer::Lifeline);
        let name = actor.to_string();
        output.merge(Text::new(&label, name).render_to_layers(Point::new(x, HEADER_HEIGHT as f32)));

        let top = (HEADER_HEIGHT + DASH_ARRAY_SIZE) as f32;
        let height = (layout.height() as f32 - top).max(0.0);
        let lifeline = Lifeline::new(Rc::clone(&self.lifeline), height);
        output.merge(lifeline.render_to_layers(Point::new(x, top)));

        output
    }

    /// Renders a section box with its label.
    pub fn render_section(&self, section: &PlacedSection, vertical_text: bool) -> LayeredOutput {
        let orientation = if vertical_text {
            LabelOrientation::Vertical
        } else {
            LabelOrientation::Horizontal
        };
        let bounds = section.bounds();
        let definition = SectionDefinition::new(section.color(), orientation);

        PositionedDrawable::new(SectionBox::new(definition, section.name(), bounds.to_size()))
            .with_position(bounds.min_point())
            .render_to_layers()
    }

    /// Renders a step arrow (or self-call dot) with its description.
    pub fn render_step(&self, step: &PlacedStep) -> LayeredOutput {
        let message = Message::new(
            MessageDefinition::new(step.color()),
            step.x2() - step.x1(),
            step.description(),
        );

        message.render_to_layers(Point::new(step.x1(), step.y()))
    }
}
