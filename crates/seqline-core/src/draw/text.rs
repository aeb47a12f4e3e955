//! Single-line text labels.
//!
//! - [`TextDefinition`] - Reusable text style configuration
//! - [`Text`] - A label combining content with a [`TextDefinition`]
//!
//! Multi-line content is split by the callers (step descriptions stack one
//! [`Text`] per line), so a [`Text`] always renders as one `<text>` element.

use svg::{self, node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::Point,
};

/// Horizontal alignment of a label relative to its position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
}

impl TextAnchor {
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
        }
    }
}

/// Visual style of a label.
///
/// | Property | Default |
/// |----------|---------|
/// | Font size | `10` |
/// | Color | `None` (SVG default) |
/// | Anchor | [`TextAnchor::Middle`] |
/// | CSS class | `None` |
/// | Layer | [`RenderLayer::Step`] |
#[derive(Debug, Clone)]
pub struct TextDefinition {
    font_size: u16,
    color: Option<Color>,
    anchor: TextAnchor,
    class: Option<&'static str>,
    layer: RenderLayer,
}

impl TextDefinition {
    pub fn new(font_size: u16) -> Self {
        Self {
            font_size,
            ..Self::default()
        }
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    pub fn class(&self) -> Option<&'static str> {
        self.class
    }

    /// Layer the label is emitted to when rendered on its own.
    pub fn layer(&self) -> RenderLayer {
        self.layer
    }

    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    pub fn set_anchor(&mut self, anchor: TextAnchor) {
        self.anchor = anchor;
    }

    pub fn set_class(&mut self, class: &'static str) {
        self.class = Some(class);
    }

    pub fn set_layer(&mut self, layer: RenderLayer) {
        self.layer = layer;
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_size: 10,
            color: None,
            anchor: TextAnchor::default(),
            class: None,
            layer: RenderLayer::Step,
        }
    }
}

/// A label positioned at its baseline anchor point.
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: String,
}

impl<'a> Text<'a> {
    pub fn new(definition: &'a TextDefinition, content: impl Into<String>) -> Self {
        Self {
            definition,
            content: content.into(),
        }
    }

    /// Builds the SVG `<text>` element for this label at `position`.
    ///
    /// The content is stored as a text node, so markup characters are
    /// escaped on output.
    pub fn to_svg(&self, position: Point) -> svg_element::Text {
        let mut text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set("font-size", self.definition.font_size())
            .set("text-anchor", self.definition.anchor().to_svg_value());

        if let Some(color) = self.definition.color() {
            text = text.set("fill", color.to_string());
        }
        if let Some(class) = self.definition.class() {
            text = text.set("class", class);
        }

        text.add(SvgText::new(self.content.as_str()))
    }
}

impl Drawable for Text<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        output.add_to_layer(self.definition.layer(), Box::new(self.to_svg(position)));
        output
    }
}
