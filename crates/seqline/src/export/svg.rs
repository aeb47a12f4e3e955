//! SVG export backend.
//!
//! [`SvgBuilder`] configures an [`Svg`] exporter over any [`io::Write`]
//! target. The document carries the embedded style sheet and the step
//! markers in `<defs>`, a background rectangle, and one `<g data-layer>`
//! group per non-empty rendering layer.

mod sequence;

use std::{io, rc::Rc};

use log::{debug, info};
use svg::{Document, node::element as svg_element};

use seqline_core::{
    color::Color,
    draw::{LayeredOutput, LifelineDefinition, RenderLayer, marker_definitions},
};

use super::{Error, Exporter};
use crate::{config::StyleConfig, layout::Layout};

const DEFAULT_CSS: &str = include_str!("svg/default.css");

const DEFAULT_BACKGROUND: &str = "#FFFFFF";

/// Builder for [`Svg`] exporters.
///
/// # Examples
///
/// ```
/// # use seqline::export::svg::SvgBuilder;
/// let mut buffer = Vec::new();
/// let exporter = SvgBuilder::new(&mut buffer).build().expect("valid style");
/// ```
pub struct SvgBuilder<'a, W: io::Write> {
    writer: W,
    style: Option<&'a StyleConfig>,
}

impl<'a, W: io::Write> SvgBuilder<'a, W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            style: None,
        }
    }

    /// Uses the colors of `style` instead of the defaults.
    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// Builds the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the configured background color cannot
    /// be parsed.
    pub fn build(self) -> Result<Svg<W>, Error> {
        let background = match self.style.map(StyleConfig::background_color).transpose() {
            Ok(Some(Some(color))) => color,
            Ok(_) => Color::new(DEFAULT_BACKGROUND).map_err(Error::Render)?,
            Err(err) => return Err(Error::Render(err)),
        };

        Ok(Svg {
            writer: self.writer,
            background,
            lifeline: Rc::new(LifelineDefinition::default()),
        })
    }
}

/// SVG exporter writing one document per exported layout.
pub struct Svg<W: io::Write> {
    writer: W,
    background: Color,
    lifeline: Rc<LifelineDefinition>,
}

impl<W: io::Write> Svg<W> {
    /// Builds the SVG document for `layout` without writing it.
    pub fn render_document(&self, layout: &Layout) -> Document {
        let width = layout.width();
        let height = layout.height();

        let mut defs = svg_element::Definitions::new().add(svg_element::Style::new(DEFAULT_CSS));
        for marker in marker_definitions() {
            defs = defs.add(marker);
        }

        let mut output = LayeredOutput::new();
        output.add_to_layer(
            RenderLayer::Background,
            Box::new(
                svg_element::Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", width)
                    .set("height", height)
                    .set("fill", self.background),
            ),
        );

        for (actor, x) in layout.lanes() {
            output.merge(self.render_lane(actor, x, layout));
        }
        for section in layout.sections() {
            output.merge(self.render_section(section, layout.vertical_section_text()));
        }
        for step in layout.steps() {
            output.merge(self.render_step(step));
        }

        let mut doc = Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("width", layout.css_width())
            .set("height", layout.css_height())
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("preserveAspectRatio", "xMinYMin meet")
            .add(defs);

        for group in output.render() {
            doc = doc.add(group);
        }

        doc
    }
}

impl<W: io::Write> Exporter for Svg<W> {
    fn export_layout(&mut self, layout: &Layout) -> Result<(), Error> {
        info!(width = layout.width(), height = layout.height(); "Exporting SVG");

        let doc = self.render_document(layout);
        svg::write(&mut self.writer, &doc)?;

        debug!("SVG document written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use seqline_core::{identifier::Id, semantic::Sequence};

    use super::*;

    fn export(layout: &Layout, style: Option<&StyleConfig>) -> String {
        let mut buffer = Vec::new();
        let mut builder = SvgBuilder::new(&mut buffer);
        if let Some(style) = style {
            builder = builder.with_style(style);
        }
        let mut exporter = builder.build().unwrap();
        exporter.export_layout(layout).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn simple_layout() -> Layout {
        let mut sequence = Sequence::new();
        sequence.add_step(Id::new("Bob"), Id::new("Maria"), "Hi", None);
        Layout::resolve(&sequence).unwrap()
    }

    #[test]
    fn test_document_root_attributes() {
        let svg = export(&simple_layout(), None);

        assert!(svg.contains("<svg"));
        assert!(svg.contains("xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.contains("viewBox=\"0 0 400 96\""));
        assert!(svg.contains("preserveAspectRatio=\"xMinYMin meet\""));
        assert!(svg.contains("width=\"100%\""));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn test_defs_carry_style_and_markers() {
        let svg = export(&simple_layout(), None);

        assert!(svg.contains("<defs>"));
        assert!(svg.contains("<style"));
        assert!(svg.contains(".seq-desc"));
        assert!(svg.contains("id=\"seq-dot\""));
        assert!(svg.contains("id=\"seq-arrow\""));
    }

    #[test]
    fn test_layers_in_drawing_order() {
        let svg = export(&simple_layout(), None);

        let background = svg.find("data-layer=\"background\"").unwrap();
        let actors = svg.find("data-layer=\"actors\"").unwrap();
        let steps = svg.find("data-layer=\"steps\"").unwrap();
        assert!(background < actors);
        assert!(actors < steps);
        // No section was opened
        assert!(!svg.contains("data-layer=\"sections\""));
    }

    #[test]
    fn test_invalid_background_color() {
        let style: StyleConfig = toml::from_str("background_color = \"nope\"").unwrap();
        let result = SvgBuilder::new(Vec::new()).with_style(&style).build();
        assert!(matches!(result, Err(Error::Render(_))));
    }

    #[test]
    fn test_configured_background_color() {
        let style: StyleConfig = toml::from_str("background_color = \"red\"").unwrap();
        let default = export(&simple_layout(), None);
        let styled = export(&simple_layout(), Some(&style));
        assert_ne!(default, styled);
    }
}
