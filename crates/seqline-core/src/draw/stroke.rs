//! Stroke definitions shared by lines and borders.
//!
//! | Property | SVG Attribute |
//! |----------|---------------|
//! | `color` | `stroke`, `stroke-opacity` |
//! | `width` | `stroke-width` |
//! | `style` | `stroke-dasharray` |
//!
//! Use [`apply_stroke!`](crate::apply_stroke!) to set all of them on an element.

use crate::color::Color;

/// Line pattern of a stroke.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeStyle {
    /// Solid continuous line
    #[default]
    Solid,
    /// Equal dash and gap of the given length
    Dashed(u32),
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(&self) -> Option<String> {
        match self {
            Self::Solid => None,
            Self::Dashed(unit) => Some(format!("{unit} {unit}")),
        }
    }
}

/// A stroke definition for rendering lines and borders.
///
/// ```
/// use seqline_core::draw::{StrokeDefinition, StrokeStyle};
/// use seqline_core::color::Color;
///
/// let stroke = StrokeDefinition::dashed(Color::new("#CCCCCC").unwrap(), 2.0, 8);
/// assert_eq!(stroke.style().to_svg_value().as_deref(), Some("8 8"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a solid stroke with the given color and width.
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Creates a dashed stroke whose dashes and gaps are `unit` long.
    pub fn dashed(color: Color, width: f32, unit: u32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Dashed(unit),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::solid(Color::default(), 1.0)
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// ```
/// use seqline_core::draw::StrokeDefinition;
/// use seqline_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::solid(Color::new("black").unwrap(), 2.0);
/// let line = svg_element::Line::new().set("x1", 0).set("x2", 10);
/// let line = seqline_core::apply_stroke!(line, &stroke);
/// assert!(line.to_string().contains("stroke-width=\"2\""));
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}

#[cfg(test)]
mod tests {
    use svg::node::element as svg_element;

    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 1.0);
        assert_eq!(stroke.color(), Color::default());
        assert_eq!(*stroke.style(), StrokeStyle::Solid);
    }

    #[test]
    fn test_stroke_style_dasharray() {
        assert_eq!(StrokeStyle::Solid.to_svg_value(), None);
        assert_eq!(StrokeStyle::Dashed(8).to_svg_value(), Some("8 8".to_string()));
    }

    #[test]
    fn test_apply_stroke_solid_has_no_dasharray() {
        let stroke = StrokeDefinition::solid(Color::default(), 1.0);
        let rect = crate::apply_stroke!(svg_element::Rectangle::new(), &stroke).to_string();
        assert!(rect.contains("stroke-width=\"1\""));
        assert!(!rect.contains("stroke-dasharray"));
    }

    #[test]
    fn test_apply_stroke_dashed() {
        let stroke = StrokeDefinition::dashed(Color::default(), 2.0, 8);
        let line = crate::apply_stroke!(svg_element::Line::new(), &stroke).to_string();
        assert!(line.contains("stroke-dasharray=\"8 8\""));
    }
}
