//! SVG marker definitions for step arrows.
//!
//! Both markers paint with `context-fill`, so a single pair of definitions
//! serves steps of every color.

use svg::node::element as svg_element;

/// Marker drawn at the source end of a step.
pub const DOT_MARKER_ID: &str = "seq-dot";

/// Marker drawn at the target end of a step.
pub const ARROW_MARKER_ID: &str = "seq-arrow";

fn base_marker(id: &str) -> svg_element::Marker {
    svg_element::Marker::new()
        .set("id", id)
        .set("viewBox", "0 0 10 10")
        .set("refX", 5)
        .set("refY", 5)
        .set("markerWidth", 5)
        .set("markerHeight", 5)
}

/// Returns the dot and arrow-head markers referenced by step lines.
pub fn marker_definitions() -> Vec<svg_element::Marker> {
    let dot = base_marker(DOT_MARKER_ID).add(
        svg_element::Circle::new()
            .set("cx", 5)
            .set("cy", 5)
            .set("r", 3)
            .set("fill", "context-fill"),
    );

    let arrow = base_marker(ARROW_MARKER_ID)
        .set("orient", "auto-start-reverse")
        .add(
            svg_element::Path::new()
                .set("d", "M 0 0 L 10 5 L 0 10 z")
                .set("fill", "context-fill"),
        );

    vec![dot, arrow]
}
