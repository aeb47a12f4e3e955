//! Drawables pinned to an absolute position, such as section boxes whose
//! top-left corner comes out of layout.

use crate::{
    draw::{Drawable, LayeredOutput},
    geometry::Point,
};

/// A drawable paired with the point it is rendered at.
#[derive(Debug, Clone)]
pub struct PositionedDrawable<D: Drawable> {
    drawable: D,
    position: Point,
}

impl<D: Drawable> PositionedDrawable<D> {
    /// Wraps `drawable` at the origin.
    pub fn new(drawable: D) -> Self {
        Self {
            drawable,
            position: Point::default(),
        }
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Render the inner drawable at the stored position.
    pub fn render_to_layers(&self) -> LayeredOutput {
        self.drawable.render_to_layers(self.position)
    }
}

impl<D: Drawable> Drawable for PositionedDrawable<D> {
    fn render_to_layers(&self, _position: Point) -> LayeredOutput {
        // The stored position wins over the one passed in
        self.render_to_layers()
    }
}
