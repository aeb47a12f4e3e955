//! Section boxes folded from the footprints of their member steps.

use seqline_core::{
    color::Color,
    geometry::{Bounds, Point, Size},
    semantic::constants::SECTION_HEIGHT_MARGIN,
};

/// A resolved section box.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedSection {
    name: String,
    color: Color,
    bounds: Bounds,
}

impl PlacedSection {
    pub(super) fn new(name: &str, color: Color, bounds: Bounds) -> Self {
        Self {
            name: name.to_string(),
            color,
            bounds,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Full area of the box, before any room is taken for a label.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// What a single step contributes to its section.
#[derive(Debug, Clone, Copy)]
pub(super) struct StepFootprint {
    pub x1: f32,
    pub x2: f32,
    pub y: f32,
    pub height: u32,
}

/// Running extent of a section while its steps are folded in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct SectionExtent {
    horizontal: Bounds,
    height: f32,
}

impl SectionExtent {
    /// Folds `step` into `extent`, starting a new extent if there is none.
    ///
    /// The box starts half a base step above the first member's top edge,
    /// reaches half a lane distance past the outermost lanes and grows by
    /// each member's height.
    pub fn fold(
        extent: Option<Self>,
        step: StepFootprint,
        distance: u32,
        base_step_height: u32,
    ) -> Self {
        let half_distance = (distance / 2) as f32;
        let step_height = step.height as f32;

        let top = (step.y - step_height + base_step_height as f32 / 2.0).max(0.0);
        let left = (step.x1.min(step.x2) - half_distance).max(1.0);
        let right = step.x1.max(step.x2) + half_distance;
        let footprint = Point::new(left, top).to_bounds(Size::new(right - left, 0.0));

        match extent {
            None => Self {
                horizontal: footprint,
                height: SECTION_HEIGHT_MARGIN + step_height,
            },
            Some(extent) => Self {
                horizontal: extent.horizontal.merge(&footprint),
                height: extent.height + step_height,
            },
        }
    }

    pub fn to_bounds(self) -> Bounds {
        self.horizontal
            .min_point()
            .to_bounds(Size::new(self.horizontal.width(), self.height))
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn footprint(x1: f32, x2: f32, y: f32, height: u32) -> StepFootprint {
        StepFootprint { x1, x2, y, height }
    }

    #[test]
    fn test_single_step_extent() {
        let extent = SectionExtent::fold(None, footprint(110.0, 290.0, 68.0, 50), 180, 50);
        let bounds = extent.to_bounds();

        assert_approx_eq!(f32, bounds.min_x(), 20.0);
        assert_approx_eq!(f32, bounds.min_y(), 43.0);
        assert_approx_eq!(f32, bounds.max_x(), 380.0);
        assert_approx_eq!(f32, bounds.height(), 40.0);
    }

    #[test]
    fn test_fold_widens_and_grows() {
        let first = SectionExtent::fold(None, footprint(290.0, 470.0, 68.0, 50), 180, 50);
        let second = SectionExtent::fold(Some(first), footprint(290.0, 110.0, 132.0, 64), 180, 50);
        let bounds = second.to_bounds();

        assert_approx_eq!(f32, bounds.min_x(), 20.0);
        assert_approx_eq!(f32, bounds.max_x(), 560.0);
        assert_approx_eq!(f32, bounds.min_y(), 43.0);
        assert_approx_eq!(f32, bounds.height(), 104.0);
    }

    #[test]
    fn test_left_edge_is_clamped() {
        // With a short distance the left edge would fall before x = 1
        let extent = SectionExtent::fold(None, footprint(30.0, 50.0, 20.0, 50), 80, 50);
        let bounds = extent.to_bounds();

        assert_approx_eq!(f32, bounds.min_x(), 1.0);
        assert_approx_eq!(f32, bounds.min_y(), 0.0);
        assert_approx_eq!(f32, bounds.max_x(), 90.0);
    }
}
