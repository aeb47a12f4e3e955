//! Geometric primitives for diagram layout and positioning.
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box
//!
//! The coordinate system matches SVG: the origin is the top-left corner,
//! X grows to the right and Y grows downward.

/// A 2D point in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use seqline_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(30.0, 20.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 20.0);
/// assert_eq!(mid.y(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> f32 {
        self.x
    }

    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns a copy of this point with the given x-coordinate.
    pub fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    /// Returns a copy of this point with the given y-coordinate.
    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Creates bounds of the given size with this point as the top-left corner.
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_top_left(self, size)
    }
}

/// Width and height dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }
}

/// A rectangular bounding box with minimum and maximum coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    pub fn min_x(self) -> f32 {
        self.min_x
    }

    pub fn min_y(self) -> f32 {
        self.min_y
    }

    pub fn max_x(self) -> f32 {
        self.max_x
    }

    pub fn max_y(self) -> f32 {
        self.max_y
    }

    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    pub fn to_size(self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Merges two bounds into the smallest bounds containing both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seqline_core::geometry::{Bounds, Point, Size};
    /// let a = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 30.0));
    /// let b = Bounds::new_from_top_left(Point::new(10.0, 40.0), Size::new(120.0, 80.0));
    ///
    /// let combined = a.merge(&b);
    /// assert_eq!(combined.width(), 130.0);
    /// assert_eq!(combined.height(), 120.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}
