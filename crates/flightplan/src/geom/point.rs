//! `Point`: an immutable map position in pixels.

use nalgebra::Vector2;

use super::units::{degrees_to_radians, nm_to_px, radians_to_degrees};

/// Map position in pixels. Plain value: equality is coordinate equality.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build a point from nautical-mile coordinates.
    #[inline]
    pub fn from_nm(x_nm: f64, y_nm: f64) -> Self {
        Self::new(nm_to_px(x_nm), nm_to_px(y_nm))
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Vector addition.
    #[inline]
    pub fn translate(self, other: Point) -> Point {
        (self.to_vector() + other.to_vector()).into()
    }

    /// Point reached by flying `distance_nm` along compass `heading` (degrees).
    ///
    /// Heading 0° is up (−y), 90° is right (+x).
    pub fn from_heading(self, heading: f64, distance_nm: f64) -> Point {
        let angle = degrees_to_radians(heading - 90.0);
        let distance = nm_to_px(distance_nm);
        self.translate(Point::new(angle.cos() * distance, angle.sin() * distance))
    }

    /// Compass heading (degrees) from `self` towards `other`, in (−90°, 270°].
    pub fn heading_to(self, other: Point) -> f64 {
        let d = other.to_vector() - self.to_vector();
        radians_to_degrees(d.y.atan2(d.x)) + 90.0
    }

    /// Euclidean distance in pixels.
    #[inline]
    pub fn distance_to(self, other: Point) -> f64 {
        (other.to_vector() - self.to_vector()).norm()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_vector()
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl std::ops::Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Self::Output {
        self.translate(rhs)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
