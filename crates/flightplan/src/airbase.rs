//! Airbases: a map position plus allegiance.
//!
//! Planners only read `position`. `friendly` is carried for the renderer.

use crate::geom::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Airbase {
    pub position: Point,
    pub friendly: bool,
}

impl Airbase {
    #[inline]
    pub fn new(position: Point, friendly: bool) -> Self {
        Self { position, friendly }
    }

    #[inline]
    pub fn friendly(position: Point) -> Self {
        Self::new(position, true)
    }

    #[inline]
    pub fn hostile(position: Point) -> Self {
        Self::new(position, false)
    }

    /// Same airbase relocated to `position`.
    #[inline]
    pub fn moved_to(self, position: Point) -> Self {
        Self { position, ..self }
    }

    /// Same airbase shifted by a drag delta (pixels).
    #[inline]
    pub fn dragged_by(self, delta: Point) -> Self {
        self.moved_to(self.position.translate(delta))
    }
}
