//! Flat 2D map geometry (pixel plane, compass headings).
//!
//! Purpose
//! - Provide the immutable `Point` value and the unit/angle helpers every planner
//!   builds on. No geodesic correction: the map is a Euclidean plane.
//!
//! Conventions
//! - Scale is fixed at `PX_PER_NM` pixels per nautical mile.
//! - Screen coordinates: `y` grows downward. Heading 0° points up (−y), 90° points
//!   right (+x), measured clockwise.
//! - `Point::heading_to` returns values in (−90°, 270°]. Callers add/subtract offsets
//!   freely; nothing wraps to [0, 360).

mod point;
mod units;

pub use point::Point;
pub use units::{degrees_to_radians, nm_to_px, px_to_nm, radians_to_degrees, PX_PER_NM};
