//! Strike flight-path planning on a flat pixel map.
//!
//! Layout
//! - `geom`: `Point`, unit conversions, compass headings.
//! - `airbase`, `plan`: the values planners consume and produce.
//! - `planner`: the versioned strike planners behind `FlightPlanner`.
//! - `scenario`: built-in theater and reproducible random airbase pairs.
//!
//! Everything here is pure and synchronous. Planners keep no state between calls;
//! callers re-run `strike` whenever an airbase moves.

pub mod airbase;
pub mod api;
pub mod geom;
pub mod plan;
pub mod planner;
pub mod scenario;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::airbase::Airbase;
    pub use crate::geom::{nm_to_px, px_to_nm, Point};
    pub use crate::plan::{FlightPlan, WaypointKind};
    pub use crate::planner::{
        CorrectedPlanner, FlightPlanner, FlightPlanner220, FlightPlanner22XRev1,
        FlightPlanner22XRev2, HoldSolution,
    };
    pub use crate::scenario::Theater;
}
