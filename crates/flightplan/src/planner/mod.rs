//! Strike flight planners.
//!
//! Purpose
//! - Turn an (origin, target) airbase pair into an ordered waypoint route that
//!   starts and ends at the origin.
//! - Every planner is a stateless strategy behind `FlightPlanner`; callers pick
//!   one by name and re-run `strike` whenever an airbase moves.
//!
//! Variants
//! - `FlightPlanner220`: fixed offsets (10 waypoints).
//! - `FlightPlanner22XRev1` / `FlightPlanner22XRev2`: solved join/hold points
//!   (8 waypoints). They share `CorrectedPlanner` and differ only in the join
//!   retreat rule.

mod baseline;
mod cfg;
mod corrected;

pub use baseline::FlightPlanner220;
pub use cfg::{BaselineCfg, CorrectedCfg, ASSUMED_RUNWAY_HEADING, ATTACK_AXIS_OFFSET};
pub use corrected::{
    hold_triangle_angle, CorrectedPlanner, FlightPlanner22XRev1, FlightPlanner22XRev2,
    HoldSolution,
};

use crate::airbase::Airbase;
use crate::plan::FlightPlan;

/// A named strike planning strategy.
///
/// `strike` is deterministic and total: any airbase pair (including coincident
/// positions) yields a complete plan whose first and last waypoints equal
/// `from.position`.
pub trait FlightPlanner: Send + Sync {
    /// Stable display identifier.
    fn name(&self) -> &'static str;

    fn strike(&self, from: &Airbase, to: &Airbase) -> FlightPlan;
}

/// All planners with default constants, oldest first.
pub fn all() -> Vec<Box<dyn FlightPlanner>> {
    vec![
        Box::new(FlightPlanner220::new()),
        Box::new(FlightPlanner22XRev1::new()),
        Box::new(FlightPlanner22XRev2::new()),
    ]
}

pub fn names() -> Vec<&'static str> {
    all().iter().map(|p| p.name()).collect()
}

/// Planner whose `name()` equals `name`.
pub fn by_name(name: &str) -> Option<Box<dyn FlightPlanner>> {
    all().into_iter().find(|p| p.name() == name)
}

#[cfg(test)]
mod tests;
