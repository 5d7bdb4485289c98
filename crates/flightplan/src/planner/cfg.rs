//! Planner constants. Distances are nautical miles, angles degrees.

/// Runway heading the 2.2.0 planner assumes for every airfield.
///
/// Modeling simplification: real runway data is not available to the planner, so
/// departure and descent legs are laid out along this fixed heading.
pub const ASSUMED_RUNWAY_HEADING: f64 = 120.0;

/// Lateral offset of ingress/egress from the target→origin axis.
pub const ATTACK_AXIS_OFFSET: f64 = 25.0;

/// Constants for the 2.2.0 planner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaselineCfg {
    pub runway_heading: f64,
    /// Length of the departure and descent legs along the runway heading.
    pub runway_leg: f64,
    pub hold_distance: f64,
    pub join_distance: f64,
    pub ingress_distance: f64,
}

impl Default for BaselineCfg {
    fn default() -> Self {
        Self {
            runway_heading: ASSUMED_RUNWAY_HEADING,
            runway_leg: 5.0,
            hold_distance: 15.0,
            join_distance: 20.0,
            ingress_distance: 25.0,
        }
    }
}

/// Constants shared by the corrected (2.2.x) planners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CorrectedCfg {
    /// Hold point distance from the origin.
    pub hold_distance: f64,
    /// Minimum separation between hold and join before the triangle solve kicks in.
    pub push_distance: f64,
    /// Join point distance from ingress (and split from egress).
    pub join_distance: f64,
    /// Ingress/egress distance from the target.
    pub ingress_distance: f64,
}

impl Default for CorrectedCfg {
    fn default() -> Self {
        Self {
            hold_distance: 15.0,
            push_distance: 20.0,
            join_distance: 20.0,
            ingress_distance: 45.0,
        }
    }
}
