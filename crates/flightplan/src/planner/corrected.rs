//! Corrected (2.2.x) planners: join and hold points solved from the geometry.
//!
//! Model
//! - Ingress/egress sit `ingress_distance` from the target, ±25° off the
//!   target→origin axis.
//! - Join sits `join_distance` back from ingress, normally towards the origin. When
//!   the retreat predicate fires it is laid back along the target→origin axis instead.
//! - Hold sits `hold_distance` from the origin. If the straight-line candidate
//!   towards join is closer than `push_distance` to join, the hold point is rotated
//!   off that line so it is `hold_distance` from origin and `join_distance` from
//!   join (law of cosines). If no such triangle exists the hold point retreats from
//!   the target instead.
//!
//! Revisions differ only in `CorrectedPlanner::join_should_retreat`.

use tracing::{debug, trace};

use super::cfg::{CorrectedCfg, ATTACK_AXIS_OFFSET};
use super::FlightPlanner;
use crate::airbase::Airbase;
use crate::geom::{px_to_nm, radians_to_degrees, Point};
use crate::plan::{FlightPlan, WaypointKind};

/// How the hold point was derived.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HoldSolution {
    /// Origin is nearer the target than join: hold pushed back from join.
    Pushed,
    /// Straight-line candidate towards join already clears `push_distance`.
    Direct,
    /// Rotated off the origin→join line by `theta_deg`.
    Triangle { theta_deg: f64 },
    /// No triangle with the configured sides: retreat from the target.
    Fallback,
}

impl HoldSolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            HoldSolution::Pushed => "pushed",
            HoldSolution::Direct => "direct",
            HoldSolution::Triangle { .. } => "triangle",
            HoldSolution::Fallback => "fallback",
        }
    }
}

/// Angle at the origin of the triangle with sides `hold` (origin–hold),
/// `origin_join` (origin–join) and `join` (hold–join), in degrees.
///
/// `None` when the three lengths do not form a triangle, including a zero
/// `origin_join` side.
pub fn hold_triangle_angle(hold: f64, origin_join: f64, join: f64) -> Option<f64> {
    let ratio = (hold.powi(2) + origin_join.powi(2) - join.powi(2)) / (2.0 * hold * origin_join);
    if !ratio.is_finite() || !(-1.0..=1.0).contains(&ratio) {
        return None;
    }
    Some(radians_to_degrees(ratio.acos()))
}

/// Shared 2.2.x algorithm. Implementors supply constants and the retreat rule.
pub trait CorrectedPlanner {
    fn cfg(&self) -> &CorrectedCfg;

    /// Whether the join point should be laid back along the target→origin axis
    /// instead of pointing from ingress towards the origin.
    fn join_should_retreat(&self, origin: Point, target: Point, ingress: Point) -> bool;

    fn join_point(&self, origin: Point, target: Point, ingress: Point) -> Point {
        let join_distance = self.cfg().join_distance;
        if self.join_should_retreat(origin, target, ingress) {
            trace!(?ingress, "join retreats from target");
            ingress.from_heading(target.heading_to(origin), join_distance)
        } else {
            ingress.from_heading(ingress.heading_to(origin), join_distance)
        }
    }

    fn hold_solution(&self, origin: Point, target: Point, join: Point) -> (Point, HoldSolution) {
        let c = self.cfg();
        if origin.distance_to(target) < join.distance_to(target) {
            let hold = join.from_heading(target.heading_to(origin), c.push_distance);
            return (hold, HoldSolution::Pushed);
        }
        let heading_to_join = origin.heading_to(join);
        let direct = origin.from_heading(heading_to_join, c.hold_distance);
        if px_to_nm(direct.distance_to(join)) >= c.push_distance {
            return (direct, HoldSolution::Direct);
        }
        let origin_join = px_to_nm(origin.distance_to(join));
        match hold_triangle_angle(c.hold_distance, origin_join, c.join_distance) {
            Some(theta_deg) => {
                let hold = origin.from_heading(heading_to_join - theta_deg, c.hold_distance);
                (hold, HoldSolution::Triangle { theta_deg })
            }
            None => {
                debug!(origin_join, "no hold triangle; retreating from target");
                let hold = origin.from_heading(target.heading_to(origin), c.hold_distance);
                (hold, HoldSolution::Fallback)
            }
        }
    }

    fn hold_point(&self, origin: Point, target: Point, join: Point) -> Point {
        self.hold_solution(origin, target, join).0
    }

    /// Ingress and egress points, offset either side of the target→origin axis.
    fn attack_points(&self, origin: Point, target: Point) -> (Point, Point) {
        let distance = self.cfg().ingress_distance;
        let airfield_heading = target.heading_to(origin);
        (
            target.from_heading(airfield_heading + ATTACK_AXIS_OFFSET, distance),
            target.from_heading(airfield_heading - ATTACK_AXIS_OFFSET, distance),
        )
    }

    /// Full strike route: 8 waypoints, home base first and last.
    fn plan(&self, from: &Airbase, to: &Airbase) -> FlightPlan {
        let origin = from.position;
        let target = to.position;
        let (ingress, egress) = self.attack_points(origin, target);
        let join = self.join_point(origin, target, ingress);
        let (hold, solution) = self.hold_solution(origin, target, join);
        debug!(solution = solution.as_str(), "hold point");

        FlightPlan::labeled(vec![
            (WaypointKind::Takeoff, origin),
            (WaypointKind::Hold, hold),
            (WaypointKind::Join, join),
            (WaypointKind::Ingress, ingress),
            (WaypointKind::Target, target),
            (WaypointKind::Egress, egress),
            (WaypointKind::Split, self.join_point(origin, target, egress)),
            (WaypointKind::Landing, origin),
        ])
    }
}

/// 2.2.x revision 1: retreat when ingress is within `join_distance` of the origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlightPlanner22XRev1 {
    cfg: CorrectedCfg,
}

impl FlightPlanner22XRev1 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cfg(cfg: CorrectedCfg) -> Self {
        Self { cfg }
    }
}

impl CorrectedPlanner for FlightPlanner22XRev1 {
    fn cfg(&self) -> &CorrectedCfg {
        &self.cfg
    }

    fn join_should_retreat(&self, origin: Point, _target: Point, ingress: Point) -> bool {
        px_to_nm(origin.distance_to(ingress)) < self.cfg.join_distance
    }
}

impl FlightPlanner for FlightPlanner22XRev1 {
    fn name(&self) -> &'static str {
        "2.2.x rev 1"
    }

    fn strike(&self, from: &Airbase, to: &Airbase) -> FlightPlan {
        self.plan(from, to)
    }
}

/// 2.2.x revision 2: retreat when the origin is nearer the target than ingress is.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlightPlanner22XRev2 {
    cfg: CorrectedCfg,
}

impl FlightPlanner22XRev2 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cfg(cfg: CorrectedCfg) -> Self {
        Self { cfg }
    }
}

impl CorrectedPlanner for FlightPlanner22XRev2 {
    fn cfg(&self) -> &CorrectedCfg {
        &self.cfg
    }

    fn join_should_retreat(&self, origin: Point, target: Point, ingress: Point) -> bool {
        origin.distance_to(target) < ingress.distance_to(target)
    }
}

impl FlightPlanner for FlightPlanner22XRev2 {
    fn name(&self) -> &'static str {
        "2.2.x rev 2"
    }

    fn strike(&self, from: &Airbase, to: &Airbase) -> FlightPlan {
        self.plan(from, to)
    }
}
