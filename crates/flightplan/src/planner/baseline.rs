//! The 2.2.0 planner: fixed offsets, no join/hold solving.

use super::cfg::{BaselineCfg, ATTACK_AXIS_OFFSET};
use super::FlightPlanner;
use crate::airbase::Airbase;
use crate::plan::{FlightPlan, WaypointKind};

/// Strike layout of the 2.2.0 release. Always 10 waypoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlightPlanner220 {
    cfg: BaselineCfg,
}

impl FlightPlanner220 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cfg(cfg: BaselineCfg) -> Self {
        Self { cfg }
    }

    #[inline]
    pub fn cfg(&self) -> &BaselineCfg {
        &self.cfg
    }
}

impl FlightPlanner for FlightPlanner220 {
    fn name(&self) -> &'static str {
        "2.2.0"
    }

    fn strike(&self, from: &Airbase, to: &Airbase) -> FlightPlan {
        let c = &self.cfg;
        let origin = from.position;
        let target = to.position;
        let airfield_heading = target.heading_to(origin);
        let ingress = target.from_heading(airfield_heading + ATTACK_AXIS_OFFSET, c.ingress_distance);
        let join = ingress.from_heading(ingress.heading_to(origin), c.join_distance);
        let egress = target.from_heading(airfield_heading - ATTACK_AXIS_OFFSET, c.ingress_distance);
        let split = egress.from_heading(egress.heading_to(origin), c.join_distance);

        FlightPlan::labeled(vec![
            (WaypointKind::Takeoff, origin),
            (
                WaypointKind::Departure,
                origin.from_heading(c.runway_heading, c.runway_leg),
            ),
            (
                WaypointKind::Hold,
                origin.from_heading(origin.heading_to(target), c.hold_distance),
            ),
            (WaypointKind::Join, join),
            (WaypointKind::Ingress, ingress),
            (WaypointKind::Target, target),
            (WaypointKind::Egress, egress),
            (WaypointKind::Split, split),
            (
                WaypointKind::Descent,
                origin.from_heading(c.runway_heading + 180.0, c.runway_leg),
            ),
            (WaypointKind::Landing, origin),
        ])
    }
}
