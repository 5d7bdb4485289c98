//! Flight plans: the ordered waypoint list a planner returns.
//!
//! Order is flight order and draw order. A plan is never empty; planners always
//! start and end it at the origin airbase.

use crate::geom::{px_to_nm, Point};

/// Role of a waypoint within a strike package's route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WaypointKind {
    Takeoff,
    /// Climb-out along the runway heading.
    Departure,
    Hold,
    Join,
    Ingress,
    Target,
    Egress,
    Split,
    Descent,
    Landing,
    /// Raw points handed to `FlightPlan::new`.
    Unlabeled,
}

impl WaypointKind {
    pub fn as_str(self) -> &'static str {
        match self {
            WaypointKind::Takeoff => "takeoff",
            WaypointKind::Departure => "departure",
            WaypointKind::Hold => "hold",
            WaypointKind::Join => "join",
            WaypointKind::Ingress => "ingress",
            WaypointKind::Target => "target",
            WaypointKind::Egress => "egress",
            WaypointKind::Split => "split",
            WaypointKind::Descent => "descent",
            WaypointKind::Landing => "landing",
            WaypointKind::Unlabeled => "waypoint",
        }
    }
}

impl std::fmt::Display for WaypointKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FlightPlan {
    waypoints: Vec<Point>,
    kinds: Vec<WaypointKind>,
}

impl FlightPlan {
    /// Unlabeled plan from raw points. `None` if `waypoints` is empty.
    pub fn new(waypoints: Vec<Point>) -> Option<Self> {
        if waypoints.is_empty() {
            return None;
        }
        let kinds = vec![WaypointKind::Unlabeled; waypoints.len()];
        Some(Self { waypoints, kinds })
    }

    /// Planners build through this; they always push at least takeoff and landing.
    pub(crate) fn labeled(legs: Vec<(WaypointKind, Point)>) -> Self {
        debug_assert!(!legs.is_empty(), "flight plan must not be empty");
        let (kinds, waypoints) = legs.into_iter().unzip();
        Self { waypoints, kinds }
    }

    #[inline]
    pub fn waypoints(&self) -> &[Point] {
        &self.waypoints
    }

    #[inline]
    pub fn kinds(&self) -> &[WaypointKind] {
        &self.kinds
    }

    pub fn iter(&self) -> impl Iterator<Item = (WaypointKind, Point)> + '_ {
        self.kinds.iter().copied().zip(self.waypoints.iter().copied())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Always false for plans built through `new` or a planner.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// First waypoint (the home base for planner output).
    #[inline]
    pub fn origin(&self) -> Point {
        self.waypoints[0]
    }

    /// First waypoint of the given kind, if any.
    pub fn find(&self, kind: WaypointKind) -> Option<Point> {
        self.iter().find(|(k, _)| *k == kind).map(|(_, p)| p)
    }

    /// Consecutive waypoint pairs, i.e. the line segments a renderer draws.
    pub fn legs(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.waypoints.windows(2).map(|w| (w[0], w[1]))
    }

    /// Total route length in nautical miles.
    pub fn length_nm(&self) -> f64 {
        self.legs().map(|(a, b)| px_to_nm(a.distance_to(b))).sum()
    }

    pub fn into_waypoints(self) -> Vec<Point> {
        self.waypoints
    }
}
