//! Curated surface for the CLI and benches.
//!
//! Re-exports plus a couple of convenience entry points that work on planner
//! names, which is how the outer layers select planners.

pub use crate::airbase::Airbase;
pub use crate::geom::{
    degrees_to_radians, nm_to_px, px_to_nm, radians_to_degrees, Point, PX_PER_NM,
};
pub use crate::plan::{FlightPlan, WaypointKind};
pub use crate::planner::{
    all as all_planners, by_name as planner_by_name, names as planner_names, BaselineCfg,
    CorrectedCfg, CorrectedPlanner, FlightPlanner, FlightPlanner220, FlightPlanner22XRev1,
    FlightPlanner22XRev2, HoldSolution,
};
pub use crate::scenario::rand::{draw_strike_pair, draw_strike_pairs, MapBounds, ReplayToken};
pub use crate::scenario::Theater;

/// Plan a strike with the planner called `name`. `None` for unknown names.
pub fn strike_by_name(name: &str, from: &Airbase, to: &Airbase) -> Option<FlightPlan> {
    planner_by_name(name).map(|p| p.strike(from, to))
}

/// Hold-point derivation used by each corrected planner for this pair, keyed by
/// planner name.
pub fn hold_solutions(from: &Airbase, to: &Airbase) -> [(&'static str, HoldSolution); 2] {
    fn solve<P: CorrectedPlanner + FlightPlanner>(
        p: P,
        from: &Airbase,
        to: &Airbase,
    ) -> (&'static str, HoldSolution) {
        let (origin, target) = (from.position, to.position);
        let (ingress, _) = p.attack_points(origin, target);
        let join = p.join_point(origin, target, ingress);
        let (_, solution) = p.hold_solution(origin, target, join);
        (p.name(), solution)
    }
    [
        solve(FlightPlanner22XRev1::new(), from, to),
        solve(FlightPlanner22XRev2::new(), from, to),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn strike_by_name_matches_direct_call() {
        let (from, to) = Theater::default_strike();
        let plan = strike_by_name("2.2.x rev 2", &from, &to).unwrap();
        assert_eq!(plan, FlightPlanner22XRev2::new().strike(&from, &to));
        assert!(strike_by_name("unknown", &from, &to).is_none());
    }

    #[test]
    fn hold_solutions_randomized_seeded() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..64 {
            let from = Airbase::friendly(Point::new(
                rng.gen_range(0.0..1000.0),
                rng.gen_range(0.0..1000.0),
            ));
            let to = Airbase::hostile(Point::new(
                rng.gen_range(0.0..1000.0),
                rng.gen_range(0.0..1000.0),
            ));
            let [(n1, s1), (n2, _)] = hold_solutions(&from, &to);
            assert_eq!((n1, n2), ("2.2.x rev 1", "2.2.x rev 2"));
            let hold = FlightPlanner22XRev1::new()
                .strike(&from, &to)
                .find(WaypointKind::Hold)
                .unwrap();
            assert!(hold.is_finite());
            if !matches!(s1, HoldSolution::Pushed) {
                assert!((px_to_nm(hold.distance_to(from.position)) - 15.0).abs() < 1e-9);
            }
        }
    }
}
