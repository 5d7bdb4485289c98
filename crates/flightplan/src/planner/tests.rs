use super::*;
use crate::geom::{px_to_nm, Point};
use crate::plan::WaypointKind;
use proptest::prelude::*;

fn base(x: f64, y: f64) -> Airbase {
    Airbase::friendly(Point::new(x, y))
}

fn target(x: f64, y: f64) -> Airbase {
    Airbase::hostile(Point::new(x, y))
}

fn approx(p: Point, x: f64, y: f64, tol: f64) -> bool {
    (p.x - x).abs() < tol && (p.y - y).abs() < tol
}

#[test]
fn baseline_due_east_scenario() {
    let plan = FlightPlanner220::new().strike(&base(0.0, 0.0), &target(500.0, 0.0));
    assert_eq!(plan.len(), 10);
    let wps = plan.waypoints();
    assert_eq!(wps[1], Point::new(0.0, 0.0).from_heading(120.0, 5.0));
    assert!(approx(wps[1], 21.65, 12.5, 0.01));
    // Hold 15 nm straight at the target.
    assert!(approx(wps[2], 75.0, 0.0, 1e-9));
    assert_eq!(wps[5], Point::new(500.0, 0.0));
    // Descent mirrors departure through the origin.
    assert!(approx(wps[8], -wps[1].x, -wps[1].y, 1e-9));
    assert_eq!(wps[9], Point::new(0.0, 0.0));
}

#[test]
fn baseline_labels_every_leg() {
    let plan = FlightPlanner220::new().strike(&base(100.0, 100.0), &target(600.0, 600.0));
    use WaypointKind::*;
    assert_eq!(
        plan.kinds(),
        &[Takeoff, Departure, Hold, Join, Ingress, Target, Egress, Split, Descent, Landing]
    );
}

#[test]
fn baseline_join_and_split_are_twenty_nm_from_attack_points() {
    let plan = FlightPlanner220::new().strike(&base(100.0, 100.0), &target(600.0, 600.0));
    let w = plan.waypoints();
    assert!((px_to_nm(w[3].distance_to(w[4])) - 20.0).abs() < 1e-9);
    assert!((px_to_nm(w[6].distance_to(w[7])) - 20.0).abs() < 1e-9);
    assert!((px_to_nm(w[4].distance_to(w[5])) - 25.0).abs() < 1e-9);
    assert!((px_to_nm(w[6].distance_to(w[5])) - 25.0).abs() < 1e-9);
}

#[test]
fn corrected_plan_layout_is_symmetric_about_attack_axis() {
    let plan = FlightPlanner22XRev1::new().strike(&base(0.0, 0.0), &target(500.0, 0.0));
    use WaypointKind::*;
    assert_eq!(
        plan.kinds(),
        &[Takeoff, Hold, Join, Ingress, Target, Egress, Split, Landing]
    );
    let w = plan.waypoints();
    let (ingress, egress) = (w[3], w[5]);
    assert!((ingress.x - egress.x).abs() < 1e-9);
    assert!((ingress.y + egress.y).abs() < 1e-9);
    assert!((px_to_nm(ingress.distance_to(w[4])) - 45.0).abs() < 1e-9);
    assert!((px_to_nm(w[2].distance_to(ingress)) - 20.0).abs() < 1e-9);
    assert!((px_to_nm(w[1].distance_to(w[0])) - 15.0).abs() < 1e-9);
    assert_eq!(w[7], Point::new(0.0, 0.0));
}

#[test]
fn revisions_agree_at_long_range() {
    let from = base(0.0, 0.0);
    let to = target(500.0, 0.0);
    assert_eq!(
        FlightPlanner22XRev1::new().strike(&from, &to),
        FlightPlanner22XRev2::new().strike(&from, &to)
    );
}

#[test]
fn revisions_diverge_when_origin_is_inside_ingress_range() {
    // 30 nm apart: rev 2 retreats (origin nearer than 45 nm ingress), rev 1 does not.
    let from = base(0.0, 0.0);
    let to = target(150.0, 0.0);
    let p1 = FlightPlanner22XRev1::new().strike(&from, &to);
    let p2 = FlightPlanner22XRev2::new().strike(&from, &to);
    assert_eq!(p1.find(WaypointKind::Ingress), p2.find(WaypointKind::Ingress));
    assert_ne!(p1.find(WaypointKind::Join), p2.find(WaypointKind::Join));
}

#[test]
fn retreat_predicates_differ() {
    let r1 = FlightPlanner22XRev1::new();
    let r2 = FlightPlanner22XRev2::new();
    let origin = Point::new(0.0, 0.0);
    let tgt = Point::new(600.0, 0.0);

    // Ingress 40 nm behind the origin: only rev 2 retreats.
    let behind = Point::new(-200.0, 0.0);
    assert!(!r1.join_should_retreat(origin, tgt, behind));
    assert!(r2.join_should_retreat(origin, tgt, behind));
    let j1 = r1.join_point(origin, tgt, behind);
    let j2 = r2.join_point(origin, tgt, behind);
    assert!(approx(j1, -100.0, 0.0, 1e-9));
    assert!(approx(j2, -300.0, 0.0, 1e-9));

    // Ingress 10 nm from the origin: only rev 1 retreats.
    let near = Point::new(50.0, 0.0);
    assert!(r1.join_should_retreat(origin, tgt, near));
    assert!(!r2.join_should_retreat(origin, tgt, near));
}

#[test]
fn hold_falls_back_when_no_triangle_exists() {
    let planner = FlightPlanner22XRev1::new();
    let origin = Point::new(0.0, 0.0);
    let tgt = Point::new(500.0, 0.0);
    // Join 1 nm out: 15 + 1 < 20, no triangle.
    let join = Point::new(5.0, 0.0);
    let (hold, solution) = planner.hold_solution(origin, tgt, join);
    assert_eq!(solution, HoldSolution::Fallback);
    assert_eq!(hold, origin.from_heading(tgt.heading_to(origin), 15.0));
    assert!(hold.is_finite());
    assert!(approx(hold, -75.0, 0.0, 1e-9));
}

#[test]
fn hold_falls_back_when_join_coincides_with_origin() {
    let planner = FlightPlanner22XRev2::new();
    let origin = Point::new(0.0, 0.0);
    let tgt = Point::new(500.0, 0.0);
    let (hold, solution) = planner.hold_solution(origin, tgt, origin);
    assert_eq!(solution, HoldSolution::Fallback);
    assert!(hold.is_finite());
}

#[test]
fn hold_triangle_keeps_both_distances() {
    let planner = FlightPlanner22XRev1::new();
    let origin = Point::new(0.0, 0.0);
    let tgt = Point::new(500.0, 0.0);
    let join = Point::new(125.0, 0.0);
    let (hold, solution) = planner.hold_solution(origin, tgt, join);
    match solution {
        HoldSolution::Triangle { theta_deg } => {
            assert!((theta_deg - 0.6f64.acos().to_degrees()).abs() < 1e-9)
        }
        other => panic!("expected triangle, got {other:?}"),
    }
    assert!((px_to_nm(hold.distance_to(origin)) - 15.0).abs() < 1e-9);
    assert!((px_to_nm(hold.distance_to(join)) - 20.0).abs() < 1e-9);
    // Rotated to the left of the origin→join line (north side on screen).
    assert!(hold.y < 0.0);
}

#[test]
fn hold_direct_when_join_is_far() {
    let planner = FlightPlanner22XRev1::new();
    let origin = Point::new(0.0, 0.0);
    let join = Point::new(200.0, 0.0);
    let (hold, solution) = planner.hold_solution(origin, Point::new(500.0, 0.0), join);
    assert_eq!(solution, HoldSolution::Direct);
    assert!(approx(hold, 75.0, 0.0, 1e-9));
}

#[test]
fn hold_pushed_when_origin_is_nearer_target_than_join() {
    let planner = FlightPlanner22XRev1::new();
    let origin = Point::new(400.0, 0.0);
    let tgt = Point::new(500.0, 0.0);
    let join = Point::new(0.0, 0.0);
    let (hold, solution) = planner.hold_solution(origin, tgt, join);
    assert_eq!(solution, HoldSolution::Pushed);
    assert!(approx(hold, -100.0, 0.0, 1e-9));
    assert_eq!(planner.hold_point(origin, tgt, join), hold);
}

#[test]
fn triangle_angle_domain() {
    assert!((hold_triangle_angle(15.0, 25.0, 20.0).unwrap() - 53.130102354).abs() < 1e-6);
    // Degenerate but valid: the three sides are collinear.
    assert!((hold_triangle_angle(15.0, 5.0, 20.0).unwrap() - 180.0).abs() < 1e-9);
    assert_eq!(hold_triangle_angle(15.0, 1.0, 20.0), None);
    assert_eq!(hold_triangle_angle(15.0, 0.0, 20.0), None);
    assert_eq!(hold_triangle_angle(15.0, 40.0, 20.0), None);
}

#[test]
fn custom_constants_flow_into_plan() {
    let cfg = CorrectedCfg {
        ingress_distance: 30.0,
        ..CorrectedCfg::default()
    };
    let plan = FlightPlanner22XRev2::with_cfg(cfg).strike(&base(0.0, 0.0), &target(800.0, 0.0));
    let ingress = plan.find(WaypointKind::Ingress).unwrap();
    assert!((px_to_nm(ingress.distance_to(Point::new(800.0, 0.0))) - 30.0).abs() < 1e-9);

    let baseline = FlightPlanner220::with_cfg(BaselineCfg {
        runway_heading: 0.0,
        ..BaselineCfg::default()
    });
    assert_eq!(baseline.cfg().runway_heading, 0.0);
    let departure = baseline
        .strike(&base(0.0, 0.0), &target(800.0, 0.0))
        .find(WaypointKind::Departure)
        .unwrap();
    assert!(approx(departure, 0.0, -25.0, 1e-9));
}

#[test]
fn coincident_airbases_still_plan() {
    let from = base(250.0, 250.0);
    let to = target(250.0, 250.0);
    for planner in all() {
        let plan = planner.strike(&from, &to);
        assert!(plan.waypoints().iter().all(|p| p.is_finite()), "{}", planner.name());
        assert_eq!(plan.origin(), from.position);
    }
}

#[test]
fn allegiance_does_not_affect_plans() {
    let a = base(10.0, 20.0);
    let b = target(400.0, 300.0);
    for planner in all() {
        let flipped = planner.strike(&Airbase::hostile(a.position), &Airbase::friendly(b.position));
        assert_eq!(planner.strike(&a, &b), flipped);
    }
}

#[test]
fn registry_lookup() {
    assert_eq!(names(), vec!["2.2.0", "2.2.x rev 1", "2.2.x rev 2"]);
    for name in names() {
        assert_eq!(by_name(name).map(|p| p.name()), Some(name));
    }
    assert!(by_name("2.3.0").is_none());
}

proptest! {
    #[test]
    fn every_plan_starts_and_ends_at_home(
        ox in -2000.0f64..2000.0,
        oy in -2000.0f64..2000.0,
        tx in -2000.0f64..2000.0,
        ty in -2000.0f64..2000.0,
    ) {
        let from = base(ox, oy);
        let to = target(tx, ty);
        for planner in all() {
            let plan = planner.strike(&from, &to);
            let expected = if planner.name() == "2.2.0" { 10 } else { 8 };
            prop_assert_eq!(plan.len(), expected);
            prop_assert_eq!(plan.waypoints()[0], from.position);
            prop_assert_eq!(plan.waypoints()[plan.len() - 1], from.position);
            prop_assert!(plan.waypoints().iter().all(|p| p.is_finite()));
        }
    }
}
