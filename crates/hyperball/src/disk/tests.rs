use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use proptest::prelude::*;

use super::*;

#[test]
fn normalize_angle_canonical_range() {
    assert!(normalize_angle(TAU).abs() < 1e-15);
    assert!((normalize_angle(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < 1e-12);
    assert!((normalize_angle(5.0 * TAU + 0.25) - 0.25).abs() < 1e-9);
    assert!((opposite_angle(0.0) - PI).abs() < 1e-15);
    assert!(opposite_angle(PI).abs() < 1e-15);
}

#[test]
fn distant_point_from_origin_lands_at_tanh_half() {
    let t = 0.8;
    let p = Point::origin().distant_point(t, FRAC_PI_4);
    assert!((p.euclidean_radius() - (t / 2.0).tanh()).abs() < 1e-12);
    assert!((p.angle() - FRAC_PI_4).abs() < 1e-12);
    assert!((p.hyperbolic_radius() - t).abs() < 1e-12);
}

#[test]
fn distance_matches_origin_formula_and_is_symmetric() {
    let p = Point::from_polar(0.4, 1.2);
    let q = Point::from_polar(0.7, 4.0);
    assert!((Point::origin().distance_to(p) - 2.0 * 0.4f64.atanh()).abs() < 1e-12);
    assert!((p.distance_to(q) - q.distance_to(p)).abs() < 1e-12);
    assert!(p.distance_to(p) < 1e-12);
}

#[test]
fn diameter_reflection_swaps_across_mirror_and_keeps_radius() {
    let p = Point::from_polar(0.5, PI / 8.0);
    let mirror = 15.0 * PI / 8.0;
    let r = reflect_across_diameter(p, mirror);
    assert!((r.euclidean_radius() - 0.5).abs() < 1e-12);
    assert!((r.angle() - 13.0 * PI / 8.0).abs() < 1e-12);
}

#[test]
fn chord_reflection_fixes_the_chord_line() {
    let through = Point::new(0.3, -0.1);
    let slope = Slope::Finite(2.0);
    // A point on the line reflects to itself.
    let on_line = Point::new(0.4, -0.1 + 2.0 * 0.1);
    let fixed = reflect_across_chord(on_line, through, slope);
    assert!((fixed.vec() - on_line.vec()).norm() < 1e-12);
    // Vertical chord: plain x-mirror about the through-point.
    let v = reflect_across_chord(Point::new(0.5, 0.2), through, Slope::Vertical);
    assert!((v.x() - 0.1).abs() < 1e-12);
    assert!((v.y() - 0.2).abs() < 1e-12);
}

#[test]
fn slope_perpendicular_cases() {
    assert_eq!(Slope::Finite(2.0).perpendicular(), Slope::Finite(-0.5));
    assert_eq!(Slope::Finite(0.0).perpendicular(), Slope::Vertical);
    assert_eq!(Slope::Vertical.perpendicular(), Slope::Finite(0.0));
    assert_eq!(Slope::from_angle(FRAC_PI_2), Slope::Vertical);
    assert_eq!(Slope::from_angle(3.0 * FRAC_PI_2), Slope::Vertical);
    match Slope::from_angle(FRAC_PI_4) {
        Slope::Finite(m) => assert!((m - 1.0).abs() < 1e-12),
        Slope::Vertical => panic!("π/4 is not vertical"),
    }
}

#[test]
fn geodesic_circle_is_orthogonal_to_unit_circle() {
    let p = Point::from_polar(0.84, 0.0);
    let q = Point::from_polar(0.84, FRAC_PI_4);
    let c = Circle::geodesic_through(p, q).expect("non-diameter geodesic");
    // Orthogonality: ‖center‖² = radius² + 1.
    assert!((c.center().norm_squared() - (c.radius() * c.radius() + 1.0)).abs() < 1e-9);
    // The endpoints sit on the circle.
    assert!(((p.vec() - c.center()).norm() - c.radius()).abs() < 1e-9);
    // The disk center is on the near side.
    assert!(!c.contains(Point::origin()));
    // A point past the chord midpoint is beyond the edge.
    let mid_angle = FRAC_PI_4 / 2.0;
    assert!(c.contains(Point::from_polar(0.9, mid_angle)));
}

#[test]
fn geodesic_through_diameter_pair_degenerates() {
    let p = Point::from_polar(0.3, 1.0);
    let q = Point::from_polar(0.6, 1.0 + PI);
    assert!(Circle::geodesic_through(p, q).is_none());
}

#[test]
fn heading_toward_quadrants() {
    let o = Point::origin();
    assert!((heading_toward(o, Point::new(1.0, 0.0))).abs() < 1e-12);
    assert!((heading_toward(o, Point::new(0.0, 1.0)) - FRAC_PI_2).abs() < 1e-12);
    assert!((heading_toward(o, Point::new(-1.0, 0.0)) - PI).abs() < 1e-12);
    assert!((heading_toward(Point::new(0.2, 0.2), Point::new(0.1, 0.1)) - 5.0 * FRAC_PI_4).abs()
        < 1e-12);
}

proptest! {
    #[test]
    fn normalize_is_idempotent(a in -100.0f64..100.0) {
        let once = normalize_angle(a);
        prop_assert!((0.0..TAU).contains(&once));
        prop_assert!((normalize_angle(once) - once).abs() < 1e-12);
    }

    #[test]
    fn mobius_add_identities(r in 0.0f64..0.9, th in 0.0f64..TAU) {
        let p = Point::from_polar(r, th);
        let zero = nalgebra::Vector2::zeros();
        prop_assert!((mobius_add(p.vec(), zero) - p.vec()).norm() < 1e-12);
        prop_assert!((mobius_add(zero, p.vec()) - p.vec()).norm() < 1e-12);
    }

    #[test]
    fn geodesic_step_covers_its_distance(
        r in 0.0f64..0.8,
        th in 0.0f64..TAU,
        dir in 0.0f64..TAU,
        t in 1e-4f64..0.5,
    ) {
        let p = Point::from_polar(r, th);
        let q = p.distant_point(t, dir);
        prop_assert!((p.distance_to(q) - t).abs() < 1e-9);
        prop_assert!(q.euclidean_radius() < 1.0);
    }

    #[test]
    fn reflections_are_involutions(
        r in 0.0f64..0.9,
        th in 0.0f64..TAU,
        mirror in 0.0f64..TAU,
        slope in -5.0f64..5.0,
    ) {
        let p = Point::from_polar(r, th);
        let twice = reflect_across_diameter(reflect_across_diameter(p, mirror), mirror);
        prop_assert!((twice.vec() - p.vec()).norm() < 1e-9);
        let through = Point::new(0.1, -0.2);
        let s = Slope::Finite(slope);
        let back = reflect_across_chord(reflect_across_chord(p, through, s), through, s);
        prop_assert!((back.vec() - p.vec()).norm() < 1e-9);
    }
}
