//! Reflections used by the crossing isometry.
//!
//! A crossing composes two reflections: one across a mirror diameter (a
//! hyperbolic reflection fixing the disk center), then one across a short
//! chord line at the landing point. Each alone reverses orientation; the
//! composition is direct, so the agent's sense of forward survives the seam.

use super::types::{Point, Slope};
use super::util::normalize_angle;

/// Reflect `p` across the diameter at angle `mirror_angle`.
///
/// In Euclidean polar terms `(r, φ) ↦ (r, 2α − φ)`; because the diameter
/// passes through the center this is also the hyperbolic reflection in that
/// geodesic.
pub fn reflect_across_diameter(p: Point, mirror_angle: f64) -> Point {
    Point::from_polar(
        p.euclidean_radius(),
        normalize_angle(2.0 * mirror_angle - p.angle()),
    )
}

/// Reflect `p` across the line through `through` with slope `slope`.
pub fn reflect_across_chord(p: Point, through: Point, slope: Slope) -> Point {
    let d = slope.unit_direction();
    let n = nalgebra::Vector2::new(-d.y, d.x);
    let offset = n.dot(&(p.vec() - through.vec()));
    Point::from_vec(p.vec() - 2.0 * offset * n)
}
