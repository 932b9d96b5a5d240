//! Angle utilities.

use std::f64::consts::{PI, TAU};

use super::types::Point;

/// Canonicalize an angle into `[0, 2π)`. Idempotent.
#[inline]
pub fn normalize_angle(a: f64) -> f64 {
    let r = a.rem_euclid(TAU);
    // rem_euclid can round a tiny negative input up to exactly 2π.
    if r >= TAU {
        0.0
    } else {
        r
    }
}

/// The angle pointing the opposite way, normalized.
#[inline]
pub fn opposite_angle(a: f64) -> f64 {
    normalize_angle(a + PI)
}

/// Euclidean tangent angle of the ray from `from` toward `to`, in `[0, 2π)`.
///
/// The disk model is conformal, so this is also the hyperbolic direction of
/// the geodesic from `from` through `to` at the point `from`.
#[inline]
pub fn heading_toward(from: Point, to: Point) -> f64 {
    normalize_angle((to.y() - from.y()).atan2(to.x() - from.x()))
}
