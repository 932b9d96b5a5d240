//! Circles in their Euclidean representation.
//!
//! Both roles the engine needs share one type:
//! - the full Euclidean circle carrying a geodesic between two interior
//!   points (orthogonal to the unit circle), used as a polygon edge's
//!   bounding curve; containment in it means "beyond that edge";
//! - a hyperbolic circle centered at the disk center, used as the safe
//!   region.

use nalgebra::{matrix, Vector2};

use super::types::Point;
use super::util::normalize_angle;

const EPS_DET: f64 = 1e-12;

/// A Euclidean circle in the disk plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    center: Vector2<f64>,
    radius: f64,
}

impl Circle {
    #[inline]
    pub fn new(center: Vector2<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Hyperbolic circle about the disk center with hyperbolic radius `r`.
    /// Its Euclidean radius is `tanh(r/2)`.
    pub fn hyperbolic_about_origin(r: f64) -> Self {
        Self::new(Vector2::zeros(), (r / 2.0).tanh())
    }

    /// The circle orthogonal to the unit circle through `p` and `q`
    /// (the carrier of the geodesic segment between them).
    ///
    /// Orthogonality pins the center `o` by `2⟨o,p⟩ = ‖p‖² + 1` and
    /// `2⟨o,q⟩ = ‖q‖² + 1`; the radius follows from `‖o‖² = r² + 1`.
    /// Returns `None` when `p` and `q` are collinear with the center (the
    /// geodesic is a diameter, not a circle).
    pub fn geodesic_through(p: Point, q: Point) -> Option<Circle> {
        let a = matrix![2.0 * p.x(), 2.0 * p.y(); 2.0 * q.x(), 2.0 * q.y()];
        if a.determinant().abs() < EPS_DET {
            return None;
        }
        let rhs = Vector2::new(
            p.vec().norm_squared() + 1.0,
            q.vec().norm_squared() + 1.0,
        );
        let center = a.try_inverse()? * rhs;
        let r_sq = center.norm_squared() - 1.0;
        if r_sq <= 0.0 {
            return None;
        }
        Some(Circle::new(center, r_sq.sqrt()))
    }

    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Strict Euclidean containment.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        (p.vec() - self.center).norm() < self.radius
    }

    /// Angle of `p` seen from this circle's Euclidean center, in `[0, 2π)`.
    /// The tangent direction at `p` is perpendicular to this angle's slope.
    #[inline]
    pub fn angle_at(&self, p: Point) -> f64 {
        normalize_angle((p.y() - self.center.y).atan2(p.x() - self.center.x))
    }
}
