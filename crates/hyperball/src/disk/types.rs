//! Basic disk types: points and slopes.
//!
//! - `Point`: immutable position in the open unit disk, with Cartesian and
//!   Euclidean-polar accessors. Operations always produce new points.
//! - `Slope`: slope of a Euclidean line with an explicit vertical variant,
//!   so near-vertical tangents never turn into non-finite numbers.

use nalgebra::Vector2;

use super::mobius;
use super::util::normalize_angle;

/// Cutoff below which `cos`/slope denominators count as zero.
const EPS_DEGENERATE: f64 = 1e-12;

/// A position in the Poincaré disk. Immutable value type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    v: Vector2<f64>,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            v: Vector2::new(x, y),
        }
    }

    #[inline]
    pub fn from_vec(v: Vector2<f64>) -> Self {
        Self { v }
    }

    /// Point at Euclidean polar coordinates relative to the disk center.
    #[inline]
    pub fn from_polar(radius: f64, angle: f64) -> Self {
        Self::new(radius * angle.cos(), radius * angle.sin())
    }

    #[inline]
    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.v.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.v.y
    }

    #[inline]
    pub fn vec(&self) -> Vector2<f64> {
        self.v
    }

    /// Euclidean angle of the point seen from the disk center, in `[0, 2π)`.
    #[inline]
    pub fn angle(&self) -> f64 {
        normalize_angle(self.v.y.atan2(self.v.x))
    }

    /// Euclidean distance from the disk center.
    #[inline]
    pub fn euclidean_radius(&self) -> f64 {
        self.v.norm()
    }

    /// Hyperbolic distance from the disk center.
    #[inline]
    pub fn hyperbolic_radius(&self) -> f64 {
        2.0 * self.v.norm().atanh()
    }

    /// Walk `distance` along the geodesic ray leaving this point with
    /// tangent angle `direction`.
    pub fn distant_point(&self, distance: f64, direction: f64) -> Point {
        let reach = (distance / 2.0).tanh();
        let v = Vector2::new(reach * direction.cos(), reach * direction.sin());
        Point::from_vec(mobius::mobius_add(self.v, v))
    }

    /// Hyperbolic distance to `other`.
    #[inline]
    pub fn distance_to(&self, other: Point) -> f64 {
        mobius::distance(self.v, other.v)
    }
}

/// Slope of a Euclidean line, with the vertical case explicit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Slope {
    Finite(f64),
    Vertical,
}

impl Slope {
    /// Slope of the line with the given direction angle.
    pub fn from_angle(angle: f64) -> Self {
        if angle.cos().abs() < EPS_DEGENERATE {
            Slope::Vertical
        } else {
            Slope::Finite(angle.tan())
        }
    }

    /// Slope of a perpendicular line.
    pub fn perpendicular(self) -> Self {
        match self {
            Slope::Vertical => Slope::Finite(0.0),
            Slope::Finite(m) if m.abs() < EPS_DEGENERATE => Slope::Vertical,
            Slope::Finite(m) => Slope::Finite(-1.0 / m),
        }
    }

    /// Unit direction vector along a line with this slope.
    pub fn unit_direction(self) -> Vector2<f64> {
        match self {
            Slope::Vertical => Vector2::new(0.0, 1.0),
            Slope::Finite(m) => Vector2::new(1.0, m) / (1.0 + m * m).sqrt(),
        }
    }
}
