//! Poincaré-disk primitives.
//!
//! Purpose
//! - Provide the small set of hyperbolic-plane operations the crossing
//!   engine and the simulation consume: immutable points with Cartesian and
//!   polar views, distance-parameterized geodesic stepping (Möbius
//!   addition), circles in their Euclidean representation, and the two
//!   reflection families (across a diameter, across a chord line).
//!
//! Conventions
//! - The model is the open unit disk with curvature −1; the hyperbolic
//!   distance from the origin to a point at Euclidean radius `e` is
//!   `2·atanh(e)`.
//! - Directions are Euclidean tangent angles. The model is conformal, so
//!   these are also the hyperbolic directions; every public operation
//!   returns angles normalized into `[0, 2π)`.
//! - Fallible geometry (degenerate constructions) returns `Option`.

mod circle;
mod mobius;
mod reflect;
mod types;
mod util;

pub use circle::Circle;
pub use mobius::{distance, mobius_add};
pub use reflect::{reflect_across_chord, reflect_across_diameter};
pub use types::{Point, Slope};
pub use util::{heading_toward, normalize_angle, opposite_angle};

#[cfg(test)]
mod tests;
