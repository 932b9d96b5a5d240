//! Fundamental domain, edge gluing, and the boundary-crossing engine.
//!
//! Purpose
//! - Represent a closed hyperbolic surface as a regular N-gon in the disk
//!   with edges identified in pairs, and continue geodesic motion across an
//!   identified edge by an orientation-preserving isometry (two composed
//!   reflections).
//!
//! Why this design
//! - The domain and gluing are built once, validated once, and read-only
//!   afterwards; per-tick work is pure lookup plus the reflection math.
//! - One parametric construction serves both shipped surfaces (genus-2
//!   octagon, hexagon quotient); they differ only in configuration.
//!
//! Code cross-refs: `disk::{Point,Circle,Slope,reflect_across_diameter,
//! reflect_across_chord,heading_toward}`, `sim::Simulation`.

mod build;
mod crossing;
mod types;

pub use build::{genus2_octagon, hexagon_quotient, SURFACE_RADIUS};
pub use crossing::{advance, transit};
pub use types::{
    ConfigError, Crossing, DomainCfg, DomainError, EdgeId, FundamentalDomain, Gluing, GluingError,
    Step,
};
