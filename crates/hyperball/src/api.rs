//! Curated internal API surface (UNSTABLE).
//!
//! Convenience re-exports grouped by layer; prefer these in drivers and
//! experiments for consistency. Not a stability promise.

// Disk primitives
pub use crate::disk::{
    distance, heading_toward, mobius_add, normalize_angle, opposite_angle, reflect_across_chord,
    reflect_across_diameter, Circle, Point, Slope,
};
// Fundamental domain, gluing, crossing engine
pub use crate::surface::{
    advance, genus2_octagon, hexagon_quotient, transit, ConfigError, Crossing, DomainCfg,
    DomainError, EdgeId, FundamentalDomain, Gluing, GluingError, Step, SURFACE_RADIUS,
};
// Simulation
pub use crate::sim::rand::{ReplayToken, TurnCfg, TurnSampler};
pub use crate::sim::{Ball, Instruction, SimCfg, Simulation, Turn};
