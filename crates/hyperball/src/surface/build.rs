//! Construction of fundamental domains and the shipped surface presets.

use std::f64::consts::{PI, TAU};

use crate::disk::{Circle, Point};

use super::types::{ConfigError, DomainCfg, DomainError, FundamentalDomain, Gluing};

impl FundamentalDomain {
    /// Build the regular N-gon chart: vertices at Euclidean radius
    /// `tanh(radius/2)` and angles `2πk/N`, one bounding orthocircle per
    /// edge, one mirror diameter per edge (through the edge midpoint, at
    /// angle `π/N + k·2π/N`), and the safe circle.
    pub fn new(cfg: DomainCfg) -> Result<Self, DomainError> {
        if cfg.sides < 4 {
            return Err(DomainError::TooFewSides { sides: cfg.sides });
        }
        if cfg.sides % 2 != 0 {
            return Err(DomainError::OddSides { sides: cfg.sides });
        }
        if !cfg.radius.is_finite() || cfg.radius <= 0.0 {
            return Err(DomainError::NonPositiveRadius { radius: cfg.radius });
        }
        if !cfg.safe_radius.is_finite() || cfg.safe_radius <= 0.0 {
            return Err(DomainError::NonPositiveSafeRadius {
                radius: cfg.safe_radius,
            });
        }

        let n = cfg.sides;
        let vertex_radius = (cfg.radius / 2.0).tanh();
        let vertices: Vec<Point> = (0..n)
            .map(|k| Point::from_polar(vertex_radius, TAU * k as f64 / n as f64))
            .collect();

        let mut edges = Vec::with_capacity(n);
        for i in 0..n {
            let circle = Circle::geodesic_through(vertices[i], vertices[(i + 1) % n])
                .ok_or(DomainError::DegenerateEdge { index: i })?;
            edges.push(circle);
        }
        let mirrors: Vec<f64> = (0..n)
            .map(|i| PI / n as f64 + TAU * i as f64 / n as f64)
            .collect();
        let safe = Circle::hyperbolic_about_origin(cfg.safe_radius);

        Ok(FundamentalDomain::from_parts(cfg, edges, mirrors, safe))
    }
}

/// Circumradius shared by both shipped surfaces: the regular right-angled
/// octagon's vertices sit at Euclidean radius 2^(−1/4).
pub const SURFACE_RADIUS: f64 = 2.44845244;

/// Genus-2 surface: octagon with opposite-ish sides identified.
pub fn genus2_octagon() -> Result<(FundamentalDomain, Gluing), ConfigError> {
    let domain = FundamentalDomain::new(DomainCfg {
        sides: 8,
        radius: SURFACE_RADIUS,
        safe_radius: 1.5,
    })?;
    let gluing = Gluing::new(
        vec![6, 7, 4, 5, 2, 3, 0, 1],
        vec![7, 0, 3, 4, 3, 4, 7, 0],
    )?;
    Ok((domain, gluing))
}

/// Hexagon quotient: six sides identified in two 3-cycles.
pub fn hexagon_quotient() -> Result<(FundamentalDomain, Gluing), ConfigError> {
    let domain = FundamentalDomain::new(DomainCfg {
        sides: 6,
        radius: SURFACE_RADIUS,
        safe_radius: 1.6,
    })?;
    let gluing = Gluing::new(vec![4, 5, 0, 1, 2, 3], vec![5, 0, 1, 2, 3, 4])?;
    Ok((domain, gluing))
}
