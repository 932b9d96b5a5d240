//! Data types for the fundamental domain, the gluing tables, and the
//! crossing engine's results.

use thiserror::Error;

use crate::disk::{Circle, Point};

/// Polygon edge index, `0..N` counterclockwise from the vertex at angle 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EdgeId(pub usize);

/// Geometry configuration of the fundamental polygon.
#[derive(Clone, Copy, Debug)]
pub struct DomainCfg {
    /// Side count N (even; side-pairing needs paired edges).
    pub sides: usize,
    /// Hyperbolic circumradius (center to vertex).
    pub radius: f64,
    /// Hyperbolic radius of the safe circle; candidates inside it skip the
    /// edge scan entirely.
    pub safe_radius: f64,
}

/// The regular N-gon chart of the surface: edge bounding circles, mirror
/// diameters, and the safe circle. Immutable after construction.
#[derive(Clone, Debug)]
pub struct FundamentalDomain {
    cfg: DomainCfg,
    edges: Vec<Circle>,
    mirrors: Vec<f64>,
    safe: Circle,
}

impl FundamentalDomain {
    pub(crate) fn from_parts(
        cfg: DomainCfg,
        edges: Vec<Circle>,
        mirrors: Vec<f64>,
        safe: Circle,
    ) -> Self {
        Self {
            cfg,
            edges,
            mirrors,
            safe,
        }
    }

    #[inline]
    pub fn cfg(&self) -> DomainCfg {
        self.cfg
    }

    #[inline]
    pub fn sides(&self) -> usize {
        self.cfg.sides
    }

    /// Bounding circle of edge `e`; containment means "beyond that edge".
    #[inline]
    pub fn edge(&self, e: EdgeId) -> &Circle {
        &self.edges[e.0]
    }

    #[inline]
    pub fn edges(&self) -> &[Circle] {
        &self.edges
    }

    /// Angle of mirror diameter `m` (through the midpoint of edge `m`).
    #[inline]
    pub fn mirror_angle(&self, m: usize) -> f64 {
        self.mirrors[m]
    }

    #[inline]
    pub fn safe(&self) -> &Circle {
        &self.safe
    }
}

/// Side-pairing tables: which edge each edge is glued to, and which mirror
/// diameter seeds the crossing transform for each exit edge.
///
/// Validated once at construction; lookups cannot fail afterwards.
#[derive(Clone, Debug)]
pub struct Gluing {
    pair: Vec<usize>,
    mirror: Vec<usize>,
}

impl Gluing {
    pub fn new(pair: Vec<usize>, mirror: Vec<usize>) -> Result<Self, GluingError> {
        let n = pair.len();
        if mirror.len() != n {
            return Err(GluingError::LengthMismatch {
                pair: n,
                mirror: mirror.len(),
            });
        }
        let mut hit = vec![false; n];
        for (edge, &target) in pair.iter().enumerate() {
            if target >= n {
                return Err(GluingError::PairOutOfRange { edge, target });
            }
            if target == edge {
                return Err(GluingError::SelfPaired { edge });
            }
            if hit[target] {
                return Err(GluingError::NotInjective { target });
            }
            hit[target] = true;
        }
        for (edge, &m) in mirror.iter().enumerate() {
            if m >= n {
                return Err(GluingError::MirrorOutOfRange { edge, mirror: m });
            }
        }
        Ok(Self { pair, mirror })
    }

    #[inline]
    pub fn sides(&self) -> usize {
        self.pair.len()
    }

    /// The edge identified with `e`.
    #[inline]
    pub fn pair(&self, e: EdgeId) -> EdgeId {
        EdgeId(self.pair[e.0])
    }

    /// Mirror index used when exiting through `e`.
    #[inline]
    pub fn mirror_for(&self, e: EdgeId) -> usize {
        self.mirror[e.0]
    }
}

/// One committed engine step.
#[derive(Clone, Copy, Debug)]
pub struct Step {
    pub position: Point,
    /// Heading in `[0, 2π)`.
    pub direction: f64,
    /// `Some` iff the step crossed a glued edge.
    pub crossing: Option<Crossing>,
}

/// A chart transition: which edge was exited and which was entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crossing {
    pub exit: EdgeId,
    pub entry: EdgeId,
}

/// Construction-time failure of the polygon geometry.
#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("a fundamental polygon needs at least 4 sides, got {sides}")]
    TooFewSides { sides: usize },
    #[error("side-pairing needs an even side count, got {sides}")]
    OddSides { sides: usize },
    #[error("polygon radius must be positive, got {radius}")]
    NonPositiveRadius { radius: f64 },
    #[error("safe radius must be positive, got {radius}")]
    NonPositiveSafeRadius { radius: f64 },
    #[error("edge {index} degenerated to a diameter; polygon cannot be centered on a vertex ray")]
    DegenerateEdge { index: usize },
}

/// Construction-time failure of the gluing tables.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GluingError {
    #[error("pair table covers {pair} edges but mirror table covers {mirror}")]
    LengthMismatch { pair: usize, mirror: usize },
    #[error("edge {edge} pairs to out-of-range edge {target}")]
    PairOutOfRange { edge: usize, target: usize },
    #[error("edge {edge} is glued to itself")]
    SelfPaired { edge: usize },
    #[error("edge {target} is the pair of more than one edge")]
    NotInjective { target: usize },
    #[error("edge {edge} names out-of-range mirror {mirror}")]
    MirrorOutOfRange { edge: usize, mirror: usize },
}

/// Umbrella error for assembling a surface from configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Gluing(#[from] GluingError),
    #[error("gluing tables cover {gluing} edges but the domain has {domain}")]
    SideMismatch { domain: usize, gluing: usize },
}
