//! The boundary-crossing engine.
//!
//! A candidate position that falls beyond a polygon edge is re-entered
//! through the glued edge by composing two reflections:
//!
//! 1. across the exit edge's mirror diameter, which carries the exited
//!    neighborhood onto the entered one but reverses orientation;
//! 2. across the chord tangent to the entry edge's bounding circle at the
//!    landing point, which restores orientation.
//!
//! The composition is a direct isometry, so the heading derived from the
//! doubly-reflected candidate continues the trajectory instead of
//! bouncing it back: the hyperbolic analogue of a toroidal wrap, but
//! edge-pair-specific.

use crate::disk::{
    heading_toward, reflect_across_chord, reflect_across_diameter, Point, Slope,
};

use super::types::{Crossing, EdgeId, FundamentalDomain, Gluing, Step};

/// Walk `step` along the geodesic from `position` in `direction` and commit
/// the result, rewriting position and heading if the walk leaves the domain
/// through a glued edge.
pub fn advance(
    domain: &FundamentalDomain,
    gluing: &Gluing,
    position: Point,
    direction: f64,
    step: f64,
) -> Step {
    let candidate = position.distant_point(step, direction);
    transit(domain, gluing, position, candidate, direction)
}

/// Commit a precomputed `candidate` for an agent currently at `position`
/// heading in `direction`.
///
/// Candidates inside the safe circle commit unchanged. Outside it, the
/// edge circles are scanned in index order and the first containment names
/// the exit edge; a candidate beyond the safe circle but inside no edge
/// circle is in the annulus between the safe circle and the boundary and
/// commits unchanged as well (a grazing pass, not a crossing).
pub fn transit(
    domain: &FundamentalDomain,
    gluing: &Gluing,
    position: Point,
    candidate: Point,
    direction: f64,
) -> Step {
    if domain.safe().contains(candidate) {
        return Step {
            position: candidate,
            direction,
            crossing: None,
        };
    }
    let Some(exit) = domain.edges().iter().position(|edge| edge.contains(candidate)) else {
        return Step {
            position: candidate,
            direction,
            crossing: None,
        };
    };
    let exit = EdgeId(exit);
    let entry = gluing.pair(exit);
    let mirror = domain.mirror_angle(gluing.mirror_for(exit));

    // First reflection: carry the current position (not the candidate) and
    // the candidate across the mirror diameter.
    let transformed = reflect_across_diameter(position, mirror);
    let auxiliary = reflect_across_diameter(candidate, mirror);

    // Second reflection: across the chord tangent to the entry edge's
    // circle at the landing point. The tangent slope is perpendicular to
    // the radial angle there; `Slope` keeps the vertical case finite.
    let tangent = Slope::from_angle(domain.edge(entry).angle_at(transformed)).perpendicular();
    let landing = reflect_across_chord(auxiliary, transformed, tangent);

    Step {
        position: transformed,
        direction: heading_toward(transformed, landing),
        crossing: Some(Crossing { exit, entry }),
    }
}
