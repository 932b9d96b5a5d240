//! Möbius addition and geodesic distance (curvature −1).

use nalgebra::Vector2;

/// Möbius addition `p ⊕ v` in the unit disk.
///
/// Real-vector form of the gyrovector sum:
/// `p ⊕ v = ((1 + 2⟨p,v⟩ + ‖v‖²)p + (1 − ‖p‖²)v) / (1 + 2⟨p,v⟩ + ‖p‖²‖v‖²)`.
///
/// The left translation `x ↦ p ⊕ x` is an isometry taking the origin to `p`
/// whose differential at the origin is a positive scalar, so radial rays at
/// the origin map to geodesic rays at `p` with the same tangent angle. This
/// is what makes [`crate::disk::Point::distant_point`] correct.
pub fn mobius_add(p: Vector2<f64>, v: Vector2<f64>) -> Vector2<f64> {
    let p_sq = p.norm_squared();
    let v_sq = v.norm_squared();
    let pv = p.dot(&v);
    let denom = 1.0 + 2.0 * pv + p_sq * v_sq;
    // denom = |1 + p̄v|² in complex form; strictly positive inside the disk.
    debug_assert!(denom > 0.0, "Möbius denominator {denom} for interior points");
    ((1.0 + 2.0 * pv + v_sq) * p + (1.0 - p_sq) * v) / denom
}

/// Geodesic distance between two interior points:
/// `acosh(1 + 2‖p−q‖² / ((1−‖p‖²)(1−‖q‖²)))`.
pub fn distance(p: Vector2<f64>, q: Vector2<f64>) -> f64 {
    let diff_sq = (p - q).norm_squared();
    let arg = 1.0 + 2.0 * diff_sq / ((1.0 - p.norm_squared()) * (1.0 - q.norm_squared()));
    if arg <= 1.0 {
        return 0.0;
    }
    arg.acosh()
}
