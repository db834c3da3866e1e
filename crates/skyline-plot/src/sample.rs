//! Systematic (fixed-stride) sampling.

use crate::point::Point3D;

/// Keep roughly `factor` of `points` by fixed-stride selection.
///
/// `factor >= 1` is the identity; otherwise the output holds
/// `floor(len * factor)` points taken at a constant stride, so the survivors
/// keep their relative order and the selection is fully deterministic —
/// unlike random sampling, two runs over the same input agree exactly.
pub fn sample(points: &[Point3D], factor: f64) -> Vec<Point3D> {
    if factor >= 1.0 || points.is_empty() {
        return points.to_vec();
    }

    let target = (points.len() as f64 * factor).floor() as usize;
    if target == 0 {
        return Vec::new();
    }

    let step = points.len() as f64 / target as f64;
    let sampled: Vec<Point3D> = (0..target)
        .map(|i| points[(i as f64 * step).floor() as usize].clone())
        .collect();

    tracing::trace!(input = points.len(), output = sampled.len(), factor, "sampled point set");
    sampled
}
