//! Spatial aggregation: collapse dense point clouds into grid centroids.

use ahash::RandomState;
use indexmap::IndexMap;

use crate::point::{AggregateInfo, Point3D};
use crate::record::FieldValue;

#[derive(Debug, Clone, Copy)]
struct AxisRange {
    min: f64,
    step: f64,
    last_cell: i64,
}

impl AxisRange {
    fn compute(values: impl Iterator<Item = f64>, grid_size: usize) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values {
            min = min.min(v);
            max = max.max(v);
        }
        let mut step = (max - min) / grid_size as f64;
        // All values equal on this axis: clamp to avoid dividing by zero.
        if step == 0.0 {
            step = 1.0;
        }
        Self {
            min,
            step,
            last_cell: grid_size as i64 - 1,
        }
    }

    /// Cell index for a value. The axis maximum sits exactly on the upper
    /// grid boundary, so the index is clamped into `0..grid_size`.
    fn cell(&self, v: f64) -> i64 {
        let cell = ((v - self.min) / self.step).floor() as i64;
        cell.clamp(0, self.last_cell)
    }
}

struct Bucket {
    sum: glam::DVec3,
    count: usize,
    samples: Vec<Point3D>,
    first_index: usize,
}

/// Collapse `points` into at most `target_bucket_count` grid centroids.
///
/// Identity when the input already fits the budget (or the budget is zero).
/// Each axis is divided into `ceil(sqrt(target_bucket_count))` cells; every
/// occupied cell emits one point at the arithmetic mean of its members,
/// tagged with an [`AggregateInfo`] carrying the member count and up to
/// three sample members for tooltips.
///
/// Output order is the order in which buckets were first occupied, so the
/// result is deterministic for a given input order and never longer than the
/// input.
pub fn aggregate(points: &[Point3D], target_bucket_count: usize) -> Vec<Point3D> {
    if target_bucket_count == 0 || points.len() <= target_bucket_count {
        return points.to_vec();
    }

    let grid_size = (target_bucket_count as f64).sqrt().ceil() as usize;
    let x_range = AxisRange::compute(points.iter().map(|p| p.x), grid_size);
    let y_range = AxisRange::compute(points.iter().map(|p| p.y), grid_size);
    let z_range = AxisRange::compute(points.iter().map(|p| p.z), grid_size);

    // IndexMap keeps first-occupied order, so output order is deterministic.
    let mut buckets: IndexMap<(i64, i64, i64), Bucket, RandomState> =
        IndexMap::with_hasher(RandomState::new());

    for point in points {
        let key = (
            x_range.cell(point.x),
            y_range.cell(point.y),
            z_range.cell(point.z),
        );
        let bucket = buckets.entry(key).or_insert_with(|| Bucket {
            sum: glam::DVec3::ZERO,
            count: 0,
            samples: Vec::with_capacity(AggregateInfo::MAX_SAMPLES),
            first_index: point.index,
        });
        bucket.sum += glam::DVec3::new(point.x, point.y, point.z);
        bucket.count += 1;
        if bucket.samples.len() < AggregateInfo::MAX_SAMPLES {
            bucket.samples.push(point.clone());
        }
    }

    let reduced: Vec<Point3D> = buckets
        .into_values()
        .map(|bucket| {
            let centroid = bucket.sum / bucket.count as f64;
            Point3D {
                x: centroid.x,
                y: centroid.y,
                z: centroid.z,
                source_x: FieldValue::Number(centroid.x),
                source_y: FieldValue::Number(centroid.y),
                source_z: FieldValue::Number(centroid.z),
                index: bucket.first_index,
                aggregate: Some(AggregateInfo {
                    count: bucket.count,
                    samples: bucket.samples,
                }),
            }
        })
        .collect();

    tracing::trace!(
        input = points.len(),
        output = reduced.len(),
        grid = grid_size,
        "aggregated point cloud"
    );
    reduced
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f64, y: f64, z: f64, index: usize) -> Point3D {
        Point3D::new(
            x,
            y,
            z,
            FieldValue::Number(x),
            FieldValue::Number(y),
            FieldValue::Number(z),
            index,
        )
    }

    #[test]
    fn test_identity_when_under_budget() {
        let points = vec![point(1.0, 2.0, 3.0, 0), point(4.0, 5.0, 6.0, 1)];
        let out = aggregate(&points, 10);
        assert_eq!(out, points);
    }

    #[test]
    fn test_never_expands() {
        let points: Vec<_> = (0..500)
            .map(|i| point(i as f64, (i * 7 % 13) as f64, (i * 3 % 5) as f64, i))
            .collect();
        for budget in [1, 4, 16, 100, 499] {
            let out = aggregate(&points, budget);
            assert!(out.len() <= points.len());
            let grid = (budget as f64).sqrt().ceil() as usize;
            assert!(out.len() <= grid.pow(3));
        }
    }

    #[test]
    fn test_two_cluster_centroids() {
        // Two tight clusters far apart; a coarse grid puts each in its own
        // cell, so the output is exactly the two cluster means.
        let mut points = Vec::new();
        for i in 0..10 {
            points.push(point(i as f64 * 0.1, 0.0, 0.0, i));
        }
        for i in 0..10 {
            points.push(point(100.0 + i as f64 * 0.1, 0.0, 0.0, 10 + i));
        }
        let out = aggregate(&points, 4);
        assert_eq!(out.len(), 2);
        let mean_a: f64 = (0..10).map(|i| i as f64 * 0.1).sum::<f64>() / 10.0;
        assert!((out[0].x - mean_a).abs() < 1e-9);
        assert!((out[1].x - (100.0 + mean_a)).abs() < 1e-9);
        assert_eq!(out[0].weight(), 10);
    }

    #[test]
    fn test_identical_points_single_bucket() {
        let points = vec![
            point(1.0, 1.0, 1.0, 0),
            point(1.0, 1.0, 1.0, 1),
            point(1.0, 1.0, 1.0, 2),
            point(1.0, 1.0, 1.0, 3),
        ];
        let out = aggregate(&points, 1);
        assert_eq!(out.len(), 1);
        assert_eq!((out[0].x, out[0].y, out[0].z), (1.0, 1.0, 1.0));
        let info = out[0].aggregate.as_ref().unwrap();
        assert_eq!(info.count, 4);
        assert_eq!(info.samples.len(), 3);
    }

    #[test]
    fn test_zero_range_axis_no_panic() {
        // Every z identical: the z step clamps to 1 instead of dividing by 0.
        let points: Vec<_> = (0..100).map(|i| point(i as f64, i as f64, 5.0, i)).collect();
        let out = aggregate(&points, 9);
        assert!(!out.is_empty());
        assert!(out.iter().all(|p| p.z == 5.0));
    }

    #[test]
    fn test_deterministic() {
        let points: Vec<_> = (0..300)
            .map(|i| point((i % 17) as f64, (i % 23) as f64, (i % 5) as f64, i))
            .collect();
        assert_eq!(aggregate(&points, 25), aggregate(&points, 25));
    }
}
