//! Normalized, render-ready points.

use crate::record::FieldValue;

/// Provenance of an aggregated point.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateInfo {
    /// How many input points this centroid stands for.
    pub count: usize,
    /// Up to [`AggregateInfo::MAX_SAMPLES`] original member points, kept so
    /// tooltips can show concrete examples instead of just a count.
    pub samples: Vec<Point3D>,
}

impl AggregateInfo {
    /// Member points retained per bucket for tooltip display.
    pub const MAX_SAMPLES: usize = 3;
}

/// One normalized point, carrying both render coordinates and the original
/// field values they came from.
///
/// Coordinates are always finite; the axis normalizer resolves missing and
/// non-finite inputs before a `Point3D` is ever constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Original field value behind `x` (categorical label or raw number).
    pub source_x: FieldValue,
    /// Original field value behind `y`.
    pub source_y: FieldValue,
    /// Original field value behind `z`.
    pub source_z: FieldValue,
    /// Zero-based index of the source record.
    pub index: usize,
    /// Present when this point is an aggregation centroid.
    pub aggregate: Option<AggregateInfo>,
}

impl Point3D {
    /// Construct a plain (non-aggregated) point.
    pub fn new(
        x: f64,
        y: f64,
        z: f64,
        source_x: FieldValue,
        source_y: FieldValue,
        source_z: FieldValue,
        index: usize,
    ) -> Self {
        debug_assert!(x.is_finite() && y.is_finite() && z.is_finite());
        Self {
            x,
            y,
            z,
            source_x,
            source_y,
            source_z,
            index,
            aggregate: None,
        }
    }

    /// True when this point is an aggregation centroid.
    pub fn is_aggregated(&self) -> bool {
        self.aggregate.is_some()
    }

    /// Number of input points behind this one (1 unless aggregated).
    pub fn weight(&self) -> usize {
        self.aggregate.as_ref().map_or(1, |a| a.count)
    }
}
