//! Axis normalization: records to numeric points.

use crate::error::{PlotError, PlotResult};
use crate::point::Point3D;
use crate::record::{FieldValue, Record};
use crate::request::ChartKind;
use crate::schema::{AxisFields, DatasetSchema, FieldKind};

/// Which axis a value is being resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Policy for missing or non-numeric axis values in non-bar charts.
///
/// All variants are deterministic. `AxisDefault` mirrors the historical
/// substitution behavior (row position on x, baseline on y/z) without the
/// random jitter it used to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingValuePolicy {
    /// Substitute the row index for x and 0.0 for y/z.
    #[default]
    AxisDefault,
    /// Substitute 0.0 on every axis.
    Zero,
    /// Substitute the row index on every axis.
    RowIndex,
    /// Fail the invocation with [`PlotError::MissingValue`].
    Reject,
}

impl MissingValuePolicy {
    fn resolve(&self, axis: Axis, field: &str, row: usize) -> PlotResult<f64> {
        match self {
            MissingValuePolicy::AxisDefault => Ok(match axis {
                Axis::X => row as f64,
                Axis::Y | Axis::Z => 0.0,
            }),
            MissingValuePolicy::Zero => Ok(0.0),
            MissingValuePolicy::RowIndex => Ok(row as f64),
            MissingValuePolicy::Reject => Err(PlotError::MissingValue {
                field: field.to_owned(),
                row,
            }),
        }
    }
}

fn source_value(record: &Record, field: &str) -> FieldValue {
    record
        .get(field)
        .cloned()
        .unwrap_or(FieldValue::Text(String::new()))
}

fn resolve_numeric(
    record: &Record,
    field: &str,
    axis: Axis,
    row: usize,
    policy: MissingValuePolicy,
) -> PlotResult<f64> {
    match record.get(field).and_then(FieldValue::as_number) {
        Some(n) => Ok(n),
        None => policy.resolve(axis, field, row),
    }
}

fn resolve_bar_axis(
    record: &Record,
    field: &str,
    kind: &FieldKind,
    axis: Axis,
    row: usize,
    policy: MissingValuePolicy,
) -> PlotResult<f64> {
    match kind {
        FieldKind::Numeric => resolve_numeric(record, field, axis, row, policy),
        FieldKind::Categorical(index) => {
            let label = source_value(record, field).to_string();
            match index.ordinal(&label) {
                Some(ordinal) => Ok(ordinal as f64),
                // Only reachable for records with the field absent.
                None => policy.resolve(axis, field, row),
            }
        }
    }
}

/// Map one record to a normalized point.
///
/// Bar charts route categorical x/y fields through the schema's ordinal
/// index; every other chart kind coerces all three fields numerically and
/// falls back to `policy` for unusable values. z is always numeric.
pub fn normalize_record(
    record: &Record,
    row: usize,
    axes: &AxisFields,
    schema: &DatasetSchema,
    chart_kind: ChartKind,
    policy: MissingValuePolicy,
) -> PlotResult<Point3D> {
    let (x, y) = if chart_kind == ChartKind::Bar3d {
        (
            resolve_bar_axis(record, &axes.x, &schema.x, Axis::X, row, policy)?,
            resolve_bar_axis(record, &axes.y, &schema.y, Axis::Y, row, policy)?,
        )
    } else {
        (
            resolve_numeric(record, &axes.x, Axis::X, row, policy)?,
            resolve_numeric(record, &axes.y, Axis::Y, row, policy)?,
        )
    };
    let z = resolve_numeric(record, &axes.z, Axis::Z, row, policy)?;

    Ok(Point3D::new(
        x,
        y,
        z,
        source_value(record, &axes.x),
        source_value(record, &axes.y),
        source_value(record, &axes.z),
        row,
    ))
}

/// Normalize a whole dataset.
pub fn normalize(
    records: &[Record],
    axes: &AxisFields,
    schema: &DatasetSchema,
    chart_kind: ChartKind,
    policy: MissingValuePolicy,
) -> PlotResult<Vec<Point3D>> {
    records
        .iter()
        .enumerate()
        .map(|(row, record)| normalize_record(record, row, axes, schema, chart_kind, policy))
        .collect()
}
