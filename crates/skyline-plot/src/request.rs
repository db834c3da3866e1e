//! Plot requests: everything one pipeline invocation needs.

use crate::layout::Theme;
use crate::normalize::MissingValuePolicy;
use crate::record::Record;
use crate::schema::AxisFields;
use crate::tier::TierOverrides;

/// The supported 3D chart kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Scatter3d,
    Surface3d,
    Mesh3d,
    Bar3d,
}

impl ChartKind {
    /// Parse the chart-kind names used by the upload UI.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "scatter3d" => Some(ChartKind::Scatter3d),
            "surface3d" => Some(ChartKind::Surface3d),
            "mesh3d" => Some(ChartKind::Mesh3d),
            "bar3d" => Some(ChartKind::Bar3d),
            _ => None,
        }
    }
}

/// One pipeline invocation's full input.
///
/// Construct through [`PlotRequestBuilder`](crate::builder::PlotRequestBuilder),
/// which validates the axis configuration.
#[derive(Debug, Clone, Default)]
pub struct PlotRequest {
    pub records: Vec<Record>,
    pub axes: AxisFields,
    pub chart_kind: ChartKind,
    pub palette_name: String,
    pub theme: Theme,
    pub missing_policy: MissingValuePolicy,
    pub tier_overrides: TierOverrides,
}
