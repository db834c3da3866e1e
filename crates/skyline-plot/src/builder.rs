//! Fluent request builder.
//!
//! # Example
//!
//! ```
//! use skyline_plot::{PlotRequestBuilder, Record};
//!
//! let request = PlotRequestBuilder::bar3d()
//!     .x_field("region")
//!     .y_field("quarter")
//!     .z_field("revenue")
//!     .palette("sunset")
//!     .dark_theme()
//!     .records(vec![
//!         Record::new().with("region", "EMEA").with("quarter", "Q1").with("revenue", 120.0),
//!     ])
//!     .build()
//!     .unwrap();
//! assert_eq!(request.records.len(), 1);
//! ```

use crate::error::{PlotError, PlotResult};
use crate::layout::Theme;
use crate::normalize::MissingValuePolicy;
use crate::record::Record;
use crate::request::{ChartKind, PlotRequest};
use crate::tier::{TierLevel, TierOverrides};

/// Builder for [`PlotRequest`].
#[derive(Debug, Clone, Default)]
pub struct PlotRequestBuilder {
    request: PlotRequest,
}

impl PlotRequestBuilder {
    /// Start a builder for the given chart kind.
    pub fn new(kind: ChartKind) -> Self {
        let mut builder = Self::default();
        builder.request.chart_kind = kind;
        builder
    }

    /// Start a 3D scatter request.
    pub fn scatter3d() -> Self {
        Self::new(ChartKind::Scatter3d)
    }

    /// Start a 3D surface request.
    pub fn surface3d() -> Self {
        Self::new(ChartKind::Surface3d)
    }

    /// Start a 3D mesh request.
    pub fn mesh3d() -> Self {
        Self::new(ChartKind::Mesh3d)
    }

    /// Start a 3D bar request.
    pub fn bar3d() -> Self {
        Self::new(ChartKind::Bar3d)
    }

    /// Set the field mapped to the x axis.
    pub fn x_field(mut self, field: impl Into<String>) -> Self {
        self.request.axes.x = field.into();
        self
    }

    /// Set the field mapped to the y axis.
    pub fn y_field(mut self, field: impl Into<String>) -> Self {
        self.request.axes.y = field.into();
        self
    }

    /// Set the field mapped to the z axis.
    pub fn z_field(mut self, field: impl Into<String>) -> Self {
        self.request.axes.z = field.into();
        self
    }

    /// Set the input records.
    pub fn records(mut self, records: Vec<Record>) -> Self {
        self.request.records = records;
        self
    }

    /// Select a palette by name (unknown names fall back at assembly time).
    pub fn palette(mut self, name: impl Into<String>) -> Self {
        self.request.palette_name = name.into();
        self
    }

    /// Use the dark theme.
    pub fn dark_theme(mut self) -> Self {
        self.request.theme = Theme::Dark;
        self
    }

    /// Use the light theme (the default).
    pub fn light_theme(mut self) -> Self {
        self.request.theme = Theme::Light;
        self
    }

    /// Policy for missing or non-numeric axis values.
    pub fn missing_policy(mut self, policy: MissingValuePolicy) -> Self {
        self.request.missing_policy = policy;
        self
    }

    /// Force at least the named performance level (`"normal"`,
    /// `"optimized"`, `"extreme"`, `"ultra"`). Unknown names are ignored.
    pub fn forced_level(mut self, name: &str) -> Self {
        self.request.tier_overrides.forced_level = TierLevel::from_name(name);
        self
    }

    /// Jump straight to the most aggressive tier.
    pub fn extreme_override(mut self) -> Self {
        self.request.tier_overrides.extreme_override = true;
        self
    }

    /// Full override struct, for callers that already carry one.
    pub fn tier_overrides(mut self, overrides: TierOverrides) -> Self {
        self.request.tier_overrides = overrides;
        self
    }

    /// Validate and produce the request.
    pub fn build(self) -> PlotResult<PlotRequest> {
        for (axis, field) in [
            ("x", &self.request.axes.x),
            ("y", &self.request.axes.y),
            ("z", &self.request.axes.z),
        ] {
            if field.is_empty() {
                return Err(PlotError::InvalidRequest {
                    reason: format!("no field configured for the {} axis", axis),
                });
            }
        }
        Ok(self.request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_round_trip() {
        let request = PlotRequestBuilder::bar3d()
            .x_field("a")
            .y_field("b")
            .z_field("c")
            .palette("ocean")
            .forced_level("optimized")
            .build()
            .unwrap();
        assert_eq!(request.chart_kind, ChartKind::Bar3d);
        assert_eq!(request.palette_name, "ocean");
        assert_eq!(request.tier_overrides.forced_level, Some(TierLevel::High));
    }

    #[test]
    fn test_missing_axis_rejected() {
        let err = PlotRequestBuilder::scatter3d()
            .x_field("a")
            .z_field("c")
            .build()
            .unwrap_err();
        match err {
            PlotError::InvalidRequest { reason } => assert!(reason.contains("y axis")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
