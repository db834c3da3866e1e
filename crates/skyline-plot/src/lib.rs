//! Skyline Plot - adaptive 3D data reduction and geometry
//!
//! This crate turns arbitrarily large tabular datasets into renderer-ready
//! 3D trace objects:
//! - Tier selection (how aggressively to reduce, from dataset size)
//! - Spatial aggregation (grid centroids) and systematic sampling
//! - Schema inference and axis normalization (categorical to ordinal)
//! - Solid bar geometry (8-vertex / 12-face prisms)
//! - Trace and layout assembly with palette-driven coloring
//!
//! # Example
//!
//! ```
//! use skyline_plot::{Pipeline, PlotRequestBuilder, Record};
//!
//! let request = PlotRequestBuilder::bar3d()
//!     .x_field("region")
//!     .y_field("quarter")
//!     .z_field("revenue")
//!     .records(vec![
//!         Record::new().with("region", "EMEA").with("quarter", "Q1").with("revenue", 120.0),
//!         Record::new().with("region", "APAC").with("quarter", "Q1").with("revenue", 80.0),
//!     ])
//!     .build()
//!     .unwrap();
//!
//! let output = Pipeline::run(&request).unwrap();
//! assert_eq!(output.summary.rendered_point_count, 2);
//! ```
//!
//! Every stage is pure and allocation-fresh: no cross-call caches, no
//! shared mutable state. For large datasets, [`PlotWorker`] runs whole
//! invocations on a background thread and [`Pipeline::run_cancellable`]
//! stops superseded work early.

mod aggregate;
mod builder;
mod color;
mod control;
mod error;
mod geometry;
mod layout;
mod normalize;
mod palette;
mod pipeline;
mod point;
mod record;
mod request;
mod sample;
mod schema;
mod tier;
mod trace;
mod worker;

pub use aggregate::aggregate;
pub use builder::PlotRequestBuilder;
pub use color::Color;
pub use control::{ControlAction, ControlDispatcher, NoopDispatcher};
pub use error::{PlotError, PlotResult};
pub use geometry::{BarSolid, max_abs_height, normalized_height};
pub use layout::{CameraPose, Layout, Theme};
pub use normalize::{MissingValuePolicy, normalize, normalize_record};
pub use palette::{PALETTE_STEPS, Palette};
pub use pipeline::{
    CancelSource, CancelToken, Pipeline, PlotOutput, ReductionStages, ReductionSummary,
};
pub use point::{AggregateInfo, Point3D};
pub use record::{FieldValue, Record};
pub use request::{ChartKind, PlotRequest};
pub use sample::sample;
pub use schema::{AxisFields, CategoricalIndex, DatasetSchema, FieldKind};
pub use tier::{PerformanceTier, RenderBackend, TierLevel, TierOverrides, select_tier};
pub use trace::{BAR_FOOTPRINT, HoverStyle, MeshColor, Trace};
pub use worker::{PlotWorker, WorkerOutput};

/// Profiling scope that compiles away unless the `profiling` feature is on.
macro_rules! profile_scope {
    ($name:literal) => {
        #[cfg(feature = "profiling")]
        skyline_core::profiling::profile_scope!($name);
    };
}
pub(crate) use profile_scope;
