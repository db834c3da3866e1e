//! Pipeline orchestration: records in, traces + layout + metrics out.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::aggregate::aggregate;
use crate::error::{PlotError, PlotResult};
use crate::layout::Layout;
use crate::normalize::{normalize, normalize_record};
use crate::palette::Palette;
use crate::point::Point3D;
use crate::request::PlotRequest;
use crate::sample::sample;
use crate::schema::DatasetSchema;
use crate::tier::{PerformanceTier, RenderBackend, TierLevel, select_tier};
use crate::trace::{Trace, assemble};

bitflags::bitflags! {
    /// Which reduction stages actually shrank the point set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ReductionStages: u8 {
        const AGGREGATED = 1 << 0;
        const SAMPLED = 1 << 1;
    }
}

/// Reduction metrics surfaced to the embedding UI.
#[derive(Debug, Clone, PartialEq)]
pub struct ReductionSummary {
    pub level: TierLevel,
    pub original_point_count: usize,
    pub rendered_point_count: usize,
    /// Percentage of input points not rendered; 0 for empty input.
    pub reduction_percentage: f64,
    pub stages: ReductionStages,
    pub backend: RenderBackend,
}

impl ReductionSummary {
    fn new(tier: &PerformanceTier, original: usize, rendered: usize, stages: ReductionStages) -> Self {
        let reduction_percentage = if original == 0 {
            0.0
        } else {
            (1.0 - rendered as f64 / original as f64) * 100.0
        };
        Self {
            level: tier.level,
            original_point_count: original,
            rendered_point_count: rendered,
            reduction_percentage,
            stages,
            backend: tier.backend(),
        }
    }

    pub fn aggregation_applied(&self) -> bool {
        self.stages.contains(ReductionStages::AGGREGATED)
    }

    pub fn sampling_applied(&self) -> bool {
        self.stages.contains(ReductionStages::SAMPLED)
    }
}

/// Everything one invocation produces.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOutput {
    pub traces: Vec<Trace>,
    pub layout: Layout,
    pub summary: ReductionSummary,
}

/// Producer side of a cancellation pair.
///
/// Each call to [`CancelSource::supersede`] invalidates every token handed
/// out before it, so a newly submitted invocation cancels the one it
/// replaces.
#[derive(Debug, Clone, Default)]
pub struct CancelSource {
    generation: Arc<AtomicU64>,
}

impl CancelSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token tied to the current generation.
    pub fn token(&self) -> CancelToken {
        CancelToken {
            generation: self.generation.clone(),
            seen: self.generation.load(Ordering::Acquire),
        }
    }

    /// Invalidate all outstanding tokens.
    pub fn supersede(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }
}

/// Checked between work chunks by [`Pipeline::run_cancellable`].
#[derive(Debug, Clone)]
pub struct CancelToken {
    generation: Arc<AtomicU64>,
    seen: u64,
}

impl CancelToken {
    pub fn is_cancelled(&self) -> bool {
        self.generation.load(Ordering::Acquire) != self.seen
    }

    fn check(&self) -> PlotResult<()> {
        if self.is_cancelled() {
            Err(PlotError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// The full data-reduction and geometry pipeline.
///
/// Stateless: every invocation is a pure function of the request. Stage
/// order is fixed as normalize, aggregate, sample, geometry/assembly;
/// aggregation runs before sampling when both thresholds are exceeded.
pub struct Pipeline;

impl Pipeline {
    /// Run the pipeline to completion.
    pub fn run(request: &PlotRequest) -> PlotResult<PlotOutput> {
        crate::profile_scope!("pipeline_run");

        let tier = select_tier(request.records.len(), &request.tier_overrides);
        let points = {
            crate::profile_scope!("normalize");
            let schema = DatasetSchema::infer(&request.records, &request.axes);
            normalize(
                &request.records,
                &request.axes,
                &schema,
                request.chart_kind,
                request.missing_policy,
            )?
        };
        Self::finish(request, &tier, points)
    }

    /// Run the pipeline with cooperative cancellation.
    ///
    /// The normalization loop works in `tier.chunk_size` chunks and checks
    /// `token` between chunks (and between the coarser later stages), so a
    /// superseded invocation stops early with [`PlotError::Cancelled`]
    /// instead of burning the UI thread to produce output nobody wants.
    pub fn run_cancellable(request: &PlotRequest, token: &CancelToken) -> PlotResult<PlotOutput> {
        crate::profile_scope!("pipeline_run_cancellable");
        token.check()?;

        let tier = select_tier(request.records.len(), &request.tier_overrides);
        let schema = DatasetSchema::infer(&request.records, &request.axes);

        let mut points = Vec::with_capacity(request.records.len());
        for (chunk_index, chunk) in request.records.chunks(tier.chunk_size.max(1)).enumerate() {
            token.check()?;
            crate::profile_scope!("normalize_chunk");
            let base = chunk_index * tier.chunk_size.max(1);
            for (offset, record) in chunk.iter().enumerate() {
                points.push(normalize_record(
                    record,
                    base + offset,
                    &request.axes,
                    &schema,
                    request.chart_kind,
                    request.missing_policy,
                )?);
            }
        }

        token.check()?;
        Self::finish(request, &tier, points)
    }

    fn finish(
        request: &PlotRequest,
        tier: &PerformanceTier,
        mut points: Vec<Point3D>,
    ) -> PlotResult<PlotOutput> {
        let original = points.len();
        let mut stages = ReductionStages::empty();

        if let Some(threshold) = tier.aggregation_threshold
            && points.len() > threshold
        {
            crate::profile_scope!("aggregate");
            let reduced = aggregate(&points, tier.max_render_points);
            if reduced.len() < points.len() {
                stages |= ReductionStages::AGGREGATED;
            }
            points = reduced;
        }

        if tier.sampling_factor < 1.0 && points.len() > tier.max_points_before_sampling {
            crate::profile_scope!("sample");
            let reduced = sample(&points, tier.sampling_factor);
            if reduced.len() < points.len() {
                stages |= ReductionStages::SAMPLED;
            }
            points = reduced;
        }

        let traces = {
            crate::profile_scope!("assemble");
            let palette = Palette::by_name(&request.palette_name);
            assemble(
                &points,
                request.chart_kind,
                &request.axes,
                palette,
                request.theme,
            )
        };

        let summary = ReductionSummary::new(tier, original, points.len(), stages);
        let layout = Layout::new(&request.axes, request.chart_kind, request.theme)
            .with_reduction_note(original, points.len());

        tracing::debug!(
            original,
            rendered = points.len(),
            stages = ?stages,
            "pipeline finished"
        );

        Ok(PlotOutput {
            traces,
            layout,
            summary,
        })
    }
}
