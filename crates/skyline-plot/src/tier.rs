//! Performance tier selection.
//!
//! The tier is a single plain value chosen once per invocation from the
//! record count (plus explicit caller overrides). Every reduction decision
//! downstream reads from it, so the escalation policy lives in exactly one
//! place and is exhaustively testable.

/// The named escalation levels, least to most aggressive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum TierLevel {
    #[default]
    Default,
    Standard,
    High,
    Extreme,
    Ultra,
}

impl TierLevel {
    /// Parse a caller-supplied forced level name.
    ///
    /// The accepted names are the ones the embedding UI exposes; anything
    /// else means "no forcing".
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "normal" => Some(TierLevel::Standard),
            "optimized" => Some(TierLevel::High),
            "extreme" => Some(TierLevel::Extreme),
            "ultra" => Some(TierLevel::Ultra),
            _ => None,
        }
    }
}

/// Caller overrides for tier selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierOverrides {
    /// Force at least this level regardless of record count.
    pub forced_level: Option<TierLevel>,
    /// Escape hatch that jumps straight to the most aggressive tier.
    pub extreme_override: bool,
}

/// Rendering backend hint carried by the tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderBackend {
    WebGl,
    Svg,
}

/// A resolved performance configuration.
///
/// Invariant: as tiers escalate from `Default` to `Ultra`, `sampling_factor`
/// never increases and aggregation never gets less aggressive.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceTier {
    pub level: TierLevel,
    /// Whether the renderer should be told to use its GPU-backed path.
    pub use_webgl: bool,
    /// Sampling only runs when the point count exceeds this.
    pub max_points_before_sampling: usize,
    /// Fraction of points to keep when sampling runs; 1.0 disables it.
    pub sampling_factor: f64,
    /// Aggregation runs when the point count exceeds this; `None` disables it.
    pub aggregation_threshold: Option<usize>,
    /// Target point budget for aggregation output.
    pub max_render_points: usize,
    /// Cooperative-yield granularity for cancellable runs.
    pub chunk_size: usize,
    /// Renderer transition duration hint.
    pub animation_ms: u32,
    /// Whether the renderer may drop detail at distance.
    pub enable_lod: bool,
    /// Suggested delay between progressive load chunks.
    pub load_delay_ms: u32,
}

impl PerformanceTier {
    /// The rendering backend this tier implies.
    pub fn backend(&self) -> RenderBackend {
        if self.use_webgl {
            RenderBackend::WebGl
        } else {
            RenderBackend::Svg
        }
    }
}

/// Select the performance tier for a dataset.
///
/// Policy is checked top-down, first match wins. Forcing a level never
/// *reduces* aggressiveness below what the record count alone would pick,
/// because the count-based checks run in the same guards.
pub fn select_tier(record_count: usize, overrides: &TierOverrides) -> PerformanceTier {
    let forced = overrides.forced_level;

    let tier = if record_count > 100_000
        || overrides.extreme_override
        || forced == Some(TierLevel::Ultra)
    {
        PerformanceTier {
            level: TierLevel::Ultra,
            use_webgl: true,
            max_points_before_sampling: 5_000,
            sampling_factor: 0.25,
            aggregation_threshold: Some(50_000),
            max_render_points: 25_000,
            chunk_size: 1_000,
            animation_ms: 100,
            enable_lod: true,
            load_delay_ms: 30,
        }
    } else if record_count > 50_000 || forced == Some(TierLevel::Extreme) {
        PerformanceTier {
            level: TierLevel::Extreme,
            use_webgl: true,
            max_points_before_sampling: 7_500,
            sampling_factor: 0.4,
            aggregation_threshold: Some(40_000),
            max_render_points: 35_000,
            chunk_size: 2_500,
            animation_ms: 150,
            enable_lod: true,
            load_delay_ms: 20,
        }
    } else if record_count > 10_000 || forced == Some(TierLevel::High) {
        PerformanceTier {
            level: TierLevel::High,
            use_webgl: true,
            max_points_before_sampling: 10_000,
            sampling_factor: if record_count > 25_000 { 0.6 } else { 0.8 },
            aggregation_threshold: if record_count > 20_000 {
                Some(15_000)
            } else {
                None
            },
            max_render_points: 50_000,
            chunk_size: 5_000,
            animation_ms: 300,
            enable_lod: true,
            load_delay_ms: 10,
        }
    } else if record_count > 5_000 || forced == Some(TierLevel::Standard) {
        PerformanceTier {
            level: TierLevel::Standard,
            use_webgl: record_count > 7_500,
            max_points_before_sampling: usize::MAX,
            sampling_factor: 1.0,
            aggregation_threshold: None,
            max_render_points: 100_000,
            chunk_size: 8_000,
            animation_ms: 500,
            enable_lod: false,
            load_delay_ms: 0,
        }
    } else {
        PerformanceTier {
            level: TierLevel::Default,
            use_webgl: false,
            max_points_before_sampling: usize::MAX,
            sampling_factor: 1.0,
            aggregation_threshold: None,
            max_render_points: 100_000,
            chunk_size: 10_000,
            animation_ms: 750,
            enable_lod: false,
            load_delay_ms: 0,
        }
    };

    tracing::debug!(
        records = record_count,
        level = ?tier.level,
        sampling = tier.sampling_factor,
        aggregation = ?tier.aggregation_threshold,
        "selected performance tier"
    );
    tier
}
