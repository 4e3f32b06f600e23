//! Distribution resolvers: one pure function per cloner mode.
//!
//! Each resolver turns its mode config into a list of [`BaseInstance`]s with
//! `visible = true`. Malformed numeric input degrades to a safe default with
//! a diagnostic; a non-positive count simply produces zero instances. The
//! engine runs these on every editor interaction, so nothing here may panic
//! on data-dependent input.
use crate::config::ClonerConfig;
use crate::geometry::SourceMesh;
use crate::instance::BaseInstance;

pub mod grid;
pub mod linear;
pub mod object;
pub mod radial;
pub mod scatter;
pub mod spline;

/// Per-call inputs shared by the resolvers: the cloner's seed and, for the
/// object mode, the resolved source geometry.
#[derive(Debug, Clone, Copy)]
pub struct ResolveContext<'a> {
    pub seed: u64,
    pub source: Option<&'a SourceMesh>,
}

impl<'a> ResolveContext<'a> {
    pub fn new(seed: u64) -> Self {
        Self { seed, source: None }
    }

    pub fn with_source(mut self, source: &'a SourceMesh) -> Self {
        self.source = Some(source);
        self
    }
}

/// Resolve `config` into base instances.
pub fn resolve(config: &ClonerConfig, ctx: &ResolveContext<'_>) -> Vec<BaseInstance> {
    match config {
        ClonerConfig::Linear(c) => linear::resolve(c),
        ClonerConfig::Radial(c) => radial::resolve(c),
        ClonerConfig::Grid(c) => grid::resolve(c, ctx.seed),
        ClonerConfig::Scatter(c) => scatter::resolve(c, ctx.seed),
        ClonerConfig::Spline(c) => spline::resolve(c),
        ClonerConfig::Object(c) => object::resolve(c, ctx.source),
    }
}

/// Clamp a config count to a usable instance count.
#[inline]
pub(crate) fn checked_count(count: i32) -> usize {
    count.max(0) as usize
}

/// Sanitize a scalar: non-finite values fall back with a warning.
#[inline]
pub(crate) fn finite_or(value: f32, fallback: f32, name: &str) -> f32 {
    if value.is_finite() {
        value
    } else {
        tracing::warn!("{name} is not finite; using {fallback}");
        fallback
    }
}
