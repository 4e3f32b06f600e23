//! Cloner aggregate and the evaluation entry points.
use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::ClonerConfig;
use crate::distribution::{self, ResolveContext};
use crate::effector::{apply_effectors, ClonerEffector};
use crate::error::Result;
use crate::geometry::SourceMesh;
use crate::instance::{BaseInstance, ClonerInstance};

/// The aggregate a scene edits and the engine evaluates: one distribution
/// config, an ordered effector stack, and the randomness root seed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cloner {
    pub id: String,
    /// Scene reference for the object mode's geometry; resolving it is the
    /// caller's job, the engine only receives the resolved mesh.
    pub source_object_id: Option<String>,
    pub config: ClonerConfig,
    /// Ordered stack; order is semantically significant and never resorted.
    pub effectors: Vec<ClonerEffector>,
    /// Root of all randomness in this cloner. Re-randomizing means writing a
    /// new value here; evaluation itself is always reproducible.
    pub seed: u64,
    pub enabled: bool,
    /// Hint for the rendering collaborator: GPU instance buffer vs one scene
    /// node per instance. Evaluation ignores it.
    pub use_instancing: bool,
}

impl Cloner {
    pub fn new(id: impl Into<String>, config: ClonerConfig) -> Self {
        Self {
            id: id.into(),
            source_object_id: None,
            config,
            effectors: Vec::new(),
            seed: 0,
            enabled: true,
            use_instancing: true,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_effector(mut self, effector: ClonerEffector) -> Self {
        self.effectors.push(effector);
        self
    }

    pub fn with_source_object(mut self, id: impl Into<String>) -> Self {
        self.source_object_id = Some(id.into());
        self
    }

    /// Advisory validation for UI callers; evaluation never needs it.
    pub fn validate(&self) -> Result<()> {
        self.config.validate()?;
        for effector in &self.effectors {
            if !effector.strength().is_finite() {
                return Err(crate::error::Error::InvalidConfig(format!(
                    "effector '{}' strength is not finite",
                    effector.id()
                )));
            }
        }
        Ok(())
    }
}

/// Resolve a cloner's distribution into base instances, before effectors.
/// A disabled cloner resolves to nothing.
pub fn calculate_cloner_instances(
    cloner: &Cloner,
    source: Option<&SourceMesh>,
) -> Vec<BaseInstance> {
    if !cloner.enabled {
        return Vec::new();
    }
    let mut ctx = ResolveContext::new(cloner.seed);
    if let Some(mesh) = source {
        ctx = ctx.with_source(mesh);
    }
    distribution::resolve(&cloner.config, &ctx)
}

/// Full evaluation: resolve, then run the effector stack.
pub fn evaluate_cloner(cloner: &Cloner, source: Option<&SourceMesh>) -> Vec<ClonerInstance> {
    apply_effectors(calculate_cloner_instances(cloner, source), &cloner.effectors)
}

struct CacheEntry {
    config: ClonerConfig,
    effectors: Vec<ClonerEffector>,
    seed: u64,
    instances: Arc<Vec<ClonerInstance>>,
}

/// Reactive evaluation front-end with per-cloner memoization.
///
/// The cache key is structural equality of `(config, effectors, seed)`; the
/// engine holds no other state between calls. Object-mode cloners also depend
/// on their source mesh, which the key does not see — callers must
/// [`invalidate`](ClonerEngine::invalidate) the cloner when its source
/// geometry changes.
#[derive(Default)]
pub struct ClonerEngine {
    cache: HashMap<String, CacheEntry>,
}

impl ClonerEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate `cloner`, reusing the cached result when its inputs are
    /// structurally unchanged.
    pub fn evaluate(
        &mut self,
        cloner: &Cloner,
        source: Option<&SourceMesh>,
    ) -> Arc<Vec<ClonerInstance>> {
        if let Some(entry) = self.cache.get(&cloner.id) {
            if entry.seed == cloner.seed
                && entry.config == cloner.config
                && entry.effectors == cloner.effectors
            {
                debug!(id = %cloner.id, "cloner cache hit");
                return Arc::clone(&entry.instances);
            }
        }

        let instances = Arc::new(evaluate_cloner(cloner, source));
        info!(
            id = %cloner.id,
            count = instances.len(),
            "evaluated cloner"
        );
        self.cache.insert(
            cloner.id.clone(),
            CacheEntry {
                config: cloner.config.clone(),
                effectors: cloner.effectors.clone(),
                seed: cloner.seed,
                instances: Arc::clone(&instances),
            },
        );
        instances
    }

    /// Drop the cached result for one cloner (e.g. its source mesh changed).
    pub fn invalidate(&mut self, id: &str) {
        self.cache.remove(id);
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}
