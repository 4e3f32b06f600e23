#![forbid(unsafe_code)]
//! cloner: Procedural cloning and effector instancing.
//!
//! Given a declarative description of how a source object should be
//! duplicated (linear, radial, grid, scatter, along a spline, or at another
//! object's vertices/faces) and an ordered stack of effectors, produces a
//! deterministic list of per-instance transforms.
//!
//! Modules:
//! - config: distribution configs (tagged by mode)
//! - distribution: the six resolvers producing base instances
//! - effector: ordered, masked post-processing pipeline
//! - spline: curve evaluation with arc-length reparametrization
//! - rng / noise: seeded, reproducible randomness
//! - engine: the `Cloner` aggregate and memoizing evaluation
//!
//! The engine is a pure function of its inputs: it renders nothing, owns no
//! scene nodes, and holds no state beyond an explicit memo cache.
pub mod config;
pub mod distribution;
pub mod effector;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod instance;
pub mod math;
pub mod noise;
pub mod rng;
pub mod spline;

/// Convenient re-exports for common types. Import with `use cloner::prelude::*;`.
pub mod prelude {
    pub use crate::config::{
        ClonerConfig, ClonerMode, GridConfig, GridShape, LinearAxis, LinearConfig, ObjectConfig,
        ObjectTarget, RadialConfig, RadialPlane, ScatterConfig, ScatterVolume, SpiralConfig,
        SplineConfig,
    };
    pub use crate::distribution::{resolve, ResolveContext};
    pub use crate::effector::{
        apply_effectors, Affects, ClonerEffector, FalloffCurve, FalloffEffector, FalloffShape,
        NoiseEffector, RandomEffector, StepEffector, TargetEffector,
    };
    pub use crate::engine::{calculate_cloner_instances, evaluate_cloner, Cloner, ClonerEngine};
    pub use crate::error::{Error, Result};
    pub use crate::geometry::SourceMesh;
    pub use crate::instance::{BaseInstance, ClonerInstance, Color};
    pub use crate::spline::{ArcLengthTable, Spline, SplineType};
}
