//! Effectors: ordered post-processing of generated instances.
//!
//! The pipeline applies effectors strictly in array order; each effector sees
//! the instance state left by all prior effectors, so the list is never
//! reordered. A disabled effector is skipped, and every write is gated by the
//! effector's [`Affects`] mask — a property whose flag is false passes
//! through untouched no matter what the effector computed.
use tracing::warn;

use crate::instance::{BaseInstance, ClonerInstance};

pub mod falloff;
pub mod noise;
pub mod random;
pub mod step;
pub mod target;

pub use falloff::{FalloffCurve, FalloffEffector, FalloffShape};
pub use noise::NoiseEffector;
pub use random::RandomEffector;
pub use step::StepEffector;
pub use target::TargetEffector;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which instance properties an effector is allowed to touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Affects {
    pub position: bool,
    pub rotation: bool,
    pub scale: bool,
    pub color: bool,
    pub visibility: bool,
}

impl Default for Affects {
    fn default() -> Self {
        Self {
            position: true,
            rotation: false,
            scale: false,
            color: false,
            visibility: false,
        }
    }
}

impl Affects {
    pub fn all() -> Self {
        Self {
            position: true,
            rotation: true,
            scale: true,
            color: true,
            visibility: true,
        }
    }

    pub fn none() -> Self {
        Self {
            position: false,
            rotation: false,
            scale: false,
            color: false,
            visibility: false,
        }
    }

    pub fn only_position() -> Self {
        Self {
            position: true,
            ..Self::none()
        }
    }

    pub fn only_scale() -> Self {
        Self {
            scale: true,
            ..Self::none()
        }
    }
}

/// An effector step, one variant per kind.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClonerEffector {
    Random(RandomEffector),
    Falloff(FalloffEffector),
    Noise(NoiseEffector),
    Step(StepEffector),
    Target(TargetEffector),
}

impl ClonerEffector {
    pub fn id(&self) -> &str {
        match self {
            ClonerEffector::Random(e) => &e.id,
            ClonerEffector::Falloff(e) => &e.id,
            ClonerEffector::Noise(e) => &e.id,
            ClonerEffector::Step(e) => &e.id,
            ClonerEffector::Target(e) => &e.id,
        }
    }

    pub fn enabled(&self) -> bool {
        match self {
            ClonerEffector::Random(e) => e.enabled,
            ClonerEffector::Falloff(e) => e.enabled,
            ClonerEffector::Noise(e) => e.enabled,
            ClonerEffector::Step(e) => e.enabled,
            ClonerEffector::Target(e) => e.enabled,
        }
    }

    pub fn strength(&self) -> f32 {
        match self {
            ClonerEffector::Random(e) => e.strength,
            ClonerEffector::Falloff(e) => e.strength,
            ClonerEffector::Noise(e) => e.strength,
            ClonerEffector::Step(e) => e.strength,
            ClonerEffector::Target(e) => e.strength,
        }
    }

    pub fn affects(&self) -> Affects {
        match self {
            ClonerEffector::Random(e) => e.affects,
            ClonerEffector::Falloff(e) => e.affects,
            ClonerEffector::Noise(e) => e.affects,
            ClonerEffector::Step(e) => e.affects,
            ClonerEffector::Target(e) => e.affects,
        }
    }
}

/// Run the effector stack over freshly resolved base instances.
pub fn apply_effectors(
    instances: Vec<BaseInstance>,
    effectors: &[ClonerEffector],
) -> Vec<ClonerInstance> {
    let mut out: Vec<ClonerInstance> = instances.into_iter().map(Into::into).collect();
    for effector in effectors {
        if !effector.enabled() {
            continue;
        }
        if !effector.strength().is_finite() {
            warn!(id = effector.id(), "effector strength is not finite; skipping");
            continue;
        }
        match effector {
            ClonerEffector::Random(e) => random::apply(e, &mut out),
            ClonerEffector::Falloff(e) => falloff::apply(e, &mut out),
            ClonerEffector::Noise(e) => noise::apply(e, &mut out),
            ClonerEffector::Step(e) => step::apply(e, &mut out),
            ClonerEffector::Target(e) => target::apply(e, &mut out),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn line(count: u32) -> Vec<BaseInstance> {
        (0..count)
            .map(|i| BaseInstance::at(i, Vec3::new(i as f32, 0.0, 0.0)))
            .collect()
    }

    #[test]
    fn empty_stack_is_a_pure_conversion() {
        let out = apply_effectors(line(3), &[]);
        assert_eq!(out.len(), 3);
        assert_eq!(out[1].position, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(out[1].color, None);
    }

    #[test]
    fn disabled_effectors_are_skipped() {
        let mut eff = RandomEffector::new("jitter");
        eff.enabled = false;
        eff.position_range = Vec3::splat(10.0);
        let out = apply_effectors(line(4), &[ClonerEffector::Random(eff)]);
        assert_eq!(out[3].position, Vec3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn mask_blocks_untargeted_properties() {
        // A scale-only random effector must leave position and rotation
        // byte-identical and color unset.
        let mut eff = RandomEffector::new("scale_only");
        eff.affects = Affects::only_scale();
        eff.position_range = Vec3::splat(100.0);
        eff.rotation_range_deg = Vec3::splat(180.0);
        eff.scale_range = Vec3::splat(0.5);

        let base = line(5);
        let out = apply_effectors(base.clone(), &[ClonerEffector::Random(eff)]);
        for (before, after) in base.iter().zip(&out) {
            assert_eq!(after.position, before.position);
            assert_eq!(after.rotation, before.rotation);
            assert_eq!(after.color, None);
            assert_ne!(after.scale, before.scale);
        }
    }

    #[test]
    fn order_is_significant() {
        // Pull-to-target then jitter differs from jitter then pull, because
        // the target weight depends on the position the prior step produced.
        let mut jitter = RandomEffector::new("jitter");
        jitter.position_range = Vec3::splat(2.0);

        let mut pull = TargetEffector::new("pull");
        pull.target_position = Some(Vec3::new(10.0, 0.0, 0.0));
        pull.influence_radius = 5.0;
        pull.attraction_strength = 1.0;

        let forward = apply_effectors(
            line(8),
            &[
                ClonerEffector::Random(jitter.clone()),
                ClonerEffector::Target(pull.clone()),
            ],
        );
        let reversed = apply_effectors(
            line(8),
            &[ClonerEffector::Target(pull), ClonerEffector::Random(jitter)],
        );
        assert_ne!(forward, reversed);
    }

    #[test]
    fn non_finite_strength_skips_the_effector() {
        let mut eff = RandomEffector::new("broken");
        eff.strength = f32::NAN;
        eff.position_range = Vec3::splat(5.0);
        let out = apply_effectors(line(3), &[ClonerEffector::Random(eff)]);
        assert_eq!(out[2].position, Vec3::new(2.0, 0.0, 0.0));
    }
}
