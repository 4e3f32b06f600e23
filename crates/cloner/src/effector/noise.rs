//! Coherent-noise displacement.
use glam::Vec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::effector::Affects;
use crate::instance::ClonerInstance;
use crate::noise::fbm3;

/// Decorrelation offsets for the three vector components, so x/y/z deltas are
/// independent samples of the same field.
const OFFSET_Y: Vec3 = Vec3::new(101.7, 57.3, -19.1);
const OFFSET_Z: Vec3 = Vec3::new(-44.9, 13.5, 77.7);

/// Displaces instances by fractal gradient noise sampled at their position.
/// Nearby instances get similar deltas, which is what distinguishes this from
/// the random effector's independent jitter.
///
/// Only writes position, rotation, and scale. The `color` and `visibility`
/// flags in [`Affects`] have no noise channel; setting them logs a warning
/// and otherwise does nothing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NoiseEffector {
    pub id: String,
    pub enabled: bool,
    pub strength: f32,
    pub affects: Affects,
    pub seed: u64,
    /// Spatial frequency the instance position is scaled by before sampling.
    pub frequency: f32,
    /// Output scaling of the summed octaves.
    pub amplitude: f32,
    pub octaves: u32,
}

impl NoiseEffector {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            enabled: true,
            strength: 1.0,
            affects: Affects::default(),
            seed: 0,
            frequency: 0.2,
            amplitude: 1.0,
            octaves: 3,
        }
    }
}

pub(crate) fn apply(effector: &NoiseEffector, instances: &mut [ClonerInstance]) {
    if !effector.frequency.is_finite() || !effector.amplitude.is_finite() {
        tracing::warn!(id = %effector.id, "noise frequency/amplitude is not finite; skipping");
        return;
    }

    let affects = effector.affects;
    if affects.color || affects.visibility {
        tracing::warn!(
            id = %effector.id,
            "noise effector has no color/visibility channel; those flags are ignored"
        );
    }
    let gain = effector.amplitude * effector.strength;
    let octaves = effector.octaves;

    for instance in instances.iter_mut() {
        let p = instance.position * effector.frequency;
        let value = fbm3(effector.seed, p, octaves);

        if affects.position {
            let delta = Vec3::new(
                value,
                fbm3(effector.seed, p + OFFSET_Y, octaves),
                fbm3(effector.seed, p + OFFSET_Z, octaves),
            );
            instance.position += delta * gain;
        }
        if affects.rotation {
            instance.rotation += Vec3::splat(value) * gain;
        }
        if affects.scale {
            instance.scale += Vec3::splat(value * gain);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::BaseInstance;

    fn line(count: u32) -> Vec<ClonerInstance> {
        (0..count)
            .map(|i| BaseInstance::at(i, Vec3::new(i as f32 * 0.8 + 0.3, 0.0, 0.0)).into())
            .collect()
    }

    #[test]
    fn displacement_is_deterministic_and_seeded() {
        let eff = NoiseEffector::new("n");

        let mut a = line(10);
        let mut b = line(10);
        apply(&eff, &mut a);
        apply(&eff, &mut b);
        assert_eq!(a, b);

        let mut eff2 = eff.clone();
        eff2.seed = 99;
        let mut c = line(10);
        apply(&eff2, &mut c);
        assert_ne!(a, c);
    }

    #[test]
    fn amplitude_bounds_the_displacement() {
        let mut eff = NoiseEffector::new("n");
        eff.amplitude = 0.25;
        eff.octaves = 4;

        let base = line(20);
        let mut out = base.clone();
        apply(&eff, &mut out);
        for (before, after) in base.iter().zip(&out) {
            let delta = after.position - before.position;
            // fbm stays near [-1, 1] per component.
            assert!(delta.length() < 0.25 * 3.0);
        }
    }

    #[test]
    fn mask_limits_writes_to_scale() {
        let mut eff = NoiseEffector::new("n");
        eff.affects = Affects::only_scale();

        let base = line(10);
        let mut out = base.clone();
        apply(&eff, &mut out);
        for (before, after) in base.iter().zip(&out) {
            assert_eq!(after.position, before.position);
            assert_eq!(after.rotation, before.rotation);
        }
        assert!(out.iter().any(|i| i.scale != Vec3::ONE));
    }

    #[test]
    fn color_and_visibility_flags_are_inert() {
        let mut eff = NoiseEffector::new("n");
        eff.affects = Affects::all();

        let base = line(10);
        let mut out = base.clone();
        apply(&eff, &mut out);
        for (before, after) in base.iter().zip(&out) {
            assert_eq!(after.color, before.color);
            assert_eq!(after.visible, before.visible);
        }
        assert!(base
            .iter()
            .zip(&out)
            .any(|(before, after)| after.position != before.position));
    }

    #[test]
    fn nan_frequency_skips() {
        let mut eff = NoiseEffector::new("n");
        eff.frequency = f32::NAN;
        let base = line(5);
        let mut out = base.clone();
        apply(&eff, &mut out);
        assert_eq!(base, out);
    }
}
