//! Seeded per-instance jitter.
use glam::Vec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::effector::Affects;
use crate::instance::ClonerInstance;
use crate::rng::{instance_rng, rand_signed, SALT_RANDOM_EFFECTOR};

/// Jitters position, rotation, and scale within per-axis ranges, drawn from
/// the deterministic stream keyed by `(seed, instance index)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RandomEffector {
    pub id: String,
    pub enabled: bool,
    pub strength: f32,
    pub affects: Affects,
    pub seed: u64,
    /// Maximum absolute position offset per axis.
    pub position_range: Vec3,
    /// Maximum absolute rotation offset per axis, in degrees.
    pub rotation_range_deg: Vec3,
    /// Maximum absolute scale offset per axis.
    pub scale_range: Vec3,
    /// One scale draw applied to all axes instead of three.
    pub uniform_scale: bool,
}

impl RandomEffector {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            enabled: true,
            strength: 1.0,
            affects: Affects::default(),
            seed: 0,
            position_range: Vec3::splat(1.0),
            rotation_range_deg: Vec3::ZERO,
            scale_range: Vec3::ZERO,
            uniform_scale: true,
        }
    }
}

pub(crate) fn apply(effector: &RandomEffector, instances: &mut [ClonerInstance]) {
    let strength = effector.strength;
    let affects = effector.affects;

    for instance in instances.iter_mut() {
        let mut rng = instance_rng(
            effector.seed,
            SALT_RANDOM_EFFECTOR + instance.index as u64,
        );

        // Draw order is fixed so toggling one mask flag never reshuffles the
        // values another flag produces.
        let pos_jitter = Vec3::new(
            rand_signed(&mut rng),
            rand_signed(&mut rng),
            rand_signed(&mut rng),
        );
        let rot_jitter = Vec3::new(
            rand_signed(&mut rng),
            rand_signed(&mut rng),
            rand_signed(&mut rng),
        );
        let scale_jitter = if effector.uniform_scale {
            Vec3::splat(rand_signed(&mut rng))
        } else {
            Vec3::new(
                rand_signed(&mut rng),
                rand_signed(&mut rng),
                rand_signed(&mut rng),
            )
        };

        if affects.position && effector.position_range.is_finite() {
            instance.position += pos_jitter * effector.position_range * strength;
        }
        if affects.rotation && effector.rotation_range_deg.is_finite() {
            let range = Vec3::new(
                effector.rotation_range_deg.x.to_radians(),
                effector.rotation_range_deg.y.to_radians(),
                effector.rotation_range_deg.z.to_radians(),
            );
            instance.rotation += rot_jitter * range * strength;
        }
        if affects.scale && effector.scale_range.is_finite() {
            instance.scale += scale_jitter * effector.scale_range * strength;
        }
    }
}
