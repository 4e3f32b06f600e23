//! Attraction toward a target point.
use glam::Vec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::effector::Affects;
use crate::instance::ClonerInstance;
use crate::math::euler_from_direction;

/// Pulls instance positions toward a target, with linear falloff to zero at
/// the influence radius. `target_position` is `None` while the referenced
/// scene object is unresolved, which makes the effector a no-op.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TargetEffector {
    pub id: String,
    pub enabled: bool,
    pub strength: f32,
    pub affects: Affects,
    pub target_position: Option<Vec3>,
    /// Pull fraction at the target itself; 1 snaps instances onto it.
    pub attraction_strength: f32,
    /// Influence fades linearly to zero at this distance. Non-positive or
    /// non-finite means unbounded influence.
    pub influence_radius: f32,
    /// Also turn each instance's forward axis toward the target.
    pub look_at_target: bool,
}

impl TargetEffector {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            enabled: true,
            strength: 1.0,
            affects: Affects::default(),
            target_position: None,
            attraction_strength: 0.5,
            influence_radius: 10.0,
            look_at_target: false,
        }
    }
}

pub(crate) fn apply(effector: &TargetEffector, instances: &mut [ClonerInstance]) {
    let Some(target) = effector.target_position else {
        tracing::debug!(id = %effector.id, "target effector has no resolved target; skipping");
        return;
    };
    if !target.is_finite() {
        tracing::warn!(id = %effector.id, "target position is not finite; skipping");
        return;
    }

    let attraction = if effector.attraction_strength.is_finite() {
        effector.attraction_strength
    } else {
        0.0
    };
    let bounded = effector.influence_radius.is_finite() && effector.influence_radius > 0.0;
    let affects = effector.affects;

    for instance in instances.iter_mut() {
        let to_target = target - instance.position;
        let distance = to_target.length();

        let influence = if bounded {
            (1.0 - distance / effector.influence_radius).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let pull = (attraction * influence * effector.strength).clamp(0.0, 1.0);
        if pull == 0.0 {
            continue;
        }

        if affects.position {
            instance.position += to_target * pull;
        }
        if affects.rotation && effector.look_at_target && distance > f32::EPSILON {
            instance.rotation = euler_from_direction(to_target);
        }
    }
}
