//! Distance-based falloff.
use glam::Vec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::effector::Affects;
use crate::instance::{ClonerInstance, Color};
use crate::math::{safe_normalize, smoothstep};

/// Field shape the distance is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FalloffShape {
    /// Euclidean distance from the center.
    #[default]
    Sphere,
    /// Absolute distance to the plane through the center with this normal.
    Plane { normal: Vec3 },
}

/// Curve mapping normalized distance to influence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FalloffCurve {
    #[default]
    Linear,
    /// Smoothstep.
    Smooth,
}

/// Scales configured deltas by an influence weight in `[0, 1]` derived from
/// each instance's distance to a center point or plane. With default offsets
/// of zero and `affects.visibility` set, it acts as a pure fade-out mask.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FalloffEffector {
    pub id: String,
    pub enabled: bool,
    pub strength: f32,
    pub affects: Affects,
    pub center: Vec3,
    pub radius: f32,
    pub shape: FalloffShape,
    pub curve: FalloffCurve,
    /// Flip the curve: full influence far away instead of near the center.
    pub invert: bool,
    pub position_offset: Vec3,
    pub rotation_offset_deg: Vec3,
    pub scale_offset: Vec3,
    pub color: Color,
    /// Instances whose weighted influence reaches this value are hidden when
    /// `affects.visibility` is set.
    pub visibility_threshold: f32,
}

impl FalloffEffector {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            enabled: true,
            strength: 1.0,
            affects: Affects::default(),
            center: Vec3::ZERO,
            radius: 5.0,
            shape: FalloffShape::Sphere,
            curve: FalloffCurve::Linear,
            invert: false,
            position_offset: Vec3::ZERO,
            rotation_offset_deg: Vec3::ZERO,
            scale_offset: Vec3::ZERO,
            color: Color::WHITE,
            visibility_threshold: 0.5,
        }
    }

    /// Influence weight for a point, in `[0, 1]`, before strength scaling.
    pub fn weight_at(&self, point: Vec3) -> f32 {
        let distance = match self.shape {
            FalloffShape::Sphere => (point - self.center).length(),
            FalloffShape::Plane { normal } => {
                (point - self.center).dot(safe_normalize(normal)).abs()
            }
        };

        let normalized = (1.0 - distance / self.radius).clamp(0.0, 1.0);
        let curved = match self.curve {
            FalloffCurve::Linear => normalized,
            FalloffCurve::Smooth => smoothstep(normalized),
        };
        if self.invert {
            1.0 - curved
        } else {
            curved
        }
    }
}

pub(crate) fn apply(effector: &FalloffEffector, instances: &mut [ClonerInstance]) {
    if !effector.radius.is_finite() || effector.radius <= 0.0 {
        tracing::warn!(id = %effector.id, "falloff radius must be positive; skipping");
        return;
    }
    if !effector.center.is_finite() {
        tracing::warn!(id = %effector.id, "falloff center is not finite; skipping");
        return;
    }

    let affects = effector.affects;
    let strength = effector.strength;

    for instance in instances.iter_mut() {
        let w = effector.weight_at(instance.position) * strength;
        if w == 0.0 {
            continue;
        }

        if affects.position {
            instance.position += effector.position_offset * w;
        }
        if affects.rotation {
            instance.rotation += Vec3::new(
                effector.rotation_offset_deg.x.to_radians(),
                effector.rotation_offset_deg.y.to_radians(),
                effector.rotation_offset_deg.z.to_radians(),
            ) * w;
        }
        if affects.scale {
            instance.scale += effector.scale_offset * w;
        }
        if affects.color {
            let base = instance.color.unwrap_or(Color::WHITE);
            instance.color = Some(base.lerp(effector.color, w.clamp(0.0, 1.0)));
        }
        if affects.visibility && w >= effector.visibility_threshold {
            instance.visible = false;
        }
    }
}
