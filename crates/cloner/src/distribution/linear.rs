//! Linear array distribution.
use glam::Vec3;

use crate::config::{LinearAxis, LinearConfig};
use crate::distribution::{checked_count, finite_or};
use crate::instance::BaseInstance;
use crate::math::safe_normalize;

pub fn resolve(config: &LinearConfig) -> Vec<BaseInstance> {
    let count = checked_count(config.count);
    if count == 0 {
        return Vec::new();
    }

    let direction = match config.axis {
        LinearAxis::X => Vec3::X,
        LinearAxis::Y => Vec3::Y,
        LinearAxis::Z => Vec3::Z,
        LinearAxis::Custom(dir) => safe_normalize(dir),
    };

    let spacing = finite_or(config.spacing, 0.0, "linear spacing");
    let offset = if config.offset.is_finite() {
        config.offset
    } else {
        tracing::warn!("linear offset is not finite; using origin");
        Vec3::ZERO
    };
    let progression = finite_or(config.scale_progression, 1.0, "scale progression");
    let rotation_step = finite_or(
        config.rotation_progression_deg,
        0.0,
        "rotation progression",
    )
    .to_radians();

    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let mut instance = BaseInstance::at(i as u32, offset + direction * spacing * i as f32);
        instance.scale = Vec3::splat(progression.powi(i as i32));
        instance.rotation = Vec3::splat(rotation_step * i as f32);
        out.push(instance);
    }
    out
}
