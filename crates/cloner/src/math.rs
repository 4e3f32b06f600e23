//! Shared math helpers used by the resolvers and effectors.
use glam::Vec3;

/// Fallback direction used when a supplied vector is unusable.
pub(crate) const FALLBACK_DIRECTION: Vec3 = Vec3::X;

/// Normalize `v`, falling back to +X for zero-length or non-finite input.
#[inline]
pub fn safe_normalize(v: Vec3) -> Vec3 {
    if !v.is_finite() {
        return FALLBACK_DIRECTION;
    }
    let len_sq = v.length_squared();
    if len_sq <= f32::EPSILON {
        return FALLBACK_DIRECTION;
    }
    v / len_sq.sqrt()
}

/// Hermite smoothstep over `[0, 1]`.
#[inline]
pub fn smoothstep(x: f32) -> f32 {
    let t = x.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Euler angles (radians, XYZ order) orienting local +Z along `dir`.
///
/// Yaw around Y, then pitch around X; roll is left at zero.
#[inline]
pub fn euler_from_direction(dir: Vec3) -> Vec3 {
    let d = safe_normalize(dir);
    let yaw = d.x.atan2(d.z);
    let pitch = -d.y.clamp(-1.0, 1.0).asin();
    Vec3::new(pitch, yaw, 0.0)
}
