//! Radial (circle / arc / spiral) distribution.
use std::f32::consts::TAU;

use glam::Vec3;

use crate::config::{RadialConfig, RadialPlane};
use crate::distribution::{checked_count, finite_or};
use crate::instance::BaseInstance;
use crate::math::euler_from_direction;

pub fn resolve(config: &RadialConfig) -> Vec<BaseInstance> {
    let count = checked_count(config.count);
    if count == 0 {
        return Vec::new();
    }

    let radius = finite_or(config.radius, 0.0, "radial radius");
    let start_deg = finite_or(config.start_angle_deg, 0.0, "start angle");
    let end_deg = finite_or(config.end_angle_deg, 360.0, "end angle");
    let span_deg = end_deg - start_deg;

    // A full loop divides by `count` so the seam point is not duplicated; a
    // partial arc divides by `count - 1` so the last instance lands exactly
    // on the end angle.
    let full_loop = span_deg != 0.0 && (span_deg % 360.0).abs() < 1e-3;
    let step = if count <= 1 {
        0.0
    } else if full_loop {
        span_deg.to_radians() / count as f32
    } else {
        span_deg.to_radians() / (count - 1) as f32
    };
    let start = start_deg.to_radians();

    let spiral = &config.spiral;
    let height_per_rev = finite_or(spiral.height_per_revolution, 0.0, "spiral height");
    let radius_growth = finite_or(spiral.radius_growth, 0.0, "spiral radius growth");

    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let angle = start + step * i as f32;

        let mut r = radius;
        let mut height = 0.0;
        if spiral.enabled {
            let turns = (angle - start) / TAU;
            height = height_per_rev * turns;
            r += radius_growth * turns;
        }

        let (cos, sin) = (angle.cos(), angle.sin());
        let (position, outward) = match config.plane {
            RadialPlane::Xy => (
                Vec3::new(cos * r, sin * r, height),
                Vec3::new(cos, sin, 0.0),
            ),
            RadialPlane::Xz => (
                Vec3::new(cos * r, height, sin * r),
                Vec3::new(cos, 0.0, sin),
            ),
            RadialPlane::Yz => (
                Vec3::new(height, cos * r, sin * r),
                Vec3::new(0.0, cos, sin),
            ),
        };

        let mut instance = BaseInstance::at(i as u32, position);
        if config.align_to_radius {
            instance.rotation = euler_from_direction(outward);
        }
        out.push(instance);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_circle_has_no_seam_duplicate() {
        let config = RadialConfig {
            count: 4,
            radius: 2.0,
            start_angle_deg: 0.0,
            end_angle_deg: 360.0,
            plane: RadialPlane::Xz,
            ..Default::default()
        };
        let out = resolve(&config);
        assert_eq!(out.len(), 4);

        // Four points at 90-degree increments, all at distance 2.
        let expected = [
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::new(-2.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, -2.0),
        ];
        for (inst, want) in out.iter().zip(expected) {
            assert!((inst.position - want).length() < 1e-5, "{:?}", inst.position);
            assert!((inst.position.length() - 2.0).abs() < 1e-5);
        }
    }

    #[test]
    fn partial_arc_terminates_at_end_angle() {
        let config = RadialConfig {
            count: 3,
            radius: 1.0,
            start_angle_deg: 0.0,
            end_angle_deg: 180.0,
            plane: RadialPlane::Xz,
            ..Default::default()
        };
        let out = resolve(&config);
        assert!((out[2].position - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn single_instance_sits_at_start_angle() {
        let config = RadialConfig {
            count: 1,
            radius: 3.0,
            start_angle_deg: 90.0,
            plane: RadialPlane::Xz,
            ..Default::default()
        };
        let out = resolve(&config);
        assert_eq!(out.len(), 1);
        assert!((out[0].position - Vec3::new(0.0, 0.0, 3.0)).length() < 1e-5);
    }

    #[test]
    fn spiral_adds_height_and_radius_growth() {
        let config = RadialConfig {
            count: 8,
            radius: 1.0,
            start_angle_deg: 0.0,
            end_angle_deg: 720.0,
            plane: RadialPlane::Xz,
            spiral: crate::config::SpiralConfig {
                enabled: true,
                height_per_revolution: 2.0,
                radius_growth: 1.0,
            },
            ..Default::default()
        };
        let out = resolve(&config);
        assert!((out[0].position.y - 0.0).abs() < 1e-5);
        // Full double loop over 8 instances: instance 4 has swept exactly
        // one revolution.
        assert!((out[4].position.y - 2.0).abs() < 1e-4);
        let radial = Vec3::new(out[4].position.x, 0.0, out[4].position.z).length();
        assert!((radial - 2.0).abs() < 1e-4);
    }

    #[test]
    fn align_to_radius_faces_outward() {
        let config = RadialConfig {
            count: 4,
            radius: 2.0,
            align_to_radius: true,
            plane: RadialPlane::Xz,
            ..Default::default()
        };
        let out = resolve(&config);
        // First instance sits on +X in the XZ plane; outward is +X, which is
        // a 90 degree yaw from the +Z identity forward.
        assert!((out[0].rotation.y - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn xy_plane_keeps_points_in_plane() {
        let config = RadialConfig {
            count: 6,
            plane: RadialPlane::Xy,
            ..Default::default()
        };
        for inst in resolve(&config) {
            assert_eq!(inst.position.z, 0.0);
        }
    }
}
