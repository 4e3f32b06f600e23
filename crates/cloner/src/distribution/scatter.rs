//! Seeded random scatter distribution.
use std::f32::consts::TAU;

use glam::Vec3;
use rand::RngCore;

use crate::config::{ScatterConfig, ScatterVolume};
use crate::distribution::{checked_count, finite_or};
use crate::instance::BaseInstance;
use crate::rng::{instance_rng, rand01, rand_signed, SALT_SCATTER};

/// Retry budget per instance when avoiding overlap. When it runs out the
/// best candidate found so far is accepted rather than looping forever.
const MAX_OVERLAP_ATTEMPTS: usize = 30;

pub fn resolve(config: &ScatterConfig, seed: u64) -> Vec<BaseInstance> {
    let count = checked_count(config.count);
    if count == 0 {
        return Vec::new();
    }

    let Some(volume) = sanitize_volume(&config.volume) else {
        tracing::warn!("scatter volume is not finite; producing no instances");
        return Vec::new();
    };

    let min_scale = finite_or(config.min_scale, 1.0, "scatter min scale");
    let max_scale = finite_or(config.max_scale, 1.0, "scatter max scale");
    let (min_scale, max_scale) = if min_scale <= max_scale {
        (min_scale, max_scale)
    } else {
        (max_scale, min_scale)
    };
    let min_distance = finite_or(config.min_distance, 0.0, "scatter min distance").max(0.0);
    let avoid = config.avoid_overlap && min_distance > 0.0;

    let mut out: Vec<BaseInstance> = Vec::with_capacity(count);
    for i in 0..count {
        // One sub-stream per instance: positions stay put when the count
        // changes and instances never share correlated draws.
        let mut rng = instance_rng(seed, SALT_SCATTER + i as u64);

        let position = if avoid {
            place_avoiding_overlap(&volume, &out, min_distance, &mut rng)
        } else {
            sample_point(&volume, &mut rng)
        };

        let mut instance = BaseInstance::at(i as u32, position);

        instance.scale = if config.uniform_scale {
            Vec3::splat(lerp(min_scale, max_scale, rand01(&mut rng)))
        } else {
            Vec3::new(
                lerp(min_scale, max_scale, rand01(&mut rng)),
                lerp(min_scale, max_scale, rand01(&mut rng)),
                lerp(min_scale, max_scale, rand01(&mut rng)),
            )
        };

        if config.random_rotation {
            instance.rotation = Vec3::new(
                rand01(&mut rng) * TAU,
                rand01(&mut rng) * TAU,
                rand01(&mut rng) * TAU,
            );
        }

        out.push(instance);
    }
    out
}

fn sanitize_volume(volume: &ScatterVolume) -> Option<ScatterVolume> {
    match *volume {
        ScatterVolume::Box { min, max } => {
            if !min.is_finite() || !max.is_finite() {
                return None;
            }
            Some(ScatterVolume::Box {
                min: min.min(max),
                max: min.max(max),
            })
        }
        ScatterVolume::Sphere { center, radius } => {
            if !center.is_finite() || !radius.is_finite() {
                return None;
            }
            Some(ScatterVolume::Sphere {
                center,
                radius: radius.max(0.0),
            })
        }
    }
}

fn sample_point(volume: &ScatterVolume, rng: &mut dyn RngCore) -> Vec3 {
    match *volume {
        ScatterVolume::Box { min, max } => Vec3::new(
            lerp(min.x, max.x, rand01(rng)),
            lerp(min.y, max.y, rand01(rng)),
            lerp(min.z, max.z, rand01(rng)),
        ),
        ScatterVolume::Sphere { center, radius } => {
            // Uniform in the ball: uniform direction, cube-root radius.
            let z = rand_signed(rng);
            let theta = rand01(rng) * TAU;
            let planar = (1.0 - z * z).max(0.0).sqrt();
            let dir = Vec3::new(planar * theta.cos(), z, planar * theta.sin());
            center + dir * radius * rand01(rng).cbrt()
        }
    }
}

/// Rejection sampling against the already-accepted instances. Exhausting the
/// retry budget accepts the candidate farthest from its nearest neighbor.
fn place_avoiding_overlap(
    volume: &ScatterVolume,
    accepted: &[BaseInstance],
    min_distance: f32,
    rng: &mut dyn RngCore,
) -> Vec3 {
    let mut best = sample_point(volume, rng);
    let mut best_clearance = clearance(best, accepted);
    if best_clearance >= min_distance {
        return best;
    }

    for _ in 1..MAX_OVERLAP_ATTEMPTS {
        let candidate = sample_point(volume, rng);
        let candidate_clearance = clearance(candidate, accepted);
        if candidate_clearance >= min_distance {
            return candidate;
        }
        if candidate_clearance > best_clearance {
            best = candidate;
            best_clearance = candidate_clearance;
        }
    }
    best
}

fn clearance(point: Vec3, accepted: &[BaseInstance]) -> f32 {
    accepted
        .iter()
        .map(|i| (i.position - point).length())
        .fold(f32::INFINITY, f32::min)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
