//! 3D grid distribution with optional shape masking.
use glam::Vec3;

use crate::config::{GridConfig, GridShape};
use crate::distribution::checked_count;
use crate::instance::BaseInstance;
use crate::rng::{self, SALT_GRID_VARIATION};

pub fn resolve(config: &GridConfig, seed: u64) -> Vec<BaseInstance> {
    let cx = checked_count(config.count_x);
    let cy = checked_count(config.count_y);
    let cz = checked_count(config.count_z);
    if cx == 0 || cy == 0 || cz == 0 {
        return Vec::new();
    }

    let spacing = if config.spacing.is_finite() {
        config.spacing
    } else {
        tracing::warn!("grid spacing is not finite; using unit spacing");
        Vec3::ONE
    };

    // Extents of the generated lattice, used both for centering and as the
    // implicit bounding volume of the shape mask.
    let extent = Vec3::new(
        (cx - 1) as f32 * spacing.x,
        (cy - 1) as f32 * spacing.y,
        (cz - 1) as f32 * spacing.z,
    );
    let origin = if config.centered { -extent * 0.5 } else { Vec3::ZERO };
    let grid_center = origin + extent * 0.5;
    let half = extent * 0.5;

    let variation = config.scale_variation.clamp(0.0, 1.0);
    let variation = if variation.is_finite() { variation } else { 0.0 };

    let mut out = Vec::with_capacity(cx * cy * cz);
    let mut lattice_index: u32 = 0;
    for ix in 0..cx {
        for iy in 0..cy {
            for iz in 0..cz {
                let index = lattice_index;
                lattice_index += 1;

                let position = origin
                    + Vec3::new(
                        ix as f32 * spacing.x,
                        iy as f32 * spacing.y,
                        iz as f32 * spacing.z,
                    );

                if !inside_shape(config.shape, position - grid_center, half) {
                    continue;
                }

                let mut instance = BaseInstance::at(index, position);
                if variation > 0.0 {
                    let jitter =
                        rng::hash_signed(seed, SALT_GRID_VARIATION + index as u64) * variation;
                    instance.scale = Vec3::splat((1.0 + jitter).max(0.0));
                }
                out.push(instance);
            }
        }
    }

    // Masked grids reindex to a contiguous range; the scale jitter above was
    // keyed on the lattice index so surviving instances keep their look when
    // the mask changes.
    for (i, instance) in out.iter_mut().enumerate() {
        instance.index = i as u32;
    }
    out
}

/// Test a grid-local offset against the mask inscribed in `half` extents.
/// Degenerate axes (a single layer) count as inside.
fn inside_shape(shape: GridShape, rel: Vec3, half: Vec3) -> bool {
    const EPS: f32 = 1e-4;
    let normalized = |value: f32, half: f32| {
        if half <= EPS {
            0.0
        } else {
            value / half
        }
    };
    match shape {
        GridShape::Box => true,
        GridShape::Sphere => {
            let n = Vec3::new(
                normalized(rel.x, half.x),
                normalized(rel.y, half.y),
                normalized(rel.z, half.z),
            );
            n.length_squared() <= 1.0 + EPS
        }
        GridShape::Cylinder => {
            let nx = normalized(rel.x, half.x);
            let nz = normalized(rel.z, half.z);
            nx * nx + nz * nz <= 1.0 + EPS
        }
    }
}
