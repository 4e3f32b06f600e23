//! Seeded coherent noise.
//!
//! Gradient (Perlin-style) noise over a 3D lattice, with fractal octave
//! summation. The lattice hash runs through the same avalanche as the rest of
//! the crate's seeded randomness, so noise output is a pure function of
//! `(seed, point)`.
use glam::Vec3;

use crate::rng::mix;

/// Twelve edge-of-cube gradient directions.
const GRADIENTS: [Vec3; 12] = [
    Vec3::new(1.0, 1.0, 0.0),
    Vec3::new(-1.0, 1.0, 0.0),
    Vec3::new(1.0, -1.0, 0.0),
    Vec3::new(-1.0, -1.0, 0.0),
    Vec3::new(1.0, 0.0, 1.0),
    Vec3::new(-1.0, 0.0, 1.0),
    Vec3::new(1.0, 0.0, -1.0),
    Vec3::new(-1.0, 0.0, -1.0),
    Vec3::new(0.0, 1.0, 1.0),
    Vec3::new(0.0, -1.0, 1.0),
    Vec3::new(0.0, 1.0, -1.0),
    Vec3::new(0.0, -1.0, -1.0),
];

#[inline]
fn corner_gradient(seed: u64, x: i32, y: i32, z: i32) -> Vec3 {
    let h = mix(
        seed ^ (x as i64 as u64).wrapping_mul(0x9E3779B97F4A7C15)
            ^ (y as i64 as u64).wrapping_mul(0xBF58476D1CE4E5B9)
            ^ (z as i64 as u64).wrapping_mul(0x94D049BB133111EB),
    );
    GRADIENTS[(h % 12) as usize]
}

#[inline]
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Single-octave gradient noise at `p`, roughly in `[-1, 1]`.
pub fn perlin3(seed: u64, p: Vec3) -> f32 {
    if !p.is_finite() {
        return 0.0;
    }

    let cell = p.floor();
    let (x0, y0, z0) = (cell.x as i32, cell.y as i32, cell.z as i32);
    let f = p - cell;

    let u = fade(f.x);
    let v = fade(f.y);
    let w = fade(f.z);

    let corner = |cx: i32, cy: i32, cz: i32| -> f32 {
        let g = corner_gradient(seed, x0 + cx, y0 + cy, z0 + cz);
        let d = f - Vec3::new(cx as f32, cy as f32, cz as f32);
        g.dot(d)
    };

    let x00 = lerp(corner(0, 0, 0), corner(1, 0, 0), u);
    let x10 = lerp(corner(0, 1, 0), corner(1, 1, 0), u);
    let x01 = lerp(corner(0, 0, 1), corner(1, 0, 1), u);
    let x11 = lerp(corner(0, 1, 1), corner(1, 1, 1), u);

    let y0v = lerp(x00, x10, v);
    let y1v = lerp(x01, x11, v);

    lerp(y0v, y1v, w)
}

/// Fractal sum of [`perlin3`] octaves with lacunarity 2 and gain 0.5,
/// normalized back into roughly `[-1, 1]`.
pub fn fbm3(seed: u64, p: Vec3, octaves: u32) -> f32 {
    let octaves = octaves.clamp(1, 8);

    let mut sum = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = 1.0;
    let mut total = 0.0;
    for octave in 0..octaves {
        sum += perlin3(seed.wrapping_add(octave as u64), p * frequency) * amplitude;
        total += amplitude;
        amplitude *= 0.5;
        frequency *= 2.0;
    }

    sum / total
}
