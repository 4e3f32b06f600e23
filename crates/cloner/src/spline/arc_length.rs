//! Arc-length reparametrization.
//!
//! Uniform parameter steps bunch instances where a curve's parametrization is
//! dense. The table here accumulates chord lengths at fine-grained samples
//! and inverts the mapping, so evenly spaced length fractions land at evenly
//! spaced points along the curve's actual length.
use crate::spline::Spline;

/// Minimum table resolution regardless of requested instance count.
pub const MIN_TABLE_SAMPLES: usize = 100;

/// Cumulative chord-length lookup table over a [`Spline`].
#[derive(Debug, Clone)]
pub struct ArcLengthTable {
    /// `cumulative[i]` is the length from `t = 0` to `t = i / (len - 1)`.
    cumulative: Vec<f32>,
}

impl ArcLengthTable {
    /// Resolution to use when distributing `count` instances.
    pub fn samples_for(count: usize) -> usize {
        (count * 10).max(MIN_TABLE_SAMPLES)
    }

    /// Build a table with `samples` chord segments.
    pub fn build(spline: &Spline, samples: usize) -> Self {
        let samples = samples.max(1);
        let mut cumulative = Vec::with_capacity(samples + 1);
        cumulative.push(0.0);

        let (mut prev, _) = spline.sample(0.0);
        let mut total = 0.0;
        for i in 1..=samples {
            let t = i as f32 / samples as f32;
            let (point, _) = spline.sample(t);
            total += (point - prev).length();
            cumulative.push(total);
            prev = point;
        }

        Self { cumulative }
    }

    pub fn total_length(&self) -> f32 {
        *self.cumulative.last().unwrap_or(&0.0)
    }

    /// Invert the table: map a length fraction `u` in `[0, 1]` back to the
    /// curve parameter `t` that lies at that fraction of the total length.
    pub fn t_for_fraction(&self, u: f32) -> f32 {
        let u = if u.is_finite() { u.clamp(0.0, 1.0) } else { 0.0 };
        let total = self.total_length();
        if total <= f32::EPSILON || self.cumulative.len() < 2 {
            // Zero-length curve: the identity mapping is as good as any.
            return u;
        }

        let target = u * total;
        let hi = self
            .cumulative
            .partition_point(|&len| len < target)
            .clamp(1, self.cumulative.len() - 1);
        let lo = hi - 1;

        let segments = (self.cumulative.len() - 1) as f32;
        let span = self.cumulative[hi] - self.cumulative[lo];
        let frac = if span > f32::EPSILON {
            (target - self.cumulative[lo]) / span
        } else {
            0.0
        };

        (lo as f32 + frac) / segments
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::spline::SplineType;

    #[test]
    fn samples_for_enforces_minimum() {
        assert_eq!(ArcLengthTable::samples_for(0), MIN_TABLE_SAMPLES);
        assert_eq!(ArcLengthTable::samples_for(5), MIN_TABLE_SAMPLES);
        assert_eq!(ArcLengthTable::samples_for(50), 500);
    }

    #[test]
    fn straight_line_maps_identically() {
        let s = Spline::new(
            vec![Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)],
            SplineType::Linear,
            0.5,
        );
        let table = ArcLengthTable::build(&s, 100);
        assert!((table.total_length() - 10.0).abs() < 1e-4);
        for i in 0..=10 {
            let u = i as f32 / 10.0;
            assert!((table.t_for_fraction(u) - u).abs() < 1e-4);
        }
    }

    #[test]
    fn uneven_segments_are_compensated() {
        // First segment is 9 units, second is 1: half the length sits well
        // inside the first segment.
        let s = Spline::new(
            vec![
                Vec3::ZERO,
                Vec3::new(9.0, 0.0, 0.0),
                Vec3::new(10.0, 0.0, 0.0),
            ],
            SplineType::Linear,
            0.5,
        );
        let table = ArcLengthTable::build(&s, 200);
        let t_half = table.t_for_fraction(0.5);
        let (p, _) = s.sample(t_half);
        assert!((p.x - 5.0).abs() < 0.1, "halfway point was {p:?}");
    }

    #[test]
    fn zero_length_curve_returns_identity() {
        let s = Spline::new(vec![Vec3::ONE, Vec3::ONE], SplineType::Linear, 0.5);
        let table = ArcLengthTable::build(&s, 100);
        assert_eq!(table.total_length(), 0.0);
        assert_eq!(table.t_for_fraction(0.25), 0.25);
    }

    #[test]
    fn fraction_is_clamped() {
        let s = Spline::new(vec![Vec3::ZERO, Vec3::X], SplineType::Linear, 0.5);
        let table = ArcLengthTable::build(&s, 100);
        assert_eq!(table.t_for_fraction(-2.0), 0.0);
        assert_eq!(table.t_for_fraction(9.0), 1.0);
        assert_eq!(table.t_for_fraction(f32::NAN), 0.0);
    }
}
