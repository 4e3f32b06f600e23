//! Along-a-curve distribution.
use crate::config::SplineConfig;
use crate::distribution::checked_count;
use crate::instance::BaseInstance;
use crate::math::euler_from_direction;
use crate::spline::{ArcLengthTable, Spline};

pub fn resolve(config: &SplineConfig) -> Vec<BaseInstance> {
    let count = checked_count(config.count);
    if count == 0 {
        return Vec::new();
    }

    let curve = Spline::new(
        config.control_points.clone(),
        config.spline_type,
        config.tension,
    );
    if curve.is_degenerate() {
        tracing::warn!(
            points = curve.points().len(),
            "spline cloner needs at least 2 control points; producing no instances"
        );
        return Vec::new();
    }

    let table = config
        .distribute_evenly
        .then(|| ArcLengthTable::build(&curve, ArcLengthTable::samples_for(count)));

    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let u = if count == 1 {
            0.0
        } else {
            i as f32 / (count - 1) as f32
        };
        let t = match &table {
            Some(table) => table.t_for_fraction(u),
            None => u,
        };

        let (position, tangent) = curve.sample(t);
        let mut instance = BaseInstance::at(i as u32, position);
        if config.align_to_spline {
            instance.rotation = euler_from_direction(tangent);
        }
        out.push(instance);
    }
    out
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::spline::SplineType;

    #[test]
    fn too_few_control_points_yield_empty() {
        let config = SplineConfig {
            control_points: vec![Vec3::ZERO],
            count: 10,
            ..Default::default()
        };
        assert!(resolve(&config).is_empty());
    }

    #[test]
    fn arc_length_distribution_is_even_on_a_polyline() {
        // Two linear segments of different length; the five samples must be
        // equally spaced by arc length, not by parameter.
        let config = SplineConfig {
            control_points: vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(2.0, 1.0, 0.0),
                Vec3::new(4.0, 0.0, 0.0),
            ],
            spline_type: SplineType::Linear,
            count: 5,
            distribute_evenly: true,
            align_to_spline: false,
            ..Default::default()
        };
        let out = resolve(&config);
        assert_eq!(out.len(), 5);

        let gaps: Vec<f32> = out
            .windows(2)
            .map(|w| (w[1].position - w[0].position).length())
            .collect();
        for gap in &gaps {
            assert!(
                (gap - gaps[0]).abs() < 0.02,
                "uneven arc-length gaps: {gaps:?}"
            );
        }
    }

    #[test]
    fn endpoints_are_included() {
        let config = SplineConfig {
            control_points: vec![Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)],
            spline_type: SplineType::Linear,
            count: 3,
            ..Default::default()
        };
        let out = resolve(&config);
        assert!((out[0].position - Vec3::ZERO).length() < 1e-5);
        assert!((out[2].position - Vec3::new(10.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn align_to_spline_orients_along_tangent() {
        let config = SplineConfig {
            control_points: vec![Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0)],
            spline_type: SplineType::Linear,
            count: 2,
            align_to_spline: true,
            ..Default::default()
        };
        let out = resolve(&config);
        // Tangent is +Z, the identity forward.
        assert!(out[0].rotation.length() < 1e-5);
    }

    #[test]
    fn single_instance_sits_at_curve_start() {
        let config = SplineConfig {
            control_points: vec![Vec3::new(1.0, 2.0, 3.0), Vec3::new(5.0, 2.0, 3.0)],
            spline_type: SplineType::Linear,
            count: 1,
            ..Default::default()
        };
        let out = resolve(&config);
        assert_eq!(out.len(), 1);
        assert!((out[0].position - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-5);
    }
}
