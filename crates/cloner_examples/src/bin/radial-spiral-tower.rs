//! A spiral staircase: radial distribution with spiral offsets, faded out
//! near the top by a falloff effector.
use cloner::prelude::*;
use cloner_examples::{init_tracing, print_instances};
use glam::Vec3;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ClonerConfig::Radial(RadialConfig {
        count: 32,
        radius: 4.0,
        plane: RadialPlane::Xz,
        start_angle_deg: 0.0,
        end_angle_deg: 1080.0,
        align_to_radius: true,
        spiral: SpiralConfig {
            enabled: true,
            height_per_revolution: 3.0,
            radius_growth: -0.5,
        },
    });

    let mut fade = FalloffEffector::new("fade_top");
    fade.center = Vec3::new(0.0, 9.0, 0.0);
    fade.radius = 4.0;
    fade.curve = FalloffCurve::Smooth;
    fade.affects = Affects {
        scale: true,
        visibility: true,
        ..Affects::none()
    };
    fade.scale_offset = Vec3::splat(-0.6);
    fade.visibility_threshold = 0.9;

    let cloner = Cloner::new("spiral_tower", config)
        .with_seed(7)
        .with_effector(ClonerEffector::Falloff(fade));
    cloner.validate()?;

    let instances = evaluate_cloner(&cloner, None);
    print_instances("spiral tower", &instances, 12);
    Ok(())
}
