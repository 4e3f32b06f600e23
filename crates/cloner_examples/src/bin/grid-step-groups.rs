//! Grid distribution with a step effector striding visibility and color,
//! plus seeded noise displacement on top.
use cloner::prelude::*;
use cloner_examples::{init_tracing, print_instances};
use glam::Vec3;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut stripes = StepEffector::new("stripes");
    stripes.step_size = 4;
    stripes.alternate_visibility = true;
    stripes.colors = vec![Color::new(0.9, 0.3, 0.2), Color::new(0.2, 0.4, 0.9)];
    stripes.affects = Affects {
        visibility: true,
        color: true,
        ..Affects::none()
    };

    let mut turbulence = NoiseEffector::new("turbulence");
    turbulence.frequency = 0.25;
    turbulence.amplitude = 0.4;
    turbulence.affects = Affects {
        position: true,
        ..Affects::none()
    };

    let cloner = Cloner::new(
        "striped_grid",
        ClonerConfig::Grid(GridConfig {
            count_x: 8,
            count_y: 1,
            count_z: 8,
            spacing: Vec3::splat(1.5),
            shape: GridShape::Cylinder,
            scale_variation: 0.2,
            ..Default::default()
        }),
    )
    .with_seed(1234)
    .with_effector(ClonerEffector::Step(stripes))
    .with_effector(ClonerEffector::Noise(turbulence));
    cloner.validate()?;

    let mut engine = ClonerEngine::new();
    let instances = engine.evaluate(&cloner, None);
    print_instances("striped grid", &instances, 16);

    // Second evaluation with unchanged inputs hits the memo cache.
    let again = engine.evaluate(&cloner, None);
    assert_eq!(instances, again);
    Ok(())
}
