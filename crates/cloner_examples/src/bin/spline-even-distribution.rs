//! Show what arc-length reparametrization buys: even spacing along a curve
//! whose parametrization is anything but even.
use cloner::prelude::*;
use cloner_examples::{init_tracing, print_instances};
use glam::Vec3;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let control_points = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(9.0, 0.0, 0.0),
        Vec3::new(10.0, 0.0, 1.0),
        Vec3::new(10.0, 0.0, 2.0),
    ];

    for distribute_evenly in [false, true] {
        let cloner = Cloner::new(
            if distribute_evenly { "even" } else { "raw" },
            ClonerConfig::Spline(SplineConfig {
                control_points: control_points.clone(),
                spline_type: SplineType::CatmullRom,
                count: 8,
                distribute_evenly,
                align_to_spline: true,
                ..Default::default()
            }),
        );
        let instances = evaluate_cloner(&cloner, None);

        let gaps: Vec<f32> = instances
            .windows(2)
            .map(|w| (w[1].position - w[0].position).length())
            .collect();
        print_instances(&cloner.id, &instances, 8);
        println!("  gaps: {gaps:.2?}\n");
    }
    Ok(())
}
