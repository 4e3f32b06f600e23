//! Compare plain scatter against overlap-avoiding scatter in the same box.
use cloner::prelude::*;
use cloner_examples::{init_tracing, print_instances};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let volume = ScatterVolume::Box {
        min: Vec3::new(-8.0, 0.0, -8.0),
        max: Vec3::new(8.0, 0.0, 8.0),
    };

    let plain = Cloner::new(
        "plain",
        ClonerConfig::Scatter(ScatterConfig {
            count: 120,
            volume,
            ..Default::default()
        }),
    )
    .with_seed(42);

    let spaced = Cloner::new(
        "spaced",
        ClonerConfig::Scatter(ScatterConfig {
            count: 120,
            volume,
            avoid_overlap: true,
            min_distance: 1.0,
            ..Default::default()
        }),
    )
    .with_seed(42);

    for cloner in [&plain, &spaced] {
        let instances = evaluate_cloner(cloner, None);
        let min_gap = min_pairwise_distance(&instances);
        print_instances(&cloner.id, &instances, 5);
        println!("  closest pair: {min_gap:.3}\n");
    }

    // "Randomize" is just writing a new seed: draw one from OS entropy and
    // re-evaluate. Running the binary twice prints a different layout here
    // while the seed-42 comparison above stays byte-for-byte identical.
    let fresh_seed = StdRng::from_os_rng().next_u64();
    let randomized = spaced.with_seed(fresh_seed);
    let instances = evaluate_cloner(&randomized, None);
    print_instances(&format!("spaced (seed {fresh_seed})"), &instances, 5);
    Ok(())
}

fn min_pairwise_distance(instances: &[ClonerInstance]) -> f32 {
    let mut min = f32::INFINITY;
    for i in 0..instances.len() {
        for j in (i + 1)..instances.len() {
            min = min.min((instances[i].position - instances[j].position).length());
        }
    }
    min
}
