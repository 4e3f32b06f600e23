use std::hint::black_box;

use cloner::prelude::{
    apply_effectors, calculate_cloner_instances, Affects, Cloner, ClonerConfig, ClonerEffector,
    FalloffEffector, GridConfig, NoiseEffector, RandomEffector, ScatterConfig,
};
use criterion::{criterion_group, criterion_main, Criterion};
use glam::Vec3;

fn grid_cloner(side: i32) -> Cloner {
    Cloner::new(
        "bench_grid",
        ClonerConfig::Grid(GridConfig {
            count_x: side,
            count_y: side,
            count_z: side,
            spacing: Vec3::splat(1.5),
            ..Default::default()
        }),
    )
}

fn effector_stack() -> Vec<ClonerEffector> {
    let mut jitter = RandomEffector::new("jitter");
    jitter.affects = Affects::all();
    jitter.position_range = Vec3::splat(0.5);
    jitter.scale_range = Vec3::splat(0.2);

    let mut fade = FalloffEffector::new("fade");
    fade.radius = 10.0;
    fade.affects = Affects {
        scale: true,
        visibility: true,
        ..Affects::none()
    };
    fade.scale_offset = Vec3::splat(-0.5);

    let mut turbulence = NoiseEffector::new("turbulence");
    turbulence.frequency = 0.3;
    turbulence.octaves = 4;

    vec![
        ClonerEffector::Random(jitter),
        ClonerEffector::Falloff(fade),
        ClonerEffector::Noise(turbulence),
    ]
}

fn bench_grid_resolution(c: &mut Criterion) {
    let cloner = grid_cloner(22); // ~10k instances
    c.bench_function("grid_resolve_10k", |b| {
        b.iter(|| black_box(calculate_cloner_instances(black_box(&cloner), None)));
    });
}

fn bench_scatter_with_overlap(c: &mut Criterion) {
    let cloner = Cloner::new(
        "bench_scatter",
        ClonerConfig::Scatter(ScatterConfig {
            count: 1000,
            avoid_overlap: true,
            min_distance: 0.3,
            ..Default::default()
        }),
    )
    .with_seed(42);
    c.bench_function("scatter_avoid_overlap_1k", |b| {
        b.iter(|| black_box(calculate_cloner_instances(black_box(&cloner), None)));
    });
}

fn bench_effector_pipeline(c: &mut Criterion) {
    let cloner = grid_cloner(22);
    let base = calculate_cloner_instances(&cloner, None);
    let effectors = effector_stack();
    c.bench_function("effector_pipeline_10k", |b| {
        b.iter(|| black_box(apply_effectors(black_box(base.clone()), black_box(&effectors))));
    });
}

criterion_group!(
    benches,
    bench_grid_resolution,
    bench_scatter_with_overlap,
    bench_effector_pipeline
);
criterion_main!(benches);
