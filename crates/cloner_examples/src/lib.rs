#![forbid(unsafe_code)]

use cloner::prelude::ClonerInstance;

/// Install a simple fmt subscriber honoring `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}

/// Print a short table of the first `limit` instances.
pub fn print_instances(label: &str, instances: &[ClonerInstance], limit: usize) {
    let visible = instances.iter().filter(|i| i.visible).count();
    println!("{label}: {} instances ({visible} visible)", instances.len());
    for instance in instances.iter().take(limit) {
        println!(
            "  #{:<3} pos ({:+.2}, {:+.2}, {:+.2})  rot ({:+.2}, {:+.2}, {:+.2})  scale {:.2}{}",
            instance.index,
            instance.position.x,
            instance.position.y,
            instance.position.z,
            instance.rotation.x,
            instance.rotation.y,
            instance.rotation.z,
            instance.scale.x,
            if instance.visible { "" } else { "  [hidden]" },
        );
    }
    if instances.len() > limit {
        println!("  ... {} more", instances.len() - limit);
    }
}
