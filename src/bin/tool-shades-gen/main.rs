//! Helper tool rendering shade palettes as HTML preview grids and JSON exports.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod shades_gen;

fn main() -> anyhow::Result<()> {
    init_tracing();
    shades_gen::run()
}

/// Configure tracing subscribers so config-loading logs are visible.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
