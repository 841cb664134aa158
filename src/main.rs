//! hud — headless host for the construction status overlay.
//!
//! Run with:  `RUST_LOG=debug hud [path/to/hud.toml]`

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_subscriber::{prelude::*, reload, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Structured logging is up before the config loads so its warnings show.
    // RUST_LOG wins; otherwise the config's log level replaces "info" below.
    let env_filter = EnvFilter::try_from_default_env();
    let from_env = env_filter.is_ok();
    let (filter, filter_handle) =
        reload::Layer::new(env_filter.unwrap_or_else(|_| EnvFilter::new("info")));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("hud v{} starting", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(hud_config::default_path);

    let config = hud_config::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    if !from_env {
        filter_handle
            .reload(EnvFilter::new(&config.global.log_level))
            .context("applying global.log_level")?;
    }

    hud_host::run(config, &config_path).await?;
    Ok(())
}
