//! notch — a floating top-of-screen widget showing the time and system load.
//!
//! Run with:  `RUST_LOG=info notch`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("notch v{} starting", env!("CARGO_PKG_VERSION"));

    notch_window::run().map_err(Into::into)
}
