//! FitTrack - Personal Fitness Tracker
//!
//! Main entry point for the application.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;

fn main() -> anyhow::Result<()> {
    // Log to stderr so framed command output stays clean on stdout
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting FitTrack v{}", env!("CARGO_PKG_VERSION"));

    app::run()
}
