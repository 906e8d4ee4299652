//! Standby - keep a container alive until it is told to stop
//! 
//! This is the main entry point for the standby binary.

use std::io;

use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use standby::{config::Config, runner::run};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Quiet unless asked; RUST_LOG wins over the computed filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {}", e))?;

    debug!("Starting standby v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }

    debug!("Exiting");
    Ok(())
}
