//! Configuration and CLI argument handling

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser, Debug, Default)]
#[command(name = "standby")]
#[command(about = "Idle as a container's main process until SIGTERM arrives")]
#[command(version)]
pub struct Config {
    /// Enable verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }

    /// Filter directive used when `RUST_LOG` is not set
    pub fn log_filter(&self) -> String {
        format!("standby={}", self.log_level())
    }
}
