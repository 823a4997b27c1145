//! Benford Router binary
//!
//! Starts the HTTP server for Benford's Law analysis.

use benford_router::{config::RouterConfig, start_server, RouterError};
use clap::Parser;
use std::path::PathBuf;
use std::process;

const AFTER_HELP: &str = "\
Endpoints:
  GET  /                  Liveness message
  GET  /health            Health status
  POST /benford/analyze   {\"input\": \"...\", \"significanceLevel\": 0.05}

Config keys (TOML):
  bind_address, bind_port, default_significance_level (0.05),
  max_body_bytes (1048576), log_filter (\"info\", RUST_LOG wins)";

/// Benford Router - Benford's Law analysis over HTTP
#[derive(Debug, Parser)]
#[command(name = "benford-router", version, about, after_help = AFTER_HELP)]
struct Args {
    /// TOML configuration file; local defaults (127.0.0.1:8080) when absent
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured bind port
    #[arg(short, long)]
    port: Option<u16>,
}

impl Args {
    fn into_config(self) -> Result<RouterConfig, RouterError> {
        let mut config = match self.config {
            Some(path) => RouterConfig::from_file(path)?,
            None => RouterConfig::default_local_config(),
        };
        if let Some(port) = self.port {
            config.bind_port = port;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let result = match args.into_config() {
        Ok(config) => start_server(config).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
