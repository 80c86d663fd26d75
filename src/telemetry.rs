use crate::Result;
use crate::config::TelemetryConfig;

use std::io;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber. `RUST_LOG` narrows or widens the default
/// `info` level. Events go to stderr so command output on stdout stays clean.
pub fn init(cfg: &TelemetryConfig) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    // Exactly one of the two layers is present.
    let json = cfg
        .json
        .then(|| fmt::layer().json().with_writer(io::stderr));
    let plain = (!cfg.json).then(|| fmt::layer().with_target(false).with_writer(io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(plain)
        .try_init()?;
    Ok(())
}
