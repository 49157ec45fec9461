//! Unit conversion demo.
//!
//! Runs a list of conversions and prints one `"<source> = <destination>"` line per entry.
//!
//! # Usage
//!
//! ```bash
//! # Built-in conversions (seconds/hours, meters/kilometers, m/s and km/h)
//! cargo run --bin unitconv-demo
//!
//! # Conversions from a TOML file
//! cargo run --bin unitconv-demo -- path/to/unitconv.toml
//! ```
//!
//! # Environment Variables
//!
//! - `UNITCONV_CONFIG`: Configuration file, used when no path argument is given
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use unitconv::config::{ConfigError, DemoConfig};

fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config()?;

    let mut failures = 0usize;
    for spec in &config.conversions {
        match spec.run() {
            Ok((source, destination)) => println!("{} = {}", source, destination),
            Err(e) => {
                error!(
                    "{} {} -> {} failed: {}",
                    spec.quantity, spec.from, spec.to, e
                );
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} conversions failed", failures, config.conversions.len());
    }
    Ok(())
}

/// Argument path, then `UNITCONV_CONFIG`, then the default locations, then built-ins.
fn load_config() -> anyhow::Result<DemoConfig> {
    let explicit = env::args().nth(1).or_else(|| env::var("UNITCONV_CONFIG").ok());
    if let Some(path) = explicit {
        return Ok(DemoConfig::from_file(path)?);
    }

    match DemoConfig::from_default_location() {
        Ok(config) => Ok(config),
        Err(ConfigError::NotFound) => {
            info!("No configuration file found, running built-in conversions");
            Ok(DemoConfig::default())
        }
        Err(e) => Err(e.into()),
    }
}
