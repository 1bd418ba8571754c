//! Bridge deployment configuration gate - main entry point
//!
//! Validates the deployment settings found in the environment (plus an
//! optional dotenv-style overlay) and halts with a non-zero exit before
//! any on-chain action can run against a malformed configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use config::{ConfigLoader, ConfigValidator};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "deployer", version, about = "Validate bridge deployment settings")]
struct Args {
    /// Dotenv-style overlay file; process environment entries win for any
    /// key present in both
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Print the normalized configuration as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_logging()?;

    let args = Args::parse();

    let bag = match &args.env_file {
        Some(path) => ConfigLoader::from_env_with_overlay(path)
            .context("Failed to load configuration overlay")?,
        None => ConfigLoader::from_env(),
    };

    let validated = ConfigValidator::validate(&bag).context("Configuration validation failed")?;

    let disc = validated.discriminators();
    info!("Configuration validated: {} fields", validated.len());
    info!("Bridge mode: {}", disc.bridge_mode);
    info!(
        "Fee collection: home {}, foreign {}",
        disc.home_reward, disc.foreign_reward
    );

    if args.json {
        let json = serde_json::to_string_pretty(&validated)
            .context("Failed to serialize configuration")?;
        println!("{json}");
    }

    Ok(())
}

/// Initialize logging based on environment variables
fn init_logging() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}
