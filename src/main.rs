//! CureLink configuration preflight.
//!
//! Resolves the settings snapshot exactly as a serving process would and
//! reports it, so a deploy can be checked before anything binds a port.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use std::path::PathBuf;

use clap::Parser;
use curelink_config::settings::base_dir_or_cwd;
use curelink_config::telemetry::init_tracing;
use curelink_config::{Result, Settings};

/// CureLink configuration preflight
#[derive(Parser, Debug)]
#[command(name = "curelink-config")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Application base directory (defaults to the current directory)
    #[arg(short, long, env = "CURELINK_BASE_DIR")]
    base_dir: Option<PathBuf>,

    /// Optional .env file to load before resolving
    #[arg(long, env = "CURELINK_ENV_FILE")]
    env_file: Option<PathBuf>,

    /// Dump the full snapshot as JSON instead of the summary
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "CURELINK_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Enable JSON logging output
    #[arg(long, env = "CURELINK_LOG_JSON")]
    log_json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.log_json);

    if let Some(env_file) = &cli.env_file {
        match dotenvy::from_path(env_file) {
            Ok(()) => tracing::info!(path = %env_file.display(), "loaded env file"),
            Err(err) => tracing::warn!(%err, "failed to load env file; continuing"),
        }
    } else if let Err(err) = dotenvy::dotenv() {
        tracing::debug!(%err, "no .env file loaded");
    }

    let base_dir = base_dir_or_cwd(cli.base_dir)?;
    let settings = Settings::from_process_env(base_dir);

    if cli.json {
        println!("{}", settings.to_json()?);
    } else {
        println!("{}", settings.summary());
    }

    Ok(())
}
