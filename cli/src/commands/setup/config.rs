//! # bpmig Config Setup Handler
//!
//! File: cli/src/commands/setup/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `bpmig setup config`, which writes the commented sample
//! configuration (`core::config::SAMPLE_CONFIG`) so an operator only has to
//! fill in the controller address and credentials.
//!
//! ## Workflow
//!
//! 1. Pick the target: `--output` if given, otherwise the per-user config
//!    path (`~/.config/bpmig/config.toml` on Linux).
//! 2. Refuse to replace an existing file unless `--force` is passed.
//! 3. Create the parent directory and write the sample.
//!
//! ## Usage
//!
//! ```bash
//! bpmig setup config
//! bpmig setup config --output ./.bpmig.toml
//! bpmig setup config --force
//! ```
//!
use crate::{
    common::fs::io as fsio,
    core::{
        config::{user_config_path, SAMPLE_CONFIG},
        error::{BpmigError, Result},
    },
};
use anyhow::{anyhow, bail, Context};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// # Config Setup Arguments (`ConfigArgs`)
#[derive(Parser, Debug, Default)]
#[command(
    name = "config",
    about = "Write a sample bpmig configuration file",
    long_about = "Writes a commented sample configuration to the per-user config path\n\
                  (or to --output). Existing files are kept unless --force is given."
)]
pub struct ConfigArgs {
    /// Write the sample here instead of the per-user config path.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Replace an existing file.
    #[arg(short, long)]
    force: bool,
}

/// # Handle Config Setup Command (`handle_config`)
///
/// ## Returns
///
/// * `Err`: if no target path can be determined, the target exists and
///   `--force` was not given, or the file cannot be written.
pub async fn handle_config(args: ConfigArgs) -> Result<()> {
    let target = match args.output {
        Some(path) => path,
        None => user_config_path().ok_or_else(|| {
            anyhow!(BpmigError::Config(
                "Could not determine the user configuration directory.".into()
            ))
        })?,
    };

    if target.exists() && !args.force {
        bail!(
            "Configuration file '{}' already exists. Use --force to replace it.",
            target.display()
        );
    }

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fsio::ensure_dir_exists(parent)
            .with_context(|| format!("Failed to create '{}'", parent.display()))?;
    }
    fsio::write_bytes_to_file(&target, SAMPLE_CONFIG.as_bytes())?;
    info!("Wrote sample configuration to {}", target.display());
    println!("Sample configuration written to {}", target.display());
    println!("Edit the [controller] section before running other commands.");
    Ok(())
}
