//! # bpmig Config Pull Command
//!
//! File: cli/src/commands/config/pull.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `bpmig config pull <LABEL>`. For every switch in the blueprint
//! it fetches the pristine and rendered configuration, splits the rendered
//! text at the configlet markers, and packs the results into `<LABEL>.tgz`:
//!
//! ```text
//! <LABEL>/
//!   spine1/
//!     pristine.txt
//!     rendered.txt
//!     intended.txt
//!     configlet.txt
//!     configlet-set.txt
//!   leaf1/
//!     ...
//! ```
//!
//! Files with no meaningful content are left out. Switches that could not be
//! read are listed at the end; the archive still holds the others.
//!
//! ```bash
//! bpmig config pull SITE-A
//! bpmig config pull SITE-A --output /srv/backups
//! ```
//!
use crate::commands::CommandContext;
use crate::common::fs::io as fsio;
use crate::core::error::Result;
use crate::fabric::extract::{extract_config, ConfigArchive};
use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Parser, Debug)]
pub struct PullArgs {
    /// Label of the blueprint whose switches are pulled.
    #[arg(required = true)]
    label: String,

    /// Directory to write the archive to (defaults to output.directory).
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,
}

pub async fn handle_pull(ctx: &CommandContext, args: PullArgs) -> Result<()> {
    let (cfg, session) = ctx.login().await?;
    let progress = ctx.progress();
    let archive = extract_config(&session, &args.label, &progress).await;
    session.logout().await;
    let archive = archive?;

    let directory = args
        .output
        .unwrap_or_else(|| PathBuf::from(&cfg.output.directory));
    let target = save_archive(&directory, &archive)?;

    println!(
        "Saved configuration of '{}' to {} ({} bytes)",
        args.label,
        target.display(),
        archive.bytes.len()
    );
    if !archive.failed.is_empty() {
        println!("{} switch(es) could not be pulled:", archive.failed.len());
        for failure in &archive.failed {
            warn!("Switch {} not archived: {}", failure.label, failure.error);
            println!("  - {}: {}", failure.label, failure.error);
        }
    }
    Ok(())
}

/// Writes the archive into `directory` under a sanitized file name.
fn save_archive(directory: &Path, archive: &ConfigArchive) -> Result<PathBuf> {
    fsio::ensure_dir_exists(directory)?;
    let target = directory.join(fsio::safe_path_component(&archive.name)?);
    fsio::write_bytes_to_file(&target, &archive.bytes)
        .with_context(|| format!("Failed to save archive {}", archive.name))?;
    Ok(target)
}
