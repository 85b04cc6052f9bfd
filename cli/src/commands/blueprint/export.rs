//! # bpmig Blueprint Export Command
//!
//! File: cli/src/commands/blueprint/export.rs
//! Author: Christi Mahu
//!
//! Implements `bpmig blueprint export <LABEL>`: saves the blueprint's
//! node/relationship graph as pretty-printed JSON. The file is written to
//! `--output` when given, otherwise to `<output.directory>/<LABEL>.json`.
//!
//! ```bash
//! bpmig blueprint export SITE-A
//! bpmig blueprint export SITE-A --output /tmp/site-a.json
//! ```
//!
use crate::commands::CommandContext;
use crate::common::fs::io as fsio;
use crate::core::error::Result;
use crate::fabric::export::{export_blueprint, snapshot_file_name};
use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Label of the blueprint to export.
    #[arg(required = true)]
    label: String,

    /// Snapshot file to write.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

pub async fn handle_export(ctx: &CommandContext, args: ExportArgs) -> Result<()> {
    let (cfg, session) = ctx.login().await?;
    let progress = ctx.progress();
    let snapshot = export_blueprint(&session, &args.label, &progress).await;
    session.logout().await;
    let snapshot = snapshot?;

    let target = match args.output {
        Some(path) => path,
        None => default_snapshot_path(Path::new(&cfg.output.directory), &args.label)?,
    };
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fsio::ensure_dir_exists(parent)?;
    }
    let bytes = snapshot.to_bytes()?;
    fsio::write_bytes_to_file(&target, &bytes)
        .with_context(|| format!("Failed to save snapshot of '{}'", args.label))?;

    println!(
        "Exported blueprint '{}' ({} nodes, {} relationships) to {}",
        args.label,
        snapshot.nodes.len(),
        snapshot.relationships.len(),
        target.display()
    );
    Ok(())
}

fn default_snapshot_path(directory: &Path, label: &str) -> Result<PathBuf> {
    let safe = fsio::safe_path_component(label)?;
    Ok(directory.join(snapshot_file_name(&safe)))
}
