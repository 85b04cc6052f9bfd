//! # bpmig Blueprint Transform Command
//!
//! File: cli/src/commands/blueprint/transform.rs
//! Author: Christi Mahu
//!
//! Implements `bpmig blueprint transform <FILE> --label <NEW>`. Runs the
//! snapshot-to-creation-spec transformation locally and prints the spec that
//! `import` would submit, without contacting the controller. Handy for
//! reviewing a migration before running it.
//!
//! ```bash
//! bpmig blueprint transform SITE-A.json --label SITE-B
//! bpmig blueprint transform SITE-A.json --label SITE-B --output site-b-spec.json
//! ```
//!
use crate::common::fs::io as fsio;
use crate::core::error::Result;
use crate::fabric::model::BlueprintSnapshot;
use crate::fabric::transform::transform_snapshot;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
pub struct TransformArgs {
    /// Snapshot produced by `bpmig blueprint export`.
    #[arg(required = true, value_name = "FILE")]
    snapshot: PathBuf,

    /// Label of the blueprint to be created.
    #[arg(short, long, value_name = "NEW")]
    label: String,

    /// Write the creation spec here instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

pub async fn handle_transform(args: TransformArgs) -> Result<()> {
    let bytes = fsio::read_file_to_bytes(&args.snapshot)?;
    let snapshot = BlueprintSnapshot::from_slice(&bytes)
        .with_context(|| format!("Failed to load snapshot {}", args.snapshot.display()))?;
    let spec = transform_snapshot(&snapshot, &args.label);
    let rendered = serde_json::to_string_pretty(&spec).context("Failed to serialize creation spec")?;

    match args.output {
        Some(path) => {
            fsio::write_bytes_to_file(&path, rendered.as_bytes())?;
            info!("Creation spec for '{}' written to {}", args.label, path.display());
            println!("Creation spec for '{}' written to {}", args.label, path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
