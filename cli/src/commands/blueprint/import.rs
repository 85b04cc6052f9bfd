//! # bpmig Blueprint Import Command
//!
//! File: cli/src/commands/blueprint/import.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `bpmig blueprint import <FILE> --label <NEW>`: reads an
//! exported snapshot, rewrites it for the new blueprint (see
//! `fabric::transform`) and submits it to the controller.
//!
//! The controller's response body is printed whatever the status. A non-2xx
//! status then fails the command with `BpmigError::Rejected`, so scripts see
//! a non-zero exit code.
//!
//! ```bash
//! bpmig blueprint import SITE-A.json --label SITE-B
//! ```
//!
use crate::commands::CommandContext;
use crate::common::fs::io as fsio;
use crate::core::error::{BpmigError, Result};
use crate::fabric::create::import_blueprint;
use anyhow::anyhow;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// Snapshot produced by `bpmig blueprint export`.
    #[arg(required = true, value_name = "FILE")]
    snapshot: PathBuf,

    /// Label of the blueprint to create.
    #[arg(short, long, value_name = "NEW")]
    label: String,
}

pub async fn handle_import(ctx: &CommandContext, args: ImportArgs) -> Result<()> {
    // Read before logging in so a bad path never opens a session.
    let bytes = fsio::read_file_to_bytes(&args.snapshot)?;

    let (_cfg, session) = ctx.login().await?;
    let progress = ctx.progress();
    let response = import_blueprint(&session, &bytes, &args.label, &progress).await;
    session.logout().await;
    let response = response?;

    println!("{}", response.content);
    if !response.is_success() {
        return Err(anyhow!(BpmigError::Rejected {
            status: response.status,
            body: response.content,
        }));
    }
    println!("Blueprint '{}' created.", args.label);
    Ok(())
}
