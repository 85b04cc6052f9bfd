//! # bpmig Blueprint List Command
//!
//! File: cli/src/commands/blueprint/list.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `bpmig blueprint list`, which shows the blueprints defined on
//! the controller so an operator can find the label to pass to `export`,
//! `import` or `config pull`.
//!
//! Example output:
//!
//! ```text
//! Blueprints on 10.85.192.45:
//!
//! Label      | Id
//! -----------+-------------------------------------
//! SITE-A     | 2d2f6e3c-5b1a-4d4b-9d43-2b1f0a1c9e11
//! SITE-B     | 8a7c2f10-91d2-4c55-a0f4-7bd9b0e0c322
//!
//! Found 2 blueprint(s).
//! ```
//!
use crate::commands::CommandContext;
use crate::common::controller::blueprints::{list_blueprints, BlueprintRef};
use crate::core::error::Result;
use clap::Parser;
use tracing::debug;

/// Arguments for `bpmig blueprint list` (none).
#[derive(Parser, Debug)]
pub struct ListArgs {}

pub async fn handle_list(ctx: &CommandContext, _args: ListArgs) -> Result<()> {
    let (cfg, session) = ctx.login().await?;
    let blueprints = list_blueprints(&session).await;
    session.logout().await;
    let blueprints = blueprints?;

    debug!("Listing {} blueprints", blueprints.len());
    if blueprints.is_empty() {
        println!("No blueprints found on {}.", cfg.controller.host);
        return Ok(());
    }
    println!("Blueprints on {}:\n", cfg.controller.host);
    print!("{}", format_table(&blueprints));
    println!("\nFound {} blueprint(s).", blueprints.len());
    Ok(())
}

/// Renders the label/id table; the label column fits the longest label.
fn format_table(blueprints: &[BlueprintRef]) -> String {
    let width = blueprints
        .iter()
        .map(|bp| bp.label.len())
        .max()
        .unwrap_or(0)
        .max("Label".len());
    let mut out = format!("{:<width$} | Id\n", "Label", width = width);
    out.push_str(&format!("{}-+-{}\n", "-".repeat(width), "-".repeat(36)));
    for bp in blueprints {
        out.push_str(&format!("{:<width$} | {}\n", bp.label, bp.id, width = width));
    }
    out
}
