//! # bpmig Blueprint Command Group
//!
//! File: cli/src/commands/blueprint/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Entry point and router for `bpmig blueprint`. The subcommands cover the
//! migration of a blueprint from one fabric (or label) to another:
//!
//! - `list`: show the blueprints on the controller
//! - `export`: save a blueprint's graph as a JSON snapshot
//! - `transform`: preview the creation spec for a snapshot, offline
//! - `import`: create a new blueprint from a snapshot
//!
//! ## Architecture
//!
//! - `BlueprintArgs`: top-level arguments for the command group.
//! - `BlueprintCommand`: enum of all blueprint subcommands.
//! - `handle_blueprint`: routes to the subcommand handler.
//!
//! ## Examples
//!
//! ```bash
//! bpmig blueprint list
//! bpmig blueprint export SITE-A
//! bpmig blueprint transform SITE-A.json --label SITE-B
//! bpmig blueprint import SITE-A.json --label SITE-B
//! ```
//!
use super::CommandContext;
use crate::core::error::Result;
use clap::{Parser, Subcommand};

mod export;
mod import;
mod list;
mod transform;

/// # Blueprint Command Group Arguments (`BlueprintArgs`)
#[derive(Parser, Debug)]
pub struct BlueprintArgs {
    #[command(subcommand)]
    command: BlueprintCommand,
}

/// # Blueprint Subcommands (`BlueprintCommand`)
#[derive(Subcommand, Debug)]
enum BlueprintCommand {
    /// List blueprints on the controller
    #[command(alias = "ls")]
    List(list::ListArgs),
    /// Save a blueprint's node/relationship graph as JSON
    Export(export::ExportArgs),
    /// Print the creation spec for a snapshot without contacting the controller
    Transform(transform::TransformArgs),
    /// Create a new blueprint from an exported snapshot
    Import(import::ImportArgs),
}

/// # Handle Blueprint Command (`handle_blueprint`)
///
/// Dispatches to the subcommand handler. `transform` is the only subcommand
/// that does not need a controller session.
pub async fn handle_blueprint(ctx: &CommandContext, args: BlueprintArgs) -> Result<()> {
    match args.command {
        BlueprintCommand::List(list_args) => list::handle_list(ctx, list_args).await?,
        BlueprintCommand::Export(export_args) => export::handle_export(ctx, export_args).await?,
        BlueprintCommand::Transform(transform_args) => {
            transform::handle_transform(transform_args).await?
        }
        BlueprintCommand::Import(import_args) => import::handle_import(ctx, import_args).await?,
    }
    Ok(())
}
