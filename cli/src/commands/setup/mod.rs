//! # bpmig Setup Command Group
//!
//! File: cli/src/commands/setup/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Routes the `bpmig setup` subcommands, which prepare the host for bpmig.
//! Currently that is writing the sample configuration file.
//!
//! ## Architecture
//!
//! - `SetupArgs`: top-level arguments for the command group
//! - `SetupCommand`: enum of setup subcommands
//! - `handle_setup`: routes to the subcommand handler
//!
//! ```bash
//! bpmig setup config
//! ```
//!
use crate::core::error::Result;
use clap::{Parser, Subcommand};

mod config;

/// Top-level arguments for the 'setup' command group.
#[derive(Parser, Debug)]
pub struct SetupArgs {
    #[command(subcommand)]
    command: SetupCommand,
}

/// Enum defining all subcommands under 'bpmig setup'.
#[derive(Subcommand, Debug)]
enum SetupCommand {
    /// Write a sample configuration file
    Config(config::ConfigArgs),
}

/// Main handler function for the 'setup' command group.
pub async fn handle_setup(args: SetupArgs) -> Result<()> {
    match args.command {
        SetupCommand::Config(args) => config::handle_config(args).await?,
    }
    Ok(())
}
