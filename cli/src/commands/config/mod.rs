//! # bpmig Config Command Group
//!
//! File: cli/src/commands/config/mod.rs
//! Author: Christi Mahu
//!
//! Routes `bpmig config` subcommands, which work with the device
//! configuration of a blueprint's switches. Not to be confused with
//! `bpmig setup config`, which writes bpmig's own configuration file.
//!
//! ```bash
//! bpmig config pull SITE-A
//! ```
//!
use super::CommandContext;
use crate::core::error::Result;
use clap::{Parser, Subcommand};

mod pull;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Archive every switch configuration of a blueprint as <LABEL>.tgz
    Pull(pull::PullArgs),
}

pub async fn handle_config(ctx: &CommandContext, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommand::Pull(pull_args) => pull::handle_pull(ctx, pull_args).await?,
    }
    Ok(())
}
