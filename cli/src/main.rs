//! # bpmig Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Main entry point for the bpmig CLI, a tool for migrating data center
//! fabric blueprints between controllers and for archiving switch
//! configurations. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers
//!
//! ## Architecture
//!
//! - Each top-level command group (`blueprint`, `config`, ...) is a variant of
//!   the `Commands` enum, handled in `commands::<group>`.
//! - Connection flags (`--host`, `--port`, `--username`, `--password`) and
//!   `--config` are global and collected into a `CommandContext`.
//! - All errors propagate to this level and are printed once.
//!
//! ## Examples
//!
//! ```bash
//! bpmig --help
//! bpmig -v connect
//! bpmig --host 10.85.192.45 config pull SITE-A
//! ```
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod common;
mod core;
mod fabric;

use crate::commands::CommandContext;
use crate::core::config::ConfigOverrides;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "bpmig",
    about = "Fabric blueprint migration and switch configuration backup",
    long_about = "Export, transform and re-create fabric blueprints, and archive the\n\
                  configuration of every switch in a blueprint.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Hide progress lines on stderr.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Read configuration from this file only.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Controller address.
    #[arg(long, global = true, env = "BPMIG_HOST")]
    host: Option<String>,

    /// Controller HTTPS port.
    #[arg(long, global = true, env = "BPMIG_PORT")]
    port: Option<u16>,

    /// Controller user.
    #[arg(long, global = true, env = "BPMIG_USERNAME")]
    username: Option<String>,

    /// Controller password.
    #[arg(long, global = true, env = "BPMIG_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Log in and print the controller version
    Connect(commands::connect::ConnectArgs),
    #[command(alias = "b")]
    Blueprint(commands::blueprint::BlueprintArgs),
    #[command(alias = "c")]
    Config(commands::config::ConfigArgs),
    #[command(alias = "s")]
    Setup(commands::setup::SetupArgs),
}

impl Cli {
    fn context(&self) -> CommandContext {
        CommandContext {
            config_path: self.config.clone(),
            overrides: ConfigOverrides {
                host: self.host.clone(),
                port: self.port,
                username: self.username.clone(),
                password: self.password.clone(),
            },
            quiet: self.quiet,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed command: {:?}", cli.command);

    let ctx = cli.context();
    let command_result = match cli.command {
        Commands::Connect(args) => commands::connect::handle_connect(&ctx, args).await,
        Commands::Blueprint(args) => commands::blueprint::handle_blueprint(&ctx, args).await,
        Commands::Config(args) => commands::config::handle_config(&ctx, args).await,
        Commands::Setup(args) => commands::setup::handle_setup(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
