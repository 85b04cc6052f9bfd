//! # bpmig Connect Command
//!
//! File: cli/src/commands/connect.rs
//! Author: Christi Mahu
//!
//! Implements `bpmig connect`: logs in with the configured credentials,
//! prints the controller address and software version, and logs out. Useful
//! for checking a configuration before running a pull or an import.
//!
//! ```bash
//! bpmig connect
//! bpmig --host 10.0.0.5 --username admin connect
//! ```
//!
use super::CommandContext;
use crate::core::error::Result;
use clap::Parser;
use tracing::info;

/// Arguments for `bpmig connect` (none beyond the global flags).
#[derive(Parser, Debug)]
pub struct ConnectArgs {}

pub async fn handle_connect(ctx: &CommandContext, _args: ConnectArgs) -> Result<()> {
    let (cfg, session) = ctx.login().await?;
    let version = session.version().await;
    session.logout().await;
    let version = version?;

    info!("Controller {} runs version {}", cfg.controller.host, version);
    println!(
        "Connected to {}:{} (version {})",
        cfg.controller.host, cfg.controller.port, version
    );
    Ok(())
}
