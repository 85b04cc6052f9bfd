//! # bpmig Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates all top-level command groups of the bpmig CLI and
//! the [`CommandContext`] they share.
//!
//! ## Command Groups
//!
//! - `blueprint`: list, export, transform and import blueprints
//! - `config`: pull switch configurations into a `.tgz` archive
//! - `connect`: check controller connectivity and version
//! - `setup`: write a sample configuration file
//!
//! ## Sessions
//!
//! There is no global controller session. Handlers that need the controller
//! call [`CommandContext::login`], use the returned session for the duration
//! of the command, and log out before returning.
//!
use crate::common::controller::connect::ControllerSession;
use crate::common::ui::progress::TracingProgress;
use crate::core::config::{load_config, Config, ConfigOverrides};
use crate::core::error::Result;
use anyhow::Context;
use std::path::PathBuf;

/// Command group for blueprint listing, export, transformation and import.
pub mod blueprint;
/// Command group for pulling switch configurations.
pub mod config;
/// `bpmig connect`: log in and print the controller version.
pub mod connect;
/// Command group for writing the sample configuration.
pub mod setup;

/// Settings every handler may need, collected from the global CLI flags.
#[derive(Debug, Default, Clone)]
pub struct CommandContext {
    /// Explicit `--config` file.
    pub config_path: Option<PathBuf>,
    /// `--host`/`--port`/`--username`/`--password`.
    pub overrides: ConfigOverrides,
    /// Suppresses progress lines on stderr.
    pub quiet: bool,
}

impl CommandContext {
    pub fn load_config(&self) -> Result<Config> {
        load_config(self.config_path.as_deref(), &self.overrides)
            .context("Failed to load bpmig configuration")
    }

    pub fn progress(&self) -> TracingProgress {
        TracingProgress { quiet: self.quiet }
    }

    /// Loads configuration and logs in to the configured controller.
    pub async fn login(&self) -> Result<(Config, ControllerSession)> {
        let cfg = self.load_config()?;
        let session = ControllerSession::login(&cfg.controller)
            .await
            .with_context(|| format!("Failed to log in to controller {}", cfg.controller.host))?;
        Ok((cfg, session))
    }
}
