//! # bpmig Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout bpmig. Errors fall
//! into three groups:
//!
//! - **Collaborator errors** (`Controller`, `ControllerHttp`, `Rejected`): a call to
//!   the fabric controller failed or returned data that could not be used.
//!   These always name the operation and the target (switch, blueprint, path).
//! - **Validation errors** (`Validation`): a blueprint snapshot is missing a
//!   required top-level field. These are fatal and never repaired.
//! - **Local errors** (`Config`, `FileSystem`, `Archive`): configuration,
//!   scratch directory, or archive assembly problems.
//!
//! Missing optional data (no hardware serial, no configlet sections) is *not*
//! an error anywhere in bpmig; it is handled by leaving the artifact out.
//!
//! ## Architecture
//!
//! - `BpmigError`: a `thiserror` enum with one variant per failure kind.
//! - `Result<T>`: an alias for `anyhow::Result<T>` so call sites can attach
//!   context with `anyhow::Context` while still allowing callers to
//!   `downcast_ref::<BpmigError>()` when they need the kind.
//!
//! ## Examples
//!
//! ```rust
//! if !snapshot.contains_key("design") {
//!     return Err(BpmigError::Validation("snapshot is missing 'design'".into()).into());
//! }
//!
//! let body = fs::read(&path)
//!     .with_context(|| format!("Failed to read snapshot file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the bpmig application.
#[derive(Error, Debug)]
pub enum BpmigError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Controller error during {operation} ({target}): {message}")]
    Controller {
        operation: String,
        target: String,
        message: String,
    },

    #[error("Controller HTTP request failed: {source}")]
    ControllerHttp {
        #[from]
        source: reqwest::Error,
    },

    #[error("Controller rejected the request with status {status}:\n{body}")]
    Rejected { status: u16, body: String },

    #[error("Invalid blueprint snapshot: {0}")]
    Validation(String),

    #[error("Archive error: {0}")]
    Archive(String),
}

impl BpmigError {
    /// Shorthand for building a `Controller` error from anything displayable.
    pub fn controller(
        operation: impl Into<String>,
        target: impl Into<String>,
        message: impl ToString,
    ) -> Self {
        BpmigError::Controller {
            operation: operation.into(),
            target: target.into(),
            message: message.to_string(),
        }
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
