//! # bpmig Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared utilities used by the pipelines (`fabric::`) and the command
//! handlers (`commands::`):
//!
//! - **`archive`**: gzipped TAR creation.
//! - **`controller`**: the `Controller` trait and its HTTP session.
//! - **`fs`**: directory creation, file reads/writes, label sanitizing.
//! - **`ui`**: progress reporting.
//!
//! ```rust
//! use crate::common::{archive, controller, fs, ui};
//! ```
//!

/// Utilities for handling archive files (tarballs).
pub mod archive;
/// The fabric controller interface and its `reqwest` implementation.
pub mod controller;
/// Utilities for filesystem operations.
pub mod fs;
/// Terminal user interface helpers (progress reporting).
pub mod ui;
