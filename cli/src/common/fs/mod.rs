//! # bpmig Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Filesystem helpers shared by the pipelines and the command handlers.
//!
//! - **`io`**: directory creation, whole-file reads and writes, and label to
//!   path-component sanitizing.
//!
//! Import from the submodule directly, e.g. `crate::common::fs::io::write_bytes_to_file`.
//!

/// Basic file I/O operations (e.g., `ensure_dir_exists`, `write_bytes_to_file`).
pub mod io;
