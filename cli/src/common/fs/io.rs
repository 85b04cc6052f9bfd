//! # bpmig Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` used by the pipelines and command handlers:
//!
//! - **`ensure_dir_exists`**: creates a directory (and parents) if missing, and
//!   fails if the path exists but is not a directory.
//! - **`write_bytes_to_file`**: writes a byte buffer, creating the parent
//!   directory first. Used for `.tgz` archives and snapshot/spec JSON.
//! - **`read_file_to_bytes`**: reads a whole file with context on failure.
//! - **`safe_path_component`**: turns a controller label (blueprint or switch
//!   name) into a single, directory-safe path component.
//!
use crate::core::error::{BpmigError, Result};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// Creates the directory and any missing parents (like `mkdir -p`). Returns
/// `BpmigError::FileSystem` if the path exists but is not a directory.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(BpmigError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Reads an entire file into memory.
pub fn read_file_to_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes `content` to `path`, overwriting any existing file.
///
/// The parent directory is created first if needed.
pub fn write_bytes_to_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir_exists(parent)?;
        }
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    debug!("Wrote {} bytes to file: {:?}", content.len(), path);
    Ok(())
}

/// Converts a label into a single directory-safe path component.
///
/// Path separators, NUL and the characters Windows reserves are replaced with
/// `_`. Labels that would still resolve to the current or parent directory
/// (empty, `.`, `..`) are rejected.
pub fn safe_path_component(label: &str) -> Result<String> {
    let cleaned: String = label
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    if cleaned.is_empty() || cleaned == "." || cleaned == ".." {
        anyhow::bail!(BpmigError::FileSystem(format!(
            "Label '{}' cannot be used as a directory name",
            label
        )));
    }
    Ok(cleaned)
}
