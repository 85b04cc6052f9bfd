//! # bpmig TAR Archive Operations (`common::archive::tar`)
//!
//! File: cli/src/common/archive/tar.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module creates gzipped TAR archives (`.tgz`) in memory. bpmig uses it
//! to package the per-blueprint configuration tree built by
//! `fabric::archive` into a single downloadable file.
//!
//! ## Architecture
//!
//! The module leverages the `tar` crate for building the archive structure and
//! the `flate2` crate for Gzip compression.
//!
//! - It reads the contents of a specified directory recursively.
//! - Every entry is stored under a caller-chosen root directory name inside the
//!   archive, so extracting `SITE-A.tgz` yields a single `SITE-A/` directory.
//! - The entire archive is compressed using Gzip and returned as a byte vector.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::tar;
//! use std::path::Path;
//!
//! let tgz: Vec<u8> = tar::create_tree_tar(Path::new("/tmp/x/SITE-A"), "SITE-A")?;
//! ```
//!
use crate::core::error::Result;
use anyhow::Context;
use std::path::Path;

/// # Create Gzipped TAR of a Directory Tree (`create_tree_tar`)
///
/// Archives the contents of `source_dir` recursively, storing every entry
/// below `archive_root/` inside the archive, and returns the gzip-compressed
/// bytes. The archive also contains an entry for `archive_root` itself.
///
/// ## Errors
///
/// Returns an `Err` if:
/// - `source_dir` cannot be read or any entry below it cannot be added.
/// - Finishing the TAR structure or the Gzip stream fails.
pub fn create_tree_tar(source_dir: &Path, archive_root: &str) -> Result<Vec<u8>> {
    let mut tar_gz_bytes = Vec::new();
    let enc = flate2::write::GzEncoder::new(&mut tar_gz_bytes, flate2::Compression::default());
    let mut tar_builder = tar::Builder::new(enc);

    tar_builder
        .append_dir_all(archive_root, source_dir)
        .with_context(|| {
            format!(
                "Failed to add directory '{}' contents to the tar archive",
                source_dir.display()
            )
        })?;

    // Writes the closing records and hands back the encoder.
    let encoder = tar_builder
        .into_inner()
        .context("Failed to finalize tar archive structure")?;

    encoder
        .finish()
        .context("Failed to finish gzip compression stream")?;

    Ok(tar_gz_bytes)
}
