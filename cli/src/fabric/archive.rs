//! # Config Archive Builder (`fabric::archive`)
//!
//! File: cli/src/fabric/archive.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Lays out the collected switch configurations on disk and packs them into
//! one gzipped tar:
//!
//! ```text
//! <blueprint>/
//!   <switch>/
//!     pristine.txt        (only for switches with a hardware serial)
//!     rendered.txt
//!     intended.txt
//!     configlet.txt       (only if the config has configlets)
//!     configlet-set.txt   (only if it has set/delete configlets)
//! ```
//!
//! The tree is built inside a `tempfile::TempDir`, which is removed when the
//! function returns whether or not archiving succeeded. The returned bytes are
//! a complete in-memory copy.
//!
//! Artifacts of at most [`MIN_ARTIFACT_LEN`] bytes are not written; a
//! configlet section that is nothing but a line break is not worth a file.
//!
use super::model::SwitchConfigBundle;
use crate::common::archive::tar::create_tree_tar;
use crate::common::fs::io::{ensure_dir_exists, safe_path_component, write_bytes_to_file};
use crate::core::error::{BpmigError, Result};
use anyhow::Context;
use tracing::{debug, info};

/// Artifacts must be longer than this many bytes to be written.
pub const MIN_ARTIFACT_LEN: usize = 2;

/// Whether `content` carries enough to be worth its own file.
pub fn is_substantive(content: &str) -> bool {
    content.len() > MIN_ARTIFACT_LEN
}

/// Builds the `.tgz` bytes for `blueprint_label` from `bundles`.
pub fn build_config_archive(blueprint_label: &str, bundles: &[SwitchConfigBundle]) -> Result<Vec<u8>> {
    let top_name = safe_path_component(blueprint_label)?;
    let scratch = tempfile::Builder::new()
        .prefix("bpmig-")
        .tempdir()
        .map_err(|e| BpmigError::Archive(format!("cannot create scratch directory: {}", e)))?;
    let top_dir = scratch.path().join(&top_name);
    ensure_dir_exists(&top_dir)?;

    for bundle in bundles {
        let switch_dir = top_dir.join(safe_path_component(&bundle.label)?);
        ensure_dir_exists(&switch_dir)?;
        for (file_name, content) in bundle.artifacts() {
            if !is_substantive(content) {
                debug!("{}: skipping near-empty {}", bundle.label, file_name);
                continue;
            }
            write_bytes_to_file(&switch_dir.join(file_name), content.as_bytes())?;
            debug!("{}: wrote {}", bundle.label, file_name);
        }
    }

    let bytes = create_tree_tar(&top_dir, &top_name)
        .with_context(|| format!("Failed to archive configs for blueprint '{}'", blueprint_label))?;
    info!(
        "Archived {} switch directories for '{}' ({} bytes)",
        bundles.len(),
        blueprint_label,
        bytes.len()
    );
    Ok(bytes)
}
