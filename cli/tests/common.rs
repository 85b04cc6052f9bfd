//! # bpmig CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each other `.rs`
//! file there is compiled as its own test crate and pulls this module in with
//! `mod common;`.
//!

#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// # Get bpmig Command (`bpmig_cmd`)
///
/// An `assert_cmd::Command` for the compiled `bpmig` binary. `BPMIG_*`
/// variables from the developer's shell are removed so they cannot leak into
/// the command under test.
pub fn bpmig_cmd() -> Command {
    let mut cmd = Command::cargo_bin("bpmig").expect("Failed to find bpmig binary for testing");
    for var in ["BPMIG_HOST", "BPMIG_PORT", "BPMIG_USERNAME", "BPMIG_PASSWORD"] {
        cmd.env_remove(var);
    }
    cmd
}

/// Writes a minimal configuration pointing at `host:port` into `dir`.
pub fn write_config(dir: &Path, host: &str, port: u16) -> PathBuf {
    let path = dir.join("bpmig.toml");
    std::fs::write(
        &path,
        format!(
            "[controller]\nhost = \"{}\"\nport = {}\nusername = \"admin\"\npassword = \"admin\"\ntimeout_secs = 5\n",
            host, port
        ),
    )
    .expect("Failed to write test config");
    path
}

/// A small exported snapshot labelled SITE-A.
pub const SITE_A_SNAPSHOT: &str = r#"{
  "design": "two_stage_l3clos",
  "label": "SITE-A",
  "nodes": {
    "leaf1": {"id": "leaf1", "type": "system", "system_type": "switch", "role": "leaf",
              "label": "leaf1", "system_id": "SN-LEAF1", "tags": null, "property_set": null},
    "meta": {"id": "meta", "type": "metadata", "label": "SITE-A", "tags": "['null']"}
  },
  "relationships": {
    "r1": {"id": "r1", "type": "tag", "source_id": "meta", "target_id": "leaf1"}
  }
}"#;
