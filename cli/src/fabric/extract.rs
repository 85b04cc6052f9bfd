//! # Config Extraction Pipeline (`fabric::extract`)
//!
//! File: cli/src/fabric/extract.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Pulls the configuration of every switch in a blueprint and packs it into a
//! `<blueprint>.tgz` archive.
//!
//! ## Workflow
//!
//! 1. Resolve the blueprint label to its id.
//! 2. Query the graph for switch system nodes, keeping the controller's order.
//! 3. Collect each switch in turn. A switch whose fetch fails is reported and
//!    recorded in [`ConfigArchive::failed`]; the rest of the blueprint carries on.
//! 4. Build the archive on a blocking worker thread.
//!
use super::archive::build_config_archive;
use super::collector::{collect_switch, SwitchRef};
use crate::common::controller::blueprints::resolve_blueprint;
use crate::common::controller::Controller;
use crate::common::ui::progress::ProgressSink;
use crate::core::error::{BpmigError, Result};
use anyhow::Context;
use serde_json::Value;
use tracing::{info, warn};

const STAGE: &str = "pull_config";

/// Graph query selecting every switch system node, named `switch`.
pub const SWITCH_QUERY: &str = "node('system', system_type='switch', name='switch')";

/// A switch whose configuration could not be collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchFailure {
    pub label: String,
    pub error: String,
}

/// Result of one extraction run.
#[derive(Debug)]
pub struct ConfigArchive {
    /// `<blueprint-label>.tgz`
    pub name: String,
    pub bytes: Vec<u8>,
    pub failed: Vec<SwitchFailure>,
}

/// Reads the `switch` object of every query record.
fn switches_from_records(records: &[Value], blueprint_label: &str) -> Result<Vec<SwitchRef>> {
    records
        .iter()
        .map(|record| -> Result<SwitchRef> {
            let switch = record.get("switch").ok_or_else(|| {
                BpmigError::controller("query switches", blueprint_label, "record has no 'switch'")
            })?;
            let text = |field: &str| switch.get(field).and_then(Value::as_str).map(str::to_string);
            let label = text("label").ok_or_else(|| {
                BpmigError::controller("query switches", blueprint_label, "switch has no 'label'")
            })?;
            let node_id = text("id").ok_or_else(|| {
                BpmigError::controller("query switches", &label, "switch has no 'id'")
            })?;
            Ok(SwitchRef {
                label,
                node_id,
                system_id: text("system_id").filter(|serial| !serial.is_empty()),
            })
        })
        .collect()
}

/// Extracts every switch configuration of `blueprint_label` into an archive.
pub async fn extract_config(
    controller: &dyn Controller,
    blueprint_label: &str,
    progress: &dyn ProgressSink,
) -> Result<ConfigArchive> {
    progress.begin(STAGE, blueprint_label);
    let result = run(controller, blueprint_label, progress).await;
    match &result {
        Ok(archive) => progress.end(
            STAGE,
            &format!(
                "{} ({} bytes, {} switch failures)",
                archive.name,
                archive.bytes.len(),
                archive.failed.len()
            ),
        ),
        Err(e) => progress.failed(STAGE, blueprint_label, e),
    }
    result
}

async fn run(
    controller: &dyn Controller,
    blueprint_label: &str,
    progress: &dyn ProgressSink,
) -> Result<ConfigArchive> {
    let blueprint = resolve_blueprint(controller, blueprint_label).await?;
    let records = controller
        .query(&blueprint.id, SWITCH_QUERY)
        .await
        .with_context(|| format!("Failed to list switches of blueprint '{}'", blueprint_label))?;
    let switches = switches_from_records(&records, blueprint_label)?;
    info!("Blueprint '{}' has {} switches", blueprint_label, switches.len());

    let mut bundles = Vec::with_capacity(switches.len());
    let mut failed = Vec::new();
    for switch in &switches {
        progress.report(STAGE, &format!("switch {}", switch.label));
        match collect_switch(controller, &blueprint.id, switch).await {
            Ok(bundle) => bundles.push(bundle),
            Err(e) => {
                warn!("Skipping switch {}: {:#}", switch.label, e);
                progress.failed(STAGE, &switch.label, &e);
                failed.push(SwitchFailure {
                    label: switch.label.clone(),
                    error: format!("{:#}", e),
                });
            }
        }
    }

    progress.report(STAGE, &format!("archiving {} switches", bundles.len()));
    let label = blueprint_label.to_string();
    let bytes = tokio::task::spawn_blocking(move || build_config_archive(&label, &bundles))
        .await
        .context("Archive worker panicked")??;

    Ok(ConfigArchive {
        name: format!("{}.tgz", blueprint_label),
        bytes,
        failed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::controller::fake::FakeController;
    use crate::common::ui::progress::RecordingProgress;
    use flate2::read::GzDecoder;
    use serde_json::json;
    use std::collections::BTreeSet;
    use tar::Archive;

    fn fabric() -> FakeController {
        FakeController::default()
            .with_item(
                "blueprints",
                json!({"items": [{"id": "bp-1", "label": "SITE-A"}]}),
            )
            .with_query(
                "bp-1",
                vec![
                    json!({"switch": {"id": "n1", "label": "spine1", "system_id": "SN1"}}),
                    json!({"switch": {"id": "n2", "label": "leaf1", "system_id": null}}),
                    json!({"switch": {"id": "n3", "label": "leaf2", "system_id": "SN3"}}),
                ],
            )
            .with_item(
                "systems/SN1/pristine-config",
                json!({"pristine_data": [{"content": "factory spine1"}]}),
            )
            .with_item(
                "blueprints/bp-1/nodes/n1/config-rendering",
                json!({"config": "spine1 config"}),
            )
            .with_item(
                "blueprints/bp-1/nodes/n2/config-rendering",
                json!({"config": "leaf1 config"}),
            )
            .with_item(
                "systems/SN3/pristine-config",
                json!({"pristine_data": [{"content": "factory leaf2"}]}),
            )
            .with_item(
                "blueprints/bp-1/nodes/n3/config-rendering",
                json!({"config": "leaf2 config"}),
            )
    }

    fn entries(bytes: &[u8]) -> BTreeSet<String> {
        let mut archive = Archive::new(GzDecoder::new(bytes));
        archive
            .entries()
            .unwrap()
            .map(|e| {
                e.unwrap()
                    .path()
                    .unwrap()
                    .to_string_lossy()
                    .trim_end_matches('/')
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn test_switches_from_records() {
        let records = vec![
            json!({"switch": {"id": "n1", "label": "spine1", "system_id": "SN1"}}),
            json!({"switch": {"id": "n2", "label": "leaf1", "system_id": ""}}),
        ];
        let switches = switches_from_records(&records, "SITE-A").unwrap();
        assert_eq!(switches[0].system_id.as_deref(), Some("SN1"));
        assert_eq!(switches[1].system_id, None);

        let err = switches_from_records(&[json!({"other": {}})], "SITE-A").unwrap_err();
        assert!(err.to_string().contains("no 'switch'"));
    }

    #[tokio::test]
    async fn test_extract_all_switches() {
        let progress = RecordingProgress::default();
        let archive = extract_config(&fabric(), "SITE-A", &progress).await.unwrap();

        assert_eq!(archive.name, "SITE-A.tgz");
        assert!(archive.failed.is_empty());
        let paths = entries(&archive.bytes);
        assert!(paths.contains("SITE-A/spine1/pristine.txt"));
        assert!(paths.contains("SITE-A/leaf1/rendered.txt"));
        assert!(!paths.contains("SITE-A/leaf1/pristine.txt"));
        assert!(paths.contains("SITE-A/leaf2/intended.txt"));

        assert!(progress.saw(STAGE, "begin SITE-A"));
        assert!(progress.saw(STAGE, "switch leaf1"));
        assert!(progress.saw(STAGE, "end SITE-A.tgz"));
    }

    #[tokio::test]
    async fn test_one_switch_failure_does_not_abort() {
        let fake = fabric().failing("blueprints/bp-1/nodes/n2/config-rendering");
        let progress = RecordingProgress::default();
        let archive = extract_config(&fake, "SITE-A", &progress).await.unwrap();

        assert_eq!(archive.failed.len(), 1);
        assert_eq!(archive.failed[0].label, "leaf1");
        assert!(archive.failed[0].error.contains("config-rendering"));

        let paths = entries(&archive.bytes);
        assert!(paths.contains("SITE-A/spine1"));
        assert!(paths.contains("SITE-A/leaf2"));
        assert!(!paths.contains("SITE-A/leaf1"));
        assert!(progress.saw(STAGE, "failed leaf1"));
    }

    #[tokio::test]
    async fn test_unknown_blueprint_fails_whole_run() {
        let progress = RecordingProgress::default();
        let err = extract_config(&fabric(), "SITE-Z", &progress).await.unwrap_err();
        assert!(err.to_string().contains("SITE-Z"));
        assert!(progress.saw(STAGE, "failed SITE-Z"));
    }
}
