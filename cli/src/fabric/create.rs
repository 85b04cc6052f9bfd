//! # Blueprint Creation Pipeline (`fabric::create`)
//!
//! File: cli/src/fabric/create.rs
//! Author: Christi Mahu
//!
//! Parses an exported snapshot, transforms it for the new label and submits
//! the result to the controller's `blueprints` collection.
//!
//! Nothing is sent unless the snapshot validates. The controller's answer is
//! returned as-is, including rejections; bpmig does not retry or try to repair
//! a spec the controller refuses.
//!
use super::model::BlueprintSnapshot;
use super::transform::transform_snapshot;
use crate::common::controller::{Controller, CreateResponse};
use crate::common::ui::progress::ProgressSink;
use crate::core::error::Result;
use anyhow::Context;
use tracing::info;

const STAGE: &str = "import_blueprint";

/// Collection new blueprints are created in.
pub const BLUEPRINTS_COLLECTION: &str = "blueprints";

/// Creates blueprint `new_label` from `snapshot_bytes`.
pub async fn import_blueprint(
    controller: &dyn Controller,
    snapshot_bytes: &[u8],
    new_label: &str,
    progress: &dyn ProgressSink,
) -> Result<CreateResponse> {
    progress.begin(STAGE, new_label);
    let result = async {
        let snapshot = BlueprintSnapshot::from_slice(snapshot_bytes)?;
        let spec = transform_snapshot(&snapshot, new_label);
        info!(
            "Submitting blueprint '{}' ({} nodes, {} relationships)",
            new_label,
            spec.nodes.len(),
            spec.relationships.len()
        );
        let body = serde_json::to_value(&spec).context("Failed to serialize creation spec")?;
        controller.create_item(BLUEPRINTS_COLLECTION, &body).await
    }
    .await;

    match &result {
        Ok(response) => progress.end(STAGE, &format!("{} (HTTP {})", new_label, response.status)),
        Err(e) => progress.failed(STAGE, new_label, e),
    }
    result
}
