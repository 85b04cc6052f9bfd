//! # Blueprint Graph Exporter (`fabric::export`)
//!
//! File: cli/src/fabric/export.rs
//! Author: Christi Mahu
//!
//! Captures a blueprint's full node/relationship graph as a
//! [`BlueprintSnapshot`]. The dump is validated for the fields the transformer
//! needs and otherwise kept as the controller returned it; node semantics are
//! left to `fabric::transform`.
//!
use super::model::BlueprintSnapshot;
use crate::common::controller::blueprints::resolve_blueprint;
use crate::common::controller::Controller;
use crate::common::ui::progress::ProgressSink;
use crate::core::error::Result;
use anyhow::Context;
use tracing::info;

const STAGE: &str = "export_blueprint";

/// File name used when saving the snapshot of `blueprint_label`.
pub fn snapshot_file_name(blueprint_label: &str) -> String {
    format!("{}.json", blueprint_label)
}

/// Fetches and validates the graph of `blueprint_label`.
pub async fn export_blueprint(
    controller: &dyn Controller,
    blueprint_label: &str,
    progress: &dyn ProgressSink,
) -> Result<BlueprintSnapshot> {
    progress.begin(STAGE, blueprint_label);
    let result = async {
        let blueprint = resolve_blueprint(controller, blueprint_label).await?;
        let dump = controller
            .fetch_item(&format!("blueprints/{}", blueprint.id))
            .await?;
        BlueprintSnapshot::from_value(dump)
            .with_context(|| format!("Blueprint '{}' returned an unusable dump", blueprint_label))
    }
    .await;

    match &result {
        Ok(snapshot) => {
            info!(
                "Exported '{}': {} nodes, {} relationships",
                blueprint_label,
                snapshot.nodes.len(),
                snapshot.relationships.len()
            );
            progress.end(STAGE, blueprint_label);
        }
        Err(e) => progress.failed(STAGE, blueprint_label, e),
    }
    result
}
