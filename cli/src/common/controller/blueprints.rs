//! # Blueprint Lookup (`common::controller::blueprints`)
//!
//! File: cli/src/common/controller/blueprints.rs
//! Author: Christi Mahu
//!
//! Operators name blueprints by label; the controller API addresses them by
//! id. These helpers bridge the two using the `blueprints` collection.
//!
use super::Controller;
use crate::core::error::{BpmigError, Result};
use serde::Deserialize;
use tracing::debug;

/// The parts of a blueprint summary bpmig uses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BlueprintRef {
    pub id: String,
    pub label: String,
}

#[derive(Deserialize)]
struct BlueprintList {
    #[serde(default)]
    items: Vec<BlueprintRef>,
}

/// Lists every blueprint on the controller, in the order it returns them.
pub async fn list_blueprints(controller: &dyn Controller) -> Result<Vec<BlueprintRef>> {
    let raw = controller.fetch_item("blueprints").await?;
    let list: BlueprintList = serde_json::from_value(raw)
        .map_err(|e| BpmigError::controller("list blueprints", "blueprints", e))?;
    debug!("Controller returned {} blueprints", list.items.len());
    Ok(list.items)
}

/// Finds the blueprint whose label is exactly `label`.
pub async fn resolve_blueprint(controller: &dyn Controller, label: &str) -> Result<BlueprintRef> {
    list_blueprints(controller)
        .await?
        .into_iter()
        .find(|bp| bp.label == label)
        .ok_or_else(|| {
            BpmigError::controller("resolve blueprint", label, "no blueprint with this label")
                .into()
        })
}
