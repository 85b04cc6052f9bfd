//! # Switch Config Collector (`fabric::collector`)
//!
//! File: cli/src/fabric/collector.rs
//! Author: Christi Mahu
//!
//! Fetches the pristine and rendered configuration for one switch and splits
//! the rendered text into its sections.
//!
//! Pristine configuration belongs to the physical device, so it is only
//! requested when the switch has a hardware serial. A switch without one is
//! not an error; it simply has no `pristine.txt`.
//!
use super::model::SwitchConfigBundle;
use super::splitter::split_rendered;
use crate::common::controller::Controller;
use crate::core::error::{BpmigError, Result};
use serde_json::Value;
use tracing::debug;

/// Identity of one switch node inside a blueprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchRef {
    pub label: String,
    /// Graph node id.
    pub node_id: String,
    /// Hardware serial, if a device is assigned.
    pub system_id: Option<String>,
}

/// Collects every configuration artifact for `switch`.
pub async fn collect_switch(
    controller: &dyn Controller,
    blueprint_id: &str,
    switch: &SwitchRef,
) -> Result<SwitchConfigBundle> {
    let pristine = match &switch.system_id {
        Some(serial) => {
            let path = format!("systems/{}/pristine-config", serial);
            let body = controller.fetch_item(&path).await?;
            let content = body
                .pointer("/pristine_data/0/content")
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    BpmigError::controller(
                        "fetch pristine config",
                        &switch.label,
                        "response has no pristine_data[0].content",
                    )
                })?;
            Some(content.to_string())
        }
        None => {
            debug!("{} has no hardware serial, skipping pristine config", switch.label);
            None
        }
    };

    let path = format!(
        "blueprints/{}/nodes/{}/config-rendering",
        blueprint_id, switch.node_id
    );
    let body = controller.fetch_item(&path).await?;
    let rendered = body
        .get("config")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            BpmigError::controller(
                "fetch rendered config",
                &switch.label,
                "response has no 'config'",
            )
        })?;

    let sections = split_rendered(rendered);
    Ok(SwitchConfigBundle {
        label: switch.label.clone(),
        system_id: switch.system_id.clone(),
        pristine,
        rendered: rendered.to_string(),
        intended: sections.intended.to_string(),
        configlet: sections.configlet.map(str::to_string),
        configlet_set: sections.configlet_set.map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::controller::fake::FakeController;
    use crate::fabric::splitter::CONFIGLETS_MARKER;
    use serde_json::json;

    fn leaf(serial: Option<&str>) -> SwitchRef {
        SwitchRef {
            label: "leaf1".into(),
            node_id: "n-leaf1".into(),
            system_id: serial.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_collect_with_serial() {
        let rendered = format!("base\n{}\nsnmp\n", CONFIGLETS_MARKER);
        let fake = FakeController::default()
            .with_item(
                "systems/SN1/pristine-config",
                json!({"pristine_data": [{"content": "factory"}]}),
            )
            .with_item(
                "blueprints/bp-1/nodes/n-leaf1/config-rendering",
                json!({"config": rendered}),
            );

        let bundle = collect_switch(&fake, "bp-1", &leaf(Some("SN1"))).await.unwrap();
        assert_eq!(bundle.pristine.as_deref(), Some("factory"));
        assert_eq!(bundle.rendered, rendered);
        assert_eq!(bundle.intended, "base\n");
        assert_eq!(bundle.configlet.as_deref(), Some("\nsnmp\n"));
        assert_eq!(bundle.configlet_set, None);
        assert_eq!(bundle.system_id.as_deref(), Some("SN1"));
    }

    #[tokio::test]
    async fn test_collect_without_serial_skips_pristine() {
        // No pristine item registered: fetching it would fail.
        let fake = FakeController::default().with_item(
            "blueprints/bp-1/nodes/n-leaf1/config-rendering",
            json!({"config": "only intended"}),
        );
        let bundle = collect_switch(&fake, "bp-1", &leaf(None)).await.unwrap();
        assert_eq!(bundle.pristine, None);
        assert_eq!(bundle.intended, "only intended");
    }

    #[tokio::test]
    async fn test_collect_malformed_rendering() {
        let fake = FakeController::default().with_item(
            "blueprints/bp-1/nodes/n-leaf1/config-rendering",
            json!({"unexpected": true}),
        );
        let err = collect_switch(&fake, "bp-1", &leaf(None)).await.unwrap_err();
        assert!(err.to_string().contains("leaf1"));
    }
}
