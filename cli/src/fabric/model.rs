//! # Fabric Data Model (`fabric::model`)
//!
//! File: cli/src/fabric/model.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Types shared by the extraction and migration pipelines:
//!
//! - [`SwitchConfigBundle`]: the text artifacts collected for one switch.
//! - [`BlueprintSnapshot`], [`Node`], [`Relationship`]: a blueprint graph as
//!   dumped by the controller.
//! - [`BlueprintCreationSpec`]: the request body that creates a new blueprint.
//!
//! ## Passthrough fields
//!
//! The controller's node and relationship objects carry many fields bpmig
//! never looks at. Each graph type names the fields the transformer needs and
//! collects everything else into a flattened `extra` map, so a snapshot that
//! goes through parse, transform and serialize keeps every field the
//! controller sent.
//!
//! A known field that is missing from the JSON stays missing on output, while
//! a field that is present as `null` stays present, and values of any JSON
//! type are kept as they are. The transformer relies on that distinction
//! (see [`present`]).
//!
use crate::core::error::{BpmigError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Configuration text collected for one switch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwitchConfigBundle {
    pub label: String,
    /// Hardware serial; `None` for switches with no device assigned.
    pub system_id: Option<String>,
    pub pristine: Option<String>,
    pub rendered: String,
    pub intended: String,
    pub configlet: Option<String>,
    pub configlet_set: Option<String>,
}

impl SwitchConfigBundle {
    /// Every artifact paired with its archive file name, in a fixed order.
    /// Artifacts that were never produced are skipped.
    pub fn artifacts(&self) -> Vec<(&'static str, &str)> {
        let mut out = Vec::with_capacity(5);
        if let Some(pristine) = &self.pristine {
            out.push(("pristine.txt", pristine.as_str()));
        }
        out.push(("rendered.txt", self.rendered.as_str()));
        out.push(("intended.txt", self.intended.as_str()));
        if let Some(configlet) = &self.configlet {
            out.push(("configlet.txt", configlet.as_str()));
        }
        if let Some(configlet_set) = &self.configlet_set {
            out.push(("configlet-set.txt", configlet_set.as_str()));
        }
        out
    }
}

/// Deserializes a field that is *present* in the input, including `null`.
///
/// Used with `#[serde(default)]`: a missing key becomes `None`, a key holding
/// `null` becomes `Some(Value::Null)`.
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// One node of the blueprint graph.
///
/// Known fields hold raw JSON so that any value the controller sends,
/// including `null` or a non-string, survives untouched. Use [`text`] to read
/// them as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub node_type: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub system_type: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub role: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub label: Option<Value>,
    /// Hardware binding. `Some(Value::Null)` means "present but unassigned".
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub system_id: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub property_set: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The string held by a known field, if it is present and a string.
pub fn text(field: &Option<Value>) -> Option<&str> {
    field.as_ref().and_then(Value::as_str)
}

/// One relationship of the blueprint graph. Never rewritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A blueprint graph as dumped by the controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlueprintSnapshot {
    pub design: Value,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub label: Option<Value>,
    pub nodes: IndexMap<String, Node>,
    pub relationships: IndexMap<String, Relationship>,
    /// Every other top-level field of the dump (id, version, timestamps...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

const REQUIRED_FIELDS: [&str; 3] = ["design", "nodes", "relationships"];

impl BlueprintSnapshot {
    /// Validates and parses a dump.
    ///
    /// A missing or `null` `design`, `nodes` or `relationships` is a
    /// `BpmigError::Validation`; so is a dump whose nodes or relationships do
    /// not have the expected shape.
    pub fn from_value(value: Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            BpmigError::Validation("snapshot is not a JSON object".to_string())
        })?;
        for field in REQUIRED_FIELDS {
            match object.get(field) {
                None | Some(Value::Null) => {
                    return Err(BpmigError::Validation(format!(
                        "snapshot is missing required field '{}'",
                        field
                    ))
                    .into())
                }
                Some(_) => {}
            }
        }
        for field in ["nodes", "relationships"] {
            if !object[field].is_object() {
                return Err(BpmigError::Validation(format!(
                    "snapshot field '{}' must be a mapping of id to object",
                    field
                ))
                .into());
            }
        }
        serde_json::from_value(value).map_err(|e| BpmigError::Validation(e.to_string()).into())
    }

    /// Parses snapshot bytes (a previously exported `.json` file).
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| BpmigError::Validation(format!("snapshot is not valid JSON: {}", e)))?;
        Self::from_value(value)
    }

    /// Pretty-printed JSON suitable for writing to a file.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}

/// Request body for creating a blueprint from an explicit node/relationship list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlueprintCreationSpec {
    pub design: Value,
    pub label: String,
    pub init_type: String,
    pub nodes: Vec<Node>,
    pub relationships: Vec<Relationship>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_keeps_unknown_fields_and_null_vs_missing() {
        let raw = json!({
            "id": "n1",
            "type": "system",
            "system_type": "switch",
            "role": "leaf",
            "system_id": null,
            "deploy_mode": "deploy",
            "position_data": {"x": 1}
        });
        let node: Node = serde_json::from_value(raw).unwrap();
        assert_eq!(node.system_id, Some(Value::Null));
        assert_eq!(node.tags, None);
        assert_eq!(node.extra["deploy_mode"], "deploy");

        let back = serde_json::to_value(&node).unwrap();
        assert_eq!(back["system_id"], Value::Null);
        assert!(back.get("tags").is_none());
        assert_eq!(back["position_data"]["x"], 1);
        assert_eq!(back["type"], "system");
    }

    #[test]
    fn test_snapshot_requires_top_level_fields() {
        let err = BlueprintSnapshot::from_value(json!({"nodes": {}, "relationships": {}}))
            .unwrap_err();
        assert!(err.to_string().contains("'design'"));
        assert!(matches!(
            err.downcast_ref::<BpmigError>(),
            Some(BpmigError::Validation(_))
        ));

        let err = BlueprintSnapshot::from_value(json!({"design": "x", "nodes": {}}))
            .unwrap_err();
        assert!(err.to_string().contains("'relationships'"));

        let err = BlueprintSnapshot::from_value(json!({"design": "x", "nodes": [], "relationships": {}}))
            .unwrap_err();
        assert!(err.to_string().contains("mapping"));
    }

    #[test]
    fn test_snapshot_preserves_order_and_extra() {
        let bytes = br#"{
            "id": "bp-1",
            "version": 42,
            "design": "two_stage_l3clos",
            "label": "SITE-A",
            "nodes": {"z": {"id": "z", "type": "metadata"}, "a": {"id": "a", "type": "tag"}},
            "relationships": {"r2": {"id": "r2"}, "r1": {"id": "r1"}}
        }"#;
        let snapshot = BlueprintSnapshot::from_slice(bytes).unwrap();
        let node_ids: Vec<_> = snapshot.nodes.keys().cloned().collect();
        assert_eq!(node_ids, vec!["z", "a"]);
        assert_eq!(snapshot.extra["version"], 42);

        let reparsed = BlueprintSnapshot::from_slice(&snapshot.to_bytes().unwrap()).unwrap();
        assert_eq!(reparsed, snapshot);
    }

    #[test]
    fn test_null_known_fields_round_trip() {
        let dump = json!({
            "design": "two_stage_l3clos",
            "label": null,
            "nodes": {
                "if1": {"id": "if1", "type": "interface", "label": null, "role": null, "if_name": "et-0/0/1"},
                "g1": {"id": "g1", "type": "system", "system_type": null, "role": "generic", "label": "srv"}
            },
            "relationships": {"r1": {"id": null, "source_id": "g1", "target_id": "if1"}}
        });
        let snapshot = BlueprintSnapshot::from_value(dump.clone()).unwrap();
        assert_eq!(snapshot.label, Some(Value::Null));
        assert_eq!(snapshot.nodes["if1"].label, Some(Value::Null));
        assert_eq!(snapshot.nodes["g1"].system_type, Some(Value::Null));
        assert_eq!(snapshot.relationships["r1"].id, Some(Value::Null));

        let back = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(back, dump);
    }

    #[test]
    fn test_non_string_known_fields_are_kept() {
        let dump = json!({
            "design": "d",
            "nodes": {"n": {"id": 12, "type": "tag", "label": 7, "role": ["a"]}},
            "relationships": {}
        });
        let snapshot = BlueprintSnapshot::from_value(dump.clone()).unwrap();
        let node = &snapshot.nodes["n"];
        assert_eq!(node.label, Some(json!(7)));
        assert_eq!(text(&node.label), None);
        assert_eq!(text(&node.node_type), Some("tag"));
        assert_eq!(serde_json::to_value(&snapshot).unwrap(), dump);
    }

    #[test]
    fn test_bundle_artifacts_skip_absent_sections() {
        let bundle = SwitchConfigBundle {
            label: "leaf1".into(),
            rendered: "full".into(),
            intended: "full".into(),
            ..Default::default()
        };
        let names: Vec<_> = bundle.artifacts().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["rendered.txt", "intended.txt"]);
    }
}
