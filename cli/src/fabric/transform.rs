//! # Blueprint Graph Transformer (`fabric::transform`)
//!
//! File: cli/src/fabric/transform.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Turns an exported [`BlueprintSnapshot`] into a [`BlueprintCreationSpec`]
//! that creates a *new* blueprint with the same graph. The snapshot is not
//! modified; every node is copied and the copy is rewritten.
//!
//! ## Node rules
//!
//! 1. Switch systems (`type = system`, `system_type = switch`) lose their
//!    `system_id`: the hardware they were bound to belongs to the source fabric,
//!    and an operator assigns devices in the target fabric. Systems with the
//!    `external_router` role are logical and keep their binding.
//! 2. Metadata nodes take the new blueprint label. Every metadata node is
//!    renamed; a graph without exactly one logs a warning.
//! 3. `tags` that are `null` or the `"['null']"` placeholder become `[]`.
//! 4. A `null` `property_set` becomes `{}`.
//!
//! Fields the rules do not mention, and every relationship, pass through
//! unchanged. Node and relationship order follows the snapshot.
//!
use super::model::{text, BlueprintCreationSpec, BlueprintSnapshot, Node};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// `init_type` telling the controller to build the blueprint from the given graph.
pub const INIT_TYPE_EXPLICIT: &str = "explicit";
/// Placeholder some controller versions emit for an empty tag list.
pub const EMPTY_TAGS_PLACEHOLDER: &str = "['null']";
const EXTERNAL_ROUTER_ROLE: &str = "external_router";

fn is_hardware_bound_switch(node: &Node) -> bool {
    text(&node.node_type) == Some("system")
        && text(&node.system_type) == Some("switch")
        && text(&node.role) != Some(EXTERNAL_ROUTER_ROLE)
}

fn is_metadata(node: &Node) -> bool {
    text(&node.node_type) == Some("metadata")
}

/// Applies the node rules to one node.
pub fn transform_node(mut node: Node, new_label: &str) -> Node {
    if is_hardware_bound_switch(&node) {
        node.system_id = Some(Value::Null);
    }
    if is_metadata(&node) {
        node.label = Some(Value::String(new_label.to_string()));
    }
    let empty_tags = match &node.tags {
        Some(Value::Null) => true,
        Some(Value::String(s)) => s == EMPTY_TAGS_PLACEHOLDER,
        _ => false,
    };
    if empty_tags {
        node.tags = Some(Value::Array(Vec::new()));
    }
    if node.property_set == Some(Value::Null) {
        node.property_set = Some(Value::Object(Map::new()));
    }
    node
}

/// Builds the creation spec for a blueprint labelled `new_label`.
pub fn transform_snapshot(snapshot: &BlueprintSnapshot, new_label: &str) -> BlueprintCreationSpec {
    let metadata_count = snapshot.nodes.values().filter(|n| is_metadata(n)).count();
    if metadata_count != 1 {
        warn!(
            "Snapshot has {} metadata nodes (expected 1); renaming all of them to '{}'",
            metadata_count, new_label
        );
    }

    let nodes: Vec<Node> = snapshot
        .nodes
        .values()
        .cloned()
        .map(|node| transform_node(node, new_label))
        .collect();
    let relationships = snapshot.relationships.values().cloned().collect();
    debug!(
        "Transformed {} nodes for new blueprint '{}'",
        nodes.len(),
        new_label
    );

    BlueprintCreationSpec {
        design: snapshot.design.clone(),
        label: new_label.to_string(),
        init_type: INIT_TYPE_EXPLICIT.to_string(),
        nodes,
        relationships,
    }
}
