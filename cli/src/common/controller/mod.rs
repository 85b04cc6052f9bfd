//! # bpmig Fabric Controller Interface (`common::controller`)
//!
//! File: cli/src/common/controller/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Everything bpmig needs from the fabric controller goes through the
//! [`Controller`] trait: a generic item fetch, a blueprint-scoped graph query,
//! and item creation. The pipelines in `crate::fabric` only ever see
//! `&dyn Controller`, which keeps them independent of HTTP and lets tests run
//! them against an in-memory fake.
//!
//! ## Architecture
//!
//! - **`connect`**: [`connect::ControllerSession`], the `reqwest` implementation.
//!   It is created by logging in and closed by the caller; there is no global
//!   session.
//! - **`blueprints`**: label to id resolution and blueprint listing, written
//!   against the trait.
//! - **`fake`** (tests only): an in-memory `Controller`.
//!
use crate::core::error::Result;
use async_trait::async_trait;
use serde_json::Value;

pub mod blueprints;
pub mod connect;
#[cfg(test)]
pub mod fake;

/// Raw outcome of a `create_item` call.
///
/// Non-success statuses are returned here rather than raised, so the caller
/// can show the controller's own message verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateResponse {
    pub status: u16,
    pub content: String,
}

impl CreateResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The operations bpmig consumes from the fabric controller.
///
/// Paths are relative to the controller API root, e.g.
/// `blueprints/<id>/nodes/<node>/config-rendering`.
#[async_trait]
pub trait Controller: Send + Sync {
    /// Reads one item as JSON.
    async fn fetch_item(&self, path: &str) -> Result<Value>;

    /// Runs a graph query against one blueprint and returns the result records
    /// in the order the controller produced them.
    async fn query(&self, blueprint_id: &str, query: &str) -> Result<Vec<Value>>;

    /// Creates an item in `collection` from `spec`.
    async fn create_item(&self, collection: &str, spec: &Value) -> Result<CreateResponse>;
}
