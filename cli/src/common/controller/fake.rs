//! In-memory `Controller` for unit tests.
//!
//! Items are keyed by path, query results by blueprint id. Paths registered
//! with `failing` return a controller error, which lets tests exercise the
//! per-switch failure handling. Created specs are recorded for inspection.
use super::{Controller, CreateResponse};
use crate::core::error::{BpmigError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct FakeController {
    items: HashMap<String, Value>,
    queries: HashMap<String, Vec<Value>>,
    failing: HashSet<String>,
    create_status: Option<u16>,
    created: Mutex<Vec<(String, Value)>>,
}

impl FakeController {
    pub fn with_item(mut self, path: &str, value: Value) -> Self {
        self.items.insert(path.to_string(), value);
        self
    }

    pub fn with_query(mut self, blueprint_id: &str, records: Vec<Value>) -> Self {
        self.queries.insert(blueprint_id.to_string(), records);
        self
    }

    pub fn failing(mut self, path: &str) -> Self {
        self.failing.insert(path.to_string());
        self
    }

    pub fn with_create_status(mut self, status: u16) -> Self {
        self.create_status = Some(status);
        self
    }

    pub fn created(&self) -> Vec<(String, Value)> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl Controller for FakeController {
    async fn fetch_item(&self, path: &str) -> Result<Value> {
        if self.failing.contains(path) {
            return Err(BpmigError::controller("fetch", path, "HTTP 500 Internal Server Error").into());
        }
        self.items
            .get(path)
            .cloned()
            .ok_or_else(|| BpmigError::controller("fetch", path, "HTTP 404 Not Found").into())
    }

    async fn query(&self, blueprint_id: &str, _query: &str) -> Result<Vec<Value>> {
        Ok(self.queries.get(blueprint_id).cloned().unwrap_or_default())
    }

    async fn create_item(&self, collection: &str, spec: &Value) -> Result<CreateResponse> {
        self.created
            .lock()
            .unwrap()
            .push((collection.to_string(), spec.clone()));
        let status = self.create_status.unwrap_or(201);
        let content = if (200..300).contains(&status) {
            "{\"id\":\"new-bp\"}".to_string()
        } else {
            "{\"errors\":{\"nodes\":\"schema violation\"}}".to_string()
        };
        Ok(CreateResponse { status, content })
    }
}
