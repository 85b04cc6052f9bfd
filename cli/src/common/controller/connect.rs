//! # Controller HTTP Session (`common::controller::connect`)
//!
//! File: cli/src/common/controller/connect.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! [`ControllerSession`] is the `reqwest` implementation of the
//! [`Controller`] trait. A session is created by [`ControllerSession::login`],
//! which posts the configured credentials to `aaa/login` and keeps the
//! returned token; every later request carries it in the `AuthToken` header.
//! The command handler that created the session owns it and calls
//! [`ControllerSession::logout`] when it is done.
//!
//! ## Endpoints
//!
//! | Operation      | Request                                   | Used field |
//! |----------------|-------------------------------------------|------------|
//! | login          | `POST aaa/login {username, password}`     | `token`    |
//! | version        | `GET version`                             | `version`  |
//! | `fetch_item`   | `GET <path>`                              | whole body |
//! | `query`        | `POST blueprints/<id>/qe {query}`         | `items`    |
//! | `create_item`  | `POST <collection>` with the spec as body | raw body   |
//! | logout         | `POST aaa/logout`                         | -          |
//!
//! Requests are not retried. A failed fetch or query becomes
//! `BpmigError::Controller` naming the operation and path; a failed creation
//! is returned as a [`CreateResponse`] so the controller's message reaches the
//! user unchanged.
//!
use super::{Controller, CreateResponse};
use crate::core::config::ControllerConfig;
use crate::core::error::{BpmigError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

const AUTH_HEADER: &str = "AuthToken";

/// An authenticated connection to one fabric controller.
#[derive(Debug, Clone)]
pub struct ControllerSession {
    client: Client,
    base_url: Url,
    token: String,
}

impl ControllerSession {
    /// Logs in to the controller described by `config`.
    pub async fn login(config: &ControllerConfig) -> Result<Self> {
        Self::login_at(config.base_url()?, config).await
    }

    /// Logs in against an explicit API root (must end with `/`).
    pub async fn login_at(base_url: Url, config: &ControllerConfig) -> Result<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(BpmigError::from)?;

        let login_url = join(&base_url, "aaa/login")?;
        info!("Logging in to {} as {}", base_url, config.username);
        let response = client
            .post(login_url)
            .json(&json!({
                "username": config.username,
                "password": config.password,
            }))
            .send()
            .await
            .map_err(BpmigError::from)?;
        let body = read_json(response, "login", base_url.as_str()).await?;
        let token = body
            .get("token")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                BpmigError::controller("login", base_url.as_str(), "response has no 'token'")
            })?
            .to_string();

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// The controller software version.
    pub async fn version(&self) -> Result<String> {
        let body = self.fetch_item("version").await?;
        body.get("version")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                BpmigError::controller("read version", "version", "response has no 'version'")
                    .into()
            })
    }

    /// Ends the session. Failures are logged, not returned.
    pub async fn logout(self) {
        let url = match join(&self.base_url, "aaa/logout") {
            Ok(url) => url,
            Err(e) => {
                warn!("Skipping logout: {:#}", e);
                return;
            }
        };
        match self
            .client
            .post(url)
            .header(AUTH_HEADER, &self.token)
            .send()
            .await
        {
            Ok(response) => debug!("Logout returned {}", response.status()),
            Err(e) => warn!("Logout failed: {}", e),
        }
    }

    fn url(&self, path: &str) -> Result<Url> {
        join(&self.base_url, path)
    }
}

fn join(base: &Url, path: &str) -> Result<Url> {
    base.join(path.trim_start_matches('/'))
        .map_err(|e| BpmigError::controller("build url", path, e).into())
}

/// Turns a response into JSON, mapping non-success statuses and unparsable
/// bodies to `BpmigError::Controller`.
async fn read_json(response: Response, operation: &str, target: &str) -> Result<Value> {
    let status = response.status();
    let text = response.text().await.map_err(BpmigError::from)?;
    if !status.is_success() {
        return Err(BpmigError::controller(operation, target, format!("HTTP {}: {}", status, text)).into());
    }
    serde_json::from_str(&text)
        .map_err(|e| BpmigError::controller(operation, target, format!("invalid JSON: {}", e)).into())
}

#[async_trait]
impl Controller for ControllerSession {
    async fn fetch_item(&self, path: &str) -> Result<Value> {
        debug!("GET {}", path);
        let response = self
            .client
            .get(self.url(path)?)
            .header(AUTH_HEADER, &self.token)
            .send()
            .await
            .map_err(|e| BpmigError::controller("fetch", path, e))?;
        read_json(response, "fetch", path).await
    }

    async fn query(&self, blueprint_id: &str, query: &str) -> Result<Vec<Value>> {
        let path = format!("blueprints/{}/qe", blueprint_id);
        debug!("QE {}: {}", path, query);
        let response = self
            .client
            .post(self.url(&path)?)
            .header(AUTH_HEADER, &self.token)
            .json(&json!({ "query": query }))
            .send()
            .await
            .map_err(|e| BpmigError::controller("query", &path, e))?;
        let body = read_json(response, "query", &path).await?;
        match body.get("items") {
            Some(Value::Array(items)) => Ok(items.clone()),
            _ => Err(BpmigError::controller("query", &path, "response has no 'items' list").into()),
        }
    }

    async fn create_item(&self, collection: &str, spec: &Value) -> Result<CreateResponse> {
        debug!("POST {}", collection);
        let response = self
            .client
            .post(self.url(collection)?)
            .header(AUTH_HEADER, &self.token)
            .json(spec)
            .send()
            .await
            .map_err(|e| BpmigError::controller("create", collection, e))?;
        let status = response.status().as_u16();
        let content = response.text().await.map_err(BpmigError::from)?;
        Ok(CreateResponse { status, content })
    }
}
