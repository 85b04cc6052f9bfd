//! # bpmig Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements the configuration system for bpmig, handling loading,
//! merging, validation, and access to configuration data. The configuration says
//! which fabric controller to talk to, how to log in, and where pulled archives
//! and exported snapshots should be written.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line overrides (`--host`, `--port`, `--username`, `--password`, also
//!    readable from `BPMIG_*` environment variables through clap)
//! 2. An explicit file given with `--config <path>` (must exist)
//! 3. Project-specific `.bpmig.toml` in the current directory or ancestors
//! 4. User-specific `~/.config/bpmig/config.toml`
//! 5. Default values defined in the code
//!
//! The project file is read as a layer of optional keys, so it overrides
//! exactly the keys it names, including a value equal to the default.
//!
//! Paths are expanded (`~` to home directory) and the merged result is validated
//! before use.
//!
//! ## Examples
//!
//! ```rust
//! let cfg = config::load_config(None, &ConfigOverrides::default())?;
//! let base_url = cfg.controller.base_url()?;
//! let out_dir = &cfg.output.directory;
//! ```
//!
use crate::core::error::{BpmigError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Deserialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};
use url::Url;

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub controller: ControllerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Connection settings for the fabric controller.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ControllerConfig {
    /// Controller hostname or IP address.
    #[serde(default)]
    pub host: String,
    /// HTTPS port of the controller API.
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Controllers usually ship with self-signed certificates.
    #[serde(default = "default_accept_invalid_certs")]
    pub accept_invalid_certs: bool,
    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Where pulled archives and exported snapshots are written.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output directory (can use ~). Will be expanded.
    #[serde(default = "default_output_dir")]
    pub directory: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: default_port(),
            username: String::new(),
            password: String::new(),
            accept_invalid_certs: default_accept_invalid_certs(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
        }
    }
}

impl ControllerConfig {
    /// The API root, e.g. `https://10.0.0.5:443/api/`.
    ///
    /// The trailing slash matters: endpoint paths are joined onto it.
    pub fn base_url(&self) -> Result<Url> {
        let raw = format!("https://{}:{}/api/", self.host, self.port);
        Url::parse(&raw).map_err(|e| {
            anyhow!(BpmigError::Config(format!(
                "Invalid controller address '{}': {}",
                raw, e
            )))
        })
    }
}

fn default_port() -> u16 {
    443
}
fn default_accept_invalid_certs() -> bool {
    true
}
fn default_timeout_secs() -> u64 {
    60
}
fn default_output_dir() -> String {
    ".".to_string()
}

/// Values supplied on the command line that win over every file.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// A project `.bpmig.toml` read as a layer: only the keys it names are `Some`,
/// so a project file can set a value back to its default.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct ConfigLayer {
    #[serde(default)]
    controller: ControllerLayer,
    #[serde(default)]
    output: OutputLayer,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct ControllerLayer {
    host: Option<String>,
    port: Option<u16>,
    username: Option<String>,
    password: Option<String>,
    accept_invalid_certs: Option<bool>,
    timeout_secs: Option<u64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct OutputLayer {
    directory: Option<String>,
}

const PROJECT_CONFIG_FILENAME: &str = ".bpmig.toml";

/// Commented sample written by `bpmig setup config`.
pub const SAMPLE_CONFIG: &str = r#"# bpmig configuration
#
# Connection settings for the fabric controller. Every value here can be
# overridden on the command line (--host, --port, --username, --password)
# or through BPMIG_HOST, BPMIG_PORT, BPMIG_USERNAME and BPMIG_PASSWORD.

[controller]
host = "10.85.192.45"
port = 443
username = "admin"
password = "admin"
# Controllers usually present a self-signed certificate.
accept_invalid_certs = true
timeout_secs = 60

[output]
# Where <blueprint>.tgz archives and <blueprint>.json snapshots are written.
directory = "."
"#;

/// Loads, merges, expands and validates configuration.
///
/// When `explicit` is given only that file is read (plus defaults), otherwise
/// the project file overrides the user file.
pub fn load_config(explicit: Option<&Path>, overrides: &ConfigOverrides) -> Result<Config> {
    let mut merged = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(anyhow!(BpmigError::Config(format!(
                    "Configuration file '{}' does not exist.",
                    path.display()
                ))));
            }
            info!("Loading configuration from: {}", path.display());
            load_config_from_path::<Config>(path)?
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    apply_overrides(&mut merged, overrides);
    expand_config_paths(&mut merged);
    validate_config(&merged).context("Configuration validation failed")?;
    debug!(
        "Final loaded configuration: host={} port={} user={} output={}",
        merged.controller.host,
        merged.controller.port,
        merged.controller.username,
        merged.output.directory
    );
    Ok(merged)
}

/// Path of the per-user configuration file, if the platform has one.
pub fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "bpmig", "bpmig").map(|dirs| dirs.config_dir().join("config.toml"))
}

fn load_user_config() -> Result<Option<Config>> {
    match user_config_path() {
        Some(config_path) if config_path.exists() => {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        }
        Some(config_path) => {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
        None => {
            warn!("Could not determine user config directory.");
            Ok(None)
        }
    }
}

fn load_project_config() -> Result<Option<ConfigLayer>> {
    if let Some(project_config_path) = find_project_config_path()? {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.bpmig.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path() -> Result<Option<PathBuf>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let mut path: &Path = &current_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Ok(Some(project_config));
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return Ok(None);
        }
        match path.parent() {
            Some(parent) => path = parent,
            None => break,
        }
    }
    Ok(None)
}

fn load_config_from_path<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Applies the keys the project file actually sets on top of the user config.
fn merge_configs(user: Config, project: Option<ConfigLayer>) -> Config {
    let Some(project) = project else {
        return user;
    };
    let mut merged = user;
    let ctl = project.controller;
    if let Some(host) = ctl.host {
        merged.controller.host = host;
    }
    if let Some(port) = ctl.port {
        merged.controller.port = port;
    }
    if let Some(username) = ctl.username {
        merged.controller.username = username;
    }
    if let Some(password) = ctl.password {
        merged.controller.password = password;
    }
    if let Some(accept) = ctl.accept_invalid_certs {
        merged.controller.accept_invalid_certs = accept;
    }
    if let Some(timeout) = ctl.timeout_secs {
        merged.controller.timeout_secs = timeout;
    }
    if let Some(directory) = project.output.directory {
        merged.output.directory = directory;
    }
    merged
}

fn apply_overrides(config: &mut Config, overrides: &ConfigOverrides) {
    if let Some(host) = &overrides.host {
        config.controller.host = host.clone();
    }
    if let Some(port) = overrides.port {
        config.controller.port = port;
    }
    if let Some(username) = &overrides.username {
        config.controller.username = username.clone();
    }
    if let Some(password) = &overrides.password {
        config.controller.password = password.clone();
    }
}

fn expand_config_paths(config: &mut Config) {
    config.output.directory = shellexpand::tilde(&config.output.directory).into_owned();
    debug!("Expanded output directory: {}", config.output.directory);
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if config.controller.host.trim().is_empty() {
        return Err(anyhow!(BpmigError::Config(
            "No controller host configured. Set [controller] host or pass --host.".to_string()
        )));
    }
    if config.controller.port == 0 {
        return Err(anyhow!(BpmigError::Config(
            "Controller port must be non-zero.".to_string()
        )));
    }
    if config.controller.username.trim().is_empty() {
        return Err(anyhow!(BpmigError::Config(
            "No controller username configured. Set [controller] username or pass --username."
                .to_string()
        )));
    }
    let out_dir = PathBuf::from(&config.output.directory);
    if out_dir.exists() && !out_dir.is_dir() {
        return Err(anyhow!(BpmigError::Config(format!(
            "Configured output path '{}' exists but is not a directory.",
            out_dir.display()
        ))));
    }
    info!("Configuration validation successful.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn valid_config() -> Config {
        Config {
            controller: ControllerConfig {
                host: "10.0.0.5".into(),
                username: "admin".into(),
                password: "secret".into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [controller]
            host = "apstra.lab"
            username = "ops"
            password = "pw"
            accept_invalid_certs = false

            [output]
            directory = "~/migrations"
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.controller.host, "apstra.lab");
        assert_eq!(config.controller.port, 443); // Default
        assert_eq!(config.controller.username, "ops");
        assert!(!config.controller.accept_invalid_certs);
        assert_eq!(config.controller.timeout_secs, 60);
        assert_eq!(config.output.directory, "~/migrations"); // Not yet expanded
    }

    #[test]
    fn test_sample_config_parses() {
        let config: Config = toml::from_str(SAMPLE_CONFIG).expect("sample config must parse");
        assert_eq!(config.controller.host, "10.85.192.45");
        assert_eq!(config.output.directory, ".");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[controller]\nhots = \"x\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_base_url() {
        let mut config = valid_config();
        config.controller.port = 8443;
        let url = config.controller.base_url().unwrap();
        assert_eq!(url.as_str(), "https://10.0.0.5:8443/api/");
        assert_eq!(url.join("aaa/login").unwrap().path(), "/api/aaa/login");
    }

    #[test]
    fn test_path_expansion() {
        let mut config = valid_config();
        config.output.directory = "~/bp_out".to_string();
        expand_config_paths(&mut config);
        let home_dir = dirs::home_dir().unwrap();
        assert_eq!(
            config.output.directory,
            home_dir.join("bp_out").to_string_lossy()
        );
    }

    #[test]
    fn test_merge_project_overrides_user() {
        let user = valid_config();
        let project: ConfigLayer =
            toml::from_str("[controller]\nhost = \"10.9.9.9\"\nport = 9443\n").unwrap();
        let merged = merge_configs(user, Some(project));
        assert_eq!(merged.controller.host, "10.9.9.9");
        assert_eq!(merged.controller.port, 9443);
        // Unset in the project file, so the user's values survive.
        assert_eq!(merged.controller.username, "admin");
        assert_eq!(merged.controller.password, "secret");
    }

    #[test]
    fn test_project_can_restore_default_values() {
        let mut user = valid_config();
        user.controller.port = 8443;
        user.controller.timeout_secs = 5;
        user.controller.accept_invalid_certs = false;
        user.output.directory = "/srv/out".into();
        let project: ConfigLayer = toml::from_str(
            "[controller]\nport = 443\ntimeout_secs = 60\naccept_invalid_certs = true\n\n[output]\ndirectory = \".\"\n",
        )
        .unwrap();
        let merged = merge_configs(user, Some(project));
        assert_eq!(merged.controller.port, 443);
        assert_eq!(merged.controller.timeout_secs, 60);
        assert!(merged.controller.accept_invalid_certs);
        assert_eq!(merged.output.directory, ".");
        assert_eq!(merged.controller.host, "10.0.0.5");
    }

    #[test]
    fn test_project_layer_rejects_unknown_keys() {
        let result: std::result::Result<ConfigLayer, _> = toml::from_str("[controller]\nprot = 1\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides_win() {
        let mut config = valid_config();
        apply_overrides(
            &mut config,
            &ConfigOverrides {
                host: Some("cli-host".into()),
                port: Some(10443),
                ..Default::default()
            },
        );
        assert_eq!(config.controller.host, "cli-host");
        assert_eq!(config.controller.port, 10443);
        assert_eq!(config.controller.username, "admin");
    }

    #[test]
    fn test_validate_config_valid() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_validate_config_missing_host() {
        let mut config = valid_config();
        config.controller.host.clear();
        let result = validate_config(&config);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("No controller host configured"));
    }

    #[test]
    fn test_validate_config_output_is_file() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("not_a_dir");
        fs::write(&file_path, "").unwrap();

        let mut config = valid_config();
        config.output.directory = file_path.to_string_lossy().to_string();
        let result = validate_config(&config);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("is not a directory"));
    }

    #[test]
    fn test_load_explicit_config_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("bpmig.toml");
        fs::write(
            &path,
            "[controller]\nhost = \"from-file\"\nusername = \"admin\"\n",
        )
        .unwrap();
        let overrides = ConfigOverrides {
            password: Some("pw".into()),
            ..Default::default()
        };
        let config = load_config(Some(&path), &overrides).unwrap();
        assert_eq!(config.controller.host, "from-file");
        assert_eq!(config.controller.password, "pw");
    }

    #[test]
    fn test_load_explicit_config_missing() {
        let temp_dir = tempdir().unwrap();
        let result = load_config(
            Some(&temp_dir.path().join("nope.toml")),
            &ConfigOverrides::default(),
        );
        assert!(result.unwrap_err().to_string().contains("does not exist"));
    }
}
