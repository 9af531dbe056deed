//! Layered configuration for the binary.
//!
//! Defaults, then `appsettings.json`, then environment variables and flags.
//! The settings file keeps the `ApplicationSettings` section layout used by
//! existing deployments of the client.

use std::path::Path;

use anyhow::{bail, Context};
use road_status_core::{ApiConfig, DEFAULT_BASE_URL};
use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_SETTINGS_FILE: &str = "appsettings.json";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SettingsFile {
    #[serde(default)]
    application_settings: ApplicationSettings,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationSettings {
    #[serde(default)]
    pub tfl_road_api_url: Option<String>,
    #[serde(default)]
    pub tfl_api_key: Option<String>,
}

pub fn parse_settings(raw: &str) -> anyhow::Result<ApplicationSettings> {
    let file: SettingsFile = serde_json::from_str(raw)?;
    Ok(file.application_settings)
}

/// Read the settings file at `path`. A missing file is only an error when
/// `required` is set.
pub fn load_settings(path: &Path, required: bool) -> anyhow::Result<ApplicationSettings> {
    if !required && !path.exists() {
        debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(ApplicationSettings::default());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file {}", path.display()))?;
    parse_settings(&raw).with_context(|| format!("invalid settings file {}", path.display()))
}

/// Merge file settings with overrides from the environment or command line.
pub fn resolve(
    file: ApplicationSettings,
    api_url: Option<String>,
    app_key: Option<String>,
) -> anyhow::Result<ApiConfig> {
    let base_url = non_empty(api_url)
        .or(non_empty(file.tfl_road_api_url))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let Some(app_key) = non_empty(app_key).or(non_empty(file.tfl_api_key)) else {
        bail!(
            "no API key configured; set ApplicationSettings.TflApiKey in {DEFAULT_SETTINGS_FILE}, ROAD_STATUS_APP_KEY, or --app-key"
        );
    };
    Ok(ApiConfig::new(base_url, app_key))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
