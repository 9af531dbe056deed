//! Connection settings for the road status API.

use std::fmt;

/// Base URL of the public TfL Road endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.tfl.gov.uk/Road";

/// Name of the query parameter carrying the app key.
pub const APP_KEY_PARAM: &str = "appKey";

/// Read-only connection settings, built once by the caller at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub app_key: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            app_key: app_key.into(),
        }
    }
}

// The key never reaches logs through `{:?}`.
impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("app_key", &"<redacted>")
            .finish()
    }
}
