//! Client configuration.
//!
//! The only recognized option is the base URL of the analysis API. It is
//! resolved once at startup and injected into [`crate::api::AnalysisClient`];
//! there is no global mutable configuration.

/// Environment variable holding the analysis API base URL.
pub const API_URL_ENV_VAR: &str = "IR_CONSOLE_API_URL";

/// Fallback base URL when the environment variable is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Immutable API configuration, resolved once at session start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config with an explicit base URL.
    ///
    /// Trailing slashes are stripped so path joining stays predictable.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Resolve the base URL from `IR_CONSOLE_API_URL`, falling back to
    /// [`DEFAULT_BASE_URL`] when unset or blank.
    pub fn from_env() -> Self {
        let base_url = std::env::var(API_URL_ENV_VAR)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
