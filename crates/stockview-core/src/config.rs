//! Upstream API configuration.
//!
//! | Setting | Environment | Default |
//! |---------|-------------|---------|
//! | API key | `STOCKVIEW_ALPHAVANTAGE_API_KEY` | `demo` |
//! | Base URL | `STOCKVIEW_ALPHAVANTAGE_BASE_URL` | `https://www.alphavantage.co` |
//! | Timeout | — | `5000` ms |
//!
//! Explicit overrides (`with_*`) take precedence over the environment.

use std::fmt::{Debug, Formatter};

use crate::ValidationError;

pub const API_KEY_ENV: &str = "STOCKVIEW_ALPHAVANTAGE_API_KEY";
pub const BASE_URL_ENV: &str = "STOCKVIEW_ALPHAVANTAGE_BASE_URL";

pub const DEFAULT_API_KEY: &str = "demo";
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co";
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Connection settings for the Alpha Vantage API.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    api_key: String,
    base_url: String,
    timeout_ms: u64,
}

impl ApiConfig {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout_ms: u64,
    ) -> Result<Self, ValidationError> {
        Self::default()
            .with_api_key(api_key)?
            .with_base_url(base_url)?
            .with_timeout_ms(timeout_ms)
    }

    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`; unset or blank variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ValidationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let mut config = Self::default();
        if let Some(api_key) = read(API_KEY_ENV) {
            config = config.with_api_key(api_key)?;
        }
        if let Some(base_url) = read(BASE_URL_ENV) {
            config = config.with_base_url(base_url)?;
        }
        Ok(config)
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Result<Self, ValidationError> {
        let api_key = api_key.into().trim().to_owned();
        if api_key.is_empty() {
            return Err(ValidationError::EmptyApiKey);
        }
        self.api_key = api_key;
        Ok(self)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, ValidationError> {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ValidationError::InvalidBaseUrl { value: base_url });
        }
        self.base_url = trimmed.to_owned();
        Ok(self)
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Result<Self, ValidationError> {
        if timeout_ms == 0 {
            return Err(ValidationError::ZeroTimeout);
        }
        self.timeout_ms = timeout_ms;
        Ok(self)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The public `demo` key only serves the daily series of `IBM`.
    pub fn uses_demo_key(&self) -> bool {
        self.api_key == DEFAULT_API_KEY
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// `{base_url}/query?` followed by `params` and the api key.
    pub fn query_url(&self, params: &[(&str, &str)]) -> String {
        let mut url = format!("{}/query?", self.base_url);
        for (name, value) in params {
            url.push_str(name);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
            url.push('&');
        }
        url.push_str("apikey=");
        url.push_str(&urlencoding::encode(&self.api_key));
        url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::from(DEFAULT_API_KEY),
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl Debug for ApiConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect::<HashMap<_, _>>();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = ApiConfig::from_lookup(lookup_from(&[])).expect("defaults are valid");
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.api_key(), DEFAULT_API_KEY);
        assert!(config.uses_demo_key());
    }

    #[test]
    fn environment_overrides_defaults_and_blank_values_are_ignored() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            (API_KEY_ENV, "env-key"),
            (BASE_URL_ENV, "  "),
        ]))
        .expect("valid environment");

        assert_eq!(config.api_key(), "env-key");
        assert!(!config.uses_demo_key());
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn rejects_invalid_values() {
        assert_eq!(
            ApiConfig::default().with_api_key(" "),
            Err(ValidationError::EmptyApiKey)
        );
        assert!(matches!(
            ApiConfig::default().with_base_url("ftp://example.test"),
            Err(ValidationError::InvalidBaseUrl { .. })
        ));
        assert_eq!(
            ApiConfig::default().with_timeout_ms(0),
            Err(ValidationError::ZeroTimeout)
        );
    }

    #[test]
    fn query_url_encodes_params_and_appends_key() {
        let config = ApiConfig::new("k&y", "http://127.0.0.1:9/", 100).expect("valid config");
        let url = config.query_url(&[("function", "TIME_SERIES_DAILY"), ("symbol", "PSA^H")]);

        assert_eq!(
            url,
            "http://127.0.0.1:9/query?function=TIME_SERIES_DAILY&symbol=PSA%5EH&apikey=k%26y"
        );
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let config = ApiConfig::default().with_api_key("secret-key").expect("valid key");
        assert!(!format!("{config:?}").contains("secret-key"));
    }
}
