use crate::constants::{
    API_TIMEOUT_ENV_VAR, API_URL_ENV_VAR, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS,
    STRICT_PLACEHOLDERS_ENV_VAR,
};
use crate::utils::config::{get_env_flag, get_env_non_empty, get_env_or_default};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the loan API client
///
/// Built once at startup and handed to the client, which never reads the
/// environment again afterwards.
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Reject URLs that still contain `:name` placeholders after substitution
    pub strict_placeholders: bool,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base origin of the backend, without a trailing slash
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// Loads a `.env` file when present, then reads:
    ///
    /// * `NEXT_PUBLIC_API_URL` - backend origin (default `https://cogni-ml.onrender.com`)
    /// * `API_TIMEOUT_SECS` - request timeout (default 30)
    /// * `API_STRICT_PLACEHOLDERS` - strict placeholder validation (default off)
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url = match get_env_non_empty(API_URL_ENV_VAR) {
            Some(url) => url,
            None => {
                debug!("{} not set, using {}", API_URL_ENV_VAR, DEFAULT_API_URL);
                DEFAULT_API_URL.to_string()
            }
        };

        let mut timeout = get_env_or_default(API_TIMEOUT_ENV_VAR, DEFAULT_TIMEOUT_SECS);
        if timeout == 0 {
            warn!("{} must be positive, using {}", API_TIMEOUT_ENV_VAR, DEFAULT_TIMEOUT_SECS);
            timeout = DEFAULT_TIMEOUT_SECS;
        }

        Config {
            rest_api: RestApiConfig {
                base_url: normalize_base_url(&base_url),
                timeout,
            },
            strict_placeholders: get_env_flag(STRICT_PLACEHOLDERS_ENV_VAR, false),
        }
    }

    /// Creates a configuration pointing at `base_url` with default settings,
    /// without touching the environment
    pub fn with_base_url(base_url: &str) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: normalize_base_url(base_url),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            strict_placeholders: false,
        }
    }

    /// Sets the request timeout in seconds
    #[must_use]
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.rest_api.timeout = timeout_secs.max(1);
        self
    }

    /// Enables or disables strict placeholder validation
    #[must_use]
    pub fn with_strict_placeholders(mut self, strict: bool) -> Self {
        self.strict_placeholders = strict;
        self
    }

    /// Base origin of the backend
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.rest_api.base_url
    }
}

fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}
