//! Client configuration and API key resolution.
//!
//! # Design
//! `ClientConfig` replaces module-level request defaults: the base URL, the
//! RapidAPI host identifier and the name of the key environment variable are
//! threaded explicitly into every request. The key itself is resolved on
//! each call so a rotated key is picked up without rebuilding the client.

use crate::error::ApiError;

/// Default base URL of the Skyscanner API on RapidAPI.
pub const DEFAULT_BASE_URL: &str = "https://skyscanner-api.p.rapidapi.com";

/// Value sent in the `X-RapidAPI-Host` header.
pub const DEFAULT_HOST: &str = "skyscanner-api.p.rapidapi.com";

/// Environment variable consulted when no explicit key is passed.
pub const DEFAULT_API_KEY_ENV: &str = "RAPIDAPI_KEY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    host: String,
    api_key_env: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}

impl ClientConfig {
    /// Point the client at another server, e.g. a local mock. A trailing
    /// slash is stripped.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    pub fn with_api_key_env(mut self, name: &str) -> Self {
        self.api_key_env = name.to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn api_key_env(&self) -> &str {
        &self.api_key_env
    }

    /// Resolve the API key for one call.
    ///
    /// An explicit key is returned unchanged. Otherwise the configured
    /// environment variable is read; unset, empty or non-unicode values
    /// yield `ApiError::MissingCredential`.
    pub fn resolve_key(&self, explicit: Option<&str>) -> Result<String, ApiError> {
        if let Some(key) = explicit {
            return Ok(key.to_string());
        }
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.is_empty() => Ok(key),
            _ => Err(ApiError::MissingCredential {
                env_var: self.api_key_env.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_rapidapi() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.host(), DEFAULT_HOST);
        assert_eq!(config.api_key_env(), "RAPIDAPI_KEY");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ClientConfig::default().with_base_url("http://localhost:3000/");
        assert_eq!(config.base_url(), "http://localhost:3000");
    }

    #[test]
    fn explicit_key_wins_and_is_not_validated() {
        let config = ClientConfig::default().with_api_key_env("SKYSCANNER_CONFIG_TEST_NEVER_SET");
        assert_eq!(config.resolve_key(Some("  odd key ")).unwrap(), "  odd key ");
    }

    #[test]
    fn unset_env_var_is_missing_credential() {
        let config = ClientConfig::default().with_api_key_env("SKYSCANNER_CONFIG_TEST_NEVER_SET");
        let err = config.resolve_key(None).unwrap_err();
        assert!(matches!(
            err,
            ApiError::MissingCredential { ref env_var } if env_var == "SKYSCANNER_CONFIG_TEST_NEVER_SET"
        ));
    }

    #[test]
    fn empty_env_var_is_missing_credential() {
        std::env::set_var("SKYSCANNER_CONFIG_TEST_EMPTY", "");
        let config = ClientConfig::default().with_api_key_env("SKYSCANNER_CONFIG_TEST_EMPTY");
        assert!(matches!(
            config.resolve_key(None),
            Err(ApiError::MissingCredential { .. })
        ));
    }

    #[test]
    fn env_var_is_read_on_every_call() {
        let config = ClientConfig::default().with_api_key_env("SKYSCANNER_CONFIG_TEST_ROTATE");
        std::env::set_var("SKYSCANNER_CONFIG_TEST_ROTATE", "first");
        assert_eq!(config.resolve_key(None).unwrap(), "first");
        std::env::set_var("SKYSCANNER_CONFIG_TEST_ROTATE", "second");
        assert_eq!(config.resolve_key(None).unwrap(), "second");
    }
}
