//! Centralized configuration for Oogleg.
//!
//! Defaults live here; `OoglegConfig::from_env` layers environment overrides
//! on top, and the CLI layers its flags on top of that.

use url::Url;

use crate::errors::ConfigError;

/// Search API used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Environment variable overriding the search API base URL.
pub const ENV_API_URL: &str = "OOGLEG_API_URL";
/// Environment variable overriding the web host bind address.
pub const ENV_HOST: &str = "OOGLEG_HOST";
/// Environment variable overriding the web host port.
pub const ENV_PORT: &str = "OOGLEG_PORT";
/// Environment variable overriding how many page sessions the web host keeps.
pub const ENV_MAX_SESSIONS: &str = "OOGLEG_MAX_SESSIONS";

/// Port of the demo search API, matching [`DEFAULT_API_URL`].
pub const DEFAULT_DEMO_API_PORT: u16 = 8080;

/// Central configuration for all Oogleg components.
#[derive(Debug, Clone)]
pub struct OoglegConfig {
    pub api: ApiConfig,
    pub web: WebConfig,
    /// Bind address of the standalone demo search API
    pub demo_api: WebConfig,
}

impl Default for OoglegConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            web: WebConfig::default(),
            demo_api: WebConfig {
                port: DEFAULT_DEMO_API_PORT,
                ..WebConfig::default()
            },
        }
    }
}

impl OoglegConfig {
    /// Defaults with `OOGLEG_*` environment overrides applied.
    ///
    /// # Errors
    /// - `ConfigError::InvalidApiUrl` - `OOGLEG_API_URL` is not an http(s) URL
    /// - `ConfigError::InvalidEnvironment` - `OOGLEG_PORT` or
    ///   `OOGLEG_MAX_SESSIONS` is not a number
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`OoglegConfig::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    /// - `ConfigError::InvalidApiUrl` - The API URL override is invalid
    /// - `ConfigError::InvalidEnvironment` - A numeric override is invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL) {
            config.api = ApiConfig::with_base_url(&url)?;
        }
        if let Some(host) = lookup(ENV_HOST) {
            config.demo_api.host = host.clone();
            config.web.host = host;
        }
        if let Some(port) = parse_variable(&lookup, ENV_PORT)? {
            config.web.port = port;
            config.demo_api.port = port;
        }
        if let Some(max_sessions) = parse_variable(&lookup, ENV_MAX_SESSIONS)? {
            config.web.max_sessions = max_sessions;
        }

        Ok(config)
    }
}

fn parse_variable<F, T>(lookup: &F, variable: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let Some(value) = lookup(variable) else {
        return Ok(None);
    };
    value
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidEnvironment { variable, value })
}

/// Search API client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    /// User agent sent with search requests
    pub user_agent: &'static str,
}

impl ApiConfig {
    /// Configuration pointing at `base_url`.
    ///
    /// Only absolute `http`/`https` URLs are accepted. A trailing slash is
    /// dropped so request paths can be appended directly.
    ///
    /// # Errors
    /// - `ConfigError::InvalidApiUrl` - Not an absolute http(s) URL
    pub fn with_base_url(base_url: &str) -> Result<Self, ConfigError> {
        let parsed = Url::parse(base_url).map_err(|e| ConfigError::InvalidApiUrl {
            value: base_url.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidApiUrl {
                value: base_url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(Self {
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            ..Self::default()
        })
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            user_agent: "oogleg/0.1.0",
        }
    }
}

/// Web host configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Address to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Most page sessions kept before the least recently used is dropped
    pub max_sessions: usize,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            max_sessions: 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = OoglegConfig::default();
        assert_eq!(config.api.base_url(), DEFAULT_API_URL);
        assert_eq!(config.web.host, "127.0.0.1");
        assert_eq!(config.web.port, 3000);
        assert_eq!(config.web.max_sessions, 1024);
        assert_eq!(config.demo_api.host, "127.0.0.1");
        assert_eq!(config.demo_api.port, DEFAULT_DEMO_API_PORT);
    }

    #[test]
    fn test_environment_overrides() {
        let config = OoglegConfig::from_lookup(lookup_from(&[
            (ENV_API_URL, "https://search.example.com/"),
            (ENV_HOST, "0.0.0.0"),
            (ENV_PORT, "8081"),
            (ENV_MAX_SESSIONS, "16"),
        ]))
        .unwrap();

        assert_eq!(config.api.base_url(), "https://search.example.com");
        assert_eq!(config.web.host, "0.0.0.0");
        assert_eq!(config.web.port, 8081);
        assert_eq!(config.web.max_sessions, 16);
        assert_eq!(config.demo_api.host, "0.0.0.0");
        assert_eq!(config.demo_api.port, 8081);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let error = OoglegConfig::from_lookup(lookup_from(&[(ENV_PORT, "eighty")])).unwrap_err();
        assert!(matches!(
            error,
            ConfigError::InvalidEnvironment { variable: ENV_PORT, .. }
        ));

        let error =
            OoglegConfig::from_lookup(lookup_from(&[(ENV_MAX_SESSIONS, "-1")])).unwrap_err();
        assert!(matches!(
            error,
            ConfigError::InvalidEnvironment { variable: ENV_MAX_SESSIONS, .. }
        ));
    }

    #[test]
    fn test_base_url_validation() {
        assert!(ApiConfig::with_base_url("localhost:8080/api").is_err());
        assert!(ApiConfig::with_base_url("ftp://example.com").is_err());
        assert!(ApiConfig::with_base_url("not a url").is_err());

        let config = ApiConfig::with_base_url("http://127.0.0.1:9000").unwrap();
        assert_eq!(config.base_url(), "http://127.0.0.1:9000");
    }
}
