//! Client configuration.
//!
//! Transport settings and credentials, read from the environment or built
//! up programmatically before constructing a [`BitlyClient`](crate::BitlyClient).

use std::env;
use std::time::Duration;

use crate::error::{BitlyError, Result};

/// Default API endpoint.
pub const DEFAULT_API_URL: &str = "https://api-ssl.bitly.com/";

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("bitlyapi/", env!("CARGO_PKG_VERSION"));

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for a [`BitlyClient`](crate::BitlyClient).
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use bitlyapi::ClientConfig;
///
/// let config = ClientConfig::default()
///     .with_access_token("token")
///     .with_request_timeout(Duration::from_secs(5))
///     .with_force_ipv4(true);
/// assert!(config.force_ipv4);
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    /// OAuth2 application id.
    pub client_id: Option<String>,
    /// OAuth2 application secret.
    pub client_secret: Option<String>,
    /// Access token attached to every call.
    pub access_token: Option<String>,
    /// Base URL all endpoint paths are joined onto.
    pub api_base_url: String,
    /// User agent header value.
    pub user_agent: String,
    /// Total time allowed for one request.
    pub request_timeout: Duration,
    /// Time allowed to establish a connection.
    pub connect_timeout: Duration,
    /// Only connect over IPv4.
    pub force_ipv4: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            access_token: None,
            api_base_url: DEFAULT_API_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            force_ipv4: false,
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("client_id", &self.client_id)
            .field("api_base_url", &self.api_base_url)
            .field("user_agent", &self.user_agent)
            .field("request_timeout", &self.request_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("force_ipv4", &self.force_ipv4)
            .finish_non_exhaustive()
    }
}

impl ClientConfig {
    /// Read configuration from environment variables.
    ///
    /// - `BITLY_ACCESS_TOKEN`: access token
    /// - `BITLY_CLIENT_ID` / `BITLY_CLIENT_SECRET`: OAuth2 application credentials
    /// - `BITLY_API_URL`: base URL (defaults to `https://api-ssl.bitly.com/`)
    /// - `BITLY_TIMEOUT_SECS`, `BITLY_CONNECT_TIMEOUT_SECS`: timeouts in seconds
    /// - `BITLY_FORCE_IPV4`: `1`/`true` to disable IPv6
    ///
    /// # Errors
    ///
    /// Returns an error if neither an access token nor a client id is set, or
    /// if a numeric variable does not parse.
    pub fn from_env() -> Result<Self> {
        let mut config = Self {
            client_id: env::var("BITLY_CLIENT_ID").ok(),
            client_secret: env::var("BITLY_CLIENT_SECRET").ok(),
            access_token: env::var("BITLY_ACCESS_TOKEN").ok(),
            ..Self::default()
        };

        if config.access_token.is_none() && config.client_id.is_none() {
            return Err(BitlyError::ConfigMissing(
                "BITLY_ACCESS_TOKEN or BITLY_CLIENT_ID environment variable not set".to_string(),
            ));
        }

        if let Ok(url) = env::var("BITLY_API_URL") {
            config.api_base_url = url;
        }
        if let Some(secs) = secs_from_env("BITLY_TIMEOUT_SECS")? {
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = secs_from_env("BITLY_CONNECT_TIMEOUT_SECS")? {
            config.connect_timeout = Duration::from_secs(secs);
        }
        if let Ok(flag) = env::var("BITLY_FORCE_IPV4") {
            config.force_ipv4 = parse_flag(&flag);
        }

        Ok(config)
    }

    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    #[must_use]
    pub fn with_client_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_id = Some(client_id.into());
        self.client_secret = Some(client_secret.into());
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_force_ipv4(mut self, force: bool) -> Self {
        self.force_ipv4 = force;
        self
    }
}

fn secs_from_env(name: &str) -> Result<Option<u64>> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| BitlyError::ConfigMissing(format!("{name} must be a whole number of seconds, got '{raw}'"))),
        Err(_) => Ok(None),
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert!(config.user_agent.starts_with("bitlyapi/"));
        assert!(!config.force_ipv4);
        assert!(config.access_token.is_none());
    }

    #[test]
    fn test_debug_hides_secrets() {
        let config = ClientConfig::default()
            .with_access_token("secret-token")
            .with_client_credentials("app-id", "app-secret");
        let debug = format!("{config:?}");
        assert!(debug.contains("app-id"));
        assert!(!debug.contains("secret-token"));
        assert!(!debug.contains("app-secret"));
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
    }
}
