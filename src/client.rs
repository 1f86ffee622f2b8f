//! bit.ly API client.
//!
//! Owns credentials and transport configuration, and implements the request
//! pipeline every endpoint method funnels through. Endpoint methods live in
//! [`crate::api`]; the OAuth2 exchange lives in [`crate::auth`].

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::config::ClientConfig;
use crate::endpoints::Endpoint;
use crate::error::{BitlyError, Result};
use crate::query::{self, Params};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Body of a successful call.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// The envelope's `data`, wrapper discarded.
    Json(Value),
    /// The raw body, for endpoints that do not answer with an envelope.
    Raw(String),
}

impl Response {
    /// Take the JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`BitlyError::MalformedResponse`] for a raw body.
    pub fn into_json(self) -> Result<Value> {
        match self {
            Self::Json(v) => Ok(v),
            Self::Raw(_) => Err(BitlyError::MalformedResponse(
                "expected a JSON envelope, got a raw body".to_string(),
            )),
        }
    }

    /// Take the raw body. A JSON payload is re-serialized.
    pub fn into_text(self) -> String {
        match self {
            Self::Json(v) => v.to_string(),
            Self::Raw(s) => s,
        }
    }
}

/// `{status_code, status_txt, data}` wrapper around every JSON response.
#[derive(Debug, Deserialize)]
struct Envelope {
    status_code: WireCode,
    #[serde(default)]
    status_txt: Option<String>,
    #[serde(default)]
    data: Value,
}

/// The service sometimes sends `status_code` as a numeric string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireCode {
    Int(i64),
    Text(String),
}

impl WireCode {
    fn as_int(&self) -> Result<i64> {
        match self {
            Self::Int(n) => Ok(*n),
            Self::Text(s) => s.trim().parse().map_err(|_| {
                BitlyError::MalformedResponse(format!("non-numeric status_code '{s}'"))
            }),
        }
    }
}

impl Envelope {
    fn into_data(self) -> Result<Value> {
        let status_code = self.status_code.as_int()?;
        if status_code != 200 {
            return Err(BitlyError::Api {
                status_code,
                message: self.status_txt.unwrap_or_default(),
            });
        }
        Ok(self.data)
    }
}

/// bit.ly API client.
///
/// Holds at most one access token, attached to every call unless the caller
/// passes an explicit `access_token` parameter. The token is set at
/// construction or by
/// [`exchange_authorization_code`](BitlyClient::exchange_authorization_code),
/// which needs `&mut self`; every other operation takes `&self`.
///
/// Clones share the underlying connection pool but own their credentials.
///
/// # Example
///
/// ```no_run
/// use bitlyapi::{BitlyClient, ClientConfig};
///
/// # async fn example() -> bitlyapi::Result<()> {
/// // Create from environment variables
/// let client = BitlyClient::from_env()?;
///
/// // Or configure manually
/// let client = BitlyClient::new(ClientConfig::default().with_access_token("token"))?;
/// let link = client.shorten("https://example.com", None).await?;
/// println!("{}", link.url);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct BitlyClient {
    http: Client,
    base_url: Arc<Url>,
    client_id: Option<String>,
    client_secret: Option<String>,
    access_token: Option<String>,
}

impl std::fmt::Debug for BitlyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitlyClient")
            .field("base_url", &self.base_url.as_str())
            .field("client_id", &self.client_id)
            .field("authenticated", &self.access_token.is_some())
            .finish_non_exhaustive()
    }
}

impl BitlyClient {
    /// Create a client from environment variables.
    ///
    /// See [`ClientConfig::from_env`] for the variables read.
    ///
    /// # Errors
    ///
    /// Returns an error if no credentials are configured.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Create a client holding only an access token, against the default API URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_access_token(token: &str) -> Result<Self> {
        Self::new(ClientConfig::default().with_access_token(token))
    }

    /// Create a client from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        // Ensure base URL ends with /
        let base_url_str = if config.api_base_url.ends_with('/') {
            config.api_base_url.clone()
        } else {
            format!("{}/", config.api_base_url)
        };

        let base_url = Url::parse(&base_url_str)?;

        let mut builder = Client::builder()
            .user_agent(config.user_agent.as_str())
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout);

        if config.force_ipv4 {
            // Binding the unspecified IPv4 address rules out IPv6 peers.
            builder = builder.local_address(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        }

        let http = builder.build().map_err(BitlyError::Http)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            client_id: config.client_id,
            client_secret: config.client_secret,
            access_token: config.access_token,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The access token currently held, if any.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// The OAuth2 application id, if configured.
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    pub(crate) fn client_secret(&self) -> Option<&str> {
        self.client_secret.as_deref()
    }

    /// The single place the held token changes after construction.
    pub(crate) fn store_access_token(&mut self, token: String) {
        self.access_token = Some(token);
    }

    /// Execute one remote call.
    ///
    /// Adds `format=json` and the held access token (unless `params` already
    /// has one), renders booleans as `true`/`false`, then sends the
    /// parameters as a query string (GET) or form body (POST).
    ///
    /// With `expect_json` the body is decoded as the service's envelope and
    /// its `data` returned; otherwise the body comes back verbatim.
    ///
    /// # Errors
    ///
    /// - [`BitlyError::Transport`] if the HTTP status is not 200
    /// - [`BitlyError::Timeout`] / [`BitlyError::Http`] on network failure
    /// - [`BitlyError::Parse`] if a JSON body does not decode
    /// - [`BitlyError::Api`] if the envelope's `status_code` is not 200
    #[tracing::instrument(skip(self, params))]
    pub async fn call(
        &self,
        endpoint: &str,
        params: Option<Params>,
        use_http_post: bool,
        expect_json: bool,
    ) -> Result<Response> {
        let mut params = params.unwrap_or_default();
        params.insert("format", "json");
        if let Some(token) = &self.access_token {
            params.insert_if_absent("access_token", token.as_str());
        }
        params.normalize_booleans();

        let mut url = self.base_url.join(endpoint.trim_start_matches('/'))?;
        let encoded = query::encode(&params);

        let request = if use_http_post {
            self.http
                .post(url)
                .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(encoded)
        } else {
            url.set_query(Some(&encoded));
            self.http.get(url)
        };

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(status = status.as_u16(), bytes = body.len(), "bit.ly response");

        if status != StatusCode::OK {
            return Err(BitlyError::Transport {
                status_code: status.as_u16(),
                body,
            });
        }

        if !expect_json {
            return Ok(Response::Raw(body));
        }

        let envelope: Envelope = serde_json::from_str(&body)?;
        envelope.into_data().map(Response::Json)
    }

    /// Call a table endpoint and apply its projection.
    ///
    /// # Errors
    ///
    /// Everything [`call`](Self::call) can return, plus
    /// [`BitlyError::MalformedResponse`] when the projected field is missing.
    pub async fn invoke(&self, endpoint: &Endpoint, params: Params) -> Result<Value> {
        let data = self
            .call(
                endpoint.path,
                Some(params),
                endpoint.is_post(),
                endpoint.expects_json(),
            )
            .await?
            .into_json()?;
        endpoint.project(data)
    }

    /// Call a table endpoint whose body is not a JSON envelope.
    pub async fn invoke_raw(&self, endpoint: &Endpoint, params: Params) -> Result<String> {
        let response = self
            .call(endpoint.path, Some(params), endpoint.is_post(), false)
            .await?;
        Ok(response.into_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_debug() {
        let client = BitlyClient::new(
            ClientConfig::default()
                .with_access_token("test-token")
                .with_client_credentials("app", "shh"),
        )
        .unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("BitlyClient"));
        assert!(debug.contains("base_url"));
        // Secrets should not be in debug output
        assert!(!debug.contains("test-token"));
        assert!(!debug.contains("shh"));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client1 =
            BitlyClient::new(ClientConfig::default().with_base_url("https://api-ssl.bitly.com"))
                .unwrap();
        let client2 =
            BitlyClient::new(ClientConfig::default().with_base_url("https://api-ssl.bitly.com/"))
                .unwrap();
        assert_eq!(client1.base_url().as_str(), client2.base_url().as_str());
    }

    #[test]
    fn test_invalid_base_url() {
        let err = BitlyClient::new(ClientConfig::default().with_base_url("not a url")).unwrap_err();
        assert!(matches!(err, BitlyError::Url(_)));
    }

    #[test]
    fn test_force_ipv4_builds() {
        let client = BitlyClient::new(ClientConfig::default().with_force_ipv4(true));
        assert!(client.is_ok());
    }

    #[test]
    fn test_envelope_success() {
        let envelope: Envelope = serde_json::from_value(json!({
            "status_code": 200,
            "status_txt": "OK",
            "data": {"hash": "abc"}
        }))
        .unwrap();
        assert_eq!(envelope.into_data().unwrap(), json!({"hash": "abc"}));
    }

    #[test]
    fn test_envelope_string_status_code() {
        let envelope: Envelope = serde_json::from_value(json!({
            "status_code": "403",
            "status_txt": "RATE_LIMIT_EXCEEDED",
            "data": null
        }))
        .unwrap();
        match envelope.into_data().unwrap_err() {
            BitlyError::Api {
                status_code,
                message,
            } => {
                assert_eq!(status_code, 403);
                assert_eq!(message, "RATE_LIMIT_EXCEEDED");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_envelope_garbage_status_code() {
        let envelope: Envelope =
            serde_json::from_value(json!({"status_code": "oops", "data": {}})).unwrap();
        assert!(matches!(
            envelope.into_data().unwrap_err(),
            BitlyError::MalformedResponse(_)
        ));
    }

    #[test]
    fn test_response_into_json_rejects_raw() {
        assert!(Response::Raw("OK".into()).into_json().is_err());
        assert_eq!(Response::Raw("OK".into()).into_text(), "OK");
    }
}
