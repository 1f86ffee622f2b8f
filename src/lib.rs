//! bit.ly API client library.
//!
//! A Rust library for the bit.ly link-shortening and analytics API. Every
//! operation goes through a single request pipeline on [`BitlyClient`]
//! that adds authentication, encodes parameters, sends the request, and
//! unwraps the service's `{status_code, status_txt, data}` envelope.
//!
//! # Quick Start
//!
//! ```no_run
//! use bitlyapi::{BitlyClient, MetricsQuery, Unit};
//!
//! #[tokio::main]
//! async fn main() -> bitlyapi::Result<()> {
//!     // Create client from environment variables
//!     let client = BitlyClient::from_env()?;
//!
//!     // Shorten a URL
//!     let link = client.shorten("https://example.com/article", None).await?;
//!     println!("Short link: {}", link.url);
//!
//!     // Expand it again
//!     let expanded = client.expand(Some(&link.url), None).await?;
//!     println!("Long URL: {}", expanded["long_url"]);
//!
//!     // Daily clicks for the last week
//!     let query = MetricsQuery {
//!         unit: Some(Unit::Day),
//!         units: Some(7),
//!         ..Default::default()
//!     };
//!     let clicks = client.link_clicks(&link.url, &query).await?;
//!     println!("Clicks: {clicks}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! [`BitlyError::kind`] separates the three failure domains:
//!
//! - [`ErrorKind::Usage`] - the call was rejected before sending anything
//! - [`ErrorKind::Transport`] - non-200 HTTP status, timeout, or network failure
//! - [`ErrorKind::Application`] - the envelope's `status_code` was not 200
//!
//! Nothing is retried.
//!
//! # Configuration
//!
//! [`BitlyClient::from_env`] reads:
//!
//! - `BITLY_ACCESS_TOKEN` - access token
//! - `BITLY_CLIENT_ID` / `BITLY_CLIENT_SECRET` - OAuth2 application credentials
//! - `BITLY_API_URL` (optional) - Base URL (defaults to `https://api-ssl.bitly.com/`)
//! - `BITLY_TIMEOUT_SECS`, `BITLY_CONNECT_TIMEOUT_SECS`, `BITLY_FORCE_IPV4` (optional)

mod api;
mod auth;
mod client;
mod config;
pub mod endpoints;
mod error;
mod models;
mod output;
pub mod query;

pub mod cli;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use auth::AUTHORIZE_URL;
pub use client::{BitlyClient, Response};
pub use config::{ClientConfig, DEFAULT_API_URL, USER_AGENT};
pub use endpoints::Endpoint;
pub use error::{BitlyError, ErrorKind, Result};
pub use output::PrettyPrint;
pub use query::{ParamValue, Params, Scalar};

// Re-export models
pub use models::{
    // Link types
    HistoryQuery,
    LinkEdit,
    LinkSave,
    ShortenedLink,
    // Metrics types
    MetricsQuery,
    Unit,
    DEFAULT_TIMEZONE,
    LINK_METRICS_LIMIT,
    USER_METRICS_LIMIT,
    // Bundle types
    BundleEdit,
    NewBundle,
    // Search types
    SearchQuery,
    DEFAULT_SEARCH_LIMIT,
};
