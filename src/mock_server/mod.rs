//! Mock bit.ly API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the bit.ly API
//! for integration and end-to-end testing. Unlike wiremock which mocks at the
//! HTTP level per-test, this server maintains state across requests, enabling
//! realistic workflow testing (shorten then expand, create a bundle then
//! archive it, exchange a code then make authenticated calls).
//!
//! # Example
//!
//! ```ignore
//! use bitlyapi::mock_server::MockServer;
//! use bitlyapi::{BitlyClient, ClientConfig};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = BitlyClient::new(
//!         ClientConfig::default().with_access_token("t").with_base_url(server.url()),
//!     ).unwrap();
//!
//!     // Server comes with default fixtures
//!     let expanded = client.expand(Some("http://bit.ly/ze6poY"), None).await.unwrap();
//!     assert_eq!(expanded["long_url"], "http://example.com/");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures};
pub use server::MockServer;
pub use state::{MockBundle, MockLink, MockState};
