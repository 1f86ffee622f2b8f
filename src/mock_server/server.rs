//! Mock bit.ly API server.
//!
//! Provides an axum-based HTTP server that simulates the bit.ly API.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::fixtures::{DefaultScenario, Fixtures};
use super::handlers;
use super::state::MockState;

/// A mock bit.ly API server for testing.
///
/// The server runs in the background and can be used to test the bit.ly client
/// against a realistic API implementation.
pub struct MockServer {
    /// The URL where the server is listening.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Start a new mock server with default fixtures.
    ///
    /// The server listens on a random available port and returns immediately.
    /// Use `url()` to get the server's base URL.
    pub async fn start() -> Self {
        Self::with_state(Self::default_state()).await
    }

    /// Start a mock server with empty state.
    ///
    /// Useful when you want to control exactly what data is available.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Server error");
        });

        Self {
            url: format!("http://{}", addr),
            handle,
            state: shared_state,
        }
    }

    /// Get the base URL of the mock server.
    ///
    /// Use this URL as the base URL of a `BitlyClient` under test.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get access to the server's shared state.
    ///
    /// This allows modifying the mock data during a test.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        self.state.clone()
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task. It's safe to call multiple times.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    /// Create the default state with common test fixtures.
    fn default_state() -> MockState {
        let scenario = Fixtures::default_scenario();
        Self::state_from_scenario(scenario)
    }

    /// Create state from a scenario.
    fn state_from_scenario(scenario: DefaultScenario) -> MockState {
        let mut state = MockState::new();

        for link in scenario.links {
            state.links.insert(link.hash.clone(), link);
        }

        for bundle in scenario.bundles {
            state.bundles.insert(bundle.bundle_link.clone(), bundle);
        }

        for (code, token) in scenario.auth_codes {
            state.auth_codes.insert(code, token);
        }

        state
    }

    /// Create the axum router with all routes.
    fn create_router(state: Arc<RwLock<MockState>>) -> Router {
        Router::new()
            // OAuth2
            .route("/oauth/access_token", post(handlers::access_token))
            // Link routes
            .route("/v3/shorten", get(handlers::shorten))
            .route("/v3/expand", get(handlers::expand))
            .route("/v3/info", get(handlers::info))
            .route("/v3/link/clicks", get(handlers::link_clicks))
            // User routes
            .route("/v3/user/info", get(handlers::user_info))
            .route("/v3/user/link_history", get(handlers::user_link_history))
            // Bundle routes
            .route("/v3/bundle/create", get(handlers::bundle_create))
            .route("/v3/bundle/contents", get(handlers::bundle_contents))
            .route("/v3/bundle/link_add", get(handlers::bundle_link_add))
            .route("/v3/bundle/archive", get(handlers::bundle_archive))
            // Health check
            .route("/health", get(health_check))
            .with_state(state)
    }
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}
