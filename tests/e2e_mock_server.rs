//! E2E tests using the mock bit.ly server.
//!
//! These tests exercise full workflows against the mock server,
//! testing realistic scenarios rather than individual endpoints.

#![cfg(feature = "test-server")]

use bitlyapi::mock_server::{Fixtures, MockServer, MockState};
use bitlyapi::{BitlyClient, BitlyError, ClientConfig, HistoryQuery, MetricsQuery, NewBundle};

fn client_for(server: &MockServer) -> BitlyClient {
    BitlyClient::new(
        ClientConfig::default()
            .with_access_token("test-token")
            .with_base_url(server.url()),
    )
    .unwrap()
}

// =============================================================================
// Server Lifecycle Tests
// =============================================================================

#[tokio::test]
async fn test_server_starts_on_random_port() {
    let server1 = MockServer::start().await;
    let server2 = MockServer::start().await;

    assert_ne!(server1.url(), server2.url());

    server1.shutdown().await;
    server2.shutdown().await;
}

#[tokio::test]
async fn test_server_shutdown_is_clean() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    server.shutdown().await;

    // After shutdown the call fails at the network layer
    let err = client.user_info(None, None).await.unwrap_err();
    assert!(matches!(err, BitlyError::Http(_)), "got {err:?}");
}

// =============================================================================
// Link Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_shorten_then_expand_workflow() {
    let server = MockServer::start_empty().await;
    let client = client_for(&server);

    // Step 1: Shorten a new URL
    let link = client
        .shorten("https://docs.rs/", None)
        .await
        .expect("Failed to shorten");
    assert!(link.new_hash);

    // Step 2: Shortening again reuses the link
    let again = client
        .shorten("https://docs.rs/", None)
        .await
        .expect("Failed to shorten");
    assert!(!again.new_hash);
    assert_eq!(again.hash, link.hash);

    // Step 3: Expand by hash
    let expanded = client
        .expand(None, Some(&link.hash))
        .await
        .expect("Failed to expand");
    assert_eq!(expanded["long_url"], "https://docs.rs/");

    server.shutdown().await;
}

#[tokio::test]
async fn test_info_and_clicks_for_fixture_link() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let info = client
        .info(Some("http://bit.ly/ze6poY"), None, None)
        .await
        .expect("Failed to get info");
    assert_eq!(info["title"], "Example Domain");
    assert_eq!(info["created_by"], "mockuser");

    let clicks = client
        .link_clicks("http://bit.ly/ze6poY", &MetricsQuery::default())
        .await
        .expect("Failed to get clicks");
    assert_eq!(clicks[0]["clicks"], 42);

    server.shutdown().await;
}

#[tokio::test]
async fn test_clicks_for_unknown_link_is_application_error() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = client
        .link_clicks("http://bit.ly/nope", &MetricsQuery::default())
        .await
        .unwrap_err();

    assert!(matches!(err, BitlyError::Api { status_code: 404, .. }));

    server.shutdown().await;
}

#[tokio::test]
async fn test_history_is_newest_first_and_paged() {
    let state = MockState::new()
        .with_link(Fixtures::minimal_link("old", "http://old.example/"))
        .with_link({
            let mut link = Fixtures::minimal_link("new", "http://new.example/");
            link.created_at += 60;
            link
        });
    let server = MockServer::with_state(state).await;
    let client = client_for(&server);

    let query = HistoryQuery {
        limit: Some(1),
        ..Default::default()
    };
    let page = client
        .user_link_history(&query)
        .await
        .expect("Failed to list history");
    assert_eq!(page.as_array().map(Vec::len), Some(1));
    assert_eq!(page[0]["long_url"], "http://new.example/");

    let query = HistoryQuery {
        limit: Some(1),
        offset: Some(1),
        ..Default::default()
    };
    let page = client.user_link_history(&query).await.unwrap();
    assert_eq!(page[0]["long_url"], "http://old.example/");

    server.shutdown().await;
}

// =============================================================================
// Bundle Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_bundle_create_add_archive_workflow() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    // Step 1: Create
    let bundle = client
        .bundle_create(&NewBundle {
            title: Some("Reading".into()),
            ..Default::default()
        })
        .await
        .expect("Failed to create bundle");
    let bundle_link = bundle["bundle_link"]
        .as_str()
        .expect("bundle_link missing")
        .to_string();
    assert_eq!(bundle["title"], "Reading");

    // Step 2: Add a link
    let bundle = client
        .bundle_link_add(&bundle_link, "http://bit.ly/ze6poY", None)
        .await
        .expect("Failed to add link");
    assert_eq!(bundle["links"][0], "http://bit.ly/ze6poY");

    // Step 3: Contents reflect the change
    let contents = client
        .bundle_contents(&bundle_link, None)
        .await
        .expect("Failed to get contents");
    assert_eq!(contents["links"].as_array().map(Vec::len), Some(1));

    // Step 4: Archive
    assert!(client.bundle_archive(&bundle_link).await.unwrap());

    let state = server.state();
    assert!(state.read().await.bundles[&bundle_link].archived);

    server.shutdown().await;
}

#[tokio::test]
async fn test_archive_unknown_bundle_is_transport_error() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = client
        .bundle_archive("http://bitly.com/bundles/nobody/0")
        .await
        .unwrap_err();

    assert!(matches!(err, BitlyError::Transport { status_code: 404, .. }));

    server.shutdown().await;
}

// =============================================================================
// OAuth Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_exchange_then_authenticated_call() {
    let state = MockState::new()
        .with_auth_code("test-code", "test-token")
        .with_required_token("test-token");
    let server = MockServer::with_state(state).await;

    let mut client = BitlyClient::new(
        ClientConfig::default()
            .with_client_credentials("id", "secret")
            .with_base_url(server.url()),
    )
    .unwrap();

    // Unauthenticated call is rejected by the envelope
    let err = client.user_info(None, None).await.unwrap_err();
    assert!(matches!(err, BitlyError::Api { status_code: 500, .. }));

    let token = client
        .exchange_authorization_code("test-code", "https://cb")
        .await
        .expect("Failed to exchange code");
    assert_eq!(token, "test-token");

    let info = client
        .user_info(None, None)
        .await
        .expect("Failed to get user info");
    assert_eq!(info["login"], "mockuser");

    server.shutdown().await;
}

#[tokio::test]
async fn test_exchange_with_unknown_code() {
    let server = MockServer::start().await;

    let mut client = BitlyClient::new(
        ClientConfig::default()
            .with_client_credentials("id", "secret")
            .with_base_url(server.url()),
    )
    .unwrap();

    let err = client
        .exchange_authorization_code("wrong", "https://cb")
        .await
        .unwrap_err();

    assert!(matches!(err, BitlyError::Transport { status_code: 401, .. }));
    assert_eq!(client.access_token(), None);

    server.shutdown().await;
}
