//! Typed endpoint tests.
//!
//! Check the parameters each method sends and how its response is projected.

use bitlyapi::{
    BitlyClient, BitlyError, ClientConfig, HistoryQuery, LinkEdit, MetricsQuery, SearchQuery,
    Unit,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> BitlyClient {
    BitlyClient::new(
        ClientConfig::default()
            .with_access_token("test-token")
            .with_base_url(server.uri()),
    )
    .unwrap()
}

fn ok(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "status_code": 200,
        "status_txt": "OK",
        "data": data
    }))
}

// =============================================================================
// Links
// =============================================================================

#[tokio::test]
async fn test_expand_returns_first_entry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/expand"))
        .and(query_param("shortUrl", "http://bit.ly/x"))
        .respond_with(ok(json!({"expand": [{"long_url": "http://example.com"}]})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let expanded = client(&mock_server)
        .expand(Some("http://bit.ly/x"), None)
        .await
        .unwrap();

    assert_eq!(expanded, json!({"long_url": "http://example.com"}));
}

#[tokio::test]
async fn test_expand_without_identifier_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ok(json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);

    let err = client.expand(None, None).await.unwrap_err();
    assert!(matches!(err, BitlyError::Usage(_)));

    let err = client.info(Some(""), None, None).await.unwrap_err();
    assert!(matches!(err, BitlyError::Usage(_)));

    let err = client.clicks(None, None).await.unwrap_err();
    assert!(matches!(err, BitlyError::Usage(_)));
}

#[tokio::test]
async fn test_expand_with_empty_list_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/expand"))
        .respond_with(ok(json!({"expand": []})))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .expand(None, Some("ze6poY"))
        .await
        .unwrap_err();

    assert!(matches!(err, BitlyError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_info_by_hash() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/info"))
        .and(query_param("hash", "ze6poY"))
        .and(query_param("expand_user", "true"))
        .and(query_param_is_missing("shortUrl"))
        .respond_with(ok(json!({"info": [{"hash": "ze6poY", "title": "Example"}]})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let info = client(&mock_server)
        .info(None, Some("ze6poY"), Some(true))
        .await
        .unwrap();

    assert_eq!(info["title"], "Example");
}

#[tokio::test]
async fn test_shorten() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/shorten"))
        .and(query_param("longUrl", "http://example.com/"))
        .and(query_param("domain", "j.mp"))
        .respond_with(ok(json!({
            "url": "http://j.mp/ze6poY",
            "hash": "ze6poY",
            "global_hash": "900913",
            "long_url": "http://example.com/",
            "new_hash": 1
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let link = client(&mock_server)
        .shorten("http://example.com/", Some("j.mp"))
        .await
        .unwrap();

    assert_eq!(link.url, "http://j.mp/ze6poY");
    assert_eq!(link.global_hash, "900913");
    assert!(link.new_hash);
}

#[tokio::test]
async fn test_link_lookup_returns_first_match() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/link/lookup"))
        .and(query_param("url", "http://example.com/"))
        .respond_with(ok(json!({
            "link_lookup": [{"url": "http://example.com/", "aggregate_link": "http://bit.ly/2V6CFi"}]
        })))
        .mount(&mock_server)
        .await;

    let lookup = client(&mock_server)
        .link_lookup("http://example.com/")
        .await
        .unwrap();

    assert_eq!(lookup["aggregate_link"], "http://bit.ly/2V6CFi");
}

// =============================================================================
// Metrics
// =============================================================================

#[tokio::test]
async fn test_link_clicks_sends_defaults() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/link/clicks"))
        .and(query_param("link", "http://bit.ly/x"))
        .and(query_param("unit", "day"))
        .and(query_param("units", "-1"))
        .and(query_param("timezone", "America/New_York"))
        .and(query_param("limit", "100"))
        .and(query_param_is_missing("rollup"))
        .respond_with(ok(json!({"link_clicks": [{"dt": 1360990800, "clicks": 3}]})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let clicks = client(&mock_server)
        .link_clicks("http://bit.ly/x", &MetricsQuery::default())
        .await
        .unwrap();

    assert_eq!(clicks[0]["clicks"], 3);
}

#[tokio::test]
async fn test_user_clicks_uses_user_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/user/clicks"))
        .and(query_param("unit", "hour"))
        .and(query_param("rollup", "true"))
        .and(query_param("limit", "1000"))
        .respond_with(ok(json!({"user_clicks": 17})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let query = MetricsQuery {
        unit: Some(Unit::Hour),
        rollup: Some(true),
        ..Default::default()
    };
    let clicks = client(&mock_server).user_clicks(&query).await.unwrap();

    assert_eq!(clicks["user_clicks"], 17);
}

// =============================================================================
// User
// =============================================================================

#[tokio::test]
async fn test_user_link_edit_names_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/user/link_edit"))
        .and(query_param("link", "http://bit.ly/x"))
        .and(query_param("title", "New title"))
        .and(query_param("private", "false"))
        .and(query_param("edit", "title,private"))
        .respond_with(ok(json!({"link_edit": {"link": "http://bit.ly/x"}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let edit = LinkEdit {
        title: Some("New title".into()),
        private: Some(false),
        ..Default::default()
    };
    let edited = client(&mock_server)
        .user_link_edit("http://bit.ly/x", &edit)
        .await
        .unwrap();

    assert_eq!(edited["link"], "http://bit.ly/x");
}

#[tokio::test]
async fn test_user_link_edit_rejects_empty_edit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ok(json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .user_link_edit("http://bit.ly/x", &LinkEdit::default())
        .await
        .unwrap_err();

    assert!(matches!(err, BitlyError::Usage(_)));
}

#[tokio::test]
async fn test_user_link_history() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/user/link_history"))
        .and(query_param("limit", "2"))
        .respond_with(ok(json!({
            "link_history": [
                {"link": "http://bit.ly/a", "long_url": "http://a.example/"},
                {"link": "http://bit.ly/b", "long_url": "http://b.example/"}
            ],
            "result_count": 2
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let query = HistoryQuery {
        limit: Some(2),
        ..Default::default()
    };
    let history = client(&mock_server).user_link_history(&query).await.unwrap();

    assert_eq!(history.as_array().map(Vec::len), Some(2));
}

// =============================================================================
// Domains, bundles, search
// =============================================================================

#[tokio::test]
async fn test_pro_domain() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/bitly_pro_domain"))
        .and(query_param("domain", "nyti.ms"))
        .respond_with(ok(json!({"domain": "nyti.ms", "bitly_pro_domain": true})))
        .mount(&mock_server)
        .await;

    assert!(client(&mock_server).pro_domain("nyti.ms").await.unwrap());
}

#[tokio::test]
async fn test_bundle_archive_reads_raw_ok() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/bundle/archive"))
        .and(query_param("bundle_link", "http://bitly.com/bundles/me/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let archived = client(&mock_server)
        .bundle_archive("http://bitly.com/bundles/me/1")
        .await
        .unwrap();

    assert!(archived);
}

#[tokio::test]
async fn test_bundle_link_edit_requires_a_change() {
    let mock_server = MockServer::start().await;

    let err = client(&mock_server)
        .bundle_link_edit("http://bitly.com/bundles/me/1", "http://bit.ly/x", None, None)
        .await
        .unwrap_err();

    assert!(matches!(err, BitlyError::Usage(_)));
}

#[tokio::test]
async fn test_search_joins_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/search"))
        .and(query_param("query", "rust"))
        .and(query_param("limit", "10"))
        .and(query_param("fields", "aggregate_link,title"))
        .respond_with(ok(json!({"results": [{"title": "Rust"}]})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let query = SearchQuery {
        fields: vec!["aggregate_link".into(), "title".into()],
        ..SearchQuery::new("rust")
    };
    let results = client(&mock_server).search(&query).await.unwrap();

    assert_eq!(results[0]["title"], "Rust");
}

#[tokio::test]
async fn test_application_error_through_typed_method() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/shorten"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status_code": 500,
            "status_txt": "INVALID_URI",
            "data": []
        })))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .shorten("not a url", None)
        .await
        .unwrap_err();

    assert!(matches!(err, BitlyError::Api { status_code: 500, ref message } if message == "INVALID_URI"));
}
