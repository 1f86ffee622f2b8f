//! Bundle endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tokio::sync::RwLock;

use super::envelope::{check_token, fail, ok, param, Pairs};
use crate::mock_server::state::MockState;

/// GET /v3/bundle/create
pub async fn bundle_create(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(pairs): Query<Pairs>,
) -> Response {
    let mut state = state.write().await;
    if let Err(rejection) = check_token(&state, &pairs) {
        return rejection;
    }

    let title = param(&pairs, "title").unwrap_or_default();
    let description = param(&pairs, "description").unwrap_or_default();
    let private = param(&pairs, "private") == Some("true");

    let bundle = state.create_bundle(title, description, private);
    ok(json!({ "bundle": bundle }))
}

/// GET /v3/bundle/contents
pub async fn bundle_contents(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(pairs): Query<Pairs>,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = check_token(&state, &pairs) {
        return rejection;
    }

    match param(&pairs, "bundle_link").and_then(|link| state.bundles.get(link)) {
        Some(bundle) => ok(json!({ "bundle": bundle })),
        None => fail(404, "NOT_FOUND"),
    }
}

/// GET /v3/bundle/link_add
pub async fn bundle_link_add(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(pairs): Query<Pairs>,
) -> Response {
    let mut state = state.write().await;
    if let Err(rejection) = check_token(&state, &pairs) {
        return rejection;
    }

    let (Some(bundle_link), Some(link)) = (param(&pairs, "bundle_link"), param(&pairs, "link"))
    else {
        return fail(500, "MISSING_ARG_BUNDLE_LINK");
    };

    match state.add_bundle_link(bundle_link, link) {
        Some(bundle) => ok(json!({ "bundle": bundle })),
        None => fail(404, "NOT_FOUND"),
    }
}

/// GET /v3/bundle/archive
///
/// Answers with a bare `OK` body instead of an envelope.
pub async fn bundle_archive(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(pairs): Query<Pairs>,
) -> Response {
    let mut state = state.write().await;
    if let Err(rejection) = check_token(&state, &pairs) {
        return rejection;
    }

    match param(&pairs, "bundle_link") {
        Some(link) if state.archive_bundle(link) => (StatusCode::OK, "OK").into_response(),
        _ => (StatusCode::NOT_FOUND, "NOT_FOUND").into_response(),
    }
}
