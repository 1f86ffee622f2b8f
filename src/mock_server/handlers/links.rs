//! Link endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Response,
};
use serde_json::json;
use tokio::sync::RwLock;

use super::envelope::{check_token, fail, ok, param, Pairs};
use crate::mock_server::state::MockState;

/// GET /v3/shorten
pub async fn shorten(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(pairs): Query<Pairs>,
) -> Response {
    let mut state = state.write().await;
    if let Err(rejection) = check_token(&state, &pairs) {
        return rejection;
    }

    let Some(long_url) = param(&pairs, "longUrl") else {
        return fail(500, "MISSING_ARG_URI");
    };

    let (link, created) = state.shorten(long_url, chrono::Utc::now().timestamp());
    ok(json!({
        "url": state.short_url(&link.hash),
        "hash": link.hash,
        "global_hash": link.hash,
        "long_url": link.long_url,
        "new_hash": i32::from(created)
    }))
}

/// GET /v3/expand
pub async fn expand(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(pairs): Query<Pairs>,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = check_token(&state, &pairs) {
        return rejection;
    }

    let short_url = param(&pairs, "shortUrl");
    let hash = param(&pairs, "hash");
    if short_url.is_none() && hash.is_none() {
        return fail(500, "MISSING_ARG_SHORTURL_OR_HASH");
    }

    let entry = match state.resolve(short_url, hash) {
        Some(link) => json!({
            "short_url": state.short_url(&link.hash),
            "long_url": link.long_url,
            "user_hash": link.hash,
            "global_hash": link.hash
        }),
        None => json!({
            "short_url": short_url,
            "hash": hash,
            "error": "NOT_FOUND"
        }),
    };
    ok(json!({ "expand": [entry] }))
}

/// GET /v3/info
pub async fn info(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(pairs): Query<Pairs>,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = check_token(&state, &pairs) {
        return rejection;
    }

    match state.resolve(param(&pairs, "shortUrl"), param(&pairs, "hash")) {
        Some(link) => ok(json!({
            "info": [{
                "short_url": state.short_url(&link.hash),
                "hash": link.hash,
                "title": link.title,
                "created_by": state.login,
                "created_at": link.created_at
            }]
        })),
        None => ok(json!({ "info": [{ "error": "NOT_FOUND" }] })),
    }
}

/// GET /v3/link/clicks
pub async fn link_clicks(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(pairs): Query<Pairs>,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = check_token(&state, &pairs) {
        return rejection;
    }

    let Some(link) = param(&pairs, "link") else {
        return fail(500, "MISSING_ARG_LINK");
    };

    match state.resolve(Some(link), None) {
        Some(found) => ok(json!({
            "link_clicks": [{ "dt": found.created_at, "clicks": found.clicks }],
            "unit": param(&pairs, "unit").unwrap_or("day"),
            "units": param(&pairs, "units").unwrap_or("-1"),
            "tz_offset": -4
        })),
        None => fail(404, "NOT_FOUND"),
    }
}
