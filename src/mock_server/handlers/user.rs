//! User endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Response,
};
use serde_json::json;
use tokio::sync::RwLock;

use super::envelope::{check_token, ok, param, Pairs};
use crate::mock_server::state::MockState;

/// GET /v3/user/info
pub async fn user_info(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(pairs): Query<Pairs>,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = check_token(&state, &pairs) {
        return rejection;
    }

    let login = param(&pairs, "login").unwrap_or(&state.login);
    ok(json!({
        "login": login,
        "display_name": login,
        "is_enterprise": false
    }))
}

/// GET /v3/user/link_history
pub async fn user_link_history(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(pairs): Query<Pairs>,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = check_token(&state, &pairs) {
        return rejection;
    }

    let limit = param(&pairs, "limit")
        .and_then(|v| v.parse().ok())
        .unwrap_or(50);
    let offset = param(&pairs, "offset")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);

    let all = state.history();
    let history: Vec<_> = all
        .iter()
        .skip(offset)
        .take(limit)
        .map(|link| {
            json!({
                "link": state.short_url(&link.hash),
                "long_url": link.long_url,
                "title": link.title,
                "created_at": link.created_at,
                "archived": false,
                "private": false
            })
        })
        .collect();

    ok(json!({
        "link_history": history,
        "result_count": all.len()
    }))
}
