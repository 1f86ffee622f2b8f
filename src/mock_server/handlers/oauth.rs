//! OAuth2 token endpoint handler.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Form,
};
use tokio::sync::RwLock;

use super::envelope::{param, Pairs};
use crate::mock_server::state::MockState;

/// POST /oauth/access_token
///
/// Replies with form-encoded data, not an envelope.
pub async fn access_token(
    State(state): State<Arc<RwLock<MockState>>>,
    Form(pairs): Form<Pairs>,
) -> Response {
    let state = state.read().await;

    if param(&pairs, "client_id").is_none() || param(&pairs, "client_secret").is_none() {
        return (StatusCode::UNAUTHORIZED, "INVALID_CLIENT").into_response();
    }

    let token = param(&pairs, "code").and_then(|code| state.auth_codes.get(code));
    match token {
        Some(token) => {
            let body = format!(
                "access_token={}&login={}&token_type=bearer",
                urlencoding::encode(token),
                urlencoding::encode(&state.login)
            );
            (
                StatusCode::OK,
                [("content-type", "application/x-www-form-urlencoded")],
                body,
            )
                .into_response()
        }
        None => (StatusCode::UNAUTHORIZED, "INVALID_CODE").into_response(),
    }
}
