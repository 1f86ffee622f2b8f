//! Response envelope and request parameter helpers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::mock_server::state::MockState;

/// Request parameters in wire order. Repeated keys appear repeatedly.
pub type Pairs = Vec<(String, String)>;

/// First value for `key`.
pub fn param<'a>(pairs: &'a Pairs, key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .filter(|v| !v.is_empty())
}

/// Successful envelope around `data`.
pub fn ok(data: Value) -> Response {
    (
        StatusCode::OK,
        Json(json!({
            "status_code": 200,
            "status_txt": "OK",
            "data": data
        })),
    )
        .into_response()
}

/// Failed envelope. The HTTP status stays 200, as the real service does.
pub fn fail(status_code: i64, status_txt: &str) -> Response {
    (
        StatusCode::OK,
        Json(json!({
            "status_code": status_code,
            "status_txt": status_txt,
            "data": null
        })),
    )
        .into_response()
}

/// Reject the request if the state demands a token the request lacks.
pub fn check_token(state: &MockState, pairs: &Pairs) -> Result<(), Response> {
    match &state.required_token {
        Some(required) if param(pairs, "access_token") != Some(required.as_str()) => {
            Err(fail(500, "INVALID_ARG_ACCESS_TOKEN"))
        }
        _ => Ok(()),
    }
}
