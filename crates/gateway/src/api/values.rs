//! Value store/read endpoints.
//!
//! - `POST /store/:value` — overwrite the session's stored value
//! - `GET  /read`         — read it back, sentinel text when unset

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Json};
use serde::Serialize;

use crate::api::session::SessionHandle;
use crate::state::AppState;

/// Sentinel returned by `/read` when the session never stored a value.
const NO_VALUE_STORED: &str = "No value stored";

#[derive(Serialize)]
pub struct StoreResponse {
    detail: &'static str,
}

#[derive(Serialize)]
pub struct ReadResponse {
    stored_value: String,
}

/// `POST /store/:value`
///
/// Overwrites the session's value with the (percent-decoded) path segment.
/// Every write re-issues the session cookie, establishing it when absent
/// and sliding its Max-Age otherwise.
pub async fn store_value(
    State(state): State<AppState>,
    session: SessionHandle,
    Path(value): Path<String>,
) -> impl IntoResponse {
    state.sessions.set_value(&session.session_id, value);

    (
        [(header::SET_COOKIE, session.into_set_cookie())],
        Json(StoreResponse {
            detail: "Value stored in session",
        }),
    )
}

/// `GET /read`
///
/// Read-only: no cookie is set here, so a cookie-less read leaves no trace
/// server-side (the store is only touched by writes).
pub async fn read_value(
    State(state): State<AppState>,
    session: SessionHandle,
) -> Json<ReadResponse> {
    let stored_value = state
        .sessions
        .value(&session.session_id)
        .unwrap_or_else(|| NO_VALUE_STORED.to_owned());

    Json(ReadResponse { stored_value })
}
