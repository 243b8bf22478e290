pub mod session;
pub mod values;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the API router.
///
/// - `POST /store/:value` — write the path segment into the caller's session
/// - `GET  /read`         — read it back (sentinel text when never stored)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/store/:value", post(values::store_value))
        .route("/read", get(values::read_value))
}
