//! Route definitions for the diagnostic error log.

use axum::routing::post;
use axum::Router;

use crate::handlers::errors;
use crate::state::AppState;

/// Routes mounted at `/errors`.
///
/// ```text
/// POST / -> append a DTC batch (vehicle id in the body)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(errors::append))
}
