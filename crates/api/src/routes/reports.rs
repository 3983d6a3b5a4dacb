//! Route definitions for the anonymous shared-report read path.

use axum::routing::get;
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

/// Public report route; the share token is the only credential.
///
/// ```text
/// GET /report/{token} -> resolve_share
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/report/{token}", get(reports::resolve_share))
}
