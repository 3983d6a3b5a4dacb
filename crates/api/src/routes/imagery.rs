//! Route definition for the external image lookup proxy.

use axum::routing::get;
use axum::Router;

use crate::handlers::imagery;
use crate::state::AppState;

/// Public image lookup route.
///
/// ```text
/// GET /car-imagery?search_term=... -> lookup
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/car-imagery", get(imagery::lookup))
}
