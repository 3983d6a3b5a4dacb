//! Route definitions for the `/vehicles` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{errors, reports, vehicles};
use crate::state::AppState;

/// Routes mounted at `/vehicles`. All require a bearer token.
///
/// ```text
/// POST   /              -> create
/// GET    /              -> list
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete (cascades to errors and shares)
/// GET    /{id}/errors   -> list logged DTC codes
/// POST   /{id}/report   -> share a report
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(vehicles::create).get(vehicles::list))
        .route(
            "/{id}",
            get(vehicles::get_by_id)
                .put(vehicles::update)
                .delete(vehicles::delete),
        )
        .route("/{id}/errors", get(errors::list_by_vehicle))
        .route("/{id}/report", post(reports::create_share))
}
