pub mod auth;
pub mod errors;
pub mod health;
pub mod imagery;
pub mod reports;
pub mod vehicles;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register              register (public)
/// /auth/login                 login (public)
///
/// /vehicles                   list, create
/// /vehicles/{id}              get, update, delete
/// /vehicles/{id}/errors       list logged DTC codes
/// /vehicles/{id}/report       share a report (POST)
///
/// /errors                     append DTC batch (POST)
///
/// /report/{token}             resolve a shared report (public)
/// /car-imagery                image lookup proxy (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (register, login).
        .nest("/auth", auth::router())
        // Vehicle registry (all owner-scoped, bearer-protected).
        .nest("/vehicles", vehicles::router())
        // Diagnostic error log.
        .nest("/errors", errors::router())
        // Anonymous shared-report read path.
        .merge(reports::router())
        // External image lookup proxy.
        .merge(imagery::router())
}
