//! Handlers for the diagnostic error log.
//!
//! DTC rows are append-only: batches accumulate across submissions and are
//! removed only by cascading vehicle deletion. Both operations resolve the
//! vehicle through the owner-scoped registry lookup first.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use taller_core::error::CoreError;
use taller_core::types::DbId;
use taller_core::validation::normalize_dtc_batch;
use taller_db::models::vehicle_error::VehicleError;
use taller_db::repositories::{VehicleErrorRepo, VehicleRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Request body for `POST /errors`.
#[derive(Debug, Deserialize)]
pub struct AppendErrorsRequest {
    pub vehicle_id: DbId,
    pub codigo_dtc: Vec<String>,
}

/// POST /api/v1/errors
///
/// Append a batch of DTC codes to an owned vehicle. Codes are trimmed and
/// blanks dropped; an empty or internally-duplicated batch is rejected
/// whole, and on success every code lands in the same transaction.
pub async fn append(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<AppendErrorsRequest>,
) -> AppResult<Json<MessageResponse>> {
    let codes = normalize_dtc_batch(&input.codigo_dtc)?;

    VehicleRepo::find_for_owner(&state.pool, user.user_id, input.vehicle_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Vehicle" }))?;

    let inserted = VehicleErrorRepo::append_batch(&state.pool, input.vehicle_id, &codes).await?;

    tracing::info!(vehicle_id = input.vehicle_id, inserted, "DTC batch appended");

    Ok(Json(MessageResponse {
        message: "Vehicle errors saved successfully",
    }))
}

/// GET /api/v1/vehicles/{id}/errors
///
/// List the logged DTC codes for an owned vehicle. A vehicle with no logged
/// codes answers 404, mirroring the long-standing client contract.
pub async fn list_by_vehicle(
    State(state): State<AppState>,
    user: AuthUser,
    Path(vehicle_id): Path<DbId>,
) -> AppResult<Json<Vec<VehicleError>>> {
    VehicleRepo::find_for_owner(&state.pool, user.user_id, vehicle_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Vehicle" }))?;

    let errores = VehicleErrorRepo::list_by_vehicle(&state.pool, vehicle_id).await?;

    if errores.is_empty() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Vehicle errors",
        }));
    }

    Ok(Json(errores))
}
