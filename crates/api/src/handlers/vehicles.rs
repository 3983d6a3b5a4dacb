//! Handlers for the `/vehicles` resource.
//!
//! Every operation is scoped to the authenticated owner: a vehicle that
//! exists but belongs to someone else answers exactly like one that does
//! not exist.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use taller_core::error::CoreError;
use taller_core::types::DbId;
use taller_core::validation::{normalize_vin, validate_revision};
use taller_db::models::vehicle::{CreateVehicle, UpdateVehicle, Vehicle};
use taller_db::repositories::VehicleRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response for a successful vehicle registration.
#[derive(Debug, Serialize)]
pub struct CreatedVehicleResponse {
    pub message: &'static str,
    pub id: DbId,
}

/// Response for `GET /vehicles`.
#[derive(Debug, Serialize)]
pub struct VehicleListResponse {
    pub vehiculos: Vec<Vehicle>,
}

/// Response for a successful cascading deletion.
#[derive(Debug, Serialize)]
pub struct DeletedVehicleResponse {
    pub message: &'static str,
    /// Error and shared-report rows removed alongside the vehicle.
    pub deleted_children_count: u64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/vehicles
///
/// Register a vehicle for the authenticated user. The VIN is trimmed and
/// must be exactly 17 characters; `revision` must be a JSON object. The
/// duplicate-VIN pre-check gives a friendly answer in the common case, and
/// `uq_vehicles_vin` settles any insert race the same way.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(mut input): Json<CreateVehicle>,
) -> AppResult<Json<CreatedVehicleResponse>> {
    input.vin = normalize_vin(&input.vin)?;
    validate_revision(&input.revision)?;

    if VehicleRepo::vin_exists(&state.pool, &input.vin).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "VIN is already registered to another vehicle".into(),
        )));
    }

    let vehicle = VehicleRepo::create(&state.pool, user.user_id, &input).await?;

    tracing::info!(vehicle_id = vehicle.id, owner_id = user.user_id, "Vehicle registered");

    Ok(Json(CreatedVehicleResponse {
        message: "Vehicle registered successfully",
        id: vehicle.id,
    }))
}

/// GET /api/v1/vehicles
///
/// List the authenticated user's vehicles. An empty garage is an empty
/// list, not an error.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<VehicleListResponse>> {
    let vehiculos = VehicleRepo::list_by_owner(&state.pool, user.user_id).await?;
    Ok(Json(VehicleListResponse { vehiculos }))
}

/// GET /api/v1/vehicles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vehicle>> {
    let vehicle = VehicleRepo::find_for_owner(&state.pool, user.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Vehicle" }))?;
    Ok(Json(vehicle))
}

/// PUT /api/v1/vehicles/{id}
///
/// Replace all scalar fields and the VIN. A changed VIN is re-checked
/// against every *other* vehicle; keeping the current VIN is always
/// allowed. The `revision` payload is not part of the edit surface.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateVehicle>,
) -> AppResult<Json<MessageResponse>> {
    input.vin = normalize_vin(&input.vin)?;

    let existing = VehicleRepo::find_for_owner(&state.pool, user.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Vehicle" }))?;

    if existing.vin != input.vin
        && VehicleRepo::vin_taken_by_other(&state.pool, &input.vin, id).await?
    {
        return Err(AppError::Core(CoreError::Conflict(
            "VIN is already registered to another vehicle".into(),
        )));
    }

    VehicleRepo::update_for_owner(&state.pool, user.user_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Vehicle" }))?;

    Ok(Json(MessageResponse {
        message: "Vehicle updated successfully",
    }))
}

/// DELETE /api/v1/vehicles/{id}
///
/// Delete the vehicle and everything hanging off it -- logged error codes
/// and shared-report tokens -- in one transaction.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeletedVehicleResponse>> {
    let cascade = VehicleRepo::delete_cascading(&state.pool, user.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Vehicle" }))?;

    tracing::info!(
        vehicle_id = id,
        owner_id = user.user_id,
        children = cascade.children_deleted(),
        "Vehicle deleted"
    );

    Ok(Json(DeletedVehicleResponse {
        message: "Vehicle deleted successfully",
        deleted_children_count: cascade.children_deleted(),
    }))
}
