//! Vehicle entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taller_core::types::DbId;

/// Full vehicle row from the `vehicles` table.
///
/// `revision` is the free-form inspection payload, stored as native JSONB
/// rather than a stringified blob so structure survives the round trip.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vehicle {
    pub id: DbId,
    pub marca: String,
    pub modelo: String,
    pub year: i32,
    pub rpm: i32,
    pub velocidad: i32,
    pub vin: String,
    pub revision: serde_json::Value,
    pub owner_id: DbId,
}

/// DTO for registering a vehicle.
///
/// Numeric fields are plain `i32`, so a legitimate zero (engine off, parked)
/// deserializes fine; only an absent field is rejected.
#[derive(Debug, Deserialize)]
pub struct CreateVehicle {
    pub marca: String,
    pub modelo: String,
    pub year: i32,
    pub rpm: i32,
    pub velocidad: i32,
    pub vin: String,
    pub revision: serde_json::Value,
}

/// DTO for editing a vehicle. All scalar fields plus the VIN are replaced
/// wholesale; the `revision` payload is not editable after registration.
#[derive(Debug, Deserialize)]
pub struct UpdateVehicle {
    pub marca: String,
    pub modelo: String,
    pub year: i32,
    pub rpm: i32,
    pub velocidad: i32,
    pub vin: String,
}
