//! Diagnostic trouble code (DTC) entity model.

use serde::Serialize;
use sqlx::FromRow;
use taller_core::types::DbId;

/// One logged DTC row from the `vehicle_errors` table.
///
/// Rows are append-only: they are never edited, and disappear only when the
/// owning vehicle is deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VehicleError {
    pub id: DbId,
    pub vehicle_id: DbId,
    pub codigo_dtc: String,
}
