//! Repository for the `vehicle_errors` table.

use sqlx::PgPool;
use taller_core::types::DbId;

use crate::models::vehicle_error::VehicleError;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, vehicle_id, codigo_dtc";

/// Append-only storage for logged DTC codes.
pub struct VehicleErrorRepo;

impl VehicleErrorRepo {
    /// Insert one row per code, all inside a single transaction.
    ///
    /// Codes must already be normalized (trimmed, non-blank, no intra-batch
    /// duplicates). A failure on any insert rolls back the whole batch, so
    /// partial submissions are never observable.
    pub async fn append_batch(
        pool: &PgPool,
        vehicle_id: DbId,
        codes: &[String],
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        for code in codes {
            sqlx::query("INSERT INTO vehicle_errors (vehicle_id, codigo_dtc) VALUES ($1, $2)")
                .bind(vehicle_id)
                .bind(code)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(codes.len() as u64)
    }

    /// List all logged codes for a vehicle, oldest first.
    pub async fn list_by_vehicle(
        pool: &PgPool,
        vehicle_id: DbId,
    ) -> Result<Vec<VehicleError>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM vehicle_errors WHERE vehicle_id = $1 ORDER BY id ASC"
        );
        sqlx::query_as::<_, VehicleError>(&query)
            .bind(vehicle_id)
            .fetch_all(pool)
            .await
    }
}
