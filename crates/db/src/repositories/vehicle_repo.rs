//! Repository for the `vehicles` table.

use sqlx::PgPool;
use taller_core::types::DbId;

use crate::models::vehicle::{CreateVehicle, UpdateVehicle, Vehicle};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, marca, modelo, year, rpm, velocidad, vin, revision, owner_id";

/// Row counts removed by a cascading vehicle deletion.
#[derive(Debug, Clone, Copy)]
pub struct CascadeDelete {
    pub errors_deleted: u64,
    pub reports_deleted: u64,
}

impl CascadeDelete {
    /// Total child rows removed alongside the vehicle.
    pub fn children_deleted(&self) -> u64 {
        self.errors_deleted + self.reports_deleted
    }
}

/// Provides owner-scoped CRUD operations for vehicles.
pub struct VehicleRepo;

impl VehicleRepo {
    /// Insert a new vehicle owned by `owner_id`, returning the created row.
    ///
    /// A concurrent insert of the same VIN loses to `uq_vehicles_vin` and
    /// surfaces as a 23505 violation.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateVehicle,
    ) -> Result<Vehicle, sqlx::Error> {
        let query = format!(
            "INSERT INTO vehicles (marca, modelo, year, rpm, velocidad, vin, revision, owner_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(&input.marca)
            .bind(&input.modelo)
            .bind(input.year)
            .bind(input.rpm)
            .bind(input.velocidad)
            .bind(&input.vin)
            .bind(&input.revision)
            .bind(owner_id)
            .fetch_one(pool)
            .await
    }

    /// Find a vehicle by id, visible only to its owner.
    pub async fn find_for_owner(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
    ) -> Result<Option<Vehicle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicles WHERE id = $1 AND owner_id = $2");
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a vehicle by id regardless of owner.
    ///
    /// Only for the anonymous report path, which authorizes via share token.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Vehicle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicles WHERE id = $1");
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all vehicles owned by `owner_id`, oldest first.
    pub async fn list_by_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<Vehicle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicles WHERE owner_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Whether any vehicle (any owner) already carries this VIN.
    pub async fn vin_exists(pool: &PgPool, vin: &str) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM vehicles WHERE vin = $1)")
            .bind(vin)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Whether a vehicle other than `exclude_id` already carries this VIN.
    ///
    /// Used on edit so a vehicle may always keep its own current VIN.
    pub async fn vin_taken_by_other(
        pool: &PgPool,
        vin: &str,
        exclude_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM vehicles WHERE vin = $1 AND id <> $2)",
        )
        .bind(vin)
        .bind(exclude_id)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Replace a vehicle's scalar fields and VIN, scoped to its owner.
    ///
    /// Returns `None` if the vehicle does not exist or is not owned by
    /// `owner_id`.
    pub async fn update_for_owner(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
        input: &UpdateVehicle,
    ) -> Result<Option<Vehicle>, sqlx::Error> {
        let query = format!(
            "UPDATE vehicles SET
                marca = $3,
                modelo = $4,
                year = $5,
                rpm = $6,
                velocidad = $7,
                vin = $8
             WHERE id = $1 AND owner_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.marca)
            .bind(&input.modelo)
            .bind(input.year)
            .bind(input.rpm)
            .bind(input.velocidad)
            .bind(&input.vin)
            .fetch_optional(pool)
            .await
    }

    /// Delete a vehicle and all of its children in one transaction.
    ///
    /// Error rows and shared-report rows referencing the vehicle go first,
    /// then the vehicle row itself, owner-scoped. If the vehicle row is not
    /// deleted (absent or not owned) the transaction is rolled back, so the
    /// children reappear and nothing is observable as half-deleted.
    ///
    /// Returns `None` when the vehicle was absent or not owned.
    pub async fn delete_cascading(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
    ) -> Result<Option<CascadeDelete>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let errors_deleted = sqlx::query("DELETE FROM vehicle_errors WHERE vehicle_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let reports_deleted = sqlx::query("DELETE FROM shared_reports WHERE vehicle_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let vehicle_deleted = sqlx::query("DELETE FROM vehicles WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if vehicle_deleted == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        tx.commit().await?;
        Ok(Some(CascadeDelete {
            errors_deleted,
            reports_deleted,
        }))
    }
}
