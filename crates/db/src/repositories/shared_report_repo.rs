//! Repository for the `shared_reports` table.

use sqlx::PgPool;

use crate::models::shared_report::{CreateSharedReport, SharedReport};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, token, vehicle_id, recipient_email, created_at";

/// Storage for report share tokens.
pub struct SharedReportRepo;

impl SharedReportRepo {
    /// Persist a new shared report, returning the created row.
    ///
    /// Token collisions are practically impossible with UUIDv4 input, but
    /// `uq_shared_reports_token` still backstops global uniqueness.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSharedReport,
    ) -> Result<SharedReport, sqlx::Error> {
        let query = format!(
            "INSERT INTO shared_reports (token, vehicle_id, recipient_email)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SharedReport>(&query)
            .bind(&input.token)
            .bind(input.vehicle_id)
            .bind(&input.recipient_email)
            .fetch_one(pool)
            .await
    }

    /// Look up a shared report by its opaque token.
    pub async fn find_by_token(
        pool: &PgPool,
        token: &str,
    ) -> Result<Option<SharedReport>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shared_reports WHERE token = $1");
        sqlx::query_as::<_, SharedReport>(&query)
            .bind(token)
            .fetch_optional(pool)
            .await
    }
}
