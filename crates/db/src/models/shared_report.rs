//! Shared report entity model and DTOs.

use sqlx::FromRow;
use taller_core::types::{DbId, Timestamp};

/// One shared-report row from the `shared_reports` table.
///
/// The token is the whole capability: whoever holds it can read the
/// referenced vehicle's report without authenticating. Tokens do not expire
/// and are not individually revocable; they vanish with the vehicle.
#[derive(Debug, Clone, FromRow)]
pub struct SharedReport {
    pub id: DbId,
    pub token: String,
    pub vehicle_id: DbId,
    pub recipient_email: String,
    pub created_at: Timestamp,
}

/// DTO for persisting a new shared report.
#[derive(Debug)]
pub struct CreateSharedReport {
    pub token: String,
    pub vehicle_id: DbId,
    pub recipient_email: String,
}
