//! Handlers for shared vehicle reports.
//!
//! Sharing mints an opaque random token that grants anonymous read access
//! to one vehicle's aggregated state. The token row is persisted first;
//! emailing the link to the recipient is best-effort and never rolls the
//! share back.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use taller_core::error::CoreError;
use taller_core::types::DbId;
use taller_core::validation::{validate_recipient_email, SHARE_TOKEN_MIN_LEN};
use taller_db::models::shared_report::CreateSharedReport;
use taller_db::repositories::{SharedReportRepo, VehicleErrorRepo, VehicleRepo};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /vehicles/{id}/report`.
#[derive(Debug, Deserialize)]
pub struct ShareReportRequest {
    pub email: String,
}

/// Response for a successfully created share.
#[derive(Debug, Serialize)]
pub struct SharedReportResponse {
    pub message: &'static str,
    pub token: String,
    pub url: String,
}

/// Read-only vehicle projection embedded in a resolved report.
#[derive(Debug, Serialize)]
pub struct ReportVehicle {
    pub marca: String,
    pub modelo: String,
    pub year: i32,
    pub vin: String,
    pub rpm: i32,
    pub velocidad: i32,
    pub revision: serde_json::Value,
}

/// Response for `GET /report/{token}`.
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub vehicle: ReportVehicle,
    pub errores: Vec<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/vehicles/{id}/report
///
/// Mint a share token for an owned vehicle and email the report link to the
/// recipient. The email is dispatched on a detached task after the row is
/// committed: the token works whether or not the mail arrives.
pub async fn create_share(
    State(state): State<AppState>,
    user: AuthUser,
    Path(vehicle_id): Path<DbId>,
    Json(input): Json<ShareReportRequest>,
) -> AppResult<Json<SharedReportResponse>> {
    validate_recipient_email(&input.email)?;

    VehicleRepo::find_for_owner(&state.pool, user.user_id, vehicle_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Vehicle" }))?;

    let token = Uuid::new_v4().to_string();

    SharedReportRepo::create(
        &state.pool,
        &CreateSharedReport {
            token: token.clone(),
            vehicle_id,
            recipient_email: input.email.clone(),
        },
    )
    .await?;

    let url = format!(
        "{}/{token}",
        state.config.report_base_url.trim_end_matches('/')
    );

    if let Some(mailer) = &state.mailer {
        let mailer = Arc::clone(mailer);
        let recipient = input.email.clone();
        let link = url.clone();
        tokio::spawn(async move {
            if let Err(e) = mailer.send_report_link(&recipient, &link).await {
                tracing::warn!(error = %e, "Report notification email failed");
            }
        });
    } else {
        tracing::debug!("SMTP not configured, skipping report notification email");
    }

    Ok(Json(SharedReportResponse {
        message: "Report created and sent to the recipient",
        token,
        url,
    }))
}

/// GET /api/v1/report/{token}
///
/// Resolve a share token into a read-only vehicle report. No bearer token,
/// no ownership check: the token itself is the capability. Tokens shorter
/// than the minimum plausible length are rejected before any lookup.
pub async fn resolve_share(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> AppResult<Json<ReportResponse>> {
    if token.chars().count() < SHARE_TOKEN_MIN_LEN {
        return Err(AppError::Core(CoreError::Validation(
            "Malformed report token".into(),
        )));
    }

    let report = SharedReportRepo::find_by_token(&state.pool, &token)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Report" }))?;

    // Cascading deletion removes share rows with their vehicle, so a dangling
    // report should be impossible; handle it anyway rather than panic.
    let vehicle = VehicleRepo::find_by_id(&state.pool, report.vehicle_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Report" }))?;

    let errores = VehicleErrorRepo::list_by_vehicle(&state.pool, vehicle.id)
        .await?
        .into_iter()
        .map(|e| e.codigo_dtc)
        .collect();

    Ok(Json(ReportResponse {
        vehicle: ReportVehicle {
            marca: vehicle.marca,
            modelo: vehicle.modelo,
            year: vehicle.year,
            vin: vehicle.vin,
            rpm: vehicle.rpm,
            velocidad: vehicle.velocidad,
            revision: vehicle.revision,
        },
        errores,
    }))
}
