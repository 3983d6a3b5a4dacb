use std::sync::Arc;

use taller_notify::ReportMailer;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: taller_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Report-link mailer; `None` when SMTP is not configured.
    pub mailer: Option<Arc<ReportMailer>>,
    /// HTTP client for the external image lookup proxy.
    pub http: reqwest::Client,
}
