//! Handler for the external car-image lookup proxy.

use axum::extract::{Query, State};
use serde::Deserialize;
use taller_core::error::CoreError;

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for `GET /car-imagery`.
#[derive(Debug, Deserialize)]
pub struct ImagerySearchParams {
    /// Free-text search term, e.g. `"honda accord 2003"`.
    #[serde(alias = "searchTerm")]
    pub search_term: String,
}

/// GET /api/v1/car-imagery?search_term=...
///
/// Pure pass-through to the upstream image search service: its response
/// body is relayed verbatim. No caching, no retry; any transport failure or
/// non-2xx answer surfaces as an upstream error.
pub async fn lookup(
    State(state): State<AppState>,
    Query(params): Query<ImagerySearchParams>,
) -> AppResult<String> {
    let response = state
        .http
        .get(&state.config.car_imagery_url)
        .query(&[("searchTerm", params.search_term.as_str())])
        .send()
        .await
        .map_err(|e| CoreError::Upstream(format!("Image lookup request failed: {e}")))?;

    if !response.status().is_success() {
        return Err(CoreError::Upstream(format!(
            "Image service returned HTTP {}",
            response.status()
        ))
        .into());
    }

    let body = response
        .text()
        .await
        .map_err(|e| CoreError::Upstream(format!("Image lookup response unreadable: {e}")))?;

    Ok(body)
}
