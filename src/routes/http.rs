// HTTP handlers: version, dataset info, latency statistics

use axum::{Json, extract::State, response::IntoResponse};
use bytes::Bytes;

use super::{ApiError, AppState};
use crate::metrics;
use crate::models::{LatencyQuery, RegionReport};

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /api/info — sample count and per-region sample counts of the loaded data.
pub(super) async fn api_info_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.telemetry.info())
}

/// POST /api/latency — per-region statistics for the requested regions.
///
/// Malformed bodies (bad JSON, non-object bodies, wrong field types) map to
/// `ApiError` (500), not axum's JSON rejection.
pub(super) async fn latency_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RegionReport>, ApiError> {
    // Derived struct deserializers also accept the positional array form.
    let value: serde_json::Value = serde_json::from_slice(&body)?;
    if !value.is_object() {
        return Err(ApiError::NotAnObject);
    }
    let query: LatencyQuery = serde_json::from_value(value)?;
    let threshold_ms = query.threshold_or(state.metrics.default_threshold_ms);
    tracing::debug!(regions = ?query.regions, threshold_ms, "latency query");

    let options = state.metrics.aggregation_options(threshold_ms);
    let report = metrics::aggregate_with(state.telemetry.samples(), &query.regions, &options);
    Ok(Json(report))
}
