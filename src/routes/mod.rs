// HTTP routes

mod error;
mod http;

use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

use crate::config::MetricsConfig;
use crate::telemetry_repo::TelemetryRepo;

pub use error::ApiError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) telemetry: TelemetryRepo,
    pub(crate) metrics: MetricsConfig,
}

pub fn app(telemetry: TelemetryRepo, metrics: MetricsConfig) -> Router {
    let state = AppState { telemetry, metrics };
    Router::new()
        .route("/", get(|| async { "region-latency: ok" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/info", get(http::api_info_handler)) // GET /api/info
        .route("/api/latency", post(http::latency_handler)) // POST /api/latency
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::POST])
                .allow_headers(Any),
        )
        .with_state(state)
}
