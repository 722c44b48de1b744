// src/application/routes/mod.rs
//
// HTTP routes
//
// - /health                      liveness
// - /api/lost, /api/found        list and file reports
// - /api/item/:kind/:id          resolve/claim (PUT) and delete (DELETE)
// - /api/stats                   active counts and room matches
// - /api/analytics/categories    lost reports per category
// - /api/search                  inventory search
// - /api/export                  CSV download
// - /api/export/save             CSV written to the export directory

pub mod export_routes;
pub mod item_routes;
pub mod report_routes;
pub mod search_routes;
pub mod statistics_routes;

use axum::{http::Uri, routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;

use crate::application::{
    error_handling::{ApiError, ApiResult, ErrorResponse},
    state::AppState,
};
use crate::error::{AppError, AppResult};

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Run a synchronous service call on tokio's blocking pool.
///
/// Store calls can wait on the pool or on SQLite's busy timeout; the async
/// workers must stay free for other requests meanwhile.
pub(crate) async fn run_blocking<T, F>(call: F) -> ApiResult<T>
where
    F: FnOnce() -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(call)
        .await
        .map_err(|e| AppError::Other(format!("Store task failed: {}", e)))?
        .map_err(ApiError::from)
}

async fn route_not_found(uri: Uri) -> ErrorResponse {
    ErrorResponse::not_found(uri.path())
}

/// Build the full router with shared state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(report_routes::router())
        .merge(item_routes::router())
        .merge(statistics_routes::router())
        .merge(search_routes::router())
        .merge(export_routes::router())
        .fallback(route_not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
