// src/application/routes/report_routes.rs

use axum::{extract::State, routing::get, Json, Router};

use crate::application::{
    dto::*,
    error_handling::ApiResult,
    routes::run_blocking,
    state::AppState,
};

/// List lost reports, newest first
pub async fn list_lost(State(state): State<AppState>) -> ApiResult<Json<Vec<LostReportDto>>> {
    let service = state.record_service.clone();
    let reports = run_blocking(move || service.list_lost()).await?;
    Ok(Json(reports.into_iter().map(LostReportDto::from).collect()))
}

/// File a lost report
pub async fn create_lost(
    State(state): State<AppState>,
    Json(payload): Json<CreateLostDto>,
) -> ApiResult<Json<CreatedDto>> {
    let service = state.record_service.clone();
    let id = run_blocking(move || service.create_lost(payload.into())).await?;
    Ok(Json(CreatedDto { success: true, id }))
}

/// List found reports, newest first
pub async fn list_found(State(state): State<AppState>) -> ApiResult<Json<Vec<FoundReportDto>>> {
    let service = state.record_service.clone();
    let reports = run_blocking(move || service.list_found()).await?;
    Ok(Json(reports.into_iter().map(FoundReportDto::from).collect()))
}

/// File a found report
pub async fn create_found(
    State(state): State<AppState>,
    Json(payload): Json<CreateFoundDto>,
) -> ApiResult<Json<CreatedDto>> {
    let service = state.record_service.clone();
    let id = run_blocking(move || service.create_found(payload.into())).await?;
    Ok(Json(CreatedDto { success: true, id }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/lost", get(list_lost).post(create_lost))
        .route("/api/found", get(list_found).post(create_found))
}
