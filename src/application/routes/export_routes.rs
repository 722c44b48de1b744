// src/application/routes/export_routes.rs

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;

use crate::application::{
    dto::ExportSavedDto, error_handling::ApiResult, routes::run_blocking, state::AppState,
};
use crate::services::export_file_name;

/// Download every record as a date-stamped CSV attachment
pub async fn export_csv(State(state): State<AppState>) -> ApiResult<Response> {
    let service = state.export_service.clone();
    let body = run_blocking(move || service.export_all()).await?;
    let file_name = export_file_name(Local::now().date_naive());

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        body,
    )
        .into_response())
}

/// Write today's export into the configured export directory
pub async fn save_export(State(state): State<AppState>) -> ApiResult<Json<ExportSavedDto>> {
    let service = state.export_service.clone();
    let dir = state.export_dir.clone();
    let path = run_blocking(move || service.write_export(&dir)).await?;

    Ok(Json(ExportSavedDto {
        success: true,
        path: path.display().to_string(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/export", get(export_csv))
        .route("/api/export/save", post(save_export))
}
