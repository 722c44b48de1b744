// src/application/routes/item_routes.rs
//
// Lifecycle routes addressed by (kind, id). The kind segment must be
// exactly "lost" or "found"; anything else is a 400.

use axum::{
    extract::{Path, State},
    routing::put,
    Json, Router,
};

use crate::application::{
    dto::AckDto, error_handling::ApiResult, routes::run_blocking, state::AppState,
};

/// Mark a lost item Resolved or a found item Claimed
pub async fn update_item(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, i64)>,
) -> ApiResult<Json<AckDto>> {
    let service = state.lifecycle_service.clone();
    run_blocking(move || service.resolve(&kind, id)).await?;
    Ok(Json(AckDto::ok()))
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, i64)>,
) -> ApiResult<Json<AckDto>> {
    let service = state.lifecycle_service.clone();
    run_blocking(move || service.delete(&kind, id)).await?;
    Ok(Json(AckDto::ok()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/item/:kind/:id", put(update_item).delete(delete_item))
}
