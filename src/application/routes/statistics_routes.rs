// src/application/routes/statistics_routes.rs

use axum::{extract::State, routing::get, Json, Router};

use crate::application::{
    dto::*, error_handling::ApiResult, routes::run_blocking, state::AppState,
};

/// Active counts plus the current room matches
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<Json<StatsDto>> {
    let service = state.match_service.clone();
    let stats = run_blocking(move || service.dashboard()).await?;
    Ok(Json(StatsDto::from(stats)))
}

/// Lost reports grouped by category, all statuses
pub async fn get_category_breakdown(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<CategoryCountDto>>> {
    let service = state.match_service.clone();
    let counts = run_blocking(move || service.lost_by_category()).await?;
    Ok(Json(counts.into_iter().map(CategoryCountDto::from).collect()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/stats", get(get_stats))
        .route("/api/analytics/categories", get(get_category_breakdown))
}
