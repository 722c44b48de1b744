// src/application/routes/search_routes.rs

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::application::{
    dto::*, error_handling::ApiResult, routes::run_blocking, state::AppState,
};
use crate::domain::InventoryFilter;

/// `GET /api/search?q=<text>&filter=all|lost|found`
pub async fn search_inventory(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<Vec<InventoryEntryDto>>> {
    let filter = InventoryFilter::from_input(query.filter.as_deref());
    let service = state.inventory_service.clone();
    let entries = run_blocking(move || service.search(query.q.trim(), filter)).await?;

    Ok(Json(entries.into_iter().map(InventoryEntryDto::from).collect()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/search", get(search_inventory))
}
