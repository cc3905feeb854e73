//! Community statistics and news

use axum::{extract::State, Json};
use vax_service::dto::{ArticleResponse, CoverageResponse};
use vax_service::CatalogService;

use crate::state::AppState;

/// GET /stats/coverage
pub async fn coverage(State(state): State<AppState>) -> Json<CoverageResponse> {
    Json(CatalogService::new(state.service_context()).coverage())
}

/// GET /community/articles
pub async fn articles(State(state): State<AppState>) -> Json<&'static [ArticleResponse]> {
    Json(CatalogService::new(state.service_context()).articles())
}
