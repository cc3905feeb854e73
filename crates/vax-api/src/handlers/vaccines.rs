//! Vaccine catalog handlers

use axum::{extract::State, Json};
use vax_service::dto::VaccineResponse;
use vax_service::CatalogService;

use crate::extractors::{ApiPath, VaccineIdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /vaccines
pub async fn list_vaccines(State(state): State<AppState>) -> Json<Vec<VaccineResponse>> {
    Json(CatalogService::new(state.service_context()).list_vaccines())
}

/// GET /vaccines/{vaccine_id}
pub async fn get_vaccine(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<VaccineIdPath>,
) -> ApiResult<Json<VaccineResponse>> {
    let vaccine = CatalogService::new(state.service_context()).get_vaccine(&path.vaccine_id)?;
    Ok(Json(vaccine))
}
