//! Risk simulation handler

use axum::{extract::State, Json};
use vax_service::dto::{RiskSimulationRequest, RiskSimulationResponse};
use vax_service::SimulationService;

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Run the outbreak model and fetch a recommendation
///
/// POST /simulations/risk
pub async fn run_risk_simulation(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RiskSimulationRequest>,
) -> ApiResult<Json<RiskSimulationResponse>> {
    let service = SimulationService::new(state.service_context());
    Ok(Json(service.run(request).await?))
}
