//! Contact form handler

use axum::{extract::State, Json};
use chrono::Utc;
use vax_service::dto::{FeedbackRequest, MessageResponse};
use vax_service::FeedbackService;

use crate::extractors::{ClientIp, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// POST /feedback
pub async fn submit_feedback(
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
    ValidatedJson(request): ValidatedJson<FeedbackRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let service = FeedbackService::new(state.service_context());
    let response = service.submit(&ip, request, Utc::now()).await?;
    Ok(Created(Json(response)))
}
