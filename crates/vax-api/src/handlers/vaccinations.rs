//! Vaccination record handlers
//!
//! Dose toggles respond with the freshly re-read record.

use axum::{extract::State, Json};
use chrono::Utc;
use vax_service::dto::{ImportVaccinationsRequest, UpcomingDoseResponse, VaccinationRecordResponse};
use vax_service::{ScheduleService, VaccinationService};

use crate::extractors::{ApiJson, ApiPath, AuthUser, DosePath};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /users/@me/vaccinations
pub async fn get_record(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<VaccinationRecordResponse>> {
    let service = VaccinationService::new(state.service_context());
    Ok(Json(service.get_record(auth.user_id).await?))
}

/// Replace the whole record
///
/// PUT /users/@me/vaccinations
pub async fn import_record(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(request): ApiJson<ImportVaccinationsRequest>,
) -> ApiResult<Json<VaccinationRecordResponse>> {
    let service = VaccinationService::new(state.service_context());
    Ok(Json(service.import_record(auth.user_id, request).await?))
}

/// Mark a dose as taken now
///
/// Re-marking the latest dose moves it to now; an earlier dose is locked
/// (`DOSE_LOCKED`) until the later ones are unmarked.
///
/// PUT /users/@me/vaccinations/{vaccine_id}/doses/{index}
pub async fn check_dose(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<DosePath>,
) -> ApiResult<Json<VaccinationRecordResponse>> {
    let service = VaccinationService::new(state.service_context());
    let record = service
        .check_dose(auth.user_id, &path.vaccine_id, path.index, Utc::now())
        .await?;
    Ok(Json(record))
}

/// Unmark a dose and every later one
///
/// DELETE /users/@me/vaccinations/{vaccine_id}/doses/{index}
pub async fn uncheck_dose(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<DosePath>,
) -> ApiResult<Json<VaccinationRecordResponse>> {
    let service = VaccinationService::new(state.service_context());
    let record = service
        .uncheck_dose(auth.user_id, &path.vaccine_id, path.index)
        .await?;
    Ok(Json(record))
}

/// Next due doses; also emits due reminders
///
/// GET /users/@me/upcoming-doses
pub async fn upcoming_doses(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<UpcomingDoseResponse>>> {
    let service = ScheduleService::new(state.service_context());
    Ok(Json(service.upcoming_doses(auth.user_id, Utc::now()).await?))
}
