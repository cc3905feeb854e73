//! User handlers
//!
//! Profile and reminder preference endpoints for the current user.

use axum::{extract::State, Json};
use vax_service::dto::{
    CurrentUserResponse, ReminderSettingsRequest, ReminderSettingsResponse, UpdateProfileRequest,
};
use vax_service::UserService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get current user
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_current_user(auth.user_id).await?;
    Ok(Json(response))
}

/// Update current user's profile
///
/// PATCH /users/@me
pub async fn update_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_profile(auth.user_id, request).await?;
    Ok(Json(response))
}

/// GET /users/@me/reminder-settings
pub async fn get_reminder_settings(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ReminderSettingsResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_reminder_settings(auth.user_id).await?;
    Ok(Json(response))
}

/// PUT /users/@me/reminder-settings
pub async fn update_reminder_settings(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ReminderSettingsRequest>,
) -> ApiResult<Json<ReminderSettingsResponse>> {
    let service = UserService::new(state.service_context());
    let response = service
        .update_reminder_settings(auth.user_id, request)
        .await?;
    Ok(Json(response))
}
