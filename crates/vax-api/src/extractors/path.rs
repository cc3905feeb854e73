//! Path parameter extractors
//!
//! Path rejections are reported in the API error format.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use vax_core::NotificationId;

use crate::response::ApiError;

/// `Path<T>` with an `ApiError` rejection
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        Ok(ApiPath(inner))
    }
}

/// `/vaccines/{vaccine_id}`
#[derive(Debug, Deserialize)]
pub struct VaccineIdPath {
    pub vaccine_id: String,
}

/// `/vaccinations/{vaccine_id}/doses/{index}`
#[derive(Debug, Deserialize)]
pub struct DosePath {
    pub vaccine_id: String,
    pub index: u32,
}

/// `/notifications/{notification_id}`
#[derive(Debug, Deserialize)]
pub struct NotificationIdPath {
    pub notification_id: String,
}

impl NotificationIdPath {
    pub fn notification_id(&self) -> Result<NotificationId, ApiError> {
        self.notification_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid notification_id format"))
    }
}
