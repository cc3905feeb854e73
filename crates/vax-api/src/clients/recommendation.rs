//! HTTP client for the recommendation step
//!
//! Posts the simulation summary as JSON and expects
//! `{ "shouldRemind": bool, "reason": string }` back. No retries.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument};
use vax_core::traits::{Recommendation, RecommendationRequest, RecommendationService};
use vax_core::DomainError;

#[derive(Debug, Clone)]
pub struct HttpRecommendationService {
    client: reqwest::Client,
    url: String,
}

impl HttpRecommendationService {
    /// Build a client for `url` with a per-request `timeout`
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::ExternalServiceError(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RecommendationService for HttpRecommendationService {
    #[instrument(skip(self, request), fields(url = %self.url))]
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Recommendation, DomainError> {
        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| DomainError::ExternalServiceError(e.to_string()))?;

        let recommendation: Recommendation = response
            .json()
            .await
            .map_err(|e| DomainError::ExternalServiceError(format!("invalid response: {e}")))?;

        debug!(should_remind = recommendation.should_remind, "Recommendation received");
        Ok(recommendation)
    }
}
