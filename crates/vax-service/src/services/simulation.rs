//! Outbreak risk simulation
//!
//! Runs the fixed risk model and asks the recommendation step what to do
//! with the result. Any recommendation failure surfaces as a 502.

use tracing::{error, info, instrument};
use vax_core::entities::OVERALL_COVERAGE;
use vax_core::simulation::MOST_VULNERABLE_AGE_GROUP;
use vax_core::{RecommendationRequest, RiskParameters};

use crate::dto::{RiskSimulationRequest, RiskSimulationResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

pub struct SimulationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SimulationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn run(&self, request: RiskSimulationRequest) -> ServiceResult<RiskSimulationResponse> {
        let immunity = request
            .immunity
            .unwrap_or_else(|| f64::from(OVERALL_COVERAGE.rate));
        let params = RiskParameters::new(immunity, request.efficacy, request.initial_infected)?;
        let projection = params.run();

        let Some(recommender) = self.ctx.recommendation() else {
            error!("No recommendation service configured");
            return Err(ServiceError::recommendation_failed());
        };

        let recommendation_request = RecommendationRequest {
            simulation_narrative: projection.narrative(),
            vaccination_rate: params.vaccination_rate(),
            age_group: MOST_VULNERABLE_AGE_GROUP.to_string(),
        };
        let recommendation = recommender
            .recommend(&recommendation_request)
            .await
            .map_err(|e| {
                error!(error = %e, "Recommendation request failed");
                ServiceError::recommendation_failed()
            })?;

        info!(
            r = projection.reproduction_number,
            cases = projection.projected_cases,
            should_remind = recommendation.should_remind,
            "Risk simulation complete"
        );
        Ok(RiskSimulationResponse::new(&projection, recommendation))
    }
}
