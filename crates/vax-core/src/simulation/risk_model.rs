//! Outbreak risk model
//!
//! A fixed arithmetic projection, not an epidemiological simulation:
//! `R = (1 - I * E) * 2.5` and `cases = N * R^4`.

use serde::Serialize;

use crate::entities::OVERALL_COVERAGE;
use crate::error::DomainError;

/// Basic reproduction number with no immunity in the population
pub const BASE_REPRODUCTION_NUMBER: f64 = 2.5;

/// Generations projected over four weeks
pub const PROJECTION_GENERATIONS: i32 = 4;

/// Age group named in every narrative. Not derived from the inputs.
pub const MOST_VULNERABLE_AGE_GROUP: &str = "18-49";

pub const DEFAULT_EFFICACY: f64 = 95.0;
pub const DEFAULT_INITIAL_INFECTED: u64 = 10;

/// Inputs to the risk model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskParameters {
    /// Community immunity in percent, 0 to 100
    pub immunity: f64,
    /// Vaccine efficacy in percent, 0 to 100
    pub efficacy: f64,
    pub initial_infected: u64,
}

impl Default for RiskParameters {
    fn default() -> Self {
        Self {
            immunity: f64::from(OVERALL_COVERAGE.rate),
            efficacy: DEFAULT_EFFICACY,
            initial_infected: DEFAULT_INITIAL_INFECTED,
        }
    }
}

impl RiskParameters {
    pub fn new(immunity: f64, efficacy: f64, initial_infected: u64) -> Result<Self, DomainError> {
        for (field, value) in [("immunity", immunity), ("efficacy", efficacy)] {
            if !(0.0..=100.0).contains(&value) {
                return Err(DomainError::ValidationError(format!(
                    "{field} must be between 0 and 100"
                )));
            }
        }
        Ok(Self {
            immunity,
            efficacy,
            initial_infected,
        })
    }

    /// Immunity as a 0-1 fraction
    pub fn vaccination_rate(&self) -> f64 {
        self.immunity / 100.0
    }

    pub fn reproduction_number(&self) -> f64 {
        (1.0 - (self.immunity / 100.0) * (self.efficacy / 100.0)) * BASE_REPRODUCTION_NUMBER
    }

    pub fn run(&self) -> RiskProjection {
        let r = self.reproduction_number();
        let cases = (self.initial_infected as f64) * r.powi(PROJECTION_GENERATIONS);
        RiskProjection {
            reproduction_number: r,
            projected_cases: cases.round() as u64,
            initial_infected: self.initial_infected,
        }
    }
}

/// Result of a model run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskProjection {
    pub reproduction_number: f64,
    pub projected_cases: u64,
    pub initial_infected: u64,
}

impl RiskProjection {
    /// Fixed-shape report handed to the recommendation step
    pub fn narrative(&self) -> String {
        format!(
            "Based on the parameters, the projected basic reproduction number (R0) is approximately {:.2}. \
             Over the next 4 weeks, with an initial {} cases, the model projects up to {} new infections \
             if no further action is taken. The healthcare system capacity is likely to be challenged. \
             The most vulnerable age group appears to be {} due to higher social mixing and lower recent \
             vaccination uptake.",
            self.reproduction_number,
            self.initial_infected,
            self.projected_cases,
            MOST_VULNERABLE_AGE_GROUP,
        )
    }
}
