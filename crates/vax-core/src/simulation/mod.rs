//! Outbreak risk simulation

mod risk_model;

pub use risk_model::{
    RiskParameters, RiskProjection, BASE_REPRODUCTION_NUMBER, DEFAULT_EFFICACY,
    DEFAULT_INITIAL_INFECTED, MOST_VULNERABLE_AGE_GROUP, PROJECTION_GENERATIONS,
};
