//! Outbound HTTP clients

mod recommendation;

pub use recommendation::HttpRecommendationService;
