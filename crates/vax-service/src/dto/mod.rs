//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    FeedbackRequest, ImportVaccinationsRequest, LoginRequest, LogoutRequest, NotificationQuery,
    RefreshTokenRequest, RegisterRequest, ReminderSettingsRequest, RiskSimulationRequest,
    UpdateProfileRequest,
};

pub use responses::{
    ArticleResponse, AuthResponse, CoverageResponse, CurrentUserResponse,
    HealthChecks, HealthResponse, MessageResponse, NotificationResponse,
    OverallCoverageResponse, ReadinessResponse, RecommendationResponse, ReminderSettingsResponse,
    RiskSimulationResponse, UpcomingDoseResponse, UserVaccinationResponse,
    VaccinationRecordResponse, VaccineResponse,
};

pub use mappers::record_response;
