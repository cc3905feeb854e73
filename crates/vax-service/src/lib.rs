//! # vax-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, CatalogService, FeedbackService, NotificationService, ReminderService,
    ScheduleService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    SimulationService, UserService, VaccinationService,
};
