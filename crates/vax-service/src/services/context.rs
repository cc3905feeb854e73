//! Service context - dependency container for services
//!
//! Holds every repository and port the services need. All infrastructure sits
//! behind `vax-core` traits, so tests can build a context from in-memory fakes.

use std::sync::Arc;

use vax_common::auth::JwtService;
use vax_core::entities::{Vaccine, VACCINE_CATALOG};
use vax_core::traits::{
    EventPublisher, FeedbackRepository, NotificationRepository, RecommendationService,
    ReminderMarkerStore, SessionStore, UserRepository, VaccinationRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    vaccination_repo: Arc<dyn VaccinationRepository>,
    notification_repo: Arc<dyn NotificationRepository>,
    feedback_repo: Arc<dyn FeedbackRepository>,

    // Ports
    session_store: Arc<dyn SessionStore>,
    reminder_markers: Arc<dyn ReminderMarkerStore>,
    event_publisher: Arc<dyn EventPublisher>,
    recommendation: Option<Arc<dyn RecommendationService>>,

    // Services
    jwt_service: Arc<JwtService>,
    catalog: &'static [Vaccine],
}

impl ServiceContext {
    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn vaccination_repo(&self) -> &dyn VaccinationRepository {
        self.vaccination_repo.as_ref()
    }

    pub fn notification_repo(&self) -> &dyn NotificationRepository {
        self.notification_repo.as_ref()
    }

    pub fn feedback_repo(&self) -> &dyn FeedbackRepository {
        self.feedback_repo.as_ref()
    }

    // === Ports ===

    /// Refresh-token sessions
    pub fn session_store(&self) -> &dyn SessionStore {
        self.session_store.as_ref()
    }

    /// Shared reminder idempotency markers
    pub fn reminder_markers(&self) -> &dyn ReminderMarkerStore {
        self.reminder_markers.as_ref()
    }

    /// Live event delivery
    pub fn event_publisher(&self) -> &dyn EventPublisher {
        self.event_publisher.as_ref()
    }

    /// Recommendation step, absent when no endpoint is configured
    pub fn recommendation(&self) -> Option<&dyn RecommendationService> {
        self.recommendation.as_deref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Vaccine catalog in display order
    pub fn catalog(&self) -> &'static [Vaccine] {
        self.catalog
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("ports", &"...")
            .field("recommendation", &self.recommendation.is_some())
            .field("catalog", &self.catalog.len())
            .finish()
    }
}

/// Builder for creating ServiceContext
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    vaccination_repo: Option<Arc<dyn VaccinationRepository>>,
    notification_repo: Option<Arc<dyn NotificationRepository>>,
    feedback_repo: Option<Arc<dyn FeedbackRepository>>,
    session_store: Option<Arc<dyn SessionStore>>,
    reminder_markers: Option<Arc<dyn ReminderMarkerStore>>,
    event_publisher: Option<Arc<dyn EventPublisher>>,
    recommendation: Option<Arc<dyn RecommendationService>>,
    jwt_service: Option<Arc<JwtService>>,
    catalog: &'static [Vaccine],
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            user_repo: None,
            vaccination_repo: None,
            notification_repo: None,
            feedback_repo: None,
            session_store: None,
            reminder_markers: None,
            event_publisher: None,
            recommendation: None,
            jwt_service: None,
            catalog: VACCINE_CATALOG,
        }
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn vaccination_repo(mut self, repo: Arc<dyn VaccinationRepository>) -> Self {
        self.vaccination_repo = Some(repo);
        self
    }

    pub fn notification_repo(mut self, repo: Arc<dyn NotificationRepository>) -> Self {
        self.notification_repo = Some(repo);
        self
    }

    pub fn feedback_repo(mut self, repo: Arc<dyn FeedbackRepository>) -> Self {
        self.feedback_repo = Some(repo);
        self
    }

    pub fn session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.session_store = Some(store);
        self
    }

    pub fn reminder_markers(mut self, store: Arc<dyn ReminderMarkerStore>) -> Self {
        self.reminder_markers = Some(store);
        self
    }

    pub fn event_publisher(mut self, publisher: Arc<dyn EventPublisher>) -> Self {
        self.event_publisher = Some(publisher);
        self
    }

    /// Optional; simulations fail with a 502 without it
    pub fn recommendation(mut self, service: Arc<dyn RecommendationService>) -> Self {
        self.recommendation = Some(service);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
        }

        Ok(ServiceContext {
            user_repo: required(self.user_repo, "user_repo")?,
            vaccination_repo: required(self.vaccination_repo, "vaccination_repo")?,
            notification_repo: required(self.notification_repo, "notification_repo")?,
            feedback_repo: required(self.feedback_repo, "feedback_repo")?,
            session_store: required(self.session_store, "session_store")?,
            reminder_markers: required(self.reminder_markers, "reminder_markers")?,
            event_publisher: required(self.event_publisher, "event_publisher")?,
            recommendation: self.recommendation,
            jwt_service: required(self.jwt_service, "jwt_service")?,
            catalog: self.catalog,
        })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
