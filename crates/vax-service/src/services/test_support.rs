//! In-memory fakes of the core ports for service tests

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use vax_common::auth::JwtService;
use vax_core::entities::{FeedbackSubmission, Gender, Notification, User, UserVaccination, VaccinationRecord};
use vax_core::traits::{
    EventPublisher, FeedbackRepository, NotificationRepository, Recommendation,
    RecommendationRequest, RecommendationService, ReminderMarkerStore, RepoResult, SessionStore,
    UserRepository, VaccinationRepository,
};
use vax_core::{DomainError, DomainEvent, NotificationId, UserId};

use super::context::ServiceContext;

#[derive(Default)]
pub struct FakeUsers {
    pub users: Mutex<HashMap<UserId, (User, String)>>,
}

#[async_trait]
impl UserRepository for FakeUsers {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        Ok(self.users.lock().get(&id).map(|(u, _)| u.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .values()
            .find(|(u, _)| u.email.eq_ignore_ascii_case(email))
            .map(|(u, _)| u.clone()))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        self.users
            .lock()
            .insert(user.id, (user.clone(), password_hash.to_string()));
        Ok(())
    }

    async fn update(&self, user: &User) -> RepoResult<()> {
        let mut users = self.users.lock();
        let entry = users
            .get_mut(&user.id)
            .ok_or(DomainError::UserNotFound(user.id))?;
        entry.0 = user.clone();
        Ok(())
    }

    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>> {
        Ok(self.users.lock().get(&id).map(|(_, h)| h.clone()))
    }
}

#[derive(Default)]
pub struct FakeVaccinations {
    pub records: Mutex<HashMap<UserId, VaccinationRecord>>,
    pub fail_writes: AtomicBool,
    pub fail_reads: AtomicBool,
}

impl FakeVaccinations {
    fn check_write(&self) -> RepoResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("write refused".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl VaccinationRepository for FakeVaccinations {
    async fn get_record(&self, user_id: UserId) -> RepoResult<VaccinationRecord> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("read refused".into()));
        }
        Ok(self.records.lock().get(&user_id).cloned().unwrap_or_default())
    }

    async fn get_vaccination(
        &self,
        user_id: UserId,
        vaccine_id: &str,
    ) -> RepoResult<UserVaccination> {
        Ok(self
            .records
            .lock()
            .get(&user_id)
            .and_then(|r| r.get(vaccine_id).cloned())
            .unwrap_or_default())
    }

    async fn upsert_dose(
        &self,
        user_id: UserId,
        vaccine_id: &str,
        index: u32,
        administered_at: DateTime<Utc>,
    ) -> RepoResult<()> {
        self.check_write()?;
        self.records
            .lock()
            .entry(user_id)
            .or_default()
            .entry(vaccine_id.to_string())
            .or_default()
            .doses
            .insert(index, administered_at);
        Ok(())
    }

    async fn delete_doses_from(
        &self,
        user_id: UserId,
        vaccine_id: &str,
        index: u32,
    ) -> RepoResult<u64> {
        self.check_write()?;
        let mut records = self.records.lock();
        let Some(history) = records.get_mut(&user_id).and_then(|r| r.get_mut(vaccine_id)) else {
            return Ok(0);
        };
        let before = history.doses.len();
        history.doses.retain(|i, _| *i < index);
        Ok((before - history.doses.len()) as u64)
    }

    async fn replace_record(&self, user_id: UserId, record: &VaccinationRecord) -> RepoResult<()> {
        self.check_write()?;
        self.records.lock().insert(user_id, record.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeNotifications {
    pub rows: Mutex<Vec<(Notification, Option<String>)>>,
    pub fail_creates: AtomicBool,
}

impl FakeNotifications {
    pub fn count(&self) -> usize {
        self.rows.lock().len()
    }
}

#[async_trait]
impl NotificationRepository for FakeNotifications {
    async fn find_by_id(&self, id: NotificationId) -> RepoResult<Option<Notification>> {
        Ok(self
            .rows
            .lock()
            .iter()
            .find(|(n, _)| n.id == id)
            .map(|(n, _)| n.clone()))
    }

    async fn create_reminder(&self, notification: &Notification, dedup_key: &str) -> RepoResult<bool> {
        if self.fail_creates.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("insert refused".into()));
        }
        let mut rows = self.rows.lock();
        if rows.iter().any(|(_, k)| k.as_deref() == Some(dedup_key)) {
            return Ok(false);
        }
        rows.push((notification.clone(), Some(dedup_key.to_string())));
        Ok(true)
    }

    async fn list_for_user(&self, user_id: UserId, limit: i64) -> RepoResult<Vec<Notification>> {
        let mut list: Vec<Notification> = self
            .rows
            .lock()
            .iter()
            .filter(|(n, _)| n.user_id == user_id)
            .map(|(n, _)| n.clone())
            .collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        list.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(list)
    }

    async fn mark_read(&self, id: NotificationId) -> RepoResult<()> {
        let mut rows = self.rows.lock();
        let (n, _) = rows
            .iter_mut()
            .find(|(n, _)| n.id == id)
            .ok_or(DomainError::NotificationNotFound(id))?;
        n.read = true;
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeFeedback {
    pub submissions: Mutex<Vec<FeedbackSubmission>>,
}

#[async_trait]
impl FeedbackRepository for FakeFeedback {
    async fn has_submission_since(&self, ip_address: &str, since: DateTime<Utc>) -> RepoResult<bool> {
        Ok(self
            .submissions
            .lock()
            .iter()
            .any(|s| s.ip_address == ip_address && s.submitted_at >= since))
    }

    async fn create(&self, submission: &FeedbackSubmission) -> RepoResult<()> {
        self.submissions.lock().push(submission.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeSessions {
    pub tokens: Mutex<HashMap<String, UserId>>,
}

#[async_trait]
impl SessionStore for FakeSessions {
    async fn store(&self, refresh_token: &str, user_id: UserId) -> RepoResult<()> {
        self.tokens.lock().insert(refresh_token.to_string(), user_id);
        Ok(())
    }

    async fn validate(&self, refresh_token: &str) -> RepoResult<Option<UserId>> {
        Ok(self.tokens.lock().get(refresh_token).copied())
    }

    async fn revoke(&self, refresh_token: &str) -> RepoResult<bool> {
        Ok(self.tokens.lock().remove(refresh_token).is_some())
    }

    async fn revoke_all_for_user(&self, user_id: UserId) -> RepoResult<u32> {
        let mut tokens = self.tokens.lock();
        let before = tokens.len();
        tokens.retain(|_, owner| *owner != user_id);
        Ok((before - tokens.len()) as u32)
    }
}

#[derive(Default)]
pub struct FakeMarkers {
    pub keys: Mutex<HashSet<String>>,
}

#[async_trait]
impl ReminderMarkerStore for FakeMarkers {
    async fn is_marked(&self, key: &str) -> RepoResult<bool> {
        Ok(self.keys.lock().contains(key))
    }

    async fn mark(&self, key: &str) -> RepoResult<bool> {
        Ok(self.keys.lock().insert(key.to_string()))
    }
}

#[derive(Default)]
pub struct FakePublisher {
    pub events: Mutex<Vec<DomainEvent>>,
}

#[async_trait]
impl EventPublisher for FakePublisher {
    async fn publish(&self, event: &DomainEvent) -> RepoResult<()> {
        self.events.lock().push(event.clone());
        Ok(())
    }
}

/// Recommendation step that answers with a fixed verdict or fails
pub struct FakeRecommendation {
    pub answer: Option<Recommendation>,
    pub requests: Mutex<Vec<RecommendationRequest>>,
}

#[async_trait]
impl RecommendationService for FakeRecommendation {
    async fn recommend(&self, request: &RecommendationRequest) -> Result<Recommendation, DomainError> {
        self.requests.lock().push(request.clone());
        self.answer
            .clone()
            .ok_or_else(|| DomainError::ExternalServiceError("upstream returned 500".into()))
    }
}

/// Handles to every fake behind a context
#[derive(Default)]
pub struct Fakes {
    pub users: Arc<FakeUsers>,
    pub vaccinations: Arc<FakeVaccinations>,
    pub notifications: Arc<FakeNotifications>,
    pub feedback: Arc<FakeFeedback>,
    pub sessions: Arc<FakeSessions>,
    pub markers: Arc<FakeMarkers>,
    pub publisher: Arc<FakePublisher>,
}

impl Fakes {
    pub fn context(&self, recommendation: Option<Arc<FakeRecommendation>>) -> ServiceContext {
        let mut builder = ServiceContext::builder()
            .user_repo(self.users.clone())
            .vaccination_repo(self.vaccinations.clone())
            .notification_repo(self.notifications.clone())
            .feedback_repo(self.feedback.clone())
            .session_store(self.sessions.clone())
            .reminder_markers(self.markers.clone())
            .event_publisher(self.publisher.clone())
            .jwt_service(Arc::new(JwtService::new("test-secret-key-for-services", 900, 604_800)));
        if let Some(service) = recommendation {
            builder = builder.recommendation(service);
        }
        builder.build().unwrap()
    }

    /// Insert a user and return it
    pub fn seed_user(&self) -> User {
        let user = User::new(
            UserId::new(),
            "ana".to_string(),
            "ana@example.com".to_string(),
            30,
            Gender::Female,
            None,
        );
        self.users
            .users
            .lock()
            .insert(user.id, (user.clone(), "unused-hash".to_string()));
        user
    }
}
