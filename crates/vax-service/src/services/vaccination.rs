//! Vaccination service
//!
//! Per-user dose history: read, whole-record import and single-dose toggles.

use chrono::{DateTime, Utc};
use tracing::{error, info, instrument, warn};
use vax_core::entities::{find_vaccine, UserVaccination, Vaccine, VaccinationRecord};
use vax_core::events::VaccinationUpdatedEvent;
use vax_core::{DomainError, DomainEvent, UserId};

use crate::dto::{record_response, ImportVaccinationsRequest, VaccinationRecordResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

pub struct VaccinationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VaccinationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the user's whole record
    #[instrument(skip(self))]
    pub async fn get_record(&self, user_id: UserId) -> ServiceResult<VaccinationRecordResponse> {
        let record = self.ctx.vaccination_repo().get_record(user_id).await?;
        Ok(record_response(&record))
    }

    /// Replace the user's record with an imported one
    ///
    /// Unknown vaccine ids are skipped. Each history is cut down to its
    /// contiguous prefix.
    #[instrument(skip(self, request), fields(vaccines = request.vaccinations.len()))]
    pub async fn import_record(
        &self,
        user_id: UserId,
        request: ImportVaccinationsRequest,
    ) -> ServiceResult<VaccinationRecordResponse> {
        let mut record = VaccinationRecord::new();
        for (vaccine_id, doses) in &request.vaccinations {
            let Some(vaccine) = find_vaccine(vaccine_id) else {
                warn!(vaccine_id = %vaccine_id, "Skipping unknown vaccine in import");
                continue;
            };
            let history = UserVaccination::from_wire(vaccine, doses);
            if !history.is_empty() {
                record.insert(vaccine.id.to_string(), history);
            }
        }

        self.ctx
            .vaccination_repo()
            .replace_record(user_id, &record)
            .await?;

        info!(user_id = %user_id, vaccines = record.len(), "Vaccination record imported");
        Ok(record_response(&record))
    }

    /// Record dose `index` of `vaccine_id` as taken at `now`
    ///
    /// Returns the freshly re-read record.
    #[instrument(skip(self, now))]
    pub async fn check_dose(
        &self,
        user_id: UserId,
        vaccine_id: &str,
        index: u32,
        now: DateTime<Utc>,
    ) -> ServiceResult<VaccinationRecordResponse> {
        let vaccine = lookup(vaccine_id)?;
        let mut history = self
            .ctx
            .vaccination_repo()
            .get_vaccination(user_id, vaccine.id)
            .await?;
        history.record_dose(vaccine, index, now)?;

        if let Err(e) = self
            .ctx
            .vaccination_repo()
            .upsert_dose(user_id, vaccine.id, index, now)
            .await
        {
            return Err(self.reconcile(user_id, e.into()).await);
        }

        self.publish_update(user_id, vaccine, history.taken()).await;
        self.get_record(user_id).await
    }

    /// Remove dose `index` of `vaccine_id` and every later dose
    #[instrument(skip(self))]
    pub async fn uncheck_dose(
        &self,
        user_id: UserId,
        vaccine_id: &str,
        index: u32,
    ) -> ServiceResult<VaccinationRecordResponse> {
        let vaccine = lookup(vaccine_id)?;
        let mut history = self
            .ctx
            .vaccination_repo()
            .get_vaccination(user_id, vaccine.id)
            .await?;
        history.clear_from(vaccine, index)?;

        match self
            .ctx
            .vaccination_repo()
            .delete_doses_from(user_id, vaccine.id, index)
            .await
        {
            Ok(removed) => {
                info!(user_id = %user_id, vaccine_id = vaccine.id, removed, "Doses removed");
            }
            Err(e) => return Err(self.reconcile(user_id, e.into()).await),
        }

        self.publish_update(user_id, vaccine, history.taken()).await;
        self.get_record(user_id).await
    }

    /// Re-read the stored record after a failed write so the log shows the
    /// state the client should resync to
    async fn reconcile(&self, user_id: UserId, err: ServiceError) -> ServiceError {
        error!(user_id = %user_id, error = %err, "Dose update failed");
        match self.ctx.vaccination_repo().get_record(user_id).await {
            Ok(record) => {
                let summary: Vec<(String, u32)> = record
                    .iter()
                    .map(|(id, history)| (id.clone(), history.taken()))
                    .collect();
                warn!(user_id = %user_id, ?summary, "Stored record after failed update");
            }
            Err(e) => error!(user_id = %user_id, error = %e, "Failed to re-read record"),
        }
        err
    }

    async fn publish_update(&self, user_id: UserId, vaccine: &Vaccine, taken: u32) {
        let event = DomainEvent::VaccinationUpdated(VaccinationUpdatedEvent::new(
            user_id, vaccine.id, taken,
        ));
        if let Err(e) = self.ctx.event_publisher().publish(&event).await {
            warn!(user_id = %user_id, error = %e, "Failed to publish vaccination update");
        }
    }
}

fn lookup(vaccine_id: &str) -> ServiceResult<&'static Vaccine> {
    find_vaccine(vaccine_id)
        .ok_or_else(|| DomainError::VaccineNotFound(vaccine_id.to_string()).into())
}
