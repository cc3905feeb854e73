//! PostgreSQL implementation of VaccinationRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use vax_core::entities::{UserVaccination, VaccinationRecord};
use vax_core::traits::{RepoResult, VaccinationRepository};
use vax_core::value_objects::UserId;

use crate::mappers::{dose_index_to_db, record_from_rows, vaccination_from_rows};
use crate::models::VaccinationDoseModel;

use super::error::map_db_error;

/// PostgreSQL implementation of VaccinationRepository
///
/// One row per administered dose; a user's record is the grouping of their rows.
#[derive(Clone)]
pub struct PgVaccinationRepository {
    pool: PgPool,
}

impl PgVaccinationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VaccinationRepository for PgVaccinationRepository {
    #[instrument(skip(self))]
    async fn get_record(&self, user_id: UserId) -> RepoResult<VaccinationRecord> {
        let rows = sqlx::query_as::<_, VaccinationDoseModel>(
            r"
            SELECT vaccine_id, dose_index, administered_at
            FROM vaccination_doses
            WHERE user_id = $1
            ORDER BY vaccine_id, dose_index
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(record_from_rows(rows))
    }

    #[instrument(skip(self))]
    async fn get_vaccination(
        &self,
        user_id: UserId,
        vaccine_id: &str,
    ) -> RepoResult<UserVaccination> {
        let rows = sqlx::query_as::<_, VaccinationDoseModel>(
            r"
            SELECT vaccine_id, dose_index, administered_at
            FROM vaccination_doses
            WHERE user_id = $1 AND vaccine_id = $2
            ORDER BY dose_index
            ",
        )
        .bind(user_id.into_inner())
        .bind(vaccine_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(vaccination_from_rows(rows))
    }

    #[instrument(skip(self))]
    async fn upsert_dose(
        &self,
        user_id: UserId,
        vaccine_id: &str,
        index: u32,
        administered_at: DateTime<Utc>,
    ) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO vaccination_doses (user_id, vaccine_id, dose_index, administered_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, vaccine_id, dose_index)
            DO UPDATE SET administered_at = EXCLUDED.administered_at
            ",
        )
        .bind(user_id.into_inner())
        .bind(vaccine_id)
        .bind(dose_index_to_db(index))
        .bind(administered_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_doses_from(
        &self,
        user_id: UserId,
        vaccine_id: &str,
        index: u32,
    ) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM vaccination_doses
            WHERE user_id = $1 AND vaccine_id = $2 AND dose_index >= $3
            ",
        )
        .bind(user_id.into_inner())
        .bind(vaccine_id)
        .bind(dose_index_to_db(index))
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self, record), fields(vaccines = record.len()))]
    async fn replace_record(&self, user_id: UserId, record: &VaccinationRecord) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("DELETE FROM vaccination_doses WHERE user_id = $1")
            .bind(user_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        for (vaccine_id, vaccination) in record {
            for (index, administered_at) in &vaccination.doses {
                sqlx::query(
                    r"
                    INSERT INTO vaccination_doses (user_id, vaccine_id, dose_index, administered_at)
                    VALUES ($1, $2, $3, $4)
                    ",
                )
                .bind(user_id.into_inner())
                .bind(vaccine_id)
                .bind(dose_index_to_db(*index))
                .bind(*administered_at)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
            }
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
