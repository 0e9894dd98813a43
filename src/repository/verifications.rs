//! Asset verification requests repository

use chrono::{Duration, Utc};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::VerificationStatus,
        verification::{Verification, VERIFICATION_WINDOW_DAYS},
    },
};

#[derive(Clone)]
pub struct VerificationsRepository {
    pool: Pool<Postgres>,
}

impl VerificationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Create a verification request, due in seven days
    pub async fn create(
        &self,
        asset_id: Uuid,
        user_id: Uuid,
        verification_code: &str,
    ) -> AppResult<Verification> {
        let due_date = Utc::now() + Duration::days(VERIFICATION_WINDOW_DAYS);
        let verification = sqlx::query_as::<_, Verification>(
            r#"
            INSERT INTO verifications (asset_id, user_id, verification_code, status, due_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(asset_id)
        .bind(user_id)
        .bind(verification_code)
        .bind(VerificationStatus::Pending)
        .bind(due_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(verification)
    }

    /// Pending verification requests for a user
    pub async fn list_pending_for_user(&self, user_id: Uuid) -> AppResult<Vec<Verification>> {
        let verifications = sqlx::query_as::<_, Verification>(
            r#"
            SELECT * FROM verifications
            WHERE user_id = $1 AND status = $2
            ORDER BY due_date
            "#,
        )
        .bind(user_id)
        .bind(VerificationStatus::Pending)
        .fetch_all(&self.pool)
        .await?;
        Ok(verifications)
    }

    /// Mark a pending verification as completed
    pub async fn complete(&self, id: Uuid, user_id: Uuid) -> AppResult<Verification> {
        let mut tx = self.pool.begin().await?;

        let verification = sqlx::query_as::<_, Verification>(
            "SELECT * FROM verifications WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Verification {} not found", id)))?;

        if verification.user_id != user_id {
            return Err(AppError::Authorization(
                "Verification belongs to another user".to_string(),
            ));
        }

        if verification.status != VerificationStatus::Pending {
            return Err(AppError::InvalidState(
                "Verification is already completed".to_string(),
            ));
        }

        let updated = sqlx::query_as::<_, Verification>(
            r#"
            UPDATE verifications SET status = $2, completed_at = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(VerificationStatus::Completed)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(updated)
    }
}
