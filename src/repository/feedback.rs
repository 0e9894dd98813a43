//! Feedback repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::feedback::{CreateFeedback, Feedback},
};

#[derive(Clone)]
pub struct FeedbackRepository {
    pool: Pool<Postgres>,
}

impl FeedbackRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all feedback, newest first
    pub async fn list(&self) -> AppResult<Vec<Feedback>> {
        let feedback =
            sqlx::query_as::<_, Feedback>("SELECT * FROM feedback ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(feedback)
    }

    /// Store a feedback entry
    pub async fn create(&self, data: &CreateFeedback, user_id: Uuid) -> AppResult<Feedback> {
        let feedback = sqlx::query_as::<_, Feedback>(
            r#"
            INSERT INTO feedback (user_id, category, subject, message, rating)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&data.category)
        .bind(&data.subject)
        .bind(&data.message)
        .bind(data.rating)
        .fetch_one(&self.pool)
        .await?;
        Ok(feedback)
    }
}
