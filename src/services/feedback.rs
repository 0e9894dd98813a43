//! Feedback service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::feedback::{CreateFeedback, Feedback},
    repository::Repository,
};

#[derive(Clone)]
pub struct FeedbackService {
    repository: Repository,
}

impl FeedbackService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Feedback>> {
        self.repository.feedback.list().await
    }

    pub async fn create(&self, data: &CreateFeedback, user_id: Uuid) -> AppResult<Feedback> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.feedback.create(data, user_id).await
    }
}
