//! Feedback model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Feedback record submitted by an employee
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Feedback {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category: Option<String>,
    pub subject: String,
    pub message: String,
    /// 1-5 stars
    pub rating: i16,
    pub created_at: DateTime<Utc>,
}

/// Create feedback request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFeedback {
    pub category: Option<String>,
    #[validate(length(min = 1))]
    pub subject: String,
    #[validate(length(min = 1))]
    pub message: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: i16,
}
