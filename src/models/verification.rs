//! Asset verification request model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::enums::VerificationStatus;

/// Number of days a holder has to confirm they still have the asset
pub const VERIFICATION_WINDOW_DAYS: i64 = 7;

/// Verification request: asks an asset holder to confirm possession
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Verification {
    pub id: Uuid,
    pub asset_id: Uuid,
    pub user_id: Uuid,
    pub verification_code: String,
    pub status: VerificationStatus,
    pub created_at: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Create verification request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateVerification {
    pub asset_id: Uuid,
    pub user_id: Uuid,
}
