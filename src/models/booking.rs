//! Booking model and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::enums::{BookingStatus, Priority};

/// Booking record
///
/// The asset fields are snapshots captured at creation time; they are never
/// re-joined against the live asset. The requester is either a user or a
/// team (mutually exclusive); `created_by` always records who submitted the
/// request and holds the self-cancel permission.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Booking {
    pub id: Uuid,
    pub asset_id: Uuid,
    pub asset_name: String,
    pub asset_type: Option<String>,
    pub asset_model: Option<String>,
    pub requested_by: Option<Uuid>,
    pub requested_by_name: Option<String>,
    pub requested_by_department: Option<String>,
    pub requested_by_team: Option<Uuid>,
    pub requested_by_team_name: Option<String>,
    pub created_by: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub purpose: String,
    pub priority: Priority,
    pub status: BookingStatus,
    pub rejection_reason: Option<String>,
    pub request_date: DateTime<Utc>,
    pub approved_by: Option<Uuid>,
    pub approved_at: Option<DateTime<Utc>>,
    pub rejected_by: Option<Uuid>,
    pub rejected_at: Option<DateTime<Utc>>,
}

/// Create booking request. The asset snapshot travels with the request;
/// no existence check is performed against the assets collection.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBooking {
    pub asset_id: Uuid,
    pub asset_name: String,
    pub asset_type: Option<String>,
    pub asset_model: Option<String>,
    /// Book on behalf of a team the requester belongs to
    pub team_id: Option<Uuid>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub purpose: String,
    pub priority: Option<Priority>,
}

/// Reject booking request; a reason is mandatory
#[derive(Debug, Deserialize, ToSchema)]
pub struct RejectBooking {
    pub reason: String,
}
