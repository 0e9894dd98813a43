//! Maintenance ticket model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::enums::{Priority, TicketStatus};

/// Maintenance ticket record
///
/// Invariant: `resolution` is non-null iff `status == Resolved`. Tickets are
/// append-only history; there is no delete operation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MaintenanceTicket {
    pub id: Uuid,
    pub asset_id: Uuid,
    /// Snapshot of the asset at report time
    pub asset_name: String,
    pub asset_type: Option<String>,
    pub reported_by: Uuid,
    pub issue: String,
    pub priority: Priority,
    pub status: TicketStatus,
    pub assigned_to: Option<Uuid>,
    pub notes: Option<String>,
    pub resolution: Option<String>,
    pub report_date: DateTime<Utc>,
    pub resolved_date: Option<DateTime<Utc>>,
}

/// Create maintenance ticket request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTicket {
    pub asset_id: Uuid,
    pub issue: String,
    pub priority: Option<Priority>,
    /// Technician to assign immediately; the ticket then starts Assigned
    pub assigned_to: Option<Uuid>,
    pub notes: Option<String>,
}

/// Assign technician request
#[derive(Debug, Deserialize, ToSchema)]
pub struct AssignTechnician {
    pub technician_id: Uuid,
}

/// Resolve ticket request; resolution text is mandatory
#[derive(Debug, Deserialize, ToSchema)]
pub struct ResolveTicket {
    pub resolution: String,
}
