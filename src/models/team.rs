//! Team model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Team record. Membership lives in the `team_members` relation; the member
/// list returned here and a user's team list are two views of that relation,
/// so the two sides can never disagree.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub department: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Team with its member ids aggregated
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TeamDetails {
    pub id: Uuid,
    pub name: String,
    pub department: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub members: Vec<Uuid>,
}

/// Create team request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTeam {
    pub name: String,
    pub department: Option<String>,
    pub description: Option<String>,
}

/// Update team request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTeam {
    pub name: Option<String>,
    pub department: Option<String>,
    pub description: Option<String>,
}
