//! Team API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::team::{CreateTeam, Team, TeamDetails, UpdateTeam},
};

use super::AuthenticatedUser;

/// List all teams with their member IDs
#[utoipa::path(
    get,
    path = "/teams",
    tag = "teams",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Team list", body = Vec<TeamDetails>)
    )
)]
pub async fn list_teams(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<TeamDetails>>> {
    let teams = state.services.teams.list().await?;
    Ok(Json(teams))
}

/// Get a team by ID
#[utoipa::path(
    get,
    path = "/teams/{id}",
    tag = "teams",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team found", body = TeamDetails),
        (status = 404, description = "Team not found")
    )
)]
pub async fn get_team(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<TeamDetails>> {
    let team = state.services.teams.get_by_id(id).await?;
    Ok(Json(team))
}

/// Create a team (admin)
#[utoipa::path(
    post,
    path = "/teams",
    tag = "teams",
    security(("bearer_auth" = [])),
    request_body = CreateTeam,
    responses(
        (status = 201, description = "Team created", body = Team)
    )
)]
pub async fn create_team(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateTeam>,
) -> AppResult<(StatusCode, Json<Team>)> {
    claims.require_admin()?;
    let team = state.services.teams.create(&data).await?;
    Ok((StatusCode::CREATED, Json(team)))
}

/// Update a team (admin)
#[utoipa::path(
    put,
    path = "/teams/{id}",
    tag = "teams",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Team ID")),
    request_body = UpdateTeam,
    responses(
        (status = 200, description = "Team updated", body = Team),
        (status = 404, description = "Team not found")
    )
)]
pub async fn update_team(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateTeam>,
) -> AppResult<Json<Team>> {
    claims.require_admin()?;
    let team = state.services.teams.update(id, &data).await?;
    Ok(Json(team))
}

/// Delete a team and its memberships (admin)
#[utoipa::path(
    delete,
    path = "/teams/{id}",
    tag = "teams",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Team ID")),
    responses(
        (status = 204, description = "Team deleted"),
        (status = 404, description = "Team not found")
    )
)]
pub async fn delete_team(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    claims.require_admin()?;
    state.services.teams.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add a user to a team (admin)
#[utoipa::path(
    post,
    path = "/teams/{id}/members/{user_id}",
    tag = "teams",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Team ID"),
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Member added", body = TeamDetails),
        (status = 404, description = "Team or user not found")
    )
)]
pub async fn add_team_member(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path((id, user_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<TeamDetails>> {
    claims.require_admin()?;
    let team = state.services.teams.add_member(id, user_id).await?;
    Ok(Json(team))
}

/// Remove a user from a team (admin)
#[utoipa::path(
    delete,
    path = "/teams/{id}/members/{user_id}",
    tag = "teams",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Team ID"),
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Member removed", body = TeamDetails),
        (status = 404, description = "Team not found")
    )
)]
pub async fn remove_team_member(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path((id, user_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<TeamDetails>> {
    claims.require_admin()?;
    let team = state.services.teams.remove_member(id, user_id).await?;
    Ok(Json(team))
}
