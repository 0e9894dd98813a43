//! Maintenance ticket API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::maintenance::{AssignTechnician, CreateTicket, MaintenanceTicket, ResolveTicket},
};

use super::AuthenticatedUser;

/// List all maintenance tickets
#[utoipa::path(
    get,
    path = "/maintenance",
    tag = "maintenance",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Ticket list", body = Vec<MaintenanceTicket>)
    )
)]
pub async fn list_tickets(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<MaintenanceTicket>>> {
    let tickets = state.services.maintenance.list().await?;
    Ok(Json(tickets))
}

/// Get a ticket by ID
#[utoipa::path(
    get,
    path = "/maintenance/{id}",
    tag = "maintenance",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Ticket ID")),
    responses(
        (status = 200, description = "Ticket found", body = MaintenanceTicket),
        (status = 404, description = "Ticket not found")
    )
)]
pub async fn get_ticket(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MaintenanceTicket>> {
    let ticket = state.services.maintenance.get_by_id(id).await?;
    Ok(Json(ticket))
}

/// Open a maintenance ticket for an asset. Any user may self-report;
/// assigning, starting, and resolving stay with maintenance staff.
#[utoipa::path(
    post,
    path = "/maintenance",
    tag = "maintenance",
    security(("bearer_auth" = [])),
    request_body = CreateTicket,
    responses(
        (status = 201, description = "Ticket created", body = MaintenanceTicket),
        (status = 404, description = "Asset not found")
    )
)]
pub async fn create_ticket(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateTicket>,
) -> AppResult<(StatusCode, Json<MaintenanceTicket>)> {
    let ticket = state
        .services
        .maintenance
        .create(&data, claims.user_id)
        .await?;
    Ok((StatusCode::CREATED, Json(ticket)))
}

/// Assign a technician to a pending ticket
#[utoipa::path(
    post,
    path = "/maintenance/{id}/assign",
    tag = "maintenance",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Ticket ID")),
    request_body = AssignTechnician,
    responses(
        (status = 200, description = "Technician assigned", body = MaintenanceTicket),
        (status = 422, description = "Ticket already resolved")
    )
)]
pub async fn assign_technician(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(data): Json<AssignTechnician>,
) -> AppResult<Json<MaintenanceTicket>> {
    claims.require_maintenance_staff()?;
    let ticket = state
        .services
        .maintenance
        .assign_technician(id, data.technician_id)
        .await?;
    Ok(Json(ticket))
}

/// Mark an assigned ticket as in progress
#[utoipa::path(
    post,
    path = "/maintenance/{id}/start",
    tag = "maintenance",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Ticket ID")),
    responses(
        (status = 200, description = "Work started", body = MaintenanceTicket),
        (status = 422, description = "Ticket not in a startable state")
    )
)]
pub async fn start_ticket(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MaintenanceTicket>> {
    claims.require_maintenance_staff()?;
    let ticket = state.services.maintenance.start(id).await?;
    Ok(Json(ticket))
}

/// Resolve a ticket and return its asset to service
#[utoipa::path(
    post,
    path = "/maintenance/{id}/resolve",
    tag = "maintenance",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Ticket ID")),
    request_body = ResolveTicket,
    responses(
        (status = 200, description = "Ticket resolved", body = MaintenanceTicket),
        (status = 422, description = "Ticket already resolved")
    )
)]
pub async fn resolve_ticket(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(data): Json<ResolveTicket>,
) -> AppResult<Json<MaintenanceTicket>> {
    claims.require_maintenance_staff()?;
    let ticket = state
        .services
        .maintenance
        .resolve(id, &data.resolution)
        .await?;
    Ok(Json(ticket))
}
