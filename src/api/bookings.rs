//! Booking API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::booking::{Booking, CreateBooking, RejectBooking},
};

use super::AuthenticatedUser;

/// List all bookings (admin)
#[utoipa::path(
    get,
    path = "/bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Booking list", body = Vec<Booking>)
    )
)]
pub async fn list_bookings(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Booking>>> {
    claims.require_admin()?;
    let bookings = state.services.bookings.list().await?;
    Ok(Json(bookings))
}

/// Bookings submitted by the caller plus their teams' bookings
#[utoipa::path(
    get,
    path = "/bookings/mine",
    tag = "bookings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Own and team bookings", body = Vec<Booking>)
    )
)]
pub async fn list_my_bookings(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Booking>>> {
    let bookings = state.services.bookings.list_mine(claims.user_id).await?;
    Ok(Json(bookings))
}

/// Create a booking request
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    request_body = CreateBooking,
    responses(
        (status = 201, description = "Booking created", body = Booking)
    )
)]
pub async fn create_booking(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    let booking = state
        .services
        .bookings
        .create(&data, claims.user_id)
        .await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// Approve a pending booking and claim its asset
#[utoipa::path(
    post,
    path = "/bookings/{id}/approve",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking approved", body = Booking),
        (status = 409, description = "Asset already claimed"),
        (status = 422, description = "Booking not pending")
    )
)]
pub async fn approve_booking(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Booking>> {
    claims.require_admin()?;
    let booking = state.services.bookings.approve(id, claims.user_id).await?;
    Ok(Json(booking))
}

/// Reject a pending booking or cancel a prior approval
#[utoipa::path(
    post,
    path = "/bookings/{id}/reject",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Booking ID")),
    request_body = RejectBooking,
    responses(
        (status = 200, description = "Booking rejected", body = Booking),
        (status = 400, description = "Missing rejection reason")
    )
)]
pub async fn reject_booking(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(data): Json<RejectBooking>,
) -> AppResult<Json<Booking>> {
    claims.require_admin()?;
    let booking = state
        .services
        .bookings
        .reject(id, claims.user_id, &data.reason)
        .await?;
    Ok(Json(booking))
}

/// Cancel (delete) one's own pending booking
#[utoipa::path(
    delete,
    path = "/bookings/{id}",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Booking ID")),
    responses(
        (status = 204, description = "Booking cancelled"),
        (status = 422, description = "Booking no longer pending")
    )
)]
pub async fn cancel_booking(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.bookings.cancel(id, claims.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
