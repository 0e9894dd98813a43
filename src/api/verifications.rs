//! Asset verification API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::verification::{CreateVerification, Verification},
};

use super::AuthenticatedUser;

/// Request a verification from an asset holder (admin)
#[utoipa::path(
    post,
    path = "/verifications",
    tag = "verifications",
    security(("bearer_auth" = [])),
    request_body = CreateVerification,
    responses(
        (status = 201, description = "Verification requested", body = Verification),
        (status = 404, description = "Asset or user not found")
    )
)]
pub async fn create_verification(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateVerification>,
) -> AppResult<(StatusCode, Json<Verification>)> {
    claims.require_admin()?;
    let verification = state.services.verifications.create(&data).await?;
    Ok((StatusCode::CREATED, Json(verification)))
}

/// Pending verifications addressed to the caller
#[utoipa::path(
    get,
    path = "/verifications/mine",
    tag = "verifications",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Pending verifications", body = Vec<Verification>)
    )
)]
pub async fn list_my_verifications(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Verification>>> {
    let verifications = state
        .services
        .verifications
        .list_mine(claims.user_id)
        .await?;
    Ok(Json(verifications))
}

/// Confirm possession of the asset
#[utoipa::path(
    post,
    path = "/verifications/{id}/complete",
    tag = "verifications",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Verification ID")),
    responses(
        (status = 200, description = "Verification completed", body = Verification),
        (status = 422, description = "Verification no longer pending")
    )
)]
pub async fn complete_verification(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Verification>> {
    let verification = state
        .services
        .verifications
        .complete(id, claims.user_id)
        .await?;
    Ok(Json(verification))
}
