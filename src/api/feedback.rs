//! Feedback API endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::feedback::{CreateFeedback, Feedback},
};

use super::AuthenticatedUser;

/// List all submitted feedback (admin)
#[utoipa::path(
    get,
    path = "/feedback",
    tag = "feedback",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Feedback list", body = Vec<Feedback>)
    )
)]
pub async fn list_feedback(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Feedback>>> {
    claims.require_admin()?;
    let entries = state.services.feedback.list().await?;
    Ok(Json(entries))
}

/// Submit feedback
#[utoipa::path(
    post,
    path = "/feedback",
    tag = "feedback",
    security(("bearer_auth" = [])),
    request_body = CreateFeedback,
    responses(
        (status = 201, description = "Feedback recorded", body = Feedback),
        (status = 400, description = "Invalid rating or empty message")
    )
)]
pub async fn create_feedback(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateFeedback>,
) -> AppResult<(StatusCode, Json<Feedback>)> {
    let entry = state
        .services
        .feedback
        .create(&data, claims.user_id)
        .await?;
    Ok((StatusCode::CREATED, Json(entry)))
}
