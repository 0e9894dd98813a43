//! Asset API endpoints

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::asset::{Asset, AssignAsset, CreateAsset, UpdateAsset},
};

use super::AuthenticatedUser;

/// List all assets
#[utoipa::path(
    get,
    path = "/assets",
    tag = "assets",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Asset list", body = Vec<Asset>)
    )
)]
pub async fn list_assets(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Asset>>> {
    let assets = state.services.assets.list().await?;
    Ok(Json(assets))
}

/// Assets assigned to the caller or their teams
#[utoipa::path(
    get,
    path = "/assets/mine",
    tag = "assets",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Assigned assets", body = Vec<Asset>)
    )
)]
pub async fn list_my_assets(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Asset>>> {
    let assets = state.services.assets.list_mine(claims.user_id).await?;
    Ok(Json(assets))
}

/// Get asset by ID
#[utoipa::path(
    get,
    path = "/assets/{id}",
    tag = "assets",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Asset ID")),
    responses(
        (status = 200, description = "Asset details", body = Asset)
    )
)]
pub async fn get_asset(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Asset>> {
    let asset = state.services.assets.get_by_id(id).await?;
    Ok(Json(asset))
}

/// Create asset
#[utoipa::path(
    post,
    path = "/assets",
    tag = "assets",
    security(("bearer_auth" = [])),
    request_body = CreateAsset,
    responses(
        (status = 201, description = "Asset created", body = Asset)
    )
)]
pub async fn create_asset(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateAsset>,
) -> AppResult<(StatusCode, Json<Asset>)> {
    claims.require_admin()?;
    let asset = state.services.assets.create(&data).await?;
    Ok((StatusCode::CREATED, Json(asset)))
}

/// Update asset
#[utoipa::path(
    put,
    path = "/assets/{id}",
    tag = "assets",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Asset ID")),
    request_body = UpdateAsset,
    responses(
        (status = 200, description = "Asset updated", body = Asset)
    )
)]
pub async fn update_asset(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateAsset>,
) -> AppResult<Json<Asset>> {
    claims.require_admin()?;
    let asset = state.services.assets.update(id, &data).await?;
    Ok(Json(asset))
}

/// Delete asset
#[utoipa::path(
    delete,
    path = "/assets/{id}",
    tag = "assets",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Asset ID")),
    responses(
        (status = 204, description = "Asset deleted")
    )
)]
pub async fn delete_asset(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    claims.require_admin()?;
    state.services.assets.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Assign an asset to a user or team
#[utoipa::path(
    post,
    path = "/assets/{id}/assign",
    tag = "assets",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Asset ID")),
    request_body = AssignAsset,
    responses(
        (status = 200, description = "Asset assigned", body = Asset)
    )
)]
pub async fn assign_asset(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(data): Json<AssignAsset>,
) -> AppResult<Json<Asset>> {
    claims.require_admin()?;
    let asset = state.services.assets.assign(id, &data).await?;
    Ok(Json(asset))
}

/// Clear an asset's assignment
#[utoipa::path(
    post,
    path = "/assets/{id}/unassign",
    tag = "assets",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Asset ID")),
    responses(
        (status = 200, description = "Asset unassigned", body = Asset)
    )
)]
pub async fn unassign_asset(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Asset>> {
    claims.require_admin()?;
    let asset = state.services.assets.unassign(id).await?;
    Ok(Json(asset))
}

/// Flag an asset as needing repair
#[utoipa::path(
    post,
    path = "/assets/{id}/report-issue",
    tag = "assets",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Asset ID")),
    responses(
        (status = 200, description = "Asset flagged for maintenance", body = Asset)
    )
)]
pub async fn report_issue(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Asset>> {
    let asset = state.services.assets.report_issue(id).await?;
    Ok(Json(asset))
}

/// Upload an asset image (multipart, field name "image")
#[utoipa::path(
    post,
    path = "/assets/{id}/image",
    tag = "assets",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Asset ID")),
    responses(
        (status = 200, description = "Image stored", body = Asset)
    )
)]
pub async fn upload_asset_image(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> AppResult<Json<Asset>> {
    claims.require_admin()?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart payload: {}", e)))?
    {
        if field.name() != Some("image") {
            continue;
        }
        let filename = field.file_name().unwrap_or("image").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {}", e)))?;
        let asset = state
            .services
            .assets
            .attach_image(id, &filename, &bytes)
            .await?;
        return Ok(Json(asset));
    }

    Err(AppError::BadRequest(
        "Missing multipart field \"image\"".to_string(),
    ))
}
