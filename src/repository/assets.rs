//! Assets repository for database operations

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::types::Json;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        asset::{Asset, CreateAsset, UpdateAsset, DEFAULT_PURCHASE_PRICE},
        enums::{AssetCondition, AssetStatus},
    },
};

#[derive(Clone)]
pub struct AssetsRepository {
    pool: Pool<Postgres>,
}

impl AssetsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all assets
    pub async fn list(&self) -> AppResult<Vec<Asset>> {
        let assets = sqlx::query_as::<_, Asset>("SELECT * FROM assets ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(assets)
    }

    /// Get asset by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Asset> {
        sqlx::query_as::<_, Asset>("SELECT * FROM assets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", id)))
    }

    /// List assets assigned to a user directly or to any of their teams
    pub async fn list_assigned(&self, user_id: Uuid, team_ids: &[Uuid]) -> AppResult<Vec<Asset>> {
        let assets = sqlx::query_as::<_, Asset>(
            r#"
            SELECT * FROM assets
            WHERE assigned_to_user = $1 OR assigned_to_team = ANY($2)
            ORDER BY name
            "#,
        )
        .bind(user_id)
        .bind(team_ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(assets)
    }

    /// Create a new asset. Assets always start Available and unassigned.
    pub async fn create(&self, data: &CreateAsset) -> AppResult<Asset> {
        let specifications = Json(data.specifications.clone().unwrap_or_default());
        let asset = sqlx::query_as::<_, Asset>(
            r#"
            INSERT INTO assets (
                name, asset_type, model, specifications, serial_number, location,
                purchase_date, purchase_price, condition, status, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.asset_type)
        .bind(&data.model)
        .bind(specifications)
        .bind(&data.serial_number)
        .bind(&data.location)
        .bind(data.purchase_date)
        .bind(data.purchase_price)
        .bind(data.condition.unwrap_or(AssetCondition::Good))
        .bind(AssetStatus::Available)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(asset)
    }

    /// Update descriptive fields of an asset
    pub async fn update(&self, id: Uuid, data: &UpdateAsset) -> AppResult<Asset> {
        let specifications: Option<Json<HashMap<String, String>>> =
            data.specifications.as_ref().map(|s| Json(s.clone()));

        sqlx::query_as::<_, Asset>(
            r#"
            UPDATE assets SET
                name = COALESCE($2, name),
                asset_type = COALESCE($3, asset_type),
                model = COALESCE($4, model),
                specifications = COALESCE($5, specifications),
                serial_number = COALESCE($6, serial_number),
                location = COALESCE($7, location),
                purchase_date = COALESCE($8, purchase_date),
                purchase_price = COALESCE($9, purchase_price),
                condition = COALESCE($10, condition),
                notes = COALESCE($11, notes),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.asset_type)
        .bind(&data.model)
        .bind(specifications)
        .bind(&data.serial_number)
        .bind(&data.location)
        .bind(data.purchase_date)
        .bind(data.purchase_price)
        .bind(data.condition)
        .bind(&data.notes)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", id)))
    }

    /// Delete an asset; returns its image URL for best-effort cleanup.
    /// Bookings and tickets referencing the asset keep their snapshots.
    pub async fn delete(&self, id: Uuid) -> AppResult<Option<String>> {
        let image_url = sqlx::query_scalar::<_, Option<String>>(
            "DELETE FROM assets WHERE id = $1 RETURNING image_url",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", id)))?;
        Ok(image_url)
    }

    /// Replace the stored image URL; returns the previous one for cleanup
    pub async fn set_image_url(&self, id: Uuid, url: &str) -> AppResult<Option<String>> {
        let mut tx = self.pool.begin().await?;

        let previous = sqlx::query_scalar::<_, Option<String>>(
            "SELECT image_url FROM assets WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", id)))?;

        sqlx::query("UPDATE assets SET image_url = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(url)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(previous)
    }

    /// Assign an asset to a user or a team, whichever is given, clearing the
    /// other. Overwriting an existing assignment is permitted (force
    /// reassign); the asset moves to InUse either way.
    pub async fn assign(
        &self,
        id: Uuid,
        user_id: Option<Uuid>,
        team_id: Option<Uuid>,
        due_date: NaiveDate,
    ) -> AppResult<Asset> {
        sqlx::query_as::<_, Asset>(
            r#"
            UPDATE assets SET
                assigned_to_user = $2,
                assigned_to_team = $3,
                assigned_date = $4,
                due_date = $5,
                status = $6,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(team_id)
        .bind(Utc::now())
        .bind(due_date)
        .bind(AssetStatus::InUse)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", id)))
    }

    /// Clear the assignment and return the asset to Available. Idempotent:
    /// unassigning an unassigned asset succeeds without change.
    pub async fn unassign(&self, id: Uuid) -> AppResult<Asset> {
        sqlx::query_as::<_, Asset>(
            r#"
            UPDATE assets SET
                assigned_to_user = NULL,
                assigned_to_team = NULL,
                assigned_date = NULL,
                due_date = NULL,
                status = $2,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(AssetStatus::Available)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", id)))
    }

    /// Flag an asset as needing repair and take it out of circulation.
    /// The assignment is cleared so that InUse implies exactly one assignee.
    pub async fn report_issue(&self, id: Uuid) -> AppResult<Asset> {
        sqlx::query_as::<_, Asset>(
            r#"
            UPDATE assets SET
                condition = $2,
                status = $3,
                assigned_to_user = NULL,
                assigned_to_team = NULL,
                assigned_date = NULL,
                due_date = NULL,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(AssetCondition::NeedsRepair)
        .bind(AssetStatus::Maintenance)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", id)))
    }

    /// Count assets by status
    pub async fn count_by_status(&self, status: AssetStatus) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM assets WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count all assets
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM assets")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Total inventory value, applying the purchase price placeholder
    pub async fn total_value(&self) -> AppResult<Decimal> {
        let total: Option<Decimal> = sqlx::query_scalar(
            "SELECT SUM(COALESCE(purchase_price, $1)) FROM assets",
        )
        .bind(Decimal::from(DEFAULT_PURCHASE_PRICE))
        .fetch_one(&self.pool)
        .await?;
        Ok(total.unwrap_or_default())
    }
}
