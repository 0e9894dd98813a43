//! Maintenance tickets repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        asset::Asset,
        enums::{AssetCondition, AssetStatus, Priority, TicketStatus},
        maintenance::{CreateTicket, MaintenanceTicket},
    },
};

#[derive(Clone)]
pub struct MaintenanceRepository {
    pool: Pool<Postgres>,
}

impl MaintenanceRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get ticket by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<MaintenanceTicket> {
        sqlx::query_as::<_, MaintenanceTicket>("SELECT * FROM maintenance_tickets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Maintenance ticket {} not found", id)))
    }

    /// List all tickets, newest first
    pub async fn list(&self) -> AppResult<Vec<MaintenanceTicket>> {
        let tickets = sqlx::query_as::<_, MaintenanceTicket>(
            "SELECT * FROM maintenance_tickets ORDER BY report_date DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(tickets)
    }

    /// Create a ticket and flag its asset.
    ///
    /// One transaction: the asset must exist (its snapshot seeds the ticket),
    /// is set to Maintenance / NeedsRepair, and its assignment is cleared.
    /// The ticket starts Assigned when a technician is given, Pending
    /// otherwise.
    pub async fn create(&self, data: &CreateTicket, reporter_id: Uuid) -> AppResult<MaintenanceTicket> {
        let mut tx = self.pool.begin().await?;

        let asset = sqlx::query_as::<_, Asset>("SELECT * FROM assets WHERE id = $1 FOR UPDATE")
            .bind(data.asset_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", data.asset_id)))?;

        let status = if data.assigned_to.is_some() {
            TicketStatus::Pending.after_technician_assigned()
        } else {
            TicketStatus::Pending
        };

        let ticket = sqlx::query_as::<_, MaintenanceTicket>(
            r#"
            INSERT INTO maintenance_tickets (
                asset_id, asset_name, asset_type, reported_by, issue,
                priority, status, assigned_to, notes, report_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(asset.id)
        .bind(&asset.name)
        .bind(&asset.asset_type)
        .bind(reporter_id)
        .bind(&data.issue)
        .bind(data.priority.unwrap_or(Priority::Medium))
        .bind(status)
        .bind(data.assigned_to)
        .bind(&data.notes)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            UPDATE assets SET
                status = $2,
                condition = $3,
                assigned_to_user = NULL,
                assigned_to_team = NULL,
                assigned_date = NULL,
                due_date = NULL,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(asset.id)
        .bind(AssetStatus::Maintenance)
        .bind(AssetCondition::NeedsRepair)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(ticket)
    }

    /// Set or replace the assigned technician. A Pending ticket advances to
    /// Assigned; other open states keep their status. Resolved is terminal.
    pub async fn assign_technician(&self, id: Uuid, technician_id: Uuid) -> AppResult<MaintenanceTicket> {
        let mut tx = self.pool.begin().await?;

        let ticket = sqlx::query_as::<_, MaintenanceTicket>(
            "SELECT * FROM maintenance_tickets WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Maintenance ticket {} not found", id)))?;

        if !ticket.status.can_assign_technician() {
            return Err(AppError::InvalidState(
                "Cannot assign a technician to a resolved ticket".to_string(),
            ));
        }

        let updated = sqlx::query_as::<_, MaintenanceTicket>(
            r#"
            UPDATE maintenance_tickets SET assigned_to = $2, status = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(technician_id)
        .bind(ticket.status.after_technician_assigned())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(updated)
    }

    /// Move a Pending or Assigned ticket to InProgress
    pub async fn start(&self, id: Uuid) -> AppResult<MaintenanceTicket> {
        let mut tx = self.pool.begin().await?;

        let ticket = sqlx::query_as::<_, MaintenanceTicket>(
            "SELECT * FROM maintenance_tickets WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Maintenance ticket {} not found", id)))?;

        if !ticket.status.can_start() {
            return Err(AppError::InvalidState(format!(
                "Cannot start work on a ticket in state {}",
                ticket.status
            )));
        }

        let updated = sqlx::query_as::<_, MaintenanceTicket>(
            "UPDATE maintenance_tickets SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(TicketStatus::InProgress)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(updated)
    }

    /// Resolve a ticket and return the asset to circulation.
    ///
    /// The asset reset (Available / Good) is conditional on the asset still
    /// being in Maintenance; an asset that was deleted or moved to another
    /// state in the meantime is left untouched and logged. The ticket
    /// resolution itself always succeeds from any open state.
    pub async fn resolve(&self, id: Uuid, resolution: &str) -> AppResult<MaintenanceTicket> {
        let mut tx = self.pool.begin().await?;

        let ticket = sqlx::query_as::<_, MaintenanceTicket>(
            "SELECT * FROM maintenance_tickets WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Maintenance ticket {} not found", id)))?;

        if !ticket.status.can_resolve() {
            return Err(AppError::InvalidState(
                "Ticket is already resolved".to_string(),
            ));
        }

        let updated = sqlx::query_as::<_, MaintenanceTicket>(
            r#"
            UPDATE maintenance_tickets SET status = $2, resolution = $3, resolved_date = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(TicketStatus::Resolved)
        .bind(resolution)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        let reset = sqlx::query(
            r#"
            UPDATE assets SET status = $2, condition = $3, updated_at = NOW()
            WHERE id = $1 AND status = $4
            "#,
        )
        .bind(ticket.asset_id)
        .bind(AssetStatus::Available)
        .bind(AssetCondition::Good)
        .bind(AssetStatus::Maintenance)
        .execute(&mut *tx)
        .await?;

        if reset.rows_affected() == 0 {
            tracing::warn!(
                ticket_id = %id,
                asset_id = %ticket.asset_id,
                "Resolved ticket without resetting asset: missing or no longer in maintenance"
            );
        }

        tx.commit().await?;
        Ok(updated)
    }

    /// Count open (non-resolved) tickets
    pub async fn count_open(&self) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM maintenance_tickets WHERE status <> $1")
                .bind(TicketStatus::Resolved)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}
