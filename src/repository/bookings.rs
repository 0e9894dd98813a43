//! Bookings repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        booking::{Booking, CreateBooking},
        enums::{AssetStatus, BookingStatus, Priority},
        team::Team,
        user::User,
    },
};

#[derive(Clone)]
pub struct BookingsRepository {
    pool: Pool<Postgres>,
}

impl BookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get booking by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))
    }

    /// List all bookings, newest request first
    pub async fn list(&self) -> AppResult<Vec<Booking>> {
        let bookings =
            sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY request_date DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(bookings)
    }

    /// List bookings submitted by a user plus bookings of their teams
    pub async fn list_for_requester(
        &self,
        user_id: Uuid,
        team_ids: &[Uuid],
    ) -> AppResult<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>(
            r#"
            SELECT * FROM bookings
            WHERE requested_by = $1 OR created_by = $1 OR requested_by_team = ANY($2)
            ORDER BY request_date DESC
            "#,
        )
        .bind(user_id)
        .bind(team_ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(bookings)
    }

    /// Create a booking. The asset snapshot comes from the request as-is;
    /// no existence check is made against the assets table.
    pub async fn create(
        &self,
        data: &CreateBooking,
        requester: &User,
        team: Option<&Team>,
    ) -> AppResult<Booking> {
        // Personal bookings carry the user as requester; team bookings carry
        // the team, with created_by still recording who submitted it.
        let (requested_by, requested_by_name, requested_by_department) = match team {
            Some(_) => (None, None, None),
            None => (
                Some(requester.id),
                Some(requester.name.clone()),
                requester.department.clone(),
            ),
        };

        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (
                asset_id, asset_name, asset_type, asset_model,
                requested_by, requested_by_name, requested_by_department,
                requested_by_team, requested_by_team_name, created_by,
                start_date, end_date, purpose, priority, status, request_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING *
            "#,
        )
        .bind(data.asset_id)
        .bind(&data.asset_name)
        .bind(&data.asset_type)
        .bind(&data.asset_model)
        .bind(requested_by)
        .bind(requested_by_name)
        .bind(requested_by_department)
        .bind(team.map(|t| t.id))
        .bind(team.map(|t| t.name.clone()))
        .bind(requester.id)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(&data.purpose)
        .bind(data.priority.unwrap_or(Priority::Medium))
        .bind(BookingStatus::Pending)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(booking)
    }

    /// Approve a pending booking and claim the referenced asset.
    ///
    /// Runs as one transaction: the booking row is locked, must still be
    /// Pending, and the asset (when it exists) is claimed only while
    /// Available. An asset already InUse or in Maintenance aborts the whole
    /// operation with a conflict, so of two racing approvals exactly one
    /// wins. A missing asset does not block approval; bookings reference
    /// assets by snapshot.
    pub async fn approve(&self, id: Uuid, approver_id: Uuid) -> AppResult<Booking> {
        let mut tx = self.pool.begin().await?;

        let booking =
            sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))?;

        if !booking.status.can_transition_to(BookingStatus::Approved) {
            return Err(AppError::InvalidState(format!(
                "Cannot approve a booking in state {}",
                booking.status
            )));
        }

        let asset_status = sqlx::query_scalar::<_, AssetStatus>(
            "SELECT status FROM assets WHERE id = $1 FOR UPDATE",
        )
        .bind(booking.asset_id)
        .fetch_optional(&mut *tx)
        .await?;

        match asset_status {
            Some(AssetStatus::Available) => {
                sqlx::query(
                    r#"
                    UPDATE assets SET
                        status = $2,
                        assigned_to_user = $3,
                        assigned_to_team = $4,
                        assigned_date = $5,
                        due_date = $6,
                        updated_at = NOW()
                    WHERE id = $1
                    "#,
                )
                .bind(booking.asset_id)
                .bind(AssetStatus::InUse)
                .bind(booking.requested_by)
                .bind(booking.requested_by_team)
                .bind(Utc::now())
                .bind(booking.end_date)
                .execute(&mut *tx)
                .await?;
            }
            Some(status) => {
                return Err(AppError::Conflict(format!(
                    "Asset {} is not available (currently {})",
                    booking.asset_id, status
                )));
            }
            None => {
                tracing::warn!(
                    booking_id = %id,
                    asset_id = %booking.asset_id,
                    "Approving booking whose asset no longer exists"
                );
            }
        }

        let approved = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings SET status = $2, approved_by = $3, approved_at = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(BookingStatus::Approved)
        .bind(approver_id)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(approved)
    }

    /// Reject a pending booking, or cancel a prior approval.
    ///
    /// Cancelling an approval releases the asset, but only while it is still
    /// InUse and held by this booking's requester; an asset that moved on in
    /// the meantime is left alone.
    pub async fn reject(&self, id: Uuid, rejecter_id: Uuid, reason: &str) -> AppResult<Booking> {
        let mut tx = self.pool.begin().await?;

        let booking =
            sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))?;

        if !booking.status.can_transition_to(BookingStatus::Rejected) {
            return Err(AppError::InvalidState(format!(
                "Cannot reject a booking in state {}",
                booking.status
            )));
        }

        if booking.status == BookingStatus::Approved {
            let released = sqlx::query(
                r#"
                UPDATE assets SET
                    status = $2,
                    assigned_to_user = NULL,
                    assigned_to_team = NULL,
                    assigned_date = NULL,
                    due_date = NULL,
                    updated_at = NOW()
                WHERE id = $1
                  AND status = $3
                  AND assigned_to_user IS NOT DISTINCT FROM $4
                  AND assigned_to_team IS NOT DISTINCT FROM $5
                "#,
            )
            .bind(booking.asset_id)
            .bind(AssetStatus::Available)
            .bind(AssetStatus::InUse)
            .bind(booking.requested_by)
            .bind(booking.requested_by_team)
            .execute(&mut *tx)
            .await?;

            if released.rows_affected() == 0 {
                tracing::warn!(
                    booking_id = %id,
                    asset_id = %booking.asset_id,
                    "Cancelled approval without releasing asset: no longer held by this booking"
                );
            }
        }

        let rejected = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings SET
                status = $2, rejection_reason = $3, rejected_by = $4, rejected_at = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(BookingStatus::Rejected)
        .bind(reason)
        .bind(rejecter_id)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(rejected)
    }

    /// Hard-delete a booking. Only the submitter may cancel, and only while
    /// the booking is still Pending.
    pub async fn cancel(&self, id: Uuid, caller_id: Uuid) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let booking =
            sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))?;

        if !booking.status.can_cancel() {
            return Err(AppError::InvalidState(format!(
                "Only pending bookings can be cancelled (currently {})",
                booking.status
            )));
        }

        if booking.created_by != caller_id {
            return Err(AppError::Authorization(
                "Only the requester may cancel this booking".to_string(),
            ));
        }

        sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Count pending bookings
    pub async fn count_pending(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE status = $1")
            .bind(BookingStatus::Pending)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
