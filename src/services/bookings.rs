//! Booking workflow service

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::booking::{Booking, CreateBooking},
    repository::Repository,
};

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
}

impl BookingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Booking>> {
        self.repository.bookings.list().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Booking> {
        self.repository.bookings.get_by_id(id).await
    }

    /// Bookings the user submitted plus bookings of their teams
    pub async fn list_mine(&self, user_id: Uuid) -> AppResult<Vec<Booking>> {
        let team_ids = self.repository.teams.team_ids_for_user(user_id).await?;
        self.repository
            .bookings
            .list_for_requester(user_id, &team_ids)
            .await
    }

    /// Create a booking on behalf of the calling user, or of one of their
    /// teams. No existence check is made against the asset; the request
    /// carries the snapshot.
    pub async fn create(&self, data: &CreateBooking, user_id: Uuid) -> AppResult<Booking> {
        validate_date_range(data.start_date, data.end_date)?;
        if data.purpose.trim().is_empty() {
            return Err(AppError::Validation("A purpose is required".to_string()));
        }

        let requester = self.repository.users.get_by_id(user_id).await?;

        let team = match data.team_id {
            Some(team_id) => {
                let membership = self.repository.teams.team_ids_for_user(user_id).await?;
                if !membership.contains(&team_id) {
                    return Err(AppError::Authorization(
                        "Cannot book on behalf of a team you do not belong to".to_string(),
                    ));
                }
                Some(self.repository.teams.get_row(team_id).await?)
            }
            None => None,
        };

        self.repository
            .bookings
            .create(data, &requester, team.as_ref())
            .await
    }

    pub async fn approve(&self, id: Uuid, approver_id: Uuid) -> AppResult<Booking> {
        self.repository.bookings.approve(id, approver_id).await
    }

    pub async fn reject(&self, id: Uuid, rejecter_id: Uuid, reason: &str) -> AppResult<Booking> {
        validate_rejection_reason(reason)?;
        self.repository.bookings.reject(id, rejecter_id, reason).await
    }

    pub async fn cancel(&self, id: Uuid, caller_id: Uuid) -> AppResult<()> {
        self.repository.bookings.cancel(id, caller_id).await
    }
}

/// Bookings must not end before they start
fn validate_date_range(start: NaiveDate, end: NaiveDate) -> AppResult<()> {
    if end < start {
        return Err(AppError::Validation(
            "End date must not be before start date".to_string(),
        ));
    }
    Ok(())
}

/// A rejection must carry a non-blank reason
fn validate_rejection_reason(reason: &str) -> AppResult<()> {
    if reason.trim().is_empty() {
        return Err(AppError::Validation(
            "A rejection reason is required".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn date_range_accepts_same_day() {
        assert!(validate_date_range(date("2024-06-01"), date("2024-06-01")).is_ok());
    }

    #[test]
    fn date_range_rejects_end_before_start() {
        assert!(validate_date_range(date("2024-06-02"), date("2024-06-01")).is_err());
    }

    #[test]
    fn rejection_reason_must_not_be_blank() {
        assert!(validate_rejection_reason("").is_err());
        assert!(validate_rejection_reason("   ").is_err());
        assert!(validate_rejection_reason("Asset reserved for audit").is_ok());
    }
}
