//! Asset lifecycle service

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::asset::{Asset, AssignAsset, CreateAsset, UpdateAsset},
    repository::Repository,
};

use super::storage::StorageService;

#[derive(Clone)]
pub struct AssetsService {
    repository: Repository,
    storage: StorageService,
}

impl AssetsService {
    pub fn new(repository: Repository, storage: StorageService) -> Self {
        Self { repository, storage }
    }

    pub async fn list(&self) -> AppResult<Vec<Asset>> {
        self.repository.assets.list().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Asset> {
        self.repository.assets.get_by_id(id).await
    }

    /// Assets assigned to a user directly or through any of their teams
    pub async fn list_mine(&self, user_id: Uuid) -> AppResult<Vec<Asset>> {
        let team_ids = self.repository.teams.team_ids_for_user(user_id).await?;
        self.repository.assets.list_assigned(user_id, &team_ids).await
    }

    pub async fn create(&self, data: &CreateAsset) -> AppResult<Asset> {
        if data.name.trim().is_empty() {
            return Err(AppError::Validation("Asset name is required".to_string()));
        }
        self.repository.assets.create(data).await
    }

    pub async fn update(&self, id: Uuid, data: &UpdateAsset) -> AppResult<Asset> {
        self.repository.assets.update(id, data).await
    }

    /// Delete an asset. Its stored image is removed best-effort: a failed
    /// file deletion is logged but never blocks the entity mutation.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let image_url = self.repository.assets.delete(id).await?;
        if let Some(url) = image_url {
            self.storage.delete_image(&url).await;
        }
        Ok(())
    }

    /// Assign an asset to a user or team with a due date
    pub async fn assign(&self, id: Uuid, data: &AssignAsset) -> AppResult<Asset> {
        validate_assignment_target(data)?;
        validate_due_date(data.due_date)?;

        // The target must exist; the asset itself may be force-reassigned
        if let Some(user_id) = data.user_id {
            self.repository.users.get_by_id(user_id).await?;
        }
        if let Some(team_id) = data.team_id {
            self.repository.teams.get_row(team_id).await?;
        }

        self.repository
            .assets
            .assign(id, data.user_id, data.team_id, data.due_date)
            .await
    }

    pub async fn unassign(&self, id: Uuid) -> AppResult<Asset> {
        self.repository.assets.unassign(id).await
    }

    pub async fn report_issue(&self, id: Uuid) -> AppResult<Asset> {
        self.repository.assets.report_issue(id).await
    }

    /// Store an uploaded image and attach it to the asset, deleting any
    /// previous image best-effort
    pub async fn attach_image(&self, id: Uuid, filename: &str, bytes: &[u8]) -> AppResult<Asset> {
        // Fail fast before writing the file
        self.repository.assets.get_by_id(id).await?;

        let url = self.storage.save_image(filename, bytes).await?;
        let previous = self.repository.assets.set_image_url(id, &url).await?;
        if let Some(old_url) = previous {
            self.storage.delete_image(&old_url).await;
        }
        self.repository.assets.get_by_id(id).await
    }
}

/// Exactly one of user / team must be given
fn validate_assignment_target(data: &AssignAsset) -> AppResult<()> {
    match (data.user_id, data.team_id) {
        (Some(_), None) | (None, Some(_)) => Ok(()),
        (Some(_), Some(_)) => Err(AppError::Validation(
            "Assign to either a user or a team, not both".to_string(),
        )),
        (None, None) => Err(AppError::Validation(
            "An assignment target (user or team) is required".to_string(),
        )),
    }
}

/// Due dates must not lie in the past
fn validate_due_date(due_date: NaiveDate) -> AppResult<()> {
    if due_date < Utc::now().date_naive() {
        return Err(AppError::Validation(
            "Due date must not be in the past".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn assign(user: Option<Uuid>, team: Option<Uuid>) -> AssignAsset {
        AssignAsset {
            user_id: user,
            team_id: team,
            due_date: Utc::now().date_naive(),
        }
    }

    #[test]
    fn assignment_target_must_be_exactly_one() {
        let user = Some(Uuid::new_v4());
        let team = Some(Uuid::new_v4());

        assert!(validate_assignment_target(&assign(user, None)).is_ok());
        assert!(validate_assignment_target(&assign(None, team)).is_ok());
        assert!(validate_assignment_target(&assign(user, team)).is_err());
        assert!(validate_assignment_target(&assign(None, None)).is_err());
    }

    #[test]
    fn due_date_today_is_accepted() {
        assert!(validate_due_date(Utc::now().date_naive()).is_ok());
    }

    #[test]
    fn due_date_in_the_past_is_rejected() {
        let yesterday = Utc::now().date_naive() - Duration::days(1);
        assert!(validate_due_date(yesterday).is_err());
    }

    #[test]
    fn due_date_in_the_future_is_accepted() {
        let next_week = Utc::now().date_naive() + Duration::days(7);
        assert!(validate_due_date(next_week).is_ok());
    }
}
