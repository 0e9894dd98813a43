//! Team management service

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::team::{CreateTeam, Team, TeamDetails, UpdateTeam},
    repository::Repository,
};

#[derive(Clone)]
pub struct TeamsService {
    repository: Repository,
}

impl TeamsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<TeamDetails>> {
        self.repository.teams.list().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<TeamDetails> {
        self.repository.teams.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateTeam) -> AppResult<Team> {
        if data.name.trim().is_empty() {
            return Err(AppError::Validation("Team name is required".to_string()));
        }
        self.repository.teams.create(data).await
    }

    pub async fn update(&self, id: Uuid, data: &UpdateTeam) -> AppResult<Team> {
        self.repository.teams.update(id, data).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.teams.delete(id).await
    }

    pub async fn add_member(&self, team_id: Uuid, user_id: Uuid) -> AppResult<TeamDetails> {
        self.repository.teams.add_member(team_id, user_id).await?;
        self.repository.teams.get_by_id(team_id).await
    }

    pub async fn remove_member(&self, team_id: Uuid, user_id: Uuid) -> AppResult<TeamDetails> {
        self.repository.teams.remove_member(team_id, user_id).await?;
        self.repository.teams.get_by_id(team_id).await
    }
}
