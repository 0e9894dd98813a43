//! Maintenance workflow service

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::maintenance::{CreateTicket, MaintenanceTicket},
    repository::Repository,
};

#[derive(Clone)]
pub struct MaintenanceService {
    repository: Repository,
}

impl MaintenanceService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<MaintenanceTicket>> {
        self.repository.maintenance.list().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<MaintenanceTicket> {
        self.repository.maintenance.get_by_id(id).await
    }

    /// Report an issue: creates the ticket and pulls the asset out of
    /// circulation in one unit
    pub async fn create(&self, data: &CreateTicket, reporter_id: Uuid) -> AppResult<MaintenanceTicket> {
        if data.issue.trim().is_empty() {
            return Err(AppError::Validation(
                "An issue description is required".to_string(),
            ));
        }
        if let Some(technician_id) = data.assigned_to {
            self.require_maintenance_staff(technician_id).await?;
        }
        self.repository.maintenance.create(data, reporter_id).await
    }

    pub async fn assign_technician(
        &self,
        id: Uuid,
        technician_id: Uuid,
    ) -> AppResult<MaintenanceTicket> {
        self.require_maintenance_staff(technician_id).await?;
        self.repository
            .maintenance
            .assign_technician(id, technician_id)
            .await
    }

    pub async fn start(&self, id: Uuid) -> AppResult<MaintenanceTicket> {
        self.repository.maintenance.start(id).await
    }

    pub async fn resolve(&self, id: Uuid, resolution: &str) -> AppResult<MaintenanceTicket> {
        validate_resolution(resolution)?;
        self.repository.maintenance.resolve(id, resolution).await
    }

    /// The assignee must exist and be able to work tickets
    async fn require_maintenance_staff(&self, user_id: Uuid) -> AppResult<()> {
        let user = self.repository.users.get_by_id(user_id).await?;
        if !user.role.is_maintenance_staff() {
            return Err(AppError::Validation(format!(
                "User {} is not a technician",
                user_id
            )));
        }
        Ok(())
    }
}

/// A resolution must carry non-blank text
fn validate_resolution(resolution: &str) -> AppResult<()> {
    if resolution.trim().is_empty() {
        return Err(AppError::Validation(
            "A resolution description is required".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_must_not_be_blank() {
        assert!(validate_resolution("").is_err());
        assert!(validate_resolution("  \t ").is_err());
        assert!(validate_resolution("replaced part").is_ok());
    }
}
