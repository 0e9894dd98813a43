//! Business logic services

pub mod assets;
pub mod bookings;
pub mod feedback;
pub mod maintenance;
pub mod stats;
pub mod storage;
pub mod teams;
pub mod users;
pub mod verifications;

use crate::{
    config::{AuthConfig, StorageConfig},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub assets: assets::AssetsService,
    pub bookings: bookings::BookingsService,
    pub maintenance: maintenance::MaintenanceService,
    pub teams: teams::TeamsService,
    pub users: users::UsersService,
    pub feedback: feedback::FeedbackService,
    pub verifications: verifications::VerificationsService,
    pub stats: stats::StatsService,
    pub storage: storage::StorageService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(
        repository: Repository,
        auth_config: AuthConfig,
        storage_config: StorageConfig,
    ) -> Self {
        let storage = storage::StorageService::new(storage_config);
        Self {
            assets: assets::AssetsService::new(repository.clone(), storage.clone()),
            bookings: bookings::BookingsService::new(repository.clone()),
            maintenance: maintenance::MaintenanceService::new(repository.clone()),
            teams: teams::TeamsService::new(repository.clone()),
            users: users::UsersService::new(repository.clone(), auth_config),
            feedback: feedback::FeedbackService::new(repository.clone()),
            verifications: verifications::VerificationsService::new(repository.clone()),
            stats: stats::StatsService::new(repository),
            storage,
        }
    }
}
