//! Repository layer for database operations

pub mod assets;
pub mod bookings;
pub mod feedback;
pub mod maintenance;
pub mod teams;
pub mod users;
pub mod verifications;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub assets: assets::AssetsRepository,
    pub bookings: bookings::BookingsRepository,
    pub maintenance: maintenance::MaintenanceRepository,
    pub teams: teams::TeamsRepository,
    pub users: users::UsersRepository,
    pub feedback: feedback::FeedbackRepository,
    pub verifications: verifications::VerificationsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            assets: assets::AssetsRepository::new(pool.clone()),
            bookings: bookings::BookingsRepository::new(pool.clone()),
            maintenance: maintenance::MaintenanceRepository::new(pool.clone()),
            teams: teams::TeamsRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            feedback: feedback::FeedbackRepository::new(pool.clone()),
            verifications: verifications::VerificationsRepository::new(pool.clone()),
            pool,
        }
    }
}
