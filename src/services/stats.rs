//! Dashboard statistics service

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, models::enums::AssetStatus, repository::Repository};

/// Dashboard counters
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardStats {
    pub total_assets: i64,
    pub available_assets: i64,
    pub assets_in_use: i64,
    pub assets_in_maintenance: i64,
    pub pending_bookings: i64,
    pub open_tickets: i64,
    pub total_users: i64,
    pub total_teams: i64,
    /// Inventory value with the purchase price placeholder applied
    #[schema(value_type = f64)]
    pub total_asset_value: Decimal,
}

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn dashboard(&self) -> AppResult<DashboardStats> {
        Ok(DashboardStats {
            total_assets: self.repository.assets.count().await?,
            available_assets: self
                .repository
                .assets
                .count_by_status(AssetStatus::Available)
                .await?,
            assets_in_use: self
                .repository
                .assets
                .count_by_status(AssetStatus::InUse)
                .await?,
            assets_in_maintenance: self
                .repository
                .assets
                .count_by_status(AssetStatus::Maintenance)
                .await?,
            pending_bookings: self.repository.bookings.count_pending().await?,
            open_tickets: self.repository.maintenance.count_open().await?,
            total_users: self.repository.users.count().await?,
            total_teams: self.repository.teams.count().await?,
            total_asset_value: self.repository.assets.total_value().await?,
        })
    }
}
