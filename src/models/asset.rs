//! Asset model and related types

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::enums::{AssetCondition, AssetStatus};

/// Placeholder purchase price used when a record has none
/// (reporting treats priceless assets as worth 1000)
pub const DEFAULT_PURCHASE_PRICE: i64 = 1000;

/// Asset record
///
/// Invariant: `status == InUse` iff exactly one of `assigned_to_user` /
/// `assigned_to_team` is set. `assigned_date` and `due_date` are set and
/// cleared together with the assignment.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Asset {
    pub id: Uuid,
    pub name: String,
    /// Category, e.g. "Laptop", "Projector", "Room"
    pub asset_type: String,
    pub model: Option<String>,
    /// Free-form key/value specification map
    #[schema(value_type = Object)]
    pub specifications: Json<HashMap<String, String>>,
    pub serial_number: Option<String>,
    pub location: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    #[schema(value_type = Option<f64>)]
    pub purchase_price: Option<Decimal>,
    pub condition: AssetCondition,
    pub status: AssetStatus,
    pub image_url: Option<String>,
    pub assigned_to_user: Option<Uuid>,
    pub assigned_to_team: Option<Uuid>,
    pub assigned_date: Option<DateTime<Utc>>,
    pub due_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Asset {
    /// Purchase price with the reporting placeholder applied
    pub fn effective_purchase_price(&self) -> Decimal {
        self.purchase_price
            .unwrap_or_else(|| Decimal::from(DEFAULT_PURCHASE_PRICE))
    }
}

/// Create asset request. New assets always start Available and unassigned.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAsset {
    pub name: String,
    pub asset_type: String,
    pub model: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub specifications: Option<HashMap<String, String>>,
    pub serial_number: Option<String>,
    pub location: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    #[schema(value_type = Option<f64>)]
    pub purchase_price: Option<Decimal>,
    pub condition: Option<AssetCondition>,
    pub notes: Option<String>,
}

/// Update asset request (descriptive fields only; status and assignment
/// change through the dedicated operations)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAsset {
    pub name: Option<String>,
    pub asset_type: Option<String>,
    pub model: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub specifications: Option<HashMap<String, String>>,
    pub serial_number: Option<String>,
    pub location: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    #[schema(value_type = Option<f64>)]
    pub purchase_price: Option<Decimal>,
    pub condition: Option<AssetCondition>,
    pub notes: Option<String>,
}

/// Assignment target: exactly one of `user_id` / `team_id` must be given
#[derive(Debug, Deserialize, ToSchema)]
pub struct AssignAsset {
    pub user_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub due_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::types::Json;

    fn sample_asset(price: Option<Decimal>) -> Asset {
        Asset {
            id: Uuid::new_v4(),
            name: "MacBook Pro".into(),
            asset_type: "Laptop".into(),
            model: Some("M3".into()),
            specifications: Json(HashMap::new()),
            serial_number: None,
            location: None,
            purchase_date: None,
            purchase_price: price,
            condition: AssetCondition::Good,
            status: AssetStatus::Available,
            image_url: None,
            assigned_to_user: None,
            assigned_to_team: None,
            assigned_date: None,
            due_date: None,
            notes: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn missing_purchase_price_falls_back_to_placeholder() {
        let asset = sample_asset(None);
        assert_eq!(
            asset.effective_purchase_price(),
            Decimal::from(DEFAULT_PURCHASE_PRICE)
        );
    }

    #[test]
    fn explicit_purchase_price_is_kept() {
        let asset = sample_asset(Some(Decimal::new(249999, 2)));
        assert_eq!(asset.effective_purchase_price(), Decimal::new(249999, 2));
    }
}
