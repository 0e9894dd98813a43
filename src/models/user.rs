//! User model, JWT claims and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;

use super::enums::{Role, UserStatus};

/// User record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub department: Option<String>,
    pub status: UserStatus,
    /// Technician specializations, e.g. ["Hardware", "Networking"]
    pub specializations: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

/// User with their team memberships aggregated
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDetails {
    #[serde(flatten)]
    pub user: User,
    pub teams: Vec<Uuid>,
}

/// Create user request. The role is set explicitly by the caller (an admin);
/// self-registration always produces an Employee regardless of this field.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub role: Option<Role>,
    pub department: Option<String>,
    pub specializations: Option<Vec<String>>,
}

/// Update user request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub department: Option<String>,
    pub role: Option<Role>,
    pub status: Option<UserStatus>,
    pub specializations: Option<Vec<String>>,
}

/// JWT claims for authenticated users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    pub sub: String,
    pub user_id: Uuid,
    pub role: Role,
    pub exp: i64,
    pub iat: i64,
}

impl UserClaims {
    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Require administrator privileges
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::Authorization(
                "Administrator privileges required".to_string(),
            ))
        }
    }

    /// Require admin or technician privileges (maintenance workflow)
    pub fn require_maintenance_staff(&self) -> Result<(), AppError> {
        if self.role.is_maintenance_staff() {
            Ok(())
        } else {
            Err(AppError::Authorization(
                "Technician or administrator privileges required".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_roundtrip_preserves_claims() {
        let now = Utc::now().timestamp();
        let claims = UserClaims {
            sub: "alice@example.com".to_string(),
            user_id: Uuid::new_v4(),
            role: Role::Technician,
            exp: now + 3600,
            iat: now,
        };

        let token = claims.create_token("test-secret").unwrap();
        let parsed = UserClaims::from_token(&token, "test-secret").unwrap();

        assert_eq!(parsed.sub, claims.sub);
        assert_eq!(parsed.user_id, claims.user_id);
        assert_eq!(parsed.role, Role::Technician);
    }

    #[test]
    fn token_rejects_wrong_secret() {
        let now = Utc::now().timestamp();
        let claims = UserClaims {
            sub: "alice@example.com".to_string(),
            user_id: Uuid::new_v4(),
            role: Role::Employee,
            exp: now + 3600,
            iat: now,
        };

        let token = claims.create_token("test-secret").unwrap();
        assert!(UserClaims::from_token(&token, "other-secret").is_err());
    }

    #[test]
    fn role_guards() {
        let now = Utc::now().timestamp();
        let mut claims = UserClaims {
            sub: "bob@example.com".to_string(),
            user_id: Uuid::new_v4(),
            role: Role::Employee,
            exp: now + 3600,
            iat: now,
        };

        assert!(claims.require_admin().is_err());
        assert!(claims.require_maintenance_staff().is_err());

        claims.role = Role::Technician;
        assert!(claims.require_admin().is_err());
        assert!(claims.require_maintenance_staff().is_ok());

        claims.role = Role::Admin;
        assert!(claims.require_admin().is_ok());
        assert!(claims.require_maintenance_staff().is_ok());
    }
}
