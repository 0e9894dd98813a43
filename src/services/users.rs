//! Authentication and user management service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    config::{AuthConfig, BootstrapConfig},
    error::{AppError, AppResult},
    models::{
        enums::{Role, UserStatus},
        user::{CreateUser, UpdateUser, User, UserClaims, UserDetails},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
    config: AuthConfig,
}

impl UsersService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Authenticate by email and password and return a JWT token
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<(String, User)> {
        let user = self
            .repository
            .users
            .get_by_email(email)
            .await?
            .ok_or_else(|| {
                AppError::Authentication("Invalid email or password".to_string())
            })?;

        if user.status == UserStatus::Inactive {
            return Err(AppError::Authentication("Account is inactive".to_string()));
        }

        if !verify_password(&user.password_hash, password) {
            return Err(AppError::Authentication(
                "Invalid email or password".to_string(),
            ));
        }

        let token = self.create_token(&user)?;
        Ok((token, user))
    }

    /// Create an account with an explicitly chosen role (admin flow).
    /// Technicians may carry specializations.
    pub async fn create_user(&self, data: &CreateUser) -> AppResult<User> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if self.repository.users.get_by_email(&data.email).await?.is_some() {
            return Err(AppError::Validation("Email already in use".to_string()));
        }

        let password_hash = hash_password(&data.password)?;
        self.repository
            .users
            .create(
                &data.name,
                &data.email,
                &password_hash,
                data.role.unwrap_or(Role::Employee),
                data.department.as_deref(),
                data.specializations.as_deref(),
            )
            .await
    }

    /// Self-registration always produces an Employee account, whatever role
    /// the request claims
    pub async fn register(&self, data: &CreateUser) -> AppResult<User> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if self.repository.users.get_by_email(&data.email).await?.is_some() {
            return Err(AppError::Validation("Email already in use".to_string()));
        }

        let password_hash = hash_password(&data.password)?;
        self.repository
            .users
            .create(
                &data.name,
                &data.email,
                &password_hash,
                Role::Employee,
                data.department.as_deref(),
                None,
            )
            .await
    }

    /// Create the first administrator on an empty users table, so a fresh
    /// deployment has an account that can create everything else. A non-empty
    /// table makes this a no-op.
    pub async fn ensure_bootstrap_admin(&self, config: &BootstrapConfig) -> AppResult<()> {
        if self.repository.users.count().await? > 0 {
            return Ok(());
        }

        let password_hash = hash_password(&config.admin_password)?;
        let admin = self
            .repository
            .users
            .create(
                &config.admin_name,
                &config.admin_email,
                &password_hash,
                Role::Admin,
                None,
                None,
            )
            .await?;

        tracing::info!(email = %admin.email, "Created bootstrap administrator account");
        Ok(())
    }

    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.repository.users.list().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<UserDetails> {
        let user = self.repository.users.get_by_id(id).await?;
        let teams = self.repository.teams.team_ids_for_user(id).await?;
        Ok(UserDetails { user, teams })
    }

    pub async fn update(&self, id: Uuid, data: &UpdateUser) -> AppResult<User> {
        self.repository.users.update(id, data).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.users.delete(id).await
    }

    fn create_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let exp = now + (self.config.jwt_expiration_hours as i64 * 3600);

        let claims = UserClaims {
            sub: user.email.clone(),
            user_id: user.id,
            role: user.role,
            exp,
            iat: now,
        };

        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }
}

/// Hash a password with argon2 and a fresh salt
fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

/// Verify a password against a stored argon2 hash
fn verify_password(stored_hash: &str, password: &str) -> bool {
    PasswordHash::new(stored_hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_roundtrip() {
        let hash = hash_password("correct horse battery staple").unwrap();
        assert!(verify_password(&hash, "correct horse battery staple"));
        assert!(!verify_password(&hash, "wrong password"));
    }

    #[test]
    fn garbage_hash_never_verifies() {
        assert!(!verify_password("not-a-hash", "anything"));
    }
}
