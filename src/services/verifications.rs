//! Asset verification service

use rand::Rng;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::verification::{CreateVerification, Verification},
    repository::Repository,
};

#[derive(Clone)]
pub struct VerificationsService {
    repository: Repository,
}

impl VerificationsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Ask an asset holder to confirm possession. The code is generated
    /// server-side; the request is due in seven days.
    pub async fn create(&self, data: &CreateVerification) -> AppResult<Verification> {
        self.repository.assets.get_by_id(data.asset_id).await?;
        self.repository.users.get_by_id(data.user_id).await?;

        let code = generate_code();
        self.repository
            .verifications
            .create(data.asset_id, data.user_id, &code)
            .await
    }

    pub async fn list_mine(&self, user_id: Uuid) -> AppResult<Vec<Verification>> {
        self.repository
            .verifications
            .list_pending_for_user(user_id)
            .await
    }

    pub async fn complete(&self, id: Uuid, user_id: Uuid) -> AppResult<Verification> {
        self.repository.verifications.complete(id, user_id).await
    }
}

/// Six-digit confirmation code
fn generate_code() -> String {
    let mut rng = rand::thread_rng();
    format!("{:06}", rng.gen_range(0..1_000_000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_six_digits() {
        for _ in 0..100 {
            let code = generate_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
