//! Local file storage for asset images
//!
//! Files live under `storage.media_dir` and are served at `/media/...`.
//! Deletions are best-effort: a failure is logged and reported to tracing
//! but never blocks the entity mutation that triggered the cleanup.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::{
    config::StorageConfig,
    error::{AppError, AppResult},
};

const MEDIA_URL_PREFIX: &str = "/media/";

#[derive(Clone)]
pub struct StorageService {
    media_dir: PathBuf,
}

impl StorageService {
    pub fn new(config: StorageConfig) -> Self {
        Self {
            media_dir: PathBuf::from(config.media_dir),
        }
    }

    pub fn media_dir(&self) -> &Path {
        &self.media_dir
    }

    /// Store image bytes under `assets/` and return the public URL path
    pub async fn save_image(&self, filename: &str, bytes: &[u8]) -> AppResult<String> {
        let name = format!("{}_{}", Utc::now().timestamp_millis(), sanitize(filename));
        let dir = self.media_dir.join("assets");
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to create media dir: {}", e)))?;

        let path = dir.join(&name);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to store image: {}", e)))?;

        Ok(format!("{}assets/{}", MEDIA_URL_PREFIX, name))
    }

    /// Best-effort delete of a previously stored image
    pub async fn delete_image(&self, url: &str) {
        let Some(relative) = url.strip_prefix(MEDIA_URL_PREFIX) else {
            tracing::warn!(url, "Refusing to delete image outside the media dir");
            return;
        };
        let path = self.media_dir.join(relative);
        if let Err(e) = tokio::fs::remove_file(&path).await {
            tracing::warn!(url, error = %e, "Failed to delete stored image");
        }
    }
}

/// Keep only the final path component and replace awkward characters
fn sanitize(filename: &str) -> String {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or("upload");
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_directories() {
        assert_eq!(sanitize("../../etc/passwd"), "passwd");
        assert_eq!(sanitize("photos\\laptop.png"), "laptop.png");
    }

    #[test]
    fn sanitize_replaces_odd_characters() {
        assert_eq!(sanitize("my photo (1).jpg"), "my_photo__1_.jpg");
    }

    #[test]
    fn sanitize_never_returns_empty() {
        assert_eq!(sanitize(""), "upload");
        assert_eq!(sanitize("/"), "upload");
    }
}
