//! Local filesystem avatar storage.

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use medcare_core::error::{AppError, ErrorKind};
use medcare_core::result::AppResult;
use medcare_core::traits::avatar::{AvatarStorage, StoredAvatar};

use crate::{extension_for, public_url};

/// Stores avatars as flat files under one directory.
#[derive(Debug, Clone)]
pub struct LocalAvatarStorage {
    /// Directory holding every avatar.
    root: PathBuf,
    /// Base URL the directory is served under.
    base_url: String,
}

impl LocalAvatarStorage {
    /// Create the provider, creating `root_path` if needed.
    pub async fn new(root_path: &str, base_url: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create avatar directory: {}", root.display()),
                e,
            )
        })?;
        Ok(Self {
            root,
            base_url: base_url.to_string(),
        })
    }

    /// Resolve an object id to a path inside the root.
    ///
    /// Ids containing path separators are rejected.
    fn resolve(&self, public_id: &str) -> AppResult<PathBuf> {
        if public_id.is_empty()
            || public_id.contains(['/', '\\'])
            || public_id.starts_with('.')
        {
            return Err(AppError::validation(format!(
                "Invalid avatar id: {public_id}"
            )));
        }
        Ok(self.root.join(public_id))
    }
}

#[async_trait]
impl AvatarStorage for LocalAvatarStorage {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn upload(&self, data: Bytes, mime_type: &str) -> AppResult<StoredAvatar> {
        let public_id = format!("{}.{}", Uuid::new_v4(), extension_for(mime_type));
        let path = self.resolve(&public_id)?;

        fs::write(&path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write avatar: {public_id}"),
                e,
            )
        })?;

        debug!(public_id, bytes = data.len(), "Stored avatar");
        Ok(StoredAvatar {
            url: public_url(&self.base_url, &public_id),
            public_id,
        })
    }

    async fn destroy(&self, public_id: &str) -> AppResult<()> {
        let path = self.resolve(public_id)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!(public_id, "Removed avatar");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete avatar: {public_id}"),
                e,
            )),
        }
    }
}
