//! # medcare-storage
//!
//! Implementations of [`AvatarStorage`] used for doctor avatar images.

pub mod providers;

use std::sync::Arc;

use medcare_core::config::StorageConfig;
use medcare_core::error::AppError;
use medcare_core::result::AppResult;
use medcare_core::traits::avatar::AvatarStorage;

pub use providers::local::LocalAvatarStorage;
pub use providers::memory::MemoryAvatarStorage;

/// Build the avatar store named by `config.provider`.
pub async fn build_avatar_storage(config: &StorageConfig) -> AppResult<Arc<dyn AvatarStorage>> {
    match config.provider.as_str() {
        "local" => {
            let storage =
                LocalAvatarStorage::new(&config.avatar_dir, &config.public_base_url).await?;
            Ok(Arc::new(storage))
        }
        "memory" => Ok(Arc::new(MemoryAvatarStorage::new(&config.public_base_url))),
        other => Err(AppError::configuration(format!(
            "Unknown storage provider: {other}"
        ))),
    }
}

/// File extension for an accepted avatar MIME type.
pub(crate) fn extension_for(mime_type: &str) -> &'static str {
    match mime_type {
        "image/png" => "png",
        "image/jpeg" => "jpg",
        "image/webp" => "webp",
        _ => "bin",
    }
}

/// Join a base URL and an object id with exactly one slash.
pub(crate) fn public_url(base: &str, public_id: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), public_id)
}
