//! Object storage contract for doctor avatars.

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;

/// Reference to an uploaded avatar, persisted on the doctor record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredAvatar {
    /// Object id inside the store, used to destroy the object later.
    pub public_id: String,
    /// Publicly reachable URL.
    pub url: String,
}

/// Pluggable object store holding doctor avatar images.
///
/// Implementations live in `medcare-storage`.
#[async_trait]
pub trait AvatarStorage: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider name (e.g. "local").
    fn provider_type(&self) -> &str;

    /// Store an image and return its reference.
    async fn upload(&self, data: Bytes, mime_type: &str) -> AppResult<StoredAvatar>;

    /// Remove a previously stored image. Removing an unknown id is not an error.
    async fn destroy(&self, public_id: &str) -> AppResult<()>;
}
