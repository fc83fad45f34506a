//! In-memory avatar storage.

use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;
use uuid::Uuid;

use medcare_core::result::AppResult;
use medcare_core::traits::avatar::{AvatarStorage, StoredAvatar};

use crate::{extension_for, public_url};

/// Keeps avatars in a map. Contents vanish with the process.
#[derive(Debug)]
pub struct MemoryAvatarStorage {
    base_url: String,
    objects: RwLock<HashMap<String, Bytes>>,
}

impl MemoryAvatarStorage {
    /// Create an empty store whose URLs start with `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Whether an object with this id is currently stored.
    pub async fn contains(&self, public_id: &str) -> bool {
        self.objects.read().await.contains_key(public_id)
    }

    /// Number of stored objects.
    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    /// True when nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

#[async_trait]
impl AvatarStorage for MemoryAvatarStorage {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn upload(&self, data: Bytes, mime_type: &str) -> AppResult<StoredAvatar> {
        let public_id = format!("{}.{}", Uuid::new_v4(), extension_for(mime_type));
        self.objects.write().await.insert(public_id.clone(), data);
        Ok(StoredAvatar {
            url: public_url(&self.base_url, &public_id),
            public_id,
        })
    }

    async fn destroy(&self, public_id: &str) -> AppResult<()> {
        self.objects.write().await.remove(public_id);
        Ok(())
    }
}
