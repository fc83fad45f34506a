//! Avatar object storage configuration.

use serde::{Deserialize, Serialize};

/// Where doctor avatars are kept and how their public URLs are built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Provider name: `"local"` or `"memory"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Root directory for the local provider.
    #[serde(default = "default_avatar_dir")]
    pub avatar_dir: String,
    /// Base URL prepended to an object id to form its public URL.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
    /// Largest accepted avatar upload.
    #[serde(default = "default_max_avatar_bytes")]
    pub max_avatar_bytes: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            avatar_dir: default_avatar_dir(),
            public_base_url: default_public_base_url(),
            max_avatar_bytes: default_max_avatar_bytes(),
        }
    }
}

fn default_provider() -> String {
    "local".to_string()
}

fn default_avatar_dir() -> String {
    "data/avatars".to_string()
}

fn default_public_base_url() -> String {
    "http://localhost:4001/avatars".to_string()
}

fn default_max_avatar_bytes() -> usize {
    5 * 1024 * 1024
}
