use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Storage slot name the storefront has always used.
pub const DEFAULT_STORAGE_KEY: &str = "carrinho";

/// Configuration for a [`CartStore`](crate::CartStore) and the views around it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    /// Key under which the serialized cart is stored.
    pub storage_key: String,
    /// Directory for file-backed storage. `None` lets the view pick.
    pub data_dir: Option<PathBuf>,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_dir: None,
        }
    }
}

impl CartConfig {
    /// Same configuration with a different storage key.
    pub fn with_storage_key(self, key: impl Into<String>) -> Self {
        Self {
            storage_key: key.into(),
            ..self
        }
    }
}
