use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Where the record store gets its initial contents
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreConfig {
    /// JSON seed document; the store starts empty without one
    pub seed_path: Option<PathBuf>,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self {
            seed_path: env::var("STORE_SEED_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}
