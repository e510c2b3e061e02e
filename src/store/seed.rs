//! Loading the store from a JSON document keyed by collection name.

use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use super::Store;
use crate::core::{money, AppError, Result};

/// Parse and check a JSON seed document
pub fn from_json(json: &str) -> Result<Store> {
    let store: Store = serde_json::from_str(json)?;
    validate(&store)?;
    Ok(store)
}

pub fn to_json(store: &Store) -> Result<String> {
    Ok(serde_json::to_string_pretty(store)?)
}

/// Read a seed file from disk
pub async fn load(path: impl AsRef<Path>) -> Result<Store> {
    let path = path.as_ref();
    let json = tokio::fs::read_to_string(path).await?;
    let store = from_json(&json)?;

    info!(
        path = %path.display(),
        users = store.users.len(),
        branches = store.branches.len(),
        courses = store.courses.len(),
        enrollments = store.enrollments.len(),
        revenue = store.revenue.len(),
        "Record store seeded"
    );

    Ok(store)
}

/// Reject seed data that breaks invariants the repositories rely on.
/// Dangling references are allowed.
pub fn validate(store: &Store) -> Result<()> {
    let mut phones = HashSet::new();
    for user in &store.users {
        if !phones.insert(user.phone.as_str()) {
            return Err(AppError::Configuration(format!(
                "Seed data has duplicate phone {}",
                user.phone
            )));
        }
    }

    for branch in &store.branches {
        money::validate_rate("commission_rate", branch.commission_rate).map_err(|e| {
            AppError::Configuration(format!("Seed branch {}: {}", branch.id, e))
        })?;
    }

    Ok(())
}
