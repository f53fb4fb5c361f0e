//! Persisted user preferences the engine depends on.

use crate::store::{KeyValueStore, StoreError};
use crate::types::Target;

/// Storage key for the default repetition target.
pub const DEFAULT_TARGET_KEY: &str = "default_target";

/// Loads the default target, falling back to [`Target::DEFAULT`] on missing or bad data.
pub fn load_default_target(store: &impl KeyValueStore) -> Target {
    match store.get(DEFAULT_TARGET_KEY) {
        Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
            tracing::warn!(value = %raw, error = %e, "ignoring invalid stored default target");
            Target::DEFAULT
        }),
        Ok(None) => Target::DEFAULT,
        Err(e) => {
            tracing::warn!(error = %e, "failed to read default target");
            Target::DEFAULT
        }
    }
}

pub fn save_default_target(store: &impl KeyValueStore, target: Target) -> Result<(), StoreError> {
    store.set(DEFAULT_TARGET_KEY, &target.to_string())
}
