//! # Key-Value Store Trait
//!
//! The persistence seam: a minimal `load`/`save`/`clear_all` contract, plus
//! collection helpers implementing the fail-open read policy.
//!
//! ## Why a Trait?
//! The application state is owned by a single controller with persistence
//! injected behind this trait, so tests substitute [`crate::MemoryStore`]
//! for the file-backed store without touching any other code.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::StoreResult;

/// A synchronous key-value store holding one JSON document per key.
///
/// Implementations must treat an absent key as `Ok(None)`, not an error.
pub trait KvStore: Send + Sync {
    /// Loads the raw JSON stored under `key`, or `None` if absent.
    fn load(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `json` under `key`, replacing any previous value.
    fn save(&self, key: &str, json: &str) -> StoreResult<()>;

    /// Wipes every stored key. Used by the "clear all storage" action.
    fn clear_all(&self) -> StoreResult<()>;
}

/// Shared handles delegate, so a test can keep a reference to a store it
/// has handed to the session.
impl<T: KvStore + ?Sized> KvStore for std::sync::Arc<T> {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, json: &str) -> StoreResult<()> {
        (**self).save(key, json)
    }

    fn clear_all(&self) -> StoreResult<()> {
        (**self).clear_all()
    }
}

// =============================================================================
// Collection Helpers
// =============================================================================

/// Loads a persisted collection, failing open.
///
/// An absent key, a store read failure, or malformed JSON all yield an
/// empty `Vec`; the two failure cases are logged at warn level but never
/// surfaced. Startup must not be blocked by bad stored state.
pub fn load_collection<T: DeserializeOwned>(store: &dyn KvStore, key: &str) -> Vec<T> {
    let raw = match store.load(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!(key, %err, "failed to read stored collection, starting empty");
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(values) => values,
        Err(err) => {
            warn!(key, %err, "stored collection is malformed, starting empty");
            Vec::new()
        }
    }
}

/// Serializes and stores a collection under `key`.
///
/// Unlike reads, write failures are returned: the caller decides whether to
/// log-and-continue (the session does) or abort.
pub fn save_collection<T: Serialize>(store: &dyn KvStore, key: &str, values: &[T]) -> StoreResult<()> {
    let json = serde_json::to_string(values)?;
    store.save(key, &json)
}

// =============================================================================
// Unit Tests
// =============================================================================
