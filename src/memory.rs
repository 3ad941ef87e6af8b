use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::raw::RawValue;
use crate::store::PrefStore;

/// A thread-safe, in-process [`PrefStore`].
///
/// Backed by `Arc<Mutex<HashMap>>`; clones share the same slots, so one
/// store can be handed to several components the way a process-wide
/// preferences domain would be. Nothing is persisted; this is the backend
/// for tests and ephemeral configuration.
///
/// # Examples
///
/// ```
/// use typed_prefs::{DefaultKey, MemoryStore, TypedAccess};
///
/// let store = MemoryStore::new();
/// let shared = store.clone();
///
/// store.set(&DefaultKey::new("launches", 0i64), 3);
/// assert_eq!(shared.get(&DefaultKey::new("launches", 0i64)), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: Arc<Mutex<HashMap<String, RawValue>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True when no slot holds a value.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Clears every slot.
    pub fn clear(&self) {
        self.lock().clear()
    }

    // The map stays structurally intact across a panicking writer, so a
    // poisoned lock is recovered rather than surfaced; the accessor contract
    // has no error channel to report it on.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, RawValue>> {
        self.slots.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl PrefStore for MemoryStore {
    fn raw(&self, name: &str) -> Option<RawValue> {
        self.lock().get(name).cloned()
    }

    fn set_raw(&self, name: &str, value: RawValue) {
        self.lock().insert(name.to_string(), value);
    }

    fn remove_raw(&self, name: &str) {
        self.lock().remove(name);
    }

    fn keys(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }
}
