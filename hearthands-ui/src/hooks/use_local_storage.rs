// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};

/// JSON value mirrored between a signal and `localStorage`.
pub struct StoredValue<T: 'static> {
    key: &'static str,
    value: Signal<T>,
}

impl<T: 'static> Clone for StoredValue<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for StoredValue<T> {}

impl<T: Clone + Serialize + 'static> StoredValue<T> {
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    pub fn set(&mut self, value: T) {
        if let Err(e) = LocalStorage::set(self.key, &value) {
            log::warn!("failed to persist {}: {e}", self.key);
        }
        self.value.set(value);
    }
}

/// Decode the JSON stored under `key`, falling back to `None` when the key is
/// absent or the stored text does not parse as `T`.
pub fn load_stored<T: DeserializeOwned>(key: &str) -> Option<T> {
    match LocalStorage::get::<T>(key) {
        Ok(value) => Some(value),
        Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => None,
        Err(e) => {
            log::warn!("ignoring unreadable {key} in localStorage: {e}");
            None
        }
    }
}

pub fn use_local_storage<T>(key: &'static str, initial: impl FnOnce() -> T) -> StoredValue<T>
where
    T: Clone + Serialize + DeserializeOwned + 'static,
{
    let value = use_signal(|| load_stored(key).unwrap_or_else(initial));
    StoredValue { key, value }
}
