//! Snapshot persistence for store state.
//!
//! A [`SnapshotAdapter`] reads and writes one state value as JSON under a
//! fixed key. Loading never fails: a missing, unreadable or malformed
//! snapshot yields the empty state. Saving reports failures to the caller,
//! which decides how loudly to complain.

use std::marker::PhantomData;

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::storage::{KeyValueStore, StorageError};

/// Errors raised while writing a snapshot.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The state could not be serialized.
    #[error("failed to encode {key} snapshot: {source}")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The backend rejected the write.
    #[error("failed to write {key} snapshot: {source}")]
    Storage {
        key: &'static str,
        #[source]
        source: StorageError,
    },
}

/// State that can be stored as a snapshot.
///
/// `Default` is the canonical empty state substituted for any snapshot that
/// cannot be read.
pub trait PersistedState: Default + Serialize + DeserializeOwned {
    /// Repair a decoded snapshot that breaks the state's invariants.
    ///
    /// Returns the number of entries changed or dropped.
    fn normalize(&mut self) -> usize {
        0
    }
}

/// Loads and saves one state value under a fixed key.
#[derive(Debug, Clone)]
pub struct SnapshotAdapter<S, B> {
    key: &'static str,
    backend: B,
    _state: PhantomData<fn() -> S>,
}

impl<S: PersistedState, B: KeyValueStore> SnapshotAdapter<S, B> {
    /// Create an adapter for `key` on `backend`.
    #[must_use]
    pub const fn new(backend: B, key: &'static str) -> Self {
        Self {
            key,
            backend,
            _state: PhantomData,
        }
    }

    /// The storage key this adapter owns.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Read the snapshot, falling back to the empty state.
    ///
    /// Missing keys are silent; read errors and malformed payloads are
    /// logged as warnings and treated the same as a missing key.
    pub fn load(&self) -> S {
        let bytes = match self.backend.get(self.key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                tracing::debug!(key = self.key, "no snapshot stored; starting empty");
                return S::default();
            }
            Err(e) => {
                tracing::warn!(key = self.key, error = %e, "failed to read snapshot; starting empty");
                return S::default();
            }
        };

        let mut state = match serde_json::from_slice::<S>(&bytes) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(
                    key = self.key,
                    error = %e,
                    "failed to deserialize snapshot; starting empty"
                );
                return S::default();
            }
        };

        let repaired = state.normalize();
        if repaired > 0 {
            tracing::warn!(key = self.key, repaired, "snapshot violated invariants; repaired on load");
        }
        state
    }

    /// Write `state` as the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if encoding or the backend write fails.
    pub fn save(&self, state: &S) -> Result<(), PersistenceError> {
        let bytes = serde_json::to_vec(state).map_err(|source| PersistenceError::Encode {
            key: self.key,
            source,
        })?;
        self.backend
            .set(self.key, &bytes)
            .map_err(|source| PersistenceError::Storage {
                key: self.key,
                source,
            })
    }
}
