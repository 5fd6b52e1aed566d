//! Reducer-driven stores.
//!
//! A [`Store`] binds a pure [`Reducer`] to a [`SnapshotAdapter`]: it loads the
//! snapshot once, applies actions synchronously, and saves after every
//! dispatch. The store owns its state outright; readers borrow it, and only
//! the intent-named wrappers in [`crate::cart`] and [`crate::wishlist`] can
//! dispatch.

use std::fmt::Debug;

use crate::error::{add_breadcrumb, report_persist_error};
use crate::persistence::{PersistedState, PersistenceError, SnapshotAdapter};
use crate::storage::KeyValueStore;

/// A pure state transition function over a closed set of actions.
pub trait Reducer {
    /// State held by the store.
    type State: PersistedState + Clone + Debug;

    /// Actions the reducer understands.
    type Action: Debug;

    /// Key the state is persisted under.
    const STORAGE_KEY: &'static str;

    /// Produce the next state. Must not perform I/O.
    fn reduce(state: &Self::State, action: Self::Action) -> Self::State;
}

/// Stateful wrapper around a reducer and its snapshot.
#[derive(Debug)]
pub struct Store<R: Reducer, B> {
    state: R::State,
    adapter: SnapshotAdapter<R::State, B>,
    last_persist_error: Option<PersistenceError>,
}

impl<R: Reducer, B: KeyValueStore> Store<R, B> {
    /// Load the persisted snapshot (or the empty state) from `backend`.
    pub fn open(backend: B) -> Self {
        let adapter = SnapshotAdapter::new(backend, R::STORAGE_KEY);
        let state = adapter.load();
        tracing::debug!(key = R::STORAGE_KEY, "store ready");
        Self {
            state,
            adapter,
            last_persist_error: None,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &R::State {
        &self.state
    }

    /// Error from the most recent save, if it failed.
    #[must_use]
    pub const fn last_persist_error(&self) -> Option<&PersistenceError> {
        self.last_persist_error.as_ref()
    }

    /// Apply `action`, then persist the new state.
    ///
    /// The new state is in place before the save runs; a failed save is
    /// reported and remembered but never rolls the state back.
    pub(crate) fn dispatch(&mut self, action: R::Action) {
        let description = format!("{action:?}");
        tracing::debug!(key = R::STORAGE_KEY, action = %description, "dispatch");
        add_breadcrumb(R::STORAGE_KEY, &description, None);

        self.state = R::reduce(&self.state, action);

        match self.adapter.save(&self.state) {
            Ok(()) => self.last_persist_error = None,
            Err(e) => {
                report_persist_error(&e);
                self.last_persist_error = Some(e);
            }
        }
    }
}
