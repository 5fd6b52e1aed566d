//! Wishlist state and store.
//!
//! Existence-only semantics: a product is either saved or not. Adding a
//! product that is already saved changes nothing, not even stale fields such
//! as the price captured when it was first saved.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use nexcart_core::{ProductId, WishItem};

use crate::persistence::{PersistedState, PersistenceError};
use crate::storage::KeyValueStore;
use crate::store::{Reducer, Store};

/// Storage key of the wishlist snapshot.
pub const WISHLIST_KEY: &str = "wishlist";

/// Saved products.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistState {
    pub items: Vec<WishItem>,
}

impl WishlistState {
    /// Whether `id` is saved.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Entry for `id`, if saved.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&WishItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

impl PersistedState for WishlistState {
    /// Drops repeated product IDs (first wins) and resets quantities to 1.
    fn normalize(&mut self) -> usize {
        let mut seen = HashSet::new();
        let before = self.items.len();
        self.items.retain(|item| seen.insert(item.id));
        let mut repaired = before - self.items.len();

        for item in &mut self.items {
            if item.quantity != WishItem::QUANTITY {
                item.quantity = WishItem::QUANTITY;
                repaired += 1;
            }
        }
        repaired
    }
}

/// Wishlist mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WishlistAction {
    /// Save a product unless it is already saved.
    Add(WishItem),
    /// Forget a product.
    Remove(ProductId),
}

/// Pure wishlist transitions.
#[derive(Debug, Clone, Copy)]
pub struct WishlistReducer;

impl Reducer for WishlistReducer {
    type State = WishlistState;
    type Action = WishlistAction;

    const STORAGE_KEY: &'static str = WISHLIST_KEY;

    fn reduce(state: &WishlistState, action: WishlistAction) -> WishlistState {
        match action {
            WishlistAction::Add(item) => {
                if state.contains(item.id) {
                    return state.clone();
                }
                let mut items = state.items.clone();
                items.push(WishItem {
                    quantity: WishItem::QUANTITY,
                    ..item
                });
                WishlistState { items }
            }
            WishlistAction::Remove(id) => WishlistState {
                items: state
                    .items
                    .iter()
                    .filter(|item| item.id != id)
                    .cloned()
                    .collect(),
            },
        }
    }
}

/// The wishlist as seen by the rest of the application.
#[derive(Debug)]
pub struct WishlistStore<B> {
    inner: Store<WishlistReducer, B>,
}

impl<B: KeyValueStore> WishlistStore<B> {
    /// Load the wishlist snapshot from `backend`.
    pub fn open(backend: B) -> Self {
        Self {
            inner: Store::open(backend),
        }
    }

    /// Current wishlist contents.
    #[must_use]
    pub const fn state(&self) -> &WishlistState {
        self.inner.state()
    }

    /// Saved items in the order they were saved.
    #[must_use]
    pub fn items(&self) -> &[WishItem] {
        &self.state().items
    }

    /// Entry for `id`, if saved.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&WishItem> {
        self.state().get(id)
    }

    /// Number of saved items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state().items.len()
    }

    /// Whether nothing is saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state().items.is_empty()
    }

    /// Whether `id` is saved, as of the latest dispatch.
    #[must_use]
    pub fn is_in_wishlist(&self, id: ProductId) -> bool {
        self.state().contains(id)
    }

    /// Error from the most recent save, if it failed.
    #[must_use]
    pub const fn last_persist_error(&self) -> Option<&PersistenceError> {
        self.inner.last_persist_error()
    }

    /// Save a product. Already-saved products are left untouched.
    #[instrument(skip(self, item), fields(id = %item.id))]
    pub fn add_to_wishlist(&mut self, item: WishItem) {
        self.inner.dispatch(WishlistAction::Add(item));
    }

    /// Forget a product.
    #[instrument(skip(self))]
    pub fn remove_from_wishlist(&mut self, id: ProductId) {
        self.inner.dispatch(WishlistAction::Remove(id));
    }

    /// Save the product if it isn't saved, forget it if it is.
    ///
    /// Returns whether the product is saved afterwards.
    pub fn toggle_wishlist(&mut self, item: WishItem) -> bool {
        if self.is_in_wishlist(item.id) {
            self.remove_from_wishlist(item.id);
            false
        } else {
            self.add_to_wishlist(item);
            true
        }
    }
}
