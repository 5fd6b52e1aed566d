//! Shopping cart state and store.
//!
//! The cart holds at most one [`LineItem`] per product, in the order the
//! products were first added. Quantities never drop below 1; removing an
//! item is the only way its line disappears.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use nexcart_core::{LineItem, ProductId};

use crate::persistence::{PersistedState, PersistenceError};
use crate::storage::KeyValueStore;
use crate::store::{Reducer, Store};

/// Storage key of the cart snapshot.
pub const CART_KEY: &str = "cart";

// =============================================================================
// State
// =============================================================================

/// Cart contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    pub items: Vec<LineItem>,
}

impl CartState {
    /// Line for `id`, if present.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.items
            .iter()
            .fold(0_u32, |sum, item| sum.saturating_add(item.quantity))
    }

    /// Σ price × quantity, in the source currency. Saturates instead of
    /// overflowing.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.items
            .iter()
            .map(LineItem::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Copy of this state with `update` applied to the quantity of `id`.
    fn with_quantity(&self, id: ProductId, update: impl Fn(u32) -> u32) -> Self {
        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id == id {
                    LineItem {
                        quantity: update(item.quantity),
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect();
        Self { items }
    }
}

impl PersistedState for CartState {
    /// Drops repeated product IDs (first wins) and floors quantities at 1.
    fn normalize(&mut self) -> usize {
        let mut seen = HashSet::new();
        let before = self.items.len();
        self.items.retain(|item| seen.insert(item.id));
        let mut repaired = before - self.items.len();

        for item in &mut self.items {
            if item.quantity == 0 {
                item.quantity = 1;
                repaired += 1;
            }
        }
        repaired
    }
}

// =============================================================================
// Reducer
// =============================================================================

/// Cart mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add `quantity` units of `item`, merging with an existing line.
    ///
    /// `item.quantity` is ignored; a zero `quantity` counts as 1.
    Add { item: LineItem, quantity: u32 },
    /// One more unit of a product already in the cart.
    Increment(ProductId),
    /// One fewer unit, never below 1.
    Decrement(ProductId),
    /// Drop the product's line.
    Remove(ProductId),
}

/// Pure cart transitions.
#[derive(Debug, Clone, Copy)]
pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartState;
    type Action = CartAction;

    const STORAGE_KEY: &'static str = CART_KEY;

    fn reduce(state: &CartState, action: CartAction) -> CartState {
        match action {
            CartAction::Add { item, quantity } => {
                let quantity = quantity.max(1);
                if state.get(item.id).is_some() {
                    state.with_quantity(item.id, |current| current.saturating_add(quantity))
                } else {
                    let mut items = state.items.clone();
                    items.push(LineItem { quantity, ..item });
                    CartState { items }
                }
            }
            CartAction::Increment(id) => state.with_quantity(id, |q| q.saturating_add(1)),
            CartAction::Decrement(id) => state.with_quantity(id, |q| q.saturating_sub(1).max(1)),
            CartAction::Remove(id) => CartState {
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

// =============================================================================
// Store
// =============================================================================

/// The cart as seen by the rest of the application.
#[derive(Debug)]
pub struct CartStore<B> {
    inner: Store<CartReducer, B>,
}

impl<B: KeyValueStore> CartStore<B> {
    /// Load the cart snapshot from `backend`.
    pub fn open(backend: B) -> Self {
        Self {
            inner: Store::open(backend),
        }
    }

    /// Current cart contents.
    #[must_use]
    pub const fn state(&self) -> &CartState {
        self.inner.state()
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.state().items
    }

    /// Line for `id`, if present.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&LineItem> {
        self.state().get(id)
    }

    /// Whether the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state().items.is_empty()
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.state().total_quantity()
    }

    /// Σ price × quantity, in the source currency.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.state().total_price()
    }

    /// Error from the most recent save, if it failed.
    #[must_use]
    pub const fn last_persist_error(&self) -> Option<&PersistenceError> {
        self.inner.last_persist_error()
    }

    /// Add `quantity` units of a product.
    #[instrument(skip(self, item), fields(id = %item.id))]
    pub fn add_to_cart(&mut self, item: LineItem, quantity: u32) {
        self.inner.dispatch(CartAction::Add { item, quantity });
    }

    /// Raise the quantity of `id` by one.
    #[instrument(skip(self))]
    pub fn increment(&mut self, id: ProductId) {
        self.inner.dispatch(CartAction::Increment(id));
    }

    /// Lower the quantity of `id` by one, stopping at 1.
    #[instrument(skip(self))]
    pub fn decrement(&mut self, id: ProductId) {
        self.inner.dispatch(CartAction::Decrement(id));
    }

    /// Remove the line for `id`.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, id: ProductId) {
        self.inner.dispatch(CartAction::Remove(id));
    }
}
