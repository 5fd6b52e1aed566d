//! `NexCart` storefront library.
//!
//! Cart and wishlist state for a shopper, persisted as JSON snapshots in a
//! key-value backend, plus the order-summary and form-validation services
//! used by the storefront pages.
//!
//! # Example
//!
//! ```rust
//! use nexcart_core::{ProductId, WishItem};
//! use nexcart_storefront::{MemoryStore, StorefrontConfig, StorefrontContext};
//! use rust_decimal::Decimal;
//!
//! let config = StorefrontConfig::from_lookup(|_| None).unwrap();
//! let mut ctx = StorefrontContext::new(MemoryStore::new(), config);
//!
//! let saved = WishItem::new(ProductId::new(7), "Mascara", Decimal::from(10), "m.png");
//! ctx.wishlist_mut().add_to_wishlist(saved);
//! assert!(ctx.move_to_cart(ProductId::new(7)));
//! assert_eq!(ctx.cart().total_quantity(), 1);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod error;
pub mod persistence;
pub mod services;
pub mod state;
pub mod storage;
pub mod store;
pub mod wishlist;

pub use cart::{CART_KEY, CartAction, CartReducer, CartState, CartStore};
pub use config::{ConfigError, PricingConfig, StorefrontConfig};
pub use error::{Result, StorefrontError};
pub use persistence::{PersistedState, PersistenceError, SnapshotAdapter};
pub use services::checkout::OrderSummary;
pub use state::StorefrontContext;
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use store::{Reducer, Store};
pub use wishlist::{WISHLIST_KEY, WishlistAction, WishlistReducer, WishlistState, WishlistStore};
