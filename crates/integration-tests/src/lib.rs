//! Integration tests for `NexCart`.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p nexcart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart scenarios through the storefront context
//! - `wishlist_flow` - Wishlist scenarios, including move-to-cart
//! - `persistence` - On-disk snapshots: format, recovery, reopening

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;

use rust_decimal::Decimal;
use tempfile::TempDir;

use nexcart_core::{LineItem, ProductId, WishItem};
use nexcart_storefront::{FileStore, StorefrontConfig, StorefrontContext};

/// A storefront backed by a throwaway data directory.
///
/// The directory is deleted when the context is dropped.
pub struct TestContext {
    dir: TempDir,
}

impl TestContext {
    /// Create an empty data directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Path of the data directory.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the snapshot file for `key`.
    #[must_use]
    pub fn snapshot_path(&self, key: &str) -> std::path::PathBuf {
        self.data_dir().join(format!("{key}.json"))
    }

    /// Open a storefront over the data directory, as a fresh process would.
    ///
    /// # Panics
    ///
    /// Panics if the directory cannot be opened.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn open(&self) -> StorefrontContext<FileStore> {
        let dir = self.data_dir().display().to_string();
        let config = StorefrontConfig::from_lookup(|key| {
            (key == "NEXCART_DATA_DIR").then(|| dir.clone())
        })
        .unwrap();
        StorefrontContext::open(config).unwrap()
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A cart line with a whole-dollar price.
#[must_use]
pub fn line_item(id: i64, price: i64, quantity: u32) -> LineItem {
    LineItem {
        id: ProductId::new(id),
        title: format!("Product {id}"),
        price: Decimal::from(price),
        thumbnail: format!("https://cdn.example.com/{id}.png"),
        quantity,
    }
}

/// A wishlist entry with a whole-dollar price.
#[must_use]
pub fn wish_item(id: i64, price: i64) -> WishItem {
    WishItem::new(
        ProductId::new(id),
        format!("Product {id}"),
        Decimal::from(price),
        format!("https://cdn.example.com/{id}.png"),
    )
}
