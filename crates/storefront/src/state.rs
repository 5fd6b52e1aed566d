//! Storefront state built once at start-up and handed to every consumer.

use nexcart_core::ProductId;
use tracing::instrument;

use crate::cart::CartStore;
use crate::config::{PricingConfig, StorefrontConfig};
use crate::error::Result;
use crate::services::checkout::OrderSummary;
use crate::storage::{FileStore, KeyValueStore};
use crate::wishlist::WishlistStore;

/// Owns the cart and wishlist stores for one shopper.
///
/// Both stores share one backend; each keeps its snapshot under its own key.
#[derive(Debug)]
pub struct StorefrontContext<B> {
    config: StorefrontConfig,
    cart: CartStore<B>,
    wishlist: WishlistStore<B>,
}

impl StorefrontContext<FileStore> {
    /// Open both stores from the configured data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn open(config: StorefrontConfig) -> Result<Self> {
        let backend = FileStore::open(&config.data_dir)?;
        tracing::debug!(dir = %config.data_dir.display(), "opened snapshot directory");
        Ok(Self::new(backend, config))
    }
}

impl<B: KeyValueStore + Clone> StorefrontContext<B> {
    /// Load both stores from `backend`.
    pub fn new(backend: B, config: StorefrontConfig) -> Self {
        Self {
            cart: CartStore::open(backend.clone()),
            wishlist: WishlistStore::open(backend),
            config,
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Currency and tax settings.
    #[must_use]
    pub const fn pricing(&self) -> PricingConfig {
        self.config.pricing
    }

    #[must_use]
    pub const fn cart(&self) -> &CartStore<B> {
        &self.cart
    }

    pub const fn cart_mut(&mut self) -> &mut CartStore<B> {
        &mut self.cart
    }

    #[must_use]
    pub const fn wishlist(&self) -> &WishlistStore<B> {
        &self.wishlist
    }

    pub const fn wishlist_mut(&mut self) -> &mut WishlistStore<B> {
        &mut self.wishlist
    }

    /// Move a saved product into the cart with quantity 1.
    ///
    /// Returns `false` and changes nothing if `id` isn't in the wishlist.
    #[instrument(skip(self))]
    pub fn move_to_cart(&mut self, id: ProductId) -> bool {
        let Some(line) = self.wishlist.get(id).map(|saved| saved.to_line_item(1)) else {
            return false;
        };
        self.cart.add_to_cart(line, 1);
        self.wishlist.remove_from_wishlist(id);
        true
    }

    /// Order summary for the current cart.
    #[must_use]
    pub fn order_summary(&self) -> OrderSummary {
        OrderSummary::from_cart(self.cart.state(), self.config.pricing)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use nexcart_core::WishItem;

    use super::*;
    use crate::storage::MemoryStore;

    fn context(backend: MemoryStore) -> StorefrontContext<MemoryStore> {
        let config = StorefrontConfig::from_lookup(|_| None).unwrap();
        StorefrontContext::new(backend, config)
    }

    fn wish(id: i64) -> WishItem {
        WishItem::new(ProductId::new(id), "Lip Balm", Decimal::from(4), "lip.png")
    }

    #[test]
    fn test_stores_share_backend() {
        let backend = MemoryStore::new();
        let mut ctx = context(backend.clone());
        ctx.wishlist_mut().add_to_wishlist(wish(1));
        ctx.cart_mut().add_to_cart(wish(2).to_line_item(1), 2);
        assert_eq!(backend.len(), 2);

        let reopened = context(backend);
        assert!(reopened.wishlist().is_in_wishlist(ProductId::new(1)));
        assert_eq!(reopened.cart().total_quantity(), 2);
    }

    #[test]
    fn test_move_to_cart() {
        let mut ctx = context(MemoryStore::new());
        ctx.wishlist_mut().add_to_wishlist(wish(7));

        assert!(ctx.move_to_cart(ProductId::new(7)));
        assert!(!ctx.wishlist().is_in_wishlist(ProductId::new(7)));
        let line = ctx.cart().get(ProductId::new(7)).unwrap();
        assert_eq!(line.quantity, 1);
        assert_eq!(line.title, "Lip Balm");
    }

    #[test]
    fn test_move_to_cart_merges_existing_line() {
        let mut ctx = context(MemoryStore::new());
        ctx.cart_mut().add_to_cart(wish(7).to_line_item(1), 2);
        ctx.wishlist_mut().add_to_wishlist(wish(7));

        assert!(ctx.move_to_cart(ProductId::new(7)));
        assert_eq!(ctx.cart().get(ProductId::new(7)).unwrap().quantity, 3);
        assert_eq!(ctx.cart().items().len(), 1);
    }

    #[test]
    fn test_move_to_cart_unknown_id() {
        let mut ctx = context(MemoryStore::new());
        assert!(!ctx.move_to_cart(ProductId::new(99)));
        assert!(ctx.cart().is_empty());
    }

    #[test]
    fn test_order_summary_uses_config_rates() {
        let config = StorefrontConfig::from_lookup(|key| {
            (key == "NEXCART_GST_RATE").then(|| "0.5".to_string())
        })
        .unwrap();
        let mut ctx = StorefrontContext::new(MemoryStore::new(), config);
        ctx.cart_mut().add_to_cart(wish(1).to_line_item(1), 3);

        let summary = ctx.order_summary();
        assert_eq!(summary.subtotal, Decimal::from(12));
        assert_eq!(summary.tax, Decimal::from(6));
        assert_eq!(summary.total, Decimal::from(18));
    }

    #[test]
    fn test_open_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("nested").join("data");
        let config = StorefrontConfig::from_lookup(|key| {
            (key == "NEXCART_DATA_DIR").then(|| data_dir.display().to_string())
        })
        .unwrap();

        let mut ctx = StorefrontContext::open(config).unwrap();
        ctx.wishlist_mut().add_to_wishlist(wish(3));
        assert!(data_dir.join("wishlist.json").exists());
    }
}
