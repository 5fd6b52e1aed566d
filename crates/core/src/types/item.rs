//! Cart and wishlist line items.
//!
//! These are the records persisted in the `cart` and `wishlist` snapshots.
//! The JSON shape is fixed:
//!
//! ```json
//! { "id": 1, "title": "A", "price": 10, "thumbnail": "https://...", "quantity": 1 }
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// A purchasable line in the cart.
///
/// `quantity` is always at least 1 once the item is in a cart; the cart
/// reducer enforces this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product identity, unique within a cart.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Unit price in the catalog's source currency (USD).
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    /// Thumbnail image URL.
    pub thumbnail: String,
    /// Number of units.
    pub quantity: u32,
}

impl LineItem {
    /// Unit price as a dollar [`Price`].
    #[must_use]
    pub const fn unit_price(&self) -> Price {
        Price::usd(self.price)
    }

    /// `price × quantity` in the source currency, saturating at the
    /// `Decimal` bounds.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// A saved wishlist entry.
///
/// `quantity` is always 1; it exists only so wish items and cart lines
/// share a snapshot shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishItem {
    /// Product identity, unique within a wishlist.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Unit price in the catalog's source currency (USD).
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    /// Thumbnail image URL.
    pub thumbnail: String,
    /// Always 1.
    #[serde(default = "WishItem::fixed_quantity")]
    pub quantity: u32,
}

impl WishItem {
    /// The only quantity a wish item carries.
    pub const QUANTITY: u32 = 1;

    /// Create a wish item; quantity is fixed at 1.
    #[must_use]
    pub fn new(id: ProductId, title: impl Into<String>, price: Decimal, thumbnail: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            thumbnail: thumbnail.into(),
            quantity: Self::QUANTITY,
        }
    }

    const fn fixed_quantity() -> u32 {
        Self::QUANTITY
    }

    /// Build the cart line used by "Move to Cart".
    #[must_use]
    pub fn to_line_item(&self, quantity: u32) -> LineItem {
        LineItem {
            id: self.id,
            title: self.title.clone(),
            price: self.price,
            thumbnail: self.thumbnail.clone(),
            quantity,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_json_shape() {
        let json = r#"{"id":1,"title":"A","price":10,"thumbnail":"t","quantity":2}"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, ProductId::new(1));
        assert_eq!(item.price, Decimal::from(10));
        assert_eq!(item.quantity, 2);

        let value = serde_json::to_value(&item).unwrap();
        assert!(value["price"].is_number());
        assert!(value["id"].is_number());
    }

    #[test]
    fn test_price_keeps_full_precision() {
        let item = LineItem {
            id: ProductId::new(1),
            title: "A".into(),
            price: "0.12345678901234567891".parse().unwrap(),
            thumbnail: "t".into(),
            quantity: 1,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains(r#""price":0.12345678901234567891"#));

        let back: LineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_line_total() {
        let item = LineItem {
            id: ProductId::new(1),
            title: "A".into(),
            price: Decimal::new(999, 2),
            thumbnail: "t".into(),
            quantity: 3,
        };
        assert_eq!(item.line_total(), Decimal::new(2997, 2));
    }

    #[test]
    fn test_line_total_saturates() {
        let item = LineItem {
            id: ProductId::new(1),
            title: "A".into(),
            price: Decimal::MAX,
            thumbnail: "t".into(),
            quantity: 2,
        };
        assert_eq!(item.line_total(), Decimal::MAX);
    }

    #[test]
    fn test_wish_item_quantity_defaults_to_one() {
        let json = r#"{"id":7,"title":"W","price":4.5,"thumbnail":"t"}"#;
        let item: WishItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.quantity, WishItem::QUANTITY);
        assert_eq!(item.price, Decimal::new(45, 1));
    }

    #[test]
    fn test_wish_item_to_line_item() {
        let wish = WishItem::new(ProductId::new(7), "W", Decimal::from(4), "t");
        let line = wish.to_line_item(1);
        assert_eq!(line.id, wish.id);
        assert_eq!(line.quantity, 1);
    }
}
