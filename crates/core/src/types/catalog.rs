//! Catalog records from the public product API.
//!
//! The storefront reads products from a dummyjson-shaped REST API. Only the
//! fields the cart, wishlist and product pages use are modelled; unknown
//! fields are ignored on deserialization.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::item::{LineItem, WishItem};

/// A product as returned by `GET /products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    /// Current (discounted) price in USD.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    /// Discount applied to reach `price`, in percent.
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision")]
    pub discount_percentage: Decimal,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub brand: Option<String>,
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    /// Price before the discount was applied.
    ///
    /// Equals `price` when there is no discount (or a nonsensical one of
    /// 100% or more).
    #[must_use]
    pub fn original_price(&self) -> Decimal {
        let hundred = Decimal::ONE_HUNDRED;
        if self.discount_percentage <= Decimal::ZERO || self.discount_percentage >= hundred {
            return self.price;
        }
        self.price
            .checked_div(Decimal::ONE - self.discount_percentage / hundred)
            .unwrap_or(Decimal::MAX)
    }

    /// Whether a customer may pick `quantity` units on the product page.
    #[must_use]
    pub const fn can_order(&self, quantity: u32) -> bool {
        quantity >= 1 && quantity <= self.stock
    }

    /// Cart line for this product.
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

    /// Wishlist entry for this product.
    #[must_use]
    pub fn to_wish_item(&self) -> WishItem {
        WishItem::new(self.id, self.title.clone(), self.price, self.thumbnail.clone())
    }
}

/// A page of products as returned by list and category endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPage {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub skip: u32,
    #[serde(default)]
    pub limit: u32,
}

/// Navigation categories shown in the header dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Beauty,
    Women,
    Men,
    Electronics,
    Living,
    Sports,
    Accessories,
}

impl Category {
    /// Every category in menu order.
    pub const ALL: [Self; 7] = [
        Self::Beauty,
        Self::Women,
        Self::Men,
        Self::Electronics,
        Self::Living,
        Self::Sports,
        Self::Accessories,
    ];

    /// Products fetched per dropdown.
    pub const DEFAULT_LIMIT: u32 = 15;

    /// Label shown in the menu.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Beauty => "Beauty",
            Self::Women => "Women",
            Self::Men => "Men",
            Self::Electronics => "Electronics",
            Self::Living => "Living",
            Self::Sports => "Sports",
            Self::Accessories => "Accessories",
        }
    }

    /// Category slug in the product API.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Beauty => "beauty",
            Self::Women => "womens-dresses",
            Self::Men => "mens-shirts",
            Self::Electronics => "smartphones",
            Self::Living => "furniture",
            Self::Sports => "sports-accessories",
            Self::Accessories => "womens-bags",
        }
    }

    /// Look a category up by its menu label, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Path and query of the category listing, relative to the API root.
    #[must_use]
    pub fn endpoint_path(self, limit: u32) -> String {
        format!("products/category/{}?limit={limit}", self.slug())
    }
}

/// Path of the product search endpoint, relative to the API root. The query
/// goes in the `q` parameter.
pub const SEARCH_PATH: &str = "products/search";

/// Path of a single product, relative to the API root.
#[must_use]
pub fn product_path(id: ProductId) -> String {
    format!("products/{id}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> Product {
        serde_json::from_str(
            r#"{
                "id": 1,
                "title": "Essence Mascara Lash Princess",
                "description": "Popular mascara",
                "category": "beauty",
                "price": 9.99,
                "discountPercentage": 10,
                "rating": 4.94,
                "stock": 5,
                "tags": ["beauty", "mascara"],
                "brand": "Essence",
                "thumbnail": "https://cdn.example/thumb.png",
                "images": ["https://cdn.example/1.png"]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let product = sample();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.brand.as_deref(), Some("Essence"));
        assert_eq!(product.images.len(), 1);
    }

    #[test]
    fn test_original_price() {
        let product = sample();
        // 9.99 / 0.9 = 11.1
        assert_eq!(product.original_price().round_dp(2), Decimal::new(1110, 2));

        let no_discount = Product {
            discount_percentage: Decimal::ZERO,
            ..sample()
        };
        assert_eq!(no_discount.original_price(), no_discount.price);
    }

    #[test]
    fn test_can_order_respects_stock() {
        let product = sample();
        assert!(product.can_order(1));
        assert!(product.can_order(5));
        assert!(!product.can_order(6));
        assert!(!product.can_order(0));
    }

    #[test]
    fn test_conversions() {
        let product = sample();
        let line = product.to_line_item(2);
        assert_eq!(line.quantity, 2);
        assert_eq!(line.price, product.price);

        let wish = product.to_wish_item();
        assert_eq!(wish.quantity, 1);
        assert_eq!(wish.title, product.title);
    }

    #[test]
    fn test_category_table() {
        assert_eq!(Category::ALL.len(), 7);
        assert_eq!(Category::Electronics.slug(), "smartphones");
        assert_eq!(Category::from_name("living"), Some(Category::Living));
        assert_eq!(Category::from_name("Toys"), None);
        assert_eq!(
            Category::Men.endpoint_path(Category::DEFAULT_LIMIT),
            "products/category/mens-shirts?limit=15"
        );
        assert_eq!(product_path(ProductId::new(3)), "products/3");
        assert_eq!(SEARCH_PATH, "products/search");
    }
}
