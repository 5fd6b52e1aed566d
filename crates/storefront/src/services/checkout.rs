//! Cart order summary.
//!
//! Amounts are computed in the catalog's source currency (USD) and converted
//! to rupees only for display, each amount converted separately the way the
//! cart page shows them. Shipping is always free.

use rust_decimal::Decimal;

use nexcart_core::Price;

use crate::cart::CartState;
use crate::config::PricingConfig;

/// Totals shown in the cart's order summary panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary {
    /// Sum of quantities.
    pub total_items: u32,
    /// Σ price × quantity.
    pub subtotal: Decimal,
    /// Always zero.
    pub shipping: Decimal,
    /// GST on the subtotal.
    pub tax: Decimal,
    /// `subtotal + tax`.
    pub total: Decimal,
    pricing: PricingConfig,
}

impl OrderSummary {
    /// Summarise `cart` using the given rates.
    #[must_use]
    pub fn from_cart(cart: &CartState, pricing: PricingConfig) -> Self {
        let subtotal = cart.total_price();
        Self {
            total_items: cart.total_quantity(),
            subtotal,
            shipping: Decimal::ZERO,
            tax: subtotal.saturating_mul(pricing.gst_rate),
            total: subtotal.saturating_mul(Decimal::ONE + pricing.gst_rate),
            pricing,
        }
    }

    /// Whether the shipping line should read "FREE".
    #[must_use]
    pub fn free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }

    /// Convert a USD amount from this summary to rupees.
    #[must_use]
    pub fn in_inr(&self, amount: Decimal) -> Price {
        Price::usd(amount).to_inr(self.pricing.inr_rate)
    }

    /// `"1 item"` or `"N items"`.
    #[must_use]
    pub fn item_label(&self) -> String {
        item_count_label(self.total_items)
    }
}

/// `"1 item"` or `"N items"`.
#[must_use]
pub fn item_count_label(count: u32) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{count} items")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use nexcart_core::{LineItem, ProductId};

    use super::*;

    fn cart(lines: &[(i64, &str, u32)]) -> CartState {
        CartState {
            items: lines
                .iter()
                .map(|(id, price, quantity)| LineItem {
                    id: ProductId::new(*id),
                    title: format!("Product {id}"),
                    price: Decimal::from_str(price).unwrap(),
                    thumbnail: "t".to_string(),
                    quantity: *quantity,
                })
                .collect(),
        }
    }

    #[test]
    fn test_empty_cart() {
        let summary = OrderSummary::from_cart(&CartState::default(), PricingConfig::default());
        assert_eq!(summary.total_items, 0);
        assert_eq!(summary.total, Decimal::ZERO);
        assert_eq!(summary.item_label(), "0 items");
        assert_eq!(summary.in_inr(summary.total).to_string(), "₹0");
    }

    #[test]
    fn test_summary_amounts() {
        let summary = OrderSummary::from_cart(&cart(&[(1, "10", 2)]), PricingConfig::default());
        assert_eq!(summary.total_items, 2);
        assert_eq!(summary.subtotal, Decimal::from(20));
        assert_eq!(summary.tax, Decimal::from_str("3.6").unwrap());
        assert_eq!(summary.total, Decimal::from_str("23.6").unwrap());
        assert!(summary.free_shipping());
    }

    #[test]
    fn test_summary_in_inr() {
        let summary = OrderSummary::from_cart(&cart(&[(1, "10", 2)]), PricingConfig::default());
        // 20 * 88.78 = 1775.60
        assert_eq!(summary.in_inr(summary.subtotal).to_string(), "₹1,776");
        // 3.6 * 88.78 = 319.608 -> 319.61
        assert_eq!(summary.in_inr(summary.tax).to_string(), "₹320");
        // 23.6 * 88.78 = 2095.208 -> 2095.21
        assert_eq!(summary.in_inr(summary.total).to_string(), "₹2,095");
    }

    #[test]
    fn test_custom_rates() {
        let pricing = PricingConfig {
            inr_rate: Decimal::from(80),
            gst_rate: Decimal::from_str("0.05").unwrap(),
        };
        let summary = OrderSummary::from_cart(&cart(&[(1, "9.99", 1), (2, "0.01", 3)]), pricing);
        assert_eq!(summary.subtotal, Decimal::from_str("10.02").unwrap());
        assert_eq!(summary.total, Decimal::from_str("10.521").unwrap());
        assert_eq!(summary.item_label(), "4 items");
    }

    #[test]
    fn test_summary_saturates_on_huge_cart() {
        let mut huge = cart(&[(1, "1", u32::MAX)]);
        huge.items[0].price = Decimal::MAX;

        let summary = OrderSummary::from_cart(&huge, PricingConfig::default());
        assert_eq!(summary.subtotal, Decimal::MAX);
        assert_eq!(summary.total, Decimal::MAX);
        assert!(summary.tax < summary.total);
        assert_eq!(summary.in_inr(summary.total).amount, Decimal::MAX);
    }

    #[test]
    fn test_item_count_label() {
        assert_eq!(item_count_label(1), "1 item");
        assert_eq!(item_count_label(3), "3 items");
    }
}
