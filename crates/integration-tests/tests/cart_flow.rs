//! Cart scenarios through the storefront context.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;

use nexcart_core::ProductId;
use nexcart_integration_tests::{TestContext, line_item};

#[test]
fn test_add_increment_decrement() {
    let test = TestContext::new();
    let mut ctx = test.open();
    let id = ProductId::new(1);

    ctx.cart_mut().add_to_cart(line_item(1, 10, 1), 1);
    ctx.cart_mut().increment(id);
    ctx.cart_mut().decrement(id);
    assert_eq!(ctx.cart().get(id).unwrap().quantity, 1);

    ctx.cart_mut().increment(id);
    assert_eq!(ctx.cart().get(id).unwrap().quantity, 2);
    assert_eq!(ctx.cart().total_price(), Decimal::from(20));
}

#[test]
fn test_merge_on_add() {
    let test = TestContext::new();
    let mut ctx = test.open();

    ctx.cart_mut().add_to_cart(line_item(5, 3, 2), 2);
    ctx.cart_mut().add_to_cart(line_item(5, 3, 3), 3);

    assert_eq!(ctx.cart().items().len(), 1);
    assert_eq!(ctx.cart().get(ProductId::new(5)).unwrap().quantity, 5);
}

#[test]
fn test_decrement_floor_and_remove() {
    let test = TestContext::new();
    let mut ctx = test.open();
    let id = ProductId::new(2);

    ctx.cart_mut().add_to_cart(line_item(2, 8, 1), 1);
    ctx.cart_mut().decrement(id);
    ctx.cart_mut().decrement(id);
    assert_eq!(ctx.cart().get(id).unwrap().quantity, 1);

    ctx.cart_mut().remove_item(id);
    ctx.cart_mut().remove_item(id);
    assert!(ctx.cart().is_empty());
    assert!(ctx.cart().last_persist_error().is_none());
}

#[test]
fn test_unknown_ids_are_noops() {
    let test = TestContext::new();
    let mut ctx = test.open();
    ctx.cart_mut().add_to_cart(line_item(1, 10, 1), 1);
    let before = ctx.cart().state().clone();

    ctx.cart_mut().increment(ProductId::new(9));
    ctx.cart_mut().decrement(ProductId::new(9));
    ctx.cart_mut().remove_item(ProductId::new(9));

    assert_eq!(ctx.cart().state(), &before);
}

#[test]
fn test_insertion_order_survives_reopen() {
    let test = TestContext::new();
    {
        let mut ctx = test.open();
        for id in [3, 1, 2] {
            ctx.cart_mut().add_to_cart(line_item(id, 1, 1), 1);
        }
        ctx.cart_mut().increment(ProductId::new(1));
    }

    let ctx = test.open();
    let ids: Vec<i64> = ctx.cart().items().iter().map(|l| l.id.as_i64()).collect();
    assert_eq!(ids, vec![3, 1, 2]);
    assert_eq!(ctx.cart().total_quantity(), 4);
}

#[test]
fn test_order_summary_in_rupees() {
    let test = TestContext::new();
    let mut ctx = test.open();
    ctx.cart_mut().add_to_cart(line_item(1, 10, 2), 2);

    let summary = ctx.order_summary();
    assert_eq!(summary.item_label(), "2 items");
    assert_eq!(summary.in_inr(summary.subtotal).to_string(), "₹1,776");
    assert_eq!(summary.in_inr(summary.tax).to_string(), "₹320");
    assert_eq!(summary.in_inr(summary.total).to_string(), "₹2,095");
}
