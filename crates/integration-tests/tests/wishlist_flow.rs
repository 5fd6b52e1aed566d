//! Wishlist scenarios through the storefront context.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;

use nexcart_core::ProductId;
use nexcart_integration_tests::{TestContext, line_item, wish_item};

#[test]
fn test_add_then_remove() {
    let test = TestContext::new();
    let mut ctx = test.open();
    let id = ProductId::new(7);

    ctx.wishlist_mut().add_to_wishlist(wish_item(7, 4));
    assert!(ctx.wishlist().is_in_wishlist(id));

    ctx.wishlist_mut().remove_from_wishlist(id);
    assert!(!ctx.wishlist().is_in_wishlist(id));
    assert!(ctx.wishlist().is_empty());
}

#[test]
fn test_duplicate_add_is_idempotent() {
    let test = TestContext::new();
    let mut ctx = test.open();

    ctx.wishlist_mut().add_to_wishlist(wish_item(7, 4));
    let before = ctx.wishlist().state().clone();
    let mut repriced = wish_item(7, 4);
    repriced.price = Decimal::from(99);
    ctx.wishlist_mut().add_to_wishlist(repriced);

    assert_eq!(ctx.wishlist().state(), &before);
    assert_eq!(ctx.wishlist().len(), 1);
}

#[test]
fn test_toggle_persists() {
    let test = TestContext::new();
    {
        let mut ctx = test.open();
        assert!(ctx.wishlist_mut().toggle_wishlist(wish_item(3, 12)));
    }
    {
        let mut ctx = test.open();
        assert!(ctx.wishlist().is_in_wishlist(ProductId::new(3)));
        assert!(!ctx.wishlist_mut().toggle_wishlist(wish_item(3, 12)));
    }
    assert!(test.open().wishlist().is_empty());
}

#[test]
fn test_move_to_cart_across_stores() {
    let test = TestContext::new();
    {
        let mut ctx = test.open();
        ctx.cart_mut().add_to_cart(line_item(1, 10, 1), 1);
        ctx.wishlist_mut().add_to_wishlist(wish_item(1, 10));
        ctx.wishlist_mut().add_to_wishlist(wish_item(2, 5));
        assert!(ctx.move_to_cart(ProductId::new(1)));
        assert!(!ctx.move_to_cart(ProductId::new(42)));
    }

    let ctx = test.open();
    assert_eq!(ctx.cart().get(ProductId::new(1)).unwrap().quantity, 2);
    assert!(!ctx.wishlist().is_in_wishlist(ProductId::new(1)));
    assert!(ctx.wishlist().is_in_wishlist(ProductId::new(2)));
}
