//! Core types for NexCart.
//!
//! This module provides type-safe wrappers for the storefront's domain
//! concepts.

pub mod catalog;
pub mod email;
pub mod id;
pub mod item;
pub mod price;

pub use catalog::{Category, Product, ProductPage, SEARCH_PATH, product_path};
pub use email::{Email, EmailError};
pub use id::*;
pub use item::{LineItem, WishItem};
pub use price::{CurrencyCode, Price};
