//! Storefront services that sit beside the stores.
//!
//! - `auth` - Login and registration form validation
//! - `checkout` - Order summary for the cart page

pub mod auth;
pub mod checkout;
