//! NexCart Core - Shared types library.
//!
//! This crate provides the types used across all NexCart components:
//! - `storefront` - Cart and wishlist stores, persistence, checkout summary
//! - `cli` - Command-line front end over a file-backed store
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! storage access, no HTTP clients. This keeps it usable anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product IDs, prices, emails, line items and catalog records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
