//! CLI subcommands.

pub mod cart;
pub mod catalog;
pub mod wishlist;

use clap::Args;
use rust_decimal::Decimal;
use thiserror::Error;

use nexcart_core::{Price, ProductId, WishItem};
use nexcart_storefront::error::report_error;
use nexcart_storefront::{PersistenceError, StorefrontError};

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Opening or configuring the storefront failed.
    #[error(transparent)]
    Storefront(#[from] StorefrontError),

    /// The change was applied but could not be written to disk.
    #[error("Change not saved: {0}")]
    NotSaved(String),
}

impl CliError {
    /// Log the error and capture it to Sentry.
    pub fn report(&self) {
        match self {
            Self::Storefront(err) => report_error(err),
            Self::NotSaved(_) => {
                let event_id = sentry::capture_error(self);
                tracing::error!(error = %self, sentry_event_id = %event_id, "command failed");
            }
        }
    }
}

/// Product fields given on the command line.
#[derive(Debug, Args)]
pub struct ProductArgs {
    /// Product ID
    #[arg(long)]
    pub id: ProductId,

    /// Product title
    #[arg(long)]
    pub title: String,

    /// Unit price in US dollars
    #[arg(long)]
    pub price: Decimal,

    /// Thumbnail image URL
    #[arg(long)]
    pub thumbnail: String,
}

impl ProductArgs {
    pub fn into_wish_item(self) -> WishItem {
        WishItem::new(self.id, self.title, self.price, self.thumbnail)
    }
}

/// Fail if the store's last save did not reach the backend.
pub fn ensure_saved(err: Option<&PersistenceError>) -> Result<(), CliError> {
    err.map_or(Ok(()), |e| Err(CliError::NotSaved(e.to_string())))
}

/// Format a USD amount in rupees.
pub fn inr(amount: Decimal, rate: Decimal) -> String {
    Price::usd(amount).to_inr(rate).to_string()
}
