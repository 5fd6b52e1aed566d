//! Unified error handling with Sentry integration.
//!
//! Provides the crate-level [`StorefrontError`] and the helpers that send
//! diagnostics to tracing and Sentry. Without an initialised Sentry client
//! the Sentry calls are no-ops.

use thiserror::Error;

use crate::config::ConfigError;
use crate::persistence::PersistenceError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Key-value backend could not be opened or used.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// A snapshot could not be written.
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// A catalog URL could not be built.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Referenced item does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;

/// Log an error and capture it to Sentry.
pub fn report_error(err: &StorefrontError) {
    let event_id = sentry::capture_error(err);
    tracing::error!(error = %err, sentry_event_id = %event_id, "storefront error");
}

/// Report a failed snapshot write.
///
/// Persistence failures are non-fatal: the in-memory state stays
/// authoritative, so this only records the failure.
pub fn report_persist_error(err: &PersistenceError) {
    let event_id = sentry::capture_error(err);
    tracing::error!(
        error = %err,
        sentry_event_id = %event_id,
        "failed to persist snapshot; keeping in-memory state"
    );
}

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of store
/// actions leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("cart", "Increment(ProductId(1))", Some(&[("source", "cart_page")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}
