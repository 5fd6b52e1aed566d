//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//! - `NEXCART_DATA_DIR` - Directory holding the cart/wishlist snapshots (default: `.nexcart`)
//! - `NEXCART_CATALOG_URL` - Product API root (default: `https://dummyjson.com`)
//! - `NEXCART_INR_RATE` - Rupees per US dollar for display prices (default: 88.78)
//! - `NEXCART_GST_RATE` - GST fraction applied at checkout (default: 0.18)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;
use url::Url;

use nexcart_core::{Category, ProductId, SEARCH_PATH, product_path};

const DEFAULT_DATA_DIR: &str = ".nexcart";
const DEFAULT_CATALOG_URL: &str = "https://dummyjson.com";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory for the file-backed key-value store
    pub data_dir: PathBuf,
    /// Product API root, always ending in `/`
    pub catalog_url: Url,
    /// Currency conversion and tax settings
    pub pricing: PricingConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// Currency conversion and tax settings used for display prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingConfig {
    /// Rupees per US dollar.
    pub inr_rate: Decimal,
    /// GST as a fraction (0.18 = 18%).
    pub gst_rate: Decimal,
}

impl PricingConfig {
    /// Default USD→INR rate.
    pub const DEFAULT_INR_RATE: Decimal = Decimal::from_parts(8878, 0, 0, false, 2);
    /// Default GST fraction.
    pub const DEFAULT_GST_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 2);
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            inr_rate: Self::DEFAULT_INR_RATE,
            gst_rate: Self::DEFAULT_GST_RATE,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = PathBuf::from(get_or_default(&lookup, "NEXCART_DATA_DIR", DEFAULT_DATA_DIR));
        let catalog_url = parse_catalog_url(&get_or_default(
            &lookup,
            "NEXCART_CATALOG_URL",
            DEFAULT_CATALOG_URL,
        ))?;

        let inr_rate = parse_decimal(&lookup, "NEXCART_INR_RATE", PricingConfig::DEFAULT_INR_RATE)?;
        if inr_rate <= Decimal::ZERO {
            return Err(ConfigError::InvalidEnvVar(
                "NEXCART_INR_RATE".to_string(),
                "must be greater than zero".to_string(),
            ));
        }

        let gst_rate = parse_decimal(&lookup, "NEXCART_GST_RATE", PricingConfig::DEFAULT_GST_RATE)?;
        if gst_rate < Decimal::ZERO || gst_rate > Decimal::ONE {
            return Err(ConfigError::InvalidEnvVar(
                "NEXCART_GST_RATE".to_string(),
                "must be between 0 and 1".to_string(),
            ));
        }

        Ok(Self {
            data_dir,
            catalog_url,
            pricing: PricingConfig { inr_rate, gst_rate },
            sentry_dsn: get_optional(&lookup, "SENTRY_DSN"),
            sentry_environment: get_optional(&lookup, "SENTRY_ENVIRONMENT"),
        })
    }

    /// URL of a category listing in the product API.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if the joined URL is invalid.
    pub fn category_url(&self, category: Category, limit: u32) -> Result<Url, url::ParseError> {
        self.catalog_url.join(&category.endpoint_path(limit))
    }

    /// URL of a single product in the product API.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if the joined URL is invalid.
    pub fn product_url(&self, id: ProductId) -> Result<Url, url::ParseError> {
        self.catalog_url.join(&product_path(id))
    }

    /// URL of a product search for `query`, with the query form-encoded.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if the joined URL is invalid.
    pub fn search_url(&self, query: &str) -> Result<Url, url::ParseError> {
        let mut url = self.catalog_url.join(SEARCH_PATH)?;
        url.query_pairs_mut().append_pair("q", query.trim());
        Ok(url)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional, non-empty variable.
fn get_optional(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|value| !value.trim().is_empty())
}

/// Get a variable with a default value.
fn get_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    get_optional(lookup, key).unwrap_or_else(|| default.to_string())
}

/// Parse a decimal variable, falling back to `default` when unset.
fn parse_decimal(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: Decimal,
) -> Result<Decimal, ConfigError> {
    get_optional(lookup, key).map_or(Ok(default), |raw| {
        Decimal::from_str(raw.trim())
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

/// Parse the catalog root, making sure relative joins append to its path.
fn parse_catalog_url(raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw.trim())
        .map_err(|e| ConfigError::InvalidEnvVar("NEXCART_CATALOG_URL".to_string(), e.to_string()))?;

    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidEnvVar(
            "NEXCART_CATALOG_URL".to_string(),
            "must be an absolute http(s) URL".to_string(),
        ));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
