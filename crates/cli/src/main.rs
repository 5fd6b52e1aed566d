//! `NexCart` CLI - inspect and edit the persisted cart and wishlist.
//!
//! # Usage
//!
//! ```bash
//! # Add two units of a product to the cart
//! nexcart cart add --id 1 --title "Essence Mascara" --price 9.99 --thumbnail https://cdn.example/1.png --quantity 2
//!
//! # Show the cart and its order summary
//! nexcart cart show
//! nexcart cart summary
//!
//! # Save a product, then move it to the cart
//! nexcart wishlist add --id 7 --title "Lip Balm" --price 4 --thumbnail https://cdn.example/7.png
//! nexcart wishlist move-to-cart 7
//!
//! # List category endpoints
//! nexcart catalog categories --limit 15
//! ```
//!
//! # Commands
//!
//! - `cart` - Show, add, increment, decrement, remove, summary
//! - `wishlist` - Show, add, remove, contains, toggle, move-to-cart
//! - `catalog` - Category endpoint table, search endpoint

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nexcart_storefront::{StorefrontConfig, StorefrontContext, StorefrontError};

mod commands;

use commands::CliError;
use commands::cart::CartCommand;
use commands::catalog::CatalogCommand;
use commands::wishlist::WishlistCommand;

#[derive(Parser)]
#[command(name = "nexcart")]
#[command(author, version, about = "NexCart cart and wishlist tools")]
struct Cli {
    /// Directory holding the cart and wishlist snapshots
    #[arg(long, global = true, env = "NEXCART_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Work with the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartCommand,
    },
    /// Work with the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistCommand,
    },
    /// Browse catalog endpoints
    Catalog {
        #[command(subcommand)]
        action: CatalogCommand,
    },
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

fn init_tracing() {
    // Logs go to stderr so command output stays pipeable
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "nexcart=info,nexcart_storefront=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

fn main() {
    let cli = Cli::parse();

    let config = StorefrontConfig::from_env();

    // Sentry must be initialized before the tracing subscriber
    let _sentry_guard = config.as_ref().ok().and_then(init_sentry);
    init_tracing();

    let result = config
        .map_err(|e| CliError::from(StorefrontError::from(e)))
        .and_then(|config| run(cli, config));

    if let Err(e) = result {
        e.report();
        std::process::exit(1);
    }
}

fn run(cli: Cli, mut config: StorefrontConfig) -> Result<(), CliError> {
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    match cli.command {
        Commands::Cart { action } => {
            let mut ctx = StorefrontContext::open(config)?;
            commands::cart::run(&mut ctx, action)
        }
        Commands::Wishlist { action } => {
            let mut ctx = StorefrontContext::open(config)?;
            commands::wishlist::run(&mut ctx, action)
        }
        Commands::Catalog { action } => commands::catalog::run(&config, action),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_cart_add() {
        let cli = Cli::try_parse_from([
            "nexcart",
            "--data-dir",
            "/tmp/nexcart",
            "cart",
            "add",
            "--id",
            "1",
            "--title",
            "Mascara",
            "--price",
            "9.99",
            "--thumbnail",
            "m.png",
        ]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_parse_rejects_bad_id() {
        let cli = Cli::try_parse_from(["nexcart", "wishlist", "remove", "seven"]);
        assert!(cli.is_err());
    }
}
