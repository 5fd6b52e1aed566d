//! Catalog commands.

use clap::Subcommand;

use nexcart_core::Category;
use nexcart_storefront::{StorefrontConfig, StorefrontError};

use super::CliError;

#[derive(Debug, Subcommand)]
pub enum CatalogCommand {
    /// Print each menu category with its product API endpoint
    Categories {
        /// Products per category
        #[arg(short, long, default_value_t = Category::DEFAULT_LIMIT)]
        limit: u32,
    },
    /// Print the product search endpoint for a query
    Search { query: String },
}

/// Run a catalog command.
///
/// # Errors
///
/// Returns an error if an endpoint URL cannot be built.
#[allow(clippy::print_stdout)]
pub fn run(config: &StorefrontConfig, command: CatalogCommand) -> Result<(), CliError> {
    match command {
        CatalogCommand::Categories { limit } => {
            for category in Category::ALL {
                let url = config
                    .category_url(category, limit)
                    .map_err(StorefrontError::from)?;
                println!("{:<12}  {url}", category.name());
            }
        }
        CatalogCommand::Search { query } => {
            let url = config.search_url(&query).map_err(StorefrontError::from)?;
            println!("{url}");
        }
    }
    Ok(())
}
