//! Wishlist commands.
//!
//! # Usage
//!
//! ```bash
//! nexcart wishlist show
//! nexcart wishlist add --id 7 --title "Lip Balm" --price 4 --thumbnail l.png
//! nexcart wishlist contains 7
//! nexcart wishlist toggle --id 7 --title "Lip Balm" --price 4 --thumbnail l.png
//! nexcart wishlist move-to-cart 7
//! nexcart wishlist remove 7
//! ```

use clap::Subcommand;

use nexcart_core::ProductId;
use nexcart_storefront::{KeyValueStore, StorefrontContext, StorefrontError};

use super::{CliError, ProductArgs, ensure_saved, inr};

#[derive(Debug, Subcommand)]
pub enum WishlistCommand {
    /// List saved products
    Show,
    /// Save a product
    Add(ProductArgs),
    /// Forget a product
    Remove { id: ProductId },
    /// Print whether a product is saved
    Contains { id: ProductId },
    /// Save a product, or forget it if already saved
    Toggle(ProductArgs),
    /// Move a saved product into the cart
    MoveToCart { id: ProductId },
}

/// Run a wishlist command against `ctx`.
///
/// # Errors
///
/// Returns `StorefrontError::NotFound` when moving an unknown product, and
/// `CliError::NotSaved` if a change could not be persisted.
#[allow(clippy::print_stdout)]
pub fn run<B: KeyValueStore + Clone>(
    ctx: &mut StorefrontContext<B>,
    command: WishlistCommand,
) -> Result<(), CliError> {
    match command {
        WishlistCommand::Show => {
            show(ctx);
        }
        WishlistCommand::Contains { id } => {
            println!("{}", if ctx.wishlist().is_in_wishlist(id) { "yes" } else { "no" });
        }
        WishlistCommand::Add(product) => {
            ctx.wishlist_mut().add_to_wishlist(product.into_wish_item());
            ensure_saved(ctx.wishlist().last_persist_error())?;
            show(ctx);
        }
        WishlistCommand::Remove { id } => {
            ctx.wishlist_mut().remove_from_wishlist(id);
            ensure_saved(ctx.wishlist().last_persist_error())?;
            show(ctx);
        }
        WishlistCommand::Toggle(product) => {
            let id = product.id;
            let saved = ctx.wishlist_mut().toggle_wishlist(product.into_wish_item());
            ensure_saved(ctx.wishlist().last_persist_error())?;
            if saved {
                println!("Added {id} to wishlist");
            } else {
                println!("Removed {id} from wishlist");
            }
        }
        WishlistCommand::MoveToCart { id } => {
            if !ctx.move_to_cart(id) {
                return Err(StorefrontError::NotFound(format!("wishlist item {id}")).into());
            }
            ensure_saved(ctx.cart().last_persist_error())?;
            ensure_saved(ctx.wishlist().last_persist_error())?;
            println!("Moved {id} to cart");
        }
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
fn show<B: KeyValueStore + Clone>(ctx: &StorefrontContext<B>) {
    let rate = ctx.pricing().inr_rate;
    let wishlist = ctx.wishlist();

    if wishlist.is_empty() {
        println!("Your wishlist is empty");
        return;
    }

    for item in wishlist.items() {
        println!("{:>6}  {:<40}  {}", item.id, item.title, inr(item.price, rate));
    }
    println!("My Wishlist ({})", wishlist.len());
}
