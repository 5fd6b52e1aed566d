//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! nexcart cart show
//! nexcart cart add --id 1 --title "Essence Mascara" --price 9.99 --thumbnail m.png --quantity 2
//! nexcart cart increment 1
//! nexcart cart decrement 1
//! nexcart cart remove 1
//! nexcart cart summary
//! ```

use clap::Subcommand;
use rust_decimal::Decimal;

use nexcart_core::ProductId;
use nexcart_storefront::services::checkout::item_count_label;
use nexcart_storefront::{KeyValueStore, StorefrontContext};

use super::{CliError, ProductArgs, ensure_saved, inr};

#[derive(Debug, Subcommand)]
pub enum CartCommand {
    /// List cart lines with line totals in rupees
    Show,
    /// Add a product, merging with an existing line
    Add {
        #[command(flatten)]
        product: ProductArgs,

        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Raise a line's quantity by one
    Increment { id: ProductId },
    /// Lower a line's quantity by one, stopping at 1
    Decrement { id: ProductId },
    /// Remove a line
    Remove { id: ProductId },
    /// Print the order summary
    Summary,
}

/// Run a cart command against `ctx`.
///
/// # Errors
///
/// Returns `CliError::NotSaved` if a change could not be persisted.
pub fn run<B: KeyValueStore + Clone>(
    ctx: &mut StorefrontContext<B>,
    command: CartCommand,
) -> Result<(), CliError> {
    match command {
        CartCommand::Show => {
            show(ctx);
            return Ok(());
        }
        CartCommand::Summary => {
            summary(ctx);
            return Ok(());
        }
        CartCommand::Add { product, quantity } => {
            let line = product.into_wish_item().to_line_item(quantity);
            ctx.cart_mut().add_to_cart(line, quantity);
        }
        CartCommand::Increment { id } => ctx.cart_mut().increment(id),
        CartCommand::Decrement { id } => ctx.cart_mut().decrement(id),
        CartCommand::Remove { id } => ctx.cart_mut().remove_item(id),
    }

    ensure_saved(ctx.cart().last_persist_error())?;
    show(ctx);
    Ok(())
}

#[allow(clippy::print_stdout)]
fn show<B: KeyValueStore + Clone>(ctx: &StorefrontContext<B>) {
    let rate = ctx.pricing().inr_rate;
    let cart = ctx.cart();

    if cart.is_empty() {
        println!("Your cart is empty");
        return;
    }

    for line in cart.items() {
        println!(
            "{:>6}  {:<40}  x{:<3}  {}",
            line.id,
            line.title,
            line.quantity,
            inr(line.line_total(), rate)
        );
    }
    println!("{}", item_count_label(cart.total_quantity()));
}

#[allow(clippy::print_stdout)]
fn summary<B: KeyValueStore + Clone>(ctx: &StorefrontContext<B>) {
    let summary = ctx.order_summary();
    let gst_percent = (ctx.pricing().gst_rate * Decimal::ONE_HUNDRED).normalize();

    println!("Subtotal ({}): {}", summary.item_label(), summary.in_inr(summary.subtotal));
    if summary.free_shipping() {
        println!("Shipping: FREE");
    } else {
        println!("Shipping: {}", summary.in_inr(summary.shipping));
    }
    println!("Tax (GST {gst_percent}%): {}", summary.in_inr(summary.tax));
    println!("Total: {}", summary.in_inr(summary.total));
}
