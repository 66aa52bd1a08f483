//! # ollan-quote
//!
//! Prices a cart snapshot exactly the way the checkout modal does.
//!
//! ```text
//! $ ollan-quote --cart cart.json --area "University of Ibadan" \
//!       --option timeframe --code OLLAN10
//! Subtotal:       ₦4500.00
//! Delivery (12 PM): ₦500.00
//! Discount (OLLAN10): -₦400.00
//! Grand total:    ₦4600.00
//! ```
//!
//! The cart file is a JSON array of cart lines, the shape the storefront
//! exports (`unit_price` in kobo). Pass `--config` to price against a
//! non-default store configuration, `--json` for machine-readable output.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use ollan_checkout::{
    compute_grand_total, next_available_slot, CartLine, CheckoutQuote, DeliverySelection, Slot,
    StoreConfig,
};

/// Delivery option flag; slot and location details come from their own
/// flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DeliveryOption {
    Express,
    Timeframe,
    Pickup,
}

#[derive(Debug, Parser)]
#[command(name = "ollan-quote", about = "Price a cart snapshot like the checkout does")]
struct Args {
    /// Path to the cart snapshot (JSON array of cart lines)
    #[arg(long)]
    cart: PathBuf,

    /// Delivery area, exactly as the storefront dropdown spells it
    #[arg(long)]
    area: String,

    /// Delivery option
    #[arg(long, value_enum, default_value = "express")]
    option: DeliveryOption,

    /// Delivery slot for timeframe delivery (e.g. "12 PM"); the next
    /// available slot is resolved from the clock when omitted
    #[arg(long)]
    slot: Option<Slot>,

    /// Pickup location (required with --option pickup)
    #[arg(long)]
    location: Option<String>,

    /// Promo code to apply
    #[arg(long)]
    code: Option<String>,

    /// Store configuration JSON; built-in defaults when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit the full quote as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading store config {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing store config {}", path.display()))?
        }
        None => StoreConfig::default(),
    };

    let raw = fs::read_to_string(&args.cart)
        .with_context(|| format!("reading cart snapshot {}", args.cart.display()))?;
    let cart: Vec<CartLine> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing cart snapshot {}", args.cart.display()))?;
    debug!(lines = cart.len(), "loaded cart snapshot");

    let selection = build_selection(&args)?;
    info!(area = %args.area, option = ?selection, "pricing cart");

    let quote = compute_grand_total(
        &config,
        &cart,
        &selection,
        &args.area,
        args.code.as_deref(),
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        print_summary(&quote, &selection);
    }

    Ok(())
}

/// Builds the delivery selection from the flags, resolving the next slot
/// from the wall clock when timeframe delivery has no explicit slot.
fn build_selection(args: &Args) -> Result<DeliverySelection> {
    let selection = match args.option {
        DeliveryOption::Express => DeliverySelection::Express,
        DeliveryOption::Timeframe => {
            let slot = match args.slot {
                Some(slot) => slot,
                None => {
                    let slot = next_available_slot(Local::now().time());
                    info!(slot = %slot, "no slot given, resolved next available");
                    slot
                }
            };
            DeliverySelection::Timeframe { slot }
        }
        DeliveryOption::Pickup => {
            let location = args
                .location
                .clone()
                .context("--location is required with --option pickup")?;
            DeliverySelection::Pickup { location }
        }
    };
    Ok(selection)
}

fn print_summary(quote: &CheckoutQuote, selection: &DeliverySelection) {
    let delivery_label = match selection {
        DeliverySelection::Express => "Delivery (express)".to_string(),
        DeliverySelection::Timeframe { slot } => format!("Delivery ({})", slot),
        DeliverySelection::Pickup { location } => format!("Pickup ({})", location),
    };

    println!("Subtotal:       {}", quote.order.subtotal);
    println!("{}: {}", delivery_label, quote.order.delivery_fee);
    if let Some(promo) = &quote.promo {
        println!("Discount ({}): -{}", promo.code, promo.amount);
    }
    if let Some(warning) = &quote.warning {
        println!("Note: {}", warning.message);
    }
    println!("Grand total:    {}", quote.order.grand_total);
}
