//! # quote
//!
//! Prices a cart snapshot against the configured pricing rules.
//!
//! ## Usage
//! ```bash
//! # Price a cart file with default rules
//! cargo run -p checkout-cli --bin quote -- cart.json
//!
//! # Read the cart from stdin, 10% campaign, bankers rounding
//! CHECKOUT_DISCOUNT_PERCENT=10 CHECKOUT_ROUNDING=half_even \
//!     cargo run -p checkout-cli --bin quote -- - < cart.json
//! ```
//!
//! ## Cart Format
//! ```json
//! [
//!   { "unitPrice": 5000, "quantity": 2 },
//!   { "unitPrice": 3000, "quantity": 3 }
//! ]
//! ```
//!
//! The priced summary is written to stdout as JSON. Logs go to stderr.

mod config;

use std::env;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::process::ExitCode;

use anyhow::{Context, Result};
use checkout_core::{price_order, LineItem, PricedOrder};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::PricingConfig;

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Quote { cart_path: String },
}

/// Command line could not be understood.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
enum UsageError {
    #[error("missing cart path")]
    MissingCart,

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),
}

fn main() -> ExitCode {
    init_tracing();

    let command = match parse_args(env::args().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}");
            print_usage();
            return ExitCode::from(2);
        }
    };

    let cart_path = match command {
        Command::Help => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Command::Quote { cart_path } => cart_path,
    };

    match run(&cart_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Accepts exactly one cart path (`-` for stdin), or `-h`/`--help`.
fn parse_args<I>(args: I) -> Result<Command, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let mut cart_path: Option<String> = None;

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-" => {}
            option if option.starts_with('-') => {
                return Err(UsageError::UnknownOption(option.to_string()));
            }
            _ => {}
        }

        if cart_path.is_some() {
            return Err(UsageError::UnexpectedArgument(arg));
        }
        cart_path = Some(arg);
    }

    cart_path
        .map(|cart_path| Command::Quote { cart_path })
        .ok_or(UsageError::MissingCart)
}

fn run(cart_path: &str) -> Result<()> {
    let config = PricingConfig::load().context("loading pricing rules")?;
    info!(
        threshold = config.free_shipping_threshold,
        shipping = config.standard_shipping_cost,
        discount_percent = config.discount_percent,
        rounding = %config.rounding,
        "Pricing rules loaded"
    );

    let parsed = if cart_path == "-" {
        read_cart(io::stdin().lock())
    } else {
        let file = File::open(cart_path).with_context(|| format!("opening {cart_path}"))?;
        read_cart(BufReader::new(file))
    };
    let items = parsed.with_context(|| format!("reading cart from {cart_path}"))?;

    let priced = quote(&items, &config)?;
    println!("{}", serde_json::to_string_pretty(&priced.summary)?);

    Ok(())
}

/// Parses a cart snapshot: a JSON array of line items.
fn read_cart<R: Read>(reader: R) -> Result<Vec<LineItem>> {
    let items: Vec<LineItem> = serde_json::from_reader(reader)?;
    Ok(items)
}

/// Prices `items`, logging each warning.
fn quote(items: &[LineItem], config: &PricingConfig) -> Result<PricedOrder> {
    let priced = price_order(items, &config.rules()).context("pricing cart")?;

    for warning in &priced.warnings {
        warn!(%warning, "Check the discount campaign configuration");
    }
    info!(
        items = items.len(),
        total = %priced.summary.total,
        "Cart priced"
    );

    Ok(priced)
}

fn print_usage() {
    println!("Checkout quote");
    println!();
    println!("Usage: quote <CART.json | ->");
    println!();
    println!("Environment:");
    println!(
        "  {:<36}free shipping threshold, minor units (default: 50000)",
        config::FREE_SHIPPING_THRESHOLD_VAR
    );
    println!(
        "  {:<36}shipping below threshold, minor units (default: 2500)",
        config::STANDARD_SHIPPING_COST_VAR
    );
    println!(
        "  {:<36}discount percentage 0-100 (default: 0)",
        config::DISCOUNT_PERCENT_VAR
    );
    println!(
        "  {:<36}floor | half_up | half_even | ceiling (default: floor)",
        config::ROUNDING_VAR
    );
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=checkout_core=trace` - Trace the pricing kernel only
/// - Default: INFO, with debug for the pricing kernel
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,checkout_core=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_parse_args_single_cart() {
        assert_eq!(
            parse_args(args(&["cart.json"])),
            Ok(Command::Quote {
                cart_path: "cart.json".to_string()
            })
        );
        assert_eq!(
            parse_args(args(&["-"])),
            Ok(Command::Quote {
                cart_path: "-".to_string()
            })
        );
    }

    #[test]
    fn test_parse_args_help_wins() {
        assert_eq!(parse_args(args(&["cart.json", "--help"])), Ok(Command::Help));
        assert_eq!(parse_args(args(&["-h"])), Ok(Command::Help));
    }

    #[test]
    fn test_parse_args_rejects_extra_positionals() {
        assert_eq!(
            parse_args(args(&["a.json", "b.json"])),
            Err(UsageError::UnexpectedArgument("b.json".to_string()))
        );
    }

    #[test]
    fn test_parse_args_rejects_unknown_options() {
        assert_eq!(
            parse_args(args(&["--foo", "cart.json"])),
            Err(UsageError::UnknownOption("--foo".to_string()))
        );
    }

    #[test]
    fn test_parse_args_requires_cart() {
        assert_eq!(parse_args(args(&[])), Err(UsageError::MissingCart));
    }

    #[test]
    fn test_read_cart() {
        let json = br#"[{"unitPrice": 5000, "quantity": 2}, {"unitPrice": 3000, "quantity": 3}]"#;
        let items = read_cart(&json[..]).unwrap();
        assert_eq!(items, vec![LineItem::new(5000, 2), LineItem::new(3000, 3)]);
    }

    #[test]
    fn test_read_cart_rejects_non_array() {
        assert!(read_cart(&br#"{"unitPrice": 1}"#[..]).is_err());
    }

    #[test]
    fn test_quote_with_default_config() {
        let items = [LineItem::new(5000, 2), LineItem::new(3000, 3)];
        let priced = quote(&items, &PricingConfig::default()).unwrap();

        assert_eq!(priced.summary.subtotal.minor(), 19000);
        assert_eq!(priced.summary.shipping.minor(), 2500);
        assert_eq!(priced.summary.total.minor(), 21500);
    }

    #[test]
    fn test_quote_surfaces_invalid_cart() {
        let items = [LineItem::new(5000, 0)];
        let err = quote(&items, &PricingConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("quantity must be positive"));
    }
}
