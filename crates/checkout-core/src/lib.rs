//! # checkout-core: Pure Pricing Kernel
//!
//! Computes the priced summary of a checkout cart: subtotal, conditional
//! shipping, percentage discount and final total. No I/O, no shared state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Checkout Flow                                   │
//! │                                                                         │
//! │   Cart / Order store           Rules / config source                    │
//! │   (LineItem snapshot)          (PricingRules, refreshed independently)  │
//! │          │                              │                               │
//! │          └──────────────┬───────────────┘                               │
//! │                         ▼                                               │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            ★ checkout-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │ LineItem  │  │   Money   │  │ compute_  │  │  ranges   │  │   │
//! │  │   │  Rules    │  │ Rounding  │  │  order_   │  │  checks   │  │   │
//! │  │   │  Summary  │  │   Mode    │  │  summary  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                ▼                                        │
//! │                   OrderSummary (display / persist)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - LineItem, PricingRules, OrderSummary
//! - [`money`] - Money type with integer arithmetic and rounding modes
//! - [`pricing`] - The calculator itself
//! - [`validation`] - Input range checks
//! - [`error`] - Error and warning types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, safe from any thread
//! 2. **Integer Money**: all amounts are minor units (i64), never floats
//! 3. **Explicit Errors**: malformed input is rejected, never corrected
//! 4. **Explicit Rounding**: the discount's rounding mode is part of the rules
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::{compute_order_summary, LineItem, PricingRules};
//!
//! let items = [LineItem::new(25000, 1), LineItem::new(10000, 2)];
//! let rules = PricingRules::new(50000, 2500, 10);
//!
//! let summary = compute_order_summary(&items, &rules).unwrap();
//!
//! // 45000 subtotal, below the 50000 threshold
//! assert_eq!(summary.subtotal.minor(), 45000);
//! assert_eq!(summary.shipping.minor(), 2500);
//! assert_eq!(summary.discount.minor(), 4500);
//! assert_eq!(summary.total.minor(), 43000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{PricingError, PricingResult, PricingWarning, ValidationError, ValidationResult};
pub use money::{Money, RoundingMode};
pub use pricing::{compute_order_summary, price_order};
pub use types::*;
