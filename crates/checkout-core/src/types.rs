//! # Domain Types
//!
//! Value types flowing through the pricing calculator.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐   ┌─────────────────┐  │
//! │  │    LineItem     │   │    PricingRules      │   │  OrderSummary   │  │
//! │  │  ─────────────  │   │  ──────────────────  │   │  ─────────────  │  │
//! │  │  unit_price     │   │  free_shipping_      │   │  subtotal       │  │
//! │  │  quantity       │   │    threshold         │   │  shipping       │  │
//! │  └────────┬────────┘   │  standard_shipping_  │   │  discount       │  │
//! │           │            │    cost              │   │  total          │  │
//! │           │            │  discount_percent    │   └────────▲────────┘  │
//! │           │            │  rounding            │            │           │
//! │           │            └──────────┬───────────┘            │           │
//! │           └──────────────┬────────┘                        │           │
//! │                          ▼                                 │           │
//! │                 compute_order_summary() ───────────────────┘           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All three are plain `Copy`-able values: nothing here is shared or mutated
//! after construction.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{PricingWarning, ValidationResult};
use crate::money::{Money, RoundingMode};
use crate::validation;

// =============================================================================
// Line Item
// =============================================================================

/// One cart entry: a unit price and how many units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Price of one unit, in minor currency units.
    pub unit_price: Money,

    /// Number of units. Must be at least 1.
    pub quantity: i64,
}

impl LineItem {
    /// Creates a line item without validating it.
    ///
    /// The calculator validates every item it receives, so this is safe to
    /// use for cart snapshots that are priced right away.
    #[inline]
    pub const fn new(unit_price_minor: i64, quantity: i64) -> Self {
        LineItem {
            unit_price: Money::from_minor(unit_price_minor),
            quantity,
        }
    }

    /// Creates a line item, rejecting a negative price or non-positive quantity.
    ///
    /// ```rust
    /// use checkout_core::LineItem;
    ///
    /// assert!(LineItem::try_new(5000, 2).is_ok());
    /// assert!(LineItem::try_new(5000, 0).is_err());
    /// assert!(LineItem::try_new(-1, 1).is_err());
    /// ```
    pub fn try_new(unit_price_minor: i64, quantity: i64) -> ValidationResult<Self> {
        let item = LineItem::new(unit_price_minor, quantity);
        validation::validate_line_item(&item)?;
        Ok(item)
    }

    /// `unit_price × quantity`, or `None` if it does not fit in minor units.
    #[inline]
    pub fn line_total(&self) -> Option<Money> {
        self.unit_price.checked_mul_quantity(self.quantity)
    }
}

// =============================================================================
// Pricing Rules
// =============================================================================

/// Shipping and discount rules applied to one calculation.
///
/// Supplied by the caller on every call. The calculator keeps no copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingRules {
    /// Subtotal at or above which shipping is free (inclusive).
    pub free_shipping_threshold: Money,

    /// Shipping charged below the threshold.
    pub standard_shipping_cost: Money,

    /// Whole-number percentage taken off the subtotal, 0-100.
    pub discount_percent: i64,

    /// How a fractional discount unit is resolved.
    #[serde(default)]
    pub rounding: RoundingMode,
}

impl PricingRules {
    /// Creates a rule set with the default (floor) rounding.
    pub const fn new(
        free_shipping_threshold_minor: i64,
        standard_shipping_cost_minor: i64,
        discount_percent: i64,
    ) -> Self {
        PricingRules {
            free_shipping_threshold: Money::from_minor(free_shipping_threshold_minor),
            standard_shipping_cost: Money::from_minor(standard_shipping_cost_minor),
            discount_percent,
            rounding: RoundingMode::Floor,
        }
    }

    /// Returns a copy using `mode` for the discount.
    pub const fn with_rounding(mut self, mode: RoundingMode) -> Self {
        self.rounding = mode;
        self
    }

    /// Checks every field is in range.
    pub fn validate(&self) -> ValidationResult<()> {
        validation::validate_rules(self)
    }
}

// =============================================================================
// Order Summary
// =============================================================================

/// The priced order. All amounts are non-negative minor units.
///
/// ## Invariant
/// `total == max(subtotal - discount + shipping, 0)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub subtotal: Money,
    pub shipping: Money,
    pub discount: Money,
    pub total: Money,
}

impl OrderSummary {
    /// True when shipping was waived or configured as free.
    #[inline]
    pub fn is_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }

    /// Amount the customer saved through the discount.
    #[inline]
    pub fn savings(&self) -> Money {
        self.discount
    }
}

/// An order summary together with any warnings raised while pricing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricedOrder {
    pub summary: OrderSummary,
    pub warnings: Vec<PricingWarning>,
}

impl PricedOrder {
    #[inline]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
