//! # Validation Module
//!
//! Input checks run before any pricing arithmetic.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Order                                   │
//! │                                                                         │
//! │  1. validate_rules()        discount_percent, threshold, shipping     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  2. validate_line_item()    for each item, index attached on failure   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  3. arithmetic              overflow reported as InvalidInput too      │
//! │                                                                         │
//! │  First failure wins. Nothing is ever silently corrected.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::validation::{validate_quantity, validate_discount_percent};
//!
//! assert!(validate_quantity(5).is_ok());
//! assert!(validate_discount_percent(101).is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::{LineItem, PricingRules};

/// Largest accepted discount, in percent.
pub const MAX_DISCOUNT_PERCENT: i64 = 100;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    validate_non_negative_amount("unit_price", price)
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
            value: qty,
        });
    }

    Ok(())
}

/// Validates a discount percentage.
///
/// ## Rules
/// - Must be between 0 and 100 inclusive
pub fn validate_discount_percent(percent: i64) -> ValidationResult<()> {
    if !(0..=MAX_DISCOUNT_PERCENT).contains(&percent) {
        return Err(ValidationError::OutOfRange {
            field: "discount_percent".to_string(),
            min: 0,
            max: MAX_DISCOUNT_PERCENT,
            value: percent,
        });
    }

    Ok(())
}

/// Validates that a monetary field is zero or greater.
pub fn validate_non_negative_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: field.to_string(),
            value: amount.minor(),
        });
    }

    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates one line item.
pub fn validate_line_item(item: &LineItem) -> ValidationResult<()> {
    validate_unit_price(item.unit_price)?;
    validate_quantity(item.quantity)?;
    Ok(())
}

/// Validates every line item, attaching the index of the first bad one.
pub fn validate_line_items(items: &[LineItem]) -> ValidationResult<()> {
    items
        .iter()
        .enumerate()
        .try_for_each(|(index, item)| validate_line_item(item).map_err(|err| err.at_item(index)))
}

/// Validates a rule set.
///
/// ## Rules
/// - `discount_percent` in `[0, 100]`
/// - `free_shipping_threshold >= 0`
/// - `standard_shipping_cost >= 0`
pub fn validate_rules(rules: &PricingRules) -> ValidationResult<()> {
    validate_discount_percent(rules.discount_percent)?;
    validate_non_negative_amount("free_shipping_threshold", rules.free_shipping_threshold)?;
    validate_non_negative_amount("standard_shipping_cost", rules.standard_shipping_cost)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
