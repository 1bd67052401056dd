//! # Error Types
//!
//! Domain-specific error and warning types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  checkout-core (this file)                                             │
//! │  ├── PricingError     - Fatal to a single calculation attempt          │
//! │  ├── ValidationError  - Which field was malformed, and how             │
//! │  └── PricingWarning   - Priced, but the rules look misconfigured       │
//! │                                                                         │
//! │  checkout-cli                                                           │
//! │  └── ConfigError      - Environment could not produce PricingRules     │
//! │                                                                         │
//! │  Flow: ValidationError → PricingError::InvalidInput → caller           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, item index)
//! 3. Errors are enum variants, never String
//! 4. Warnings are data, not log lines: the caller decides how to surface them

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Pricing Error
// =============================================================================

/// Errors returned by the pricing calculator.
///
/// Validation runs before any arithmetic, so an error always means no
/// summary was produced. Callers must not display a priced order.
#[derive(Debug, Error)]
pub enum PricingError {
    /// A line item or the rule set is malformed.
    ///
    /// ## When This Occurs
    /// - Negative unit price or shipping cost
    /// - Quantity of zero or less
    /// - Discount percent outside `[0, 100]`
    /// - Amounts too large to represent in minor units
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),
}

impl PricingError {
    /// Returns the underlying validation failure.
    pub fn validation(&self) -> &ValidationError {
        match self {
            PricingError::InvalidInput(err) => err,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any pricing arithmetic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        value: i64,
    },

    /// Value must be positive.
    #[error("{field} must be positive, got {value}")]
    MustBePositive { field: String, value: i64 },

    /// Value must be zero or greater.
    #[error("{field} must not be negative, got {value}")]
    MustNotBeNegative { field: String, value: i64 },

    /// Rounding mode name is not one of the supported modes.
    #[error("unknown rounding mode '{value}', expected one of: floor, half_up, half_even, ceiling")]
    UnknownRoundingMode { value: String },

    /// Arithmetic on the input does not fit in minor currency units.
    #[error("{field} exceeds the representable amount")]
    Overflow { field: String },

    /// A line item failed validation.
    ///
    /// ## Example
    /// ```text
    /// items[2]: quantity must be positive, got 0
    /// ```
    #[error("items[{index}]: {source}")]
    LineItem {
        index: usize,
        #[source]
        source: Box<ValidationError>,
    },
}

impl ValidationError {
    /// Wraps this error with the position of the offending line item.
    pub fn at_item(self, index: usize) -> Self {
        ValidationError::LineItem {
            index,
            source: Box::new(self),
        }
    }

    /// Returns the name of the field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::OutOfRange { field, .. }
            | ValidationError::MustBePositive { field, .. }
            | ValidationError::MustNotBeNegative { field, .. }
            | ValidationError::Overflow { field } => field,
            ValidationError::UnknownRoundingMode { .. } => "rounding",
            ValidationError::LineItem { source, .. } => source.field(),
        }
    }
}

// =============================================================================
// Pricing Warning
// =============================================================================

/// Non-fatal conditions raised while pricing an order.
///
/// A warning never changes whether a summary is returned; it marks a summary
/// whose figures were guarded and which most likely reflects bad rules rather
/// than bad cart data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PricingWarning {
    /// The discount wiped out a non-empty order.
    ///
    /// `raw_total` is `subtotal - discount + shipping` before clamping. The
    /// reported total is `max(raw_total, 0)`.
    NegativeTotalGuard {
        subtotal: i64,
        discount: i64,
        shipping: i64,
        #[serde(rename = "rawTotal")]
        raw_total: i64,
    },
}

impl std::fmt::Display for PricingWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PricingWarning::NegativeTotalGuard {
                subtotal,
                discount,
                raw_total,
                ..
            } => write!(
                f,
                "discount {discount} consumes subtotal {subtotal} (raw total {raw_total}), total clamped to zero"
            ),
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
