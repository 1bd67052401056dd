//! # Pricing Calculator
//!
//! Turns a cart snapshot and a rule set into an [`OrderSummary`].
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  items ──► validate ──► subtotal = Σ unit_price × quantity             │
//! │  rules ──► validate          │                                          │
//! │                              ├──► shipping = 0 if subtotal >= threshold │
//! │                              │              else standard cost          │
//! │                              │                                          │
//! │                              ├──► discount = subtotal × pct / 100       │
//! │                              │              (rounded by rules.rounding) │
//! │                              ▼                                          │
//! │               total = max(subtotal - discount + shipping, 0)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is pure: same input, same output, no shared state.
//! Calling from many threads at once needs no coordination.

use tracing::{debug, warn};

use crate::error::{PricingResult, PricingWarning, ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::{LineItem, OrderSummary, PricedOrder, PricingRules};
use crate::validation::{validate_line_items, validate_rules};

/// Prices an order.
///
/// Warnings are logged and then dropped. Use [`price_order`] to inspect them.
///
/// ## Example
/// ```rust
/// use checkout_core::{compute_order_summary, LineItem, PricingRules};
///
/// let items = [LineItem::new(5000, 2), LineItem::new(3000, 3)];
/// let rules = PricingRules::new(50000, 2500, 10);
///
/// let summary = compute_order_summary(&items, &rules).unwrap();
/// assert_eq!(summary.subtotal.minor(), 19000);
/// assert_eq!(summary.shipping.minor(), 2500);
/// assert_eq!(summary.discount.minor(), 1900);
/// assert_eq!(summary.total.minor(), 19600);
/// ```
///
/// ## Errors
/// [`PricingError::InvalidInput`](crate::PricingError::InvalidInput) for a
/// negative price, a quantity below 1, a discount outside `[0, 100]`, a
/// negative threshold or shipping cost, or amounts that overflow.
pub fn compute_order_summary(
    items: &[LineItem],
    rules: &PricingRules,
) -> PricingResult<OrderSummary> {
    let priced = price_order(items, rules)?;
    for warning in &priced.warnings {
        warn!(%warning, "order priced with guarded total");
    }
    Ok(priced.summary)
}

/// Prices an order and returns the warnings raised alongside the summary.
pub fn price_order(items: &[LineItem], rules: &PricingRules) -> PricingResult<PricedOrder> {
    validate_rules(rules)?;
    validate_line_items(items)?;

    let subtotal = subtotal(items)?;
    let shipping = shipping_for(subtotal, rules);
    let discount = discount_for(subtotal, rules)?;
    let (total, guard) = guarded_total(subtotal, discount, shipping)?;

    let summary = OrderSummary {
        subtotal,
        shipping,
        discount,
        total,
    };

    debug!(
        items = items.len(),
        subtotal = subtotal.minor(),
        shipping = shipping.minor(),
        discount = discount.minor(),
        total = total.minor(),
        rounding = %rules.rounding,
        "order priced"
    );

    Ok(PricedOrder {
        summary,
        warnings: guard.into_iter().collect(),
    })
}

/// Sum of `unit_price × quantity` over the items.
///
/// Expects validated items; the only failure is overflow.
pub fn subtotal(items: &[LineItem]) -> ValidationResult<Money> {
    items.iter().enumerate().try_fold(Money::ZERO, |acc, (index, item)| {
        let line = item.line_total().ok_or_else(|| {
            ValidationError::Overflow {
                field: "line_total".to_string(),
            }
            .at_item(index)
        })?;
        acc.checked_add(line).ok_or_else(|| ValidationError::Overflow {
            field: "subtotal".to_string(),
        })
    })
}

/// Shipping owed on `subtotal`. The threshold is inclusive.
pub fn shipping_for(subtotal: Money, rules: &PricingRules) -> Money {
    if subtotal >= rules.free_shipping_threshold {
        Money::ZERO
    } else {
        rules.standard_shipping_cost
    }
}

/// Discount owed on `subtotal`, rounded with the rule set's mode.
pub fn discount_for(subtotal: Money, rules: &PricingRules) -> ValidationResult<Money> {
    subtotal
        .percentage(rules.discount_percent, rules.rounding)
        .ok_or_else(|| ValidationError::Overflow {
            field: "discount".to_string(),
        })
}

/// `subtotal - discount + shipping`, clamped at zero.
///
/// Returns a [`PricingWarning::NegativeTotalGuard`] when a non-empty order
/// ends up at or below zero.
fn guarded_total(
    subtotal: Money,
    discount: Money,
    shipping: Money,
) -> ValidationResult<(Money, Option<PricingWarning>)> {
    let raw = subtotal.minor() as i128 - discount.minor() as i128 + shipping.minor() as i128;
    let raw_total = i64::try_from(raw).map_err(|_| ValidationError::Overflow {
        field: "total".to_string(),
    })?;

    let guard = (subtotal.minor() > 0 && raw_total <= 0).then(|| {
        PricingWarning::NegativeTotalGuard {
            subtotal: subtotal.minor(),
            discount: discount.minor(),
            shipping: shipping.minor(),
            raw_total,
        }
    });

    Ok((Money::from_minor(raw_total).clamp_non_negative(), guard))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PricingError;
    use crate::money::RoundingMode;

    fn rules() -> PricingRules {
        PricingRules::new(50000, 2500, 0)
    }

    #[test]
    fn test_subtotal_is_literal_sum() {
        let items = [LineItem::new(5000, 2), LineItem::new(3000, 3)];
        assert_eq!(subtotal(&items).unwrap().minor(), 19000);
    }

    #[test]
    fn test_subtotal_empty_cart() {
        assert_eq!(subtotal(&[]).unwrap(), Money::ZERO);
    }

    #[test]
    fn test_shipping_threshold_is_inclusive() {
        assert_eq!(shipping_for(Money::from_minor(50000), &rules()), Money::ZERO);
        assert_eq!(shipping_for(Money::from_minor(49999), &rules()).minor(), 2500);
        assert_eq!(shipping_for(Money::from_minor(50001), &rules()), Money::ZERO);
    }

    #[test]
    fn test_discount_floor() {
        let rules = PricingRules::new(50000, 2500, 10);
        assert_eq!(discount_for(Money::from_minor(50000), &rules).unwrap().minor(), 5000);
        // 10% of 19_999 = 1999.9
        assert_eq!(discount_for(Money::from_minor(19_999), &rules).unwrap().minor(), 1999);
    }

    #[test]
    fn test_discount_rounding_is_configurable() {
        let base = PricingRules::new(50000, 2500, 15);
        let subtotal = Money::from_minor(999); // 149.85

        let expected = [
            (RoundingMode::Floor, 149),
            (RoundingMode::HalfUp, 150),
            (RoundingMode::HalfEven, 150),
            (RoundingMode::Ceiling, 150),
        ];
        for (mode, minor) in expected {
            let rules = base.with_rounding(mode);
            assert_eq!(discount_for(subtotal, &rules).unwrap().minor(), minor, "{mode}");
        }
    }

    #[test]
    fn test_total_composition() {
        let (total, guard) = guarded_total(
            Money::from_minor(45000),
            Money::from_minor(5000),
            Money::from_minor(2500),
        )
        .unwrap();
        assert_eq!(total.minor(), 42500);
        assert!(guard.is_none());
    }

    #[test]
    fn test_guard_clamps_negative_total() {
        let (total, guard) = guarded_total(
            Money::from_minor(1000),
            Money::from_minor(1500),
            Money::ZERO,
        )
        .unwrap();
        assert_eq!(total, Money::ZERO);
        assert_eq!(
            guard,
            Some(PricingWarning::NegativeTotalGuard {
                subtotal: 1000,
                discount: 1500,
                shipping: 0,
                raw_total: -500,
            })
        );
    }

    #[test]
    fn test_guard_silent_for_empty_cart() {
        let (total, guard) = guarded_total(Money::ZERO, Money::ZERO, Money::ZERO).unwrap();
        assert_eq!(total, Money::ZERO);
        assert!(guard.is_none());
    }

    #[test]
    fn test_full_discount_without_shipping_warns() {
        let items = [LineItem::new(10000, 1)];
        let rules = PricingRules::new(50000, 0, 100);

        let priced = price_order(&items, &rules).unwrap();
        assert_eq!(priced.summary.discount.minor(), 10000);
        assert_eq!(priced.summary.total, Money::ZERO);
        assert!(priced.has_warnings());
    }

    #[test]
    fn test_invalid_rules_checked_before_items() {
        let items = [LineItem::new(-1, 1)];
        let rules = PricingRules::new(50000, 2500, 101);

        let err = compute_order_summary(&items, &rules).unwrap_err();
        let PricingError::InvalidInput(validation) = err;
        assert_eq!(validation.field(), "discount_percent");
    }

    #[test]
    fn test_overflowing_cart_is_invalid_input() {
        let items = [LineItem::new(i64::MAX, 1), LineItem::new(1, 1)];
        let err = compute_order_summary(&items, &rules()).unwrap_err();
        assert_eq!(err.validation().field(), "subtotal");

        let items = [LineItem::new(i64::MAX / 2, 3)];
        let err = compute_order_summary(&items, &rules()).unwrap_err();
        assert!(matches!(
            err.validation(),
            ValidationError::LineItem { index: 0, .. }
        ));
    }

    #[test]
    fn test_total_overflow_is_invalid_input() {
        // subtotal fits, adding shipping does not
        let items = [LineItem::new(i64::MAX - 10, 1)];
        let rules = PricingRules::new(i64::MAX, 100, 0);
        let err = compute_order_summary(&items, &rules).unwrap_err();
        assert_eq!(err.validation().field(), "total");
    }
}
