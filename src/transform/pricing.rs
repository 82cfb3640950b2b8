//! Price Calculator
//!
//! Applies a selected discount rule to a bundle's aggregated original cost
//! and derives the merged line's per-unit price.

use rust_decimal::Decimal;

use crate::bundle::models::{DiscountMethod, DiscountRule};
use crate::cart::helpers::round_to_minor_units;

/// Result of applying (or not applying) a discount to a bundle total
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountOutcome {
    /// The bundle total after discounting, never negative
    pub discounted_total: Decimal,

    /// `original - discounted`; zero when no discount applied
    pub savings: Decimal,
}

/// Applies the selected rule to the aggregated original cost.
///
/// With no applicable rule, or a method this engine does not price, the
/// original cost passes through unchanged. Both methods clamp at zero: a
/// fixed amount larger than the total, or a percentage outside the
/// configured 0..=100 contract, can never produce a negative price.
pub fn apply_discount(
    original_cost: Decimal,
    method: DiscountMethod,
    rule: Option<&DiscountRule>,
) -> DiscountOutcome {
    let discounted_total = match (method, rule) {
        (DiscountMethod::FixedAmountOff, Some(rule)) => {
            (original_cost - rule.fixed_amount_off).max(Decimal::ZERO)
        }
        (DiscountMethod::PercentageOff, Some(rule)) => {
            let factor = Decimal::ONE - rule.percentage_off / Decimal::ONE_HUNDRED;
            (original_cost * factor).max(Decimal::ZERO)
        }
        _ => original_cost,
    };

    DiscountOutcome {
        discounted_total,
        savings: original_cost - discounted_total,
    }
}

/// Derives the merged line's per-unit price, rounded half-up to the
/// currency's minor units.
///
/// Callers only reach this after the bundle condition held, which implies a
/// non-zero quantity.
pub fn per_unit_price(discounted_total: Decimal, total_quantity: u32) -> Decimal {
    debug_assert!(total_quantity > 0, "per-unit price needs a non-zero quantity");
    round_to_minor_units(discounted_total / Decimal::from(total_quantity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::models::DiscountOn;
    use rust_decimal_macros::dec;

    fn rule(fixed_amount_off: Decimal, percentage_off: Decimal) -> DiscountRule {
        DiscountRule {
            discount_on: DiscountOn::Quantity,
            minimum_quantity: 2,
            fixed_amount_off,
            percentage_off,
        }
    }

    #[test]
    fn fixed_amount_subtracts_from_the_total() {
        let rule = rule(dec!(5.00), Decimal::ZERO);
        let outcome = apply_discount(dec!(25.00), DiscountMethod::FixedAmountOff, Some(&rule));
        assert_eq!(outcome.discounted_total, dec!(20.00));
        assert_eq!(outcome.savings, dec!(5.00));
    }

    #[test]
    fn fixed_amount_clamps_at_zero() {
        let rule = rule(dec!(20.00), Decimal::ZERO);
        let outcome = apply_discount(dec!(8.00), DiscountMethod::FixedAmountOff, Some(&rule));
        assert_eq!(outcome.discounted_total, dec!(0.00));
        assert_eq!(outcome.savings, dec!(8.00));
    }

    #[test]
    fn percentage_scales_the_total() {
        let rule = rule(Decimal::ZERO, dec!(20));
        let outcome = apply_discount(dec!(30.00), DiscountMethod::PercentageOff, Some(&rule));
        assert_eq!(outcome.discounted_total, dec!(24.00));
        assert_eq!(outcome.savings, dec!(6.00));
    }

    #[test]
    fn out_of_contract_percentage_still_clamps() {
        let rule = rule(Decimal::ZERO, dec!(150));
        let outcome = apply_discount(dec!(30.00), DiscountMethod::PercentageOff, Some(&rule));
        assert_eq!(outcome.discounted_total, Decimal::ZERO);
    }

    #[test]
    fn no_rule_passes_the_cost_through() {
        let outcome = apply_discount(dec!(30.00), DiscountMethod::FixedAmountOff, None);
        assert_eq!(outcome.discounted_total, dec!(30.00));
        assert_eq!(outcome.savings, Decimal::ZERO);
    }

    #[test]
    fn per_unit_price_rounds_half_up() {
        assert_eq!(per_unit_price(dec!(25.01), 2), dec!(12.51));
        assert_eq!(per_unit_price(dec!(20.00), 2), dec!(10.00));
    }
}
