//! Discount Rule Selector
//!
//! Picks the single tier a matched bundle currently qualifies for.

use crate::bundle::models::DiscountRule;

/// Selects the best tier the aggregate quantity qualifies for.
///
/// Among rules with `minimum_quantity <= total_quantity`, the one with the
/// largest threshold wins, so the customer always gets the deepest tier they
/// reached. The strict comparison makes ties resolve to the earliest rule in
/// list order, and works on unsorted rule lists without sorting them.
///
/// `None` means no tier applies; the caller then charges the original price
/// even when the bundle's basic condition was met.
pub fn select_discount_rule(rules: &[DiscountRule], total_quantity: u32) -> Option<&DiscountRule> {
    let mut best: Option<&DiscountRule> = None;
    for rule in rules {
        if total_quantity < rule.minimum_quantity {
            continue;
        }
        match best {
            Some(current) if rule.minimum_quantity > current.minimum_quantity => {
                best = Some(rule);
            }
            None => best = Some(rule),
            _ => {}
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::models::DiscountOn;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn rule(minimum_quantity: u32, fixed_amount_off: Decimal) -> DiscountRule {
        DiscountRule {
            discount_on: DiscountOn::Quantity,
            minimum_quantity,
            fixed_amount_off,
            percentage_off: Decimal::ZERO,
        }
    }

    #[test]
    fn picks_the_deepest_qualifying_tier() {
        let rules = vec![rule(2, dec!(5.00)), rule(4, dec!(12.00))];
        let selected = select_discount_rule(&rules, 5).unwrap();
        assert_eq!(selected.minimum_quantity, 4);
    }

    #[test]
    fn handles_unsorted_rule_lists() {
        let rules = vec![rule(6, dec!(20.00)), rule(2, dec!(5.00)), rule(4, dec!(12.00))];
        let selected = select_discount_rule(&rules, 5).unwrap();
        assert_eq!(selected.minimum_quantity, 4);
    }

    #[test]
    fn ties_resolve_to_the_earliest_rule() {
        let rules = vec![rule(2, dec!(5.00)), rule(2, dec!(7.00))];
        let selected = select_discount_rule(&rules, 3).unwrap();
        assert_eq!(selected.fixed_amount_off, dec!(5.00));
    }

    #[test]
    fn returns_none_when_nothing_qualifies() {
        let rules = vec![rule(4, dec!(12.00))];
        assert!(select_discount_rule(&rules, 3).is_none());
        assert!(select_discount_rule(&[], 3).is_none());
    }
}
