//! Cart Matcher and Condition Evaluator
//!
//! Finds the cart lines belonging to one bundle, aggregates their quantity
//! and pre-discount cost, and decides whether the bundle's minimum-threshold
//! condition is met.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::bundle::models::BundleConfiguration;
use crate::cart::models::{CartLine, CartSnapshot, Merchandise};

/// Threshold applied when a bundle has no discount rules at all.
///
/// Inherited fallback from the original configuration format, not documented
/// business policy; see DESIGN.md before changing it.
pub const DEFAULT_MINIMUM_QUANTITY: u32 = 2;

/// Outcome of matching one bundle against the cart.
///
/// Transient: recomputed per bundle on every evaluation, never persisted.
#[derive(Debug)]
pub struct MatchResult<'a> {
    /// The bundle that was matched
    pub bundle: &'a BundleConfiguration,

    /// Cart lines whose product belongs to the bundle, in cart order
    pub matching_lines: Vec<&'a CartLine>,

    /// Sum of matching line quantities
    pub total_quantity: u32,

    /// Whether the minimum-threshold condition is satisfied
    pub meets_condition: bool,

    /// Sum of matching line totals, before any discount
    pub total_original_cost: Decimal,
}

/// Matches a single bundle against the cart.
///
/// A line counts when its merchandise is a product variant whose product id
/// is in the bundle's member set. Carts are single-currency; a mixed-currency
/// aggregate indicates a broken cart model upstream and trips an assertion
/// in debug builds.
pub fn match_bundle<'a>(
    cart: &'a CartSnapshot,
    bundle: &'a BundleConfiguration,
) -> MatchResult<'a> {
    let members: HashSet<&str> = bundle
        .all_bundle_product_ids
        .iter()
        .map(String::as_str)
        .collect();

    let mut matching_lines: Vec<&CartLine> = Vec::new();
    let mut total_quantity: u32 = 0;
    let mut total_original_cost = Decimal::ZERO;

    for line in &cart.lines {
        let Merchandise::ProductVariant(variant) = &line.merchandise else {
            continue;
        };
        if !members.contains(variant.product.id.as_str()) {
            continue;
        }

        debug_assert!(line.quantity > 0, "cart lines carry positive quantities");
        if let Some(first) = matching_lines.first() {
            debug_assert_eq!(
                first.cost.total_amount.currency_code, line.cost.total_amount.currency_code,
                "matched lines must share one currency"
            );
        }

        total_quantity += line.quantity;
        total_original_cost += line.cost.total_amount.amount;
        matching_lines.push(line);
    }

    // An empty match never meets the condition, even against a zero threshold.
    let meets_condition = total_quantity > 0 && total_quantity >= minimum_threshold(bundle);

    MatchResult {
        bundle,
        matching_lines,
        total_quantity,
        meets_condition,
        total_original_cost,
    }
}

/// The quantity the matched lines must reach before any discount logic runs.
///
/// Taken from the first rule's `minimum_quantity`; thresholds of later tiers
/// only matter during rule selection. Bundles without rules fall back to
/// [`DEFAULT_MINIMUM_QUANTITY`].
fn minimum_threshold(bundle: &BundleConfiguration) -> u32 {
    bundle
        .pricing
        .as_ref()
        .and_then(|pricing| pricing.rules.first())
        .map(|rule| rule.minimum_quantity)
        .unwrap_or(DEFAULT_MINIMUM_QUANTITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::models::{BundlePricing, DiscountMethod, DiscountOn, DiscountRule};
    use crate::cart::models::{LineCost, Money, Product, ProductVariant};
    use rust_decimal_macros::dec;

    fn line(id: &str, product_id: &str, quantity: u32, total: Decimal) -> CartLine {
        CartLine {
            id: id.to_string(),
            quantity,
            merchandise: Merchandise::ProductVariant(ProductVariant {
                id: format!("{}-v1", product_id),
                product: Product {
                    id: product_id.to_string(),
                    image: None,
                    bundle_config: None,
                },
            }),
            cost: LineCost {
                amount_per_quantity: Money {
                    amount: total / Decimal::from(quantity),
                    currency_code: "USD".to_string(),
                },
                total_amount: Money {
                    amount: total,
                    currency_code: "USD".to_string(),
                },
            },
        }
    }

    fn bundle(members: &[&str], first_rule_minimum: Option<u32>) -> BundleConfiguration {
        BundleConfiguration {
            id: "B1".to_string(),
            name: "Test".to_string(),
            all_bundle_product_ids: members.iter().map(|m| m.to_string()).collect(),
            pricing: Some(BundlePricing {
                enable_discount: true,
                discount_method: DiscountMethod::FixedAmountOff,
                rules: first_rule_minimum
                    .map(|minimum_quantity| {
                        vec![DiscountRule {
                            discount_on: DiscountOn::Quantity,
                            minimum_quantity,
                            fixed_amount_off: dec!(5.00),
                            percentage_off: Decimal::ZERO,
                        }]
                    })
                    .unwrap_or_default(),
            }),
        }
    }

    #[test]
    fn aggregates_only_member_lines() {
        let cart = CartSnapshot {
            lines: vec![
                line("l1", "P1", 2, dec!(20.00)),
                line("l2", "P9", 1, dec!(99.00)),
                line("l3", "P2", 1, dec!(15.00)),
            ],
        };
        let bundle = bundle(&["P1", "P2"], Some(2));

        let matched = match_bundle(&cart, &bundle);
        assert_eq!(matched.total_quantity, 3);
        assert_eq!(matched.total_original_cost, dec!(35.00));
        assert!(matched.meets_condition);
        let ids: Vec<&str> = matched.matching_lines.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["l1", "l3"]);
    }

    #[test]
    fn empty_rule_list_falls_back_to_default_threshold() {
        let cart = CartSnapshot {
            lines: vec![line("l1", "P1", 1, dec!(10.00))],
        };
        let no_rules = bundle(&["P1"], None);
        assert!(!match_bundle(&cart, &no_rules).meets_condition);

        let cart = CartSnapshot {
            lines: vec![line("l1", "P1", DEFAULT_MINIMUM_QUANTITY, dec!(20.00))],
        };
        assert!(match_bundle(&cart, &no_rules).meets_condition);
    }

    #[test]
    fn zero_matches_never_meet_the_condition() {
        let cart = CartSnapshot {
            lines: vec![line("l1", "P9", 5, dec!(50.00))],
        };
        let bundle = bundle(&["P1"], Some(0));
        let matched = match_bundle(&cart, &bundle);
        assert!(!matched.meets_condition);
        assert!(matched.matching_lines.is_empty());
    }
}
