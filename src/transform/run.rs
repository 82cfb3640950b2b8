//! Orchestrator
//!
//! The cart-transform entry point: discovers bundles in the cart, evaluates
//! each one independently, and collects the resulting operations.

use crate::bundle::models::DiscountMethod;
use crate::bundle::reader::collect_bundle_configurations;
use crate::cart::models::CartSnapshot;

use super::matcher::match_bundle;
use super::operations::{build_operation, FunctionResult};
use super::pricing::apply_discount;
use super::rules::select_discount_rule;

/// Evaluates every bundle represented in the cart and returns the merge /
/// update operations the host should apply.
///
/// Bundles are processed in order of first appearance and never share state,
/// so the result is deterministic for a given snapshot. A bundle is skipped
/// outright when it carries no pricing, its discount is disabled, or its
/// method is not priced here (free shipping belongs to the delivery
/// pipeline; unrecognized methods are ignored). A bundle whose condition is
/// not met simply contributes no operation; an empty result is a normal
/// outcome, not an error.
pub fn cart_transform_run(cart: &CartSnapshot) -> FunctionResult {
    let mut operations = Vec::new();

    for bundle in collect_bundle_configurations(cart) {
        let Some(pricing) = &bundle.pricing else {
            // No pricing means no discount and no merge; nothing to do.
            continue;
        };
        if !pricing.enable_discount {
            continue;
        }
        match pricing.discount_method {
            DiscountMethod::FreeShipping | DiscountMethod::Unsupported => continue,
            DiscountMethod::FixedAmountOff | DiscountMethod::PercentageOff => {}
        }

        let matched = match_bundle(cart, &bundle);
        if !matched.meets_condition {
            continue;
        }

        // Condition-met and tier-qualified are independent: with no
        // qualifying tier the bundle still merges, at the original price.
        let rule = select_discount_rule(&pricing.rules, matched.total_quantity);
        let outcome = apply_discount(
            matched.total_original_cost,
            pricing.discount_method,
            rule,
        );

        if let Some(operation) = build_operation(&matched, &outcome) {
            operations.push(operation);
        }
    }

    FunctionResult { operations }
}
