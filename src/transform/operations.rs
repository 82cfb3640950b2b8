//! Operation Output Models and Builder
//!
//! The instructions the engine hands back to the host: merge the matched
//! lines into one, and optionally reprice the merged line. Output field
//! names are part of the host's JSON contract.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::cart::helpers::format_money;
use crate::cart::models::Merchandise;

use super::matcher::MatchResult;
use super::pricing::{per_unit_price, DiscountOutcome};

// =============================================================================
// Output Models
// =============================================================================

/// The engine's complete answer for one cart evaluation
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FunctionResult {
    /// Operations for the host to apply, possibly empty
    pub operations: Vec<CartOperation>,
}

/// One instruction for the host's cart-mutation mechanism
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartOperation {
    /// Merge the matched lines into a single presentation line
    pub merge: MergeOperation,

    /// Reprice the merged line; only present when there are savings, since a
    /// no-op price update would trigger pointless downstream recomputes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update: Option<UpdateOperation>,
}

/// Absorb source lines into a parent line
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MergeOperation {
    /// The line the others are merged into
    pub parent_cart_line_id: String,

    /// Lines absorbed into the parent, in cart order
    pub cart_line_ids: Vec<String>,

    /// Customer-facing title for the merged line
    pub title: String,

    /// Representative image for the merged line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageInput>,
}

/// Reprice (and retitle) a line
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOperation {
    /// The line to update; always the merge parent
    pub cart_line_id: String,

    /// Customer-facing title, matching the merge title
    pub title: String,

    /// Representative image, matching the merge image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageInput>,

    /// The new cost of the line
    pub cost: CostUpdate,
}

/// New cost for an updated line
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CostUpdate {
    /// Discounted price of one unit
    pub amount_per_quantity: MoneyInput,
}

/// A monetary value in the output contract
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoneyInput {
    /// Decimal amount, serialized as a string such as `"10.00"`
    pub amount: Decimal,

    /// ISO 4217 currency code
    pub currency_code: String,
}

/// Image reference in the output contract
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ImageInput {
    /// Public URL of the image
    pub url: String,
}

// =============================================================================
// Operation Builder
// =============================================================================

/// Builds the merge (and, with savings, update) operation for one matched
/// bundle.
///
/// The first matching line becomes the merge parent and the remaining
/// matching lines are absorbed into it. The title advertises the savings
/// when there are any: `"Starter Bundle - Save $5.00"`. Returns `None` only
/// for an empty match, which callers rule out by checking the bundle
/// condition first.
pub fn build_operation(
    matched: &MatchResult<'_>,
    outcome: &DiscountOutcome,
) -> Option<CartOperation> {
    let parent = matched.matching_lines.first()?;
    let currency_code = parent.cost.total_amount.currency_code.clone();

    let title = if outcome.savings > Decimal::ZERO {
        format!(
            "{} Bundle - Save {}",
            matched.bundle.name,
            format_money(outcome.savings, &currency_code)
        )
    } else {
        format!("{} Bundle", matched.bundle.name)
    };

    let image = match &parent.merchandise {
        Merchandise::ProductVariant(variant) => variant
            .product
            .image
            .as_ref()
            .map(|image| ImageInput {
                url: image.url.clone(),
            }),
        Merchandise::Other => None,
    };

    let merge = MergeOperation {
        parent_cart_line_id: parent.id.clone(),
        cart_line_ids: matched
            .matching_lines
            .iter()
            .skip(1)
            .map(|line| line.id.clone())
            .collect(),
        title: title.clone(),
        image: image.clone(),
    };

    let update = (outcome.savings > Decimal::ZERO).then(|| UpdateOperation {
        cart_line_id: parent.id.clone(),
        title,
        image,
        cost: CostUpdate {
            amount_per_quantity: MoneyInput {
                amount: per_unit_price(outcome.discounted_total, matched.total_quantity),
                currency_code,
            },
        },
    });

    Some(CartOperation { merge, update })
}
