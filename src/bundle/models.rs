//! Bundle Configuration Models
//!
//! The merchant-authored configuration a bundle product carries in its
//! metafield. Field names are part of the stored-JSON contract
//! (`allBundleProductIds`, `enableDiscount`, ...) and must not change.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A merchant-defined product bundle, parsed from metafield JSON
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BundleConfiguration {
    /// Stable bundle identifier; deduplication key across cart lines
    pub id: String,

    /// Display name, used to build the merged line title
    pub name: String,

    /// Products that count toward this bundle (order irrelevant)
    #[serde(default)]
    pub all_bundle_product_ids: Vec<String>,

    /// Discount settings; a bundle without pricing carries no discount
    #[serde(default)]
    pub pricing: Option<BundlePricing>,
}

/// Discount settings attached to a bundle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BundlePricing {
    /// Master switch; when false the bundle is skipped entirely
    #[serde(default)]
    pub enable_discount: bool,

    /// How the discount is applied
    pub discount_method: DiscountMethod,

    /// Tiered rules, not necessarily sorted by threshold
    #[serde(default)]
    pub rules: Vec<DiscountRule>,
}

/// Supported discount methods.
///
/// `FreeShipping` is applied by a different function in the platform's
/// delivery pipeline; a catch-all variant keeps one unrecognized method
/// string from invalidating the whole configuration parse.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiscountMethod {
    FixedAmountOff,
    PercentageOff,
    FreeShipping,
    #[serde(other)]
    Unsupported,
}

/// What a rule's threshold is measured against
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiscountOn {
    #[default]
    Quantity,
    Amount,
}

/// One discount tier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiscountRule {
    /// Threshold dimension. Parsed for stored-JSON compatibility; tier
    /// selection is currently quantity-based regardless (see DESIGN.md).
    #[serde(default)]
    pub discount_on: DiscountOn,

    /// Minimum aggregate quantity for this tier to apply
    #[serde(default)]
    pub minimum_quantity: u32,

    /// Amount subtracted from the bundle total under `fixed_amount_off`
    #[serde(default)]
    pub fixed_amount_off: Decimal,

    /// Percentage (0..=100) taken off the bundle total under `percentage_off`
    #[serde(default)]
    pub percentage_off: Decimal,
}
