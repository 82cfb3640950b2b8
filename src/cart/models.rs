//! Cart Snapshot Domain Models
//!
//! This module contains the read-only cart input consumed by the transform
//! engine. The shapes mirror the host runtime's JSON contract: camelCase
//! field names, `__typename`-tagged merchandise, and string-encoded decimal
//! amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Function Input
// =============================================================================

/// Top-level input envelope delivered by the host runtime
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FunctionInput {
    /// The cart being evaluated
    pub cart: CartSnapshot,
}

/// Read-only snapshot of the cart at evaluation time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSnapshot {
    /// Cart lines in presentation order
    pub lines: Vec<CartLine>,
}

/// One entry in the cart: a merchandise reference plus quantity and cost
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Stable line identifier assigned by the platform
    pub id: String,

    /// Quantity of this line (positive)
    pub quantity: u32,

    /// What the line sells
    pub merchandise: Merchandise,

    /// Per-unit and total cost of the line
    pub cost: LineCost,
}

/// The kinds of merchandise a cart line can carry.
///
/// Matched exhaustively so that non-variant lines (custom products, unknown
/// future kinds) are skipped explicitly rather than through a stringly-typed
/// check on the type tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "__typename")]
pub enum Merchandise {
    /// A concrete product variant; the only kind that can belong to a bundle
    ProductVariant(ProductVariant),

    /// Anything else (custom products, future merchandise kinds)
    #[serde(other)]
    Other,
}

/// A purchasable product variant referenced by a cart line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductVariant {
    /// Variant identifier
    pub id: String,

    /// The parent product, which carries the bundle configuration
    pub product: Product,
}

/// The product behind a variant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product identifier; membership in a bundle is decided against this
    pub id: String,

    /// Featured image, used as the merged line's representative image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,

    /// Metafield holding the bundle configuration JSON, when the product
    /// belongs to a bundle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_config: Option<Metafield>,
}

/// A metafield value as delivered by the platform: an opaque string
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Metafield {
    /// Raw UTF-8 value; for bundle products this is JSON text
    pub value: String,
}

/// Reference to a hosted image
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageRef {
    /// Public URL of the image
    pub url: String,
}

// =============================================================================
// Money
// =============================================================================

/// Cost breakdown of a cart line.
///
/// The platform guarantees `total_amount == amount_per_quantity * quantity`;
/// the engine assumes this and does not reverify it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineCost {
    /// Pre-discount price of one unit
    pub amount_per_quantity: Money,

    /// Pre-discount price of the whole line
    pub total_amount: Money,
}

/// A monetary value in a specific currency.
///
/// Amounts are fixed-point decimals (serialized as strings on the wire), so
/// price arithmetic never drifts the way binary floating point would.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Decimal amount, e.g. `10.00`
    pub amount: Decimal,

    /// ISO 4217 currency code, e.g. `"USD"`
    pub currency_code: String,
}
