//! Bundle Configuration Reader
//!
//! Discovers which bundles are represented in a cart by parsing the
//! configuration JSON embedded on each line's product.

use std::collections::HashSet;

use super::models::BundleConfiguration;
use crate::cart::models::{CartSnapshot, Merchandise};

/// Collects the distinct bundle configurations embedded in a cart.
///
/// # Behaviour
///
/// * Lines whose merchandise is not a product variant, whose product has no
///   configuration metafield, or whose metafield fails to parse contribute
///   nothing. A single corrupt metafield must not break checkout for the
///   whole cart, so parse failures are swallowed here rather than surfaced.
/// * Configurations are deduplicated by bundle `id`; the first occurrence
///   wins, which keeps the output ordered by first appearance in the cart.
///   Lines of the same bundle are assumed to carry identical configuration.
pub fn collect_bundle_configurations(cart: &CartSnapshot) -> Vec<BundleConfiguration> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut configs = Vec::new();

    for line in &cart.lines {
        let Merchandise::ProductVariant(variant) = &line.merchandise else {
            continue;
        };
        let Some(metafield) = &variant.product.bundle_config else {
            continue;
        };
        let Ok(config) = serde_json::from_str::<BundleConfiguration>(&metafield.value) else {
            continue;
        };
        if seen.insert(config.id.clone()) {
            configs.push(config);
        }
    }

    configs
}
