//! Bundle Configuration Domain Module
//!
//! This module contains the merchant-authored bundle configuration:
//! - Wire models for the metafield JSON (identifiers, members, pricing tiers)
//! - The reader that discovers configurations embedded in a cart

pub mod models;
pub mod reader;

// Re-export commonly used types for convenience
pub use models::{BundleConfiguration, BundlePricing, DiscountMethod, DiscountRule};
pub use reader::collect_bundle_configurations;
