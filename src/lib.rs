//! Bundle Cart Transform Library
//!
//! This library implements the cart bundle-matching and discount-calculation
//! engine that runs inside a commerce platform's cart-transform function:
//! given a read-only cart snapshot, it discovers which product bundles the
//! cart's lines represent, checks each bundle's minimum-quantity condition,
//! selects the best-qualifying discount tier, and emits merge / update
//! operations for the host runtime to apply.
//!
//! The engine is a pure function of its input: no I/O, no shared state, no
//! error path in normal operation. Malformed configuration data degrades to
//! "this bundle contributes nothing" rather than failing the evaluation.

// Domain modules
pub mod bundle;
pub mod cart;
pub mod transform;

// Re-export the invocation surface
pub use crate::cart::models::{CartSnapshot, FunctionInput};
pub use crate::transform::{cart_transform_run, FunctionResult};
