//! Cart Snapshot Domain Module
//!
//! This module contains everything about the cart the engine reads:
//! - Input models (cart lines, merchandise, monetary values)
//! - Pure money helpers (minor-unit rounding, display formatting)

pub mod helpers;
pub mod models;

// Re-export commonly used types for convenience
pub use models::{CartLine, CartSnapshot, FunctionInput, Merchandise, Money};
