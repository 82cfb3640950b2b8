//! Cart Transform Engine Module
//!
//! The evaluation pipeline, one stage per submodule:
//! - `matcher`: bundle membership matching and condition checking
//! - `rules`: best-qualifying tier selection
//! - `pricing`: discount arithmetic and per-unit price derivation
//! - `operations`: output models and operation assembly
//! - `run`: the orchestrator tying the stages together

pub mod matcher;
pub mod operations;
pub mod pricing;
pub mod rules;
pub mod run;

// Re-export the entry point and output types for convenience
pub use operations::{CartOperation, FunctionResult};
pub use run::cart_transform_run;
