//! mosaic_core: Core types for the mosaic tokenizer.
//!
//! Provides the span type used to locate tokens inside an input
//! sequence of Unicode scalars.

pub mod span;

// Re-export commonly used types
pub use span::{ScalarPos, ScalarSpan};
