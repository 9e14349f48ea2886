//! mosaic_matchers: Ready-made matcher configurations for the mosaic scanner.
//!
//! The engine in `mosaic_scanner` is matcher-agnostic; this crate supplies
//! the usual suspects. [`ScalarSet`] describes a set of scalars (Unicode
//! classes plus explicit scalars), [`SetMatcher`] turns one or two such sets
//! into a token kind, [`FnMatcher`] wraps closures for one-off rules, and
//! [`builtin`] has constructors for common kinds (numbers, words,
//! identifiers, whitespace, `#`-prefixed codes).

pub mod builtin;
mod closure;
mod scalar_set;
mod set_matcher;

pub use closure::FnMatcher;
pub use scalar_set::ScalarSet;
pub use set_matcher::SetMatcher;
