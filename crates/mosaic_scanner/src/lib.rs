//! mosaic_scanner: The tokenizing engine of mosaic.
//!
//! Partitions a sequence of Unicode scalars into typed, non-overlapping
//! tokens by applying an ordered list of pluggable [`Matcher`] rules.
//! A single left-to-right pass decides, at each position, which matcher
//! (if any) may start a token, grows the token greedily, and skips
//! scalars no matcher claims. There is no backtracking and no
//! regular-expression machinery; matchers are plain per-scalar
//! predicates supplied by the caller.

mod error;
mod matcher;
mod scanner;
mod token;

pub use error::ScanError;
pub use matcher::{Matcher, StartHint};
pub use scanner::{scan, scan_str, Scanner};
pub use token::{KindId, Token};
