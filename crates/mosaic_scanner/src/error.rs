//! Scan errors.
//!
//! The engine itself has no runtime failure modes: unmatched scalars are
//! skipped, not errors. The only thing that can go wrong is a caller
//! contract violation, rejected at the API boundary before scanning begins.

use thiserror::Error;

/// An error rejected at the `scan` boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// `scan` was called with an empty matcher list. The matcher list is
    /// the caller's token vocabulary; an empty one makes every scan a
    /// no-op and is treated as a contract violation rather than silently
    /// returning nothing.
    #[error("scan requires at least one matcher")]
    EmptyMatcherList,
}
