//! Span types for locating tokens in scanned input.
//!
//! All positions are measured in *scalars* (decoded Unicode code points),
//! never in bytes: the scanner operates on a decoded `&[char]` sequence, so a
//! span's `start` is an index into that sequence and its `length` counts
//! scalars, regardless of how wide each scalar is in UTF-8.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// A position in scanned input, measured as a scalar index from the start.
pub type ScalarPos = u32;

/// A contiguous run of scalars, defined by a start index and a length.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct ScalarSpan {
    /// The scalar index where this span starts.
    pub start: ScalarPos,
    /// The length of this span in scalars.
    pub length: ScalarPos,
}

impl ScalarSpan {
    /// Create a new span.
    #[inline]
    pub fn new(start: ScalarPos, length: ScalarPos) -> Self {
        Self { start, length }
    }

    /// Create a span from start and end indices.
    #[inline]
    pub fn from_bounds(start: ScalarPos, end: ScalarPos) -> Self {
        debug_assert!(end >= start);
        Self {
            start,
            length: end - start,
        }
    }

    /// The end index of this span (exclusive).
    #[inline]
    pub fn end(&self) -> ScalarPos {
        self.start + self.length
    }

    /// Whether this span is empty (zero-length).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Whether this span contains the given scalar index.
    #[inline]
    pub fn contains(&self, pos: ScalarPos) -> bool {
        pos >= self.start && pos < self.end()
    }

    /// Whether this span overlaps with another span.
    #[inline]
    pub fn overlaps(&self, other: &ScalarSpan) -> bool {
        self.start < other.end() && other.start < self.end()
    }

    /// Convert to an index range, usable to slice the decoded input.
    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start as usize..self.end() as usize
    }
}

impl fmt::Debug for ScalarSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

impl fmt::Display for ScalarSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end())
    }
}
