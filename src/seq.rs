//! The read-only interface shared by both representations.

use std::fmt;
use std::ops::Range;

use crate::error::Result;

/// A read-only character sequence over UTF-8 bytes.
///
/// Implemented by [`Strand`](crate::Strand) (one contiguous buffer, eager
/// concatenation) and [`Cord`](crate::Cord) (concatenation tree, lazy
/// flattening). Indices count code points, not bytes, and ranges are
/// half-open. `Display` renders the decoded text, so either representation
/// can be printed or compared through `to_string`.
pub trait CharSeq: Sized + fmt::Display {
    /// Length in code points.
    fn len_chars(&self) -> usize;

    /// Length in bytes of the UTF-8 encoding.
    fn len_bytes(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// The code point at char `index`.
    fn char_at(&self, index: usize) -> Result<char>;

    /// A new sequence over the code points in `range`. Both representations
    /// share storage with `self` rather than copying bytes.
    fn slice(&self, range: Range<usize>) -> Result<Self>;

    /// A new sequence holding `self` followed by `other`, leaving both
    /// operands untouched.
    fn concat(&self, other: &Self) -> Self;
}
