//! Immutable UTF-8 character sequences with two storage strategies.
//!
//! [`Strand`] keeps its text in one contiguous buffer: cheap to scan, but
//! concatenation copies every byte. [`Cord`] keeps a tree of concatenated
//! regions: concatenation is O(1) and the bytes are only laid out
//! contiguously when something needs them, once, behind a cache. Both
//! implement [`CharSeq`], index by code point rather than by byte, and share
//! storage instead of copying wherever a slice allows it.
//!
//! ```
//! use cord::{CharSeq, Cord};
//!
//! let greeting = Cord::from("Hello, ").concat(&Cord::from("world!"));
//! assert_eq!(greeting.len_chars(), 13);
//! assert_eq!(greeting.char_at(7)?, 'w');
//! assert_eq!(*greeting.to_text(), "Hello, world!");
//! assert_eq!(*greeting.slice(0..5)?.to_text(), "Hello");
//! # Ok::<(), cord::Error>(())
//! ```

mod cord;
mod error;
mod node;
mod region;
mod seq;
mod strand;
mod utf8;

pub use crate::cord::{Chars, Cord};
pub use crate::error::{Error, Result};
pub use crate::seq::CharSeq;
pub use crate::strand::Strand;
