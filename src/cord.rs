//! The rope representation: a concatenation tree with lazy flattening.

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::error::{Error, Result};
use crate::node::Node;
use crate::region::Region;
use crate::seq::CharSeq;
use crate::strand::Strand;

/// An immutable UTF-8 sequence backed by a concatenation tree.
///
/// `concat` links trees in O(1) and never copies bytes. The first operation
/// that needs contiguous storage flattens the tree once and caches the
/// result for the value's lifetime; `to_text` keeps a second cache for the
/// decoded text. Tree depth follows the order of concatenation; no
/// rebalancing is done.
pub struct Cord {
    root: Arc<Node>,
    /// Flattened bytes, populated at most once.
    byte_cache: ArcSwapOption<Region>,
    /// Decoded text, populated at most once.
    text_cache: ArcSwapOption<String>,
}

impl Cord {
    /// Copy `text` once into a fresh shared buffer held by a single leaf.
    pub fn from_str(text: &str) -> Self {
        let len = text.len();
        Cord::from_region(Region::counted(Arc::from(text.as_bytes()), 0, len))
    }

    /// Wrap a whole shared buffer without copying, validating it as UTF-8.
    pub fn from_utf8(data: Arc<[u8]>) -> Result<Self> {
        let len = data.len();
        Ok(Cord::from_region(Region::from_utf8(data, 0, len)?))
    }

    /// Wrap `data[offset..offset + len]` without copying, validating the
    /// window as standalone UTF-8.
    pub fn from_utf8_region(data: Arc<[u8]>, offset: usize, len: usize) -> Result<Self> {
        Ok(Cord::from_region(Region::from_utf8(data, offset, len)?))
    }

    /// Wrap a whole shared buffer without copying or validating.
    ///
    /// # Safety
    ///
    /// `data` must be well-formed UTF-8.
    pub unsafe fn from_utf8_unchecked(data: Arc<[u8]>) -> Self {
        let len = data.len();
        Cord::from_region(Region::counted(data, 0, len))
    }

    /// Wrap `data[offset..offset + len]` without copying or validating.
    /// Bounds are still checked.
    ///
    /// # Safety
    ///
    /// The window must be well-formed UTF-8 cut on code point boundaries.
    pub unsafe fn from_utf8_unchecked_region(
        data: Arc<[u8]>,
        offset: usize,
        len: usize,
    ) -> Result<Self> {
        Region::check_window(&data, offset, len)?;
        Ok(Cord::from_region(Region::counted(data, offset, len)))
    }

    fn from_region(region: Region) -> Self {
        Cord::from_root(Arc::new(Node::Leaf(region)))
    }

    fn from_root(root: Arc<Node>) -> Self {
        Cord {
            root,
            byte_cache: ArcSwapOption::new(None),
            text_cache: ArcSwapOption::new(None),
        }
    }

    /// Flatten the tree into one contiguous region, serving the cache after
    /// the first call.
    fn materialize(&self) -> Arc<Region> {
        if let Some(flat) = self.byte_cache.load_full() {
            return flat;
        }
        let bytes = self.root.byte_len();
        let mut buf = Vec::with_capacity(bytes);
        self.root.collect_bytes(&mut buf);
        let flat = Arc::new(Region::with_chars(
            Arc::from(buf),
            0,
            bytes,
            self.root.char_len(),
        ));
        // Racing first calls may each build the buffer; the bytes are
        // identical either way and later loads all see a stored value.
        self.byte_cache.store(Some(Arc::clone(&flat)));
        flat
    }

    /// The decoded text. Computed once, then served from cache; the returned
    /// `Arc` is the cache itself, so repeated calls yield the same
    /// allocation.
    pub fn to_text(&self) -> Arc<String> {
        if let Some(text) = self.text_cache.load_full() {
            return text;
        }
        let flat = self.materialize();
        let text = Arc::new(flat.as_str().to_string());
        self.text_cache.store(Some(Arc::clone(&text)));
        text
    }

    /// Iterator over the code points, leaf by leaf, without flattening.
    pub fn chars(&self) -> Chars<'_> {
        Chars::new(&self.root)
    }
}

impl CharSeq for Cord {
    #[inline]
    fn len_chars(&self) -> usize {
        self.root.char_len()
    }

    #[inline]
    fn len_bytes(&self) -> usize {
        self.root.byte_len()
    }

    /// O(depth + scan within the resolving leaf); no flattening.
    fn char_at(&self, index: usize) -> Result<char> {
        let len = self.root.char_len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        Ok(self.root.char_at(index))
    }

    /// Flattens once (shared by every later slice of `self`), then resolves
    /// both endpoints against the tree and wraps a leaf over the cached
    /// buffer.
    fn slice(&self, range: Range<usize>) -> Result<Cord> {
        let len = self.root.char_len();
        if range.start > range.end || range.end > len {
            return Err(Error::InvalidRange {
                start: range.start,
                end: range.end,
                len,
            });
        }
        let flat = self.materialize();
        let byte_start = self.root.byte_offset_of_char(range.start);
        let byte_end = if range.end == len {
            // The root's byte length is exact; skip the second descent.
            self.root.byte_len()
        } else {
            self.root.byte_offset_of_char(range.end)
        };
        Ok(Cord::from_region(flat.narrow(
            byte_start,
            byte_end,
            range.end - range.start,
        )))
    }

    /// O(1): links the two roots under a fresh node, sharing both subtrees.
    fn concat(&self, other: &Cord) -> Cord {
        Cord::from_root(Arc::new(Node::concat(
            Arc::clone(&self.root),
            Arc::clone(&other.root),
        )))
    }
}

/// Clones share the tree and any caches already computed.
impl Clone for Cord {
    fn clone(&self) -> Self {
        Cord {
            root: Arc::clone(&self.root),
            byte_cache: ArcSwapOption::new(self.byte_cache.load_full()),
            text_cache: ArcSwapOption::new(self.text_cache.load_full()),
        }
    }
}

impl Default for Cord {
    fn default() -> Self {
        Cord::from_region(Region::default())
    }
}

impl From<&str> for Cord {
    fn from(text: &str) -> Self {
        Cord::from_str(text)
    }
}

impl From<String> for Cord {
    fn from(text: String) -> Self {
        Cord::from_str(&text)
    }
}

/// Reuses the strand's region as a single leaf; no bytes move.
impl From<Strand> for Cord {
    fn from(strand: Strand) -> Self {
        Cord::from_region(strand.region().clone())
    }
}

/// Flattens the cord (through its cache) and shares the resulting buffer.
impl From<&Cord> for Strand {
    fn from(cord: &Cord) -> Self {
        Strand::from_region((*cord.materialize()).clone())
    }
}

impl fmt::Display for Cord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_text().as_str())
    }
}

impl fmt::Debug for Cord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cord({:?})", self.to_text())
    }
}

/// Iterator over a cord's code points, produced leaf by leaf.
pub struct Chars<'a> {
    /// Right subtrees not yet visited, innermost last.
    stack: Vec<&'a Node>,
    current: std::str::Chars<'a>,
}

impl<'a> Chars<'a> {
    fn new(root: &'a Node) -> Self {
        let mut chars = Chars {
            stack: Vec::new(),
            current: "".chars(),
        };
        chars.descend(root);
        chars
    }

    /// Walk to the leftmost leaf under `node`, stacking right siblings.
    fn descend(&mut self, mut node: &'a Node) {
        loop {
            match node {
                Node::Leaf(region) => {
                    self.current = region.as_str().chars();
                    return;
                }
                Node::Concat { left, right, .. } => {
                    self.stack.push(right.as_ref());
                    node = left.as_ref();
                }
            }
        }
    }
}

impl<'a> Iterator for Chars<'a> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        loop {
            if let Some(c) = self.current.next() {
                return Some(c);
            }
            let node = self.stack.pop()?;
            self.descend(node);
        }
    }
}
