//! The concatenation tree: leaves of shared bytes, concat pairs above them.

use std::sync::Arc;

use crate::region::Region;

/// One node of a concatenation tree.
///
/// Concat totals are fixed at construction from the children's own totals.
/// Nodes are never mutated, so a subtree may sit under any number of parents.
pub(crate) enum Node {
    Leaf(Region),
    Concat {
        left: Arc<Node>,
        right: Arc<Node>,
        bytes: usize,
        chars: usize,
    },
}

impl Node {
    /// Link two subtrees without touching their bytes.
    pub(crate) fn concat(left: Arc<Node>, right: Arc<Node>) -> Self {
        Node::Concat {
            bytes: left.byte_len() + right.byte_len(),
            chars: left.char_len() + right.char_len(),
            left,
            right,
        }
    }

    #[inline]
    pub(crate) fn byte_len(&self) -> usize {
        match self {
            Node::Leaf(region) => region.len(),
            Node::Concat { bytes, .. } => *bytes,
        }
    }

    #[inline]
    pub(crate) fn char_len(&self) -> usize {
        match self {
            Node::Leaf(region) => region.chars(),
            Node::Concat { chars, .. } => *chars,
        }
    }

    /// Append this subtree's bytes to `out`, left before right.
    pub(crate) fn collect_bytes(&self, out: &mut Vec<u8>) {
        match self {
            Node::Leaf(region) => out.extend_from_slice(region.bytes()),
            Node::Concat { left, right, .. } => {
                left.collect_bytes(out);
                right.collect_bytes(out);
            }
        }
    }

    /// The code point at char `index`, resolved by descending on the left
    /// child's count. Assumes `index < self.char_len()`.
    pub(crate) fn char_at(&self, index: usize) -> char {
        match self {
            Node::Leaf(region) => region.char_at(index),
            Node::Concat { left, right, .. } => {
                let split = left.char_len();
                if index < split {
                    left.char_at(index)
                } else {
                    right.char_at(index - split)
                }
            }
        }
    }

    /// Byte offset of char `index` within this subtree's flattened bytes.
    /// Assumes `index <= self.char_len()`; only the resolving leaf is
    /// scanned.
    pub(crate) fn byte_offset_of_char(&self, index: usize) -> usize {
        match self {
            Node::Leaf(region) => region.locate(index),
            Node::Concat { left, right, .. } => {
                let split = left.char_len();
                if index < split {
                    left.byte_offset_of_char(index)
                } else {
                    left.byte_len() + right.byte_offset_of_char(index - split)
                }
            }
        }
    }
}
