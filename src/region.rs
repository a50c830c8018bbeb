//! Shared byte regions: the storage unit beneath both representations.

use std::sync::Arc;

use simdutf8::basic::from_utf8;

use crate::error::{Error, Result};
use crate::utf8;

/// A read-only window into a shared byte buffer, plus its code point count.
///
/// The buffer may back any number of regions and is never written through
/// one. The count is fixed when the region is built; narrowing reuses counts
/// the caller already knows instead of rescanning.
#[derive(Clone)]
pub(crate) struct Region {
    data: Arc<[u8]>,
    offset: usize,
    len: usize,
    chars: usize,
}

impl Region {
    /// Check that `data[offset..offset + len]` is in bounds.
    pub(crate) fn check_window(data: &[u8], offset: usize, len: usize) -> Result<()> {
        match offset.checked_add(len) {
            Some(end) if end <= data.len() => Ok(()),
            _ => Err(Error::InvalidRegion {
                offset,
                len,
                buffer_len: data.len(),
            }),
        }
    }

    /// Wrap a window already known to be in bounds, counting its code points.
    pub(crate) fn counted(data: Arc<[u8]>, offset: usize, len: usize) -> Self {
        debug_assert!(offset + len <= data.len());
        let chars = utf8::count_chars(&data[offset..offset + len]);
        Region {
            data,
            offset,
            len,
            chars,
        }
    }

    /// Wrap a window whose code point count is already known. The caller
    /// guarantees the window is in bounds and cut on code point boundaries.
    pub(crate) fn with_chars(data: Arc<[u8]>, offset: usize, len: usize, chars: usize) -> Self {
        debug_assert!(offset + len <= data.len());
        debug_assert_eq!(chars, utf8::count_chars(&data[offset..offset + len]));
        Region {
            data,
            offset,
            len,
            chars,
        }
    }

    /// Wrap and validate: the window must be standalone well-formed UTF-8.
    pub(crate) fn from_utf8(data: Arc<[u8]>, offset: usize, len: usize) -> Result<Self> {
        Self::check_window(&data, offset, len)?;
        if from_utf8(&data[offset..offset + len]).is_err() {
            return Err(Error::InvalidUtf8);
        }
        Ok(Self::counted(data, offset, len))
    }

    /// A sub-window of this region. Byte bounds are relative to the window
    /// and must land on code point boundaries; `chars` is the count between
    /// them.
    pub(crate) fn narrow(&self, byte_start: usize, byte_end: usize, chars: usize) -> Self {
        debug_assert!(byte_start <= byte_end && byte_end <= self.len);
        Self::with_chars(
            Arc::clone(&self.data),
            self.offset + byte_start,
            byte_end - byte_start,
            chars,
        )
    }

    #[inline]
    pub(crate) fn bytes(&self) -> &[u8] {
        &self.data[self.offset..self.offset + self.len]
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn chars(&self) -> usize {
        self.chars
    }

    /// View the window as `str` without revalidating.
    #[inline]
    pub(crate) fn as_str(&self) -> &str {
        // SAFETY: regions hold well-formed UTF-8 by construction.
        unsafe { from_utf8(self.bytes()).unwrap_unchecked() }
    }

    /// Byte offset (relative to the window) of char `index`. O(index).
    #[inline]
    pub(crate) fn locate(&self, index: usize) -> usize {
        utf8::locate_char(self.bytes(), index)
    }

    /// The code point at char `index`. Assumes `index < self.chars()`.
    pub(crate) fn char_at(&self, index: usize) -> char {
        let bytes = self.bytes();
        utf8::decode_char(bytes, utf8::locate_char(bytes, index))
    }
}

impl Default for Region {
    fn default() -> Self {
        Region {
            data: Arc::from(&[][..]),
            offset: 0,
            len: 0,
            chars: 0,
        }
    }
}
