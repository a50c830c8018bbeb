//! The flat representation: one contiguous shared byte region.

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::region::Region;
use crate::seq::CharSeq;

/// An immutable UTF-8 sequence over a single contiguous byte region.
///
/// `Strand` keeps no hidden state: `char_at` and `slice` walk forward from
/// the start of the region every time, and `to_text` decodes afresh on every
/// call. Slicing shares the backing buffer; concatenation copies both
/// operands into a new one.
#[derive(Clone, Default)]
pub struct Strand {
    region: Region,
}

impl Strand {
    /// Copy `text` once into a fresh shared buffer.
    pub fn from_str(text: &str) -> Self {
        let len = text.len();
        Strand {
            region: Region::counted(Arc::from(text.as_bytes()), 0, len),
        }
    }

    /// Wrap a whole shared buffer without copying, validating it as UTF-8.
    pub fn from_utf8(data: Arc<[u8]>) -> Result<Self> {
        let len = data.len();
        Ok(Strand {
            region: Region::from_utf8(data, 0, len)?,
        })
    }

    /// Wrap `data[offset..offset + len]` without copying, validating the
    /// window as standalone UTF-8.
    pub fn from_utf8_region(data: Arc<[u8]>, offset: usize, len: usize) -> Result<Self> {
        Ok(Strand {
            region: Region::from_utf8(data, offset, len)?,
        })
    }

    /// Wrap a whole shared buffer without copying or validating.
    ///
    /// # Safety
    ///
    /// `data` must be well-formed UTF-8.
    pub unsafe fn from_utf8_unchecked(data: Arc<[u8]>) -> Self {
        let len = data.len();
        Strand {
            region: Region::counted(data, 0, len),
        }
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
        Ok(Strand {
            region: Region::counted(data, offset, len),
        })
    }

    pub(crate) fn from_region(region: Region) -> Self {
        Strand { region }
    }

    pub(crate) fn region(&self) -> &Region {
        &self.region
    }

    /// The sequence as `str`, borrowing the shared buffer.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.region.as_str()
    }

    /// The UTF-8 bytes, borrowing the shared buffer.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.region.bytes()
    }

    /// Decode the full region into an owned `String`, fresh on every call.
    pub fn to_text(&self) -> String {
        self.as_str().to_string()
    }

    /// Iterator over the code points, front to back.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.as_str().chars()
    }
}

impl CharSeq for Strand {
    #[inline]
    fn len_chars(&self) -> usize {
        self.region.chars()
    }

    #[inline]
    fn len_bytes(&self) -> usize {
        self.region.len()
    }

    fn char_at(&self, index: usize) -> Result<char> {
        let len = self.region.chars();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        Ok(self.region.char_at(index))
    }

    /// O(end) in the worst case: both endpoints are found by forward scans.
    fn slice(&self, range: Range<usize>) -> Result<Strand> {
        let len = self.region.chars();
        if range.start > range.end || range.end > len {
            return Err(Error::InvalidRange {
                start: range.start,
                end: range.end,
                len,
            });
        }
        let byte_start = self.region.locate(range.start);
        let byte_end = if range.end == len {
            // The region's own length is exact; skip the second scan.
            self.region.len()
        } else {
            self.region.locate(range.end)
        };
        Ok(Strand {
            region: self
                .region
                .narrow(byte_start, byte_end, range.end - range.start),
        })
    }

    /// Eager: allocates a buffer sized for both operands and copies them in.
    fn concat(&self, other: &Strand) -> Strand {
        let mut buf = Vec::with_capacity(self.region.len() + other.region.len());
        buf.extend_from_slice(self.region.bytes());
        buf.extend_from_slice(other.region.bytes());
        let len = buf.len();
        let chars = self.region.chars() + other.region.chars();
        Strand {
            region: Region::with_chars(Arc::from(buf), 0, len, chars),
        }
    }
}

impl From<&str> for Strand {
    fn from(text: &str) -> Self {
        Strand::from_str(text)
    }
}

impl From<String> for Strand {
    fn from(text: String) -> Self {
        Strand::from_str(&text)
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Strand({:?})", self.as_str())
    }
}
