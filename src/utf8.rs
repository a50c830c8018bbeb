//! UTF-8 scanning primitives shared by both representations.
//!
//! Widths come from the lead byte's high bits alone; continuation bytes are
//! never validated. Callers uphold the crate-wide invariant that regions hold
//! well-formed UTF-8 cut on code point boundaries.

/// Byte width of the code point whose lead byte is `lead`.
#[inline]
pub(crate) fn sequence_width(lead: u8) -> usize {
    if lead < 0x80 {
        1
    } else if lead & 0xE0 == 0xC0 {
        2
    } else if lead & 0xF0 == 0xE0 {
        3
    } else {
        4
    }
}

/// Number of code points in `bytes`, counted as non-continuation bytes.
#[inline]
pub(crate) fn count_chars(bytes: &[u8]) -> usize {
    bytecount::num_chars(bytes)
}

/// Byte offset of the code point at char `index`, found by a forward width
/// scan from the start. O(index). `index` may equal the char count, in which
/// case the result is the total byte length.
pub(crate) fn locate_char(bytes: &[u8], index: usize) -> usize {
    let mut at = 0;
    for _ in 0..index {
        at += sequence_width(bytes[at]);
    }
    at
}

/// Decode the code point whose lead byte sits at `at`.
pub(crate) fn decode_char(bytes: &[u8], at: usize) -> char {
    let lead = bytes[at];
    let scalar = match sequence_width(lead) {
        1 => lead as u32,
        2 => ((lead as u32 & 0x1F) << 6) | (bytes[at + 1] as u32 & 0x3F),
        3 => {
            ((lead as u32 & 0x0F) << 12)
                | ((bytes[at + 1] as u32 & 0x3F) << 6)
                | (bytes[at + 2] as u32 & 0x3F)
        }
        _ => {
            ((lead as u32 & 0x07) << 18)
                | ((bytes[at + 1] as u32 & 0x3F) << 12)
                | ((bytes[at + 2] as u32 & 0x3F) << 6)
                | (bytes[at + 3] as u32 & 0x3F)
        }
    };
    // Unreachable for well-formed input; malformed bytes decode to U+FFFD
    // rather than panicking.
    char::from_u32(scalar).unwrap_or(char::REPLACEMENT_CHARACTER)
}
