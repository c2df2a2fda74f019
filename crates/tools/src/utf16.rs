//! Offset conversion between UTF-16 code units and UTF-8 bytes.
//!
//! DOM selection offsets count UTF-16 code units; Rust strings are sliced by
//! byte. Conversions always land on a character boundary: an offset that
//! falls between the two halves of a surrogate pair snaps back to the start of
//! that character, and offsets past the end clamp to the end.

/// Byte offset in `s` corresponding to `units` UTF-16 code units.
pub fn utf16_to_byte_offset(s: &str, units: usize) -> usize {
    let mut seen = 0usize;
    for (byte, ch) in s.char_indices() {
        let next = seen + ch.len_utf16();
        if next > units {
            return byte;
        }
        seen = next;
    }
    s.len()
}

/// UTF-16 code-unit offset corresponding to byte offset `byte` in `s`.
///
/// A byte offset inside a multi-byte character is treated as the start of
/// that character.
pub fn byte_to_utf16_offset(s: &str, byte: usize) -> usize {
    let mut byte = byte.min(s.len());
    while byte > 0 && !s.is_char_boundary(byte) {
        byte -= 1;
    }
    utf16_len(&s[..byte])
}

/// Length of `s` in UTF-16 code units (what JavaScript calls `length`).
pub fn utf16_len(s: &str) -> usize {
    s.chars().map(char::len_utf16).sum()
}
