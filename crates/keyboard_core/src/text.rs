//! UTF-8 text utilities for caret handling.
//!
//! Edits address values by byte offset. These helpers keep those offsets on
//! character boundaries so slicing never panics and a deletion never splits a
//! multi-byte character.

/// Clamp an arbitrary byte index to a valid UTF-8 character boundary.
///
/// If `index` is beyond the string length, it is clamped to `s.len()`.
/// If `index` falls in the middle of a multi-byte character, it is
/// adjusted backwards to the start of that character.
///
/// # Examples
///
/// ```
/// use keyboard_core::clamp_to_char_boundary;
///
/// let s = "a€b"; // '€' is 3 bytes
/// assert_eq!(clamp_to_char_boundary(s, 0), 0); // 'a'
/// assert_eq!(clamp_to_char_boundary(s, 1), 1); // start of '€'
/// assert_eq!(clamp_to_char_boundary(s, 2), 1); // mid '€' -> start of '€'
/// assert_eq!(clamp_to_char_boundary(s, 4), 4); // 'b'
/// assert_eq!(clamp_to_char_boundary(s, 100), 5); // beyond end -> len
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Find the previous valid caret position (character boundary) before `i`.
///
/// Returns 0 if already at the start.
///
/// # Examples
///
/// ```
/// use keyboard_core::prev_char_boundary;
///
/// let s = "a€b";
/// assert_eq!(prev_char_boundary(s, 5), 4); // after 'b' -> 'b'
/// assert_eq!(prev_char_boundary(s, 4), 1); // 'b' -> '€'
/// assert_eq!(prev_char_boundary(s, 1), 0); // '€' -> 'a'
/// assert_eq!(prev_char_boundary(s, 0), 0); // already at start
/// ```
pub fn prev_char_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    if i == 0 {
        return 0;
    }
    s[..i]
        .char_indices()
        .last()
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_handles_empty_string() {
        assert_eq!(clamp_to_char_boundary("", 0), 0);
        assert_eq!(clamp_to_char_boundary("", 3), 0);
    }

    #[test]
    fn prev_boundary_skips_whole_emoji() {
        let s = "x😀"; // 4-byte scalar
        assert_eq!(prev_char_boundary(s, s.len()), 1);
        // A caret inside the emoji is first clamped to its start.
        assert_eq!(prev_char_boundary(s, 3), 0);
    }
}
