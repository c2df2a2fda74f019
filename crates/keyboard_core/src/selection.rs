//! Text selection representation.

use crate::text::clamp_to_char_boundary;

/// A selection inside an edit target's value, as a byte range.
///
/// The range is always normalized such that `start <= end`. A zero-width
/// range is a caret.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionRange {
    /// Start byte offset of the selection (inclusive).
    pub start: usize,
    /// End byte offset of the selection (exclusive).
    pub end: usize,
}

impl SelectionRange {
    /// Create a new selection range.
    ///
    /// The range is automatically normalized so `start <= end`.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// A collapsed selection (caret) at `pos`.
    #[inline]
    pub fn caret(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Caret placed after the last character of `value`.
    ///
    /// This is what targets without a selection API report.
    #[inline]
    pub fn end_of(value: &str) -> Self {
        Self::caret(value.len())
    }

    /// Returns `true` if the selection is empty (zero-width).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the selection in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Clamp both ends into `value` and onto UTF-8 character boundaries.
    ///
    /// Hosts may report stale offsets (the value changed underneath), so every
    /// range read from a target goes through here before it is edited.
    pub fn clamp_to(self, value: &str) -> Self {
        Self::new(
            clamp_to_char_boundary(value, self.start),
            clamp_to_char_boundary(value, self.end),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_range_normalizes() {
        let range = SelectionRange::new(10, 5);
        assert_eq!(range.start, 5);
        assert_eq!(range.end, 10);
    }

    #[test]
    fn selection_range_is_empty() {
        assert!(SelectionRange::caret(3).is_empty());
        assert!(!SelectionRange::new(3, 5).is_empty());
        assert_eq!(SelectionRange::new(2, 7).len(), 5);
    }

    #[test]
    fn end_of_places_caret_after_value() {
        assert_eq!(SelectionRange::end_of("abc"), SelectionRange::caret(3));
        assert_eq!(SelectionRange::end_of(""), SelectionRange::caret(0));
    }

    #[test]
    fn clamp_to_pulls_offsets_into_the_value() {
        let range = SelectionRange::new(2, 40).clamp_to("hello");
        assert_eq!(range, SelectionRange::new(2, 5));

        // Mid-'€' offsets snap back to the start of the character.
        let range = SelectionRange::new(2, 3).clamp_to("a€b");
        assert_eq!(range, SelectionRange::caret(1));
    }
}
