//! Opaque identifier for key elements.
//!
//! The widget never holds key elements itself. Integration layers hand out a
//! `KeyId` per key they expose and map it back to their native element when
//! the widget asks for a label update.

/// Lightweight, copyable handle naming one key element of the keyboard.
///
/// The value has no meaning inside this crate; it is only a key.
///
/// # Integration
///
/// A DOM adapter usually numbers keys in document order:
///
/// ```
/// use keyboard_core::KeyId;
///
/// let keys = ["q", "w", "e"];
/// let ids: Vec<KeyId> = (0..keys.len()).map(KeyId::from_index).collect();
/// assert_eq!(ids[2].index(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyId(u32);

impl KeyId {
    /// Create a `KeyId` from a position in a key list.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    /// Position in the key list this id was created from.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}
