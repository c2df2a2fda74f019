//! Shift state and letter-key casing.
//!
//! Labels are always derived from the original label captured when the
//! keyboard was set up, never from what a key currently shows, so repeated
//! toggles cannot drift: "ß" shows "SS" while shifted and comes back as "ß",
//! not "ss".

use crate::id::KeyId;

#[derive(Clone, Debug, Default)]
pub struct ShiftState {
    active: bool,
    originals: Vec<(KeyId, String)>,
}

impl ShiftState {
    /// Create the shift state for the given letter keys and their original
    /// labels. Shift starts off.
    pub fn new(originals: Vec<(KeyId, String)>) -> Self {
        Self {
            active: false,
            originals,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Store the new state. Returns `true` if it changed.
    pub fn set(&mut self, enabled: bool) -> bool {
        let changed = self.active != enabled;
        self.active = enabled;
        changed
    }

    /// Labels every letter key should display for the current state.
    pub fn labels(&self) -> impl Iterator<Item = (KeyId, String)> + '_ {
        let active = self.active;
        self.originals
            .iter()
            .map(move |(id, original)| (*id, cased_label(original, active)))
    }
}

/// Upper-case `original` when shift is active, lower-case otherwise.
pub fn cased_label(original: &str, shifted: bool) -> String {
    if shifted {
        original.to_uppercase()
    } else {
        original.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(labels: &[&str]) -> ShiftState {
        ShiftState::new(
            labels
                .iter()
                .enumerate()
                .map(|(i, l)| (KeyId::from_index(i), l.to_string()))
                .collect(),
        )
    }

    #[test]
    fn labels_follow_shift() {
        let mut shift = state(&["q", "w"]);
        shift.set(true);
        let labels: Vec<String> = shift.labels().map(|(_, l)| l).collect();
        assert_eq!(labels, ["Q", "W"]);

        shift.set(false);
        let labels: Vec<String> = shift.labels().map(|(_, l)| l).collect();
        assert_eq!(labels, ["q", "w"]);
    }

    #[test]
    fn toggle_pair_restores_originals() {
        let mut shift = state(&["a", "ß", "1"]);
        for _ in 0..3 {
            shift.set(true);
            shift.set(false);
        }
        let labels: Vec<String> = shift.labels().map(|(_, l)| l).collect();
        assert_eq!(labels, ["a", "ß", "1"]);
    }

    #[test]
    fn set_reports_changes() {
        let mut shift = ShiftState::default();
        assert!(!shift.set(false));
        assert!(shift.set(true));
        assert!(!shift.set(true));
        assert!(shift.is_active());
    }
}
