//! How the page's key elements map onto keyboard roles.
//!
//! The adapter reads what it can see on an element (its `id`, whether it
//! matches the shift selector, its text and `data-key`) and this module
//! decides what kind of key that is.

use crate::config::KeyboardConfig;
use keyboard_core::{KeyDescriptor, KeyId, KeyKind, Panel};

#[derive(Clone, Debug)]
pub struct KeyLayout {
    shift_selector: String,
    toggle_symbols_id: String,
    toggle_alphabet_id: String,
    pressable_selector: String,
}

impl KeyLayout {
    pub fn from_config(config: &KeyboardConfig) -> Self {
        let mut pressable = config.key_selector();
        for id in [&config.toggle_symbols_id, &config.toggle_alphabet_id] {
            if !id.is_empty() {
                pressable.push_str(", #");
                pressable.push_str(id);
            }
        }

        Self {
            shift_selector: config.shift_selector.clone(),
            toggle_symbols_id: config.toggle_symbols_id.clone(),
            toggle_alphabet_id: config.toggle_alphabet_id.clone(),
            pressable_selector: pressable,
        }
    }

    pub fn shift_selector(&self) -> &str {
        &self.shift_selector
    }

    /// Selector for every element that reacts to a press: keys, plus both
    /// panel toggles whatever their classes.
    pub fn pressable_selector(&self) -> &str {
        &self.pressable_selector
    }

    /// Kind of the element with `id`. Toggle ids win over the shift selector.
    pub fn kind_of(&self, id: &str, matches_shift: bool) -> KeyKind {
        // Unnamed elements never match an unset toggle id.
        let is = |toggle_id: &str| !id.is_empty() && id == toggle_id;
        if is(&self.toggle_symbols_id) {
            KeyKind::PanelToggle(Panel::Symbols)
        } else if is(&self.toggle_alphabet_id) {
            KeyKind::PanelToggle(Panel::Alphabet)
        } else if matches_shift {
            KeyKind::Shift
        } else {
            KeyKind::Regular
        }
    }

    /// Describe a pressed element from its visible attributes.
    pub fn describe(
        &self,
        id: &str,
        matches_shift: bool,
        label: String,
        code: Option<String>,
    ) -> KeyDescriptor {
        KeyDescriptor {
            label,
            code,
            kind: self.kind_of(id, matches_shift),
        }
    }
}

/// Number the keys re-cased by shift, skipping the shift key itself.
///
/// `keys` are the alphabet-panel keys in document order with their original
/// labels. Returns the kept elements (indexed by [`KeyId`]) and the id/label
/// pairs the widget starts from.
pub fn letter_keys<E>(
    keys: impl IntoIterator<Item = (E, String)>,
    is_shift: impl Fn(&E) -> bool,
) -> (Vec<E>, Vec<(KeyId, String)>) {
    let mut elements = Vec::new();
    let mut originals = Vec::new();
    for (el, label) in keys {
        if is_shift(&el) {
            continue;
        }
        originals.push((KeyId::from_index(elements.len()), label));
        elements.push(el);
    }
    (elements, originals)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> KeyLayout {
        KeyLayout::from_config(&KeyboardConfig::default())
    }

    #[test]
    fn toggles_are_pressable_without_the_key_class() {
        assert_eq!(
            layout().pressable_selector(),
            ".key, #toggle-symbols-btn, #toggle-alphabet-btn"
        );
    }

    #[test]
    fn empty_toggle_ids_stay_out_of_the_selector() {
        let config = KeyboardConfig {
            toggle_alphabet_id: String::new(),
            ..KeyboardConfig::default()
        };
        let layout = KeyLayout::from_config(&config);
        assert_eq!(layout.pressable_selector(), ".key, #toggle-symbols-btn");
        assert_eq!(layout.kind_of("", false), KeyKind::Regular);
    }

    #[test]
    fn classifies_by_id_then_shift() {
        let layout = layout();
        assert_eq!(
            layout.kind_of("toggle-symbols-btn", false),
            KeyKind::PanelToggle(Panel::Symbols)
        );
        assert_eq!(
            layout.kind_of("toggle-alphabet-btn", true),
            KeyKind::PanelToggle(Panel::Alphabet)
        );
        assert_eq!(layout.kind_of("", true), KeyKind::Shift);
        assert_eq!(layout.kind_of("key-q", false), KeyKind::Regular);
    }

    #[test]
    fn describe_keeps_label_and_code() {
        let key = layout().describe("", false, "⌫".into(), Some("backspace".into()));
        assert_eq!(key.label, "⌫");
        assert_eq!(key.code.as_deref(), Some("backspace"));
        assert_eq!(key.kind, KeyKind::Regular);
    }

    #[test]
    fn letter_keys_skip_shift_and_number_densely() {
        let keys = [("q", "q"), ("shift", "⇧"), ("w", "w")]
            .map(|(el, label)| (el, label.to_string()));
        let (elements, originals) = letter_keys(keys, |el| *el == "shift");

        assert_eq!(elements, ["q", "w"]);
        assert_eq!(
            originals,
            [
                (KeyId::from_index(0), "q".to_string()),
                (KeyId::from_index(1), "w".to_string()),
            ]
        );
    }
}
