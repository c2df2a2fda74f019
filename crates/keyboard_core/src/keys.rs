//! Key identity and dispatch.
//!
//! A clicked key is described by what the host can see on it: the label it
//! currently shows, an optional explicit command code, and its structural
//! kind (ordinary key, the shift key, a panel toggle). [`resolve`] turns that
//! into a [`Command`].

use crate::edit::EditCommand;
use crate::panel::Panel;

/// Structural kind of a key, as laid out by the host page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum KeyKind {
    #[default]
    Regular,
    /// The designated shift key.
    Shift,
    /// Control switching to the given panel.
    PanelToggle(Panel),
}

/// Role of a key after looking at its command word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyRole {
    Character,
    Space,
    Backspace,
    Hide,
    Shift,
    PanelToggle(Panel),
}

/// Identity of a clicked key.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct KeyDescriptor {
    /// Label currently displayed on the key (already cased by shift).
    pub label: String,
    /// Explicit command code overriding the label.
    pub code: Option<String>,
    pub kind: KeyKind,
}

/// What a key press asks the widget to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Edit(EditCommand),
    ToggleShift,
    Hide,
    ShowPanel(Panel),
}

const HIDE_WORD: &str = "hide keyboard";
const BACKSPACE_WORD: &str = "backspace";
const SPACE_WORD: &str = "space";

impl KeyDescriptor {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            code: None,
            kind: KeyKind::Regular,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_kind(mut self, kind: KeyKind) -> Self {
        self.kind = kind;
        self
    }

    /// The explicit code if present and non-empty, else the label.
    pub fn command_word(&self) -> &str {
        match self.code.as_deref() {
            Some(code) if !code.is_empty() => code,
            _ => &self.label,
        }
    }

    /// Classify the key.
    ///
    /// Panel toggles win over everything so they never type. The fixed
    /// command words are checked before the shift kind, matching how the
    /// words are recognized on any key.
    pub fn role(&self) -> KeyRole {
        if let KeyKind::PanelToggle(panel) = self.kind {
            return KeyRole::PanelToggle(panel);
        }

        let word = self.command_word().to_lowercase();
        match word.as_str() {
            HIDE_WORD => KeyRole::Hide,
            BACKSPACE_WORD => KeyRole::Backspace,
            SPACE_WORD => KeyRole::Space,
            _ if self.kind == KeyKind::Shift => KeyRole::Shift,
            _ => KeyRole::Character,
        }
    }
}

/// Map a key to the command it triggers.
///
/// Unrecognized labels fall through to inserting the raw command word.
pub fn resolve(key: &KeyDescriptor) -> Command {
    match key.role() {
        KeyRole::PanelToggle(panel) => Command::ShowPanel(panel),
        KeyRole::Hide => Command::Hide,
        KeyRole::Backspace => Command::Edit(EditCommand::DeleteBackward),
        KeyRole::Space => Command::Edit(EditCommand::insert(" ")),
        KeyRole::Shift => Command::ToggleShift,
        KeyRole::Character => Command::Edit(EditCommand::insert(key.command_word())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_words_are_case_insensitive() {
        assert_eq!(resolve(&KeyDescriptor::new("Hide Keyboard")), Command::Hide);
        assert_eq!(
            resolve(&KeyDescriptor::new("BACKSPACE")),
            Command::Edit(EditCommand::DeleteBackward)
        );
        assert_eq!(
            resolve(&KeyDescriptor::new("Space")),
            Command::Edit(EditCommand::insert(" "))
        );
    }

    #[test]
    fn explicit_code_overrides_label() {
        let key = KeyDescriptor::new("⌫").with_code("backspace");
        assert_eq!(resolve(&key), Command::Edit(EditCommand::DeleteBackward));

        let key = KeyDescriptor::new("amp").with_code("&");
        assert_eq!(resolve(&key), Command::Edit(EditCommand::insert("&")));
    }

    #[test]
    fn empty_code_falls_back_to_label() {
        let key = KeyDescriptor::new("q").with_code("");
        assert_eq!(resolve(&key), Command::Edit(EditCommand::insert("q")));
    }

    #[test]
    fn characters_insert_raw_label() {
        assert_eq!(
            resolve(&KeyDescriptor::new("Q")),
            Command::Edit(EditCommand::insert("Q"))
        );
    }

    #[test]
    fn shift_key_toggles() {
        let key = KeyDescriptor::new("⇧").with_kind(KeyKind::Shift);
        assert_eq!(key.role(), KeyRole::Shift);
        assert_eq!(resolve(&key), Command::ToggleShift);
    }

    #[test]
    fn command_words_win_over_shift_kind() {
        let key = KeyDescriptor::new("space").with_kind(KeyKind::Shift);
        assert_eq!(key.role(), KeyRole::Space);
    }

    #[test]
    fn panel_toggles_never_type() {
        let key = KeyDescriptor::new("space").with_kind(KeyKind::PanelToggle(Panel::Symbols));
        assert_eq!(resolve(&key), Command::ShowPanel(Panel::Symbols));
    }
}
