//! Pure text-editing rules.
//!
//! [`apply_edit`] is a function of `(value, selection, command)` only. It never
//! touches a target; the caller reads the target, applies the returned
//! [`Edit`], and emits the change notification.

use crate::selection::SelectionRange;
use crate::text::prev_char_boundary;

/// A text mutation requested by a key press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditCommand {
    /// Replace the selection with text (a caret is an empty selection).
    Insert(String),
    /// Delete the character before the caret, or the selection if non-empty.
    DeleteBackward,
    /// Delete the selected text.
    DeleteSelection,
}

impl EditCommand {
    pub fn insert(text: impl Into<String>) -> Self {
        Self::Insert(text.into())
    }
}

/// Result of applying an [`EditCommand`]: the value to write back and where
/// the caret goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edit {
    pub value: String,
    /// Byte offset of the collapsed caret, always on a character boundary.
    pub caret: usize,
}

impl Edit {
    pub fn selection(&self) -> SelectionRange {
        SelectionRange::caret(self.caret)
    }
}

/// Compute the effect of `command` on `value` with the given selection.
///
/// The selection is clamped into `value` first, so stale offsets from the host
/// are tolerated. Returns `None` when the command changes nothing (backspace
/// at the very start with nothing selected); callers then skip the write-back
/// and the change notification.
///
/// # Examples
///
/// ```
/// use keyboard_core::{EditCommand, SelectionRange, apply_edit};
///
/// let edit = apply_edit("helloworld", SelectionRange::caret(5), &EditCommand::insert("_"))
///     .unwrap();
/// assert_eq!(edit.value, "hello_world");
/// assert_eq!(edit.caret, 6);
/// ```
pub fn apply_edit(value: &str, selection: SelectionRange, command: &EditCommand) -> Option<Edit> {
    let sel = selection.clamp_to(value);

    match command {
        EditCommand::Insert(text) => Some(splice(value, sel, text)),
        EditCommand::DeleteSelection => Some(splice(value, sel, "")),
        EditCommand::DeleteBackward => {
            if !sel.is_empty() {
                return Some(splice(value, sel, ""));
            }
            if sel.start == 0 {
                return None;
            }
            let prev = prev_char_boundary(value, sel.start);
            Some(splice(value, SelectionRange::new(prev, sel.end), ""))
        }
    }
}

fn splice(value: &str, sel: SelectionRange, text: &str) -> Edit {
    let mut out = String::with_capacity(value.len() - sel.len() + text.len());
    out.push_str(&value[..sel.start]);
    out.push_str(text);
    out.push_str(&value[sel.end..]);
    Edit {
        value: out,
        caret: sel.start + text.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(value: &str, start: usize, end: usize, command: EditCommand) -> Option<Edit> {
        apply_edit(value, SelectionRange::new(start, end), &command)
    }

    #[test]
    fn insert_at_caret() {
        let edit = run("helloworld", 5, 5, EditCommand::insert("_")).unwrap();
        assert_eq!(edit.value, "hello_world");
        assert_eq!(edit.caret, 6);
    }

    #[test]
    fn insert_replaces_selection() {
        let edit = run("hello", 1, 4, EditCommand::insert("EY")).unwrap();
        assert_eq!(edit.value, "hEYo");
        assert_eq!(edit.caret, 3);
    }

    #[test]
    fn insert_matches_splice_formula_for_every_selection() {
        let value = "ab€d";
        let bounds: Vec<usize> = value
            .char_indices()
            .map(|(i, _)| i)
            .chain([value.len()])
            .collect();

        for (i, &s) in bounds.iter().enumerate() {
            for &e in &bounds[i..] {
                let edit = run(value, s, e, EditCommand::insert("xy")).unwrap();
                assert_eq!(edit.value, format!("{}xy{}", &value[..s], &value[e..]));
                assert_eq!(edit.caret, s + 2);
                assert!(edit.caret <= edit.value.len());
            }
        }
    }

    #[test]
    fn delete_selection_keeps_prefix() {
        let edit = run("abc", 1, 3, EditCommand::DeleteSelection).unwrap();
        assert_eq!(edit.value, "a");
        assert_eq!(edit.caret, 1);
    }

    #[test]
    fn backspace_at_start_is_a_no_op() {
        assert_eq!(run("abc", 0, 0, EditCommand::DeleteBackward), None);
        assert_eq!(run("", 0, 0, EditCommand::DeleteBackward), None);
    }

    #[test]
    fn backspace_removes_one_character() {
        let edit = run("abc", 2, 2, EditCommand::DeleteBackward).unwrap();
        assert_eq!(edit.value, "ac");
        assert_eq!(edit.caret, 1);
    }

    #[test]
    fn backspace_removes_a_full_unicode_scalar_value() {
        let edit = run("a€", 4, 4, EditCommand::DeleteBackward).unwrap();
        assert_eq!(edit.value, "a");
        assert_eq!(edit.caret, 1);
    }

    #[test]
    fn backspace_with_selection_equals_delete_selection() {
        for (s, e) in [(0, 2), (1, 3), (0, 3)] {
            assert_eq!(
                run("abc", s, e, EditCommand::DeleteBackward),
                run("abc", s, e, EditCommand::DeleteSelection),
            );
        }
    }

    #[test]
    fn stale_selection_is_clamped_before_editing() {
        // Host reported offsets past the end: treated as caret at end.
        let edit = run("abc", 10, 12, EditCommand::insert("d")).unwrap();
        assert_eq!(edit.value, "abcd");
        assert_eq!(edit.caret, 4);
    }

    #[test]
    fn replaying_the_same_state_gives_the_same_edit() {
        let sel = SelectionRange::new(1, 2);
        let cmd = EditCommand::insert("Z");
        assert_eq!(apply_edit("abc", sel, &cmd), apply_edit("abc", sel, &cmd));
    }
}
