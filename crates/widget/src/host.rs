//! The surface the keyboard draws its state onto.

use keyboard_core::{KeyId, Panel, Point};

/// Presentational side of the keyboard, owned by the host page.
///
/// The widget decides *what* changes; implementors apply it to their
/// structure (DOM styles and classes in the browser, plain fields in tests).
/// None of these calls can fail from the widget's point of view.
pub trait KeyboardHost {
    /// Show or hide the whole overlay.
    fn set_visible(&mut self, visible: bool);

    /// Show `panel` and hide the other one.
    fn show_panel(&mut self, panel: Panel);

    /// Replace the label displayed on a letter key.
    fn set_key_label(&mut self, key: KeyId, label: &str);

    /// Toggle the "active" marker on the shift key.
    fn set_shift_marker(&mut self, active: bool);

    /// Current top-left of the overlay, relative to its positioning parent.
    fn overlay_origin(&self) -> Point;

    /// Drop bottom anchoring and transform positioning so explicit
    /// `left`/`top` coordinates take effect.
    fn detach_overlay(&mut self);

    /// Place the overlay's top-left corner.
    fn move_overlay(&mut self, left: f64, top: f64);
}
