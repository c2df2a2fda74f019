use keyboard_core::{KeyId, Panel, Point};
use web_sys::{Element, HtmlElement};
use widget::KeyboardHost;

const LOG_TARGET: &str = "keyboard.dom";

/// The keyboard markup, as found at mount time.
pub struct DomHost {
    pub(crate) container: HtmlElement,
    pub(crate) alphabet_panel: Option<HtmlElement>,
    pub(crate) symbols_panel: Option<HtmlElement>,
    pub(crate) shift_key: Option<Element>,
    pub(crate) shift_active_class: String,
    /// Indexed by `KeyId`.
    pub(crate) letter_keys: Vec<Element>,
}

impl DomHost {
    fn panel(&self, panel: Panel) -> Option<&HtmlElement> {
        match panel {
            Panel::Alphabet => self.alphabet_panel.as_ref(),
            Panel::Symbols => self.symbols_panel.as_ref(),
        }
    }
}

fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = el.style().set_property(property, value) {
        log::warn!(target: LOG_TARGET, "cannot set {property}: {err:?}");
    }
}

impl KeyboardHost for DomHost {
    fn set_visible(&mut self, visible: bool) {
        set_style(
            &self.container,
            "display",
            if visible { "block" } else { "none" },
        );
    }

    fn show_panel(&mut self, panel: Panel) {
        // Hide first so the two panels are never shown together.
        if let Some(other) = self.panel(panel.other()) {
            set_style(other, "display", "none");
        }
        if let Some(shown) = self.panel(panel) {
            set_style(shown, "display", "block");
        }
    }

    fn set_key_label(&mut self, key: KeyId, label: &str) {
        if let Some(el) = self.letter_keys.get(key.index()) {
            el.set_text_content(Some(label));
        }
    }

    fn set_shift_marker(&mut self, active: bool) {
        let Some(shift) = &self.shift_key else {
            return;
        };
        if let Err(err) = shift
            .class_list()
            .toggle_with_force(&self.shift_active_class, active)
        {
            log::warn!(target: LOG_TARGET, "cannot toggle shift marker: {err:?}");
        }
    }

    fn overlay_origin(&self) -> Point {
        Point::new(
            f64::from(self.container.offset_left()),
            f64::from(self.container.offset_top()),
        )
    }

    fn detach_overlay(&mut self) {
        set_style(&self.container, "bottom", "auto");
        set_style(&self.container, "transform", "none");
    }

    fn move_overlay(&mut self, left: f64, top: f64) {
        set_style(&self.container, "left", &format!("{left}px"));
        set_style(&self.container, "top", &format!("{top}px"));
    }
}
