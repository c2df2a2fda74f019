use keyboard_core::{EditTarget, SelectionRange};
use tools::{byte_to_utf16_offset, utf16_to_byte_offset};
use wasm_bindgen::JsCast;
use web_sys::{
    Event, EventInit, EventTarget, FocusOptions, HtmlElement, HtmlInputElement,
    HtmlTextAreaElement,
};

/// A text field on the host page.
///
/// Holds a JS reference only; the page keeps ownership and may remove the
/// element at any time, which [`EditTarget::is_connected`] reports.
#[derive(Clone, Debug)]
pub enum DomTarget {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl DomTarget {
    /// Wrap an event target if it is a text-bearing form control.
    pub fn from_event_target(target: Option<EventTarget>) -> Option<Self> {
        let target = target?;
        if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
            return Some(DomTarget::Input(input.clone()));
        }
        target.dyn_into::<HtmlTextAreaElement>().ok().map(DomTarget::TextArea)
    }

    pub fn element(&self) -> &HtmlElement {
        match self {
            DomTarget::Input(el) => el,
            DomTarget::TextArea(el) => el,
        }
    }

    /// Raw `selectionStart`/`selectionEnd` in UTF-16 code units.
    ///
    /// Input types without a selection API either throw or report `null`;
    /// both come back as `None`.
    fn raw_selection(&self) -> Option<(u32, u32)> {
        let (start, end) = match self {
            DomTarget::Input(el) => (el.selection_start(), el.selection_end()),
            DomTarget::TextArea(el) => (el.selection_start(), el.selection_end()),
        };
        let start = start.ok().flatten()?;
        let end = end.ok().flatten().unwrap_or(start);
        Some((start, end))
    }
}

impl EditTarget for DomTarget {
    fn is_connected(&self) -> bool {
        self.element().is_connected()
    }

    fn matches(&self, selector: &str) -> bool {
        self.element().matches(selector).unwrap_or(false)
    }

    fn describe(&self) -> String {
        let el = self.element();
        let id = el.id();
        if id.is_empty() {
            format!("<{}>", el.tag_name().to_lowercase())
        } else {
            format!("<{}#{id}>", el.tag_name().to_lowercase())
        }
    }

    fn value(&self) -> String {
        match self {
            DomTarget::Input(el) => el.value(),
            DomTarget::TextArea(el) => el.value(),
        }
    }

    fn selection(&self) -> Option<SelectionRange> {
        let (start, end) = self.raw_selection()?;
        let value = self.value();
        Some(SelectionRange::new(
            utf16_to_byte_offset(&value, start as usize),
            utf16_to_byte_offset(&value, end as usize),
        ))
    }

    fn set_value(&mut self, value: &str) {
        match self {
            DomTarget::Input(el) => el.set_value(value),
            DomTarget::TextArea(el) => el.set_value(value),
        }
    }

    fn set_selection(&mut self, range: SelectionRange) -> bool {
        let value = self.value();
        let start = byte_to_utf16_offset(&value, range.start) as u32;
        let end = byte_to_utf16_offset(&value, range.end) as u32;
        let res = match self {
            DomTarget::Input(el) => el.set_selection_range(start, end),
            DomTarget::TextArea(el) => el.set_selection_range(start, end),
        };
        res.is_ok()
    }

    fn notify_changed(&mut self) {
        let init = EventInit::new();
        init.set_bubbles(true);
        let dispatched = Event::new_with_event_init_dict("input", &init)
            .and_then(|event| self.element().dispatch_event(&event));
        if let Err(err) = dispatched {
            log::warn!(target: "keyboard.dom", "input event not dispatched: {err:?}");
        }
    }

    fn focus_without_scroll(&mut self) {
        let options = FocusOptions::new();
        options.set_prevent_scroll(true);
        if let Err(err) = self.element().focus_with_options(&options) {
            log::trace!(target: "keyboard.dom", "refocus failed: {err:?}");
        }
    }
}
