//! Browser binding for the on-screen keyboard.
//!
//! [`mount`] finds the keyboard markup, builds a [`KeyboardWidget`] over it and
//! registers the page listeners. Everything stays attached until the returned
//! [`MountedKeyboard`] is dropped.

mod cell;
mod host;
mod listener;
mod logging;
mod target;

pub use host::DomHost;
pub use logging::init_logging;
pub use target::DomTarget;

use cell::WidgetCell;
use keyboard_core::{KeyId, Point};
use listener::EventListener;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, HtmlElement, MouseEvent};
use widget::{ConfigError, KeyLayout, KeyboardConfig, KeyboardWidget, WidgetState, letter_keys};

const LOG_TARGET: &str = "keyboard.dom";

/// Attribute on the container that may carry a JSON [`KeyboardConfig`].
pub const CONFIG_ATTRIBUTE: &str = "data-keyboard-config";

type Shared = WidgetCell<KeyboardWidget<DomHost, DomTarget>>;

#[derive(Debug)]
pub enum MountError {
    NoWindow,
    NoDocument,
    NotHtmlElement(String),
    Config(ConfigError),
    Dom(String),
}

impl MountError {
    pub(crate) fn from_js(err: JsValue) -> Self {
        MountError::Dom(err.as_string().unwrap_or_else(|| format!("{err:?}")))
    }
}

impl std::fmt::Display for MountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MountError::NoWindow => f.write_str("no global window"),
            MountError::NoDocument => f.write_str("window has no document"),
            MountError::NotHtmlElement(id) => write!(f, "#{id} is not an HTML element"),
            MountError::Config(err) => write!(f, "{err}"),
            MountError::Dom(msg) => write!(f, "DOM error: {msg}"),
        }
    }
}

impl std::error::Error for MountError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MountError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for MountError {
    fn from(err: ConfigError) -> Self {
        MountError::Config(err)
    }
}

/// A keyboard attached to the page. Dropping it removes every listener.
pub struct MountedKeyboard {
    shared: Rc<Shared>,
    _listeners: Vec<EventListener>,
}

impl MountedKeyboard {
    /// Current widget state, or `None` while an event handler is running.
    pub fn state(&self) -> Option<WidgetState> {
        self.shared.try_with(|w| w.state())
    }

    /// Show the overlay, after the running handler if called from one.
    pub fn show(&self) {
        self.shared.run_or_defer(|w| w.show());
    }

    /// Hide the overlay, after the running handler if called from one.
    pub fn hide(&self) {
        self.shared.run_or_defer(|w| w.hide());
    }

    pub fn unmount(self) {
        log::debug!(target: LOG_TARGET, "keyboard unmounted");
    }
}

/// Attach the keyboard to the current document.
///
/// With `config` unset, the container's `data-keyboard-config` attribute is
/// read, falling back to defaults. Returns `Ok(None)` when the page has no
/// keyboard container.
pub fn mount(config: Option<KeyboardConfig>) -> Result<Option<MountedKeyboard>, MountError> {
    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;

    let lookup = config.clone().unwrap_or_default();
    init_logging(lookup.level_filter()?);

    let Some(container) = document.get_element_by_id(&lookup.container_id) else {
        log::info!(
            target: LOG_TARGET,
            "no #{} on this page, keyboard not mounted",
            lookup.container_id
        );
        return Ok(None);
    };

    let config = match config {
        Some(config) => config,
        None => {
            let json = container.get_attribute(CONFIG_ATTRIBUTE);
            let config = KeyboardConfig::from_optional_json(json.as_deref())?;
            init_logging(config.level_filter()?);
            config
        }
    };
    config.validate()?;

    let container: HtmlElement = container
        .dyn_into()
        .map_err(|_| MountError::NotHtmlElement(config.container_id.clone()))?;

    let alphabet_panel = find_by_id(&container, &config.alphabet_panel_id)?;
    let symbols_panel = find_by_id(&container, &config.symbols_panel_id)?;
    let shift_key = container
        .query_selector(&config.shift_selector)
        .map_err(MountError::from_js)?;
    let (letter_keys, originals) = collect_letter_keys(&container, &config, shift_key.as_ref())?;
    let layout = Rc::new(KeyLayout::from_config(&config));

    let host = DomHost {
        container: container.clone(),
        alphabet_panel,
        symbols_panel,
        shift_key,
        shift_active_class: config.shift_active_class.clone(),
        letter_keys,
    };

    let shared = Rc::new(WidgetCell::new(KeyboardWidget::new(host, &config, originals)));

    let mut listeners = Vec::with_capacity(5);

    {
        let shared = shared.clone();
        listeners.push(EventListener::new(&document, "focusin", move |event: Event| {
            if let Some(target) = DomTarget::from_event_target(event.target()) {
                shared.run_or_defer(move |w| {
                    w.focus_in(target);
                });
            }
        })?);
    }

    {
        let shared = shared.clone();
        let layout = layout.clone();
        listeners.push(EventListener::new(&container, "mousedown", move |event: Event| {
            let Some(pointer) = client_point(&event) else {
                return;
            };
            let over_key = closest_pressable(&event, &layout).is_some();
            if over_key {
                // Keep focus in the text field.
                event.prevent_default();
            }
            let started = shared.try_with(|w| w.pointer_down(pointer, over_key));
            if started == Some(true) {
                event.prevent_default();
            }
        })?);
    }

    {
        let shared = shared.clone();
        let layout = layout.clone();
        let root = container.clone();
        listeners.push(EventListener::new(&container, "click", move |event: Event| {
            let Some(key) = closest_pressable(&event, &layout) else {
                return;
            };
            if !root.contains(Some(&key)) {
                return;
            }
            let descriptor = layout.describe(
                &key.id(),
                key.matches(layout.shift_selector()).unwrap_or(false),
                key.text_content().unwrap_or_default(),
                key.get_attribute("data-key"),
            );
            shared.run_or_defer(move |w| w.key_pressed(&descriptor));
        })?);
    }

    {
        let shared = shared.clone();
        listeners.push(EventListener::new(&document, "mousemove", move |event: Event| {
            if let Some(pointer) = client_point(&event) {
                shared.try_with(|w| w.pointer_move(pointer));
            }
        })?);
    }

    {
        let shared = shared.clone();
        listeners.push(EventListener::new(&document, "mouseup", move |_event: Event| {
            shared.try_with(|w| w.pointer_up());
        })?);
    }

    log::debug!(target: LOG_TARGET, "keyboard mounted on #{}", config.container_id);

    Ok(Some(MountedKeyboard {
        shared,
        _listeners: listeners,
    }))
}

fn client_point(event: &Event) -> Option<Point> {
    let mouse = event.dyn_ref::<MouseEvent>()?;
    Some(Point::new(
        f64::from(mouse.client_x()),
        f64::from(mouse.client_y()),
    ))
}

/// The key or panel toggle under the event target, if any.
fn closest_pressable(event: &Event, layout: &KeyLayout) -> Option<Element> {
    let el = event.target()?.dyn_into::<Element>().ok()?;
    el.closest(layout.pressable_selector()).ok().flatten()
}

fn find_by_id(container: &HtmlElement, id: &str) -> Result<Option<HtmlElement>, MountError> {
    let found = container
        .query_selector(&format!("#{id}"))
        .map_err(MountError::from_js)?;
    if found.is_none() {
        log::warn!(target: LOG_TARGET, "#{id} not found inside the keyboard");
    }
    Ok(found.and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

/// Alphabet-panel keys re-cased by shift, with their original labels.
///
/// The original label is cached in `data-original` the first time a key is
/// seen, so mounting again after shift was left on still starts from the
/// authored text, which the widget then writes back.
fn collect_letter_keys(
    container: &HtmlElement,
    config: &KeyboardConfig,
    shift_key: Option<&Element>,
) -> Result<(Vec<Element>, Vec<(KeyId, String)>), MountError> {
    let selector = format!("#{} {}", config.alphabet_panel_id, config.key_selector());
    let nodes = container
        .query_selector_all(&selector)
        .map_err(MountError::from_js)?;

    let keys = (0..nodes.length())
        .filter_map(|i| nodes.item(i)?.dyn_into::<HtmlElement>().ok())
        .map(|el| {
            let original = cached_original_label(&el);
            (Element::from(el), original)
        });
    Ok(letter_keys(keys, |el| {
        shift_key.is_some_and(|shift| shift.is_same_node(Some(el)))
    }))
}

fn cached_original_label(el: &HtmlElement) -> String {
    let dataset = el.dataset();
    if let Some(original) = dataset.get("original") {
        return original;
    }
    let text = el.text_content().unwrap_or_default();
    if let Err(err) = dataset.set("original", &text) {
        log::warn!(target: LOG_TARGET, "cannot cache key label: {err:?}");
    }
    text
}
