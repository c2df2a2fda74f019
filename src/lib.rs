//! JavaScript entry point for the on-screen keyboard.
//!
//! ```js
//! import init, { mountKeyboard } from "./vkeyboard.js";
//! await init();
//! const keyboard = mountKeyboard(null); // reads data-keyboard-config
//! ```

use js_sys::{Object, Reflect};
use platform::MountedKeyboard;
use wasm_bindgen::prelude::*;
use widget::{KeyboardConfig, WidgetState};

/// A mounted keyboard, as seen from JavaScript.
#[wasm_bindgen]
pub struct Keyboard {
    inner: Option<MountedKeyboard>,
}

#[wasm_bindgen]
impl Keyboard {
    pub fn show(&self) {
        if let Some(inner) = &self.inner {
            inner.show();
        }
    }

    pub fn hide(&self) {
        if let Some(inner) = &self.inner {
            inner.hide();
        }
    }

    /// Remove every listener. The markup is left as it is.
    pub fn unmount(&mut self) {
        if let Some(inner) = self.inner.take() {
            inner.unmount();
        }
    }

    /// Plain object with the current keyboard state, or `null` once unmounted.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        match self.inner.as_ref().and_then(MountedKeyboard::state) {
            Some(state) => state_to_js(&state),
            None => Ok(JsValue::NULL),
        }
    }
}

/// Mount the keyboard on the current page.
///
/// `config_json` overrides the container's `data-keyboard-config` attribute.
/// Returns `undefined` when the page has no keyboard container.
#[wasm_bindgen(js_name = mountKeyboard)]
pub fn mount_keyboard(config_json: Option<String>) -> Result<Option<Keyboard>, JsValue> {
    let config = config_json
        .as_deref()
        .map(KeyboardConfig::from_json)
        .transpose()
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    let mounted = platform::mount(config).map_err(|err| {
        log::error!(target: "keyboard.dom", "mount failed: {err}");
        JsValue::from_str(&err.to_string())
    })?;

    Ok(mounted.map(|inner| Keyboard { inner: Some(inner) }))
}

fn state_to_js(state: &WidgetState) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    Reflect::set(&obj, &"visible".into(), &state.visible.into())?;
    Reflect::set(&obj, &"panel".into(), &state.panel.as_str().into())?;
    Reflect::set(&obj, &"shiftActive".into(), &state.shift_active.into())?;
    Reflect::set(&obj, &"dragging".into(), &state.dragging.into())?;
    Reflect::set(&obj, &"hasTarget".into(), &state.has_target.into())?;

    let position = match state.position {
        Some(point) => {
            let pos = Object::new();
            Reflect::set(&pos, &"left".into(), &point.x.into())?;
            Reflect::set(&pos, &"top".into(), &point.y.into())?;
            JsValue::from(pos)
        }
        None => JsValue::NULL,
    };
    Reflect::set(&obj, &"position".into(), &position)?;

    Ok(obj.into())
}
