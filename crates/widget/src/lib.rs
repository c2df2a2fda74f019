//! # widget
//!
//! The on-screen keyboard controller. [`KeyboardWidget`] owns the state of one
//! keyboard instance and translates focus, click and pointer events into edits
//! on the active [`EditTarget`](keyboard_core::EditTarget) and updates on a
//! [`KeyboardHost`].

mod config;
mod host;
mod layout;
mod widget;

pub use config::{ConfigError, KeyboardConfig};
pub use host::KeyboardHost;
pub use layout::{KeyLayout, letter_keys};
pub use widget::{KeyboardWidget, WidgetState};

pub use keyboard_core;
