//! # keyboard_core
//!
//! UI-agnostic model of the on-screen keyboard.
//!
//! This crate provides the building blocks the widget layer wires to a host:
//! - [`apply_edit`]: where typed text goes relative to the caret/selection
//! - [`EditTarget`] / [`TargetTracker`]: the active text field and its liveness
//! - [`resolve`]: key identity to [`Command`]
//! - [`ShiftState`], [`PanelSwitcher`], [`DragController`]: presentational state
//!
//! ## Design Principles
//!
//! This crate does not depend on any DOM binding, event API or logging
//! backend. Everything here is a pure state transition that can be tested
//! without a browser. Offsets are UTF-8 byte offsets on character boundaries.

mod drag;
mod edit;
mod id;
mod keys;
mod panel;
mod selection;
mod shift;
mod target;
mod text;

pub use drag::{DragController, DragMove, Point};
pub use edit::{Edit, EditCommand, apply_edit};
pub use id::KeyId;
pub use keys::{Command, KeyDescriptor, KeyKind, KeyRole, resolve};
pub use panel::{Panel, PanelSwitcher, UnknownPanel};
pub use selection::SelectionRange;
pub use shift::{ShiftState, cased_label};
pub use target::{EditTarget, TargetTracker};
pub use text::{clamp_to_char_boundary, prev_char_boundary};
