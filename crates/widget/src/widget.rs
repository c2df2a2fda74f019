use crate::config::KeyboardConfig;
use crate::host::KeyboardHost;
use keyboard_core::{
    Command, DragController, EditCommand, EditTarget, KeyDescriptor, KeyId, KeyRole, Panel,
    PanelSwitcher, Point, SelectionRange, ShiftState, TargetTracker, apply_edit, resolve,
};

const LOG_TARGET: &str = "keyboard.widget";

/// Snapshot of the keyboard's observable state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WidgetState {
    pub visible: bool,
    pub panel: Panel,
    pub shift_active: bool,
    pub dragging: bool,
    /// Explicit overlay position, set once the keyboard has been dragged.
    pub position: Option<Point>,
    pub has_target: bool,
}

/// One keyboard instance: the active target plus shift, panel, visibility and
/// drag state.
///
/// All event handlers of a mounted keyboard go through one value of this type;
/// its lifetime is the keyboard's lifetime.
pub struct KeyboardWidget<H, T> {
    host: H,
    tracker: TargetTracker<T>,
    shift: ShiftState,
    panels: PanelSwitcher,
    drag: DragController,
    visible: bool,
    position: Option<Point>,
}

impl<H: KeyboardHost, T: EditTarget> KeyboardWidget<H, T> {
    /// Build the widget and push its initial state to the host.
    ///
    /// `letter_keys` are the keys re-cased by shift, with the original labels
    /// captured when the keyboard was set up. Their labels are rewritten for
    /// shift off, since the page may still show them shifted from an earlier
    /// instance.
    pub fn new(mut host: H, config: &KeyboardConfig, letter_keys: Vec<(KeyId, String)>) -> Self {
        let panels = PanelSwitcher::new(config.initial_panel);
        let shift = ShiftState::new(letter_keys);
        host.show_panel(panels.current());
        host.set_visible(config.start_visible);
        for (key, label) in shift.labels() {
            host.set_key_label(key, &label);
        }
        host.set_shift_marker(false);

        log::debug!(
            target: LOG_TARGET,
            "keyboard ready: {} letter keys, panel {}, visible {}",
            shift.labels().count(),
            panels.current(),
            config.start_visible
        );

        Self {
            host,
            tracker: TargetTracker::new(config.target_selector.clone()),
            shift,
            panels,
            drag: DragController::new(),
            visible: config.start_visible,
            position: None,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Current state. Revalidates the active target.
    pub fn state(&mut self) -> WidgetState {
        WidgetState {
            visible: self.visible,
            panel: self.panels.current(),
            shift_active: self.shift.is_active(),
            dragging: self.drag.is_dragging(),
            position: self.position,
            has_target: self.tracker.has_active(),
        }
    }

    // =========================================================================
    // Focus tracking
    // =========================================================================

    /// A page element received focus.
    ///
    /// Eligible elements become the active target and reveal the keyboard.
    pub fn focus_in(&mut self, element: T) -> bool {
        let description = element.describe();
        if !self.tracker.on_focus(element) {
            log::trace!(target: LOG_TARGET, "focus ignored: {description}");
            return false;
        }
        log::debug!(target: LOG_TARGET, "active target: {description}");
        self.show();
        true
    }

    // =========================================================================
    // Keys
    // =========================================================================

    /// A key was clicked.
    pub fn key_pressed(&mut self, key: &KeyDescriptor) {
        let role = key.role();
        match resolve(key) {
            Command::ShowPanel(panel) => self.show_panel(panel),
            Command::Hide => self.hide(),
            Command::ToggleShift => {
                let enabled = !self.shift.is_active();
                self.set_shift(enabled);
            }
            Command::Edit(edit) => {
                let inserted = self.edit(&edit);
                // One-shot shift: only a committed letter/symbol consumes it.
                if inserted && role == KeyRole::Character && self.shift.is_active() {
                    self.set_shift(false);
                }
            }
        }
    }

    /// Apply `command` to the active target.
    ///
    /// Returns `true` if the target's value was rewritten. Without a live
    /// target nothing happens.
    pub fn edit(&mut self, command: &EditCommand) -> bool {
        let Some(target) = self.tracker.active() else {
            log::debug!(target: LOG_TARGET, "no active target, dropping {command:?}");
            return false;
        };

        let value = target.value();
        let selection = target
            .selection()
            .unwrap_or_else(|| SelectionRange::end_of(&value));

        let committed = match apply_edit(&value, selection, command) {
            Some(edit) => {
                target.set_value(&edit.value);
                if !target.set_selection(edit.selection()) {
                    log::trace!(target: LOG_TARGET, "target has no selection API");
                }
                target.notify_changed();
                true
            }
            None => false,
        };

        target.focus_without_scroll();
        committed
    }

    // =========================================================================
    // Shift, panels, visibility
    // =========================================================================

    pub fn set_shift(&mut self, enabled: bool) {
        self.shift.set(enabled);
        for (key, label) in self.shift.labels() {
            self.host.set_key_label(key, &label);
        }
        self.host.set_shift_marker(enabled);
        log::debug!(target: LOG_TARGET, "shift {}", if enabled { "on" } else { "off" });
    }

    pub fn show_panel(&mut self, panel: Panel) {
        if self.panels.show(panel) {
            log::debug!(target: LOG_TARGET, "panel {panel}");
        }
        self.host.show_panel(panel);
    }

    pub fn show(&mut self) {
        if !self.visible {
            log::debug!(target: LOG_TARGET, "show keyboard");
        }
        self.visible = true;
        self.host.set_visible(true);
    }

    pub fn hide(&mut self) {
        if self.visible {
            log::debug!(target: LOG_TARGET, "hide keyboard");
        }
        self.visible = false;
        self.host.set_visible(false);
    }

    // =========================================================================
    // Dragging
    // =========================================================================

    /// Pointer pressed on the keyboard surface. Returns `true` if a drag began.
    pub fn pointer_down(&mut self, pointer: Point, over_key: bool) -> bool {
        let origin = self.host.overlay_origin();
        let started = self.drag.pointer_down(pointer, over_key, origin);
        if started {
            log::trace!(target: LOG_TARGET, "drag start at {pointer:?}, origin {origin:?}");
        }
        started
    }

    /// Pointer moved anywhere in the document. Returns `true` if the overlay
    /// moved.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        let Some(mv) = self.drag.pointer_move(pointer) else {
            return false;
        };
        if mv.detach {
            self.host.detach_overlay();
        }
        self.host.move_overlay(mv.left, mv.top);
        self.position = Some(Point::new(mv.left, mv.top));
        true
    }

    /// Pointer released anywhere in the document.
    pub fn pointer_up(&mut self) {
        if self.drag.pointer_up() {
            log::trace!(target: LOG_TARGET, "drag end at {:?}", self.position);
        }
    }
}
