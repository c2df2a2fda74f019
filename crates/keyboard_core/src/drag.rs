//! Drag-to-reposition state machine.

/// A point in client (viewport) coordinates, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// New overlay position produced by a pointer move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragMove {
    pub left: f64,
    pub top: f64,
    /// Set on the first move of the widget's first drag: bottom anchoring and
    /// transform positioning must be cleared before `left`/`top` apply.
    pub detach: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum DragState {
    Idle,
    Dragging {
        /// Pointer position at pointer-down.
        start: Point,
        /// Overlay top-left at pointer-down.
        origin: Point,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragController {
    state: DragState,
    detached: bool,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

impl DragController {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
            detached: false,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Pointer pressed on the keyboard surface.
    ///
    /// Presses over a key never start a drag. Returns `true` if a drag began.
    pub fn pointer_down(&mut self, pointer: Point, over_key: bool, widget_origin: Point) -> bool {
        if over_key {
            return false;
        }
        self.state = DragState::Dragging {
            start: pointer,
            origin: widget_origin,
        };
        true
    }

    /// Pointer moved anywhere in the document.
    pub fn pointer_move(&mut self, pointer: Point) -> Option<DragMove> {
        let DragState::Dragging { start, origin } = self.state else {
            return None;
        };

        let detach = !self.detached;
        self.detached = true;

        Some(DragMove {
            left: origin.x + (pointer.x - start.x),
            top: origin.y + (pointer.y - start.y),
            detach,
        })
    }

    /// Pointer released anywhere in the document. Returns `true` if a drag
    /// ended.
    pub fn pointer_up(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = DragState::Idle;
        was_dragging
    }
}
