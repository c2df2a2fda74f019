//! Edit targets and active-target tracking.
//!
//! An edit target is an element owned by the host page. The keyboard only
//! keeps a handle to it, and the host may unmount it between any two events,
//! so the handle is checked for liveness before every use.

use crate::selection::SelectionRange;

/// Trait defining what the keyboard needs from a host-page text field.
///
/// Offsets are UTF-8 byte offsets into the value returned by [`value`].
/// Integration layers whose native API uses another unit (the DOM uses UTF-16
/// code units) convert at this boundary.
///
/// [`value`]: EditTarget::value
pub trait EditTarget {
    // =========================================================================
    // Identity & Liveness
    // =========================================================================

    /// Returns `true` if the element is still attached to the live document.
    fn is_connected(&self) -> bool;

    /// Returns `true` if the element matches the host's eligibility selector.
    fn matches(&self, selector: &str) -> bool;

    /// Short human-readable description for log output.
    fn describe(&self) -> String {
        String::from("<target>")
    }

    // =========================================================================
    // Value & Selection
    // =========================================================================

    /// Current text value.
    fn value(&self) -> String;

    /// Current selection, or `None` if this kind of element has no
    /// selection API.
    fn selection(&self) -> Option<SelectionRange>;

    /// Overwrite the text value.
    fn set_value(&mut self, value: &str);

    /// Move the native selection. Returns `false` if unsupported.
    fn set_selection(&mut self, range: SelectionRange) -> bool;

    // =========================================================================
    // Notifications & Focus
    // =========================================================================

    /// Tell host-page listeners that the value changed.
    fn notify_changed(&mut self);

    /// Move focus back to the element without scrolling the page.
    fn focus_without_scroll(&mut self);
}

/// Tracks the single active edit target.
///
/// `T` is usually a cheap handle (a cloned DOM reference, an index into a
/// test arena). The tracker never assumes the handle stays valid.
#[derive(Debug)]
pub struct TargetTracker<T> {
    selector: String,
    active: Option<T>,
}

impl<T: EditTarget> TargetTracker<T> {
    /// Create a tracker accepting elements that match `selector`.
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            active: None,
        }
    }

    /// Called for every page-level focus change.
    ///
    /// Returns `true` if the element was eligible and is now the active
    /// target; ineligible elements leave the current target untouched.
    pub fn on_focus(&mut self, element: T) -> bool {
        if !element.matches(&self.selector) {
            return false;
        }
        self.active = Some(element);
        true
    }

    /// The active target, if it is still attached.
    ///
    /// A detached target is dropped so later calls stay cheap.
    pub fn active(&mut self) -> Option<&mut T> {
        if self.active.as_ref().is_some_and(|t| !t.is_connected()) {
            self.active = None;
        }
        self.active.as_mut()
    }

    /// Returns `true` if a live target is active. Revalidates like [`active`].
    ///
    /// [`active`]: TargetTracker::active
    pub fn has_active(&mut self) -> bool {
        self.active().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone)]
    struct Probe {
        class: &'static str,
        connected: Rc<Cell<bool>>,
    }

    impl Probe {
        fn new(class: &'static str) -> Self {
            Self {
                class,
                connected: Rc::new(Cell::new(true)),
            }
        }
    }

    impl EditTarget for Probe {
        fn is_connected(&self) -> bool {
            self.connected.get()
        }
        fn matches(&self, selector: &str) -> bool {
            selector.strip_prefix('.') == Some(self.class)
        }
        fn value(&self) -> String {
            String::new()
        }
        fn selection(&self) -> Option<SelectionRange> {
            None
        }
        fn set_value(&mut self, _value: &str) {}
        fn set_selection(&mut self, _range: SelectionRange) -> bool {
            false
        }
        fn notify_changed(&mut self) {}
        fn focus_without_scroll(&mut self) {}
    }

    #[test]
    fn eligible_focus_becomes_active() {
        let mut tracker = TargetTracker::new(".osk");
        assert!(tracker.on_focus(Probe::new("osk")));
        assert!(tracker.has_active());
    }

    #[test]
    fn ineligible_focus_keeps_previous_target() {
        let mut tracker = TargetTracker::new(".osk");
        let first = Probe::new("osk");
        let marker = first.connected.clone();
        tracker.on_focus(first);

        assert!(!tracker.on_focus(Probe::new("plain")));
        let active = tracker.active().expect("first target stays active");
        assert!(Rc::ptr_eq(&active.connected, &marker));
    }

    #[test]
    fn detached_target_is_dropped_on_access() {
        let mut tracker = TargetTracker::new(".osk");
        let probe = Probe::new("osk");
        let connected = probe.connected.clone();
        tracker.on_focus(probe);

        connected.set(false);
        assert!(tracker.active().is_none());

        // Reattaching the element does not resurrect the forgotten handle.
        connected.set(true);
        assert!(!tracker.has_active());
    }

    #[test]
    fn refocus_replaces_active_target() {
        let mut tracker = TargetTracker::new(".osk");
        tracker.on_focus(Probe::new("osk"));
        let second = Probe::new("osk");
        let marker = second.connected.clone();
        tracker.on_focus(second);

        let active = tracker.active().unwrap();
        assert!(Rc::ptr_eq(&active.connected, &marker));
    }
}
