//! Shared ownership of the widget across DOM callbacks.
//!
//! Our own DOM writes (refocusing the target, dispatching `input`) make the
//! browser run other listeners synchronously while a handler still holds the
//! widget. Those calls are queued here and replayed, in order, once the
//! running handler is done.

use std::cell::RefCell;
use std::collections::VecDeque;

type Deferred<W> = Box<dyn FnOnce(&mut W)>;

pub(crate) struct WidgetCell<W> {
    widget: RefCell<W>,
    deferred: RefCell<VecDeque<Deferred<W>>>,
}

impl<W> WidgetCell<W> {
    pub(crate) fn new(widget: W) -> Self {
        Self {
            widget: RefCell::new(widget),
            deferred: RefCell::new(VecDeque::new()),
        }
    }

    /// Run `f` now, or `None` if a handler already holds the widget.
    ///
    /// For work that only makes sense against the current event (pointer
    /// positions, `preventDefault`).
    pub(crate) fn try_with<R>(&self, f: impl FnOnce(&mut W) -> R) -> Option<R> {
        let mut widget = self.widget.try_borrow_mut().ok()?;
        let out = f(&mut widget);
        self.drain(&mut widget);
        Some(out)
    }

    /// Run `f` now, or after the handler currently holding the widget.
    pub(crate) fn run_or_defer(&self, f: impl FnOnce(&mut W) + 'static) {
        match self.widget.try_borrow_mut() {
            Ok(mut widget) => {
                f(&mut widget);
                self.drain(&mut widget);
            }
            Err(_) => self.deferred.borrow_mut().push_back(Box::new(f)),
        }
    }

    fn drain(&self, widget: &mut W) {
        loop {
            let next = self.deferred.borrow_mut().pop_front();
            let Some(f) = next else {
                break;
            };
            f(widget);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_calls_run_after_the_outer_one() {
        let cell = WidgetCell::new(Vec::new());
        cell.try_with(|log: &mut Vec<u32>| {
            log.push(1);
            cell.run_or_defer(|log| log.push(3));
            cell.run_or_defer(|log| log.push(4));
            log.push(2);
        });
        assert_eq!(cell.try_with(|log| log.clone()), Some(vec![1, 2, 3, 4]));
    }

    #[test]
    fn nested_event_work_is_refused() {
        let cell = WidgetCell::new(0u32);
        let inner = cell.try_with(|_| cell.try_with(|n| *n += 1));
        assert_eq!(inner, Some(None));
        assert_eq!(cell.try_with(|n| *n), Some(0));
    }
}
