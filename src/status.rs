//! Status Notifier
//!
//! Transient success/failure message with a single auto-hide timer.

use std::cell::RefCell;
use std::rc::Rc;

use crate::platform::{PendingTimer, Scheduler, StatusSink};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub message: String,
    pub success: bool,
    pub visible: bool,
}

impl Default for StatusView {
    fn default() -> Self {
        Self {
            message: String::new(),
            success: true,
            visible: false,
        }
    }
}

impl StatusView {
    pub fn background(&self) -> &'static str {
        if self.success {
            "rgba(12,30,60,0.95)"
        } else {
            "rgba(199,44,65,0.95)"
        }
    }
}

pub struct StatusNotifier {
    sink: Rc<dyn StatusSink>,
    scheduler: Rc<dyn Scheduler>,
    hide_after_ms: u32,
    pending: RefCell<Option<PendingTimer>>,
}

impl StatusNotifier {
    pub fn new(sink: Rc<dyn StatusSink>, scheduler: Rc<dyn Scheduler>, hide_after_ms: u32) -> Self {
        Self {
            sink,
            scheduler,
            hide_after_ms,
            pending: RefCell::new(None),
        }
    }

    /// Show `message` and (re)start the hide timer.
    pub fn notify(&self, message: &str, success: bool) {
        // Cancel before scheduling so two timers never coexist.
        drop(self.pending.borrow_mut().take());

        let shown = StatusView {
            message: message.to_string(),
            success,
            visible: true,
        };
        self.sink.set_status(shown.clone());

        let sink = Rc::clone(&self.sink);
        let timer = self.scheduler.schedule(
            self.hide_after_ms,
            Box::new(move || {
                sink.set_status(StatusView {
                    visible: false,
                    ..shown
                })
            }),
        );
        *self.pending.borrow_mut() = Some(timer);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Virtual-clock scheduler shared by the module tests.

    use super::*;
    use std::cell::Cell;

    struct Slot {
        due: u64,
        callback: Option<Box<dyn FnOnce()>>,
        cancelled: Rc<Cell<bool>>,
    }

    struct CancelOnDrop(Rc<Cell<bool>>);

    impl Drop for CancelOnDrop {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[derive(Default)]
    pub struct ManualScheduler {
        now: Cell<u64>,
        slots: RefCell<Vec<Slot>>,
    }

    impl ManualScheduler {
        pub fn advance(&self, ms: u64) {
            let target = self.now.get() + ms;
            loop {
                let next = {
                    let mut slots = self.slots.borrow_mut();
                    slots.retain(|slot| !slot.cancelled.get() && slot.callback.is_some());
                    let due = slots
                        .iter_mut()
                        .filter(|slot| slot.due <= target)
                        .min_by_key(|slot| slot.due)
                        .map(|slot| (slot.due, slot.callback.take()));
                    due
                };
                match next {
                    Some((due, Some(callback))) => {
                        self.now.set(due);
                        callback();
                    }
                    _ => break,
                }
            }
            self.now.set(target);
        }

        pub fn pending(&self) -> usize {
            self.slots
                .borrow()
                .iter()
                .filter(|slot| !slot.cancelled.get() && slot.callback.is_some())
                .count()
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> PendingTimer {
            let cancelled = Rc::new(Cell::new(false));
            self.slots.borrow_mut().push(Slot {
                due: self.now.get() + u64::from(delay_ms),
                callback: Some(callback),
                cancelled: Rc::clone(&cancelled),
            });
            PendingTimer::new(CancelOnDrop(cancelled))
        }
    }

    /// Records every status write together with the virtual time
    #[derive(Default)]
    pub struct StatusLog {
        pub entries: RefCell<Vec<StatusView>>,
    }

    impl StatusLog {
        pub fn last(&self) -> Option<StatusView> {
            self.entries.borrow().last().cloned()
        }

        pub fn hides(&self) -> usize {
            self.entries.borrow().iter().filter(|s| !s.visible).count()
        }
    }

    impl StatusSink for StatusLog {
        fn set_status(&self, status: StatusView) {
            self.entries.borrow_mut().push(status);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{ManualScheduler, StatusLog};
    use super::*;

    fn notifier() -> (StatusNotifier, Rc<StatusLog>, Rc<ManualScheduler>) {
        let log = Rc::new(StatusLog::default());
        let scheduler = Rc::new(ManualScheduler::default());
        let notifier = StatusNotifier::new(log.clone(), scheduler.clone(), 2_800);
        (notifier, log, scheduler)
    }

    #[test]
    fn test_notify_shows_then_hides() {
        let (notifier, log, scheduler) = notifier();
        notifier.notify("Saving...", true);

        let shown = log.last().unwrap();
        assert!(shown.visible);
        assert!(shown.success);
        assert_eq!(shown.message, "Saving...");

        scheduler.advance(2_799);
        assert!(log.last().unwrap().visible);

        scheduler.advance(1);
        let hidden = log.last().unwrap();
        assert!(!hidden.visible);
        assert_eq!(hidden.message, "Saving...");
    }

    #[test]
    fn test_new_status_replaces_pending_timer() {
        let (notifier, log, scheduler) = notifier();
        notifier.notify("Saving...", true);
        scheduler.advance(500);
        notifier.notify("locked", false);
        assert_eq!(scheduler.pending(), 1);

        // First timer would have fired at 2800.
        scheduler.advance(2_799);
        assert_eq!(log.hides(), 0);

        scheduler.advance(1);
        assert_eq!(log.hides(), 1);
        let hidden = log.last().unwrap();
        assert_eq!(hidden.message, "locked");
        assert!(!hidden.success);

        scheduler.advance(10_000);
        assert_eq!(log.hides(), 1);
    }

    #[test]
    fn test_failure_background() {
        let view = StatusView {
            message: "x".to_string(),
            success: false,
            visible: true,
        };
        assert_eq!(view.background(), "rgba(199,44,65,0.95)");
        assert_eq!(StatusView::default().background(), "rgba(12,30,60,0.95)");
    }
}
