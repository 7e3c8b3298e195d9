//! Transient Notification Channel
//!
//! Holds at most one error notice. Each `show` replaces the current one and
//! restarts the hide timer; a stale timer finds a newer generation and leaves
//! the banner alone.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::error::NoticeKind;
use crate::observer::{Change, Observers};
use crate::scheduler::Scheduler;

#[derive(Default)]
struct NoticeState {
    current: Option<NoticeKind>,
    generation: u64,
}

#[derive(Clone)]
pub struct NoticeChannel {
    state: Rc<RefCell<NoticeState>>,
    scheduler: Rc<dyn Scheduler>,
    observers: Observers,
    duration: Duration,
}

impl NoticeChannel {
    pub fn new(scheduler: Rc<dyn Scheduler>, observers: Observers, duration: Duration) -> Self {
        Self {
            state: Rc::default(),
            scheduler,
            observers,
            duration,
        }
    }

    pub fn current(&self) -> Option<NoticeKind> {
        self.state.borrow().current
    }

    pub fn show(&self, kind: NoticeKind) {
        let generation = {
            let mut state = self.state.borrow_mut();
            state.generation += 1;
            state.current = Some(kind);
            state.generation
        };
        tracing::debug!(?kind, generation, "showing notice");
        self.observers.emit(Change::Notice);

        let state = self.state.clone();
        let observers = self.observers.clone();
        let elapsed = self.scheduler.sleep(self.duration);
        self.scheduler.spawn(Box::pin(async move {
            elapsed.await;
            let cleared = {
                let mut state = state.borrow_mut();
                if state.generation == generation {
                    state.current = None;
                    true
                } else {
                    false
                }
            };
            if cleared {
                observers.emit(Change::Notice);
            }
        }));
    }

    /// Hide the banner now and cancel its pending timer
    pub fn dismiss(&self) {
        let had_notice = {
            let mut state = self.state.borrow_mut();
            state.generation += 1;
            state.current.take().is_some()
        };
        if had_notice {
            self.observers.emit(Change::Notice);
        }
    }
}
