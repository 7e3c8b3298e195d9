//! Browser Scheduler
//!
//! Engine timers on `setTimeout` (via gloo-timers) and tasks on the Leptos
//! local executor.

use std::time::Duration;

use futures::future::LocalBoxFuture;
use todo_engine::Scheduler;

pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(gloo_timers::future::sleep(duration))
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        leptos::task::spawn_local(task);
    }
}
