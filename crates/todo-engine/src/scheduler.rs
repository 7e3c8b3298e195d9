//! Timer and task seam.
//!
//! The engine never touches a concrete runtime. The browser build plugs in
//! `gloo-timers`; tests use tokio's paused clock.

use std::time::Duration;

use futures::future::LocalBoxFuture;

pub trait Scheduler {
    /// Resolve after `duration` has elapsed
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;

    /// Run `task` on the current event loop without awaiting it
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}
