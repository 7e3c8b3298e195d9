//! Application Context
//!
//! Engine handle and the entry field ref, provided via Leptos Context API.

use std::future::Future;

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_engine::TodoEngine;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The engine is `!Send`, so it lives in local storage
    engine: StoredValue<TodoEngine, LocalStorage>,
    /// The "What needs to be done?" input
    pub entry_ref: NodeRef<html::Input>,
}

impl AppContext {
    pub fn new(engine: TodoEngine, entry_ref: NodeRef<html::Input>) -> Self {
        Self {
            engine: StoredValue::new_local(engine),
            entry_ref,
        }
    }

    pub fn engine(&self) -> TodoEngine {
        self.engine.get_value()
    }

    pub fn try_engine(&self) -> Option<TodoEngine> {
        self.engine.try_get_value()
    }

    /// Run an engine intent on the event loop
    pub fn run<F, Fut>(&self, intent: F)
    where
        F: FnOnce(TodoEngine) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(intent(self.engine()));
    }

    pub fn focus_entry(&self) {
        if let Some(input) = self.entry_ref.get_untracked() {
            let _ = input.focus();
        }
    }
}
