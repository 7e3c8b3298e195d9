//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is a
//! read-only mirror of the engine, refreshed from its change events.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_engine::{Change, EntryState, FilterMode, Item, ItemId, NoticeKind, Summary, TodoEngine};

/// Mirror of the engine state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Full collection, including a provisional item while adding
    pub items: Vec<Item>,
    /// Items passing the current filter
    pub visible_items: Vec<Item>,
    /// Ids showing a loader
    pub in_flight: Vec<ItemId>,
    pub filter: FilterMode,
    pub entry: EntryState,
    pub notice: Option<NoticeKind>,
    pub summary: Summary,
}

impl AppState {
    pub fn from_engine(engine: &TodoEngine) -> Self {
        Self {
            items: engine.items(),
            visible_items: engine.visible_items(),
            in_flight: engine.in_flight_ids(),
            filter: engine.filter(),
            entry: engine.entry(),
            notice: engine.current_notice(),
            summary: engine.summary(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Copy the part of the engine state named by `change` into the store
pub fn store_sync(store: &AppStore, engine: &TodoEngine, change: Change) {
    match change {
        Change::Items => {
            *store.items().write() = engine.items();
            *store.visible_items().write() = engine.visible_items();
        }
        Change::Filter => {
            *store.filter().write() = engine.filter();
            *store.visible_items().write() = engine.visible_items();
        }
        Change::InFlight => *store.in_flight().write() = engine.in_flight_ids(),
        Change::Entry => *store.entry().write() = engine.entry(),
        Change::Notice => *store.notice().write() = engine.current_notice(),
        Change::Summary => *store.summary().write() = engine.summary(),
        Change::FocusEntry => {}
    }
}
