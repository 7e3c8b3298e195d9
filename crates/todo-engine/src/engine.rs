//! Optimistic Mutation Engine
//!
//! Owns the todo collection for one session. Every intent applies its local
//! change synchronously, then talks to the remote store, then reconciles or
//! rolls back. In-flight marks and the entry lock are released by drop guards,
//! so they clear on every exit path.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use futures::future::join_all;

use crate::config::EngineConfig;
use crate::error::{EngineError, NoticeKind};
use crate::filter::{project, FilterMode};
use crate::model::{Item, ItemId, ItemPatch, NewItem, PROVISIONAL_ID};
use crate::notice::NoticeChannel;
use crate::observer::{Change, Observers, Subscription};
use crate::remote::TodoRemote;
use crate::scheduler::Scheduler;
use crate::summary::{count_active, Summary};

/// The new-todo input field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryState {
    pub draft: String,
    /// False while an add is in flight
    pub enabled: bool,
}

impl Default for EntryState {
    fn default() -> Self {
        Self {
            draft: String::new(),
            enabled: true,
        }
    }
}

/// Per-item outcome of a bulk operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub succeeded: Vec<ItemId>,
    pub failed: Vec<ItemId>,
}

impl BatchReport {
    fn collect<T>(outcomes: Vec<(ItemId, Result<T, EngineError>)>) -> Self {
        let mut report = Self::default();
        for (id, outcome) in outcomes {
            match outcome {
                Ok(_) => report.succeeded.push(id),
                Err(_) => report.failed.push(id),
            }
        }
        report
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

#[derive(Default)]
struct EngineState {
    items: Vec<Item>,
    /// Pending request count per id
    in_flight: BTreeMap<ItemId, usize>,
    filter: FilterMode,
    entry: EntryState,
    active_count: usize,
    counter_generation: u64,
}

struct Inner {
    state: RefCell<EngineState>,
    remote: Rc<dyn TodoRemote>,
    scheduler: Rc<dyn Scheduler>,
    observers: Observers,
    notices: NoticeChannel,
    config: EngineConfig,
}

/// Handle to the session's todo state. Clones share the same state.
#[derive(Clone)]
pub struct TodoEngine {
    inner: Rc<Inner>,
}

impl TodoEngine {
    pub fn new(
        remote: Rc<dyn TodoRemote>,
        scheduler: Rc<dyn Scheduler>,
        config: EngineConfig,
    ) -> Self {
        let observers = Observers::new();
        let notices =
            NoticeChannel::new(scheduler.clone(), observers.clone(), config.notice_duration());
        Self {
            inner: Rc::new(Inner {
                state: RefCell::default(),
                remote,
                scheduler,
                observers,
                notices,
                config,
            }),
        }
    }

    // ========================
    // Read Surface
    // ========================

    pub fn items(&self) -> Vec<Item> {
        self.inner.state.borrow().items.clone()
    }

    pub fn item(&self, id: ItemId) -> Option<Item> {
        self.inner.state.borrow().items.iter().find(|item| item.id == id).cloned()
    }

    pub fn visible_items(&self) -> Vec<Item> {
        let state = self.inner.state.borrow();
        project(&state.items, state.filter)
    }

    pub fn in_flight_ids(&self) -> Vec<ItemId> {
        self.inner.state.borrow().in_flight.keys().copied().collect()
    }

    pub fn is_in_flight(&self, id: ItemId) -> bool {
        self.inner.state.borrow().in_flight.contains_key(&id)
    }

    pub fn filter(&self) -> FilterMode {
        self.inner.state.borrow().filter
    }

    pub fn entry(&self) -> EntryState {
        self.inner.state.borrow().entry.clone()
    }

    pub fn current_notice(&self) -> Option<NoticeKind> {
        self.inner.notices.current()
    }

    pub fn summary(&self) -> Summary {
        let state = self.inner.state.borrow();
        Summary::of(&state.items, state.active_count)
    }

    pub fn subscribe(&self, listener: impl Fn(Change) + 'static) -> Subscription {
        self.inner.observers.subscribe(listener)
    }

    // ========================
    // UI State
    // ========================

    pub fn set_filter(&self, mode: FilterMode) {
        let changed = {
            let mut state = self.inner.state.borrow_mut();
            std::mem::replace(&mut state.filter, mode) != mode
        };
        if changed {
            tracing::debug!(filter = mode.label(), "filter changed");
            self.inner.observers.emit(Change::Filter);
        }
    }

    pub fn set_draft(&self, text: impl Into<String>) {
        self.inner.state.borrow_mut().entry.draft = text.into();
        self.inner.observers.emit(Change::Entry);
    }

    pub fn dismiss_notice(&self) {
        self.inner.notices.dismiss();
    }

    // ========================
    // Intents
    // ========================

    /// Fetch the owner's todos, replacing the collection
    pub async fn load(&self) -> Result<(), EngineError> {
        match self.inner.remote.list().await {
            Ok(items) => {
                tracing::debug!(count = items.len(), "todos loaded");
                {
                    let mut state = self.inner.state.borrow_mut();
                    state.active_count = count_active(&items);
                    state.counter_generation += 1;
                    state.items = items;
                }
                self.inner.observers.emit(Change::Items);
                self.inner.observers.emit(Change::Summary);
                Ok(())
            }
            Err(err) => Err(self.fail(EngineError::Load(err))),
        }
    }

    /// Add the current draft
    pub async fn submit(&self) -> Result<Item, EngineError> {
        let draft = self.entry().draft;
        self.add(&draft).await
    }

    pub async fn add(&self, title: &str) -> Result<Item, EngineError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(self.fail(EngineError::Validation));
        }
        if !self.inner.state.borrow().entry.enabled {
            return Err(EngineError::AddInFlight);
        }

        self.set_entry_enabled(false);
        let _settle = OnSettle {
            engine: self.clone(),
            reopen_entry: true,
        };
        let provisional = Item::provisional(self.inner.config.owner_id, title);
        self.update_items(|items| items.push(provisional));
        let _in_flight = self.mark_in_flight(PROVISIONAL_ID);

        let draft = NewItem {
            owner_id: self.inner.config.owner_id,
            title: title.to_string(),
            completed: false,
        };
        match self.inner.remote.create(&draft).await {
            Ok(created) => {
                tracing::debug!(id = created.id, "todo created");
                let canonical = created.clone();
                self.update_items(move |items| {
                    if let Some(slot) = items.iter_mut().find(|item| item.is_provisional()) {
                        *slot = canonical;
                    }
                });
                self.set_draft(String::new());
                Ok(created)
            }
            Err(err) => {
                self.update_items(|items| items.retain(|item| !item.is_provisional()));
                Err(self.fail(EngineError::Add(err)))
            }
        }
    }

    pub async fn delete(&self, id: ItemId) -> Result<(), EngineError> {
        if id == PROVISIONAL_ID {
            return Err(EngineError::UnknownItem(id));
        }
        let _settle = OnSettle {
            engine: self.clone(),
            reopen_entry: false,
        };
        let _in_flight = self.mark_in_flight(id);

        match self.inner.remote.delete(id).await {
            Ok(()) => {
                tracing::debug!(id, "todo deleted");
                self.update_items(|items| items.retain(|item| item.id != id));
                Ok(())
            }
            Err(err) => Err(self.fail(EngineError::Delete(err))),
        }
    }

    /// Send `patch` merged over the local record after the settling delay.
    ///
    /// Unlike the other intents the failure matters to callers: a rename
    /// stays in edit mode and bulk operations count it.
    pub async fn update(&self, id: ItemId, patch: ItemPatch) -> Result<Item, EngineError> {
        let mut patch = patch;
        if !patch.normalize() {
            return Err(self.fail(EngineError::Validation));
        }
        let current = self
            .item(id)
            .filter(|item| !item.is_provisional())
            .ok_or(EngineError::UnknownItem(id))?;

        let _in_flight = self.mark_in_flight(id);
        self.inner.scheduler.sleep(self.inner.config.settle_delay()).await;

        let body = patch.merged_over(&current);
        match self.inner.remote.update(id, &body).await {
            Ok(updated) => {
                tracing::debug!(id, completed = updated.completed, "todo updated");
                let canonical = updated.clone();
                self.update_items(move |items| {
                    if let Some(slot) = items.iter_mut().find(|item| item.id == id) {
                        *slot = canonical;
                    }
                });
                Ok(updated)
            }
            Err(err) => Err(self.fail(EngineError::Update(err))),
        }
    }

    pub async fn toggle(&self, id: ItemId) -> Result<Item, EngineError> {
        let item = self.item(id).ok_or(EngineError::UnknownItem(id))?;
        self.update(id, ItemPatch::completed(!item.completed)).await
    }

    /// Rename to the trimmed `title`; an unchanged title sends nothing
    pub async fn rename(&self, id: ItemId, title: &str) -> Result<Item, EngineError> {
        let item = self.item(id).ok_or(EngineError::UnknownItem(id))?;
        if item.title == title.trim() {
            return Ok(item);
        }
        self.update(id, ItemPatch::title(title)).await
    }

    pub async fn bulk_complete(&self) -> BatchReport {
        self.bulk_set_completed(true).await
    }

    pub async fn bulk_activate(&self) -> BatchReport {
        self.bulk_set_completed(false).await
    }

    /// Complete everything, or reopen everything when all are completed
    pub async fn toggle_all(&self) -> BatchReport {
        let any_active = self.inner.state.borrow().items.iter().any(|item| !item.completed);
        if any_active {
            self.bulk_complete().await
        } else {
            self.bulk_activate().await
        }
    }

    pub async fn clear_completed(&self) -> BatchReport {
        let targets = self.snapshot_ids(|item| item.completed);
        let runs = targets.into_iter().map(|id| {
            let engine = self.clone();
            async move { (id, engine.delete(id).await) }
        });
        let report = BatchReport::collect(join_all(runs).await);
        tracing::debug!(removed = report.succeeded.len(), failed = report.failed.len(), "cleared completed");
        report
    }

    async fn bulk_set_completed(&self, completed: bool) -> BatchReport {
        let targets = self.snapshot_ids(|item| item.completed != completed);
        let runs = targets.into_iter().map(|id| {
            let engine = self.clone();
            async move { (id, engine.update(id, ItemPatch::completed(completed)).await) }
        });
        let report = BatchReport::collect(join_all(runs).await);
        tracing::debug!(
            completed,
            succeeded = report.succeeded.len(),
            failed = report.failed.len(),
            "bulk update finished"
        );
        report
    }

    // ========================
    // Internals
    // ========================

    fn snapshot_ids(&self, qualifies: impl Fn(&Item) -> bool) -> Vec<ItemId> {
        self.inner
            .state
            .borrow()
            .items
            .iter()
            .filter(|item| !item.is_provisional() && qualifies(item))
            .map(|item| item.id)
            .collect()
    }

    fn fail(&self, err: EngineError) -> EngineError {
        if let Some(kind) = err.notice_kind() {
            self.inner.notices.show(kind);
        }
        err
    }

    fn update_items(&self, mutate: impl FnOnce(&mut Vec<Item>)) {
        mutate(&mut self.inner.state.borrow_mut().items);
        self.inner.observers.emit(Change::Items);
        self.inner.observers.emit(Change::Summary);
        self.schedule_counter_refresh();
    }

    fn schedule_counter_refresh(&self) {
        let generation = {
            let mut state = self.inner.state.borrow_mut();
            state.counter_generation += 1;
            state.counter_generation
        };
        let weak: Weak<Inner> = Rc::downgrade(&self.inner);
        let elapsed = self.inner.scheduler.sleep(self.inner.config.counter_delay());
        self.inner.scheduler.spawn(Box::pin(async move {
            elapsed.await;
            if let Some(inner) = weak.upgrade() {
                TodoEngine { inner }.refresh_counter(generation);
            }
        }));
    }

    fn refresh_counter(&self, generation: u64) {
        let refreshed = {
            let mut state = self.inner.state.borrow_mut();
            if state.counter_generation != generation {
                return;
            }
            let active = count_active(&state.items);
            std::mem::replace(&mut state.active_count, active) != active
        };
        if refreshed {
            self.inner.observers.emit(Change::Summary);
        }
    }

    fn set_entry_enabled(&self, enabled: bool) {
        self.inner.state.borrow_mut().entry.enabled = enabled;
        self.inner.observers.emit(Change::Entry);
    }

    fn mark_in_flight(&self, id: ItemId) -> InFlightGuard {
        *self.inner.state.borrow_mut().in_flight.entry(id).or_insert(0) += 1;
        self.inner.observers.emit(Change::InFlight);
        InFlightGuard {
            engine: self.clone(),
            id,
        }
    }

    fn release_in_flight(&self, id: ItemId) {
        {
            let mut state = self.inner.state.borrow_mut();
            if let Some(count) = state.in_flight.get_mut(&id) {
                *count -= 1;
                if *count == 0 {
                    state.in_flight.remove(&id);
                }
            }
        }
        self.inner.observers.emit(Change::InFlight);
    }
}

/// Clears one in-flight mark when the request settles
struct InFlightGuard {
    engine: TodoEngine,
    id: ItemId,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.engine.release_in_flight(self.id);
    }
}

/// Returns focus to the entry field (and unlocks it after an add)
struct OnSettle {
    engine: TodoEngine,
    reopen_entry: bool,
}

impl Drop for OnSettle {
    fn drop(&mut self) {
        if self.reopen_entry {
            self.engine.set_entry_enabled(true);
        }
        self.engine.inner.observers.emit(Change::FocusEntry);
    }
}
