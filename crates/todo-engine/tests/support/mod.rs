//! Shared test fixtures: a scripted remote and a tokio-backed scheduler.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use tokio::task::LocalSet;

use todo_engine::{
    Change, EngineConfig, Item, ItemId, ItemPatch, NewItem, RemoteError, Scheduler, TodoEngine,
    TodoRemote,
};

/// Scheduler on tokio's clock; pair with `start_paused = true`
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(tokio::time::sleep(duration))
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        tokio::task::spawn_local(task);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(NewItem),
    Update(ItemId, ItemPatch),
    Delete(ItemId),
}

/// In-memory `TodoRemote` with per-call failure switches
pub struct FakeRemote {
    listing: RefCell<Result<Vec<Item>, RemoteError>>,
    next_id: Cell<ItemId>,
    fail_create: Cell<bool>,
    failing_updates: RefCell<HashSet<ItemId>>,
    failing_deletes: RefCell<HashSet<ItemId>>,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
    calls: RefCell<Vec<Call>>,
}

impl FakeRemote {
    pub fn new(items: Vec<Item>) -> Rc<Self> {
        let next_id = items.iter().map(|item| item.id).max().unwrap_or(0) + 1;
        Rc::new(Self {
            listing: RefCell::new(Ok(items)),
            next_id: Cell::new(next_id),
            fail_create: Cell::new(false),
            failing_updates: RefCell::default(),
            failing_deletes: RefCell::default(),
            gate: RefCell::default(),
            calls: RefCell::default(),
        })
    }

    pub fn fail_list(&self) {
        *self.listing.borrow_mut() = Err(RemoteError::new("503 Service Unavailable"));
    }

    pub fn fail_create(&self) {
        self.fail_create.set(true);
    }

    pub fn fail_update(&self, id: ItemId) {
        self.failing_updates.borrow_mut().insert(id);
    }

    pub fn fail_delete(&self, id: ItemId) {
        self.failing_deletes.borrow_mut().insert(id);
    }

    /// Park the next request until the returned sender fires
    pub fn hold(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.gate.borrow_mut() = Some(rx);
        tx
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    async fn enter(&self, call: Call) {
        self.calls.borrow_mut().push(call);
        let gate = self.gate.borrow_mut().take();
        if let Some(rx) = gate {
            let _ = rx.await;
        }
    }
}

#[async_trait(?Send)]
impl TodoRemote for FakeRemote {
    async fn list(&self) -> Result<Vec<Item>, RemoteError> {
        self.enter(Call::List).await;
        self.listing.borrow().clone()
    }

    async fn create(&self, draft: &NewItem) -> Result<Item, RemoteError> {
        self.enter(Call::Create(draft.clone())).await;
        if self.fail_create.get() {
            return Err(RemoteError::new("500 Internal Server Error"));
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        Ok(Item {
            id,
            owner_id: draft.owner_id,
            title: draft.title.clone(),
            completed: draft.completed,
        })
    }

    async fn update(&self, id: ItemId, patch: &ItemPatch) -> Result<Item, RemoteError> {
        self.enter(Call::Update(id, patch.clone())).await;
        if self.failing_updates.borrow().contains(&id) {
            return Err(RemoteError::new("connection reset"));
        }
        Ok(Item {
            id,
            owner_id: 690,
            title: patch.title.clone().unwrap_or_default(),
            completed: patch.completed.unwrap_or_default(),
        })
    }

    async fn delete(&self, id: ItemId) -> Result<(), RemoteError> {
        self.enter(Call::Delete(id)).await;
        if self.failing_deletes.borrow().contains(&id) {
            return Err(RemoteError::new("404 Not Found"));
        }
        Ok(())
    }
}

pub fn item(id: ItemId, title: &str, completed: bool) -> Item {
    Item {
        id,
        owner_id: 690,
        title: title.to_string(),
        completed,
    }
}

pub fn engine_for(remote: &Rc<FakeRemote>) -> TodoEngine {
    TodoEngine::new(remote.clone(), Rc::new(TokioScheduler), EngineConfig::default())
}

/// Engine already loaded with `items`
pub async fn loaded(items: Vec<Item>) -> (TodoEngine, Rc<FakeRemote>) {
    let remote = FakeRemote::new(items);
    let engine = engine_for(&remote);
    engine.load().await.expect("initial load should succeed");
    (engine, remote)
}

/// Record every change the engine reports
pub fn record_changes(engine: &TodoEngine) -> Rc<RefCell<Vec<Change>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    engine.subscribe(move |change| sink.borrow_mut().push(change)).detach();
    seen
}

/// Run `f` where `spawn_local` is available
pub async fn local<F: Future>(f: F) -> F::Output {
    LocalSet::new().run_until(f).await
}

pub async fn advance(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

pub fn ids(items: &[Item]) -> Vec<ItemId> {
    items.iter().map(|item| item.id).collect()
}
