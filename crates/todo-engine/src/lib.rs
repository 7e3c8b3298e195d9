//! Todo Engine
//!
//! Client-side state synchronization for a todo list backed by a remote
//! CRUD service. Layered like this:
//! - model: wire records and patches
//! - remote: the CRUD contract and its HTTP implementation
//! - engine: optimistic mutations over the owned item collection
//! - filter / summary: read-only projections
//! - notice: the transient error banner
//! - scheduler / observer: injected timers and change listeners

mod config;
mod engine;
mod error;
mod filter;
mod model;
mod notice;
mod observer;
mod remote;
mod scheduler;
mod summary;

pub use config::EngineConfig;
pub use engine::{BatchReport, EntryState, TodoEngine};
pub use error::{EngineError, NoticeKind, RemoteError};
pub use filter::{project, FilterMode};
pub use model::{Item, ItemId, ItemPatch, NewItem, PROVISIONAL_ID};
pub use notice::NoticeChannel;
pub use observer::{Change, Observers, Subscription};
pub use remote::{HttpTodoClient, TodoRemote};
pub use scheduler::Scheduler;
pub use summary::{items_left_label, Summary};
