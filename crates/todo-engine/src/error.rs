//! Error types and the user-facing notices they map to.

use thiserror::Error;

use crate::model::ItemId;

/// Any failure talking to the remote store.
///
/// Transport errors, non-success statuses and malformed payloads all collapse
/// into this one kind; callers treat them alike.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("remote request failed: {0}")]
pub struct RemoteError(pub String);

impl RemoteError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        Self(err.to_string())
    }
}

/// Outcome of an engine intent that did not go through
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("title should not be empty")]
    Validation,
    #[error("another todo is still being added")]
    AddInFlight,
    #[error("todo {0} is not in the list")]
    UnknownItem(ItemId),
    #[error("unable to load todos")]
    Load(#[source] RemoteError),
    #[error("unable to add a todo")]
    Add(#[source] RemoteError),
    #[error("unable to delete a todo")]
    Delete(#[source] RemoteError),
    #[error("unable to update a todo")]
    Update(#[source] RemoteError),
}

impl EngineError {
    /// Notice shown for this error, if any
    pub fn notice_kind(&self) -> Option<NoticeKind> {
        match self {
            EngineError::Validation => Some(NoticeKind::EmptyTitle),
            EngineError::Load(_) => Some(NoticeKind::Load),
            EngineError::Add(_) => Some(NoticeKind::Add),
            EngineError::Delete(_) => Some(NoticeKind::Delete),
            EngineError::Update(_) => Some(NoticeKind::Update),
            EngineError::AddInFlight | EngineError::UnknownItem(_) => None,
        }
    }
}

/// Kinds of message the error banner can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    EmptyTitle,
    Load,
    Add,
    Delete,
    Update,
}

impl NoticeKind {
    pub fn message(&self) -> &'static str {
        match self {
            NoticeKind::EmptyTitle => "Title should not be empty",
            NoticeKind::Load => "Unable to load todos",
            NoticeKind::Add => "Unable to add a todo",
            NoticeKind::Delete => "Unable to delete a todo",
            NoticeKind::Update => "Unable to update a todo",
        }
    }
}
