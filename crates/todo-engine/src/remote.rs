//! Remote Client
//!
//! The CRUD contract of the todo service and its HTTP implementation.
//! Fire-once: no retries, no timeouts beyond the transport's.

use async_trait::async_trait;

use crate::error::RemoteError;
use crate::model::{Item, ItemId, ItemPatch, NewItem};

/// CRUD operations on the remote todo collection
///
/// Futures are `!Send`; everything runs on the single UI event loop.
#[async_trait(?Send)]
pub trait TodoRemote {
    /// All todos of the session owner
    async fn list(&self) -> Result<Vec<Item>, RemoteError>;

    /// Persist a draft; the server assigns the id
    async fn create(&self, draft: &NewItem) -> Result<Item, RemoteError>;

    /// Apply a partial update and return the canonical record
    async fn update(&self, id: ItemId, patch: &ItemPatch) -> Result<Item, RemoteError>;

    async fn delete(&self, id: ItemId) -> Result<(), RemoteError>;
}

/// `TodoRemote` over the REST endpoints under `{base_url}/todos`
#[derive(Debug, Clone)]
pub struct HttpTodoClient {
    http: reqwest::Client,
    base_url: String,
    owner_id: i64,
}

impl HttpTodoClient {
    pub fn new(base_url: &str, owner_id: i64) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            owner_id,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn list_url(&self) -> String {
        format!("{}?userId={}", self.collection_url(), self.owner_id)
    }

    fn item_url(&self, id: ItemId) -> String {
        format!("{}/{}", self.collection_url(), id)
    }
}

fn logged(op: &'static str) -> impl Fn(RemoteError) -> RemoteError {
    move |err| {
        tracing::warn!(op, error = %err, "todo request failed");
        err
    }
}

#[async_trait(?Send)]
impl TodoRemote for HttpTodoClient {
    async fn list(&self) -> Result<Vec<Item>, RemoteError> {
        let url = self.list_url();
        tracing::debug!(%url, "GET todos");
        let send = async {
            let items = self
                .http
                .get(&url)
                .send()
                .await?
                .error_for_status()?
                .json::<Vec<Item>>()
                .await?;
            Ok::<_, RemoteError>(items)
        };
        send.await.map_err(logged("list"))
    }

    async fn create(&self, draft: &NewItem) -> Result<Item, RemoteError> {
        let url = self.collection_url();
        tracing::debug!(%url, title = %draft.title, "POST todo");
        let send = async {
            let item = self
                .http
                .post(&url)
                .json(draft)
                .send()
                .await?
                .error_for_status()?
                .json::<Item>()
                .await?;
            Ok::<_, RemoteError>(item)
        };
        send.await.map_err(logged("create"))
    }

    async fn update(&self, id: ItemId, patch: &ItemPatch) -> Result<Item, RemoteError> {
        let url = self.item_url(id);
        tracing::debug!(%url, ?patch, "PATCH todo");
        let send = async {
            let item = self
                .http
                .patch(&url)
                .json(patch)
                .send()
                .await?
                .error_for_status()?
                .json::<Item>()
                .await?;
            Ok::<_, RemoteError>(item)
        };
        send.await.map_err(logged("update"))
    }

    async fn delete(&self, id: ItemId) -> Result<(), RemoteError> {
        let url = self.item_url(id);
        tracing::debug!(%url, "DELETE todo");
        let send = async {
            self.http.delete(&url).send().await?.error_for_status()?;
            Ok::<_, RemoteError>(())
        };
        send.await.map_err(logged("delete"))
    }
}
