//! Remote Task Store
//!
//! The controller talks to the backend only through `TaskStore`; `RestTaskStore`
//! is the HTTP implementation used by the app.

mod todo;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::{Task, TaskDraft, TaskPatch};

pub use todo::RestTaskStore;

/// CRUD contract of the remote todo API.
///
/// Futures are not `Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait TaskStore {
    /// List every task of the configured owner
    async fn list(&self) -> StoreResult<Vec<Task>>;

    /// Persist a new task; the server assigns the id
    async fn create(&self, draft: &TaskDraft) -> StoreResult<Task>;

    /// Change some fields of an existing task
    async fn update(&self, id: u32, patch: &TaskPatch) -> StoreResult<Task>;

    async fn delete(&self, id: u32) -> StoreResult<()>;
}
