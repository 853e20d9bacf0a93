//! Todo Controller
//!
//! Owns the remote store and the application state. Every mutation intent
//! from the UI ends up here; each remote call marks the affected task in
//! flight, and its settlement is reconciled against the latest state.

use std::rc::Rc;

use futures::future::join_all;

use crate::commands::TaskStore;
use crate::error::{Operation, StoreError, TodoError};
use crate::models::{Filter, Task, TaskDraft, TaskPatch};
use crate::state::StateCell;

/// Result of committing an inline edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Title was unchanged; edit mode closed without a request
    Unchanged,
    Renamed(Task),
    /// Title was emptied, so the task was deleted
    Deleted,
}

pub struct TodoController<S, C> {
    store: Rc<S>,
    state: C,
}

impl<S, C: Clone> Clone for TodoController<S, C> {
    fn clone(&self) -> Self {
        Self {
            store: Rc::clone(&self.store),
            state: self.state.clone(),
        }
    }
}

impl<S: TaskStore, C: StateCell> TodoController<S, C> {
    pub fn new(store: S, state: C) -> Self {
        Self {
            store: Rc::new(store),
            state,
        }
    }

    // ========================
    // Remote operations
    // ========================

    /// Fetch the whole collection. Not retried on failure.
    pub async fn load(&self) -> Result<usize, TodoError> {
        self.state.mutate(|s| s.is_loading = true);
        let result = self.store.list().await;
        self.state.mutate(|s| s.is_loading = false);

        let tasks = result.map_err(|e| self.transport_error(Operation::Load, e))?;
        let count = tasks.len();
        self.state.mutate(|s| s.replace_tasks(tasks));
        log::info!("loaded {} todos", count);
        Ok(count)
    }

    /// Create a task, showing a placeholder until the server answers
    pub async fn add_task(&self, title: &str, owner_id: u32) -> Result<Task, TodoError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(self.report(TodoError::EmptyTitle));
        }

        let draft = TaskDraft::new(owner_id, title);
        if !self.state.mutate(|s| s.begin_create(&draft)).unwrap_or(false) {
            log::warn!("ignoring add of {:?} while another add is pending", title);
            return Err(TodoError::CreatePending);
        }

        let result = self.store.create(&draft).await;
        let created = result.as_ref().ok().cloned();
        self.state.mutate(|s| s.finish_create(created));

        let task = result.map_err(|e| self.transport_error(Operation::Add, e))?;
        log::info!("added todo {}", task.id);
        Ok(task)
    }

    /// Commit an inline title edit.
    ///
    /// An empty title deletes the task and an unchanged one only closes edit
    /// mode. Edit mode stays open when the request fails.
    pub async fn edit_task(&self, id: u32, new_title: &str) -> Result<EditOutcome, TodoError> {
        let current = self.current(id)?;
        let title = new_title.trim();

        if title.is_empty() {
            self.delete_task(id).await?;
            return Ok(EditOutcome::Deleted);
        }
        if title == current.title {
            self.state.mutate(|s| s.stop_editing(id));
            return Ok(EditOutcome::Unchanged);
        }

        let task = self.update(id, TaskPatch::title(title)).await?;
        self.state.mutate(|s| s.stop_editing(id));
        Ok(EditOutcome::Renamed(task))
    }

    pub async fn toggle_task(&self, id: u32) -> Result<Task, TodoError> {
        let current = self.current(id)?;
        self.update(id, TaskPatch::completed(!current.completed)).await
    }

    pub async fn delete_task(&self, id: u32) -> Result<(), TodoError> {
        self.current(id)?;

        self.state.mutate(|s| s.mark_in_flight(id));
        let result = self.store.delete(id).await;
        self.state.mutate(|s| {
            s.release(id);
            if result.is_ok() {
                s.remove_task(id);
            }
        });

        result.map_err(|e| self.transport_error(Operation::Delete, e))?;
        log::debug!("deleted todo {}", id);
        Ok(())
    }

    /// Complete every incomplete task, or reopen all of them when none is
    /// incomplete. One independent request per task; each failure is
    /// reported on its own.
    pub async fn toggle_all(&self) -> Vec<Result<Task, TodoError>> {
        let targets = self
            .state
            .inspect(|s| s.toggle_all_targets())
            .unwrap_or_default();

        join_all(
            targets
                .into_iter()
                .map(|(id, completed)| self.update(id, TaskPatch::completed(completed))),
        )
        .await
    }

    /// Delete every completed task, one request each
    pub async fn clear_completed(&self) -> Vec<Result<(), TodoError>> {
        let ids = self.state.inspect(|s| s.completed_ids()).unwrap_or_default();
        join_all(ids.into_iter().map(|id| self.delete_task(id))).await
    }

    // ========================
    // Local state
    // ========================

    pub fn set_filter(&self, filter: Filter) {
        self.state.mutate(|s| s.filter = filter);
    }

    pub fn set_new_title(&self, title: String) {
        self.state.mutate(|s| s.new_title = title);
    }

    pub fn start_editing(&self, id: u32) {
        self.state.mutate(|s| s.start_editing(id));
    }

    pub fn stop_editing(&self, id: u32) {
        self.state.mutate(|s| s.stop_editing(id));
    }

    pub fn dismiss_error(&self) {
        self.state.mutate(|s| s.error.dismiss());
    }

    /// Auto-clear hook: clears the error only if it is still the one shown
    /// at `generation`
    pub fn expire_error(&self, generation: u64) {
        self.state.mutate(|s| s.error.expire(generation));
    }

    // ========================
    // Helpers
    // ========================

    fn current(&self, id: u32) -> Result<Task, TodoError> {
        self.state
            .inspect(|s| s.task(id).cloned())
            .flatten()
            .ok_or(TodoError::NotFound(id))
    }

    async fn update(&self, id: u32, patch: TaskPatch) -> Result<Task, TodoError> {
        self.state.mutate(|s| s.mark_in_flight(id));
        let result = self.store.update(id, &patch).await;
        self.state.mutate(|s| {
            s.release(id);
            if let Ok(task) = &result {
                s.replace_task(task.clone());
            }
        });

        let task = result.map_err(|e| self.transport_error(Operation::Update, e))?;
        log::debug!("updated todo {}", id);
        Ok(task)
    }

    fn transport_error(&self, op: Operation, source: StoreError) -> TodoError {
        log::warn!("{:?} request failed: {}", op, source);
        self.report(TodoError::Transport { op, source })
    }

    /// Put displayable errors in the notification slot, replacing any older one
    fn report(&self, err: TodoError) -> TodoError {
        if err.is_displayed() {
            let message = err.to_string();
            self.state.mutate(|s| s.error.show(message));
        }
        err
    }
}
