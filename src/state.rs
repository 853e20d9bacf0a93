//! Application State
//!
//! The single source of truth for rendering. Every reconciliation step the
//! controller performs after a remote call settles is a method here, applied
//! against the latest state through a `StateCell`.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::models::{visible_tasks, Filter, Task, TaskDraft, PLACEHOLDER_ID};

/// Single transient error message.
///
/// Each `show` bumps the generation so a pending auto-clear armed for an
/// older message becomes a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSlot {
    message: Option<String>,
    generation: u64,
}

impl ErrorSlot {
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.message = Some(message.into());
        self.generation += 1;
        self.generation
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Clear the message if it is still the one shown at `generation`
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.generation == generation && self.message.is_some() {
            self.message = None;
            true
        } else {
            false
        }
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }
}

/// Task collection plus per-task transient flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoState {
    /// Persisted tasks in display order
    pub tasks: Vec<Task>,
    /// Optimistic task shown while a create is outstanding
    pub placeholder: Option<Task>,
    pub filter: Filter,
    /// Collection-wide loading flag (initial load and create)
    pub is_loading: bool,
    /// Text of the new-task input
    pub new_title: String,
    pub error: ErrorSlot,
    /// Outstanding request count per task id
    in_flight: BTreeMap<u32, usize>,
    editing: BTreeSet<u32>,
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let mut state = Self::default();
        state.replace_tasks(tasks);
        state
    }

    // ========================
    // Derived views
    // ========================

    pub fn visible(&self) -> Vec<Task> {
        visible_tasks(&self.tasks, self.filter)
    }

    pub fn task(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn is_completed(&self, id: u32) -> Option<bool> {
        self.task(id).map(|task| task.completed)
    }

    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|task| !task.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    pub fn completed_ids(&self) -> Vec<u32> {
        self.tasks
            .iter()
            .filter(|task| task.completed)
            .map(|task| task.id)
            .collect()
    }

    /// Updates toggle-all has to issue: complete the incomplete tasks if there
    /// are any, otherwise mark every task incomplete.
    pub fn toggle_all_targets(&self) -> Vec<(u32, bool)> {
        if self.active_count() > 0 {
            self.tasks
                .iter()
                .filter(|task| !task.completed)
                .map(|task| (task.id, true))
                .collect()
        } else {
            self.tasks.iter().map(|task| (task.id, false)).collect()
        }
    }

    /// Whether the item for `id` shows its loading overlay
    pub fn shows_loader(&self, id: u32) -> bool {
        self.is_loading || id == PLACEHOLDER_ID || self.is_in_flight(id)
    }

    // ========================
    // Collection
    // ========================

    /// Install a freshly loaded collection, dropping duplicate ids
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        let mut seen = BTreeSet::new();
        self.tasks = tasks
            .into_iter()
            .filter(|task| task.id != PLACEHOLDER_ID && seen.insert(task.id))
            .collect();
    }

    /// Start an optimistic create. Refused while another create is pending.
    pub fn begin_create(&mut self, draft: &TaskDraft) -> bool {
        if self.placeholder.is_some() {
            return false;
        }
        self.placeholder = Some(Task::placeholder(draft));
        self.is_loading = true;
        self.mark_in_flight(PLACEHOLDER_ID);
        true
    }

    /// Settle a create: the placeholder goes away either way, and the
    /// persisted task is appended on success.
    pub fn finish_create(&mut self, created: Option<Task>) {
        self.placeholder = None;
        self.is_loading = false;
        self.release(PLACEHOLDER_ID);

        if let Some(task) = created {
            if task.id != PLACEHOLDER_ID && self.task(task.id).is_none() {
                self.tasks.push(task);
            }
            self.new_title.clear();
        }
    }

    /// Replace the task with the same id. A task deleted in the meantime is
    /// not brought back.
    pub fn replace_task(&mut self, updated: Task) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == updated.id) {
            Some(task) => {
                *task = updated;
                true
            }
            None => false,
        }
    }

    pub fn remove_task(&mut self, id: u32) {
        self.tasks.retain(|task| task.id != id);
        self.editing.remove(&id);
    }

    // ========================
    // In-flight
    // ========================

    pub fn mark_in_flight(&mut self, id: u32) {
        *self.in_flight.entry(id).or_insert(0) += 1;
    }

    pub fn release(&mut self, id: u32) {
        if let Some(count) = self.in_flight.get_mut(&id) {
            *count -= 1;
            if *count == 0 {
                self.in_flight.remove(&id);
            }
        }
    }

    pub fn is_in_flight(&self, id: u32) -> bool {
        self.in_flight.contains_key(&id)
    }

    #[cfg(test)]
    pub fn in_flight_ids(&self) -> Vec<u32> {
        self.in_flight.keys().copied().collect()
    }

    // ========================
    // Edit mode
    // ========================

    pub fn start_editing(&mut self, id: u32) {
        if self.task(id).is_some() {
            self.editing.insert(id);
        }
    }

    pub fn stop_editing(&mut self, id: u32) {
        self.editing.remove(&id);
    }

    pub fn is_editing(&self, id: u32) -> bool {
        self.editing.contains(&id)
    }
}

/// Atomic read-modify-write access to `TodoState`.
///
/// Completion handlers go through this instead of holding a copy of the state,
/// so requests that settle out of order each apply to the latest collection.
/// Both methods return `None` once the underlying cell is gone.
pub trait StateCell: Clone + 'static {
    fn mutate<R>(&self, f: impl FnOnce(&mut TodoState) -> R) -> Option<R>;

    fn inspect<R>(&self, f: impl FnOnce(&TodoState) -> R) -> Option<R>;
}

impl StateCell for Rc<RefCell<TodoState>> {
    fn mutate<R>(&self, f: impl FnOnce(&mut TodoState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn inspect<R>(&self, f: impl FnOnce(&TodoState) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u32, title: &str, completed: bool) -> Task {
        Task {
            id,
            owner_id: 1,
            title: title.to_string(),
            completed,
        }
    }

    #[test]
    fn test_replace_tasks_drops_duplicates() {
        let state = TodoState::with_tasks(vec![
            make_task(1, "A", false),
            make_task(2, "B", false),
            make_task(1, "A again", true),
            make_task(0, "ghost", false),
        ]);
        assert_eq!(state.tasks.len(), 2);
        assert_eq!(state.task(1).map(|t| t.title.as_str()), Some("A"));
        assert!(state.task(0).is_none());
    }

    #[test]
    fn test_single_placeholder_during_create() {
        let mut state = TodoState::new();
        let draft = TaskDraft::new(1, "Milk");

        assert!(state.begin_create(&draft));
        assert!(!state.begin_create(&TaskDraft::new(1, "Eggs")));
        assert_eq!(state.placeholder.as_ref().map(|t| t.title.as_str()), Some("Milk"));
        assert!(state.is_loading);
        assert!(state.is_in_flight(PLACEHOLDER_ID));

        state.finish_create(Some(make_task(42, "Milk", false)));
        assert!(state.placeholder.is_none());
        assert!(!state.is_loading);
        assert!(state.in_flight_ids().is_empty());
        assert_eq!(state.tasks, vec![make_task(42, "Milk", false)]);
    }

    #[test]
    fn test_failed_create_keeps_input() {
        let mut state = TodoState::new();
        state.new_title = "Milk".to_string();
        state.begin_create(&TaskDraft::new(1, "Milk"));
        state.finish_create(None);

        assert!(state.placeholder.is_none());
        assert!(state.tasks.is_empty());
        assert_eq!(state.new_title, "Milk");
    }

    #[test]
    fn test_in_flight_counts_overlapping_requests() {
        let mut state = TodoState::with_tasks(vec![make_task(1, "A", false)]);
        state.mark_in_flight(1);
        state.mark_in_flight(1);

        state.release(1);
        assert!(state.is_in_flight(1));
        state.release(1);
        assert!(!state.is_in_flight(1));

        // Releasing an id that is not in flight is harmless
        state.release(1);
        assert!(state.in_flight_ids().is_empty());
    }

    #[test]
    fn test_replace_task_does_not_resurrect() {
        let mut state = TodoState::with_tasks(vec![make_task(1, "A", false)]);
        state.remove_task(1);
        assert!(!state.replace_task(make_task(1, "A", true)));
        assert!(state.tasks.is_empty());
    }

    #[test]
    fn test_remove_task_clears_edit_mode() {
        let mut state = TodoState::with_tasks(vec![make_task(1, "A", false)]);
        state.start_editing(1);
        assert!(state.is_editing(1));
        state.remove_task(1);
        assert!(!state.is_editing(1));
    }

    #[test]
    fn test_toggle_all_targets() {
        let mixed = TodoState::with_tasks(vec![
            make_task(1, "A", true),
            make_task(2, "B", false),
            make_task(3, "C", false),
        ]);
        assert_eq!(mixed.toggle_all_targets(), vec![(2, true), (3, true)]);

        let done = TodoState::with_tasks(vec![make_task(1, "A", true), make_task(2, "B", true)]);
        assert_eq!(done.toggle_all_targets(), vec![(1, false), (2, false)]);

        assert!(TodoState::new().toggle_all_targets().is_empty());
    }

    #[test]
    fn test_is_completed_reads_collection() {
        let mut state = TodoState::with_tasks(vec![make_task(1, "A", false)]);
        assert_eq!(state.is_completed(1), Some(false));
        assert_eq!(state.is_completed(9), None);

        state.replace_task(make_task(1, "A", true));
        assert_eq!(state.is_completed(1), Some(true));
    }

    #[test]
    fn test_loader_sources() {
        let mut state = TodoState::with_tasks(vec![make_task(1, "A", false), make_task(2, "B", false)]);
        assert!(!state.shows_loader(1));
        assert!(state.shows_loader(PLACEHOLDER_ID));

        state.mark_in_flight(1);
        assert!(state.shows_loader(1));
        assert!(!state.shows_loader(2));

        state.is_loading = true;
        assert!(state.shows_loader(2));
    }

    #[test]
    fn test_error_slot_restarts_on_new_message() {
        let mut slot = ErrorSlot::default();
        let first = slot.show("Unable to load todos");
        let second = slot.show("Unable to add a todo");

        // The timer armed for the first message must not clear the second
        assert!(!slot.expire(first));
        assert_eq!(slot.message(), Some("Unable to add a todo"));

        assert!(slot.expire(second));
        assert_eq!(slot.message(), None);
    }

    #[test]
    fn test_error_slot_dismiss() {
        let mut slot = ErrorSlot::default();
        let generation = slot.show("Unable to update a todo");
        slot.dismiss();
        assert_eq!(slot.message(), None);
        assert!(!slot.expire(generation));
    }
}
