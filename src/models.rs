//! Frontend Models
//!
//! Data structures matching the remote todo API.

use serde::{Deserialize, Serialize};

/// Id carried by the optimistic placeholder until the server assigns one.
pub const PLACEHOLDER_ID: u32 = 0;

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u32,
    pub owner_id: u32,
    pub title: String,
    pub completed: bool,
}

impl Task {
    /// Not-yet-persisted task shown while a create is outstanding
    pub fn placeholder(draft: &TaskDraft) -> Self {
        Self {
            id: PLACEHOLDER_ID,
            owner_id: draft.owner_id,
            title: draft.title.clone(),
            completed: false,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.id == PLACEHOLDER_ID
    }
}

/// Body of `POST /todos`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub owner_id: u32,
    pub title: String,
    pub completed: bool,
}

impl TaskDraft {
    pub fn new(owner_id: u32, title: impl Into<String>) -> Self {
        Self {
            owner_id,
            title: title.into(),
            completed: false,
        }
    }
}

/// Body of `PATCH /todos/:id`; only the fields being changed are sent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }
}

/// Which subset of the collection is visible
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Link target used by the footer
    pub fn href(self) -> &'static str {
        match self {
            Filter::All => "#/",
            Filter::Active => "#/active",
            Filter::Completed => "#/completed",
        }
    }
}

/// Tasks matching `filter`, in collection order
pub fn visible_tasks(tasks: &[Task], filter: Filter) -> Vec<Task> {
    tasks.iter().filter(|task| filter.matches(task)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u32, completed: bool) -> Task {
        Task {
            id,
            owner_id: 7,
            title: format!("Task {}", id),
            completed,
        }
    }

    #[test]
    fn test_visible_all_is_identity() {
        let tasks = vec![make_task(1, false), make_task(2, true), make_task(3, false)];
        assert_eq!(visible_tasks(&tasks, Filter::All), tasks);
    }

    #[test]
    fn test_visible_subsets_follow_predicate() {
        let tasks = vec![make_task(1, false), make_task(2, true), make_task(3, false)];

        let active = visible_tasks(&tasks, Filter::Active);
        assert_eq!(active.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);

        let completed = visible_tasks(&tasks, Filter::Completed);
        assert_eq!(completed.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2]);

        // Every filter yields a subset consistent with its predicate
        for filter in Filter::ALL {
            let visible = visible_tasks(&tasks, filter);
            assert!(visible.iter().all(|t| tasks.contains(t) && filter.matches(t)));
            let expected = tasks.iter().filter(|t| filter.matches(t)).count();
            assert_eq!(visible.len(), expected);
        }
    }

    #[test]
    fn test_task_uses_camel_case_owner() {
        let task: Task =
            serde_json::from_str(r#"{"id":4,"ownerId":9,"title":"Milk","completed":true}"#).unwrap();
        assert_eq!(task.owner_id, 9);
        assert!(task.completed);

        let draft = serde_json::to_value(TaskDraft::new(9, "Bread")).unwrap();
        assert_eq!(
            draft,
            serde_json::json!({ "ownerId": 9, "title": "Bread", "completed": false })
        );
    }

    #[test]
    fn test_patch_sends_only_changed_fields() {
        let patch = serde_json::to_value(TaskPatch::completed(true)).unwrap();
        assert_eq!(patch, serde_json::json!({ "completed": true }));

        let patch = serde_json::to_value(TaskPatch::title("New")).unwrap();
        assert_eq!(patch, serde_json::json!({ "title": "New" }));
    }

    #[test]
    fn test_placeholder_copies_draft() {
        let placeholder = Task::placeholder(&TaskDraft::new(3, "Soon"));
        assert!(placeholder.is_placeholder());
        assert_eq!(placeholder.title, "Soon");
        assert!(!placeholder.completed);
    }
}
