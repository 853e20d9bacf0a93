//! Error Types
//!
//! Validation failures are handled locally; transport failures are mapped to
//! one fixed user-facing message per operation.

use thiserror::Error;

/// Remote operation a transport failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Add,
    Update,
    Delete,
}

impl Operation {
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Load => "Unable to load todos",
            Operation::Add => "Unable to add a todo",
            Operation::Update => "Unable to update a todo",
            Operation::Delete => "Unable to delete a todo",
        }
    }
}

/// Failure reported by a `TaskStore`
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server answered with status {0}")]
    Status(u16),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by controller operations.
///
/// `Display` is the message shown to the user for the two displayed kinds.
#[derive(Debug, Error)]
pub enum TodoError {
    #[error("Title should not be empty")]
    EmptyTitle,

    #[error("{}", .op.failure_message())]
    Transport {
        op: Operation,
        #[source]
        source: StoreError,
    },

    #[error("todo {0} is not in the list")]
    NotFound(u32),

    #[error("a todo is already being added")]
    CreatePending,
}

impl TodoError {
    /// Whether this error belongs in the notification slot
    pub fn is_displayed(&self) -> bool {
        matches!(self, TodoError::EmptyTitle | TodoError::Transport { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_message_is_keyed_by_operation() {
        let err = TodoError::Transport {
            op: Operation::Delete,
            source: StoreError::Status(503),
        };
        assert_eq!(err.to_string(), "Unable to delete a todo");
        assert!(err.is_displayed());
    }

    #[test]
    fn test_local_conditions_are_not_displayed() {
        assert!(TodoError::EmptyTitle.is_displayed());
        assert!(!TodoError::NotFound(3).is_displayed());
        assert!(!TodoError::CreatePending.is_displayed());
    }
}
