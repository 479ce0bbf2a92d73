use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The item addressed by a mutating operation does not exist.
    #[error("Invalid todo")]
    InvalidTodo { user_id: String, todo_id: String },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Builds the error raised when a mutation targets a missing item.
    pub fn invalid_todo(user_id: impl Into<String>, todo_id: impl Into<String>) -> Self {
        Self::InvalidTodo {
            user_id: user_id.into(),
            todo_id: todo_id.into(),
        }
    }

    /// Returns true if the error reports a missing item.
    pub fn is_invalid_todo(&self) -> bool {
        matches!(self, Self::InvalidTodo { .. })
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
