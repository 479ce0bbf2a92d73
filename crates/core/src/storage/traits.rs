use async_trait::async_trait;

use crate::todo::{TodoItem, TodoUpdate};

use super::Result;

/// Repository for to-do item operations.
///
/// Each method maps to exactly one request against the backing table. None of
/// them checks for existence beforehand; that guard belongs to the caller.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Gets an item by its exact key.
    async fn get_todo(&self, user_id: &str, todo_id: &str) -> Result<Option<TodoItem>>;

    /// Gets all items owned by a user through the owner index.
    async fn get_todos_by_user(&self, user_id: &str) -> Result<Vec<TodoItem>>;

    /// Writes the full item, replacing any item stored under the same key.
    async fn put_todo(&self, todo: &TodoItem) -> Result<()>;

    /// Overwrites `name`, `dueDate` and `done` of an existing item.
    async fn update_todo(&self, user_id: &str, todo_id: &str, update: &TodoUpdate) -> Result<()>;

    /// Overwrites `attachmentUrl` of an existing item.
    async fn update_attachment_url(
        &self,
        user_id: &str,
        todo_id: &str,
        attachment_url: &str,
    ) -> Result<()>;

    /// Deletes an existing item by its exact key.
    async fn delete_todo(&self, user_id: &str, todo_id: &str) -> Result<()>;
}
