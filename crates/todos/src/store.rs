//! Data-access facade for to-do items.
//!
//! Request handlers call exactly one [`TodoStore`] operation per request. Each
//! operation is a single round trip to the backing repository, except that the
//! three mutations first await an existence check and fail with
//! `RepositoryError::InvalidTodo` when the item is absent.

use std::sync::Arc;

use todos_core::storage::{RepositoryError, Result, TodoRepository};
use todos_core::todo::{TodoItem, TodoUpdate};

/// Facade over a [`TodoRepository`].
///
/// Holds no state of its own besides the repository handle, so it is cheap to
/// clone and share between concurrent requests.
#[derive(Clone)]
pub struct TodoStore {
    repository: Arc<dyn TodoRepository>,
}

impl TodoStore {
    /// Creates a store backed by the given repository.
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// Returns whether an item exists under the exact key.
    pub async fn exists(&self, user_id: &str, todo_id: &str) -> Result<bool> {
        let exists = self.repository.get_todo(user_id, todo_id).await?.is_some();
        if !exists {
            tracing::info!(user_id, todo_id, "Todo not found");
        }
        Ok(exists)
    }

    /// Gets an item by its exact key.
    pub async fn get(&self, user_id: &str, todo_id: &str) -> Result<Option<TodoItem>> {
        self.repository.get_todo(user_id, todo_id).await
    }

    /// Writes the full item, replacing any item under the same key, and
    /// returns it.
    pub async fn create(&self, todo: TodoItem) -> Result<TodoItem> {
        self.repository.put_todo(&todo).await?;
        tracing::info!(
            user_id = %todo.user_id,
            todo_id = %todo.todo_id,
            name = %todo.name,
            "Todo created"
        );
        Ok(todo)
    }

    /// Lists every item owned by `user_id`, in the order the owner index
    /// returns them.
    pub async fn list_by_owner(&self, user_id: &str) -> Result<Vec<TodoItem>> {
        let todos = self.repository.get_todos_by_user(user_id).await?;
        tracing::info!(user_id, count = todos.len(), "Todos listed");
        Ok(todos)
    }

    /// Overwrites `name`, `due_date` and `done` of an existing item.
    pub async fn update(&self, user_id: &str, todo_id: &str, update: &TodoUpdate) -> Result<()> {
        self.ensure_exists(user_id, todo_id).await?;
        self.repository.update_todo(user_id, todo_id, update).await?;
        tracing::info!(
            user_id,
            todo_id,
            name = %update.name,
            due_date = %update.due_date,
            done = update.done,
            "Todo updated"
        );
        Ok(())
    }

    /// Overwrites the attachment URL of an existing item.
    pub async fn set_attachment_url(
        &self,
        user_id: &str,
        todo_id: &str,
        attachment_url: &str,
    ) -> Result<()> {
        self.ensure_exists(user_id, todo_id).await?;
        self.repository
            .update_attachment_url(user_id, todo_id, attachment_url)
            .await?;
        tracing::info!(user_id, todo_id, attachment_url, "Todo attachment URL set");
        Ok(())
    }

    /// Deletes an existing item. Attachments stored elsewhere are left alone.
    pub async fn delete(&self, user_id: &str, todo_id: &str) -> Result<()> {
        self.ensure_exists(user_id, todo_id).await?;
        self.repository.delete_todo(user_id, todo_id).await?;
        tracing::info!(user_id, todo_id, "Todo deleted");
        Ok(())
    }

    async fn ensure_exists(&self, user_id: &str, todo_id: &str) -> Result<()> {
        if self.exists(user_id, todo_id).await? {
            Ok(())
        } else {
            Err(RepositoryError::invalid_todo(user_id, todo_id))
        }
    }
}
