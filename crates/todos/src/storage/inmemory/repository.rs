//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use todos_core::storage::{RepositoryError, Result, TodoRepository};
use todos_core::todo::{TodoItem, TodoUpdate};

type TodoKey = (String, String);

/// In-memory storage backend for testing.
///
/// Items are kept in a `BTreeMap` keyed by `(user_id, todo_id)`, so listing a
/// user's items returns them ordered by `todo_id`. Updates and deletes of a
/// missing key fail with `InvalidTodo`, matching the existence condition the
/// DynamoDB backend attaches to those requests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    todos: Arc<RwLock<BTreeMap<TodoKey, TodoItem>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored items across all users.
    pub async fn len(&self) -> usize {
        self.todos.read().await.len()
    }

    /// Returns true if no items are stored.
    pub async fn is_empty(&self) -> bool {
        self.todos.read().await.is_empty()
    }
}

fn key(user_id: &str, todo_id: &str) -> TodoKey {
    (user_id.to_string(), todo_id.to_string())
}

#[async_trait]
impl TodoRepository for InMemoryRepository {
    async fn get_todo(&self, user_id: &str, todo_id: &str) -> Result<Option<TodoItem>> {
        let todos = self.todos.read().await;
        Ok(todos.get(&key(user_id, todo_id)).cloned())
    }

    async fn get_todos_by_user(&self, user_id: &str) -> Result<Vec<TodoItem>> {
        let todos = self.todos.read().await;
        Ok(todos
            .iter()
            .filter(|((owner, _), _)| owner == user_id)
            .map(|(_, todo)| todo.clone())
            .collect())
    }

    async fn put_todo(&self, todo: &TodoItem) -> Result<()> {
        let mut todos = self.todos.write().await;
        todos.insert(key(&todo.user_id, &todo.todo_id), todo.clone());
        Ok(())
    }

    async fn update_todo(&self, user_id: &str, todo_id: &str, update: &TodoUpdate) -> Result<()> {
        let mut todos = self.todos.write().await;
        let todo = todos
            .get_mut(&key(user_id, todo_id))
            .ok_or_else(|| RepositoryError::invalid_todo(user_id, todo_id))?;
        todo.apply_update(update);
        Ok(())
    }

    async fn update_attachment_url(
        &self,
        user_id: &str,
        todo_id: &str,
        attachment_url: &str,
    ) -> Result<()> {
        let mut todos = self.todos.write().await;
        let todo = todos
            .get_mut(&key(user_id, todo_id))
            .ok_or_else(|| RepositoryError::invalid_todo(user_id, todo_id))?;
        todo.attachment_url = Some(attachment_url.to_string());
        Ok(())
    }

    async fn delete_todo(&self, user_id: &str, todo_id: &str) -> Result<()> {
        let mut todos = self.todos.write().await;
        if todos.remove(&key(user_id, todo_id)).is_none() {
            return Err(RepositoryError::invalid_todo(user_id, todo_id));
        }
        Ok(())
    }
}
