//! Caller-side request types.
//!
//! The store never generates ids or timestamps; handlers build the full
//! [`TodoItem`] from a request before calling create.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::TodoItem;

/// Request payload for creating a new to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    pub name: String,
    pub due_date: String,
}

impl CreateTodoRequest {
    pub fn new(name: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            due_date: due_date.into(),
        }
    }

    /// Builds the item to persist, with a fresh UUID v4 id and the current time.
    pub fn into_item(self, user_id: impl Into<String>) -> TodoItem {
        self.into_item_at(user_id, Uuid::new_v4().to_string(), Utc::now())
    }

    /// Builds the item to persist with an explicit id and creation time.
    pub fn into_item_at(
        self,
        user_id: impl Into<String>,
        todo_id: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> TodoItem {
        TodoItem::new(user_id, todo_id, self.name, self.due_date)
            .with_created_at(created_at.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_item_generates_uuid_and_timestamp() {
        let item = CreateTodoRequest::new("Buy milk", "2024-01-01").into_item("u1");

        assert_eq!(item.user_id, "u1");
        assert_eq!(item.name, "Buy milk");
        assert_eq!(item.due_date, "2024-01-01");
        assert!(!item.done);
        assert!(Uuid::parse_str(&item.todo_id).is_ok());

        let created_at = item.created_at.expect("created_at should be set");
        assert!(DateTime::parse_from_rfc3339(&created_at).is_ok());
    }

    #[test]
    fn test_into_item_generates_distinct_ids() {
        let first = CreateTodoRequest::new("a", "2024-01-01").into_item("u1");
        let second = CreateTodoRequest::new("a", "2024-01-01").into_item("u1");

        assert_ne!(first.todo_id, second.todo_id);
    }

    #[test]
    fn test_into_item_at_uses_given_values() {
        let created_at = DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);

        let item = CreateTodoRequest::new("Buy milk", "2024-01-01").into_item_at(
            "u1",
            "t1",
            created_at,
        );

        assert_eq!(item.todo_id, "t1");
        assert_eq!(item.created_at.as_deref(), Some("2024-01-15T10:30:00+00:00"));
    }
}
