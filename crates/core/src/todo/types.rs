use serde::{Deserialize, Serialize};

/// A to-do item owned by a single user.
///
/// Keyed by `(user_id, todo_id)`. The serialized form uses the attribute names
/// stored in the table (`userId`, `todoId`, `dueDate`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Owner identity, supplied by the identity provider.
    pub user_id: String,
    pub todo_id: String,
    pub name: String,
    /// ISO date. Advisory only, never parsed.
    pub due_date: String,
    pub done: bool,
    /// Set only through the attachment URL operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,
    /// Stamped by the caller at creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl TodoItem {
    /// Creates a pending item with the given key, name and due date.
    pub fn new(
        user_id: impl Into<String>,
        todo_id: impl Into<String>,
        name: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            todo_id: todo_id.into(),
            name: name.into(),
            due_date: due_date.into(),
            done: false,
            attachment_url: None,
            created_at: None,
        }
    }

    /// Sets the creation timestamp.
    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }

    /// Sets the attachment URL.
    pub fn with_attachment_url(mut self, attachment_url: impl Into<String>) -> Self {
        self.attachment_url = Some(attachment_url.into());
        self
    }

    /// Sets the completion flag.
    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    /// Applies an update patch, touching only `name`, `due_date` and `done`.
    pub fn apply_update(&mut self, update: &TodoUpdate) {
        self.name = update.name.clone();
        self.due_date = update.due_date.clone();
        self.done = update.done;
    }
}

/// The user-editable fields of a [`TodoItem`].
///
/// All three fields are overwritten together; there is no partial patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoUpdate {
    pub name: String,
    pub due_date: String,
    pub done: bool,
}

impl TodoUpdate {
    pub fn new(name: impl Into<String>, due_date: impl Into<String>, done: bool) -> Self {
        Self {
            name: name.into(),
            due_date: due_date.into(),
            done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_is_pending_without_optional_fields() {
        let item = TodoItem::new("u1", "t1", "Buy milk", "2024-01-01");

        assert!(!item.done);
        assert!(item.attachment_url.is_none());
        assert!(item.created_at.is_none());
    }

    #[test]
    fn test_apply_update_leaves_attachment_untouched() {
        let mut item = TodoItem::new("u1", "t1", "Buy milk", "2024-01-01")
            .with_attachment_url("https://x/file.png");

        item.apply_update(&TodoUpdate::new("Buy oat milk", "2024-01-02", true));

        assert_eq!(item.name, "Buy oat milk");
        assert_eq!(item.due_date, "2024-01-02");
        assert!(item.done);
        assert_eq!(item.attachment_url.as_deref(), Some("https://x/file.png"));
        assert_eq!(item.user_id, "u1");
        assert_eq!(item.todo_id, "t1");
    }

    #[test]
    fn test_serializes_with_table_attribute_names() {
        let item = TodoItem::new("u1", "t1", "Buy milk", "2024-01-01")
            .with_created_at("2024-01-01T00:00:00+00:00");

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["userId"], "u1");
        assert_eq!(json["todoId"], "t1");
        assert_eq!(json["dueDate"], "2024-01-01");
        assert_eq!(json["done"], false);
        assert_eq!(json["createdAt"], "2024-01-01T00:00:00+00:00");
        assert!(json.get("attachmentUrl").is_none());
    }

    #[test]
    fn test_deserializes_without_optional_fields() {
        let json = r#"{"userId":"u1","todoId":"t1","name":"Buy milk","dueDate":"2024-01-01","done":true}"#;

        let item: TodoItem = serde_json::from_str(json).unwrap();

        assert!(item.done);
        assert!(item.attachment_url.is_none());
        assert!(item.created_at.is_none());
    }
}
