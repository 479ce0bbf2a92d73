//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and domain types.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use todos_core::storage::RepositoryError;
use todos_core::todo::{TodoItem, TodoUpdate};

use super::keys;

type Item = HashMap<String, AttributeValue>;

// ============================================================================
// TodoItem conversions
// ============================================================================

/// Convert a TodoItem to DynamoDB item.
pub fn todo_to_item(todo: &TodoItem) -> Item {
    let mut item = HashMap::new();

    // Keys
    item.insert(
        keys::USER_ID.to_string(),
        AttributeValue::S(todo.user_id.clone()),
    );
    item.insert(
        keys::TODO_ID.to_string(),
        AttributeValue::S(todo.todo_id.clone()),
    );

    // Data
    item.insert(keys::NAME.to_string(), AttributeValue::S(todo.name.clone()));
    item.insert(
        keys::DUE_DATE.to_string(),
        AttributeValue::S(todo.due_date.clone()),
    );
    item.insert(keys::DONE.to_string(), AttributeValue::Bool(todo.done));

    if let Some(url) = &todo.attachment_url {
        item.insert(
            keys::ATTACHMENT_URL.to_string(),
            AttributeValue::S(url.clone()),
        );
    }
    if let Some(created_at) = &todo.created_at {
        item.insert(
            keys::CREATED_AT.to_string(),
            AttributeValue::S(created_at.clone()),
        );
    }

    item
}

/// Convert a DynamoDB item to TodoItem.
pub fn item_to_todo(item: &Item) -> Result<TodoItem, RepositoryError> {
    Ok(TodoItem {
        user_id: get_string(item, keys::USER_ID)?,
        todo_id: get_string(item, keys::TODO_ID)?,
        name: get_string(item, keys::NAME)?,
        due_date: get_string(item, keys::DUE_DATE)?,
        done: get_bool(item, keys::DONE)?,
        attachment_url: get_optional_string(item, keys::ATTACHMENT_URL),
        created_at: get_optional_string(item, keys::CREATED_AT),
    })
}

/// Convert the items of a Query response to TodoItems.
///
/// A response without an items list means the query produced no result at
/// all, which is reported as a failure. An empty list is a valid result.
pub fn query_items_to_todos(
    items: Option<Vec<Item>>,
    user_id: &str,
) -> Result<Vec<TodoItem>, RepositoryError> {
    let items = items.ok_or_else(|| {
        RepositoryError::QueryFailed(format!("no result returned for user {user_id}"))
    })?;
    items.iter().map(item_to_todo).collect()
}

// ============================================================================
// Expression values
// ============================================================================

/// Expression attribute names for [`keys::UPDATE_TODO_EXPRESSION`].
pub fn update_todo_names() -> HashMap<String, String> {
    HashMap::from([("#name".to_string(), keys::NAME.to_string())])
}

/// Expression attribute values for [`keys::UPDATE_TODO_EXPRESSION`].
pub fn update_todo_values(update: &TodoUpdate) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (":name".to_string(), AttributeValue::S(update.name.clone())),
        (
            ":dueDate".to_string(),
            AttributeValue::S(update.due_date.clone()),
        ),
        (":done".to_string(), AttributeValue::Bool(update.done)),
    ])
}

/// Expression attribute values for [`keys::UPDATE_ATTACHMENT_EXPRESSION`].
pub fn update_attachment_values(attachment_url: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([(
        ":attachmentUrl".to_string(),
        AttributeValue::S(attachment_url.to_string()),
    )])
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(item: &Item, key: &str) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute.
fn get_optional_string(item: &Item, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

/// Get a required boolean attribute.
fn get_bool(item: &Item, key: &str) -> Result<bool, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_bool().ok())
        .copied()
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_todo() -> TodoItem {
        TodoItem::new("u1", "t1", "Buy milk", "2024-01-01")
            .with_created_at("2024-01-01T08:00:00+00:00")
    }

    #[test]
    fn test_todo_round_trip() {
        let todo = sample_todo().with_attachment_url("https://x/file.png");
        let item = todo_to_item(&todo);
        let parsed = item_to_todo(&item).unwrap();

        assert_eq!(todo, parsed);
    }

    #[test]
    fn test_todo_item_has_key_attributes() {
        let item = todo_to_item(&sample_todo());

        assert_eq!(item.get("userId").unwrap().as_s().unwrap(), "u1");
        assert_eq!(item.get("todoId").unwrap().as_s().unwrap(), "t1");
        assert_eq!(item.get("done").unwrap().as_bool().unwrap(), &false);
    }

    #[test]
    fn test_todo_item_omits_absent_optionals() {
        let item = todo_to_item(&TodoItem::new("u1", "t1", "Buy milk", "2024-01-01"));

        assert!(!item.contains_key("attachmentUrl"));
        assert!(!item.contains_key("createdAt"));
        assert_eq!(item.len(), 5);
    }

    #[test]
    fn test_item_to_todo_missing_name() {
        let mut item = todo_to_item(&sample_todo());
        item.remove("name");

        let result = item_to_todo(&item);
        assert_eq!(
            result,
            Err(RepositoryError::InvalidData(
                "Missing or invalid field: name".to_string()
            ))
        );
    }

    #[test]
    fn test_item_to_todo_wrong_done_type() {
        let mut item = todo_to_item(&sample_todo());
        item.insert("done".to_string(), AttributeValue::S("true".to_string()));

        assert!(matches!(
            item_to_todo(&item),
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_query_items_none_is_query_failure() {
        let result = query_items_to_todos(None, "u1");
        assert!(matches!(result, Err(RepositoryError::QueryFailed(_))));
    }

    #[test]
    fn test_query_items_empty_is_empty_list() {
        let result = query_items_to_todos(Some(Vec::new()), "u1").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_query_items_preserves_order() {
        let first = sample_todo();
        let second = TodoItem::new("u1", "t2", "Walk dog", "2024-01-03");

        let result = query_items_to_todos(
            Some(vec![todo_to_item(&first), todo_to_item(&second)]),
            "u1",
        )
        .unwrap();

        assert_eq!(result, vec![first, second]);
    }

    #[test]
    fn test_update_todo_values() {
        let values = update_todo_values(&TodoUpdate::new("Buy oat milk", "2024-01-02", true));

        assert_eq!(values.len(), 3);
        assert_eq!(values.get(":name").unwrap().as_s().unwrap(), "Buy oat milk");
        assert_eq!(
            values.get(":dueDate").unwrap().as_s().unwrap(),
            "2024-01-02"
        );
        assert_eq!(values.get(":done").unwrap().as_bool().unwrap(), &true);
        assert_eq!(update_todo_names().get("#name").unwrap(), "name");
    }

    #[test]
    fn test_update_attachment_values() {
        let values = update_attachment_values("https://x/file.png");

        assert_eq!(values.len(), 1);
        assert_eq!(
            values.get(":attachmentUrl").unwrap().as_s().unwrap(),
            "https://x/file.png"
        );
    }
}
