//! DynamoDB attribute names and key builders.
//!
//! The table stores items under their natural key: partition key `userId`,
//! sort key `todoId`. The owner index reuses `userId` as its partition key.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

// ============================================================================
// Attribute names
// ============================================================================

pub const USER_ID: &str = "userId";
pub const TODO_ID: &str = "todoId";
pub const NAME: &str = "name";
pub const DUE_DATE: &str = "dueDate";
pub const DONE: &str = "done";
pub const ATTACHMENT_URL: &str = "attachmentUrl";
pub const CREATED_AT: &str = "createdAt";

// ============================================================================
// Expressions
// ============================================================================

/// Key condition for listing a user's items on the owner index.
pub const OWNER_KEY_CONDITION: &str = "userId = :userId";

/// Update expression for the user-editable fields.
///
/// `name` is a DynamoDB reserved word, so it goes through the `#name` alias.
pub const UPDATE_TODO_EXPRESSION: &str = "set #name = :name, dueDate = :dueDate, done = :done";

/// Update expression for the attachment URL.
pub const UPDATE_ATTACHMENT_EXPRESSION: &str = "set attachmentUrl = :attachmentUrl";

/// Condition that the addressed item is still present.
pub const ITEM_EXISTS_CONDITION: &str = "attribute_exists(userId)";

/// Build the primary key map for an item.
pub fn todo_key(user_id: &str, todo_id: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (USER_ID.to_string(), AttributeValue::S(user_id.to_string())),
        (TODO_ID.to_string(), AttributeValue::S(todo_id.to_string())),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_key() {
        let key = todo_key("u1", "t1");

        assert_eq!(key.len(), 2);
        assert_eq!(key.get("userId").unwrap().as_s().unwrap(), "u1");
        assert_eq!(key.get("todoId").unwrap().as_s().unwrap(), "t1");
    }

    #[test]
    fn test_update_expression_aliases_reserved_name() {
        assert!(UPDATE_TODO_EXPRESSION.contains("#name = :name"));
        assert!(!UPDATE_TODO_EXPRESSION.contains("attachmentUrl"));
    }

    #[test]
    fn test_attachment_expression_only_sets_attachment() {
        assert_eq!(
            UPDATE_ATTACHMENT_EXPRESSION,
            "set attachmentUrl = :attachmentUrl"
        );
    }
}
