//! DynamoDB repository implementation.
//!
//! Implements the repository trait from `todos_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use todos_core::storage::{Result, TodoRepository};
use todos_core::todo::{TodoItem, TodoUpdate};

use super::conversions::{
    item_to_todo, query_items_to_todos, todo_to_item, update_attachment_values,
    update_todo_names, update_todo_values,
};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_query_error,
    map_update_item_error,
};
use super::keys;
use crate::config::Config;

/// DynamoDB-based repository implementation.
///
/// Items live in a single table keyed by `(userId, todoId)`; listing goes
/// through a secondary index keyed by `userId`.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
    index_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client, table and index.
    pub fn new(client: Client, table_name: impl Into<String>, index_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            index_name: index_name.into(),
        }
    }

    /// Creates a new repository from explicit configuration.
    ///
    /// Uses the AWS SDK default credential chain, the configured region and,
    /// when set, a custom endpoint such as DynamoDB Local.
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        Self::new(
            Client::new(&sdk_config),
            &config.table_name,
            &config.index_name,
        )
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Get the owner index name.
    pub fn index_name(&self) -> &str {
        &self.index_name
    }
}

#[async_trait]
impl TodoRepository for DynamoDbRepository {
    async fn get_todo(&self, user_id: &str, todo_id: &str) -> Result<Option<TodoItem>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::todo_key(user_id, todo_id)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_todo(&item)?)),
            None => Ok(None),
        }
    }

    async fn get_todos_by_user(&self, user_id: &str) -> Result<Vec<TodoItem>> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name(&self.index_name)
            .key_condition_expression(keys::OWNER_KEY_CONDITION)
            .expression_attribute_values(":userId", AttributeValue::S(user_id.to_string()))
            .send()
            .await
            .map_err(map_query_error)?;

        query_items_to_todos(result.items, user_id)
    }

    async fn put_todo(&self, todo: &TodoItem) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(todo_to_item(todo)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn update_todo(&self, user_id: &str, todo_id: &str, update: &TodoUpdate) -> Result<()> {
        self.client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::todo_key(user_id, todo_id)))
            .update_expression(keys::UPDATE_TODO_EXPRESSION)
            .condition_expression(keys::ITEM_EXISTS_CONDITION)
            .set_expression_attribute_names(Some(update_todo_names()))
            .set_expression_attribute_values(Some(update_todo_values(update)))
            .send()
            .await
            .map_err(|e| map_update_item_error(e, user_id, todo_id))?;

        Ok(())
    }

    async fn update_attachment_url(
        &self,
        user_id: &str,
        todo_id: &str,
        attachment_url: &str,
    ) -> Result<()> {
        self.client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::todo_key(user_id, todo_id)))
            .update_expression(keys::UPDATE_ATTACHMENT_EXPRESSION)
            .condition_expression(keys::ITEM_EXISTS_CONDITION)
            .set_expression_attribute_values(Some(update_attachment_values(attachment_url)))
            .send()
            .await
            .map_err(|e| map_update_item_error(e, user_id, todo_id))?;

        Ok(())
    }

    async fn delete_todo(&self, user_id: &str, todo_id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::todo_key(user_id, todo_id)))
            .condition_expression(keys::ITEM_EXISTS_CONDITION)
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, user_id, todo_id))?;

        Ok(())
    }
}
