//! Storage backend implementations.
//!
//! This module provides concrete implementations of the
//! [`TodoRepository`](todos_core::storage::TodoRepository) trait defined in
//! `todos_core::storage`.
//!
//! - `dynamodb`: the production backend using `aws-sdk-dynamodb`
//! - `inmemory`: a map-backed backend, compiled for tests or with the
//!   `inmemory` feature

pub mod dynamodb;

#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;

pub use dynamodb::DynamoDbRepository;

#[cfg(any(test, feature = "inmemory"))]
pub use inmemory::InMemoryRepository;
