//! todos - data-access layer for a DynamoDB-backed to-do list.
//!
//! [`store::TodoStore`] is the facade request handlers call. It runs the
//! existence guard and delegates every request to a
//! [`todos_core::storage::TodoRepository`] backend from [`storage`].

pub mod cli;
pub mod config;
pub mod output;
pub mod storage;
pub mod store;

pub use config::Config;
pub use store::TodoStore;
