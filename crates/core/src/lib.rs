//! todos_core - pure types and storage traits for the todos backend.
//!
//! Nothing in this crate performs I/O. The `todos` crate provides the
//! storage backends and the data-access facade built on these traits.

pub mod client;
pub mod storage;
pub mod todo;
