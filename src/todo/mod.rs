//! Todo domain module.
//!
//! Provides the todo record, the in-memory store and its error type.

pub mod error;
pub mod models;
pub mod store;

pub use error::StoreError;
pub use models::{Todo, TodoId};
pub use store::{CompletionScope, TodoStore};
