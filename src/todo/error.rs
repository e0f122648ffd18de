//! Errors raised by todo store operations.

use crate::todo::TodoId;
use thiserror::Error;

/// Failure of a store lookup or mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No todo with the given id exists in the searched collection.
    #[error("Todo {0} not found")]
    NotFound(TodoId),
}
