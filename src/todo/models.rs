//! Todo record and identifier types.
//!
//! Contains the single record type rendered by the list and owned by the store.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a todo, unique within one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TodoId(pub u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Represents a single todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    /// Store-assigned identifier
    pub id: TodoId,
    /// Todo title (trimmed, never empty)
    pub title: String,
    /// Whether the todo has been completed
    pub is_completed: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Completion timestamp, set once the todo is completed
    pub completed_at: Option<DateTime<Utc>>,
}

impl Todo {
    /// Create a new, not yet completed todo.
    ///
    /// # Arguments
    /// * `id` - Identifier issued by the store
    /// * `title` - Todo title
    ///
    /// # Returns
    /// * `Todo` - New todo instance
    pub fn new(id: TodoId, title: String) -> Self {
        Self {
            id,
            title,
            is_completed: false,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Mark the todo completed, recording the completion time once.
    pub fn mark_completed(&mut self) {
        if !self.is_completed {
            self.is_completed = true;
            self.completed_at = Some(Utc::now());
        }
    }

    /// Check whether the title contains an already lower-cased needle.
    ///
    /// # Arguments
    /// * `needle` - Lower-cased search term
    ///
    /// # Returns
    /// * `bool` - True if the title matches case-insensitively
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
    }

    /// Format the most recent timestamp for display.
    ///
    /// # Returns
    /// * `String` - Local completion time if completed, else creation time, as `HH:MM`
    pub fn format_time(&self) -> String {
        self.completed_at
            .unwrap_or(self.created_at)
            .with_timezone(&Local)
            .format("%H:%M")
            .to_string()
    }
}
