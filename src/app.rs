//! Application state management.
//!
//! Owns the todo store, the filtered view, both input boxes, the selection and
//! the notifier. Every user action goes through one of the handlers here.

use crate::config::Config;
use crate::input::TextInput;
use crate::notify::Notifier;
use crate::todo::{CompletionScope, StoreError, Todo, TodoId, TodoStore};
use std::cmp;
use std::time::Instant;

/// Which widget receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Navigate and act on the list
    List,
    /// Typing into the search box
    Search,
    /// Typing into the new-todo box
    NewTodo,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// Authoritative list of todos
    pub store: TodoStore,
    /// Rows currently shown, derived from the store
    pub filtered_todos: Vec<Todo>,
    /// Currently selected row (in filtered_todos)
    pub selected_index: usize,
    /// Current UI mode
    pub mode: UiMode,
    /// Search box draft
    pub search_input: TextInput,
    /// New-todo box draft
    pub new_todo_input: TextInput,
    /// Toast notifications
    pub notifier: Notifier,
    /// Collection a completion operates on
    pub completion_scope: CompletionScope,
    /// Status message to display
    pub status_message: Option<String>,
}

impl App {
    /// Create a new application state.
    ///
    /// # Arguments
    /// * `store` - Initial store
    /// * `notifier` - Notification queue
    /// * `completion_scope` - Collection completions operate on
    ///
    /// # Returns
    /// * `App` - State showing the full store
    pub fn new(store: TodoStore, notifier: Notifier, completion_scope: CompletionScope) -> Self {
        let mut app = Self {
            store,
            filtered_todos: Vec::new(),
            selected_index: 0,
            mode: UiMode::List,
            search_input: TextInput::new("Search todos"),
            new_todo_input: TextInput::new("New todo"),
            notifier,
            completion_scope,
            status_message: None,
        };
        app.refresh_view();
        app
    }

    /// Build the application state from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            TodoStore::with_titles(&config.seed_todos),
            Notifier::new(config.toast_duration(), config.max_toasts),
            config.completion_scope,
        )
    }

    /// Reset the view to the full store after a mutation.
    ///
    /// # Details
    /// The search term is not retained, so a mutation always shows every todo
    /// and drops the search summary from the status bar.
    fn refresh_view(&mut self) {
        self.filtered_todos = self.store.todos().to_vec();
        self.status_message = None;
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        self.selected_index = cmp::min(
            self.selected_index,
            self.filtered_todos.len().saturating_sub(1),
        );
    }

    /// Filter the view by a search term.
    ///
    /// # Arguments
    /// * `term` - Search term as typed
    ///
    /// # Details
    /// Runs a new pass over the current store; the store itself is untouched.
    pub fn search(&mut self, term: &str) {
        self.filtered_todos = self.store.search(term);
        self.selected_index = 0;
        tracing::debug!(term, matches = self.filtered_todos.len(), "search");
        self.set_status(format!(
            "{} of {} todos match '{}'",
            self.filtered_todos.len(),
            self.store.len(),
            term.trim()
        ));
    }

    /// Create a todo.
    ///
    /// # Arguments
    /// * `title` - Title as typed
    ///
    /// # Returns
    /// * `Option<TodoId>` - Id of the new todo, or None for a blank title
    pub fn create_todo(&mut self, title: &str) -> Option<TodoId> {
        let (id, title) = {
            let todo = self.store.create(title)?;
            (todo.id, todo.title.clone())
        };
        tracing::info!(%id, %title, "todo created");
        self.notifier.success(format!("Created another todo - {}", title));
        self.refresh_view();
        Some(id)
    }

    /// Mark a todo completed.
    ///
    /// # Arguments
    /// * `id` - Id of the todo to complete
    ///
    /// # Returns
    /// * `Result<(), StoreError>` - NotFound if the id is missing from the searched collection
    ///
    /// # Details
    /// A miss is logged and surfaced as an error toast; the store is unchanged.
    pub fn complete_todo(&mut self, id: TodoId) -> Result<(), StoreError> {
        let result = match self.completion_scope {
            CompletionScope::FullStore => self.store.complete(id),
            CompletionScope::FilteredView => self.store.complete_in_view(id, &self.filtered_todos),
        }
        .map(|todo| todo.title.clone());

        match result {
            Ok(title) => {
                tracing::info!(%id, %title, scope = ?self.completion_scope, "todo completed");
                self.notifier.success(format!("Congrats on completing {}", title));
                self.refresh_view();
                Ok(())
            }
            Err(e) => {
                tracing::warn!(%id, error = %e, "complete failed");
                self.notifier.error(e.to_string());
                Err(e)
            }
        }
    }

    /// Delete a todo from the full store.
    ///
    /// # Arguments
    /// * `id` - Id of the todo to delete
    ///
    /// # Returns
    /// * `bool` - True if a todo was removed
    pub fn delete_todo(&mut self, id: TodoId) -> bool {
        match self.store.delete(id) {
            Some(todo) => {
                tracing::info!(%id, title = %todo.title, "todo deleted");
                self.notifier.error("Removed todo");
                self.refresh_view();
                true
            }
            None => {
                tracing::debug!(%id, "delete ignored, no such todo");
                false
            }
        }
    }

    /// Commit the search box draft.
    pub fn commit_search(&mut self) {
        let term = self.search_input.commit();
        self.mode = UiMode::List;
        self.search(&term);
    }

    /// Commit the new-todo box draft.
    pub fn commit_new_todo(&mut self) {
        let title = self.new_todo_input.commit();
        self.mode = UiMode::List;
        self.create_todo(&title);
    }

    /// Focus an input box.
    pub fn enter_mode(&mut self, mode: UiMode) {
        self.mode = mode;
    }

    /// Leave the focused input box, discarding its draft.
    pub fn cancel_input(&mut self) {
        match self.mode {
            UiMode::Search => self.search_input.clear(),
            UiMode::NewTodo => self.new_todo_input.clear(),
            UiMode::List => {}
        }
        self.mode = UiMode::List;
    }

    /// The input box that receives typed characters in the current mode.
    pub fn active_input(&mut self) -> Option<&mut TextInput> {
        match self.mode {
            UiMode::Search => Some(&mut self.search_input),
            UiMode::NewTodo => Some(&mut self.new_todo_input),
            UiMode::List => None,
        }
    }

    /// Get the currently selected todo.
    ///
    /// # Returns
    /// * `Option<&Todo>` - Selected todo or None if the view is empty
    pub fn selected_todo(&self) -> Option<&Todo> {
        self.filtered_todos.get(self.selected_index)
    }

    /// Complete the selected todo, if any.
    pub fn complete_selected(&mut self) {
        if let Some(id) = self.selected_todo().map(|todo| todo.id) {
            let _ = self.complete_todo(id);
        }
    }

    /// Delete the selected todo, if any.
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_todo().map(|todo| todo.id) {
            self.delete_todo(id);
        }
    }

    /// Move selection up, wrapping to the bottom.
    pub fn move_up(&mut self) {
        if self.filtered_todos.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered_todos.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Move selection down, wrapping to the top.
    pub fn move_down(&mut self) {
        if self.filtered_todos.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered_todos.len();
    }

    /// Select a row by index, ignoring out-of-range indices.
    pub fn select(&mut self, index: usize) {
        if index < self.filtered_todos.len() {
            self.selected_index = index;
        }
    }

    /// Expire old notifications.
    pub fn tick(&mut self, now: Instant) {
        self.notifier.prune(now);
    }

    /// Set status message.
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }
}
