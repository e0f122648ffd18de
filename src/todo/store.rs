//! In-memory todo store.
//!
//! Owns the authoritative list of todos and issues their identifiers.

use crate::todo::{StoreError, Todo, TodoId};
use serde::{Deserialize, Serialize};

/// Which collection a completion operates on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionScope {
    /// Look the todo up in the full store; nothing else is touched
    #[default]
    FullStore,
    /// Look the todo up in the filtered view and rebuild the store from that
    /// view, dropping every todo the view does not contain
    FilteredView,
}

/// Owned, single-writer list of todos.
#[derive(Debug, Clone)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: u64,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }
}

impl TodoStore {
    /// Create a store pre-filled with the given titles.
    ///
    /// # Arguments
    /// * `titles` - Seed titles, in display order
    ///
    /// # Returns
    /// * `TodoStore` - Store containing one open todo per non-blank title
    pub fn with_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = Self::default();
        for title in titles {
            store.create(title.as_ref());
        }
        store
    }

    /// All todos in store order.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Look a todo up by id.
    #[allow(dead_code)] // Only read by tests
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Append a new todo.
    ///
    /// # Arguments
    /// * `title` - Raw title as typed
    ///
    /// # Returns
    /// * `Option<&Todo>` - The created todo, or None if the title is blank
    ///
    /// # Details
    /// Trimming only decides whether the title is blank; the title is stored
    /// exactly as typed. Ids come from a counter that is never
    /// rewound, so deleted ids are not reused.
    pub fn create(&mut self, title: &str) -> Option<&Todo> {
        if title.trim().is_empty() {
            return None;
        }

        let id = TodoId(self.next_id);
        self.next_id += 1;
        self.todos.push(Todo::new(id, title.to_string()));
        self.todos.last()
    }

    /// Complete a todo found in the full store.
    ///
    /// # Arguments
    /// * `id` - Id of the todo to complete
    ///
    /// # Returns
    /// * `Result<&Todo, StoreError>` - The completed todo, or NotFound
    ///
    /// # Details
    /// The completed todo moves to the end of the store. Every other todo keeps
    /// its relative order.
    pub fn complete(&mut self, id: TodoId) -> Result<&Todo, StoreError> {
        let position = self
            .todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let mut todo = self.todos.remove(position);
        todo.mark_completed();
        self.todos.push(todo);
        self.todos.last().ok_or(StoreError::NotFound(id))
    }

    /// Complete a todo found in a filtered view, replacing the store with it.
    ///
    /// # Arguments
    /// * `id` - Id of the todo to complete
    /// * `view` - Filtered view the id was picked from
    ///
    /// # Returns
    /// * `Result<&Todo, StoreError>` - The completed todo, or NotFound
    ///
    /// # Details
    /// The store becomes the view without the target, followed by the completed
    /// target. Todos outside the view are discarded. On NotFound the store is
    /// left untouched.
    pub fn complete_in_view(&mut self, id: TodoId, view: &[Todo]) -> Result<&Todo, StoreError> {
        let mut target = view
            .iter()
            .find(|todo| todo.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))?;
        target.mark_completed();

        let mut todos: Vec<Todo> = view.iter().filter(|todo| todo.id != id).cloned().collect();
        todos.push(target);
        self.todos = todos;
        self.todos.last().ok_or(StoreError::NotFound(id))
    }

    /// Remove a todo from the full store.
    ///
    /// # Arguments
    /// * `id` - Id of the todo to remove
    ///
    /// # Returns
    /// * `Option<Todo>` - The removed todo, or None if no todo had that id
    pub fn delete(&mut self, id: TodoId) -> Option<Todo> {
        let position = self.todos.iter().position(|todo| todo.id == id)?;
        Some(self.todos.remove(position))
    }

    /// Filter the store by a search term.
    ///
    /// # Arguments
    /// * `term` - Search term as typed
    ///
    /// # Returns
    /// * `Vec<Todo>` - Todos whose titles contain the trimmed term, ignoring case
    ///
    /// # Details
    /// A blank term matches every todo. The store is not modified.
    pub fn search(&self, term: &str) -> Vec<Todo> {
        let needle = term.trim().to_lowercase();
        self.todos
            .iter()
            .filter(|todo| todo.matches(&needle))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> TodoStore {
        TodoStore::with_titles((1..=5).map(|n| format!("todo #{}", n)))
    }

    fn titles(todos: &[Todo]) -> Vec<&str> {
        todos.iter().map(|todo| todo.title.as_str()).collect()
    }

    #[test]
    fn test_with_titles_assigns_sequential_ids() {
        let store = seeded();
        assert_eq!(store.len(), 5);
        let ids: Vec<u64> = store.todos().iter().map(|todo| todo.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert!(store.todos().iter().all(|todo| !todo.is_completed));
    }

    #[test]
    fn test_create_keeps_title_as_typed() {
        let mut store = seeded();
        let id = store.create("  milk  ").map(|todo| todo.id);
        assert_eq!(store.len(), 6);
        let last = store.todos().last().unwrap();
        assert_eq!(Some(last.id), id);
        assert_eq!(last.title, "  milk  ");
        assert!(!last.is_completed);
    }

    #[test]
    fn test_create_rejects_blank_titles() {
        let mut store = seeded();
        assert!(store.create("").is_none());
        assert!(store.create("   \t").is_none());
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut store = seeded();
        store.delete(TodoId(5));
        let id = store.create("milk").map(|todo| todo.id);
        assert_eq!(id, Some(TodoId(6)));
    }

    #[test]
    fn test_complete_moves_todo_to_end() {
        let mut store = seeded();
        let completed = store.complete(TodoId(2)).unwrap();
        assert!(completed.is_completed);
        assert_eq!(store.len(), 5);
        assert_eq!(
            titles(store.todos()),
            vec!["todo #1", "todo #3", "todo #4", "todo #5", "todo #2"]
        );
    }

    #[test]
    fn test_complete_missing_id_is_not_found() {
        let mut store = seeded();
        assert_eq!(
            store.complete(TodoId(99)).unwrap_err(),
            StoreError::NotFound(TodoId(99))
        );
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_complete_in_view_drops_filtered_out_todos() {
        let mut store = seeded();
        let view = store.search("#3");
        store.complete_in_view(TodoId(3), &view).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.get(TodoId(3)).unwrap().is_completed);
    }

    #[test]
    fn test_complete_in_view_miss_leaves_store() {
        let mut store = seeded();
        let view = store.search("#3");
        assert!(store.complete_in_view(TodoId(1), &view).is_err());
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut store = seeded();
        let removed = store.delete(TodoId(1)).unwrap();
        assert_eq!(removed.title, "todo #1");
        assert_eq!(store.len(), 4);
        assert!(store.get(TodoId(1)).is_none());
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let mut store = seeded();
        assert!(store.delete(TodoId(42)).is_none());
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_search_case_insensitive_and_trimmed() {
        let mut store = seeded();
        store.create("Buy Milk");
        assert_eq!(titles(&store.search("  MILK ")), vec!["Buy Milk"]);
        assert_eq!(titles(&store.search("#3")), vec!["todo #3"]);
        assert!(store.search("bread").is_empty());
    }

    #[test]
    fn test_search_empty_term_returns_everything() {
        let store = seeded();
        assert_eq!(store.search("").len(), 5);
        assert_eq!(store.search("   ").len(), 5);
    }
}
