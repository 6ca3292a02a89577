//! Derived list view.
//!
//! The list screen never stores rows of its own between snapshots: each new
//! state is filtered from scratch by its visibility filter.

use crate::types::{AppState, HasTodosState, Todo, VisibilityFilter};
use flowstate_core::subscriber::StoreSubscriber;
use std::sync::{Mutex, PoisonError};

impl VisibilityFilter {
    /// Items of `todos` shown under this filter, in their original order
    #[must_use]
    pub fn apply(self, todos: &[Todo]) -> Vec<Todo> {
        todos.iter().filter(|todo| self.matches(todo)).cloned().collect()
    }
}

/// Items the list screen should show for `state`
#[must_use]
pub fn filtered_todos<S: HasTodosState + ?Sized>(state: &S) -> Vec<Todo> {
    let todos_state = state.todos_state();
    todos_state.visibility_filter.apply(&todos_state.todos)
}

/// What the list screen shows for one snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListSnapshot {
    /// Visible rows
    pub rows: Vec<Todo>,
    /// Selected segment of the filter control
    pub selected_filter: usize,
    /// Items not yet completed, across the whole list
    pub active_count: usize,
    /// Whether every item is completed
    pub all_completed: bool,
}

impl ListSnapshot {
    /// Computes the snapshot for `state`
    #[must_use]
    pub fn from_state<S: HasTodosState + ?Sized>(state: &S) -> Self {
        let todos_state = state.todos_state();
        Self {
            rows: filtered_todos(state),
            selected_filter: todos_state.visibility_filter.index(),
            active_count: todos_state.active_count(),
            all_completed: todos_state.are_all_completed(),
        }
    }

    /// Renders the rows as text, one item per line
    #[must_use]
    pub fn render(&self) -> String {
        let filter = VisibilityFilter::from_index(self.selected_filter).unwrap_or_default();
        let mut out = String::new();
        for todo in &self.rows {
            let mark = if todo.completed { 'x' } else { ' ' };
            out.push_str(&format!("[{mark}] {:>3}  {}\n", todo.id, todo.text));
        }
        if self.rows.is_empty() {
            out.push_str("(nothing to show)\n");
        }
        let noun = if self.active_count == 1 { "item" } else { "items" };
        out.push_str(&format!("{} {noun} left | filter: {filter}", self.active_count));
        out
    }
}

/// List screen model
///
/// Subscribes to the store and keeps the [`ListSnapshot`] of the latest state.
#[derive(Debug, Default)]
pub struct TodoListView {
    snapshot: Mutex<ListSnapshot>,
}

impl TodoListView {
    /// Creates a view showing nothing
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The latest snapshot
    #[must_use]
    pub fn snapshot(&self) -> ListSnapshot {
        self.snapshot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Visible rows of the latest snapshot
    #[must_use]
    pub fn rows(&self) -> Vec<Todo> {
        self.snapshot().rows
    }

    /// Selected filter segment of the latest snapshot
    #[must_use]
    pub fn selected_filter(&self) -> usize {
        self.snapshot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .selected_filter
    }
}

impl StoreSubscriber<AppState> for TodoListView {
    fn new_state(&self, state: &AppState) {
        let next = ListSnapshot::from_state(state);
        tracing::trace!(rows = next.rows.len(), filter = next.selected_filter, "List view refreshed");
        *self.snapshot.lock().unwrap_or_else(PoisonError::into_inner) = next;
    }
}
