//! To-do list built on the Flowstate store.
//!
//! All list changes flow one way: a caller builds a [`TodoAction`], the
//! store runs it through the reducer, and every subscriber (such as the
//! [`TodoListView`]) receives the new [`AppState`].
//!
//! - [`types`]: items, filters, list and application state, actions
//! - [`reducer`]: the pure transition function
//! - [`view`]: the filtered list screen model
//! - [`command`] and [`config`]: the interactive binary's input and settings
//!
//! # Quick Start
//!
//! ```
//! use flowstate_runtime::Store;
//! use std::sync::Arc;
//! use todo::{AppState, TodoAction, TodoId, TodoListView, app_reducer};
//!
//! let mut store = Store::new(AppState::default(), app_reducer());
//! let view = Arc::new(TodoListView::new());
//! store.subscribe(view.clone());
//!
//! store.dispatch(TodoAction::AddTodo { text: "Buy milk".to_string() });
//! store.dispatch(TodoAction::CompleteTodo { id: TodoId::new(0) });
//!
//! assert!(store.state().todos_state.todos[0].completed);
//! assert_eq!(view.rows().len(), 1);
//! ```

pub mod command;
pub mod config;
pub mod reducer;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use command::{Command, CommandError};
pub use config::{ConfigError, TodoConfig};
pub use reducer::{AppReducer, TodosReducer, app_reducer};
pub use types::{
    AppState, HasTodosState, ParseFilterError, Todo, TodoAction, TodoId, TodosState,
    VisibilityFilter,
};
pub use view::{ListSnapshot, TodoListView, filtered_todos};

/// Demo items dispatched when the binary starts
///
/// Four items, the first and third of which end up completed.
#[must_use]
pub fn seed_actions() -> Vec<TodoAction> {
    let add = |text: &str| TodoAction::AddTodo {
        text: text.to_string(),
    };

    vec![
        add("Try flowstate"),
        add("Buy milk"),
        add("Play game"),
        add("Find work"),
        TodoAction::CompleteTodo { id: TodoId::new(0) },
        TodoAction::CompleteTodo { id: TodoId::new(2) },
    ]
}
