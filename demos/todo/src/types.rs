//! Domain types for the to-do list.
//!
//! A to-do list is an ordered sequence of items plus the filter the list
//! screen is showing. Items are plain values: "editing" one produces a
//! replacement at the same position.

use flowstate_macros::Action;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a to-do item
///
/// Unique within a list. New ids are one past the largest id in the list,
/// so they never collide with a surviving item even after deletions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from its raw value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id following this one, or `None` past `u64::MAX`
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TodoId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A single to-do item
///
/// Equality is structural: two items are equal when id, text and completion
/// all match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier
    pub id: TodoId,
    /// What needs doing
    pub text: String,
    /// Whether the item is done
    pub completed: bool,
}

impl Todo {
    /// Creates a new, not yet completed item
    #[must_use]
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Returns this item with the given completion
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Which items the list screen shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityFilter {
    /// Every item
    #[default]
    All,
    /// Items not yet completed
    Active,
    /// Completed items
    Completed,
}

impl VisibilityFilter {
    /// All filters in segment order
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Completed];

    /// Position of this filter in the segmented control (All=0, Active=1, Completed=2)
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::All => 0,
            Self::Active => 1,
            Self::Completed => 2,
        }
    }

    /// Filter at a segmented-control position, if there is one
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::All),
            1 => Some(Self::Active),
            2 => Some(Self::Completed),
            _ => None,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`](std::str::FromStr)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Returns `true` if the item should be shown under this filter
    #[must_use]
    pub const fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Active => !todo.completed,
            Self::Completed => todo.completed,
        }
    }
}

impl std::fmt::Display for VisibilityFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`VisibilityFilter`] from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown visibility filter \"{0}\" (expected all, active or completed)")]
pub struct ParseFilterError(pub String);

impl std::str::FromStr for VisibilityFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseFilterError(s.to_string())),
        }
    }
}

/// State of the to-do list
///
/// Invariant: ids in `todos` are pairwise distinct. Order is display order
/// when unfiltered.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodosState {
    /// All items in insertion order
    pub todos: Vec<Todo>,
    /// Filter the list screen is showing
    pub visibility_filter: VisibilityFilter,
}

impl TodosState {
    /// Creates an empty list showing every item
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todos: Vec::new(),
            visibility_filter: VisibilityFilter::All,
        }
    }

    /// Creates a list holding `todos`, showing every item
    #[must_use]
    pub const fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos,
            visibility_filter: VisibilityFilter::All,
        }
    }

    /// The id the next added item receives: largest id + 1, or 0 when empty
    ///
    /// `None` once the largest id is `u64::MAX`.
    #[must_use]
    pub fn next_id(&self) -> Option<TodoId> {
        self.todos
            .iter()
            .map(|todo| todo.id)
            .max()
            .map_or(Some(TodoId::new(0)), TodoId::next)
    }

    /// Returns an item by id
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Returns `true` if every item is completed
    ///
    /// Vacuously `true` for an empty list.
    #[must_use]
    pub fn are_all_completed(&self) -> bool {
        self.todos.iter().all(|todo| todo.completed)
    }

    /// Number of items not yet completed
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.completed).count()
    }

    /// Number of completed items
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.completed).count()
    }
}

/// Capability of an application state that carries a to-do list
///
/// One accessor pair; any state exposing it can host the to-do reducer.
pub trait HasTodosState {
    /// The to-do sub-state
    fn todos_state(&self) -> &TodosState;

    /// Replace the to-do sub-state
    fn set_todos_state(&mut self, todos_state: TodosState);
}

/// Whole application state
///
/// Created once at start with an empty list showing every item. Later
/// versions only come out of the reducer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// The to-do list
    pub todos_state: TodosState,
}

impl AppState {
    /// Creates the initial application state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todos_state: TodosState::new(),
        }
    }

    /// Creates an application state holding `todos`
    #[must_use]
    pub const fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos_state: TodosState::with_todos(todos),
        }
    }
}

impl HasTodosState for AppState {
    fn todos_state(&self) -> &TodosState {
        &self.todos_state
    }

    fn set_todos_state(&mut self, todos_state: TodosState) {
        self.todos_state = todos_state;
    }
}

/// Everything that can happen to the to-do list
///
/// Each variant is a self-contained instruction with no reference to state.
/// Variants naming an id that is not in the list are no-ops.
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoAction {
    /// Append a new, not completed item
    AddTodo {
        /// Text of the new item
        text: String,
    },

    /// Remove an item
    DeleteTodo {
        /// Item to remove
        id: TodoId,
    },

    /// Replace an item's text
    EditTodo {
        /// Item to edit
        id: TodoId,
        /// Replacement text
        text: String,
    },

    /// Flip an item between completed and not completed
    CompleteTodo {
        /// Item to toggle
        id: TodoId,
    },

    /// Complete every item, or un-complete every item if all are already completed
    CompleteAll,

    /// Remove every completed item
    ClearCompleted,

    /// Change which items the list screen shows
    SetVisibilityFilter {
        /// Filter to show
        filter: VisibilityFilter,
    },
}
