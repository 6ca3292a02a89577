//! Reducer for the to-do list.
//!
//! Every change to the list is computed here, from the previous state and
//! one action. The reducer performs no I/O and never fails: an action naming
//! an item that is not in the list leaves the list as it was, and so does
//! adding an item once the largest id is `u64::MAX`.

use crate::types::{AppState, HasTodosState, Todo, TodoAction, TodosState};
use flowstate_core::composition::{ScopedReducer, scope_reducer};
use flowstate_core::reducer::Reducer;

/// Reducer for [`TodosState`]
#[derive(Clone, Copy, Debug, Default)]
pub struct TodosReducer;

impl TodosReducer {
    /// Creates a new `TodosReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for TodosReducer {
    type State = TodosState;
    type Action = TodoAction;

    fn reduce(&self, mut state: TodosState, action: TodoAction) -> TodosState {
        match action {
            TodoAction::AddTodo { text } => {
                if let Some(id) = state.next_id() {
                    state.todos.push(Todo::new(id, text));
                }
            },

            TodoAction::DeleteTodo { id } => {
                state.todos.retain(|todo| todo.id != id);
            },

            TodoAction::EditTodo { id, text } => {
                if let Some(todo) = state.todos.iter_mut().find(|todo| todo.id == id) {
                    todo.text = text;
                }
            },

            TodoAction::CompleteTodo { id } => {
                if let Some(todo) = state.todos.iter_mut().find(|todo| todo.id == id) {
                    todo.completed = !todo.completed;
                }
            },

            TodoAction::CompleteAll => {
                // Empty list counts as all completed
                let completed = !state.are_all_completed();
                for todo in &mut state.todos {
                    todo.completed = completed;
                }
            },

            TodoAction::ClearCompleted => {
                state.todos.retain(|todo| !todo.completed);
            },

            TodoAction::SetVisibilityFilter { filter } => {
                state.visibility_filter = filter;
            },
        }

        state
    }
}

/// Reducer for the whole application state
pub type AppReducer = ScopedReducer<AppState, TodosState, TodoAction, TodosReducer>;

/// Builds the application reducer: [`TodosReducer`] focused on the to-do
/// sub-state of [`AppState`].
#[must_use]
pub fn app_reducer() -> AppReducer {
    scope_reducer(
        TodosReducer::new(),
        <AppState as HasTodosState>::todos_state,
        <AppState as HasTodosState>::set_todos_state,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;
    use crate::types::{TodoId, VisibilityFilter};
    use flowstate_testing::ReducerTest;

    fn todo(id: u64, text: &str, completed: bool) -> Todo {
        Todo::new(TodoId::new(id), text).with_completed(completed)
    }

    fn add(text: &str) -> TodoAction {
        TodoAction::AddTodo { text: text.into() }
    }

    fn state_of(todos: Vec<Todo>) -> TodosState {
        TodosState::with_todos(todos)
    }

    #[test]
    fn test_add_todo_to_empty_list() {
        ReducerTest::new(TodosReducer::new())
            .given_state(TodosState::new())
            .when_action(add("Buy milk"))
            .then_state(|state| {
                assert_eq!(state.todos, vec![todo(0, "Buy milk", false)]);
            })
            .run();
    }

    #[test]
    fn test_add_todo_uses_largest_id_plus_one() {
        ReducerTest::new(TodosReducer::new())
            .given_state(state_of(vec![todo(0, "a", false), todo(7, "b", true), todo(3, "c", false)]))
            .when_action(add("d"))
            .then_state(|state| {
                assert_eq!(state.todos.len(), 4);
                assert_eq!(state.todos[3], todo(8, "d", false));
            })
            .run();
    }

    #[test]
    fn test_add_todo_after_delete_does_not_reuse_surviving_id() {
        ReducerTest::new(TodosReducer::new())
            .given_state(TodosState::new())
            .when_actions([add("a"), add("b"), add("c"), TodoAction::DeleteTodo { id: TodoId::new(0) }, add("d")])
            .then_state(|state| {
                let ids: Vec<u64> = state.todos.iter().map(|t| t.id.get()).collect();
                assert_eq!(ids, vec![1, 2, 3]);
            })
            .run();
    }

    #[test]
    fn test_toggle_clear_then_add_continues_from_surviving_id() {
        ReducerTest::new(TodosReducer::new())
            .given_state(state_of(vec![todo(0, "todo 1", false), todo(1, "todo 2", false)]))
            .when_actions([
                TodoAction::CompleteTodo { id: TodoId::new(0) },
                TodoAction::ClearCompleted,
                add("todo 3"),
            ])
            .then_state(|state| {
                assert_eq!(state.todos, vec![todo(1, "todo 2", false), todo(2, "todo 3", false)]);
            })
            .run();
    }

    #[test]
    fn test_add_todo_when_ids_exhausted_is_noop() {
        let initial = state_of(vec![todo(u64::MAX, "last", false)]);
        let expected = initial.clone();

        ReducerTest::new(TodosReducer::new())
            .given_state(initial)
            .when_action(add("one more"))
            .then_state(move |state| assert_eq!(*state, expected))
            .run();
    }

    #[test]
    fn test_delete_todo_preserves_order() {
        ReducerTest::new(TodosReducer::new())
            .given_state(state_of(vec![todo(0, "a", false), todo(1, "b", false), todo(2, "c", false)]))
            .when_action(TodoAction::DeleteTodo { id: TodoId::new(1) })
            .then_state(|state| {
                assert_eq!(state.todos, vec![todo(0, "a", false), todo(2, "c", false)]);
            })
            .run();
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let initial = state_of(vec![todo(0, "a", false)]);
        let expected = initial.clone();

        ReducerTest::new(TodosReducer::new())
            .given_state(initial)
            .when_action(TodoAction::DeleteTodo { id: TodoId::new(9) })
            .then_state(move |state| assert_eq!(*state, expected))
            .run();
    }

    #[test]
    fn test_edit_todo_replaces_text_only() {
        ReducerTest::new(TodosReducer::new())
            .given_state(state_of(vec![todo(0, "a", true), todo(1, "b", false)]))
            .when_action(TodoAction::EditTodo {
                id: TodoId::new(0),
                text: "edited".into(),
            })
            .then_state(|state| {
                assert_eq!(state.todos, vec![todo(0, "edited", true), todo(1, "b", false)]);
            })
            .run();
    }

    #[test]
    fn test_edit_missing_id_is_noop() {
        let initial = state_of(vec![todo(0, "a", false)]);
        let expected = initial.clone();

        ReducerTest::new(TodosReducer::new())
            .given_state(initial)
            .when_action(TodoAction::EditTodo {
                id: TodoId::new(4),
                text: "x".into(),
            })
            .then_state(move |state| assert_eq!(*state, expected))
            .run();
    }

    #[test]
    fn test_complete_todo_toggles() {
        ReducerTest::new(TodosReducer::new())
            .given_state(state_of(vec![todo(0, "a", false), todo(1, "b", true)]))
            .when_action(TodoAction::CompleteTodo { id: TodoId::new(0) })
            .when_action(TodoAction::CompleteTodo { id: TodoId::new(1) })
            .then_state(|state| {
                assert_eq!(state.todos, vec![todo(0, "a", true), todo(1, "b", false)]);
            })
            .run();
    }

    #[test]
    fn test_complete_todo_twice_restores_state() {
        let initial = state_of(vec![todo(0, "a", false), todo(1, "b", true)]);
        let expected = initial.clone();

        ReducerTest::new(TodosReducer::new())
            .given_state(initial)
            .when_actions([
                TodoAction::CompleteTodo { id: TodoId::new(1) },
                TodoAction::CompleteTodo { id: TodoId::new(1) },
            ])
            .then_state(move |state| assert_eq!(*state, expected))
            .run();
    }

    #[test]
    fn test_complete_missing_id_is_noop() {
        let initial = state_of(vec![todo(0, "a", false)]);
        let expected = initial.clone();

        ReducerTest::new(TodosReducer::new())
            .given_state(initial)
            .when_action(TodoAction::CompleteTodo { id: TodoId::new(1) })
            .then_state(move |state| assert_eq!(*state, expected))
            .run();
    }

    #[test]
    fn test_complete_all_when_some_active_completes_all() {
        ReducerTest::new(TodosReducer::new())
            .given_state(state_of(vec![todo(0, "a", true), todo(1, "b", false)]))
            .when_action(TodoAction::CompleteAll)
            .then_state(|state| {
                assert!(state.todos.iter().all(|t| t.completed));
            })
            .run();
    }

    #[test]
    fn test_complete_all_when_all_completed_clears_all() {
        ReducerTest::new(TodosReducer::new())
            .given_state(state_of(vec![todo(0, "a", true), todo(1, "b", true)]))
            .when_action(TodoAction::CompleteAll)
            .then_state(|state| {
                assert!(state.todos.iter().all(|t| !t.completed));
                assert_eq!(state.todos.len(), 2);
            })
            .run();
    }

    #[test]
    fn test_complete_all_on_empty_list_stays_empty() {
        ReducerTest::new(TodosReducer::new())
            .given_state(TodosState::new())
            .when_action(TodoAction::CompleteAll)
            .then_state(|state| assert_eq!(*state, TodosState::new()))
            .run();
    }

    #[test]
    fn test_clear_completed_preserves_order_of_rest() {
        ReducerTest::new(TodosReducer::new())
            .given_state(state_of(vec![
                todo(0, "a", true),
                todo(1, "b", false),
                todo(2, "c", true),
                todo(3, "d", false),
            ]))
            .when_action(TodoAction::ClearCompleted)
            .then_state(|state| {
                assert_eq!(state.todos, vec![todo(1, "b", false), todo(3, "d", false)]);
            })
            .run();
    }

    #[test]
    fn test_set_visibility_filter_changes_filter_only() {
        let todos = vec![todo(0, "a", true), todo(1, "b", false)];
        let expected_todos = todos.clone();

        ReducerTest::new(TodosReducer::new())
            .given_state(state_of(todos))
            .when_action(TodoAction::SetVisibilityFilter {
                filter: VisibilityFilter::Completed,
            })
            .then_state(move |state| {
                assert_eq!(state.visibility_filter, VisibilityFilter::Completed);
                assert_eq!(state.todos, expected_todos);
            })
            .run();
    }

    #[test]
    fn test_app_reducer_updates_todos_sub_state() {
        ReducerTest::new(app_reducer())
            .given_state(AppState::new())
            .when_actions([add("Buy milk"), TodoAction::CompleteTodo { id: TodoId::new(0) }])
            .then_state(|state| {
                assert_eq!(state.todos_state.todos, vec![todo(0, "Buy milk", true)]);
            })
            .run();
    }

    #[test]
    fn test_app_reducer_matches_todos_reducer() {
        let actions = vec![
            add("a"),
            add("b"),
            TodoAction::CompleteAll,
            TodoAction::CompleteTodo { id: TodoId::new(1) },
            TodoAction::ClearCompleted,
            TodoAction::SetVisibilityFilter {
                filter: VisibilityFilter::Active,
            },
        ];

        let app = app_reducer();
        let via_app = actions
            .iter()
            .cloned()
            .fold(AppState::new(), |state, action| app.reduce(state, action));
        let direct = actions
            .into_iter()
            .fold(TodosState::new(), |state, action| TodosReducer.reduce(state, action));

        assert_eq!(via_app.todos_state, direct);
    }

    #[test]
    fn test_combined_app_reducers_apply_in_order() {
        use flowstate_core::composition::combine_reducers;

        let combined = combine_reducers(vec![Box::new(app_reducer()), Box::new(app_reducer())]);

        let state = combined.reduce(AppState::new(), add("twice"));
        assert_eq!(
            state.todos_state.todos,
            vec![todo(0, "twice", false), todo(1, "twice", false)]
        );

        // Toggling in both halves cancels out
        let state = combined.reduce(state, TodoAction::CompleteTodo { id: TodoId::new(1) });
        assert!(state.todos_state.todos.iter().all(|t| !t.completed));
    }
}
