//! Property tests for the to-do reducer.

use flowstate_core::reducer::Reducer;
use proptest::prelude::*;
use std::collections::HashSet;
use todo::{TodoAction, TodoId, TodosReducer, TodosState, VisibilityFilter};

fn action() -> impl Strategy<Value = TodoAction> {
    let id = (0u64..8).prop_map(TodoId::new);
    prop_oneof![
        3 => "[a-z]{1,8}".prop_map(|text| TodoAction::AddTodo { text }),
        1 => id.clone().prop_map(|id| TodoAction::DeleteTodo { id }),
        1 => (id.clone(), "[a-z]{1,8}").prop_map(|(id, text)| TodoAction::EditTodo { id, text }),
        2 => id.prop_map(|id| TodoAction::CompleteTodo { id }),
        1 => Just(TodoAction::CompleteAll),
        1 => Just(TodoAction::ClearCompleted),
        1 => prop::sample::select(VisibilityFilter::ALL.to_vec())
            .prop_map(|filter| TodoAction::SetVisibilityFilter { filter }),
    ]
}

fn run(actions: Vec<TodoAction>) -> TodosState {
    actions
        .into_iter()
        .fold(TodosState::new(), |state, action| TodosReducer.reduce(state, action))
}

proptest! {
    #[test]
    fn ids_stay_unique(actions in prop::collection::vec(action(), 0..40)) {
        let state = run(actions);
        let ids: HashSet<TodoId> = state.todos.iter().map(|t| t.id).collect();
        prop_assert_eq!(ids.len(), state.todos.len());
    }

    #[test]
    fn complete_todo_twice_is_identity(
        actions in prop::collection::vec(action(), 0..40),
        id in 0u64..8,
    ) {
        let state = run(actions);
        let id = TodoId::new(id);
        let once = TodosReducer.reduce(state.clone(), TodoAction::CompleteTodo { id });
        let twice = TodosReducer.reduce(once, TodoAction::CompleteTodo { id });
        prop_assert_eq!(twice, state);
    }

    #[test]
    fn complete_all_leaves_uniform_completion(actions in prop::collection::vec(action(), 0..40)) {
        let state = run(actions);
        let was_all_completed = state.are_all_completed();
        let next = TodosReducer.reduce(state.clone(), TodoAction::CompleteAll);

        prop_assert_eq!(next.todos.len(), state.todos.len());
        prop_assert!(next.todos.iter().all(|t| t.completed != was_all_completed));
    }

    #[test]
    fn filters_partition_the_list(actions in prop::collection::vec(action(), 0..40)) {
        let state = run(actions);
        let active = VisibilityFilter::Active.apply(&state.todos);
        let completed = VisibilityFilter::Completed.apply(&state.todos);

        prop_assert_eq!(active.len() + completed.len(), state.todos.len());
        prop_assert_eq!(VisibilityFilter::All.apply(&state.todos), state.todos);
    }
}
