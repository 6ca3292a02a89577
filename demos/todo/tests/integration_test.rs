//! End-to-end tests: actions dispatched through a store, observed by subscribers.

#![allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect

use flowstate_runtime::{SharedStore, Store, StoreConfig, Subscriber};
use flowstate_testing::{RecordingSubscriber, init_test_tracing};
use std::sync::Arc;
use todo::{
    AppReducer, AppState, Todo, TodoAction, TodoId, TodoListView, VisibilityFilter, app_reducer,
    seed_actions,
};

fn new_store() -> Store<AppReducer> {
    init_test_tracing();
    Store::with_config(
        AppState::new(),
        app_reducer(),
        StoreConfig::default().with_name("todos"),
    )
}

fn add(text: &str) -> TodoAction {
    TodoAction::AddTodo { text: text.into() }
}

fn todo(id: u64, text: &str, completed: bool) -> Todo {
    Todo::new(TodoId::new(id), text).with_completed(completed)
}

#[test]
fn test_add_toggle_filter_clear_scenario() {
    let mut store = new_store();
    let recorder = Arc::new(RecordingSubscriber::<AppState>::new());
    store.subscribe(recorder.clone());

    store.dispatch(add("A"));
    store.dispatch(add("B"));
    store.dispatch(TodoAction::CompleteTodo { id: TodoId::new(0) });
    store.dispatch(TodoAction::SetVisibilityFilter {
        filter: VisibilityFilter::Active,
    });

    let state = store.state();
    assert_eq!(state.todos_state.todos, vec![todo(0, "A", true), todo(1, "B", false)]);
    assert_eq!(todo::filtered_todos(state), vec![todo(1, "B", false)]);

    store.dispatch(TodoAction::ClearCompleted);
    assert_eq!(store.state().todos_state.todos, vec![todo(1, "B", false)]);
    assert_eq!(store.state().todos_state.visibility_filter, VisibilityFilter::Active);

    // Initial delivery plus one per dispatch
    assert_eq!(recorder.len(), 6);
    assert_eq!(recorder.last().as_ref(), Some(store.state()));
}

#[test]
fn test_complete_all_twice_scenario() {
    let mut store = new_store();
    store.dispatch(add("A"));
    store.dispatch(add("B"));

    store.dispatch(TodoAction::CompleteAll);
    assert!(store.state().todos_state.todos.iter().all(|t| t.completed));

    store.dispatch(TodoAction::CompleteAll);
    assert!(store.state().todos_state.todos.iter().all(|t| !t.completed));
}

#[test]
fn test_complete_all_on_empty_store_notifies_with_unchanged_state() {
    let mut store = new_store();
    let recorder = Arc::new(RecordingSubscriber::<AppState>::new());
    store.subscribe(recorder.clone());

    store.dispatch(TodoAction::CompleteAll);

    let states = recorder.states();
    assert_eq!(states.len(), 2);
    assert_eq!(states[1], AppState::new());
}

#[test]
fn test_missing_id_actions_still_notify() {
    let mut store = new_store();
    store.dispatch(add("A"));
    let before = store.state().clone();

    let recorder = Arc::new(RecordingSubscriber::<AppState>::new());
    store.subscribe(recorder.clone());

    store.dispatch(TodoAction::DeleteTodo { id: TodoId::new(7) });
    store.dispatch(TodoAction::EditTodo {
        id: TodoId::new(7),
        text: "x".into(),
    });
    store.dispatch(TodoAction::CompleteTodo { id: TodoId::new(7) });

    assert_eq!(recorder.len(), 4);
    assert!(recorder.states().iter().all(|s| *s == before));
}

#[test]
fn test_list_view_follows_store() {
    let mut store = new_store();
    let view = Arc::new(TodoListView::new());
    let handle: Subscriber<AppState> = view.clone();
    store.subscribe(handle.clone());

    for action in seed_actions() {
        store.dispatch(action);
    }
    assert_eq!(view.rows().len(), 4);
    assert_eq!(view.selected_filter(), 0);

    store.dispatch(TodoAction::SetVisibilityFilter {
        filter: VisibilityFilter::Completed,
    });
    let texts: Vec<String> = view.rows().into_iter().map(|t| t.text).collect();
    assert_eq!(texts, vec!["Try flowstate", "Play game"]);
    assert_eq!(view.selected_filter(), 2);

    store.unsubscribe(&handle);
    store.dispatch(TodoAction::ClearCompleted);
    assert_eq!(view.rows().len(), 2);
    assert!(store.state().todos_state.todos.iter().all(|t| !t.completed));
}

#[test]
fn test_duplicate_subscribe_is_single_registration() {
    let mut store = new_store();
    let recorder = Arc::new(RecordingSubscriber::<AppState>::new());
    let handle: Subscriber<AppState> = recorder.clone();

    assert!(store.subscribe(handle.clone()));
    assert!(!store.subscribe(handle.clone()));
    store.dispatch(add("A"));

    assert_eq!(store.subscriber_count(), 1);
    assert_eq!(recorder.len(), 2);
}

#[tokio::test]
async fn test_shared_store_scenario() {
    init_test_tracing();
    let store = SharedStore::from_parts(AppState::new(), app_reducer());
    let view = Arc::new(TodoListView::new());
    store.subscribe(view.clone()).await;

    store.send_all(seed_actions()).await;
    store
        .send(TodoAction::SetVisibilityFilter {
            filter: VisibilityFilter::Active,
        })
        .await;

    let ids: Vec<u64> = view.rows().iter().map(|t| t.id.get()).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(store.state(|s| s.todos_state.active_count()).await, 2);
}

#[tokio::test]
async fn test_shared_store_concurrent_adds_get_distinct_ids() {
    let store = SharedStore::from_parts(AppState::new(), app_reducer());

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move { store.send(add(&format!("item {i}"))).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }

    let mut ids = store
        .state(|s| s.todos_state.todos.iter().map(|t| t.id.get()).collect::<Vec<_>>())
        .await;
    ids.sort_unstable();
    assert_eq!(ids, (0..10).collect::<Vec<_>>());
}
