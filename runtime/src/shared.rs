//! Shared store handle for concurrent callers.
//!
//! A [`Store`] has a single owner. When several tasks need to dispatch to the
//! same store (a CLI reader, a timer, a network handler) they share a
//! [`SharedStore`] instead. Every operation takes a tokio mutex, so dispatches
//! are applied one at a time and each one keeps the exact semantics of
//! [`Store::dispatch`]: reduce, replace, notify, then release.
//!
//! Subscribers still run while the lock is held. They must not call back
//! into the same `SharedStore`.
//!
//! # Example
//!
//! ```ignore
//! let store = SharedStore::new(Store::new(AppState::default(), app_reducer()));
//!
//! let handle = store.clone();
//! tokio::spawn(async move {
//!     handle.send(TodoAction::AddTodo { text: "Buy milk".into() }).await;
//! });
//!
//! let count = store.state(|s| s.todos_state.todos.len()).await;
//! ```

use crate::store::{Store, Subscriber};
use flowstate_core::action::Action;
use flowstate_core::reducer::Reducer;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Cloneable, task-safe handle to a [`Store`]
pub struct SharedStore<R>
where
    R: Reducer,
{
    inner: Arc<Mutex<Store<R>>>,
}

impl<R> Clone for SharedStore<R>
where
    R: Reducer,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R> SharedStore<R>
where
    R: Reducer,
    R::State: Clone,
    R::Action: Action,
{
    /// Wrap a store so it can be shared between tasks
    #[must_use]
    pub fn new(store: Store<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Create a shared store from initial state and reducer
    #[must_use]
    pub fn from_parts(initial_state: R::State, reducer: R) -> Self {
        Self::new(Store::new(initial_state, reducer))
    }

    /// Dispatch an action
    ///
    /// Waits for exclusive access, then runs [`Store::dispatch`]. Returns once
    /// the state is replaced and every subscriber has been notified.
    pub async fn send(&self, action: R::Action) {
        let mut store = self.inner.lock().await;
        store.dispatch(action);
    }

    /// Dispatch several actions under a single lock acquisition
    ///
    /// No other task can dispatch in between. Each action is still a separate
    /// transition with its own notification.
    pub async fn send_all<I>(&self, actions: I)
    where
        I: IntoIterator<Item = R::Action>,
    {
        let mut store = self.inner.lock().await;
        for action in actions {
            store.dispatch(action);
        }
    }

    /// Read current state via a closure
    ///
    /// Access state through a closure to ensure the lock is released promptly:
    ///
    /// ```ignore
    /// let todo_count = store.state(|s| s.todos_state.todos.len()).await;
    /// ```
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&R::State) -> T,
    {
        let store = self.inner.lock().await;
        f(store.state())
    }

    /// Subscribe to state changes, see [`Store::subscribe`]
    pub async fn subscribe(&self, subscriber: Subscriber<R::State>) -> bool {
        self.inner.lock().await.subscribe(subscriber)
    }

    /// Remove a subscriber, see [`Store::unsubscribe`]
    pub async fn unsubscribe(&self, subscriber: &Subscriber<R::State>) -> bool {
        self.inner.lock().await.unsubscribe(subscriber)
    }

    /// Number of registered subscribers
    pub async fn subscriber_count(&self) -> usize {
        self.inner.lock().await.subscriber_count()
    }
}

impl<R> From<Store<R>> for SharedStore<R>
where
    R: Reducer,
    R::State: Clone,
    R::Action: Action,
{
    fn from(store: Store<R>) -> Self {
        Self::new(store)
    }
}
