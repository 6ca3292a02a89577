//! # Flowstate Runtime
//!
//! Runtime implementation for the Flowstate state container.
//!
//! This crate provides the Store that holds the current state, applies the
//! reducer to every dispatched action and notifies subscribers.
//!
//! ## Core Components
//!
//! - **Store**: Synchronous, single-owner container (`dispatch`, `subscribe`, `unsubscribe`)
//! - **`SharedStore`**: Cloneable handle serialising access to a Store across tasks
//! - **Metrics**: Prometheus recorder for the store's counters and histograms
//!
//! ## Example
//!
//! ```ignore
//! use flowstate_runtime::Store;
//!
//! let mut store = Store::new(AppState::default(), app_reducer());
//!
//! // Observe every state
//! store.subscribe(view.clone());
//!
//! // Dispatch an action
//! store.dispatch(TodoAction::AddTodo { text: "Buy milk".into() });
//!
//! // Read state
//! let count = store.state().todos_state.todos.len();
//! ```

/// Prometheus metrics for observability
pub mod metrics;

/// Shared store for use from concurrent tasks
pub mod shared;

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use flowstate_runtime::StoreConfig;
///
/// let config = StoreConfig::default()
///     .with_name("todos")
///     .with_notify_on_subscribe(false);
///
/// assert_eq!(config.name, "todos");
/// assert!(!config.notify_on_subscribe);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Store label used in log fields and metric labels
    pub name: &'static str,
    /// Deliver the current state to a subscriber as soon as it subscribes
    pub notify_on_subscribe: bool,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    ///
    /// # Arguments
    ///
    /// - `name`: Label for logs and metrics
    /// - `notify_on_subscribe`: Whether new subscribers immediately receive the current state
    #[must_use]
    pub const fn new(name: &'static str, notify_on_subscribe: bool) -> Self {
        Self {
            name,
            notify_on_subscribe,
        }
    }

    /// Set the store label
    #[must_use]
    pub const fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Set whether new subscribers receive the current state immediately
    #[must_use]
    pub const fn with_notify_on_subscribe(mut self, notify: bool) -> Self {
        self.notify_on_subscribe = notify;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: "store",
            notify_on_subscribe: true,
        }
    }
}

/// Store runtime for applying the reducer and notifying subscribers.
pub mod store {
    use super::StoreConfig;
    use flowstate_core::action::Action;
    use flowstate_core::reducer::Reducer;
    use flowstate_core::subscriber::{StoreSubscriber, same_subscriber};
    use std::sync::Arc;

    /// Shared subscriber handle registered with a [`Store`]
    pub type Subscriber<S> = Arc<dyn StoreSubscriber<S>>;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (exclusively owned, replaced on every dispatch)
    /// 2. Reducer (state-transition logic)
    /// 3. Subscribers (notified synchronously with each new state)
    ///
    /// # Threading
    ///
    /// `dispatch`, `subscribe` and `unsubscribe` take `&mut self`, so a Store
    /// has exactly one logical thread of control and needs no locking. Wrap it
    /// in a [`SharedStore`](crate::shared::SharedStore) to share it between tasks.
    ///
    /// # Type Parameters
    ///
    /// - `R`: Reducer implementation; its `State` and `Action` are the store's
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut store = Store::new(AppState::default(), app_reducer());
    ///
    /// store.dispatch(TodoAction::AddTodo { text: "Buy milk".into() });
    /// assert_eq!(store.state().todos_state.todos.len(), 1);
    /// ```
    pub struct Store<R>
    where
        R: Reducer,
    {
        state: R::State,
        reducer: R,
        subscribers: Vec<Subscriber<R::State>>,
        config: StoreConfig,
    }

    impl<R> Store<R>
    where
        R: Reducer,
        R::State: Clone,
        R::Action: Action,
    {
        /// Create a new store with initial state and reducer
        ///
        /// Uses [`StoreConfig::default()`]: named `"store"`, new subscribers
        /// receive the current state immediately.
        ///
        /// # Arguments
        ///
        /// - `initial_state`: The starting state for the store
        /// - `reducer`: The reducer implementation
        ///
        /// # Returns
        ///
        /// A new Store instance ready to process actions
        #[must_use]
        pub fn new(initial_state: R::State, reducer: R) -> Self {
            Self::with_config(initial_state, reducer, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        ///
        /// # Arguments
        ///
        /// - `initial_state`: Initial state value
        /// - `reducer`: The reducer implementation
        /// - `config`: Store label and subscription behaviour
        #[must_use]
        pub const fn with_config(initial_state: R::State, reducer: R, config: StoreConfig) -> Self {
            Self {
                state: initial_state,
                reducer,
                subscribers: Vec::new(),
                config,
            }
        }

        /// Current state
        #[must_use]
        pub const fn state(&self) -> &R::State {
            &self.state
        }

        /// The reducer this store applies
        #[must_use]
        pub const fn reducer(&self) -> &R {
            &self.reducer
        }

        /// Store configuration
        #[must_use]
        pub const fn config(&self) -> &StoreConfig {
            &self.config
        }

        /// Number of registered subscribers
        #[must_use]
        pub fn subscriber_count(&self) -> usize {
            self.subscribers.len()
        }

        /// Returns `true` if this exact handle is registered
        #[must_use]
        pub fn is_subscribed(&self, subscriber: &Subscriber<R::State>) -> bool {
            self.subscribers
                .iter()
                .any(|existing| same_subscriber(existing, subscriber))
        }

        /// Consume the store and return its state
        #[must_use]
        pub fn into_state(self) -> R::State {
            self.state
        }

        /// Dispatch an action to the store
        ///
        /// This is the primary way to change state:
        /// 1. Calls the reducer with a copy of the current state and the action
        /// 2. Replaces the held state with the result
        /// 3. Calls every subscriber with the new state, in subscription order
        ///
        /// All of this runs on the calling thread before `dispatch` returns.
        /// An action the reducer ignores is still a transition: the state is
        /// unchanged and subscribers are still notified.
        ///
        /// # Panics
        ///
        /// If the reducer or a subscriber panics, the panic propagates.
        /// The held state is only replaced once the reducer has returned.
        #[tracing::instrument(
            skip_all,
            name = "store_dispatch",
            fields(store = self.config.name, action = action.action_type())
        )]
        pub fn dispatch(&mut self, action: R::Action) {
            let action_type = action.action_type();
            let store = self.config.name;

            tracing::debug!("Processing action");
            metrics::counter!("store_actions_total", "store" => store, "action" => action_type)
                .increment(1);

            let start = std::time::Instant::now();
            let next = self.reducer.reduce(self.state.clone(), action);
            metrics::histogram!("store_reducer_duration_seconds", "store" => store)
                .record(start.elapsed().as_secs_f64());
            tracing::trace!("Reducer completed");

            self.state = next;
            self.notify_all();
        }

        /// Subscribe to state changes
        ///
        /// Subscribers are identified by the `Arc` they are registered with.
        /// Subscribing a handle that is already registered does nothing, so
        /// at most one registration per handle is ever in effect.
        ///
        /// A new subscriber immediately receives the current state unless
        /// [`StoreConfig::notify_on_subscribe`] is off.
        ///
        /// # Returns
        ///
        /// `true` if the subscriber was added, `false` if it was already registered
        pub fn subscribe(&mut self, subscriber: Subscriber<R::State>) -> bool {
            if self.is_subscribed(&subscriber) {
                tracing::trace!(store = self.config.name, "Subscriber already registered");
                return false;
            }

            if self.config.notify_on_subscribe {
                subscriber.new_state(&self.state);
            }

            self.subscribers.push(subscriber);
            self.record_subscriber_count();
            tracing::debug!(
                store = self.config.name,
                subscribers = self.subscribers.len(),
                "Subscriber added"
            );
            true
        }

        /// Remove a subscriber
        ///
        /// Unsubscribing a handle that is not registered does nothing.
        ///
        /// # Returns
        ///
        /// `true` if the subscriber was removed, `false` if it was not registered
        pub fn unsubscribe(&mut self, subscriber: &Subscriber<R::State>) -> bool {
            let before = self.subscribers.len();
            self.subscribers
                .retain(|existing| !same_subscriber(existing, subscriber));
            let removed = self.subscribers.len() != before;

            if removed {
                self.record_subscriber_count();
                tracing::debug!(
                    store = self.config.name,
                    subscribers = self.subscribers.len(),
                    "Subscriber removed"
                );
            }

            removed
        }

        fn notify_all(&self) {
            tracing::trace!("Notifying {} subscribers", self.subscribers.len());
            for subscriber in &self.subscribers {
                subscriber.new_state(&self.state);
            }
            metrics::counter!("store_notifications_total", "store" => self.config.name)
                .increment(self.subscribers.len() as u64);
        }

        fn record_subscriber_count(&self) {
            // Note: Precision loss acceptable for metrics (subscriber counts < 2^52)
            #[allow(clippy::cast_precision_loss)]
            metrics::gauge!("store_subscribers", "store" => self.config.name)
                .set(self.subscribers.len() as f64);
        }
    }

    impl<R> std::fmt::Debug for Store<R>
    where
        R: Reducer,
        R::State: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Store")
                .field("state", &self.state)
                .field("subscribers", &self.subscribers.len())
                .field("config", &self.config)
                .finish_non_exhaustive()
        }
    }

}

// Re-export the Store at the crate root
pub use shared::SharedStore;
pub use store::{Store, Subscriber};
