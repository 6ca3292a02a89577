//! # Flowstate Testing
//!
//! Testing utilities and helpers for the Flowstate state container.
//!
//! This crate provides:
//! - `ReducerTest`, a Given-When-Then harness for reducers
//! - `RecordingSubscriber`, a subscriber that keeps every snapshot it receives
//! - Tracing setup for tests
//!
//! ## Example
//!
//! ```ignore
//! use flowstate_testing::{RecordingSubscriber, ReducerTest};
//! use flowstate_runtime::Store;
//! use std::sync::Arc;
//!
//! #[test]
//! fn test_add_todo() {
//!     let recorder = Arc::new(RecordingSubscriber::new());
//!     let mut store = Store::new(AppState::default(), app_reducer());
//!     store.subscribe(recorder.clone());
//!
//!     store.dispatch(TodoAction::AddTodo { text: "Buy milk".into() });
//!
//!     assert_eq!(recorder.len(), 2);
//! }
//! ```


/// Mock implementations of collaborator traits
pub mod mocks {
    use flowstate_core::subscriber::StoreSubscriber;
    use std::sync::{Mutex, PoisonError};

    /// Subscriber that records every state it is given
    ///
    /// Snapshots are cloned on delivery, so later store transitions never
    /// alter what was recorded.
    ///
    /// # Example
    ///
    /// ```
    /// use flowstate_core::subscriber::StoreSubscriber;
    /// use flowstate_testing::mocks::RecordingSubscriber;
    ///
    /// let recorder = RecordingSubscriber::new();
    /// recorder.new_state(&1);
    /// recorder.new_state(&2);
    ///
    /// assert_eq!(recorder.states(), vec![1, 2]);
    /// assert_eq!(recorder.last(), Some(2));
    /// ```
    #[derive(Debug)]
    pub struct RecordingSubscriber<S> {
        states: Mutex<Vec<S>>,
    }

    impl<S> RecordingSubscriber<S> {
        /// Create an empty recorder
        #[must_use]
        pub const fn new() -> Self {
            Self {
                states: Mutex::new(Vec::new()),
            }
        }

        /// Number of states received
        #[must_use]
        pub fn len(&self) -> usize {
            self.states
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .len()
        }

        /// Returns `true` if nothing has been received
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }

        /// Forget everything received so far
        pub fn clear(&self) {
            self.states
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clear();
        }
    }

    impl<S: Clone> RecordingSubscriber<S> {
        /// All states received, oldest first
        #[must_use]
        pub fn states(&self) -> Vec<S> {
            self.states
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// Most recent state received
        #[must_use]
        pub fn last(&self) -> Option<S> {
            self.states
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .last()
                .cloned()
        }
    }

    impl<S> Default for RecordingSubscriber<S> {
        fn default() -> Self {
            Self::new()
        }
    }

    impl<S> StoreSubscriber<S> for RecordingSubscriber<S>
    where
        S: Clone + Send,
    {
        fn new_state(&self, state: &S) {
            self.states
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(state.clone());
        }
    }
}

/// Test helpers and utilities
pub mod helpers {
    /// Install a tracing subscriber that writes through the test harness
    ///
    /// Honours `RUST_LOG`, defaulting to `debug`. Safe to call from every
    /// test; only the first call installs anything.
    pub fn init_test_tracing() {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    }
}

// Re-export commonly used items
pub use helpers::init_test_tracing;
pub use mocks::RecordingSubscriber;
pub use reducer_test::ReducerTest;
