//! # Flowstate Core
//!
//! Core traits and types for unidirectional state containers.
//!
//! This crate provides the fundamental abstractions for building applications
//! where all state changes flow one way: a caller describes an intended change
//! as an action, a reducer computes the next state, and a store publishes that
//! state to its subscribers.
//!
//! ## Core Concepts
//!
//! - **State**: Plain owned data describing the whole of a feature
//! - **Action**: Immutable instruction describing one intended change
//! - **Reducer**: Pure function `(State, Action) → State`
//! - **Subscriber**: Observer that receives every new state snapshot
//!
//! ## Architecture Principles
//!
//! - Unidirectional Data Flow
//! - Pure reducers (no hidden I/O, no failure path)
//! - Closed action enums with exhaustive matching
//! - Composition over inheritance (scoped reducers instead of state hierarchies)
//!
//! ## Example
//!
//! ```
//! use flowstate_core::reducer::Reducer;
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! enum CounterAction {
//!     Increment,
//!     Reset,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!
//!     fn reduce(&self, mut state: CounterState, action: CounterAction) -> CounterState {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!             CounterAction::Reset => state.count = 0,
//!         }
//!         state
//!     }
//! }
//!
//! let state = CounterReducer.reduce(CounterState::default(), CounterAction::Increment);
//! assert_eq!(state.count, 1);
//! ```

/// Action module - stable identification of action variants
pub mod action;

/// Reducer composition utilities
pub mod composition;

/// Subscriber module - observers of store state
pub mod subscriber;

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action) → State`
///
/// They contain all state-transition logic and are deterministic and testable.
pub mod reducer {
    /// The Reducer trait - core abstraction for state transitions
    ///
    /// # Type Parameters
    ///
    /// - `State`: The state this reducer transforms
    /// - `Action`: The action type this reducer processes
    ///
    /// # Contract
    ///
    /// - Pure: no side effects, same inputs always give the same output
    /// - Total: every action yields a next state; there is no error path
    /// - An action the reducer does not care about returns `state` unchanged
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for TodosReducer {
    ///     type State = TodosState;
    ///     type Action = TodoAction;
    ///
    ///     fn reduce(&self, mut state: TodosState, action: TodoAction) -> TodosState {
    ///         match action {
    ///             TodoAction::ClearCompleted => {
    ///                 state.todos.retain(|todo| !todo.completed);
    ///                 state
    ///             }
    ///             _ => state,
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// Reduce an action into the next state
        ///
        /// Takes ownership of the current state and returns the state that
        /// replaces it. Callers never observe a partially reduced state.
        ///
        /// # Arguments
        ///
        /// - `state`: The current state, moved in
        /// - `action`: The action to process
        ///
        /// # Returns
        ///
        /// The next state
        fn reduce(&self, state: Self::State, action: Self::Action) -> Self::State;
    }
}

// Re-export the traits at the crate root
pub use action::Action;
pub use reducer::Reducer;
pub use subscriber::StoreSubscriber;
