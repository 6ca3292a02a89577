//! Reducer composition utilities
//!
//! This module provides utilities for composing reducers in various ways:
//! - **`combine_reducers`**: Run multiple reducers on the same state/action
//! - **`scope_reducer`**: Focus a reducer on a subset of state
//!
//! # Examples
//!
//! ## Combining Reducers
//!
//! ```
//! use flowstate_core::Reducer;
//! use flowstate_core::composition::combine_reducers;
//!
//! #[derive(Clone, Default)]
//! struct MyState {
//!     count: i32,
//!     name: String,
//! }
//!
//! #[derive(Clone)]
//! enum MyAction {
//!     Increment,
//!     SetName(String),
//! }
//!
//! struct CounterReducer;
//! struct NameReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = MyState;
//!     type Action = MyAction;
//!
//!     fn reduce(&self, mut state: MyState, action: MyAction) -> MyState {
//!         if matches!(action, MyAction::Increment) {
//!             state.count += 1;
//!         }
//!         state
//!     }
//! }
//!
//! impl Reducer for NameReducer {
//!     type State = MyState;
//!     type Action = MyAction;
//!
//!     fn reduce(&self, mut state: MyState, action: MyAction) -> MyState {
//!         if let MyAction::SetName(name) = action {
//!             state.name = name;
//!         }
//!         state
//!     }
//! }
//!
//! let combined = combine_reducers(vec![Box::new(CounterReducer), Box::new(NameReducer)]);
//! let state = combined.reduce(MyState::default(), MyAction::Increment);
//! assert_eq!(state.count, 1);
//! ```

use crate::reducer::Reducer;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer is run in sequence, the output state of one feeding the next.
/// This is useful when you want to split reducer logic across multiple implementations.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `A`: The action type
#[must_use]
pub fn combine_reducers<S, A>(
    reducers: Vec<Box<dyn Reducer<State = S, Action = A> + Send + Sync>>,
) -> CombinedReducer<S, A>
where
    S: 'static,
    A: Clone + 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A>
where
    S: 'static,
    A: Clone + 'static,
{
    reducers: Vec<Box<dyn Reducer<State = S, Action = A> + Send + Sync>>,
}

impl<S, A> Reducer for CombinedReducer<S, A>
where
    S: 'static,
    A: Clone + 'static,
{
    type State = S;
    type Action = A;

    fn reduce(&self, state: Self::State, action: Self::Action) -> Self::State {
        self.reducers
            .iter()
            .fold(state, |state, reducer| reducer.reduce(state, action.clone()))
    }
}

/// Scopes a reducer to operate on a subset of a larger state.
///
/// This allows you to reuse reducers designed for smaller state types
/// within a larger application state. The parent state only needs to expose
/// a getter and a setter for the child; no trait hierarchy is involved.
///
/// # Type Parameters
///
/// - `S`: The parent state type
/// - `SubS`: The child state type (subset of `S`)
/// - `A`: The action type
///
/// # Examples
///
/// ```
/// use flowstate_core::Reducer;
/// use flowstate_core::composition::scope_reducer;
///
/// #[derive(Clone, Default)]
/// struct CounterState {
///     count: i32,
/// }
///
/// enum CounterAction {
///     Increment,
/// }
///
/// struct CounterReducer;
///
/// impl Reducer for CounterReducer {
///     type State = CounterState;
///     type Action = CounterAction;
///
///     fn reduce(&self, mut state: CounterState, action: CounterAction) -> CounterState {
///         match action {
///             CounterAction::Increment => state.count += 1,
///         }
///         state
///     }
/// }
///
/// #[derive(Clone, Default)]
/// struct AppState {
///     counter: CounterState,
///     other_data: String,
/// }
///
/// let scoped = scope_reducer(
///     CounterReducer,
///     |app_state: &AppState| &app_state.counter,
///     |app_state: &mut AppState, counter: CounterState| {
///         app_state.counter = counter;
///     },
/// );
///
/// let state = scoped.reduce(AppState::default(), CounterAction::Increment);
/// assert_eq!(state.counter.count, 1);
/// ```
pub fn scope_reducer<S, SubS, A, R>(
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
) -> ScopedReducer<S, SubS, A, R>
where
    SubS: Clone,
    R: Reducer<State = SubS, Action = A>,
{
    ScopedReducer {
        reducer,
        get_state,
        set_state,
        _phantom: std::marker::PhantomData,
    }
}

/// A scoped reducer that operates on a subset of state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, R>
where
    SubS: Clone,
    R: Reducer<State = SubS, Action = A>,
{
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
    _phantom: std::marker::PhantomData<fn(A)>,
}

impl<S, SubS, A, R> ScopedReducer<S, SubS, A, R>
where
    SubS: Clone,
    R: Reducer<State = SubS, Action = A>,
{
    /// Returns the inner reducer.
    #[must_use]
    pub const fn inner(&self) -> &R {
        &self.reducer
    }
}

impl<S, SubS, A, R> Clone for ScopedReducer<S, SubS, A, R>
where
    SubS: Clone,
    R: Reducer<State = SubS, Action = A> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            reducer: self.reducer.clone(),
            get_state: self.get_state,
            set_state: self.set_state,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<S, SubS, A, R> std::fmt::Debug for ScopedReducer<S, SubS, A, R>
where
    SubS: Clone,
    R: Reducer<State = SubS, Action = A> + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopedReducer")
            .field("reducer", &self.reducer)
            .finish_non_exhaustive()
    }
}

impl<S, SubS, A, R> Reducer for ScopedReducer<S, SubS, A, R>
where
    SubS: Clone,
    R: Reducer<State = SubS, Action = A>,
{
    type State = S;
    type Action = A;

    fn reduce(&self, mut state: Self::State, action: Self::Action) -> Self::State {
        // Extract the sub-state
        let sub_state = (self.get_state)(&state).clone();

        // Run the reducer on the sub-state and write the result back
        let next = self.reducer.reduce(sub_state, action);
        (self.set_state)(&mut state, next);

        state
    }
}
