//! Store subscribers.
//!
//! A subscriber is any observer that wants to see every state the store
//! produces: a list screen, a logger, a test probe.
//!
//! Subscribers are registered as `Arc<dyn StoreSubscriber<S>>` handles and the
//! store identifies them by pointer, so the same handle subscribed twice is
//! still a single registration.
//!
//! # Example
//!
//! ```
//! use flowstate_core::subscriber::StoreSubscriber;
//! use std::sync::Mutex;
//!
//! #[derive(Default)]
//! struct LastCount {
//!     last: Mutex<Option<i64>>,
//! }
//!
//! impl StoreSubscriber<i64> for LastCount {
//!     fn new_state(&self, state: &i64) {
//!         *self.last.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = Some(*state);
//!     }
//! }
//! ```

use std::sync::Arc;

/// Observer of store state.
///
/// `new_state` is called synchronously on the dispatching thread, once on
/// subscription with the current state and then once per dispatched action.
/// Implementations receive a borrowed snapshot; anything they keep must be
/// cloned out, which keeps the store's copy private.
///
/// Implementations use interior mutability for whatever they record. The
/// `Send + Sync` bound lets a store holding subscribers move behind a lock.
pub trait StoreSubscriber<S>: Send + Sync {
    /// Called with each new state snapshot.
    fn new_state(&self, state: &S);
}

/// Returns `true` if both handles point at the same subscriber.
///
/// Compares data pointers only; the vtable half of the fat pointer is ignored
/// because it can differ between codegen units for the same type.
#[must_use]
pub fn same_subscriber<S>(
    a: &Arc<dyn StoreSubscriber<S>>,
    b: &Arc<dyn StoreSubscriber<S>>,
) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a).cast::<()>(),
        Arc::as_ptr(b).cast::<()>(),
    )
}

impl<S, F> StoreSubscriber<S> for F
where
    F: Fn(&S) + Send + Sync,
{
    fn new_state(&self, state: &S) {
        self(state);
    }
}
