//! Action trait for stable action identification.
//!
//! Actions are immutable, self-contained instructions describing an intended
//! state change. They carry no reference to state.
//!
//! The [`Action`] trait gives every variant a stable, human-readable type name.
//! Stores use it for log fields and metric labels, so the name must not change
//! when the enum is refactored.
//!
//! # Naming Convention
//!
//! Type names are `SCREAMING_SNAKE_CASE` renderings of the variant name:
//!
//! - `AddTodo` → `"ADD_TODO"`
//! - `SetVisibilityFilter` → `"SET_VISIBILITY_FILTER"`
//!
//! `#[derive(Action)]` from `flowstate-macros` generates this mapping.
//!
//! # Example
//!
//! ```
//! use flowstate_core::action::Action;
//!
//! enum CounterAction {
//!     Increment,
//!     Reset,
//! }
//!
//! impl Action for CounterAction {
//!     fn action_type(&self) -> &'static str {
//!         match self {
//!             CounterAction::Increment => "INCREMENT",
//!             CounterAction::Reset => "RESET",
//!         }
//!     }
//! }
//!
//! assert_eq!(CounterAction::Reset.action_type(), "RESET");
//! ```

/// An action that can be dispatched to a store.
///
/// # Thread Safety
///
/// No bounds are imposed here. Stores that cross threads add `Send` where they
/// need it.
pub trait Action {
    /// Returns the stable type name of this action.
    fn action_type(&self) -> &'static str;
}

/// Converts a `PascalCase` identifier into `SCREAMING_SNAKE_CASE`.
///
/// This is the same conversion `#[derive(Action)]` applies to variant names,
/// exposed for hand-written [`Action`] implementations.
///
/// ```
/// use flowstate_core::action::screaming_snake_case;
///
/// assert_eq!(screaming_snake_case("CompleteAll"), "COMPLETE_ALL");
/// ```
#[must_use]
pub fn screaming_snake_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    let mut prev_lower_or_digit = false;

    for ch in ident.chars() {
        if ch.is_uppercase() && prev_lower_or_digit {
            out.push('_');
        }
        prev_lower_or_digit = ch.is_lowercase() || ch.is_ascii_digit();
        out.extend(ch.to_uppercase());
    }

    out
}
