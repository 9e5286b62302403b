//! Model-View-Intent primitives for the view layer.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Intents are user actions (a button click, a typed character) or
//! completed side effects (an API response). A reducer folds an intent
//! into immutable state. Side effects never happen inside a reducer.

/// Marker trait for view state objects.
///
/// States are immutable (clone to produce the next one), self-contained
/// (everything needed to render the screen) and comparable.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: user actions or completed side effects.
pub trait Intent: Send + 'static {}

/// Pure state transition: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
