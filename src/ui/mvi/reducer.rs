use super::intent::Intent;
use super::state::UiState;

/// Computes the next state from the current state and an intent.
///
/// The only place state transitions happen. Must not perform I/O.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Consume the current state and return its replacement.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
