//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Produces the next state from the current one and an intent.
///
/// Reducers are the only place state transitions happen. An intent whose
/// preconditions do not hold returns the state unchanged.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Consume the current state and return the next one.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
