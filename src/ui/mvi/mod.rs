//! Model-View-Intent (MVI) primitives.
//!
//! Every state change in snapfeed flows one way:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: a complete value the view renders from
//! - **Intent**: a user action (key press, paste) or a feed mutation
//! - **Reducer**: pure function from (State, Intent) to the next State
//!
//! Side effects (clock reads, id generation, preview handles) happen
//! before dispatch and travel inside the intent.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
