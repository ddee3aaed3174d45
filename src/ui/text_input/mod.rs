mod intent;
mod reducer;
mod state;

pub use intent::TextInputIntent;
pub use reducer::TextInputReducer;
pub use state::TextInputState;
