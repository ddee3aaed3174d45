//! Base trait for intents.

/// Marker trait for intent objects.
///
/// An intent is a request to change state: typing into a field, liking a
/// post, publishing the draft. Reducers decide what it does.
pub trait Intent: Send + 'static {}
