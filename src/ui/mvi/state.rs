//! Base trait for UI state.

/// Marker trait for state objects.
///
/// States are plain values: cloned to snapshot, compared to detect
/// changes, defaulted to reset.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
