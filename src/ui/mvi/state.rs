//! Base trait for UI state.

/// Marker trait for UI state objects.
///
/// States are cloned to produce new states, compared to detect changes,
/// and carry everything the view needs to render.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
