//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are either user actions (retry, item tap, zoom) or results
/// delivered by background work (a fetch settling).
pub trait Intent: Send + 'static {}
