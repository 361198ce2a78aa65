//! Photo gallery feature: request status, selected photo and the
//! controller that drives the fetch cycle.
//!
//! - `state.rs` - `RequestStatus` (Loading → Success | Error) and `GalleryState`
//! - `intent.rs` - Refresh, fetch outcomes, photo selection
//! - `reducer.rs` - pure transitions
//! - `controller.rs` - owns the state cell and the fetch tasks

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::GalleryController;
pub use intent::GalleryIntent;
pub use reducer::GalleryReducer;
pub use state::{GalleryState, RequestStatus};
