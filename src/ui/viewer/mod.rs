//! Detail screen: pan/zoom/rotate state and drawing a photo into cells.
//!
//! - `state.rs` - accumulated transform
//! - `intent.rs` - Pan, Zoom, Rotate, Reset
//! - `reducer.rs` - accumulation with scale clamping
//! - `transform.rs` - view pixel → source pixel mapping
//! - `view.rs` - half-block widget

mod intent;
mod reducer;
mod state;
mod transform;
mod view;

pub use intent::ViewerIntent;
pub use reducer::ViewerReducer;
pub use state::{ViewerState, MAX_SCALE, MIN_SCALE};
pub use transform::Transform;
pub use view::PhotoView;
