//! Unidirectional state primitives shared by the gallery and the viewer.
//!
//! A screen keeps one state value. Key presses and background results are
//! turned into intents, and a reducer folds each intent into the next
//! state. Views only ever read the state.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
