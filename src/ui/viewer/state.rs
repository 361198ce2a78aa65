use crate::ui::mvi::UiState;

pub const MIN_SCALE: f32 = 0.5;
pub const MAX_SCALE: f32 = 3.0;

/// Accumulated gesture transform of the detail view.
///
/// `scale` stays within [`MIN_SCALE`, `MAX_SCALE`]; pan offsets (view
/// pixels) and rotation (degrees) are unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerState {
    pub scale: f32,
    pub rotation: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            rotation: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl UiState for ViewerState {}

impl ViewerState {
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}
