use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerIntent {
    /// Move the photo by a delta in view pixels.
    Pan { dx: f32, dy: f32 },
    /// Multiply the scale by `factor`.
    Zoom { factor: f32 },
    /// Rotate by `degrees` (clockwise).
    Rotate { degrees: f32 },
    Reset,
}

impl Intent for ViewerIntent {}
