use crate::ui::mvi::Reducer;
use crate::ui::viewer::intent::ViewerIntent;
use crate::ui::viewer::state::{ViewerState, MAX_SCALE, MIN_SCALE};

pub struct ViewerReducer;

impl Reducer for ViewerReducer {
    type State = ViewerState;
    type Intent = ViewerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ViewerIntent::Pan { dx, dy } if dx.is_finite() && dy.is_finite() => ViewerState {
                offset_x: state.offset_x + dx,
                offset_y: state.offset_y + dy,
                ..state
            },
            ViewerIntent::Zoom { factor } if factor.is_finite() && factor > 0.0 => ViewerState {
                scale: (state.scale * factor).clamp(MIN_SCALE, MAX_SCALE),
                ..state
            },
            ViewerIntent::Rotate { degrees } if degrees.is_finite() => ViewerState {
                rotation: state.rotation + degrees,
                ..state
            },
            ViewerIntent::Reset => ViewerState::default(),
            // Non-finite or non-positive deltas
            _ => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pan_accumulates() {
        let state = ViewerReducer::reduce(ViewerState::default(), ViewerIntent::Pan { dx: 4.0, dy: -2.0 });
        let state = ViewerReducer::reduce(state, ViewerIntent::Pan { dx: 4.0, dy: -2.0 });
        assert_eq!(state.offset_x, 8.0);
        assert_eq!(state.offset_y, -4.0);
        assert_eq!(state.scale, 1.0);
    }

    #[test]
    fn zoom_multiplies() {
        let state = ViewerReducer::reduce(ViewerState::default(), ViewerIntent::Zoom { factor: 2.0 });
        assert_eq!(state.scale, 2.0);
        let state = ViewerReducer::reduce(state, ViewerIntent::Zoom { factor: 0.5 });
        assert_eq!(state.scale, 1.0);
    }

    #[test]
    fn zoom_clamps_to_range() {
        let mut state = ViewerState::default();
        for _ in 0..20 {
            state = ViewerReducer::reduce(state, ViewerIntent::Zoom { factor: 1.5 });
        }
        assert_eq!(state.scale, MAX_SCALE);

        for _ in 0..40 {
            state = ViewerReducer::reduce(state, ViewerIntent::Zoom { factor: 0.5 });
        }
        assert_eq!(state.scale, MIN_SCALE);

        // Zooming back in starts from the clamp, not from an accumulated value.
        let state = ViewerReducer::reduce(state, ViewerIntent::Zoom { factor: 2.0 });
        assert_eq!(state.scale, 1.0);
    }

    #[test]
    fn rotation_is_unbounded() {
        let mut state = ViewerState::default();
        for _ in 0..30 {
            state = ViewerReducer::reduce(state, ViewerIntent::Rotate { degrees: 15.0 });
        }
        assert_eq!(state.rotation, 450.0);
    }

    #[test]
    fn invalid_deltas_are_ignored() {
        let state = ViewerState {
            scale: 2.0,
            rotation: 10.0,
            offset_x: 1.0,
            offset_y: 1.0,
        };
        assert_eq!(ViewerReducer::reduce(state, ViewerIntent::Zoom { factor: 0.0 }), state);
        assert_eq!(ViewerReducer::reduce(state, ViewerIntent::Zoom { factor: -1.0 }), state);
        assert_eq!(ViewerReducer::reduce(state, ViewerIntent::Zoom { factor: f32::NAN }), state);
        assert_eq!(
            ViewerReducer::reduce(state, ViewerIntent::Pan { dx: f32::INFINITY, dy: 0.0 }),
            state
        );
        assert_eq!(
            ViewerReducer::reduce(state, ViewerIntent::Rotate { degrees: f32::NAN }),
            state
        );
    }

    #[test]
    fn reset_restores_identity() {
        let state = ViewerState {
            scale: 2.5,
            rotation: 90.0,
            offset_x: -3.0,
            offset_y: 7.0,
        };
        let state = ViewerReducer::reduce(state, ViewerIntent::Reset);
        assert!(state.is_identity());
    }
}
