use crate::ui::gallery::intent::GalleryIntent;
use crate::ui::gallery::state::{GalleryState, RequestStatus};
use crate::ui::mvi::Reducer;

pub struct GalleryReducer;

impl Reducer for GalleryReducer {
    type State = GalleryState;
    type Intent = GalleryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Show the spinner right away instead of a stale Error/Success.
            GalleryIntent::Refresh => GalleryState {
                request_status: RequestStatus::Loading,
                ..state
            },
            GalleryIntent::FetchSucceeded { photos } => GalleryState {
                request_status: RequestStatus::Success(photos),
                ..state
            },
            GalleryIntent::FetchFailed => GalleryState {
                request_status: RequestStatus::Error,
                ..state
            },
            GalleryIntent::SelectPhoto { photo } => GalleryState {
                current_photo: Some(photo),
                ..state
            },
        }
    }
}
