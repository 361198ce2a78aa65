use crate::photo::Photo;
use crate::ui::mvi::UiState;

/// Progress/outcome of the photo list request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestStatus {
    /// Initial state, and the state while a fetch is in flight.
    #[default]
    Loading,
    /// Photos in source order. May be empty.
    Success(Vec<Photo>),
    /// Fetch failed. Carries nothing; the view only offers retry.
    Error,
}

impl RequestStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Photos of a successful fetch, empty otherwise.
    pub fn photos(&self) -> &[Photo] {
        match self {
            Self::Success(photos) => photos,
            Self::Loading | Self::Error => &[],
        }
    }
}

/// Everything the gallery screens render.
///
/// `current_photo` is set only by a user selection and survives later
/// fetches, including failed ones.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryState {
    pub request_status: RequestStatus,
    pub current_photo: Option<Photo>,
}

impl UiState for GalleryState {}
