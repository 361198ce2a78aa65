use crate::photo::Photo;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum GalleryIntent {
    /// A new fetch was started (startup or retry).
    Refresh,
    /// A fetch settled with photos.
    FetchSucceeded { photos: Vec<Photo> },
    /// A fetch failed. The error kind is not kept.
    FetchFailed,
    /// User tapped a photo.
    SelectPhoto { photo: Photo },
}

impl Intent for GalleryIntent {}
