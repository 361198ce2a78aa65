use async_trait::async_trait;

use crate::error::FetchError;
use crate::network::PhotoSource;
use crate::photo::Photo;

/// Source of the photo list as seen by the controller.
///
/// Tests substitute their own implementation.
#[async_trait]
pub trait PhotosRepository: Send + Sync {
    async fn get_photos(&self) -> Result<Vec<Photo>, FetchError>;
}

/// Pass-through repository over a [`PhotoSource`]. No caching.
pub struct NetworkPhotosRepository<S> {
    source: S,
}

impl<S: PhotoSource> NetworkPhotosRepository<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

#[async_trait]
impl<S: PhotoSource> PhotosRepository for NetworkPhotosRepository<S> {
    async fn get_photos(&self) -> Result<Vec<Photo>, FetchError> {
        self.source.fetch_photos().await
    }
}
