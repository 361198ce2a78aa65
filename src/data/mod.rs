//! Repository seam between the controller and the remote data source.

mod repository;

pub use repository::{NetworkPhotosRepository, PhotosRepository};
