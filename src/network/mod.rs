//! Remote data source for the photo list and photo bytes.

mod client;
mod loader;

pub use client::{MarsApiClient, PhotoSource};
pub use loader::ImageLoader;
