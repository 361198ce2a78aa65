//! Sharing the photo shown on the detail screen.
//!
//! The photo is downloaded again, re-encoded as JPEG, written to a fixed
//! file in the cache directory and handed to a [`ShareTarget`].

mod target;

pub use target::{ClipboardTarget, CommandTarget, ShareTarget};

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;

use crate::config::ShareConfig;
use crate::error::ShareError;
use crate::network::ImageLoader;
use crate::photo::Photo;

/// MIME type announced for shared files.
pub const SHARE_MIME: &str = "image/jpg";

/// A file ready to be handed to a share target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedFile {
    pub photo_id: String,
    pub path: PathBuf,
    pub mime: &'static str,
}

pub struct Sharer {
    loader: ImageLoader,
    target: Arc<dyn ShareTarget>,
    quality: u8,
    path: PathBuf,
}

impl Sharer {
    pub fn new(loader: ImageLoader, config: &ShareConfig, target: Arc<dyn ShareTarget>) -> Self {
        Self {
            loader,
            target,
            quality: config.jpeg_quality,
            path: config.resolved_cache_dir().join(&config.file_name),
        }
    }

    /// Where the shared JPEG is written. Overwritten by every share.
    pub fn output_path(&self) -> &PathBuf {
        &self.path
    }

    /// Download, encode, write and deliver `photo`.
    ///
    /// Everything after the download runs on the blocking pool: the
    /// encoder, the file write and the share target may all block.
    pub async fn share(&self, photo: &Photo) -> Result<SharedFile, ShareError> {
        let image = self.loader.fetch(&photo.img_src).await?;

        let file = SharedFile {
            photo_id: photo.id.clone(),
            path: self.path.clone(),
            mime: SHARE_MIME,
        };
        let target = Arc::clone(&self.target);
        let quality = self.quality;
        let pending = file.clone();
        let bytes = tokio::task::spawn_blocking(move || {
            write_and_deliver(&image, quality, &pending, target.as_ref())
        })
        .await
        .map_err(|source| ShareError::Interrupted { source })??;

        tracing::info!(
            photo_id = %file.photo_id,
            path = %file.path.display(),
            bytes,
            target = self.target.name(),
            "Photo shared"
        );
        Ok(file)
    }
}

/// Encode, overwrite `file.path` and hand the file to `target`.
/// Returns the number of bytes written.
fn write_and_deliver(
    image: &DynamicImage,
    quality: u8,
    file: &SharedFile,
    target: &dyn ShareTarget,
) -> Result<usize, ShareError> {
    let bytes = encode_jpeg(image, quality)?;

    if let Some(dir) = file.path.parent() {
        fs::create_dir_all(dir).map_err(|source| ShareError::Write {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    fs::write(&file.path, &bytes).map_err(|source| ShareError::Write {
        path: file.path.clone(),
        source,
    })?;

    target.deliver(file)?;
    Ok(bytes.len())
}

/// Encode `image` as JPEG. Alpha is dropped.
pub fn encode_jpeg(image: &DynamicImage, quality: u8) -> Result<Vec<u8>, ShareError> {
    let mut bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut bytes, quality);
    DynamicImage::ImageRgb8(image.to_rgb8())
        .write_with_encoder(encoder)
        .map_err(|source| ShareError::Encode { source })?;
    Ok(bytes)
}
