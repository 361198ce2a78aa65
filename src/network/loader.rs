use image::DynamicImage;
use reqwest::Client;

use crate::error::{FetchError, ProtocolError};

/// Downloads and decodes photo bytes.
#[derive(Clone)]
pub struct ImageLoader {
    client: Client,
}

impl ImageLoader {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetch `url` and decode it into an image.
    ///
    /// Non-2xx responses and undecodable bytes are protocol errors.
    pub async fn fetch(&self, url: &str) -> Result<DynamicImage, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProtocolError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            }
            .into());
        }

        let bytes = response.bytes().await?;
        let image =
            image::load_from_memory(&bytes).map_err(|source| ProtocolError::Image { source })?;

        tracing::debug!(
            url,
            width = image.width(),
            height = image.height(),
            "Image decoded"
        );
        Ok(image)
    }
}
