use async_trait::async_trait;
use reqwest::Client;

use crate::config::ApiConfig;
use crate::error::{FetchError, ProtocolError};
use crate::photo::Photo;

/// One network call returning an ordered list of photos.
#[async_trait]
pub trait PhotoSource: Send + Sync {
    async fn fetch_photos(&self) -> Result<Vec<Photo>, FetchError>;
}

/// HTTP client for the Mars photos endpoint.
///
/// No retries. Timeouts are the ones configured in [`ApiConfig`].
#[derive(Clone)]
pub struct MarsApiClient {
    client: Client,
    photos_url: String,
}

impl MarsApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            photos_url: config.photos_url(),
        })
    }

    pub fn photos_url(&self) -> &str {
        &self.photos_url
    }

    /// Underlying HTTP client, shared with the image loader.
    pub fn http(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl PhotoSource for MarsApiClient {
    async fn fetch_photos(&self) -> Result<Vec<Photo>, FetchError> {
        tracing::debug!(url = %self.photos_url, "Fetching photo list");

        let response = self.client.get(&self.photos_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProtocolError::Status {
                status: status.as_u16(),
                url: self.photos_url.clone(),
            }
            .into());
        }

        let body = response.bytes().await?;
        let photos: Vec<Photo> =
            serde_json::from_slice(&body).map_err(|source| ProtocolError::Malformed { source })?;

        tracing::debug!(count = photos.len(), "Photo list received");
        Ok(photos)
    }
}
