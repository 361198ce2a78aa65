//! Error types for fetching and sharing photos.
//!
//! The controller collapses every [`FetchError`] into a single
//! `RequestStatus::Error`; the variants exist for logging and tests.

use std::path::PathBuf;
use thiserror::Error;

/// Failure at the remote data source / repository boundary.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connectivity or I/O failure (DNS, refused connection, timeout, broken body).
    #[error("Transport error: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The server answered, but not with a usable photo list.
    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

/// Non-success response or unparsable payload.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("malformed photo list: {source}")]
    Malformed {
        #[source]
        source: serde_json::Error,
    },

    #[error("could not decode image: {source}")]
    Image {
        #[source]
        source: image::ImageError,
    },
}

impl FetchError {
    /// Stable identifier used in log fields.
    pub fn error_type(&self) -> &'static str {
        match self {
            FetchError::Transport { .. } => "transport_error",
            FetchError::Protocol(ProtocolError::Status { .. }) => "status_error",
            FetchError::Protocol(ProtocolError::Malformed { .. }) => "malformed_payload",
            FetchError::Protocol(ProtocolError::Image { .. }) => "image_decode_error",
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport { .. })
    }

    pub fn is_protocol(&self) -> bool {
        matches!(self, FetchError::Protocol(_))
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(source: reqwest::Error) -> Self {
        FetchError::Transport { source }
    }
}

/// Failure while preparing or handing off a shared photo.
#[derive(Debug, Error)]
pub enum ShareError {
    #[error("Failed to download photo: {0}")]
    Download(#[from] FetchError),

    #[error("Failed to encode JPEG: {source}")]
    Encode {
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Share target failed: {message}")]
    Target { message: String },

    #[error("Share task stopped: {source}")]
    Interrupted {
        #[source]
        source: tokio::task::JoinError,
    },
}

impl ShareError {
    pub fn error_type(&self) -> &'static str {
        match self {
            ShareError::Download(_) => "download_error",
            ShareError::Encode { .. } => "encode_error",
            ShareError::Write { .. } => "write_error",
            ShareError::Target { .. } => "target_error",
            ShareError::Interrupted { .. } => "interrupted",
        }
    }
}
