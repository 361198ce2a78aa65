//! Photo record returned by the Mars photos API.

use serde::{Deserialize, Serialize};

/// A single photo entry.
///
/// Immutable once deserialized; `id` is unique within one fetch result and
/// is used as the stable key in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    /// Image URL. Not validated here.
    #[serde(rename = "img_src")]
    pub img_src: String,
}

impl Photo {
    pub fn new(id: impl Into<String>, img_src: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            img_src: img_src.into(),
        }
    }
}
