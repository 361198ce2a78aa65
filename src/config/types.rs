use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub share: ShareConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Remote photo API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the photo server (scheme + host).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the photo list endpoint, relative to `base_url`.
    #[serde(default = "default_photos_path")]
    pub photos_path: String,
    /// Total request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Settings for the share action on the detail screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareConfig {
    /// JPEG quality used when re-encoding the shared photo (1..=100).
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
    /// File name written inside the cache directory.
    #[serde(default = "default_file_name")]
    pub file_name: String,
    /// Cache directory override. Defaults to the platform cache dir.
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,
    /// Program (plus leading args) that receives the shared file path.
    /// When unset the path is copied to the clipboard.
    #[serde(default)]
    pub command: Option<Vec<String>>,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_grid_columns")]
    pub grid_columns: u16,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_base_url() -> String {
    "https://android-kotlin-fun-mars-server.appspot.com".to_string()
}

fn default_photos_path() -> String {
    "photos".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_jpeg_quality() -> u8 {
    73
}

fn default_file_name() -> String {
    "photo.jpg".to_string()
}

fn default_grid_columns() -> u16 {
    2
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl ApiConfig {
    /// Full URL of the photo list endpoint.
    pub fn photos_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.photos_path.trim_start_matches('/')
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }
}

impl ShareConfig {
    /// Directory the shared JPEG is written to.
    pub fn resolved_cache_dir(&self) -> PathBuf {
        match &self.cache_dir {
            Some(dir) => dir.clone(),
            None => dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("mars-photos"),
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            photos_path: default_photos_path(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            jpeg_quality: default_jpeg_quality(),
            file_name: default_file_name(),
            cache_dir: None,
            command: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            grid_columns: default_grid_columns(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
