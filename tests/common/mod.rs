//! Shared test utilities and fake data layers.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use mars_photos::config::ApiConfig;
use mars_photos::data::{NetworkPhotosRepository, PhotosRepository};
use mars_photos::error::{FetchError, ProtocolError};
use mars_photos::network::MarsApiClient;
use mars_photos::photo::Photo;
use mars_photos::ui::gallery::GalleryState;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::{watch, Notify};

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// The photo list served by the fakes.
pub fn fake_photos() -> Vec<Photo> {
    vec![
        Photo::new("424905", "https://mars.jpl.nasa.gov/msl-raw-images/msss/01000/mcam/1000MR0044631300503690E01_DXXX.jpg"),
        Photo::new("424906", "https://mars.jpl.nasa.gov/msl-raw-images/msss/01000/mcam/1000ML0044631300305227E03_DXXX.jpg"),
        Photo::new("424907", "https://mars.jpl.nasa.gov/msl-raw-images/msss/01000/mcam/1000MR0044631290503689E01_DXXX.jpg"),
    ]
}

pub fn fake_photos_json() -> String {
    serde_json::to_string(&fake_photos()).unwrap()
}

pub fn status_error(status: u16) -> FetchError {
    ProtocolError::Status {
        status,
        url: "http://fake/photos".to_string(),
    }
    .into()
}

/// Repository that always returns [`fake_photos`].
pub struct FakePhotosRepository {
    calls: AtomicUsize,
}

impl FakePhotosRepository {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PhotosRepository for FakePhotosRepository {
    async fn get_photos(&self) -> Result<Vec<Photo>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(fake_photos())
    }
}

/// Repository that always fails with the given HTTP status.
pub struct FailingRepository {
    status: u16,
}

impl FailingRepository {
    pub fn new(status: u16) -> Self {
        Self { status }
    }
}

#[async_trait]
impl PhotosRepository for FailingRepository {
    async fn get_photos(&self) -> Result<Vec<Photo>, FetchError> {
        Err(status_error(self.status))
    }
}

/// Real network repository aimed at a port nobody listens on, so every
/// call fails with a transport error.
pub struct TransportRepository {
    inner: NetworkPhotosRepository<MarsApiClient>,
    calls: AtomicUsize,
}

impl TransportRepository {
    pub fn new() -> Self {
        let config = ApiConfig {
            base_url: format!("http://127.0.0.1:{}", free_port()),
            timeout_seconds: 2,
            connect_timeout_seconds: 1,
            ..ApiConfig::default()
        };
        let client = MarsApiClient::new(&config).expect("Failed to build client");
        Self {
            inner: NetworkPhotosRepository::new(client),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PhotosRepository for TransportRepository {
    async fn get_photos(&self) -> Result<Vec<Photo>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get_photos().await
    }
}

/// Scripted outcome for one call on [`ScriptedRepository`].
pub enum Step {
    Photos(Vec<Photo>),
    Fail(u16),
    /// Wait until [`ScriptedRepository::release`] is called, then return the photos.
    Gated(Vec<Photo>),
    /// Never completes.
    Hang,
}

/// Repository that replays a script, one step per call.
///
/// Calls past the end of the script return an empty list.
pub struct ScriptedRepository {
    steps: Mutex<VecDeque<Step>>,
    gate: Notify,
    calls: AtomicUsize,
}

impl ScriptedRepository {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: Mutex::new(steps.into()),
            gate: Notify::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Wait until at least `count` calls have started.
    pub async fn wait_for_calls(&self, count: usize) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while self.calls() < count {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("Timed out waiting for repository calls");
    }

    /// Let one gated call through.
    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl PhotosRepository for ScriptedRepository {
    async fn get_photos(&self) -> Result<Vec<Photo>, FetchError> {
        let step = self.steps.lock().pop_front();
        self.calls.fetch_add(1, Ordering::SeqCst);
        match step {
            Some(Step::Photos(photos)) => Ok(photos),
            Some(Step::Fail(status)) => Err(status_error(status)),
            Some(Step::Gated(photos)) => {
                self.gate.notified().await;
                Ok(photos)
            }
            Some(Step::Hang) => std::future::pending().await,
            None => Ok(Vec::new()),
        }
    }
}

/// Wait until the state is no longer `Loading`.
pub async fn wait_settled(rx: &mut watch::Receiver<GalleryState>) -> GalleryState {
    tokio::time::timeout(
        Duration::from_secs(5),
        rx.wait_for(|state| !state.request_status.is_loading()),
    )
    .await
    .expect("Timed out waiting for fetch to settle")
    .expect("Controller dropped")
    .clone()
}
