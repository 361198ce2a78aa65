//! Local HTTP server standing in for the photo service and the image host.
//!
//! Responses are served in the order they were queued. An empty queue
//! answers with an empty photo list.

use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use image::{ImageFormat, Rgb, RgbImage};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::io::Cursor;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::watch;

/// Method and path of a request the server received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
}

/// One queued answer.
#[derive(Debug, Clone)]
pub struct MockResponse {
    status: StatusCode,
    content_type: String,
    body: Vec<u8>,
    delay: Duration,
}

impl Default for MockResponse {
    fn default() -> Self {
        Self::json("[]")
    }
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self::bytes("application/json", body.as_bytes().to_vec())
    }

    /// JSON error body with the given status.
    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status: StatusCode::from_u16(status).expect("invalid status code"),
            ..Self::json(&serde_json::json!({ "error": message }).to_string())
        }
    }

    pub fn bytes(content_type: &str, body: Vec<u8>) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: content_type.to_string(),
            body,
            delay: Duration::ZERO,
        }
    }

    /// A solid-colour PNG of the given size.
    pub fn png(width: u32, height: u32, color: [u8; 3]) -> Self {
        let mut body = Vec::new();
        RgbImage::from_pixel(width, height, Rgb(color))
            .write_to(&mut Cursor::new(&mut body), ImageFormat::Png)
            .expect("Failed to encode PNG");
        Self::bytes("image/png", body)
    }

    /// Hold the answer back for `ms` milliseconds.
    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay = Duration::from_millis(ms);
        self
    }
}

impl IntoResponse for MockResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, self.content_type)],
            self.body,
        )
            .into_response()
    }
}

#[derive(Default)]
struct Recorder {
    seen: Mutex<Vec<CapturedRequest>>,
    queue: Mutex<VecDeque<MockResponse>>,
}

pub struct MockBackend {
    pub addr: SocketAddr,
    recorder: Arc<Recorder>,
    stop: watch::Sender<bool>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let recorder = Arc::new(Recorder::default());
        let (stop, mut stopped) = watch::channel(false);

        let router = Router::new()
            .fallback(serve)
            .with_state(Arc::clone(&recorder));
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let _ = axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    let _ = stopped.changed().await;
                })
                .await;
        });

        Self {
            addr,
            recorder,
            stop,
        }
    }

    pub async fn enqueue_response(&self, response: MockResponse) {
        self.recorder.queue.lock().push_back(response);
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.recorder.seen.lock().clone()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// URL of `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url(), path.trim_start_matches('/'))
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        let _ = self.stop.send(true);
    }
}

async fn serve(State(recorder): State<Arc<Recorder>>, request: Request) -> MockResponse {
    recorder.seen.lock().push(CapturedRequest {
        method: request.method().to_string(),
        path: request.uri().path().to_string(),
    });

    let response = recorder.queue.lock().pop_front().unwrap_or_default();
    if !response.delay.is_zero() {
        tokio::time::sleep(response.delay).await;
    }
    response
}
