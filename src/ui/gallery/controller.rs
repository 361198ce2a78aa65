use std::sync::Arc;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinSet;

use crate::data::PhotosRepository;
use crate::photo::Photo;
use crate::ui::gallery::intent::GalleryIntent;
use crate::ui::gallery::reducer::GalleryReducer;
use crate::ui::gallery::state::GalleryState;
use crate::ui::mvi::Reducer;

/// Owner of the gallery state.
///
/// The state cell is a `watch` channel: the controller holds the only
/// sender, views get receivers from [`subscribe`](Self::subscribe).
/// Every fetch runs as a task in a set bound to this controller, so
/// dropping the controller aborts whatever is still in flight.
pub struct GalleryController {
    repository: Arc<dyn PhotosRepository>,
    state: Arc<watch::Sender<GalleryState>>,
    fetches: Mutex<JoinSet<()>>,
    runtime: Handle,
}

impl GalleryController {
    /// Create a controller on the current tokio runtime and start the first fetch.
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime.
    pub fn new(repository: Arc<dyn PhotosRepository>) -> Self {
        Self::with_handle(repository, Handle::current())
    }

    /// Create a controller whose fetches run on `runtime`, and start the first fetch.
    pub fn with_handle(repository: Arc<dyn PhotosRepository>, runtime: Handle) -> Self {
        let (state, _) = watch::channel(GalleryState::default());
        let controller = Self {
            repository,
            state: Arc::new(state),
            fetches: Mutex::new(JoinSet::new()),
            runtime,
        };
        controller.refresh();
        controller
    }

    /// Current snapshot of the state.
    pub fn state(&self) -> GalleryState {
        self.state.borrow().clone()
    }

    /// Read-only, always-current view of the state.
    pub fn subscribe(&self) -> watch::Receiver<GalleryState> {
        self.state.subscribe()
    }

    /// Start a new fetch.
    ///
    /// Status goes to `Loading` immediately. Overlapping fetches are not
    /// de-duplicated: whichever settles last decides the final status.
    pub fn refresh(&self) {
        dispatch(&self.state, GalleryIntent::Refresh);

        let repository = Arc::clone(&self.repository);
        let state = Arc::clone(&self.state);

        let mut fetches = self.fetches.lock();
        reap_finished(&mut fetches);
        fetches.spawn_on(
            async move {
                let intent = match repository.get_photos().await {
                    Ok(photos) => {
                        tracing::debug!(count = photos.len(), "Photo fetch succeeded");
                        GalleryIntent::FetchSucceeded { photos }
                    }
                    Err(err) => {
                        tracing::warn!(
                            error_type = err.error_type(),
                            error = %err,
                            "Photo fetch failed"
                        );
                        GalleryIntent::FetchFailed
                    }
                };
                dispatch(&state, intent);
            },
            &self.runtime,
        );
        tracing::debug!(in_flight = fetches.len(), "Photo fetch started");
    }

    /// Remember `photo` as the one shown on the detail screen.
    ///
    /// Not checked against the last fetched list.
    pub fn select_photo(&self, photo: Photo) {
        dispatch(&self.state, GalleryIntent::SelectPhoto { photo });
    }

    /// Abort every fetch still in flight. Returns how many were aborted.
    ///
    /// The state is left as it is.
    pub fn cancel(&self) -> usize {
        let mut fetches = self.fetches.lock();
        reap_finished(&mut fetches);
        let aborted = fetches.len();
        fetches.abort_all();
        fetches.detach_all();
        if aborted > 0 {
            tracing::debug!(aborted, "Photo fetches cancelled");
        }
        aborted
    }

    /// Number of fetches that have not settled yet.
    pub fn in_flight(&self) -> usize {
        let mut fetches = self.fetches.lock();
        reap_finished(&mut fetches);
        fetches.len()
    }
}

impl Drop for GalleryController {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Run the reducer against the shared cell and notify subscribers.
fn dispatch(state: &watch::Sender<GalleryState>, intent: GalleryIntent) {
    state.send_modify(|current| {
        *current = GalleryReducer::reduce(std::mem::take(current), intent);
    });
}

fn reap_finished(fetches: &mut JoinSet<()>) {
    while fetches.try_join_next().is_some() {}
}
