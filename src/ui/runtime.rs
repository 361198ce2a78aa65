use crate::config::Config;
use crate::data::{NetworkPhotosRepository, PhotosRepository};
use crate::network::{ImageLoader, MarsApiClient};
use crate::share::{ClipboardTarget, CommandTarget, ShareTarget, Sharer};
use crate::ui::app::{App, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::gallery::GalleryController;
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

const COMMAND_QUEUE: usize = 32;
const SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

/// Services the view talks to through [`UiCommand`]s.
struct Services {
    controller: GalleryController,
    loader: ImageLoader,
    sharer: Arc<Sharer>,
    events: Sender<AppEvent>,
    handle: Handle,
}

impl Services {
    fn execute(&self, command: UiCommand) {
        match command {
            UiCommand::Refresh => self.controller.refresh(),
            UiCommand::SelectPhoto(photo) => self.controller.select_photo(photo),
            UiCommand::LoadImage(photo) => {
                let loader = self.loader.clone();
                let events = self.events.clone();
                self.handle.spawn(async move {
                    let result = loader
                        .fetch(&photo.img_src)
                        .await
                        .map(|image| Arc::new(image.to_rgb8()))
                        .map_err(|err| {
                            tracing::warn!(
                                photo_id = %photo.id,
                                error_type = err.error_type(),
                                error = %err,
                                "Image load failed"
                            );
                            err.to_string()
                        });
                    let _ = events.send(AppEvent::ImageLoaded {
                        photo_id: photo.id,
                        result,
                    });
                });
            }
            UiCommand::Share(photo) => {
                let sharer = Arc::clone(&self.sharer);
                let events = self.events.clone();
                self.handle.spawn(async move {
                    let result = sharer.share(&photo).await.map_err(|err| {
                        tracing::warn!(
                            photo_id = %photo.id,
                            error_type = err.error_type(),
                            error = %err,
                            "Share failed"
                        );
                        err.to_string()
                    });
                    let _ = events.send(AppEvent::ShareFinished(result));
                });
            }
        }
    }
}

fn share_target(config: &Config) -> Arc<dyn ShareTarget> {
    match config
        .share
        .command
        .as_deref()
        .and_then(CommandTarget::from_command)
    {
        Some(target) => Arc::new(target),
        None => Arc::new(ClipboardTarget::new()),
    }
}

pub fn run(config: Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let client = MarsApiClient::new(&config.api).context("Failed to build HTTP client")?;
    let loader = ImageLoader::new(client.http().clone());
    tracing::info!(url = client.photos_url(), "Starting gallery");

    let repository: Arc<dyn PhotosRepository> = Arc::new(NetworkPhotosRepository::new(client));
    let controller = GalleryController::with_handle(repository, runtime.handle().clone());
    let sharer = Arc::new(Sharer::new(
        loader.clone(),
        &config.share,
        share_target(&config),
    ));

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);

    let mut gallery_rx = controller.subscribe();
    let gallery_events = events.sender();
    runtime.spawn(async move {
        while gallery_rx.changed().await.is_ok() {
            if gallery_events.send(AppEvent::GalleryChanged).is_err() {
                break;
            }
        }
    });

    let (command_tx, mut command_rx) = mpsc::channel(COMMAND_QUEUE);
    let mut app = App::new(config.ui.grid_columns);
    app.set_command_sender(command_tx);

    let services = Services {
        controller,
        loader,
        sharer,
        events: events.sender(),
        handle: runtime.handle().clone(),
    };

    loop {
        app.sync_gallery(services.controller.state());
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) | Ok(AppEvent::GalleryChanged) => {}
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "Terminal resized");
            }
            Ok(AppEvent::ImageLoaded { photo_id, result }) => {
                app.on_image_loaded(photo_id, result)
            }
            Ok(AppEvent::ShareFinished(result)) => app.on_share_finished(result),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        while let Ok(command) = command_rx.try_recv() {
            services.execute(command);
        }
    }

    services.controller.cancel();
    drop(services);
    drop(events);
    drop(guard);
    runtime.shutdown_timeout(SHUTDOWN_GRACE);
    tracing::info!("Gallery closed");
    Ok(())
}
