use crate::photo::Photo;
use crate::share::SharedFile;
use crate::ui::gallery::GalleryState;
use crate::ui::mvi::Reducer;
use crate::ui::viewer::{ViewerIntent, ViewerReducer, ViewerState};
use image::RgbImage;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Named destinations.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Grid,
    Detail,
}

/// Work the runtime performs on behalf of the view.
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    Refresh,
    SelectPhoto(Photo),
    LoadImage(Photo),
    Share(Photo),
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Decoded image for the detail screen.
#[derive(Debug, Clone, Default)]
pub enum ImageSlot {
    #[default]
    Empty,
    Loading {
        photo_id: String,
    },
    Ready {
        photo_id: String,
        image: Arc<RgbImage>,
    },
    Failed {
        photo_id: String,
        message: String,
    },
}

impl ImageSlot {
    fn photo_id(&self) -> Option<&str> {
        match self {
            ImageSlot::Empty => None,
            ImageSlot::Loading { photo_id }
            | ImageSlot::Ready { photo_id, .. }
            | ImageSlot::Failed { photo_id, .. } => Some(photo_id),
        }
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    screen: Screen,
    /// Latest snapshot published by the gallery controller.
    gallery: GalleryState,
    selection: usize,
    /// Photo the user last opened; Detail waits until the controller publishes it.
    opened: Option<Photo>,
    columns: usize,
    /// Detail transform (MVI pattern).
    viewer: ViewerState,
    image: ImageSlot,
    status_message: Option<String>,
    command_sender: Option<UiCommandSender>,
    last_command_error: Option<String>,
}

impl App {
    pub fn new(columns: u16) -> Self {
        Self {
            should_quit: false,
            screen: Screen::Grid,
            gallery: GalleryState::default(),
            selection: 0,
            opened: None,
            columns: usize::from(columns.max(1)),
            viewer: ViewerState::default(),
            image: ImageSlot::Empty,
            status_message: None,
            command_sender: None,
            last_command_error: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    /// Screen actually shown. Detail needs the opened photo to be the
    /// controller's current photo.
    pub fn screen(&self) -> Screen {
        match self.screen {
            Screen::Detail
                if self.opened.is_some() && self.gallery.current_photo == self.opened =>
            {
                Screen::Detail
            }
            _ => Screen::Grid,
        }
    }

    pub fn gallery(&self) -> &GalleryState {
        &self.gallery
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn viewer(&self) -> &ViewerState {
        &self.viewer
    }

    pub fn image(&self) -> &ImageSlot {
        &self.image
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    /// Photo shown on the detail screen, if that screen is active.
    pub fn detail_photo(&self) -> Option<&Photo> {
        match self.screen() {
            Screen::Detail => self.gallery.current_photo.as_ref(),
            Screen::Grid => None,
        }
    }

    /// Replace the gallery snapshot with the controller's current state.
    pub fn sync_gallery(&mut self, state: GalleryState) {
        if self.gallery == state {
            return;
        }
        self.gallery = state;
        self.clamp_selection();
    }

    pub fn selected_photo(&self) -> Option<&Photo> {
        self.gallery.request_status.photos().get(self.selection)
    }

    /// Move the grid selection by whole columns/rows, staying inside the list.
    pub fn move_selection(&mut self, dx: i32, dy: i32) {
        let len = self.gallery.request_status.photos().len();
        if len == 0 {
            self.selection = 0;
            return;
        }
        let step = i64::from(dx) + i64::from(dy) * self.columns as i64;
        let target = self.selection as i64 + step;
        if (0..len as i64).contains(&target) {
            self.selection = target as usize;
        }
    }

    /// Select the highlighted photo and navigate to the detail screen.
    pub fn open_selected(&mut self) -> bool {
        let Some(photo) = self.selected_photo().cloned() else {
            return false;
        };
        self.send_command(UiCommand::SelectPhoto(photo.clone()));
        self.dispatch_viewer(ViewerIntent::Reset);
        self.image = ImageSlot::Loading {
            photo_id: photo.id.clone(),
        };
        self.status_message = None;
        self.screen = Screen::Detail;
        self.opened = Some(photo.clone());
        self.send_command(UiCommand::LoadImage(photo))
    }

    pub fn navigate_back(&mut self) {
        self.screen = Screen::Grid;
        self.status_message = None;
    }

    pub fn retry(&mut self) -> bool {
        self.send_command(UiCommand::Refresh)
    }

    /// Share the photo on the detail screen. No-op on the grid.
    pub fn share_current(&mut self) -> bool {
        let Some(photo) = self.detail_photo().cloned() else {
            return false;
        };
        let sent = self.send_command(UiCommand::Share(photo));
        if sent {
            self.status_message = Some("Sharing photo...".to_string());
        }
        sent
    }

    pub fn dispatch_viewer(&mut self, intent: ViewerIntent) {
        dispatch_mvi!(self, viewer, ViewerReducer, intent);
    }

    /// Store a finished image load. Results for another photo are dropped.
    pub fn on_image_loaded(&mut self, photo_id: String, result: Result<Arc<RgbImage>, String>) {
        if self.image.photo_id() != Some(photo_id.as_str()) {
            return;
        }
        self.image = match result {
            Ok(image) => ImageSlot::Ready { photo_id, image },
            Err(message) => ImageSlot::Failed { photo_id, message },
        };
    }

    pub fn on_share_finished(&mut self, result: Result<SharedFile, String>) {
        self.status_message = Some(match result {
            Ok(file) => format!("Shared {} ({})", file.path.display(), file.mime),
            Err(message) => format!("Share failed: {}", message),
        });
    }

    fn clamp_selection(&mut self) {
        let len = self.gallery.request_status.photos().len();
        if self.selection >= len {
            self.selection = len.saturating_sub(1);
        }
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(err) => {
                self.last_command_error = Some(format!("command send failed: {}", err));
                false
            }
        }
    }
}
