use crate::ui::app::{App, Screen};
use crate::ui::viewer::ViewerIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Pan step in view pixels (two per terminal row).
pub const PAN_STEP: f32 = 4.0;
pub const ZOOM_STEP: f32 = 1.25;
pub const ROTATE_STEP: f32 = 15.0;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Matches Ctrl+Q too, modifiers are not checked.
    if key.code == KeyCode::Char('q') {
        app.request_quit();
        return;
    }

    match app.screen() {
        Screen::Grid => handle_grid_key(app, key),
        Screen::Detail => handle_detail_key(app, key),
    }
}

fn handle_grid_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.move_selection(-1, 0),
        KeyCode::Right | KeyCode::Char('l') => app.move_selection(1, 0),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(0, -1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(0, 1),
        KeyCode::Enter => {
            app.open_selected();
        }
        KeyCode::Char('r') => {
            app.retry();
        }
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    let intent = match key.code {
        KeyCode::Esc | KeyCode::Backspace => {
            app.navigate_back();
            return;
        }
        KeyCode::Char('s') => {
            app.share_current();
            return;
        }
        KeyCode::Left => ViewerIntent::Pan {
            dx: -PAN_STEP,
            dy: 0.0,
        },
        KeyCode::Right => ViewerIntent::Pan {
            dx: PAN_STEP,
            dy: 0.0,
        },
        KeyCode::Up => ViewerIntent::Pan {
            dx: 0.0,
            dy: -PAN_STEP,
        },
        KeyCode::Down => ViewerIntent::Pan {
            dx: 0.0,
            dy: PAN_STEP,
        },
        KeyCode::Char('+') | KeyCode::Char('=') => ViewerIntent::Zoom { factor: ZOOM_STEP },
        KeyCode::Char('-') => ViewerIntent::Zoom {
            factor: 1.0 / ZOOM_STEP,
        },
        KeyCode::Char('[') => ViewerIntent::Rotate {
            degrees: -ROTATE_STEP,
        },
        KeyCode::Char(']') => ViewerIntent::Rotate {
            degrees: ROTATE_STEP,
        },
        KeyCode::Char('0') => ViewerIntent::Reset,
        _ => return,
    };
    app.dispatch_viewer(intent);
}
