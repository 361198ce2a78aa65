use crate::photo::Photo;
use crate::ui::app::{App, ImageSlot, Screen};
use crate::ui::footer::Footer;
use crate::ui::gallery::RequestStatus;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, grid_first_row, layout_regions, CARD_HEIGHT};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, CARD_BORDER, HEADER_TEXT, MARS_RUST, PHOTO_BACKGROUND, STATUS_ERROR,
    STATUS_PENDING,
};
use crate::ui::viewer::PhotoView;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app), header);
    frame.render_widget(Clear, body);
    match app.screen() {
        Screen::Grid => draw_grid(frame, app, body),
        Screen::Detail => draw_detail(frame, app, body),
    }
    frame.render_widget(Footer::new().widget(app.screen(), footer), footer);

    if let Some(error) = app.last_command_error() {
        draw_message(frame, body, "Error", &[error.to_string()], STATUS_ERROR);
    }
}

fn draw_grid(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let photos = match &app.gallery().request_status {
        RequestStatus::Loading => {
            draw_message(
                frame,
                body,
                "Loading",
                &["Fetching photos...".to_string()],
                STATUS_PENDING,
            );
            return;
        }
        RequestStatus::Error => {
            draw_message(
                frame,
                body,
                "Loading failed",
                &[
                    "Could not load photos.".to_string(),
                    String::new(),
                    "Press r to retry".to_string(),
                ],
                STATUS_ERROR,
            );
            return;
        }
        RequestStatus::Success(photos) if photos.is_empty() => {
            draw_message(
                frame,
                body,
                "Mars Photos",
                &["No photos available.".to_string()],
                CARD_BORDER,
            );
            return;
        }
        RequestStatus::Success(photos) => photos,
    };

    let columns = app.columns();
    let visible_rows = usize::from((body.height / CARD_HEIGHT).max(1));
    let first_row = grid_first_row(app.selection(), columns, visible_rows);
    let column_width = body.width / columns as u16;
    let bottom = body.y + body.height;

    for (row, chunk) in photos
        .chunks(columns)
        .enumerate()
        .skip(first_row)
        .take(visible_rows)
    {
        let y = body.y + (row - first_row) as u16 * CARD_HEIGHT;
        if y + CARD_HEIGHT > bottom {
            break;
        }
        for (col, photo) in chunk.iter().enumerate() {
            let index = row * columns + col;
            let rect = Rect {
                x: body.x + col as u16 * column_width,
                y,
                width: column_width,
                height: CARD_HEIGHT,
            };
            frame.render_widget(photo_card(photo, index == app.selection()), rect);
        }
    }
}

fn photo_card(photo: &Photo, selected: bool) -> Paragraph<'static> {
    let border = if selected { MARS_RUST } else { CARD_BORDER };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    if selected {
        block = block.style(Style::default().bg(ACTIVE_HIGHLIGHT));
    }

    let lines = vec![
        Line::from(Span::styled(
            format!("#{}", photo.id),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            photo.img_src.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        )),
    ];
    Paragraph::new(lines).block(block)
}

fn draw_detail(frame: &mut Frame<'_>, app: &App, body: Rect) {
    match app.image() {
        ImageSlot::Ready { image, .. } => {
            frame.render_widget(
                PhotoView::new(image, app.viewer()).background(PHOTO_BACKGROUND),
                body,
            );
        }
        ImageSlot::Empty | ImageSlot::Loading { .. } => draw_message(
            frame,
            body,
            "Loading",
            &["Downloading photo...".to_string()],
            STATUS_PENDING,
        ),
        ImageSlot::Failed { message, .. } => draw_message(
            frame,
            body,
            "Broken image",
            &[message.clone()],
            STATUS_ERROR,
        ),
    }
}

fn draw_message(frame: &mut Frame<'_>, area: Rect, title: &str, text: &[String], color: Color) {
    let lines: Vec<Line> = text.iter().map(|line| Line::from(line.clone())).collect();
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let title_width = title.chars().count() as u16;
    let width = content_width.max(title_width).saturating_add(4);
    let height = lines.len().saturating_add(2) as u16;
    let rect = centered_rect_by_size(area, width, height);

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(Span::styled(title.to_string(), Style::default().fg(color)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        rect,
    );
}
