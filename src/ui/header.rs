use crate::ui::app::{App, Screen};
use crate::ui::gallery::RequestStatus;
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MARS_RUST, STATUS_ERROR, STATUS_OK,
    STATUS_PENDING,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title_style = Style::default().fg(MARS_RUST).add_modifier(Modifier::BOLD);

        let mut spans = Vec::new();
        if app.screen() == Screen::Detail {
            spans.push(Span::styled(" ← ", text_style));
        } else {
            spans.push(Span::styled("  ", text_style));
        }
        spans.push(Span::styled("Mars Photos", title_style));
        spans.push(Span::styled("  │  ", separator_style));

        let (status, color) = match &app.gallery().request_status {
            RequestStatus::Loading => ("Loading".to_string(), STATUS_PENDING),
            RequestStatus::Success(photos) => (format!("{} photos", photos.len()), STATUS_OK),
            RequestStatus::Error => ("Offline".to_string(), STATUS_ERROR),
        };
        spans.push(Span::styled(status, Style::default().fg(color)));

        if let Some(photo) = app.detail_photo() {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(format!("#{}", photo.id), text_style));
        }

        if let Some(message) = app.status_message() {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(message.to_string(), text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
