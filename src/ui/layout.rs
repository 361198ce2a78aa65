use ratatui::layout::Rect;

/// Height of one photo card in the grid, borders included.
pub const CARD_HEIGHT: u16 = 4;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// First grid row to draw so that the selected row is visible.
pub fn grid_first_row(selection: usize, columns: usize, visible_rows: usize) -> usize {
    let columns = columns.max(1);
    let visible_rows = visible_rows.max(1);
    let selected_row = selection / columns;
    selected_row.saturating_sub(visible_rows - 1)
}
