use image::RgbImage;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

use crate::ui::viewer::state::ViewerState;
use crate::ui::viewer::transform::Transform;

const UPPER_HALF_BLOCK: &str = "▀";

/// Draws a photo with the viewer transform applied.
///
/// Each cell shows two vertically stacked pixels: foreground is the top
/// half, background the bottom half.
pub struct PhotoView<'a> {
    image: &'a RgbImage,
    viewer: &'a ViewerState,
    background: Color,
}

impl<'a> PhotoView<'a> {
    pub fn new(image: &'a RgbImage, viewer: &'a ViewerState) -> Self {
        Self {
            image,
            viewer,
            background: Color::Reset,
        }
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    fn sample(&self, transform: &Transform, x: u32, y: u32) -> Color {
        match transform.source_point(x, y) {
            Some((sx, sy)) => {
                let [r, g, b] = self.image.get_pixel(sx, sy).0;
                Color::Rgb(r, g, b)
            }
            None => self.background,
        }
    }
}

impl Widget for PhotoView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let view = (u32::from(area.width), u32::from(area.height) * 2);
        let Some(transform) = Transform::fit(view, self.image.dimensions(), self.viewer) else {
            return;
        };

        for row in 0..area.height {
            for col in 0..area.width {
                let x = u32::from(col);
                let y = u32::from(row) * 2;
                let top = self.sample(&transform, x, y);
                let bottom = self.sample(&transform, x, y + 1);
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_symbol(UPPER_HALF_BLOCK).set_fg(top).set_bg(bottom);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn checker() -> RgbImage {
        let mut image = RgbImage::new(2, 2);
        image.put_pixel(0, 0, Rgb([255, 0, 0]));
        image.put_pixel(1, 0, Rgb([0, 255, 0]));
        image.put_pixel(0, 1, Rgb([0, 0, 255]));
        image.put_pixel(1, 1, Rgb([255, 255, 255]));
        image
    }

    #[test]
    fn each_cell_holds_two_pixels() {
        let image = checker();
        let viewer = ViewerState::default();
        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);

        PhotoView::new(&image, &viewer).render(area, &mut buf);

        let left = buf.cell((0, 0)).unwrap();
        assert_eq!(left.symbol(), UPPER_HALF_BLOCK);
        assert_eq!(left.fg, Color::Rgb(255, 0, 0));
        assert_eq!(left.bg, Color::Rgb(0, 0, 255));

        let right = buf.cell((1, 0)).unwrap();
        assert_eq!(right.fg, Color::Rgb(0, 255, 0));
        assert_eq!(right.bg, Color::Rgb(255, 255, 255));
    }

    #[test]
    fn uncovered_cells_use_background() {
        let image = checker();
        let viewer = ViewerState {
            offset_x: 10.0,
            ..ViewerState::default()
        };
        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);

        PhotoView::new(&image, &viewer)
            .background(Color::Black)
            .render(area, &mut buf);

        let cell = buf.cell((0, 0)).unwrap();
        assert_eq!(cell.fg, Color::Black);
        assert_eq!(cell.bg, Color::Black);
    }

    #[test]
    fn respects_area_origin() {
        let image = checker();
        let viewer = ViewerState::default();
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 3));

        PhotoView::new(&image, &viewer).render(Rect::new(2, 2, 2, 1), &mut buf);

        assert_eq!(buf.cell((2, 2)).unwrap().fg, Color::Rgb(255, 0, 0));
        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), " ");
    }
}
