use crate::ui::viewer::state::ViewerState;

/// Maps view pixels back to source pixels.
///
/// The photo is first fitted into the view (aspect preserved, centred),
/// then scaled by the viewer scale and rotated around the view centre,
/// then translated by the pan offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    scale: f32,
    cos: f32,
    sin: f32,
    view_center: (f32, f32),
    offset: (f32, f32),
    source_size: (u32, u32),
}

impl Transform {
    /// `None` when either the view or the source is empty.
    pub fn fit(view: (u32, u32), source: (u32, u32), viewer: &ViewerState) -> Option<Self> {
        let (view_w, view_h) = view;
        let (src_w, src_h) = source;
        if view_w == 0 || view_h == 0 || src_w == 0 || src_h == 0 {
            return None;
        }

        let fit = (view_w as f32 / src_w as f32).min(view_h as f32 / src_h as f32);
        let radians = viewer.rotation.to_radians();

        Some(Self {
            scale: fit * viewer.scale,
            cos: radians.cos(),
            sin: radians.sin(),
            view_center: (view_w as f32 / 2.0, view_h as f32 / 2.0),
            offset: (viewer.offset_x, viewer.offset_y),
            source_size: source,
        })
    }

    /// Source pixel shown at view pixel `(x, y)`, if any.
    pub fn source_point(&self, x: u32, y: u32) -> Option<(u32, u32)> {
        let dx = x as f32 + 0.5 - self.view_center.0 - self.offset.0;
        let dy = y as f32 + 0.5 - self.view_center.1 - self.offset.1;

        let ux = (dx * self.cos + dy * self.sin) / self.scale;
        let uy = (dy * self.cos - dx * self.sin) / self.scale;

        let (src_w, src_h) = self.source_size;
        let sx = ux + src_w as f32 / 2.0;
        let sy = uy + src_h as f32 / 2.0;

        if sx < 0.0 || sy < 0.0 || sx >= src_w as f32 || sy >= src_h as f32 {
            return None;
        }
        Some((sx as u32, sy as u32))
    }
}
