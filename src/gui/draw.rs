use crate::{PixelRect, Renderer, Rgb};
use eframe::egui::{vec2, Color32, Context, Painter, Pos2, Rect};

fn to_color32(color: Rgb) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

/// [`Renderer`] on top of an egui painter. Pixel coordinates are taken
/// relative to `origin`.
pub struct PainterRenderer<'a> {
    ctx: &'a Context,
    painter: &'a Painter,
    origin: Pos2,
}

impl<'a> PainterRenderer<'a> {
    pub fn new(ctx: &'a Context, painter: &'a Painter, origin: Pos2) -> Self {
        Self {
            ctx,
            painter,
            origin,
        }
    }
}

impl Renderer for PainterRenderer<'_> {
    fn clear(&mut self, color: Rgb) {
        self.painter
            .rect_filled(self.painter.clip_rect(), 0., to_color32(color));
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgb) {
        let rect = Rect::from_min_size(self.origin + vec2(rect.x, rect.y), vec2(rect.w, rect.h));
        self.painter.rect_filled(rect, 0., to_color32(color));
    }

    fn present(&mut self) {
        // egui flushes the painted shapes at the end of the pass; keep the
        // loop running so the next frame is produced without input
        self.ctx.request_repaint();
    }
}
