use crate::{Config, Engine};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Axis-aligned rectangle in pixels, relative to the top left corner of the
/// drawing area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Drawing surface provided by the windowing toolkit.
pub trait Renderer {
    /// Fill the whole drawing area with `color`.
    fn clear(&mut self, color: Rgb);

    fn fill_rect(&mut self, rect: PixelRect, color: Rgb);

    /// Hand the finished frame over to the display.
    fn present(&mut self);
}

/// How cells map onto pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub block_size: u32, // Side of a cell's slot in pixels; the square drawn is one pixel smaller.
    pub background: Rgb,
    pub foreground: Rgb,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            block_size: Config::BLOCK_SIZE,
            background: Config::BACKGROUND,
            foreground: Config::FOREGROUND,
        }
    }
}

impl Layout {
    /// Size in pixels of a window that fits `width x height` cells.
    pub fn window_size(&self, width: usize, height: usize) -> [f32; 2] {
        let block = self.block_size as f32;
        [width as f32 * block, height as f32 * block]
    }

    pub fn cell_rect(&self, x: usize, y: usize) -> PixelRect {
        let block = self.block_size as f32;
        PixelRect {
            x: x as f32 * block,
            y: y as f32 * block,
            w: block - 1.,
            h: block - 1.,
        }
    }
}

/// Draw one frame: clear, a square per live cell, present.
pub fn draw_grid<E, R>(engine: &E, renderer: &mut R, layout: &Layout)
where
    E: Engine + ?Sized,
    R: Renderer + ?Sized,
{
    renderer.clear(layout.background);
    for i in 0..engine.width() {
        for j in 0..engine.height() {
            if engine.get(i as isize, j as isize).is_alive() {
                renderer.fill_rect(layout.cell_rect(i, j), layout.foreground);
            }
        }
    }
    renderer.present();
}
