use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};
use tracing::{debug, warn};

use crate::cache::ScaledRegion;
use crate::error::Result;
use crate::geometry::PixelRect;

const BYTES_PER_PIXEL: usize = 4;

/// Off-screen surface the size of the window.
#[derive(Clone, Debug)]
pub struct BackBuffer {
    pixels: RgbaImage,
}

impl BackBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width.max(1), height.max(1)),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Raw RGBA bytes, row-major, no padding.
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.pixels.get_pixel_checked(x, y).copied()
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.pixels.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }

    fn fill(&mut self, color: Rgba<u8>) {
        for px in self.pixels.pixels_mut() {
            *px = color;
        }
    }
}

/// Owns the back buffer and paints cached regions into it.
#[derive(Debug)]
pub struct Compositor {
    back_buffer: BackBuffer,
    background: Rgba<u8>,
}

impl Compositor {
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        Self {
            back_buffer: BackBuffer::new(width, height),
            background,
        }
    }

    pub fn back_buffer(&self) -> &BackBuffer {
        &self.back_buffer
    }

    /// Replace the back buffer with one of the new window size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if (width, height) == (self.back_buffer.width(), self.back_buffer.height()) {
            return;
        }
        self.back_buffer = BackBuffer::new(width, height);
        debug!(width, height, "Recreated back buffer");
    }

    /// Clear to the background color, then copy `region` at its destination.
    ///
    /// With `None` only the clear happens. Pixels falling outside the buffer
    /// are dropped.
    pub fn draw(&mut self, region: Option<&ScaledRegion>) {
        self.back_buffer.fill(self.background);

        let Some(region) = region else {
            return;
        };

        let buf_w = self.back_buffer.width();
        let buf_h = self.back_buffer.height();
        let (reg_w, reg_h) = region.pixels.dimensions();
        let placed = PixelRect::new(
            region.dest.x,
            region.dest.y,
            reg_w as i32,
            reg_h as i32,
        );
        let Some(visible) = placed.clipped_to(buf_w, buf_h) else {
            warn!(dest = ?region.dest, buf_w, buf_h, "Scaled region lies outside back buffer");
            return;
        };
        if visible != placed {
            debug!(dest = ?region.dest, ?visible, "Clipped scaled region to back buffer");
        }

        let src_col = (visible.x - placed.x) as usize;
        let src_row0 = (visible.y - placed.y) as usize;
        let row_bytes = visible.width as usize * BYTES_PER_PIXEL;
        let src_stride = reg_w as usize * BYTES_PER_PIXEL;
        let dst_stride = buf_w as usize * BYTES_PER_PIXEL;

        let src = region.pixels.as_raw();
        let dst: &mut [u8] = &mut self.back_buffer.pixels;

        for row in 0..visible.height as usize {
            let src_start = (src_row0 + row) * src_stride + src_col * BYTES_PER_PIXEL;
            let dst_start =
                (visible.y as usize + row) * dst_stride + visible.x as usize * BYTES_PER_PIXEL;
            dst[dst_start..dst_start + row_bytes]
                .copy_from_slice(&src[src_start..src_start + row_bytes]);
        }
    }
}
