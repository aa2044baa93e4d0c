//! Pixel canvas backed by the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Surface | `image::RgbImage` (opaque RGB, 8 bits per channel) |
//! | Rectangles | per-pixel source-over blend, clipped to the image |
//! | Text | [`FontHandle::rasterize`] coverage × colour alpha |
//! | Encode → PNG | `image::codecs::png::PngEncoder` (best compression, adaptive filter) |
//!
//! The surface itself has no alpha channel. Translucent colours such as the
//! `#ffffff19` border are blended over whatever is already drawn, so draw
//! order matters.

use super::backend::{BackendError, Canvas};
use super::font::{FontHandle, TextMeasure};
use super::params::{Color, Point, Rect, TextBounds};
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Production canvas. See the [module docs](self).
pub struct RasterCanvas {
    image: RgbImage,
}

impl RasterCanvas {
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Blend `color` into one pixel at `coverage × color alpha`. Off-canvas is a no-op.
    fn blend(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.image.width() || y >= self.image.height() {
            return;
        }
        let alpha = (coverage.clamp(0.0, 1.0) * color.opacity()).clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let dst = self.image.get_pixel_mut(x, y);
        let src = [color.r, color.g, color.b];
        for (d, s) in dst.0.iter_mut().zip(src) {
            *d = (s as f32 * alpha + *d as f32 * (1.0 - alpha)).round() as u8;
        }
    }

    /// Clip `rect` to the canvas; `None` when nothing is left.
    fn clip(&self, rect: Rect) -> Option<Rect> {
        let clipped = Rect {
            x0: rect.x0.max(0),
            y0: rect.y0.max(0),
            x1: rect.x1.min(self.image.width() as i32 - 1),
            y1: rect.y1.min(self.image.height() as i32 - 1),
        };
        (!clipped.is_empty()).then_some(clipped)
    }
}

impl Canvas for RasterCanvas {
    fn new(width: u32, height: u32, background: Color) -> Self {
        let fill = Rgb([background.r, background.g, background.b]);
        Self {
            image: RgbImage::from_pixel(width, height, fill),
        }
    }

    fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(r) = self.clip(rect) else {
            return;
        };
        for y in r.y0..=r.y1 {
            for x in r.x0..=r.x1 {
                self.blend(x, y, color, 1.0);
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: u32) {
        if rect.is_empty() || width == 0 {
            return;
        }
        let w = width as i32;
        // Edges never overlap, so translucent corners are not blended twice.
        let top = Rect { y1: (rect.y0 + w - 1).min(rect.y1), ..rect };
        let bottom = Rect { y0: (rect.y1 - w + 1).max(top.y1 + 1), ..rect };
        let side_y0 = top.y1 + 1;
        let side_y1 = bottom.y0 - 1;
        let left = Rect::from_corners([rect.x0, side_y0, (rect.x0 + w - 1).min(rect.x1), side_y1]);
        let right = Rect::from_corners([(rect.x1 - w + 1).max(left.x1 + 1), side_y0, rect.x1, side_y1]);

        for edge in [top, bottom, left, right] {
            self.fill_rect(edge, color);
        }
    }

    fn draw_text(
        &mut self,
        origin: Point,
        text: &str,
        font: &FontHandle,
        color: Color,
    ) -> TextBounds {
        font.rasterize(text, origin, |x, y, coverage| {
            self.blend(x, y, color, coverage)
        });
        font.measure(text)
    }

    fn save(&self, path: &Path) -> Result<(), BackendError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let writer = BufWriter::new(File::create(path)?);
        let encoder =
            PngEncoder::new_with_quality(writer, CompressionType::Best, FilterType::Adaptive);
        let (width, height) = self.image.dimensions();
        encoder
            .write_image(self.image.as_raw(), width, height, ExtendedColorType::Rgb8)
            .map_err(|e| {
                BackendError::Encode(format!("PNG encode failed for {}: {}", path.display(), e))
            })
    }
}
