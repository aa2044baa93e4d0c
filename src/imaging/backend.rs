//! Drawing surface trait and shared error type.
//!
//! The [`Canvas`] trait is the whole imaging surface a card needs: create a
//! filled canvas, fill and outline rectangles, draw a line of text, save.
//! Everything above it ([`render`](super::render), [`generate`](crate::generate))
//! is backend-agnostic.
//!
//! The production implementation is
//! [`RasterCanvas`](super::raster::RasterCanvas), an `image::RgbImage` with
//! alpha blending, saved as PNG. Tests use the recording canvas in
//! [`tests`] to assert on draw calls without touching pixels.

use super::font::FontHandle;
use super::params::{Color, Point, Rect, TextBounds};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Encoding failed: {0}")]
    Encode(String),
}

/// An owned drawing surface for one card.
///
/// A canvas is created, drawn on, and saved by a single render call; it is
/// never shared.
pub trait Canvas {
    /// Create a `width`×`height` canvas filled with `background`.
    fn new(width: u32, height: u32, background: Color) -> Self
    where
        Self: Sized;

    fn dimensions(&self) -> (u32, u32);

    /// Fill `rect` (inclusive corners), clipped to the canvas.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Outline `rect` with a border `width` pixels thick, drawn inward.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: u32);

    /// Draw one line of text with its line box at `origin` and return its
    /// measured bounds.
    fn draw_text(&mut self, origin: Point, text: &str, font: &FontHandle, color: Color)
    -> TextBounds;

    /// Encode and write the canvas to `path`.
    fn save(&self, path: &Path) -> Result<(), BackendError>;
}
