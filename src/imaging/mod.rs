//! Card imaging: fonts, geometry, drawing surface, rendering.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Surface** | `image::RgbImage` with source-over blending |
//! | **Fonts** | `ab_glyph` outlines, built-in 5×7 bitmap fallback |
//! | **Measure** | [`TextMeasure`] on [`FontHandle`] |
//! | **Encode → PNG** | `image::codecs::png::PngEncoder` |
//!
//! The module is split into:
//! - **Parameters**: colours, points, rectangles, text bounds
//! - **Layout**: pure card geometry (unit testable)
//! - **Fonts**: discovery, measurement, glyph coverage
//! - **Backend**: [`Canvas`] trait + [`RasterCanvas`]
//! - **Render**: draws one card by combining the above with [`crate::wrap`]

pub mod backend;
mod bitmap;
pub mod font;
pub mod layout;
mod params;
pub mod raster;
pub mod render;

pub use backend::{BackendError, Canvas};
pub use font::{FontError, FontHandle, FontSet, FontWeight, TextMeasure};
pub use layout::CardLayout;
pub use params::{Color, ColorParseError, Point, Rect, TextBounds};
pub use raster::RasterCanvas;
pub use render::{CardReport, plan_card, render_card};
