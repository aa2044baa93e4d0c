//! Card geometry.
//!
//! All functions here are pure and testable without any canvas or font.
//! Positions are the fixed design of the card; only the canvas size varies,
//! and elements anchored to the right or bottom edge follow it.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ ┌──────────────────────────────────────────┐ │  border (inset 30, 2px)
//! │ │                                          │ │
//! │ │ ▌ Title line one                         │ │  accent bar + title (≤ 2 lines)
//! │ │ ▌ Title line two                         │ │
//! │ │ Subtitle on a single line                │ │
//! │ │                                          │ │
//! ├─┴──────────────────────────────────────────┴─┤  footer band (y ≥ 530)
//! │  Name (note)                        site.url │
//! │  Tagline                                     │
//! └──────────────────────────────────────────────┘
//! ```

use super::params::{Point, Rect};

/// Fixed positions of every card element, for a canvas of any size.
#[derive(Debug, Clone, PartialEq)]
pub struct CardLayout {
    pub border_inset: i32,
    pub border_width: u32,
    pub accent_bar: Rect,
    pub title: Point,
    pub subtitle: Point,
    pub footer_top: i32,
    pub name: Point,
    pub note: Point,
    pub tagline: Point,
    /// Top of the URL line box; its x is computed from the right margin.
    pub url_y: f32,
    pub right_margin: f32,
}

impl Default for CardLayout {
    fn default() -> Self {
        Self {
            border_inset: 30,
            border_width: 2,
            accent_bar: Rect::from_corners([80, 150, 86, 230]),
            title: Point::new(110.0, 160.0),
            subtitle: Point::new(80.0, 280.0),
            footer_top: 530,
            name: Point::new(80.0, 560.0),
            note: Point::new(250.0, 562.0),
            tagline: Point::new(80.0, 595.0),
            url_y: 575.0,
            right_margin: 80.0,
        }
    }
}

impl CardLayout {
    /// Border rectangle, `border_inset` from every edge.
    pub fn border_rect(&self, canvas: (u32, u32)) -> Rect {
        let (w, h) = (canvas.0 as i32, canvas.1 as i32);
        let d = self.border_inset;
        Rect::from_corners([d, d, w - d, h - d])
    }

    /// Footer band from `footer_top` to the bottom edge, full width.
    pub fn footer_rect(&self, canvas: (u32, u32)) -> Rect {
        let (w, h) = (canvas.0 as i32, canvas.1 as i32);
        Rect::from_corners([0, self.footer_top, w, h])
    }

    /// Wrap budget for the title: from the title origin to the right margin.
    pub fn title_max_width(&self, canvas_width: u32) -> f32 {
        canvas_width as f32 - self.title.x - self.right_margin
    }

    /// Width available to the (unwrapped) subtitle before it runs into the margin.
    pub fn subtitle_max_width(&self, canvas_width: u32) -> f32 {
        canvas_width as f32 - self.subtitle.x - self.right_margin
    }

    /// Origin for the URL so its right edge sits on the right margin.
    pub fn url_origin(&self, canvas_width: u32, url_width: f32) -> Point {
        Point::new(
            right_aligned_x(canvas_width, self.right_margin, url_width),
            self.url_y,
        )
    }
}

/// Left x that puts a run of `text_width` flush against `margin` from the right edge.
pub fn right_aligned_x(canvas_width: u32, margin: f32, text_width: f32) -> f32 {
    canvas_width as f32 - margin - text_width
}

/// Top of the next line: the current line's height stretched by `spacing`.
pub fn next_line_y(y: f32, line_height: f32, spacing: f32) -> f32 {
    y + line_height * spacing
}
