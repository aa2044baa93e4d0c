//! Value types shared by the canvas, fonts, and layout code.
//!
//! These describe *where* and *in what colour* to draw, never *how*. They are
//! the vocabulary between [`render`](super::render) (which decides what goes
//! on a card) and the [`Canvas`](super::Canvas) implementation (which does the
//! pixel work).
//!
//! ## Types
//!
//! - [`Color`]: 8-bit RGBA. Parsed from `#rrggbb` / `#rrggbbaa` config strings.
//! - [`Point`]: top-left origin of a text line, in pixels.
//! - [`Rect`]: axis-aligned rectangle with **inclusive** corners.
//! - [`TextBounds`]: measured width and height of a text run.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("colour must start with '#': {0:?}")]
    MissingHash(String),
    #[error("colour must have 6 or 8 hex digits: {0:?}")]
    BadLength(String),
    #[error("invalid hex digit in colour: {0:?}")]
    BadDigit(String),
}

/// 8-bit RGBA colour. Alpha 255 is opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rrggbb` or `#rrggbbaa`.
    ///
    /// ```
    /// # use og_images::imaging::Color;
    /// assert_eq!(Color::from_hex("#22d3ee").unwrap(), Color::rgb(34, 211, 238));
    /// assert_eq!(Color::from_hex("#0000004c").unwrap().a, 76);
    /// ```
    pub fn from_hex(value: &str) -> Result<Self, ColorParseError> {
        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(value.to_string()))?;
        if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
            return Err(ColorParseError::BadLength(value.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorParseError::BadDigit(value.to_string()))
        };
        let a = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Alpha as a 0.0–1.0 factor.
    pub fn opacity(self) -> f32 {
        self.a as f32 / 255.0
    }
}

/// Top-left origin of a text line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle. Both corners are inside the rectangle, so
/// `[80, 150, 86, 230]` covers 7×81 pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub const fn from_corners([x0, y0, x1, y1]: [i32; 4]) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(self) -> i32 {
        (self.x1 - self.x0 + 1).max(0)
    }

    pub fn height(self) -> i32 {
        (self.y1 - self.y0 + 1).max(0)
    }

    pub fn is_empty(self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Shrink by `d` pixels on every side.
    pub fn inset(self, d: i32) -> Self {
        Self {
            x0: self.x0 + d,
            y0: self.y0 + d,
            x1: self.x1 - d,
            y1: self.y1 - d,
        }
    }
}

/// Measured size of a text run, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextBounds {
    pub width: f32,
    pub height: f32,
}
