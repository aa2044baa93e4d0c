//! Font discovery, measurement, and glyph coverage.
//!
//! Fonts are resolved once per run by [`FontSet::discover`]: for each weight
//! the first configured path that exists on disk wins. When none exists the
//! weight falls back to the built-in [`bitmap`](super::bitmap) font, so a card
//! can always be rendered even on a machine with no fonts installed.
//!
//! | Source | Crate / function |
//! |---|---|
//! | Outline (TTF/OTF) | `ab_glyph::FontArc` + `PxScale` |
//! | Fallback | 5×7 bitmap glyphs scaled by an integer pixel unit |
//!
//! A [`FontHandle`] is a font at one pixel size. It answers two questions:
//! how big a string is ([`TextMeasure`]) and which pixels it covers
//! ([`FontHandle::rasterize`]). Blending is left to the canvas.

use super::bitmap;
use super::params::{Point, TextBounds};
use crate::config::FontsConfig;
use ab_glyph::{Font, FontArc, PxScale, ScaleFont, point};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FontError {
    #[error("failed to read font {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid font file {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Anything that can report the rendered size of a string.
///
/// The word wrapper only needs the width; the renderer also uses the height
/// to advance between title lines.
pub trait TextMeasure {
    fn measure(&self, text: &str) -> TextBounds;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontWeight::Regular => f.write_str("regular"),
            FontWeight::Bold => f.write_str("bold"),
        }
    }
}

#[derive(Clone)]
enum FontSource {
    Outline { font: FontArc, path: PathBuf },
    Bitmap,
}

/// Resolved fonts for both weights.
#[derive(Clone)]
pub struct FontSet {
    regular: FontSource,
    bold: FontSource,
}

impl FontSet {
    /// Resolve each weight to the first existing candidate path.
    ///
    /// A missing candidate is skipped; a candidate that exists but cannot be
    /// read or parsed is an error rather than a silent fallback.
    pub fn discover(config: &FontsConfig) -> Result<Self, FontError> {
        Ok(Self {
            regular: resolve(FontWeight::Regular, &config.regular)?,
            bold: resolve(FontWeight::Bold, &config.bold)?,
        })
    }

    /// A set that uses the bitmap fallback for every weight.
    pub fn bitmap_only() -> Self {
        Self {
            regular: FontSource::Bitmap,
            bold: FontSource::Bitmap,
        }
    }

    /// Font file backing `weight`, or `None` for the bitmap fallback.
    pub fn source_path(&self, weight: FontWeight) -> Option<&Path> {
        match self.source(weight) {
            FontSource::Outline { path, .. } => Some(path),
            FontSource::Bitmap => None,
        }
    }

    /// `weight` at `size` pixels.
    pub fn font(&self, weight: FontWeight, size: f32) -> FontHandle {
        match self.source(weight) {
            FontSource::Outline { font, .. } => FontHandle::Outline {
                font: font.clone(),
                scale: em_scale(font, size),
            },
            FontSource::Bitmap => FontHandle::Bitmap {
                unit: bitmap_unit(size),
            },
        }
    }

    fn source(&self, weight: FontWeight) -> &FontSource {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }
}

fn resolve(weight: FontWeight, candidates: &[PathBuf]) -> Result<FontSource, FontError> {
    let Some(path) = candidates.iter().find(|p| p.is_file()) else {
        log::warn!(
            "no {weight} font found (tried {}); using built-in bitmap font",
            display_paths(candidates)
        );
        return Ok(FontSource::Bitmap);
    };

    let data = std::fs::read(path).map_err(|source| FontError::Io {
        path: path.clone(),
        source,
    })?;
    let font = FontArc::try_from_vec(data).map_err(|e| FontError::Invalid {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    log::info!("{weight} font: {}", path.display());
    Ok(FontSource::Outline {
        font,
        path: path.clone(),
    })
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "no candidates".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Scale at which one em of `font` is `size` pixels.
///
/// `PxScale` is the height of ascent − descent, which is taller than the em
/// for most fonts.
fn em_scale(font: &FontArc, size: f32) -> PxScale {
    let height = font.height_unscaled();
    let units_per_em = font.units_per_em().unwrap_or(height);
    PxScale::from(size * height / units_per_em)
}

/// Integer pixel holding the top-left corner of a glyph's pixel bounds.
fn pixel_origin(min: ab_glyph::Point) -> (i32, i32) {
    (min.x.floor() as i32, min.y.floor() as i32)
}

/// Pixel unit for the bitmap fallback: one glyph row per unit, ~8 units per em.
fn bitmap_unit(size: f32) -> u32 {
    ((size / 8.0).round() as u32).max(1)
}

/// A font at a fixed pixel size.
#[derive(Clone)]
pub enum FontHandle {
    Outline { font: FontArc, scale: PxScale },
    Bitmap { unit: u32 },
}

impl fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontHandle::Outline { scale, .. } => f
                .debug_struct("Outline")
                .field("px", &scale.y)
                .finish_non_exhaustive(),
            FontHandle::Bitmap { unit } => f.debug_struct("Bitmap").field("unit", unit).finish(),
        }
    }
}

impl FontHandle {
    /// Distance from the top of a line box to the baseline.
    pub fn ascent(&self) -> f32 {
        match self {
            FontHandle::Outline { font, scale } => font.as_scaled(*scale).ascent(),
            FontHandle::Bitmap { unit } => (bitmap::GLYPH_HEIGHT * unit) as f32,
        }
    }

    /// Report every pixel covered by `text` drawn with its line box at `origin`.
    ///
    /// `plot` receives canvas coordinates (possibly negative or off-canvas)
    /// and a coverage in `0.0..=1.0`.
    pub fn rasterize(&self, text: &str, origin: Point, mut plot: impl FnMut(i32, i32, f32)) {
        match self {
            FontHandle::Outline { font, scale } => {
                let scaled = font.as_scaled(*scale);
                let baseline = origin.y + scaled.ascent();
                let mut caret = origin.x;
                let mut prev = None;

                for ch in text.chars() {
                    let id = scaled.glyph_id(ch);
                    if let Some(p) = prev {
                        caret += scaled.kern(p, id);
                    }
                    prev = Some(id);

                    let glyph = id.with_scale_and_position(*scale, point(caret, baseline));
                    if let Some(outlined) = scaled.outline_glyph(glyph) {
                        let bounds = outlined.px_bounds();
                        let (left, top) = pixel_origin(bounds.min);
                        outlined.draw(|x, y, coverage| {
                            plot(left + x as i32, top + y as i32, coverage)
                        });
                    }
                    caret += scaled.h_advance(id);
                }
            }
            FontHandle::Bitmap { unit } => {
                let unit = *unit as i32;
                let (left, top) = (origin.x.round() as i32, origin.y.round() as i32);
                for (i, ch) in text.chars().enumerate() {
                    let cell_x = left + i as i32 * bitmap::ADVANCE as i32 * unit;
                    for row in 0..bitmap::GLYPH_HEIGHT {
                        for col in 0..bitmap::GLYPH_WIDTH {
                            if !bitmap::is_set(ch, col, row) {
                                continue;
                            }
                            let px = cell_x + col as i32 * unit;
                            let py = top + row as i32 * unit;
                            for dy in 0..unit {
                                for dx in 0..unit {
                                    plot(px + dx, py + dy, 1.0);
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

impl TextMeasure for FontHandle {
    fn measure(&self, text: &str) -> TextBounds {
        match self {
            FontHandle::Outline { font, scale } => {
                let scaled = font.as_scaled(*scale);
                let mut width = 0.0f32;
                let mut ink_top = f32::INFINITY;
                let mut ink_bottom = f32::NEG_INFINITY;
                let mut prev = None;

                for ch in text.chars() {
                    let id = scaled.glyph_id(ch);
                    if let Some(p) = prev {
                        width += scaled.kern(p, id);
                    }
                    prev = Some(id);
                    if let Some(outlined) = scaled.outline_glyph(id.with_scale(*scale)) {
                        let bounds = outlined.px_bounds();
                        ink_top = ink_top.min(bounds.min.y);
                        ink_bottom = ink_bottom.max(bounds.max.y);
                    }
                    width += scaled.h_advance(id);
                }

                let height = if ink_top <= ink_bottom {
                    ink_bottom - ink_top
                } else {
                    scaled.ascent() - scaled.descent()
                };
                TextBounds { width, height }
            }
            FontHandle::Bitmap { unit } => {
                let chars = text.chars().count() as u32;
                if chars == 0 {
                    return TextBounds::default();
                }
                TextBounds {
                    width: (chars * bitmap::ADVANCE - 1) as f32 * *unit as f32,
                    height: (bitmap::GLYPH_HEIGHT * unit) as f32,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fonts_config(regular: Vec<PathBuf>, bold: Vec<PathBuf>) -> FontsConfig {
        FontsConfig { regular, bold }
    }

    /// Stock bold font at `size`, or `None` when no outline font is installed.
    fn installed_bold(size: f32) -> Option<FontHandle> {
        let fonts = FontSet::discover(&FontsConfig::default()).unwrap();
        fonts.source_path(FontWeight::Bold)?;
        Some(fonts.font(FontWeight::Bold, size))
    }

    #[test]
    fn outline_size_is_the_em_height() {
        let Some(FontHandle::Outline { font, scale }) = installed_bold(52.0) else {
            return;
        };
        let units_per_em = font.units_per_em().unwrap();
        let em = scale.y * units_per_em / font.height_unscaled();
        assert!((em - 52.0).abs() < 1e-3, "em {em}");
    }

    #[test]
    fn outline_cap_height_follows_em_size() {
        let Some(font) = installed_bold(52.0) else {
            return;
        };
        // Cap height of DejaVu and Liberation is about 0.72 em
        let cap = font.measure("H").height;
        assert!((31.0..=42.0).contains(&cap), "cap height {cap}");
    }

    #[test]
    fn outline_multi_word_line_is_wider_than_its_words() {
        let Some(font) = installed_bold(52.0) else {
            return;
        };
        let whole = font.measure("Press Kit").width;
        let parts = font.measure("Press").width + font.measure("Kit").width;
        assert!(whole > parts, "{whole} <= {parts}");
    }

    #[test]
    fn outline_rasterize_stays_within_measured_box() {
        let Some(font) = installed_bold(52.0) else {
            return;
        };
        let origin = Point::new(100.0, 50.0);
        let bounds = font.measure("HIT");
        let ascent = font.ascent();
        let mut plotted = 0;
        font.rasterize("HIT", origin, |x, y, _| {
            plotted += 1;
            let (x, y) = (x as f32, y as f32);
            assert!(x >= origin.x - 1.0 && x <= origin.x + bounds.width + 1.0, "x {x}");
            assert!(y >= origin.y - 1.0 && y <= origin.y + ascent + 1.0, "y {y}");
        });
        assert!(plotted > 0);
    }

    #[test]
    fn pixel_origin_floors_negative_fractions() {
        assert_eq!(pixel_origin(point(-0.5, 2.7)), (-1, 2));
        assert_eq!(pixel_origin(point(3.0, -0.25)), (3, -1));
    }

    #[test]
    fn bitmap_unit_scales_with_size() {
        assert_eq!(bitmap_unit(52.0), 7);
        assert_eq!(bitmap_unit(28.0), 4);
        assert_eq!(bitmap_unit(18.0), 2);
        assert_eq!(bitmap_unit(2.0), 1);
    }

    #[test]
    fn bitmap_measure_counts_advances() {
        let font = FontSet::bitmap_only().font(FontWeight::Bold, 16.0);
        // unit 2: "ab" = 2 * 6 - 1 = 11 columns
        assert_eq!(
            font.measure("ab"),
            TextBounds {
                width: 22.0,
                height: 14.0
            }
        );
    }

    #[test]
    fn bitmap_measure_empty_is_zero() {
        let font = FontSet::bitmap_only().font(FontWeight::Regular, 20.0);
        assert_eq!(font.measure(""), TextBounds::default());
    }

    #[test]
    fn bitmap_measure_is_monotonic_in_words() {
        let font = FontSet::bitmap_only().font(FontWeight::Regular, 28.0);
        let short = font.measure("Press").width;
        let long = font.measure("Press Kit").width;
        assert!(long > short);
    }

    #[test]
    fn bitmap_rasterize_stays_within_measured_box() {
        let font = FontSet::bitmap_only().font(FontWeight::Regular, 16.0);
        let bounds = font.measure("HI");
        let mut plotted = Vec::new();
        font.rasterize("HI", Point::new(10.0, 20.0), |x, y, c| plotted.push((x, y, c)));

        assert!(!plotted.is_empty());
        for (x, y, c) in plotted {
            assert!(x >= 10 && (x as f32) < 10.0 + bounds.width, "x {x}");
            assert!(y >= 20 && (y as f32) < 20.0 + bounds.height, "y {y}");
            assert_eq!(c, 1.0);
        }
    }

    #[test]
    fn bitmap_rasterize_space_plots_nothing() {
        let font = FontSet::bitmap_only().font(FontWeight::Regular, 16.0);
        let mut count = 0;
        font.rasterize("   ", Point::new(0.0, 0.0), |_, _, _| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn discover_falls_back_when_no_candidate_exists() {
        let tmp = TempDir::new().unwrap();
        let config = fonts_config(
            vec![tmp.path().join("missing-regular.ttf")],
            vec![tmp.path().join("missing-bold.ttf")],
        );
        let fonts = FontSet::discover(&config).unwrap();
        assert!(fonts.source_path(FontWeight::Regular).is_none());
        assert!(fonts.source_path(FontWeight::Bold).is_none());
        assert!(matches!(
            fonts.font(FontWeight::Bold, 52.0),
            FontHandle::Bitmap { unit: 7 }
        ));
    }

    #[test]
    fn discover_with_empty_candidate_lists_falls_back() {
        let fonts = FontSet::discover(&fonts_config(vec![], vec![])).unwrap();
        assert!(fonts.source_path(FontWeight::Regular).is_none());
    }

    #[test]
    fn discover_rejects_unparseable_font() {
        let tmp = TempDir::new().unwrap();
        let bogus = tmp.path().join("bogus.ttf");
        std::fs::write(&bogus, b"definitely not a font").unwrap();

        let config = fonts_config(vec![bogus.clone()], vec![]);
        let err = FontSet::discover(&config).err().unwrap();
        assert!(matches!(err, FontError::Invalid { path, .. } if path == bogus));
    }

    #[test]
    fn discover_skips_directories() {
        let tmp = TempDir::new().unwrap();
        let config = fonts_config(vec![tmp.path().to_path_buf()], vec![]);
        let fonts = FontSet::discover(&config).unwrap();
        assert!(fonts.source_path(FontWeight::Regular).is_none());
    }

    #[test]
    fn weight_display_is_lowercase() {
        assert_eq!(FontWeight::Regular.to_string(), "regular");
        assert_eq!(FontWeight::Bold.to_string(), "bold");
    }
}
