//! OG image generation.
//!
//! Renders every configured page onto a fresh canvas and saves it as
//! `<output_dir>/<slug>.png`. Pages are rendered in config order, one at a
//! time, and nothing is cached: every run redraws every card.
//!
//! ## Output Structure
//!
//! ```text
//! public/og/
//! ├── universe.png
//! ├── systems.png
//! ├── impact.png
//! └── ...
//! ```
//!
//! The canvas type is a parameter so the pipeline can run against the
//! recording canvas in tests and [`RasterCanvas`](crate::imaging::RasterCanvas)
//! in production. Progress is reported through the `on_card` callback; the
//! CLI turns it into output lines.

use crate::config::OgConfig;
use crate::imaging::{BackendError, Canvas, CardReport, FontSet, render_card};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image backend error: {0}")]
    Backend(#[from] BackendError),
    #[error("Config error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// One card written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCard {
    pub slug: String,
    pub path: PathBuf,
    pub report: CardReport,
}

/// Output file for `slug`.
pub fn card_path(output_dir: &Path, slug: &str) -> PathBuf {
    output_dir.join(format!("{slug}.png"))
}

pub fn generate<C: Canvas>(
    config: &OgConfig,
    fonts: &FontSet,
    output_dir: &Path,
    mut on_card: impl FnMut(&RenderedCard),
) -> Result<Vec<RenderedCard>, GenerateError> {
    let palette = config.palette()?;
    fs::create_dir_all(output_dir)?;

    let mut cards = Vec::with_capacity(config.pages.len());
    for page in &config.pages {
        let mut canvas = C::new(config.canvas.width, config.canvas.height, palette.background);
        let report = render_card(&mut canvas, fonts, config, &palette, page);

        let path = card_path(output_dir, &page.slug);
        canvas.save(&path)?;

        let card = RenderedCard {
            slug: page.slug.clone(),
            path,
            report,
        };
        on_card(&card);
        cards.push(card);
    }
    Ok(cards)
}
