//! Card rendering.
//!
//! Combines [`layout`](super::layout) geometry, the [`wrap`](crate::wrap)
//! word wrapper, and a [`Canvas`] to draw one page's card. Drawing happens in
//! a fixed order because translucent layers blend over what is already there:
//!
//! 1. Border outline and accent bar
//! 2. Title, word-wrapped to the title budget, first `max_lines` lines drawn
//! 3. Subtitle as a single line, never wrapped
//! 4. Footer band, then name, note, tagline, and the right-aligned URL
//!
//! [`plan_card`] runs the same text layout without a canvas, which is what
//! `check` reports.

use super::backend::Canvas;
use super::font::{FontHandle, FontSet, FontWeight, TextMeasure};
use super::layout::{CardLayout, next_line_y};
use super::params::{Color, Point};
use crate::config::{OgConfig, PageConfig, Palette};
use crate::wrap::wrap;

const NAME_SIZE: f32 = 24.0;
const NOTE_SIZE: f32 = 20.0;
const TAGLINE_SIZE: f32 = 18.0;
const URL_SIZE: f32 = 20.0;

/// What was laid out for one card.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardReport {
    /// Title lines that were drawn, top to bottom.
    pub title_lines: Vec<String>,
    /// Wrapped title lines past `title.max_lines`; computed, not drawn.
    pub hidden_lines: Vec<String>,
    /// Pixels by which the unwrapped subtitle runs past the right margin.
    pub subtitle_overflow: Option<f32>,
}

/// Every font a card uses, resolved once per card.
struct CardFonts {
    title: FontHandle,
    subtitle: FontHandle,
    name: FontHandle,
    note: FontHandle,
    tagline: FontHandle,
    url: FontHandle,
}

impl CardFonts {
    fn new(fonts: &FontSet, config: &OgConfig) -> Self {
        Self {
            title: fonts.font(FontWeight::Bold, config.title.size),
            subtitle: fonts.font(FontWeight::Regular, config.subtitle.size),
            name: fonts.font(FontWeight::Bold, NAME_SIZE),
            note: fonts.font(FontWeight::Regular, NOTE_SIZE),
            tagline: fonts.font(FontWeight::Regular, TAGLINE_SIZE),
            url: fonts.font(FontWeight::Regular, URL_SIZE),
        }
    }
}

/// Lay out a card's text without drawing anything.
pub fn plan_card(fonts: &FontSet, config: &OgConfig, page: &PageConfig) -> CardReport {
    let layout = CardLayout::default();
    let card_fonts = CardFonts::new(fonts, config);
    plan_text(&layout, &card_fonts, config, page)
}

/// Draw the card for `page` onto `canvas`.
pub fn render_card<C: Canvas>(
    canvas: &mut C,
    fonts: &FontSet,
    config: &OgConfig,
    palette: &Palette,
    page: &PageConfig,
) -> CardReport {
    let layout = CardLayout::default();
    let card_fonts = CardFonts::new(fonts, config);
    let (width, _) = canvas.dimensions();
    let report = plan_text(&layout, &card_fonts, config, page);

    canvas.stroke_rect(
        layout.border_rect(canvas.dimensions()),
        palette.border,
        layout.border_width,
    );
    canvas.fill_rect(layout.accent_bar, palette.accent);

    draw_lines(
        canvas,
        &report.title_lines,
        layout.title,
        &card_fonts.title,
        palette.text_primary,
        config.title.line_spacing,
    );

    if let Some(subtitle) = page.subtitle_text() {
        canvas.draw_text(
            layout.subtitle,
            subtitle,
            &card_fonts.subtitle,
            palette.text_secondary,
        );
    }

    canvas.fill_rect(layout.footer_rect(canvas.dimensions()), palette.footer);
    let branding = &config.branding;
    canvas.draw_text(layout.name, &branding.name, &card_fonts.name, palette.text_primary);
    canvas.draw_text(layout.note, &branding.note, &card_fonts.note, palette.text_muted);
    canvas.draw_text(
        layout.tagline,
        &branding.tagline,
        &card_fonts.tagline,
        palette.accent,
    );
    let url_width = card_fonts.url.measure(&branding.url).width;
    canvas.draw_text(
        layout.url_origin(width, url_width),
        &branding.url,
        &card_fonts.url,
        palette.text_muted,
    );

    log::debug!(
        "{}: {} title line(s), {} hidden",
        page.slug,
        report.title_lines.len(),
        report.hidden_lines.len()
    );
    report
}

fn plan_text(
    layout: &CardLayout,
    fonts: &CardFonts,
    config: &OgConfig,
    page: &PageConfig,
) -> CardReport {
    let max_width = layout.title_max_width(config.canvas.width);
    let mut title_lines = wrap(&page.title, max_width, |line| fonts.title.measure(line).width);
    let hidden_lines = title_lines.split_off(config.title.max_lines.min(title_lines.len()));

    let subtitle_overflow = page.subtitle_text().and_then(|subtitle| {
        let excess = fonts.subtitle.measure(subtitle).width
            - layout.subtitle_max_width(config.canvas.width);
        (excess > 0.0).then_some(excess)
    });

    CardReport {
        title_lines,
        hidden_lines,
        subtitle_overflow,
    }
}

/// Draw `lines` top to bottom from `origin`; returns the y below the last line.
fn draw_lines<C: Canvas>(
    canvas: &mut C,
    lines: &[String],
    origin: Point,
    font: &FontHandle,
    color: Color,
    spacing: f32,
) -> f32 {
    let mut y = origin.y;
    for line in lines {
        let bounds = canvas.draw_text(Point::new(origin.x, y), line, font, color);
        y = next_line_y(y, bounds.height, spacing);
    }
    y
}
