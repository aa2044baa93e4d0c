//! # OG Images
//!
//! Generates the Open Graph preview cards for a personal portfolio site: one
//! 1200×630 PNG per page, each with a wrapped title, a subtitle, and a
//! branded footer. Pages, colours, fonts and branding come from `og.toml`.
//!
//! # Pipeline
//!
//! ```text
//! og.toml  →  OgConfig  →  render_card (per page)  →  public/og/<slug>.png
//!                ↑                ↑
//!           stock defaults    FontSet (system fonts or bitmap fallback)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`wrap`] | Greedy word wrap against an injected width measure |
//! | [`imaging`] | Fonts, card geometry, the [`Canvas`](imaging::Canvas) trait, PNG raster backend, card rendering |
//! | [`config`] | `og.toml` loading, stock defaults, merging, validation, `gen-config` output |
//! | [`generate`] | Renders every configured page into the output directory |
//! | [`output`] | CLI output formatting for `build` and `check` |
//!
//! # Design Decisions
//!
//! ## Measure Is Injected
//!
//! [`wrap::wrap`] knows nothing about fonts. It takes a closure that returns
//! the rendered width of a candidate line, so the same algorithm is tested
//! with a fixed-width measure and used with real glyph advances.
//!
//! ## Canvas Trait Between Layout and Pixels
//!
//! Rendering draws through [`imaging::Canvas`]. Production uses
//! [`imaging::RasterCanvas`]; tests use a recording canvas and assert on the
//! exact sequence of draw calls, positions, and colours.
//!
//! ## Fonts Degrade, Never Fail Silently
//!
//! Fonts are looked up from a candidate list per weight. When none exists the
//! card still renders with a built-in 5×7 bitmap font and a warning is logged.
//! A font file that exists but cannot be parsed is an error.
//!
//! ## Sparse Config
//!
//! `og.toml` only needs the keys that differ from the stock defaults. The
//! overlay logic lives in [`config::merge_toml`]; `og-images gen-config`
//! prints every key with its default.

pub mod config;
pub mod generate;
pub mod imaging;
pub mod output;
pub mod wrap;

#[cfg(test)]
pub(crate) mod test_helpers;
