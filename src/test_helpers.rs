//! Shared test utilities for the og-images test suite.
//!
//! Provides fixed-width measures for exercising the word wrapper, and small
//! builders for configs and pages that render with the bitmap font so layout
//! numbers are exact and independent of installed system fonts.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let config = config_with_pages(vec![page("press", "Press Kit", None)]);
//! let report = plan_card(&bitmap_fonts(), &config, &config.pages[0]);
//! assert_eq!(report.title_lines, ["Press Kit"]);
//! ```

use crate::config::{OgConfig, PageConfig};
use crate::imaging::FontSet;

// =========================================================================
// Measures
// =========================================================================

/// Fixed-width measure: every character is 10 units wide.
pub fn chars_x10(s: &str) -> f32 {
    s.chars().count() as f32 * 10.0
}

/// Whitespace-separated words of `text`, in order.
pub fn words_of(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

// =========================================================================
// Config builders
// =========================================================================

/// Fonts that never touch the filesystem.
pub fn bitmap_fonts() -> FontSet {
    FontSet::bitmap_only()
}

pub fn page(slug: &str, title: &str, subtitle: Option<&str>) -> PageConfig {
    PageConfig::new(slug, title, subtitle)
}

/// Stock config with its page list replaced by `pages`.
pub fn config_with_pages(pages: Vec<PageConfig>) -> OgConfig {
    OgConfig {
        pages,
        ..OgConfig::default()
    }
}
