//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! Created: public/og/universe.png
//!     subtitle overflows by 12px
//! Created: public/og/collaborate.png
//!     title truncated: 1 line(s) hidden
//!
//! Generated 10 OG images in public/og
//! ```
//!
//! ## Check
//!
//! ```text
//! Fonts
//!     regular: /usr/share/fonts/truetype/dejavu/DejaVuSans.ttf
//!     bold: built-in bitmap
//!
//! Pages
//! 001 universe
//!     Lakshveer's Learning Universe
//!     Build to Learn — 170+ projects, skills, and possibilities
//!         subtitle overflows by 12px
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::config::OgConfig;
use crate::generate::RenderedCard;
use crate::imaging::{CardReport, FontSet, FontWeight};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Layout warnings for one card, unindented.
fn report_warnings(report: &CardReport) -> Vec<String> {
    let mut warnings = Vec::new();
    if !report.hidden_lines.is_empty() {
        warnings.push(format!(
            "title truncated: {} line(s) hidden",
            report.hidden_lines.len()
        ));
    }
    if let Some(px) = report.subtitle_overflow {
        warnings.push(format!("subtitle overflows by {:.0}px", px.ceil()));
    }
    warnings
}

// ============================================================================
// Build
// ============================================================================

/// Format one rendered card: its path, then any layout warnings.
pub fn format_card(card: &RenderedCard) -> Vec<String> {
    let mut lines = vec![format!("Created: {}", card.path.display())];
    lines.extend(
        report_warnings(&card.report)
            .into_iter()
            .map(|w| format!("{}{}", indent(1), w)),
    );
    lines
}

pub fn print_card(card: &RenderedCard) {
    for line in format_card(card) {
        println!("{}", line);
    }
}

pub fn format_summary(count: usize, output_dir: &Path) -> Vec<String> {
    vec![
        String::new(),
        format!("Generated {} OG images in {}", count, output_dir.display()),
    ]
}

pub fn print_summary(count: usize, output_dir: &Path) {
    for line in format_summary(count, output_dir) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format the check inventory: resolved fonts, then every page with the
/// title lines it would draw and any layout warnings.
///
/// `reports` pairs with `config.pages` by position.
pub fn format_check(config: &OgConfig, fonts: &FontSet, reports: &[CardReport]) -> Vec<String> {
    let mut lines = vec!["Fonts".to_string()];
    for weight in [FontWeight::Regular, FontWeight::Bold] {
        let source = match fonts.source_path(weight) {
            Some(path) => path.display().to_string(),
            None => "built-in bitmap".to_string(),
        };
        lines.push(format!("{}{}: {}", indent(1), weight, source));
    }

    lines.push(String::new());
    lines.push("Pages".to_string());
    for (i, (page, report)) in config.pages.iter().zip(reports).enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), page.slug));
        for title_line in &report.title_lines {
            lines.push(format!("{}{}", indent(1), title_line));
        }
        if let Some(subtitle) = page.subtitle_text() {
            lines.push(format!("{}{}", indent(1), subtitle));
        }
        for warning in report_warnings(report) {
            lines.push(format!("{}{}", indent(2), warning));
        }
    }
    lines
}

pub fn print_check(config: &OgConfig, fonts: &FontSet, reports: &[CardReport]) {
    for line in format_check(config, fonts, reports) {
        println!("{}", line);
    }
}
