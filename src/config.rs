//! Card configuration module.
//!
//! Handles loading, validating, and merging `og.toml`. The stock defaults
//! describe the complete site: canvas, palette, fonts, branding, and the ten
//! pages that get a card. A user file is a sparse overlay on top of them.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! output_dir = "public/og"   # Where <slug>.png files are written
//!
//! [canvas]
//! width = 1200
//! height = 630
//! background = "#050508"
//!
//! [colors]
//! accent = "#22d3ee"         # Accent bar, tagline
//! text_primary = "#f4f4f5"   # Title, name
//! text_secondary = "#a1a1aa" # Subtitle
//! text_muted = "#71717a"     # Note, URL
//! border = "#ffffff19"       # 8-digit hex = with alpha
//! footer = "#0000004c"
//!
//! [fonts]
//! regular = ["/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf", ...]
//! bold = ["/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf", ...]
//!
//! [title]
//! size = 52.0
//! max_lines = 2
//! line_spacing = 1.4
//!
//! [subtitle]
//! size = 28.0
//!
//! [branding]
//! name = "Lakshveer Rao"
//! note = "(Age 8)"
//! tagline = "Hardware + AI Systems Builder"
//! url = "lakshveer.com"
//!
//! [[pages]]
//! slug = "universe"
//! title = "Lakshveer's Learning Universe"
//! subtitle = "Build to Learn — 170+ projects, skills, and possibilities"
//! ```
//!
//! ## Partial Configuration
//!
//! Tables merge key by key, so overriding one colour keeps the rest:
//!
//! ```toml
//! [colors]
//! accent = "#f59e0b"
//! ```
//!
//! Arrays replace wholesale: a `[[pages]]` list in the user file is the full
//! page set, not an addition to the stock pages.
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::{CardLayout, Color, ColorParseError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
}

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "og.toml";

/// Card configuration loaded from `og.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OgConfig {
    /// Directory the PNG files are written to.
    pub output_dir: String,
    pub canvas: CanvasConfig,
    pub colors: ColorConfig,
    pub fonts: FontsConfig,
    pub title: TitleConfig,
    pub subtitle: SubtitleConfig,
    pub branding: BrandingConfig,
    /// One card per entry, rendered in this order.
    pub pages: Vec<PageConfig>,
}

impl Default for OgConfig {
    fn default() -> Self {
        Self {
            output_dir: "public/og".to_string(),
            canvas: CanvasConfig::default(),
            colors: ColorConfig::default(),
            fonts: FontsConfig::default(),
            title: TitleConfig::default(),
            subtitle: SubtitleConfig::default(),
            branding: BrandingConfig::default(),
            pages: default_pages(),
        }
    }
}

impl OgConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ConfigError::Validation(
                "canvas.width and canvas.height must be non-zero".into(),
            ));
        }
        self.palette()?;
        for (key, size) in [("title.size", self.title.size), ("subtitle.size", self.subtitle.size)] {
            if !(size.is_finite() && size > 0.0) {
                return Err(ConfigError::Validation(format!("{key} must be positive")));
            }
        }
        if self.title.max_lines == 0 {
            return Err(ConfigError::Validation(
                "title.max_lines must be at least 1".into(),
            ));
        }
        if !(self.title.line_spacing.is_finite() && self.title.line_spacing > 0.0) {
            return Err(ConfigError::Validation(
                "title.line_spacing must be positive".into(),
            ));
        }
        if CardLayout::default().title_max_width(self.canvas.width) <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "canvas.width {} leaves no room for the title",
                self.canvas.width
            )));
        }
        if self.pages.is_empty() {
            return Err(ConfigError::Validation("pages must not be empty".into()));
        }
        let mut seen = HashSet::new();
        for page in &self.pages {
            if !is_valid_slug(&page.slug) {
                return Err(ConfigError::Validation(format!(
                    "page slug {:?} must be non-empty and use only letters, digits, '-' or '_'",
                    page.slug
                )));
            }
            if !seen.insert(page.slug.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate page slug {:?}",
                    page.slug
                )));
            }
        }
        Ok(())
    }

    /// Parse every configured colour.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        let parse = |key: &str, value: &str| {
            Color::from_hex(value).map_err(|e: ColorParseError| {
                ConfigError::Validation(format!("{key}: {e}"))
            })
        };
        Ok(Palette {
            background: parse("canvas.background", &self.canvas.background)?,
            accent: parse("colors.accent", &self.colors.accent)?,
            text_primary: parse("colors.text_primary", &self.colors.text_primary)?,
            text_secondary: parse("colors.text_secondary", &self.colors.text_secondary)?,
            text_muted: parse("colors.text_muted", &self.colors.text_muted)?,
            border: parse("colors.border", &self.colors.border)?,
            footer: parse("colors.footer", &self.colors.footer)?,
        })
    }
}

/// Slugs become file names, so keep them to a portable character set.
fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Canvas size and background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub background: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 630,
            background: "#050508".to_string(),
        }
    }
}

/// Colours as `#rrggbb` or `#rrggbbaa` strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Accent bar and tagline.
    pub accent: String,
    /// Title and name.
    pub text_primary: String,
    /// Subtitle.
    pub text_secondary: String,
    /// Note and URL.
    pub text_muted: String,
    /// Inset border outline.
    pub border: String,
    /// Footer band behind the branding.
    pub footer: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            accent: "#22d3ee".to_string(),
            text_primary: "#f4f4f5".to_string(),
            text_secondary: "#a1a1aa".to_string(),
            text_muted: "#71717a".to_string(),
            border: "#ffffff19".to_string(),
            footer: "#0000004c".to_string(),
        }
    }
}

/// Parsed colours, ready for drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub accent: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub border: Color,
    pub footer: Color,
}

/// Candidate font files, tried in order. The first existing file wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontsConfig {
    pub regular: Vec<PathBuf>,
    pub bold: Vec<PathBuf>,
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            regular: vec![
                "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf".into(),
                "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf".into(),
            ],
            bold: vec![
                "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf".into(),
                "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf".into(),
            ],
        }
    }
}

/// Title typography. Titles are word-wrapped and capped at `max_lines`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TitleConfig {
    /// Bold font size in pixels.
    pub size: f32,
    /// Lines drawn; any further wrapped lines are dropped.
    pub max_lines: usize,
    /// Line advance as a multiple of the measured line height.
    pub line_spacing: f32,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            size: 52.0,
            max_lines: 2,
            line_spacing: 1.4,
        }
    }
}

/// Subtitle typography. Subtitles are drawn on a single line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SubtitleConfig {
    /// Regular font size in pixels.
    pub size: f32,
}

impl Default for SubtitleConfig {
    fn default() -> Self {
        Self { size: 28.0 }
    }
}

/// Footer text shared by every card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrandingConfig {
    pub name: String,
    /// Small muted text next to the name.
    pub note: String,
    pub tagline: String,
    /// Right-aligned in the footer.
    pub url: String,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            name: "Lakshveer Rao".to_string(),
            note: "(Age 8)".to_string(),
            tagline: "Hardware + AI Systems Builder".to_string(),
            url: "lakshveer.com".to_string(),
        }
    }
}

/// One card: written to `<output_dir>/<slug>.png`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageConfig {
    pub slug: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

impl PageConfig {
    pub fn new(slug: &str, title: &str, subtitle: Option<&str>) -> Self {
        Self {
            slug: slug.to_string(),
            title: title.to_string(),
            subtitle: subtitle.map(str::to_string),
        }
    }

    /// Subtitle to draw, treating an empty string as absent.
    pub fn subtitle_text(&self) -> Option<&str> {
        self.subtitle.as_deref().filter(|s| !s.trim().is_empty())
    }
}

fn default_pages() -> Vec<PageConfig> {
    [
        (
            "universe",
            "Lakshveer's Learning Universe",
            "Build to Learn — 170+ projects, skills, and possibilities",
        ),
        (
            "journey",
            "The Journey",
            "From first robot at age 5 to shipping products at age 8",
        ),
        (
            "systems",
            "Systems",
            "Autonomous vehicles, robots, and AI-powered solutions",
        ),
        (
            "impact",
            "Impact",
            "170+ projects • 3 products shipped • ₹1.4L+ in grants",
        ),
        (
            "recognition",
            "Voices",
            "What founders and builders say about Lakshveer",
        ),
        (
            "venture",
            "Projects by Laksh",
            "A father-son venture building hardware education products",
        ),
        (
            "collaborate",
            "Collaborate",
            "Partner on hardware projects, workshops, or research",
        ),
        ("invite", "Invite Laksh", "Guest talks, hackathons, and events"),
        ("press", "Press Kit", "Media resources, photos, and key facts"),
        (
            "endorse",
            "Endorse Lakshveer",
            "Add your voice to support his builder journey",
        ),
    ]
    .into_iter()
    .map(|(slug, title, subtitle)| PageConfig::new(slug, title, Some(subtitle)))
    .collect()
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(OgConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay (including arrays) replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<OgConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: OgConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `path`, falling back to stock defaults if it is missing.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(path: &Path) -> Result<OgConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(path)?;
    if overlay.is_none() {
        log::info!("{} not found; using stock defaults", path.display());
    }
    resolve_config(base, overlay)
}

/// Load a config file the user named explicitly.
///
/// Unlike [`load_config`], a missing file is an error.
pub fn load_config_file(path: &Path) -> Result<OgConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    load_config(path)
}

/// Returns a fully-commented stock `og.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# OG Image Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Tables merge with the defaults key by key; arrays (font candidates,
# [[pages]]) replace the default list entirely.
# Unknown keys will cause an error.

# Directory the <slug>.png files are written to.
output_dir = "public/og"

# ---------------------------------------------------------------------------
# Canvas
# ---------------------------------------------------------------------------
[canvas]
# 1200x630 is the size social networks expect for link previews.
width = 1200
height = 630
background = "#050508"

# ---------------------------------------------------------------------------
# Colors (#rrggbb, or #rrggbbaa for translucent)
# ---------------------------------------------------------------------------
[colors]
accent = "#22d3ee"          # Accent bar, tagline
text_primary = "#f4f4f5"    # Title, name
text_secondary = "#a1a1aa"  # Subtitle
text_muted = "#71717a"      # Note, URL
border = "#ffffff19"        # Inset border
footer = "#0000004c"        # Footer band

# ---------------------------------------------------------------------------
# Fonts
# ---------------------------------------------------------------------------
[fonts]
# Candidate files per weight; the first that exists is used. If none exist,
# a built-in bitmap font is used instead.
regular = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
]
bold = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
]

# ---------------------------------------------------------------------------
# Title (bold, word-wrapped)
# ---------------------------------------------------------------------------
[title]
size = 52.0
# Wrapped lines beyond this count are not drawn.
max_lines = 2
# Line advance as a multiple of the measured line height.
line_spacing = 1.4

# ---------------------------------------------------------------------------
# Subtitle (regular, single line)
# ---------------------------------------------------------------------------
[subtitle]
size = 28.0

# ---------------------------------------------------------------------------
# Footer branding
# ---------------------------------------------------------------------------
[branding]
name = "Lakshveer Rao"
note = "(Age 8)"
tagline = "Hardware + AI Systems Builder"
url = "lakshveer.com"

# ---------------------------------------------------------------------------
# Pages - one card each, written to <output_dir>/<slug>.png
# ---------------------------------------------------------------------------
[[pages]]
slug = "universe"
title = "Lakshveer's Learning Universe"
subtitle = "Build to Learn — 170+ projects, skills, and possibilities"

[[pages]]
slug = "journey"
title = "The Journey"
subtitle = "From first robot at age 5 to shipping products at age 8"

[[pages]]
slug = "systems"
title = "Systems"
subtitle = "Autonomous vehicles, robots, and AI-powered solutions"

[[pages]]
slug = "impact"
title = "Impact"
subtitle = "170+ projects • 3 products shipped • ₹1.4L+ in grants"

[[pages]]
slug = "recognition"
title = "Voices"
subtitle = "What founders and builders say about Lakshveer"

[[pages]]
slug = "venture"
title = "Projects by Laksh"
subtitle = "A father-son venture building hardware education products"

[[pages]]
slug = "collaborate"
title = "Collaborate"
subtitle = "Partner on hardware projects, workshops, or research"

[[pages]]
slug = "invite"
title = "Invite Laksh"
subtitle = "Guest talks, hackathons, and events"

[[pages]]
slug = "press"
title = "Press Kit"
subtitle = "Media resources, photos, and key facts"

[[pages]]
slug = "endorse"
title = "Endorse Lakshveer"
subtitle = "Add your voice to support his builder journey"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_card_geometry() {
        let config = OgConfig::default();
        assert_eq!(config.canvas.width, 1200);
        assert_eq!(config.canvas.height, 630);
        assert_eq!(config.title.max_lines, 2);
        assert_eq!(config.title.line_spacing, 1.4);
    }

    #[test]
    fn default_config_has_ten_pages_in_order() {
        let slugs: Vec<String> = OgConfig::default()
            .pages
            .into_iter()
            .map(|p| p.slug)
            .collect();
        assert_eq!(
            slugs,
            [
                "universe",
                "journey",
                "systems",
                "impact",
                "recognition",
                "venture",
                "collaborate",
                "invite",
                "press",
                "endorse"
            ]
        );
    }

    #[test]
    fn default_palette_parses() {
        let palette = OgConfig::default().palette().unwrap();
        assert_eq!(palette.background, Color::rgb(5, 5, 8));
        assert_eq!(palette.accent, Color::rgb(34, 211, 238));
        assert_eq!(palette.border, Color::rgba(255, 255, 255, 25));
        assert_eq!(palette.footer, Color::rgba(0, 0, 0, 76));
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[colors]
accent = "#f59e0b"
"##;
        let config: OgConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.colors.accent, "#f59e0b");
        // Defaults preserved
        assert_eq!(config.colors.text_primary, "#f4f4f5");
        assert_eq!(config.pages.len(), 10);
    }

    #[test]
    fn page_without_subtitle_parses() {
        let toml = r#"
[[pages]]
slug = "about"
title = "About"
"#;
        let config: OgConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.pages, vec![PageConfig::new("about", "About", None)]);
    }

    #[test]
    fn blank_subtitle_is_treated_as_absent() {
        let page = PageConfig::new("about", "About", Some("   "));
        assert_eq!(page.subtitle_text(), None);
        let page = PageConfig::new("about", "About", Some("Hi"));
        assert_eq!(page.subtitle_text(), Some("Hi"));
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str(r#"output_dir = "a""#).unwrap();
        let overlay: toml::Value = toml::from_str(r#"output_dir = "b""#).unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("output_dir").unwrap().as_str(), Some("b"));
    }

    #[test]
    fn merge_toml_table_merge() {
        let base: toml::Value = toml::from_str(
            r#"
[title]
size = 52.0
max_lines = 2
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[title]
max_lines = 3
"#,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let title = merged.get("title").unwrap();
        assert_eq!(title.get("max_lines").unwrap().as_integer(), Some(3));
        assert_eq!(title.get("size").unwrap().as_float(), Some(52.0));
    }

    #[test]
    fn merge_toml_arrays_replace() {
        let base = stock_defaults_value();
        let overlay: toml::Value = toml::from_str(
            r#"
[[pages]]
slug = "only"
title = "Only Page"
"#,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("pages").unwrap().as_array().unwrap().len(), 1);
    }

    // =========================================================================
    // Unknown key rejection tests
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let toml_str = r#"
[title]
sise = 40.0
"#;
        let result: Result<OgConfig, _> = toml::from_str(toml_str);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<OgConfig, _> = toml::from_str("[theme]\nx = 1\n");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_page_key_rejected() {
        let toml_str = r#"
[[pages]]
slug = "a"
title = "A"
subtitel = "typo"
"#;
        let result: Result<OgConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }

    #[test]
    fn page_without_title_rejected() {
        let result: Result<OgConfig, _> = toml::from_str("[[pages]]\nslug = \"a\"\n");
        assert!(result.is_err());
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(OgConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_zero_canvas() {
        let mut config = OgConfig::default();
        config.canvas.height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_bad_colour_names_the_key() {
        let mut config = OgConfig::default();
        config.colors.border = "white".to_string();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("colors.border"), "{err}");
    }

    #[test]
    fn validate_font_sizes() {
        let mut config = OgConfig::default();
        config.title.size = 0.0;
        assert!(config.validate().is_err());

        let mut config = OgConfig::default();
        config.subtitle.size = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_max_lines_zero() {
        let mut config = OgConfig::default();
        config.title.max_lines = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_line_spacing() {
        let mut config = OgConfig::default();
        config.title.line_spacing = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_canvas_too_narrow_for_title() {
        let mut config = OgConfig::default();
        config.canvas.width = 190;
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("title"), "{err}");
    }

    #[test]
    fn validate_empty_pages() {
        let mut config = OgConfig::default();
        config.pages.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_slug_characters() {
        for bad in ["", "../escape", "with space", "a/b", "é"] {
            let mut config = OgConfig::default();
            config.pages = vec![PageConfig::new(bad, "T", None)];
            assert!(config.validate().is_err(), "slug {bad:?} accepted");
        }
        let mut config = OgConfig::default();
        config.pages = vec![PageConfig::new("press_kit-2", "T", None)];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_duplicate_slugs() {
        let mut config = OgConfig::default();
        config.pages.push(PageConfig::new("press", "Again", None));
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("duplicate"), "{err}");
    }

    // =========================================================================
    // load_config / resolve_config / load_raw_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("og.toml")).unwrap();
        assert_eq!(config, OgConfig::default());
    }

    #[test]
    fn load_config_file_rejects_missing_path() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("typo.toml");
        let err = load_config_file(&missing).unwrap_err();
        assert!(matches!(&err, ConfigError::NotFound(p) if *p == missing));
        assert!(err.to_string().contains("typo.toml"));
    }

    #[test]
    fn load_config_file_reads_existing_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.toml");
        fs::write(&path, "output_dir = \"cards\"\n").unwrap();
        let config = load_config_file(&path).unwrap();
        assert_eq!(config.output_dir, "cards");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("og.toml");
        fs::write(
            &path,
            r#"
output_dir = "dist/og"

[branding]
url = "example.com"
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.output_dir, "dist/og");
        assert_eq!(config.branding.url, "example.com");
        assert_eq!(config.branding.name, "Lakshveer Rao");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("og.toml");
        fs::write(&path, "this is not [valid toml").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("og.toml");
        fs::write(&path, "[title]\nmax_lines = 0\n").unwrap();
        assert!(matches!(
            load_config(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn load_raw_config_returns_none_when_no_file() {
        let tmp = TempDir::new().unwrap();
        assert!(load_raw_config(&tmp.path().join("og.toml")).unwrap().is_none());
    }

    #[test]
    fn resolve_config_with_no_overlay() {
        let config = resolve_config(stock_defaults_value(), None).unwrap();
        assert_eq!(config, OgConfig::default());
    }

    #[test]
    fn resolve_config_with_overlay() {
        let overlay: toml::Value = toml::from_str("[subtitle]\nsize = 30.0\n").unwrap();
        let config = resolve_config(stock_defaults_value(), Some(overlay)).unwrap();
        assert_eq!(config.subtitle.size, 30.0);
        assert_eq!(config.title.size, 52.0);
    }

    // =========================================================================
    // stock_config_toml tests
    // =========================================================================

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: OgConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, OgConfig::default());
    }

    #[test]
    fn stock_config_toml_contains_all_sections() {
        let content = stock_config_toml();
        for section in [
            "[canvas]",
            "[colors]",
            "[fonts]",
            "[title]",
            "[subtitle]",
            "[branding]",
            "[[pages]]",
        ] {
            assert!(content.contains(section), "missing {section}");
        }
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value();
        assert!(val.is_table());
        for key in ["output_dir", "canvas", "colors", "fonts", "title", "subtitle", "branding", "pages"] {
            assert!(val.get(key).is_some(), "missing {key}");
        }
    }
}
