//! Greedy word wrap under a pixel budget.
//!
//! The wrapper knows nothing about fonts or pixels: it is handed a
//! measurement function that maps a candidate line to its rendered width and
//! decides line breaks from that alone. Any [`TextMeasure`] implementation
//! (a real outline font, the bitmap fallback, or a fixed-width closure in
//! tests) can drive it.
//!
//! ## Algorithm
//!
//! Words are the whitespace-delimited runs of the input. They are packed
//! left to right: each word is appended to the current line if the joined
//! candidate still measures within `max_width`, otherwise the current line is
//! closed and the word starts a new one. There is no hyphenation and no
//! mid-word breaking, so a word wider than the budget sits alone on its own
//! line and is allowed to overflow.
//!
//! ```text
//! measure = 10px per char, max_width = 150
//!
//! "Build to Learn and ship real products"
//!   → "Build to Learn"   (140px; + " and" would be 180px)
//!   → "and ship real"    (130px; + " products" would be 220px)
//!   → "products"
//! ```
//!
//! ## Line Caps
//!
//! Wrapping never truncates. Callers that only draw a prefix (titles are
//! capped at two lines) either slice the collected result or `.take(n)` the
//! lazy [`WrapLines`] iterator; both yield the same first `n` lines.
//!
//! [`TextMeasure`]: crate::imaging::TextMeasure

use std::str::SplitWhitespace;

/// Wrap `text` into lines no wider than `max_width`, as measured by `measure`.
///
/// Returns every line, in input order. Empty or whitespace-only input yields
/// no lines.
///
/// # Panics
///
/// Panics if `max_width` is not a positive finite number.
///
/// # Examples
///
/// ```
/// use og_images::wrap::wrap;
///
/// let measure = |s: &str| s.chars().count() as f32 * 10.0;
/// let lines = wrap("Build to Learn and ship real products", 150.0, measure);
/// assert_eq!(lines, ["Build to Learn", "and ship real", "products"]);
/// ```
pub fn wrap<F>(text: &str, max_width: f32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    wrap_lines(text, max_width, measure).collect()
}

/// Lazy form of [`wrap`]: yields lines one at a time.
///
/// Each call to `next` consumes words until a line closes, so `.take(n)`
/// stops measuring once the `n`-th line is complete.
pub fn wrap_lines<F>(text: &str, max_width: f32, measure: F) -> WrapLines<'_, F>
where
    F: Fn(&str) -> f32,
{
    assert!(
        max_width.is_finite() && max_width > 0.0,
        "wrap width must be positive and finite, got {max_width}"
    );
    WrapLines {
        words: text.split_whitespace(),
        max_width,
        measure,
        current: String::new(),
    }
}

/// Iterator over wrapped lines. Created by [`wrap_lines`].
pub struct WrapLines<'a, F> {
    words: SplitWhitespace<'a>,
    max_width: f32,
    measure: F,
    /// Line being accumulated; words are never empty, so empty means "no words yet".
    current: String,
}

impl<F> Iterator for WrapLines<'_, F>
where
    F: Fn(&str) -> f32,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        for word in self.words.by_ref() {
            if self.current.is_empty() {
                // A lone word is placed regardless of its width.
                self.current.push_str(word);
                continue;
            }

            let candidate = format!("{} {}", self.current, word);
            if (self.measure)(&candidate) <= self.max_width {
                self.current = candidate;
            } else {
                return Some(std::mem::replace(&mut self.current, word.to_string()));
            }
        }

        if self.current.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.current))
        }
    }
}
