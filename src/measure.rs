//! Text measurement
//!
//! The engine never renders text itself; it asks a [`TextMeasurer`] how wide a
//! run of text is. Two measurements matter:
//!
//! - *tab expansion on*: every tab counts as `tab_size` spaces (the width the
//!   user configured)
//! - *tab expansion off*: tabs take whatever width the rendering primitive
//!   natively gives them
//!
//! The difference between the two drives [`tabs`](crate::tabs) alignment and
//! caret placement.

use std::borrow::Cow;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use fontdue::{Font, FontSettings};
use serde::{Deserialize, Serialize};

/// Tab width the rendering primitive uses when it expands tabs itself
pub const NATIVE_TAB_SIZE: usize = 8;

/// Font and tab configuration for measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureOptions {
    pub font_family: String,
    pub font_size: f32,
    /// Desired tab width in columns
    pub tab_size: usize,
}

impl Default for MeasureOptions {
    fn default() -> Self {
        Self {
            font_family: "Segoe UI".to_string(),
            font_size: 12.0,
            tab_size: 4,
        }
    }
}

/// Converts text to a pixel width
///
/// Widths must be additive: the width of `a + b` equals the width of `a`
/// plus the width of `b`. Hit-testing sums per-character widths and relies
/// on this.
pub trait TextMeasurer {
    fn options(&self) -> &MeasureOptions;

    /// Change the desired tab width
    fn set_tab_size(&mut self, tab_size: usize);

    /// Width of `text` in pixels. With `expand_tabs` every tab counts as
    /// `tab_size` spaces; without it tabs keep their native width.
    fn measure(&self, text: &str, expand_tabs: bool) -> f32;
}

/// Replace every tab with `tab_size` spaces
pub fn expand_tabs(text: &str, tab_size: usize) -> Cow<'_, str> {
    if text.contains('\t') {
        Cow::Owned(text.replace('\t', &" ".repeat(tab_size)))
    } else {
        Cow::Borrowed(text)
    }
}

/// Character boundary in `text` nearest to the horizontal pixel offset `x`,
/// measured with tab expansion on.
pub fn character_at_pixel(measurer: &dyn TextMeasurer, text: &str, x: f32) -> usize {
    if x <= 0.0 {
        return 0;
    }

    let mut scratch = [0u8; 4];
    let mut left = 0.0;
    for (n, ch) in text.chars().enumerate() {
        let right = left + measurer.measure(ch.encode_utf8(&mut scratch), true);
        if x < (left + right) / 2.0 {
            return n;
        }
        left = right;
    }
    text.chars().count()
}

// =============================================================================
// MonospaceMeasurer - fixed advance per character
// =============================================================================

/// Measurer where every character has the same advance. Deterministic, so it
/// is also what tests and the headless CLI use.
#[derive(Debug, Clone)]
pub struct MonospaceMeasurer {
    options: MeasureOptions,
    advance: f32,
    native_tab_size: usize,
}

impl MonospaceMeasurer {
    /// Advance derived from the font size (0.6 em, typical for monospace faces)
    pub fn new(options: MeasureOptions) -> Self {
        let advance = options.font_size * 0.6;
        Self::with_advance(options, advance)
    }

    pub fn with_advance(options: MeasureOptions, advance: f32) -> Self {
        Self {
            options,
            advance,
            native_tab_size: NATIVE_TAB_SIZE,
        }
    }

    pub fn with_native_tab_size(mut self, native_tab_size: usize) -> Self {
        self.native_tab_size = native_tab_size;
        self
    }

    pub fn advance(&self) -> f32 {
        self.advance
    }

    fn columns(&self, text: &str, expand_tabs: bool) -> usize {
        let tab = if expand_tabs {
            self.options.tab_size
        } else {
            self.native_tab_size
        };
        text.chars().map(|ch| if ch == '\t' { tab } else { 1 }).sum()
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn options(&self) -> &MeasureOptions {
        &self.options
    }

    fn set_tab_size(&mut self, tab_size: usize) {
        self.options.tab_size = tab_size;
    }

    fn measure(&self, text: &str, expand_tabs: bool) -> f32 {
        self.columns(text, expand_tabs) as f32 * self.advance
    }
}

// =============================================================================
// FontMeasurer - glyph advances from a font file
// =============================================================================

/// Measurer backed by real glyph advances
pub struct FontMeasurer {
    font: Font,
    options: MeasureOptions,
    native_tab_size: usize,
}

impl FontMeasurer {
    /// Load a font from raw TTF/OTF bytes
    pub fn from_bytes(bytes: &[u8], options: MeasureOptions) -> Result<Self> {
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|e| anyhow!("Failed to load font: {}", e))?;
        Ok(Self {
            font,
            options,
            native_tab_size: NATIVE_TAB_SIZE,
        })
    }

    /// Load a font from a file
    pub fn from_file(path: &Path, options: MeasureOptions) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read font {}", path.display()))?;
        let measurer = Self::from_bytes(&bytes, options)?;
        tracing::info!("Loaded font from {}", path.display());
        Ok(measurer)
    }

    pub fn with_native_tab_size(mut self, native_tab_size: usize) -> Self {
        self.native_tab_size = native_tab_size;
        self
    }

    fn advance(&self, ch: char) -> f32 {
        self.font.metrics(ch, self.options.font_size).advance_width
    }
}

impl TextMeasurer for FontMeasurer {
    fn options(&self) -> &MeasureOptions {
        &self.options
    }

    fn set_tab_size(&mut self, tab_size: usize) {
        self.options.tab_size = tab_size;
    }

    fn measure(&self, text: &str, expand_tabs: bool) -> f32 {
        let tab_columns = if expand_tabs {
            self.options.tab_size
        } else {
            self.native_tab_size
        };
        text.chars()
            .map(|ch| {
                if ch == '\t' {
                    tab_columns as f32 * self.advance(' ')
                } else {
                    self.advance(ch)
                }
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurer() -> MonospaceMeasurer {
        MonospaceMeasurer::with_advance(MeasureOptions::default(), 10.0)
    }

    #[test]
    fn test_monospace_tab_expansion() {
        let m = measurer();
        assert_eq!(m.measure("ab", false), 20.0);
        assert_eq!(m.measure("a\t", true), 50.0);
        assert_eq!(m.measure("a\t", false), 90.0);
    }

    #[test]
    fn test_expand_tabs() {
        assert_eq!(expand_tabs("a\tb", 2), "a  b");
        assert!(matches!(expand_tabs("ab", 4), Cow::Borrowed(_)));
    }

    #[test]
    fn test_character_at_pixel_rounds_to_nearest_boundary() {
        let m = measurer();
        assert_eq!(character_at_pixel(&m, "hello", -3.0), 0);
        assert_eq!(character_at_pixel(&m, "hello", 4.0), 0);
        assert_eq!(character_at_pixel(&m, "hello", 6.0), 1);
        assert_eq!(character_at_pixel(&m, "hello", 26.0), 3);
        assert_eq!(character_at_pixel(&m, "hello", 500.0), 5);
    }

    #[test]
    fn test_character_at_pixel_over_tab() {
        let m = measurer();
        // "\t" spans 0..40 with tab size 4
        assert_eq!(character_at_pixel(&m, "\tx", 15.0), 0);
        assert_eq!(character_at_pixel(&m, "\tx", 25.0), 1);
    }

    #[test]
    fn test_character_at_pixel_on_long_line() {
        let m = measurer();
        let text = "ab\t".repeat(2_000);
        // Each "ab\t" is 60px wide
        assert_eq!(character_at_pixel(&m, &text, 60.0 * 1_500.0 + 12.0), 4_501);
        assert_eq!(character_at_pixel(&m, &text, f32::MAX), 6_000);
    }

    #[test]
    fn test_widths_are_additive() {
        let m = measurer();
        let whole = m.measure("a\tbc", true);
        let parts: f32 = ["a", "\t", "b", "c"].iter().map(|s| m.measure(s, true)).sum();
        assert_eq!(whole, parts);
    }

    #[test]
    fn test_font_measurer_rejects_garbage() {
        assert!(FontMeasurer::from_bytes(&[0u8; 16], MeasureOptions::default()).is_err());
    }
}
