//! # Banner Composer
//!
//! Lays glyphs side by side into a row-major [`Banner`]. Each character's
//! glyph rows are appended to the matching banner rows, followed by a blank
//! gutter, so every row grows by the same amount with every character:
//!
//! ```text
//! row 0: "   #     "  ->  "   #     ######   "
//! row 1: "  # #    "  ->  "  # #    #     #  "
//!         A + gutter       A + gutter + B + gutter
//! ```
//!
//! Characters the font has no glyph for are dropped without a trace, gutter
//! included.

use std::fmt;
use std::io::Write;

use crate::error::Result;
use crate::font::Font;

/// Blank columns after every glyph
pub const DEFAULT_GUTTER: usize = 2;

/// Leading characters considered by [`BannerComposer::render`]
pub const DEFAULT_MAX_CHARS: usize = 10;

/// Configuration for banner composition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerConfig {
    /// Blank columns appended after each glyph, including the last
    pub gutter: usize,
    /// How many leading characters of the input are rendered
    pub max_chars: usize,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            gutter: DEFAULT_GUTTER,
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

/// A finished banner: one string per font row, all of equal width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    rows: Vec<String>,
}

impl Banner {
    fn with_capacity(height: usize, width: usize) -> Self {
        Self {
            rows: (0..height).map(|_| String::with_capacity(width)).collect(),
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<String> {
        self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Width in columns; every row has this width
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.chars().count())
    }

    /// True when nothing was rendered
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(String::is_empty)
    }

    /// Write every row followed by a newline
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        for row in &self.rows {
            writeln!(out, "{row}")?;
        }
        out.flush()?;
        Ok(())
    }
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Upper-case `input` the way the built-in font expects it.
///
/// Only ASCII letters change; everything else passes through untouched.
pub fn normalize(input: &str) -> String {
    input.to_ascii_uppercase()
}

/// Builds banners from a font
#[derive(Debug, Clone)]
pub struct BannerComposer<'a> {
    font: &'a Font,
    config: BannerConfig,
}

impl BannerComposer<'static> {
    /// Composer over the built-in font with default config
    pub fn new() -> Self {
        Self::with_config(BannerConfig::default())
    }

    /// Composer over the built-in font
    pub fn with_config(config: BannerConfig) -> Self {
        Self {
            font: Font::standard(),
            config,
        }
    }
}

impl Default for BannerComposer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> BannerComposer<'a> {
    pub fn with_font(font: &'a Font, config: BannerConfig) -> Self {
        Self { font, config }
    }

    pub fn font(&self) -> &'a Font {
        self.font
    }

    pub fn config(&self) -> &BannerConfig {
        &self.config
    }

    /// Compose the first `max_chars` characters of `input`.
    ///
    /// No normalization happens here; characters without a glyph are
    /// skipped but still count towards `max_chars`.
    pub fn compose(&self, input: &str, max_chars: usize) -> Banner {
        let height = self.font.height();
        let gutter = " ".repeat(self.config.gutter);
        let capacity = input.len().min(max_chars) * (self.font.max_width() + self.config.gutter);
        let mut banner = Banner::with_capacity(height, capacity);

        for ch in input.chars().take(max_chars) {
            let Some(glyph) = self.font.glyph(ch) else {
                tracing::debug!(?ch, font = self.font.name(), "no glyph, dropping character");
                continue;
            };

            for (row, line) in banner.rows.iter_mut().zip(glyph.rows()) {
                row.push_str(line);
                row.push_str(&gutter);
            }
        }

        tracing::trace!(height, width = banner.width(), "banner composed");
        banner
    }

    /// Upper-case `input` and compose it, capped at `config.max_chars`
    pub fn render(&self, input: &str) -> Banner {
        self.compose(&normalize(input), self.config.max_chars)
    }
}
