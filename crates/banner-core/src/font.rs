//! Fixed-height glyph fonts
//!
//! A [`Font`] maps characters to [`Glyph`]s that all share one height.
//! Lookups never normalize their key: callers upper-case input before
//! asking for a glyph, and anything without an entry simply has no glyph.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use thiserror::Error;

use crate::glyphs;

/// Raw font data: `(character, rows)` pairs
pub type GlyphTable = &'static [(char, &'static [&'static str])];

/// Defects found while building a font table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FontError {
    /// The table has no glyphs
    #[error("font has no glyphs")]
    Empty,

    /// A font must be at least one row tall
    #[error("font height must be at least one row")]
    ZeroHeight,

    /// A glyph is taller or shorter than the font
    #[error("glyph {ch:?} has {found} rows, expected {expected}")]
    RowCount {
        ch: char,
        expected: usize,
        found: usize,
    },

    /// A glyph row differs in width from the glyph's first row
    #[error("glyph {ch:?} row {row} is {found} columns wide, expected {expected}")]
    RaggedRow {
        ch: char,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The same character appears twice in the table
    #[error("glyph {0:?} is defined more than once")]
    Duplicate(char),
}

/// One character's large-print rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    rows: &'static [&'static str],
    width: usize,
}

impl Glyph {
    /// All rows, top to bottom
    pub fn rows(&self) -> &'static [&'static str] {
        self.rows
    }

    /// Row at `index`, if the glyph is that tall
    pub fn row(&self, index: usize) -> Option<&'static str> {
        self.rows.get(index).copied()
    }

    /// Width in columns, shared by every row
    pub fn width(&self) -> usize {
        self.width
    }

    /// Row count, equal to the owning font's height
    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// A validated, read-only font table
#[derive(Debug, Clone)]
pub struct Font {
    name: &'static str,
    height: usize,
    max_width: usize,
    glyphs: HashMap<char, Glyph>,
}

static STANDARD: LazyLock<Result<Font, FontError>> =
    LazyLock::new(|| Font::new("Standard", glyphs::HEIGHT, glyphs::STANDARD));

/// The built-in font, or the defect that kept it from building
pub(crate) fn checked_standard() -> Result<&'static Font, FontError> {
    STANDARD.as_ref().map_err(Clone::clone)
}

impl Font {
    /// Build a font, checking that every glyph is exactly `height` rows of
    /// constant width and that no character is defined twice.
    pub fn new(name: &'static str, height: usize, table: GlyphTable) -> Result<Self, FontError> {
        if height == 0 {
            return Err(FontError::ZeroHeight);
        }
        if table.is_empty() {
            return Err(FontError::Empty);
        }

        let mut glyphs = HashMap::with_capacity(table.len());
        let mut max_width = 0;

        for &(ch, rows) in table {
            if rows.len() != height {
                return Err(FontError::RowCount {
                    ch,
                    expected: height,
                    found: rows.len(),
                });
            }

            let width = rows[0].chars().count();
            let ragged = rows
                .iter()
                .map(|row| row.chars().count())
                .enumerate()
                .find(|&(_, found)| found != width);
            if let Some((row, found)) = ragged {
                return Err(FontError::RaggedRow {
                    ch,
                    row,
                    expected: width,
                    found,
                });
            }

            if glyphs.insert(ch, Glyph { rows, width }).is_some() {
                return Err(FontError::Duplicate(ch));
            }
            max_width = max_width.max(width);
        }

        tracing::trace!(font = name, glyphs = glyphs.len(), height, "font table built");

        Ok(Self {
            name,
            height,
            max_width,
            glyphs,
        })
    }

    /// The built-in 7-row block font.
    ///
    /// Built on first use. Panics if the compiled-in table is malformed,
    /// which [`crate::init`] surfaces at startup instead.
    pub fn standard() -> &'static Font {
        match checked_standard() {
            Ok(font) => font,
            Err(err) => panic!("built-in font table is corrupt: {err}"),
        }
    }

    /// Glyph for `ch`, or `None` when the font has no entry for it
    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Row count shared by every glyph
    pub fn height(&self) -> usize {
        self.height
    }

    /// Width of the widest glyph
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// Number of supported characters
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Supported characters in code-point order
    pub fn chars(&self) -> Vec<char> {
        let mut chars: Vec<char> = self.glyphs.keys().copied().collect();
        chars.sort_unstable();
        chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TINY: GlyphTable = &[('A', &["/\\", "||"]), ('B', &["|)", "|)"])];

    #[test]
    fn test_standard_font_loads() {
        let font = Font::standard();
        assert_eq!(font.name(), "Standard");
        assert_eq!(font.height(), 7);
        // A-Z, 0-9 and 32 punctuation marks
        assert_eq!(font.len(), 68);
        assert!(!font.is_empty());
    }

    #[test]
    fn test_standard_font_built_once() {
        let checked = checked_standard().unwrap();
        assert!(std::ptr::eq(checked, Font::standard()));
        assert!(std::ptr::eq(Font::standard(), Font::standard()));
    }

    #[test]
    fn test_every_glyph_has_font_height() {
        let font = Font::standard();
        for ch in font.chars() {
            let glyph = font.glyph(ch).unwrap();
            assert_eq!(glyph.height(), font.height(), "glyph {ch:?}");
            assert!(
                glyph.rows().iter().all(|row| row.len() == glyph.width()),
                "glyph {ch:?} is ragged"
            );
        }
    }

    #[test]
    fn test_glyphs_use_ink_and_space_only() {
        let font = Font::standard();
        for ch in font.chars() {
            let glyph = font.glyph(ch).unwrap();
            let stray = glyph
                .rows()
                .iter()
                .flat_map(|row| row.chars())
                .find(|&c| c != glyphs::INK && c != ' ');
            assert_eq!(stray, None, "glyph {ch:?}");
        }
    }

    #[test]
    fn test_supported_characters() {
        let font = Font::standard();
        for ch in ('A'..='Z').chain('0'..='9') {
            assert!(font.contains(ch), "missing {ch:?}");
        }
        for ch in "#~!@$%^&*)(_+={}[]|\\:;\"'`><.,?/-".chars() {
            assert!(font.contains(ch), "missing {ch:?}");
        }
    }

    #[test]
    fn test_unmapped_characters() {
        let font = Font::standard();
        assert!(font.glyph('a').is_none());
        assert!(font.glyph('z').is_none());
        assert!(font.glyph(' ').is_none());
        assert!(font.glyph('é').is_none());
        assert!(font.glyph('\n').is_none());
    }

    #[test]
    fn test_glyph_widths() {
        let font = Font::standard();
        assert_eq!(font.glyph('H').unwrap().width(), 7);
        assert_eq!(font.glyph('I').unwrap().width(), 3);
        assert_eq!(font.glyph('K').unwrap().width(), 6);
        assert_eq!(font.glyph('"').unwrap().width(), 9);
        assert_eq!(font.max_width(), 9);
    }

    #[test]
    fn test_repaired_punctuation() {
        let font = Font::standard();
        let caret = font.glyph('^').unwrap();
        assert_eq!(caret.row(2), Some("#   #"));
        assert_eq!(caret.row(3), Some("     "));
        assert_eq!(font.glyph('+').unwrap().row(6), Some("       "));
        assert_eq!(font.glyph('=').unwrap().row(4), Some(" ##### "));
    }

    #[test]
    fn test_glyph_display() {
        let font = Font::new("Tiny", 2, TINY).unwrap();
        assert_eq!(font.glyph('A').unwrap().to_string(), "/\\\n||\n");
        assert_eq!(font.glyph('B').unwrap().row(2), None);
    }

    #[test]
    fn test_chars_sorted() {
        let font = Font::new("Tiny", 2, TINY).unwrap();
        assert_eq!(font.chars(), vec!['A', 'B']);
    }

    #[test]
    fn test_empty_font_rejected() {
        assert_eq!(Font::new("Empty", 7, &[]).unwrap_err(), FontError::Empty);
        assert_eq!(Font::new("Flat", 0, TINY).unwrap_err(), FontError::ZeroHeight);
    }

    #[test]
    fn test_row_count_rejected() {
        const SHORT: GlyphTable = &[('A', &["#", "#"]), ('^', &["#"])];
        assert_eq!(
            Font::new("Short", 2, SHORT).unwrap_err(),
            FontError::RowCount {
                ch: '^',
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_ragged_row_rejected() {
        const RAGGED: GlyphTable = &[('A', &["##", "#", "##"])];
        let err = Font::new("Ragged", 3, RAGGED).unwrap_err();
        assert_eq!(
            err,
            FontError::RaggedRow {
                ch: 'A',
                row: 1,
                expected: 2,
                found: 1
            }
        );
        assert_eq!(err.to_string(), "glyph 'A' row 1 is 1 columns wide, expected 2");
    }

    #[test]
    fn test_duplicate_rejected() {
        const TWICE: GlyphTable = &[('A', &["#"]), ('A', &["##"])];
        assert_eq!(
            Font::new("Twice", 1, TWICE).unwrap_err(),
            FontError::Duplicate('A')
        );
    }
}
