//! # Banner Core
//!
//! Large-print block letters for the terminal.
//!
//! This crate provides:
//! - A fixed-height glyph font and its validated lookup table
//! - The built-in 7-row font covering A-Z, 0-9 and ASCII punctuation
//! - The banner composer that lays glyphs side by side, row by row
//!
//! ```
//! use banner_core::BannerComposer;
//!
//! let banner = BannerComposer::new().render("hi");
//! assert_eq!(banner.height(), 7);
//! assert_eq!(banner.rows()[0], "#     #  ###  ");
//! ```

pub mod composer;
pub mod error;
pub mod font;
pub mod glyphs;

pub use composer::{
    normalize, Banner, BannerComposer, BannerConfig, DEFAULT_GUTTER, DEFAULT_MAX_CHARS,
};
pub use error::{CoreError, Result};
pub use font::{Font, FontError, Glyph, GlyphTable};

/// Core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the core: validate the built-in font so a corrupt table
/// fails at startup rather than on first render.
pub fn init() -> Result<()> {
    tracing::info!("Initializing Banner Core v{}", VERSION);
    let font = font::checked_standard()?;
    tracing::debug!(
        font = font.name(),
        glyphs = font.len(),
        height = font.height(),
        "Built-in font ready"
    );
    Ok(())
}
