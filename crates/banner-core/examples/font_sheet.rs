//! Print every glyph of the built-in font and check its invariants
//!
//! Run with: cargo run -p banner-core --example font_sheet

use banner_core::{BannerComposer, BannerConfig, Font};

fn main() {
    let font = Font::standard();
    println!("═══════════════════════════════════════════════════════════");
    println!(
        "  {} font - {} glyphs, {} rows tall",
        font.name(),
        font.len(),
        font.height()
    );
    println!("═══════════════════════════════════════════════════════════\n");

    let mut passed = 0;
    let mut failed = 0;

    for ch in font.chars() {
        let Some(glyph) = font.glyph(ch) else {
            continue;
        };
        let ragged = glyph.rows().iter().any(|row| row.len() != glyph.width());
        if glyph.height() == font.height() && !ragged {
            passed += 1;
        } else {
            println!("✗ {:?} - {} rows, ragged: {}", ch, glyph.height(), ragged);
            failed += 1;
        }
    }

    println!("  Results: {} passed, {} failed\n", passed, failed);

    // Whole font, a line of glyphs at a time
    let composer = BannerComposer::with_config(BannerConfig::default());
    let chars = font.chars();
    for line in chars.chunks(composer.config().max_chars) {
        let text: String = line.iter().collect();
        println!("{}", text);
        print!("{}", composer.compose(&text, text.chars().count()));
        println!();
    }
}
