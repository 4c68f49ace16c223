//! Text width in layout units: 1 per narrow glyph, 2 per wide glyph.

use unicode_width::UnicodeWidthChar;

use crate::config::WidthMode;

/// Display width of `text` using the default classification.
pub fn measure(text: &str) -> usize {
    measure_with(text, WidthMode::default())
}

/// Display width of `text` under `mode`.
pub fn measure_with(text: &str, mode: WidthMode) -> usize {
    text.chars().map(|c| char_units(c, mode)).sum()
}

fn char_units(c: char, mode: WidthMode) -> usize {
    let wide = match mode {
        WidthMode::Utf8Length => c.len_utf8() > 2,
        WidthMode::EastAsian => c.width().unwrap_or(1) >= 2,
    };
    if wide {
        2
    } else {
        1
    }
}
