//! Helvetica glyph widths for line wrapping.
//!
//! Widths are in thousandths of the font size, taken from the Adobe core
//! font metrics for Helvetica under WinAnsiEncoding.

/// Widths for bytes `0x20..=0x7E`.
const ASCII_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0..?
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // P.._
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // `..o
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // p..~
];

/// Approximate width used for the upper Latin-1 half.
const FALLBACK_WIDTH: u16 = 556;

/// Width of one encoded byte, in font units.
pub fn glyph_width(byte: u8) -> u16 {
    match byte {
        0x20..=0x7E => ASCII_WIDTHS[usize::from(byte - 0x20)],
        0xA0 => 278,
        _ => FALLBACK_WIDTH,
    }
}

/// Width of encoded text at `font_size`, in points.
pub fn text_width(bytes: &[u8], font_size: f32) -> f32 {
    let units: u32 = bytes.iter().map(|&b| u32::from(glyph_width(b))).sum();
    units as f32 * font_size / 1000.0
}
