//! Font handling: candidate-path resolution, width measurement, glyph drawing
//! and greedy word-wrapping.
//!
//! A `Typeface` is either a vector font loaded from disk or the built-in 8x8
//! bitmap glyph set. The bitmap set keeps output fully deterministic on
//! systems with no usable font files; measurement and drawing go through the
//! same `Typeface` so wrapped text always fits the width it was measured
//! against.

use std::path::PathBuf;

use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, Blend, Canvas as _};
use log::{debug, warn};

/// Dot rows per glyph in the built-in bitmap set.
const BITMAP_GLYPH_SIZE: u32 = 8;

/// Built-in glyphs for ASCII 32..=126, one byte per row, MSB leftmost.
#[rustfmt::skip]
static BITMAP_GLYPHS: [u8; 95 * 8] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ' '
    0x18, 0x18, 0x18, 0x18, 0x18, 0x00, 0x18, 0x00, // '!'
    0x6C, 0x6C, 0x24, 0x00, 0x00, 0x00, 0x00, 0x00, // '"'
    0x6C, 0x6C, 0xFE, 0x6C, 0xFE, 0x6C, 0x6C, 0x00, // '#'
    0x18, 0x7E, 0xC0, 0x7C, 0x06, 0xFC, 0x18, 0x00, // '$'
    0x00, 0xC6, 0xCC, 0x18, 0x30, 0x66, 0xC6, 0x00, // '%'
    0x38, 0x6C, 0x38, 0x76, 0xDC, 0xCC, 0x76, 0x00, // '&'
    0x18, 0x18, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, // '\''
    0x0C, 0x18, 0x30, 0x30, 0x30, 0x18, 0x0C, 0x00, // '('
    0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x18, 0x30, 0x00, // ')'
    0x00, 0x66, 0x3C, 0xFF, 0x3C, 0x66, 0x00, 0x00, // '*'
    0x00, 0x18, 0x18, 0x7E, 0x18, 0x18, 0x00, 0x00, // '+'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x30, // ','
    0x00, 0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00, // '-'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00, // '.'
    0x06, 0x0C, 0x18, 0x30, 0x60, 0xC0, 0x80, 0x00, // '/'
    0x7C, 0xCE, 0xDE, 0xF6, 0xE6, 0xC6, 0x7C, 0x00, // '0'
    0x18, 0x38, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x00, // '1'
    0x7C, 0xC6, 0x06, 0x7C, 0xC0, 0xC0, 0xFE, 0x00, // '2'
    0xFC, 0x06, 0x06, 0x3C, 0x06, 0x06, 0xFC, 0x00, // '3'
    0x0C, 0xCC, 0xCC, 0xCC, 0xFE, 0x0C, 0x0C, 0x00, // '4'
    0xFE, 0xC0, 0xFC, 0x06, 0x06, 0xC6, 0x7C, 0x00, // '5'
    0x7C, 0xC0, 0xC0, 0xFC, 0xC6, 0xC6, 0x7C, 0x00, // '6'
    0xFE, 0x06, 0x06, 0x0C, 0x18, 0x18, 0x18, 0x00, // '7'
    0x7C, 0xC6, 0xC6, 0x7C, 0xC6, 0xC6, 0x7C, 0x00, // '8'
    0x7C, 0xC6, 0xC6, 0x7E, 0x06, 0x06, 0x7C, 0x00, // '9'
    0x00, 0x18, 0x18, 0x00, 0x00, 0x18, 0x18, 0x00, // ':'
    0x00, 0x18, 0x18, 0x00, 0x00, 0x18, 0x18, 0x30, // ';'
    0x0C, 0x18, 0x30, 0x60, 0x30, 0x18, 0x0C, 0x00, // '<'
    0x00, 0x00, 0x7E, 0x00, 0x7E, 0x00, 0x00, 0x00, // '='
    0x30, 0x18, 0x0C, 0x06, 0x0C, 0x18, 0x30, 0x00, // '>'
    0x3C, 0x66, 0x0C, 0x18, 0x18, 0x00, 0x18, 0x00, // '?'
    0x7C, 0xC6, 0xDE, 0xDE, 0xDE, 0xC0, 0x7E, 0x00, // '@'
    0x38, 0x6C, 0xC6, 0xC6, 0xFE, 0xC6, 0xC6, 0x00, // 'A'
    0xFC, 0xC6, 0xC6, 0xFC, 0xC6, 0xC6, 0xFC, 0x00, // 'B'
    0x7C, 0xC6, 0xC0, 0xC0, 0xC0, 0xC6, 0x7C, 0x00, // 'C'
    0xF8, 0xCC, 0xC6, 0xC6, 0xC6, 0xCC, 0xF8, 0x00, // 'D'
    0xFE, 0xC0, 0xC0, 0xF8, 0xC0, 0xC0, 0xFE, 0x00, // 'E'
    0xFE, 0xC0, 0xC0, 0xF8, 0xC0, 0xC0, 0xC0, 0x00, // 'F'
    0x7C, 0xC6, 0xC0, 0xCE, 0xC6, 0xC6, 0x7C, 0x00, // 'G'
    0xC6, 0xC6, 0xC6, 0xFE, 0xC6, 0xC6, 0xC6, 0x00, // 'H'
    0x7E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x00, // 'I'
    0x06, 0x06, 0x06, 0x06, 0xC6, 0xC6, 0x7C, 0x00, // 'J'
    0xC6, 0xCC, 0xD8, 0xF0, 0xD8, 0xCC, 0xC6, 0x00, // 'K'
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xFE, 0x00, // 'L'
    0xC6, 0xEE, 0xFE, 0xD6, 0xC6, 0xC6, 0xC6, 0x00, // 'M'
    0xC6, 0xE6, 0xF6, 0xDE, 0xCE, 0xC6, 0xC6, 0x00, // 'N'
    0x7C, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6, 0x7C, 0x00, // 'O'
    0xFC, 0xC6, 0xC6, 0xFC, 0xC0, 0xC0, 0xC0, 0x00, // 'P'
    0x7C, 0xC6, 0xC6, 0xC6, 0xD6, 0xDE, 0x7C, 0x06, // 'Q'
    0xFC, 0xC6, 0xC6, 0xFC, 0xD8, 0xCC, 0xC6, 0x00, // 'R'
    0x7C, 0xC6, 0xC0, 0x7C, 0x06, 0xC6, 0x7C, 0x00, // 'S'
    0x7E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00, // 'T'
    0xC6, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6, 0x7C, 0x00, // 'U'
    0xC6, 0xC6, 0xC6, 0xC6, 0x6C, 0x38, 0x10, 0x00, // 'V'
    0xC6, 0xC6, 0xC6, 0xD6, 0xFE, 0xEE, 0xC6, 0x00, // 'W'
    0xC6, 0xC6, 0x6C, 0x38, 0x6C, 0xC6, 0xC6, 0x00, // 'X'
    0x66, 0x66, 0x66, 0x3C, 0x18, 0x18, 0x18, 0x00, // 'Y'
    0xFE, 0x06, 0x0C, 0x18, 0x30, 0x60, 0xFE, 0x00, // 'Z'
    0x3C, 0x30, 0x30, 0x30, 0x30, 0x30, 0x3C, 0x00, // '['
    0xC0, 0x60, 0x30, 0x18, 0x0C, 0x06, 0x02, 0x00, // '\\'
    0x3C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x3C, 0x00, // ']'
    0x10, 0x38, 0x6C, 0xC6, 0x00, 0x00, 0x00, 0x00, // '^'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFE, // '_'
    0x18, 0x18, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, // '`'
    0x00, 0x00, 0x7C, 0x06, 0x7E, 0xC6, 0x7E, 0x00, // 'a'
    0xC0, 0xC0, 0xFC, 0xC6, 0xC6, 0xC6, 0xFC, 0x00, // 'b'
    0x00, 0x00, 0x7C, 0xC6, 0xC0, 0xC6, 0x7C, 0x00, // 'c'
    0x06, 0x06, 0x7E, 0xC6, 0xC6, 0xC6, 0x7E, 0x00, // 'd'
    0x00, 0x00, 0x7C, 0xC6, 0xFE, 0xC0, 0x7C, 0x00, // 'e'
    0x1C, 0x30, 0x30, 0x7C, 0x30, 0x30, 0x30, 0x00, // 'f'
    0x00, 0x00, 0x7E, 0xC6, 0xC6, 0x7E, 0x06, 0x7C, // 'g'
    0xC0, 0xC0, 0xFC, 0xC6, 0xC6, 0xC6, 0xC6, 0x00, // 'h'
    0x18, 0x00, 0x38, 0x18, 0x18, 0x18, 0x3C, 0x00, // 'i'
    0x18, 0x00, 0x38, 0x18, 0x18, 0x18, 0x18, 0x70, // 'j'
    0xC0, 0xC0, 0xC6, 0xCC, 0xF8, 0xCC, 0xC6, 0x00, // 'k'
    0x38, 0x18, 0x18, 0x18, 0x18, 0x18, 0x3C, 0x00, // 'l'
    0x00, 0x00, 0xEC, 0xFE, 0xD6, 0xC6, 0xC6, 0x00, // 'm'
    0x00, 0x00, 0xFC, 0xC6, 0xC6, 0xC6, 0xC6, 0x00, // 'n'
    0x00, 0x00, 0x7C, 0xC6, 0xC6, 0xC6, 0x7C, 0x00, // 'o'
    0x00, 0x00, 0xFC, 0xC6, 0xC6, 0xFC, 0xC0, 0xC0, // 'p'
    0x00, 0x00, 0x7E, 0xC6, 0xC6, 0x7E, 0x06, 0x06, // 'q'
    0x00, 0x00, 0xDC, 0xE6, 0xC0, 0xC0, 0xC0, 0x00, // 'r'
    0x00, 0x00, 0x7E, 0xC0, 0x7C, 0x06, 0xFC, 0x00, // 's'
    0x30, 0x30, 0x7C, 0x30, 0x30, 0x30, 0x1C, 0x00, // 't'
    0x00, 0x00, 0xC6, 0xC6, 0xC6, 0xC6, 0x7E, 0x00, // 'u'
    0x00, 0x00, 0xC6, 0xC6, 0xC6, 0x6C, 0x38, 0x00, // 'v'
    0x00, 0x00, 0xC6, 0xC6, 0xD6, 0xFE, 0x6C, 0x00, // 'w'
    0x00, 0x00, 0xC6, 0x6C, 0x38, 0x6C, 0xC6, 0x00, // 'x'
    0x00, 0x00, 0xC6, 0xC6, 0xC6, 0x7E, 0x06, 0x7C, // 'y'
    0x00, 0x00, 0xFE, 0x0C, 0x38, 0x60, 0xFE, 0x00, // 'z'
    0x0E, 0x18, 0x18, 0x70, 0x18, 0x18, 0x0E, 0x00, // '{'
    0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00, // '|'
    0x70, 0x18, 0x18, 0x0E, 0x18, 0x18, 0x70, 0x00, // '}'
    0x72, 0x9C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // '~'
];

enum FaceKind {
    Vector(FontArc),
    Bitmap,
}

/// A resolved font, immutable for the duration of a screen composition.
pub struct Typeface {
    kind: FaceKind,
}

impl Typeface {
    /// Resolve a typeface from an ordered list of candidate font files.
    ///
    /// The first candidate that exists and parses wins. When none does, the
    /// built-in bitmap glyph set is used; this is graceful degradation, not
    /// a failure condition.
    pub fn resolve(candidates: &[PathBuf]) -> Self {
        for path in candidates {
            let bytes = match std::fs::read(path) {
                Ok(bytes) => bytes,
                Err(_) => continue,
            };
            match FontArc::try_from_vec(bytes) {
                Ok(font) => {
                    debug!("Resolved font: {}", path.display());
                    return Self {
                        kind: FaceKind::Vector(font),
                    };
                }
                Err(e) => {
                    warn!("Failed to parse font {}: {}", path.display(), e);
                }
            }
        }
        warn!("No usable font candidate; falling back to the built-in glyph set");
        Self::builtin()
    }

    /// The built-in bitmap glyph set.
    pub fn builtin() -> Self {
        Self {
            kind: FaceKind::Bitmap,
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.kind, FaceKind::Bitmap)
    }

    /// Rendered pixel width of `text` at `size`.
    pub fn measure(&self, text: &str, size: f32) -> f32 {
        match &self.kind {
            FaceKind::Vector(font) => {
                let scaled = font.as_scaled(PxScale::from(size));
                let mut width = 0.0;
                let mut prev = None;
                for c in text.chars() {
                    let id = font.glyph_id(c);
                    if let Some(prev) = prev {
                        width += scaled.kern(prev, id);
                    }
                    width += scaled.h_advance(id);
                    prev = Some(id);
                }
                width
            }
            FaceKind::Bitmap => {
                let scale = bitmap_scale(size);
                (text.chars().count() as u32 * BITMAP_GLYPH_SIZE * scale) as f32
            }
        }
    }

    /// Draw `text` with its top-left corner at (x, y), blending over the
    /// existing pixels. Pixels falling outside the buffer are clipped.
    pub(crate) fn draw(
        &self,
        img: &mut Blend<RgbaImage>,
        x: i32,
        y: i32,
        size: f32,
        color: Rgba<u8>,
        text: &str,
    ) {
        match &self.kind {
            FaceKind::Vector(font) => {
                draw_text_mut(img, color, x, y, PxScale::from(size), font, text);
            }
            FaceKind::Bitmap => {
                let scale = bitmap_scale(size);
                let mut pen_x = x;
                for c in text.chars() {
                    blit_bitmap_glyph(img, pen_x, y, scale, color, c);
                    pen_x += (BITMAP_GLYPH_SIZE * scale) as i32;
                }
            }
        }
    }
}

/// Integer dot size for the bitmap set at a nominal pixel size.
fn bitmap_scale(size: f32) -> u32 {
    ((size / BITMAP_GLYPH_SIZE as f32).round() as u32).max(1)
}

fn blit_bitmap_glyph(img: &mut Blend<RgbaImage>, x: i32, y: i32, scale: u32, color: Rgba<u8>, c: char) {
    let index = match c {
        ' '..='~' => (c as usize) - 32,
        // Anything outside the table renders as '?'
        _ => ('?' as usize) - 32,
    };
    let glyph = &BITMAP_GLYPHS[index * 8..(index + 1) * 8];
    let (width, height) = img.dimensions();
    for (row, bits) in glyph.iter().enumerate() {
        for col in 0..8u32 {
            if bits & (0x80 >> col) == 0 {
                continue;
            }
            for dy in 0..scale {
                for dx in 0..scale {
                    let px = x + (col * scale + dx) as i32;
                    let py = y + (row as u32 * scale + dy) as i32;
                    if px >= 0 && py >= 0 && (px as u32) < width && (py as u32) < height {
                        img.draw_pixel(px as u32, py as u32, color);
                    }
                }
            }
        }
    }
}

/// The two faces every screen composes with, resolved once per screen and
/// dropped with its canvas.
pub struct FontSet {
    /// Semi-bold face for headings, values and badges
    pub bold: Typeface,
    /// Regular face for body copy
    pub regular: Typeface,
}

impl FontSet {
    pub fn resolve(bold_candidates: &[PathBuf], regular_candidates: &[PathBuf]) -> Self {
        Self {
            bold: Typeface::resolve(bold_candidates),
            regular: Typeface::resolve(regular_candidates),
        }
    }

    /// Both faces from the built-in glyph set. Deterministic everywhere.
    pub fn builtin() -> Self {
        Self {
            bold: Typeface::builtin(),
            regular: Typeface::builtin(),
        }
    }
}

/// Greedily wrap `text` into lines no wider than `max_width` pixels.
///
/// Words are accumulated until the next word would push the measured line
/// past the limit, then the line is flushed. Word order is preserved and
/// words are never split: a single word wider than the limit gets its own
/// line. All whitespace, including newlines, separates words.
pub fn wrap(face: &Typeface, size: f32, text: &str, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if !current.is_empty() && face.measure(&candidate, size) > max_width {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_without_candidates_degrades_to_builtin() {
        let face = Typeface::resolve(&[PathBuf::from("/nonexistent/font.ttf")]);
        assert!(face.is_builtin());
    }

    #[test]
    fn builtin_measure_is_monotonic_in_length() {
        let face = Typeface::builtin();
        let a = face.measure("ab", 26.0);
        let b = face.measure("abcd", 26.0);
        assert!(b > a);
        assert_eq!(face.measure("", 26.0), 0.0);
    }

    #[test]
    fn wrap_respects_max_width() {
        let face = Typeface::builtin();
        let size = 26.0;
        let text = "I need help creating a Facebook ad campaign for my new running shoes";
        let max_width = 400.0;
        let lines = wrap(&face, size, text, max_width);
        assert!(!lines.is_empty());
        for line in &lines {
            assert!(
                face.measure(line, size) <= max_width,
                "line too wide: {line:?}"
            );
        }
        // Word order preserved
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, text);
    }

    #[test]
    fn wrap_empty_message_yields_no_lines() {
        let face = Typeface::builtin();
        assert!(wrap(&face, 26.0, "", 500.0).is_empty());
        assert!(wrap(&face, 26.0, "   \n  ", 500.0).is_empty());
    }

    #[test]
    fn wrap_overwide_word_gets_own_line() {
        let face = Typeface::builtin();
        let size = 26.0;
        // One word far wider than the limit must still be emitted, alone.
        let lines = wrap(&face, size, "a supercalifragilisticexpialidocious b", 200.0);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "supercalifragilisticexpialidocious");
    }

    #[test]
    fn bitmap_draw_clips_out_of_range() {
        let mut img = Blend(RgbaImage::new(16, 16));
        let face = Typeface::builtin();
        // Partially and fully off-canvas placements must not panic.
        face.draw(&mut img, 12, 12, 16.0, Rgba([255, 255, 255, 255]), "XYZ");
        face.draw(&mut img, -40, -40, 16.0, Rgba([255, 255, 255, 255]), "X");
    }
}
