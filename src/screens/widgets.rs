//! Chrome shared across screens: status bar, tab bar, filter pills and chat
//! bubbles.

use image::Rgba;

use crate::canvas::Canvas;
use crate::theme::{
    BORDER, PRIMARY, SECONDARY, SUCCESS, TAB_BAR, TEXT_SECONDARY, TEXT_TERTIARY, WHITE,
};
use crate::typeface::{wrap, FontSet, Typeface};

/// Vertical advance between wrapped chat lines.
pub(crate) const LINE_HEIGHT: i32 = 36;

/// Smallest bubble drawn, even for an empty message.
pub(crate) const MIN_BUBBLE_HEIGHT: i32 = 80;

/// iOS-style status bar: time on the left, battery glyph on the right.
pub(crate) fn status_bar(canvas: &mut Canvas, fonts: &FontSet) {
    let w = canvas.width() as i32;
    let y = 60;
    canvas.text(&fonts.bold, 28.0, 80, y, WHITE, "9:41");
    canvas.outline_rounded_rect(w - 180, y + 2, w - 100, y + 24, 4, 2, WHITE);
    canvas.fill_rect(w - 140, y + 6, w - 110, y + 20, SUCCESS);
}

/// Five-tab bottom navigation bar with one highlighted tab.
pub(crate) fn tab_bar(canvas: &mut Canvas, fonts: &FontSet, active: usize) {
    let w = canvas.width() as i32;
    let h = canvas.height() as i32;
    let y = h - 140;
    canvas.fill_rect(0, y, w, h, TAB_BAR);
    canvas.line(0, y, w, y, BORDER, 2);

    let tabs = ["Home", "Tools", "AI Chat", "History", "Profile"];
    let icons = ["H", "T", "C", "Hi", "P"];
    let tab_w = w / 5;
    for (i, (tab, icon)) in tabs.iter().zip(icons.iter()).enumerate() {
        let cx = tab_w * i as i32 + tab_w / 2;
        let color = if i == active { SECONDARY } else { TEXT_TERTIARY };
        canvas.text(&fonts.bold, 36.0, cx - 10, y + 25, color, icon);
        canvas.text_centered(&fonts.regular, 24.0, cx, y + 75, color, tab);
    }
}

/// Geometry of a row of selector pills.
pub(crate) struct PillRow {
    pub height: i32,
    pub radius: i32,
    /// Label width heuristic: `chars * char_width + padding`
    pub char_width: i32,
    pub padding: i32,
    pub gap: i32,
    pub text_size: f32,
    pub text_dx: i32,
    pub text_dy: i32,
}

/// Draw a left-to-right row of pills. Active entries are filled with the
/// primary color and white text, inactive ones get an outline and secondary
/// text. Returns the x coordinate after the last pill.
pub(crate) fn pill_row(
    canvas: &mut Canvas,
    face: &Typeface,
    mut x: i32,
    y: i32,
    items: &[(&str, bool)],
    row: &PillRow,
) -> i32 {
    for (label, active) in items {
        let pw = label.chars().count() as i32 * row.char_width + row.padding;
        if *active {
            canvas.rounded_rect(x, y, x + pw, y + row.height, row.radius, PRIMARY);
            canvas.text(
                face,
                row.text_size,
                x + row.text_dx,
                y + row.text_dy,
                WHITE,
                label,
            );
        } else {
            canvas.outline_rounded_rect(x, y, x + pw, y + row.height, row.radius, 2, BORDER);
            canvas.text(
                face,
                row.text_size,
                x + row.text_dx,
                y + row.text_dy,
                TEXT_SECONDARY,
                label,
            );
        }
        x += pw + row.gap;
    }
    x
}

/// Bubble height heuristic used by the chat screen.
///
/// Estimated from character count, not from the wrapped line count, so very
/// long messages can overflow their bubble. Matching the shipped mockups
/// matters more than tight bounds here.
pub(crate) fn bubble_height(text: &str) -> i32 {
    MIN_BUBBLE_HEIGHT.max(text.chars().count() as i32 / 3 * 10 + 60)
}

/// Rounded message bubble with greedily wrapped text.
pub(crate) fn chat_bubble(
    canvas: &mut Canvas,
    face: &Typeface,
    x: i32,
    y: i32,
    width: i32,
    fill: Rgba<u8>,
    text: &str,
) {
    canvas.rounded_rect(x, y, x + width, y + bubble_height(text), 20, fill);
    let max_line_width = (width - 50) as f32;
    let mut ty = y + 20;
    for line in wrap(face, 26.0, text, max_line_width) {
        canvas.text(face, 26.0, x + 25, ty, WHITE, &line);
        ty += LINE_HEIGHT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::BG;

    fn test_row() -> PillRow {
        PillRow {
            height: 50,
            radius: 20,
            char_width: 24,
            padding: 50,
            gap: 16,
            text_size: 26.0,
            text_dx: 25,
            text_dy: 8,
        }
    }

    #[test]
    fn single_active_pill_is_filled_rest_outlined() {
        let mut canvas = Canvas::new(1200, 120, BG);
        let fonts = FontSet::builtin();
        let items = [
            ("All", true),
            ("Google", false),
            ("Meta", false),
            ("Shopify", false),
        ];
        pill_row(&mut canvas, &fonts.regular, 20, 20, &items, &test_row());

        // First pill interior carries the active fill
        assert_eq!(canvas.pixel(30, 45), PRIMARY);
        // Second pill starts at 20 + (3*24+50) + 16 = 158; its interior is
        // only outlined, so away from the border it keeps the background
        assert_eq!(canvas.pixel(230, 45), BG);
        // ... and its top border carries the outline color
        assert_eq!(canvas.pixel(230, 20), BORDER);
    }

    #[test]
    fn pill_row_advances_past_each_label() {
        let mut canvas = Canvas::new(2000, 100, BG);
        let fonts = FontSet::builtin();
        let end = pill_row(
            &mut canvas,
            &fonts.regular,
            80,
            10,
            &[("All", true), ("Meta", false)],
            &test_row(),
        );
        // 80 + (3*24+50) + 16 + (4*24+50) + 16
        assert_eq!(end, 380);
    }

    #[test]
    fn empty_message_bubble_has_min_height_and_no_text() {
        let mut canvas = Canvas::new(400, 200, BG);
        let fonts = FontSet::builtin();
        let fill = crate::theme::CARD;
        chat_bubble(&mut canvas, &fonts.regular, 40, 20, 300, fill, "");

        assert_eq!(bubble_height(""), MIN_BUBBLE_HEIGHT);
        // Interior is pure fill: no glyph pixels drawn anywhere inside
        for y in 25..95 {
            for x in 65..320 {
                assert_eq!(canvas.pixel(x, y), fill, "stray pixel at {x},{y}");
            }
        }
    }

    #[test]
    fn bubble_height_grows_with_text_length() {
        let short = bubble_height("hi");
        let long = bubble_height(&"word ".repeat(40));
        assert_eq!(short, MIN_BUBBLE_HEIGHT);
        assert!(long > short);
    }
}
