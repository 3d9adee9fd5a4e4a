//! Tool detail mockup: gradient header with tool info, generation input
//! fields, tone/language/output selectors and the sticky generate button.

use image::Rgba;

use super::widgets::{self, PillRow};
use crate::canvas::{Canvas, Gradient};
use crate::theme::{
    with_alpha, ACCENT, BG, BORDER, PRIMARY, SECONDARY, SUCCESS, SURFACE, TEXT_SECONDARY, WHITE,
};
use crate::typeface::FontSet;

/// Selector pills shared by the tone and language rows.
const SELECTOR_PILLS: PillRow = PillRow {
    height: 56,
    radius: 28,
    char_width: 22,
    padding: 40,
    gap: 16,
    text_size: 26.0,
    text_dx: 20,
    text_dy: 12,
};

pub(super) fn compose(canvas: &mut Canvas, fonts: &FontSet) {
    let w = canvas.width() as i32;
    let h = canvas.height() as i32;

    widgets::status_bar(canvas, fonts);

    // Header gradient fades into the page background
    canvas.gradient_rect(0, 100, w, 500, Rgba([30, 25, 60, 255]), BG, Gradient::Vertical);

    // Back button
    canvas.ellipse(80, 130, 150, 200, SURFACE);
    canvas.text(&fonts.bold, 36.0, 104, 148, WHITE, "<");

    // Tool info
    canvas.rounded_rect(80, 230, 170, 320, 18, with_alpha(SECONDARY, 40));
    canvas.text(&fonts.bold, 48.0, 100, 250, SECONDARY, "Fb");

    canvas.rounded_rect(200, 235, 270, 262, 6, SUCCESS);
    canvas.text(&fonts.bold, 22.0, 208, 238, WHITE, "NEW");
    canvas.rounded_rect(280, 235, 345, 262, 6, ACCENT);
    canvas.text(&fonts.bold, 22.0, 288, 238, WHITE, "PRO");

    canvas.text(&fonts.bold, 48.0, 200, 270, WHITE, "Facebook Ad Copy");
    for (j, line) in ["Generate high-converting Facebook", "ad copy with AI"]
        .iter()
        .enumerate()
    {
        canvas.text(
            &fonts.regular,
            26.0,
            200,
            325 + j as i32 * 34,
            TEXT_SECONDARY,
            line,
        );
    }

    // Stats row
    let mut x = 80;
    for stat in ["18.5k uses", "4.9 rating", "~10 sec"] {
        canvas.text(&fonts.regular, 26.0, x + 30, 420, TEXT_SECONDARY, stat);
        x += 320;
    }

    let mut y = 520;

    // Product / service name field
    canvas.text(&fonts.bold, 36.0, 80, y, WHITE, "Product / Service Name *");
    y += 50;
    input_field(canvas, fonts, y, 80, "Nike Air Max Running Shoes");
    y += 120;

    // Target audience field
    canvas.text(&fonts.bold, 36.0, 80, y, WHITE, "Target Audience *");
    y += 50;
    input_field(canvas, fonts, y, 80, "Fitness enthusiasts, runners, 25-45");
    y += 120;

    // Key benefits, three fixed lines in a taller box
    canvas.text(&fonts.bold, 36.0, 80, y, WHITE, "Key Benefits / Features");
    y += 50;
    canvas.rounded_rect(80, y, w - 80, y + 160, 14, SURFACE);
    canvas.outline_rounded_rect(80, y, w - 80, y + 160, 14, 2, BORDER);
    let benefits = [
        "Lightweight, responsive cushioning,",
        "breathable mesh, 30-day guarantee,",
        "free shipping on orders over $100",
    ];
    for (j, line) in benefits.iter().enumerate() {
        canvas.text(&fonts.regular, 32.0, 110, y + 20 + j as i32 * 38, WHITE, line);
    }
    y += 200;

    // Tone selection
    canvas.text(&fonts.bold, 36.0, 80, y, WHITE, "Tone");
    y += 50;
    let tones = [
        ("Professional", true),
        ("Casual", false),
        ("Friendly", false),
        ("Persuasive", false),
        ("Creative", false),
    ];
    widgets::pill_row(canvas, &fonts.regular, 80, y, &tones, &SELECTOR_PILLS);
    y += 90;

    // Language selection
    canvas.text(&fonts.bold, 36.0, 80, y, WHITE, "Language");
    y += 50;
    let languages = [
        ("English", true),
        ("Spanish", false),
        ("French", false),
        ("Hindi", false),
    ];
    widgets::pill_row(canvas, &fonts.regular, 80, y, &languages, &SELECTOR_PILLS);
    y += 90;

    // Output count
    canvas.text(&fonts.bold, 36.0, 80, y, WHITE, "Number of Outputs");
    y += 50;
    for (i, count) in ["1", "3", "5"].iter().enumerate() {
        let x = 80 + i as i32 * 120;
        if *count == "3" {
            canvas.rounded_rect(x, y, x + 90, y + 60, 14, PRIMARY);
            canvas.text(&fonts.bold, 36.0, x + 35, y + 14, WHITE, count);
        } else {
            canvas.outline_rounded_rect(x, y, x + 90, y + 60, 14, 2, BORDER);
            canvas.text(&fonts.bold, 36.0, x + 35, y + 14, TEXT_SECONDARY, count);
        }
    }

    // Sticky generate button
    let y_btn = h - 180;
    canvas.fill_rect(0, y_btn - 20, w, h, BG);
    canvas.line(0, y_btn - 20, w, y_btn - 20, BORDER, 2);
    canvas.gradient_rect(80, y_btn, w - 80, y_btn + 80, PRIMARY, ACCENT, Gradient::Vertical);
    canvas.text(&fonts.bold, 48.0, w / 2 - 200, y_btn + 18, WHITE, "Generate Content");
}

/// Single-line labeled input box.
fn input_field(canvas: &mut Canvas, fonts: &FontSet, y: i32, x: i32, value: &str) {
    let w = canvas.width() as i32;
    canvas.rounded_rect(x, y, w - 80, y + 80, 14, SURFACE);
    canvas.outline_rounded_rect(x, y, w - 80, y + 80, 14, 2, BORDER);
    canvas.text(&fonts.regular, 32.0, x + 30, y + 20, WHITE, value);
}
