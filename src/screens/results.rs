//! Generation results mockup: option tabs, the highlighted output card,
//! stats, tips and the bottom action pair.

use image::Rgba;

use super::widgets;
use crate::canvas::{Canvas, Gradient};
use crate::theme::{
    with_alpha, ACCENT, BG, BORDER, CARD, PRIMARY, SECONDARY, SUCCESS, SURFACE, TEXT_SECONDARY,
    WHITE,
};
use crate::typeface::FontSet;

/// The rendered ad copy, one entry per visual line. Empty entries advance
/// the cursor without drawing.
const AD_COPY: [&str; 23] = [
    "Run Further. Run Faster.",
    "",
    "Introducing the all-new Nike Air Max Running",
    "Shoes - engineered for peak performance.",
    "",
    "Whether you're training for your next marathon",
    "or crushing your daily miles, these shoes deliver:",
    "",
    "   Lightweight design that moves with you",
    "   Responsive cushioning for every stride",
    "   Breathable mesh keeps you cool",
    "   Built to last, mile after mile",
    "",
    "Join 50,000+ runners who've already made",
    "the switch.",
    "",
    "Shop now and get FREE shipping on orders",
    "over $100. Plus our 30-day comfort guarantee",
    "means you can try them risk-free.",
    "",
    "Your next personal best starts here.",
    "",
    "Shop Now  ->  nike.com/airmax",
];

pub(super) fn compose(canvas: &mut Canvas, fonts: &FontSet) {
    let w = canvas.width() as i32;
    let h = canvas.height() as i32;

    widgets::status_bar(canvas, fonts);

    // Header
    canvas.gradient_rect(0, 100, w, 380, Rgba([30, 25, 60, 255]), BG, Gradient::Vertical);
    canvas.ellipse(80, 130, 150, 200, SURFACE);
    canvas.text(&fonts.bold, 36.0, 104, 148, WHITE, "<");
    canvas.text(&fonts.bold, 40.0, w / 2 - 80, 148, WHITE, "Results");

    // Tool info
    canvas.rounded_rect(80, 240, 160, 310, 14, with_alpha(SECONDARY, 40));
    canvas.text(&fonts.bold, 36.0, 180, 245, WHITE, "Facebook Ad Copy");
    canvas.text(&fonts.regular, 26.0, 180, 290, TEXT_SECONDARY, "3 outputs generated");

    // Output tabs
    let tabs = [("Option 1", true), ("Option 2", false), ("Option 3", false)];
    let mut tx = 80;
    for (tab, active) in tabs {
        let tw = 200;
        if active {
            canvas.rounded_rect(tx, 350, tx + tw, 400, 20, PRIMARY);
            canvas.text(&fonts.regular, 26.0, tx + 40, 360, WHITE, tab);
        } else {
            canvas.rounded_rect(tx, 350, tx + tw, 400, 20, SURFACE);
            canvas.text(&fonts.regular, 26.0, tx + 40, 360, TEXT_SECONDARY, tab);
        }
        tx += tw + 16;
    }

    // Output card
    canvas.rounded_rect(80, 430, w - 80, 1350, 20, CARD);
    canvas.outline_rounded_rect(80, 430, w - 80, 1350, 20, 3, PRIMARY);

    let mut y = 460;
    for line in AD_COPY {
        if line.starts_with("Run Further")
            || line.starts_with("Your next")
            || line.starts_with("Shop Now")
        {
            canvas.text(&fonts.bold, 30.0, 120, y, WHITE, line);
        } else if line.starts_with("   ") {
            canvas.text(&fonts.regular, 26.0, 120, y, SUCCESS, line);
        } else if !line.is_empty() {
            canvas.text(&fonts.regular, 26.0, 120, y, WHITE, line);
        }
        y += 34;
    }

    // Action row inside the card
    let y_actions = 1260;
    canvas.line(120, y_actions, w - 120, y_actions, BORDER, 1);
    let actions = [
        ("Copy", TEXT_SECONDARY),
        ("Share", TEXT_SECONDARY),
        ("Like", TEXT_SECONDARY),
        ("Saved", SUCCESS),
    ];
    let action_w = (w - 160) / 4;
    for (i, (name, color)) in actions.iter().enumerate() {
        let x = 80 + i as i32 * action_w;
        canvas.text(&fonts.regular, 26.0, x + 30, y_actions + 20, *color, name);
    }

    // Stats card
    canvas.rounded_rect(80, 1390, w - 80, 1600, 20, CARD);
    let stats = [("Words", "156"), ("Characters", "892"), ("Reading Time", "1 min")];
    for (i, (label, value)) in stats.iter().enumerate() {
        let y = 1410 + i as i32 * 65;
        canvas.text(&fonts.regular, 26.0, 120, y, TEXT_SECONDARY, label);
        canvas.text(&fonts.bold, 36.0, w - 200, y, WHITE, value);
        if i < stats.len() - 1 {
            canvas.line(120, y + 55, w - 120, y + 55, BORDER, 1);
        }
    }

    // Tips card
    canvas.rounded_rect(80, 1640, w - 80, 1850, 20, with_alpha(PRIMARY, 25));
    canvas.text(&fonts.bold, 36.0, 120, 1670, WHITE, "Tips for Better Results");
    let tips = [
        "Be specific with your input details",
        "Try different tones for variety",
        "Use keywords relevant to your audience",
    ];
    for (i, tip) in tips.iter().enumerate() {
        canvas.text(
            &fonts.regular,
            26.0,
            120,
            1720 + i as i32 * 40,
            TEXT_SECONDARY,
            &format!("  {tip}"),
        );
    }

    // Bottom actions
    let y_btn = h - 180;
    canvas.fill_rect(0, y_btn - 20, w, h, BG);
    canvas.line(0, y_btn - 20, w, y_btn - 20, BORDER, 2);

    canvas.outline_rounded_rect(80, y_btn, w / 2 - 20, y_btn + 80, 14, 3, PRIMARY);
    canvas.text(&fonts.bold, 36.0, w / 4 - 120, y_btn + 18, PRIMARY, "Regenerate");

    canvas.gradient_rect(w / 2 + 20, y_btn, w - 80, y_btn + 80, PRIMARY, ACCENT, Gradient::Vertical);
    canvas.text(&fonts.bold, 36.0, w * 3 / 4 - 150, y_btn + 18, WHITE, "New Generation");
}
