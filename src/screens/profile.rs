//! Profile mockup: hero header with centered avatar, usage stats and grouped
//! settings menus.

use image::Rgba;

use super::widgets;
use crate::canvas::{Canvas, Gradient};
use crate::theme::{
    with_alpha, BG, BORDER, CARD, DANGER, GOLD, PRIMARY, SECONDARY, SURFACE, TEXT_SECONDARY,
    TEXT_TERTIARY, WHITE,
};
use crate::typeface::FontSet;

const MENU_SECTIONS: [(&str, &[&str]); 3] = [
    (
        "ACCOUNT",
        &[
            "Edit Profile",
            "Email Preferences",
            "Change Password",
            "Privacy & Security",
        ],
    ),
    ("SUBSCRIPTION", &["Manage Plan", "Payment Methods", "Billing History"]),
    ("APP", &["Settings", "Notifications", "Appearance"]),
];

pub(super) fn compose(canvas: &mut Canvas, fonts: &FontSet) {
    let w = canvas.width() as i32;

    widgets::status_bar(canvas, fonts);

    // Hero background
    canvas.gradient_rect(0, 100, w, 380, Rgba([40, 30, 70, 255]), BG, Gradient::Vertical);

    canvas.text(&fonts.bold, 48.0, 80, 130, WHITE, "Profile");
    canvas.ellipse(w - 150, 120, w - 80, 190, SURFACE);

    // Avatar with camera badge
    let cx = w / 2;
    canvas.ellipse(cx - 80, 300, cx + 80, 460, PRIMARY);
    canvas.text(&fonts.bold, 56.0, cx - 40, 340, WHITE, "LS");
    canvas.ellipse(cx + 40, 420, cx + 80, 460, SECONDARY);

    // Name + email
    canvas.text(&fonts.bold, 48.0, cx - 200, 480, WHITE, "Lokendra Singh");
    canvas.text_centered(
        &fonts.regular,
        26.0,
        cx,
        540,
        TEXT_SECONDARY,
        "help@marketingtool.pro",
    );

    // Subscription badge
    canvas.rounded_rect(cx - 100, 580, cx + 100, 620, 20, Rgba([61, 41, 20, 255]));
    canvas.text(&fonts.regular, 26.0, cx - 70, 588, GOLD, "Pro Member");

    // Stats card
    canvas.rounded_rect(80, 660, w - 80, 800, 20, CARD);
    let stats = [("48", "Generations"), ("48", "Saved"), ("12", "Tools Used")];
    let stat_w = (w - 160) / 3;
    for (i, (value, label)) in stats.iter().enumerate() {
        let x = 80 + i as i32 * stat_w + stat_w / 2;
        canvas.rounded_rect(x - 30, 690, x + 30, 730, 10, with_alpha(SECONDARY, 25));
        canvas.text(&fonts.bold, 36.0, x - 20, 740, WHITE, value);
        canvas.text(&fonts.regular, 26.0, x - 50, 775, TEXT_SECONDARY, label);
    }

    // Menu sections
    let mut y = 840;
    for (title, items) in MENU_SECTIONS {
        canvas.text(&fonts.bold, 22.0, 80, y, TEXT_TERTIARY, title);
        y += 40;
        let card_h = items.len() as i32 * 80;
        canvas.rounded_rect(80, y, w - 80, y + card_h, 16, CARD);
        for (i, item) in items.iter().enumerate() {
            let iy = y + i as i32 * 80;
            canvas.rounded_rect(110, iy + 15, 160, iy + 65, 10, with_alpha(SECONDARY, 25));
            canvas.text(&fonts.regular, 32.0, 180, iy + 25, WHITE, item);
            canvas.text(&fonts.bold, 36.0, w - 130, iy + 30, TEXT_TERTIARY, ">");
            if i < items.len() - 1 {
                canvas.line(110, iy + 80, w - 110, iy + 80, BORDER, 1);
            }
        }
        y += card_h + 30;
    }

    // Logout
    canvas.rounded_rect(80, y, w - 80, y + 70, 14, with_alpha(DANGER, 25));
    canvas.text(&fonts.bold, 36.0, w / 2 - 60, y + 18, DANGER, "Logout");

    canvas.text(
        &fonts.regular,
        26.0,
        w / 2 - 120,
        y + 100,
        TEXT_TERTIARY,
        "MarketingTool v1.1.0",
    );

    widgets::tab_bar(canvas, fonts, 4);
}
