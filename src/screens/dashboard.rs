//! Home / dashboard mockup: greeting header, hero banner, stats grid, quick
//! actions, category tiles and the popular-tools list.

use image::Rgba;

use super::widgets;
use crate::canvas::{Canvas, Gradient};
use crate::theme::{
    darken, with_alpha, ACCENT, BORDER, CARD, GOLD, PRIMARY, SECONDARY, SUCCESS, SURFACE,
    TEXT_SECONDARY, TEXT_TERTIARY, WHITE,
};
use crate::typeface::FontSet;

pub(super) fn compose(canvas: &mut Canvas, fonts: &FontSet) {
    let w = canvas.width() as i32;

    widgets::status_bar(canvas, fonts);

    // Avatar + greeting
    canvas.ellipse(80, 130, 180, 230, PRIMARY);
    canvas.text(&fonts.bold, 48.0, 110, 150, WHITE, "L");
    canvas.text(&fonts.bold, 52.0, 210, 140, WHITE, "Hi, Lokendra");
    canvas.text(&fonts.regular, 32.0, 210, 200, TEXT_SECONDARY, "Welcome back");

    // Notification bell
    canvas.ellipse(w - 160, 140, w - 80, 220, SURFACE);
    canvas.ellipse(w - 108, 148, w - 100, 156, SECONDARY);

    // Hero banner
    canvas.gradient_rect(
        80,
        280,
        w - 80,
        560,
        Rgba([40, 30, 80, 255]),
        Rgba([20, 15, 45, 255]),
        Gradient::Vertical,
    );
    canvas.rounded_rect(w - 260, 300, w - 140, 340, 12, with_alpha(SUCCESS, 50));
    canvas.text(&fonts.bold, 22.0, w - 248, 305, SUCCESS, "LIVE");
    canvas.text(&fonts.bold, 48.0, 120, 420, WHITE, "AI Marketing Assistant");
    canvas.text(
        &fonts.regular,
        26.0,
        120,
        480,
        TEXT_SECONDARY,
        "Create ads, blogs, emails & more with 206+ AI tools",
    );
    canvas.rounded_rect(120, 520, 380, 555, 12, SECONDARY);
    canvas.text(&fonts.bold, 22.0, 140, 524, WHITE, "Start Creating  ->");

    // Upgrade banner
    canvas.gradient_rect(
        80,
        600,
        w - 80,
        700,
        Rgba([61, 41, 20, 255]),
        Rgba([22, 19, 43, 255]),
        Gradient::Vertical,
    );
    canvas.text(&fonts.bold, 36.0, 160, 630, GOLD, "Upgrade to Pro");
    canvas.text(
        &fonts.regular,
        26.0,
        160,
        670,
        TEXT_SECONDARY,
        "Unlock all AI tools & features",
    );

    // Stats grid
    let stats = [
        ("206+", "AI Tools", SECONDARY, "+12 new"),
        ("48", "Generated", SUCCESS, "Active"),
        ("12", "Campaigns", ACCENT, "12 tools"),
        ("48", "Saved", GOLD, "Saved"),
    ];
    let card_w = (w - 80 * 2 - 30 * 3) / 4;
    for (i, (value, label, color, badge)) in stats.iter().enumerate() {
        let x = 80 + i as i32 * (card_w + 30);
        canvas.rounded_rect(x, 740, x + card_w, 940, 16, CARD);
        canvas.ellipse(
            x + card_w / 2 - 30,
            760,
            x + card_w / 2 + 30,
            820,
            with_alpha(*color, 40),
        );
        canvas.text(&fonts.bold, 40.0, x + card_w / 2 - 30, 830, WHITE, value);
        canvas.text(&fonts.regular, 26.0, x + 20, 880, TEXT_SECONDARY, label);
        canvas.rounded_rect(x + 20, 910, x + card_w - 20, 932, 8, with_alpha(*color, 30));
        canvas.text(&fonts.bold, 18.0, x + 30, 912, *color, badge);
    }

    // Quick actions
    canvas.text(&fonts.bold, 36.0, 80, 980, WHITE, "Quick Actions");
    let actions = [
        ("AI Chat", ACCENT),
        ("Meme Gen", SECONDARY),
        ("All Tools", SUCCESS),
        ("Reports", GOLD),
    ];
    let action_w = (w - 160 - 90) / 4;
    for (i, (name, color)) in actions.iter().enumerate() {
        let x = 80 + i as i32 * (action_w + 30);
        canvas.rounded_rect(x, 1040, x + action_w, 1130, 16, with_alpha(*color, 25));
        canvas.text(&fonts.regular, 26.0, x + 20, 1070, TEXT_SECONDARY, name);
    }

    // Category tiles
    canvas.text(&fonts.bold, 36.0, 80, 1180, WHITE, "Categories");
    canvas.text(&fonts.regular, 26.0, w - 200, 1185, SECONDARY, "See all");
    let categories = [
        ("Google Ads", Rgba([66, 133, 244, 255]), "56 tools"),
        ("Facebook", Rgba([24, 119, 242, 255]), "61 tools"),
        ("Instagram", Rgba([228, 64, 95, 255]), "10 tools"),
        ("Content", Rgba([124, 58, 237, 255]), "22 tools"),
    ];
    let cat_w = 320;
    for (i, (name, color, count)) in categories.iter().enumerate() {
        let x = 80 + i as i32 * (cat_w + 20);
        canvas.gradient_rect(
            x,
            1240,
            x + cat_w,
            1520,
            *color,
            darken(*color, 60),
            Gradient::Vertical,
        );
        canvas.outline_rounded_rect(x, 1240, x + cat_w, 1520, 24, 2, with_alpha(*color, 80));
        canvas.text(&fonts.bold, 36.0, x + 24, 1430, WHITE, name);
        canvas.rounded_rect(x + 24, 1475, x + 160, 1505, 12, Rgba([255, 255, 255, 40]));
        canvas.text(&fonts.regular, 26.0, x + 34, 1478, WHITE, count);
    }

    // Popular tools list
    canvas.text(&fonts.bold, 36.0, 80, 1560, WHITE, "Popular Tools");
    canvas.text(&fonts.regular, 26.0, w - 200, 1565, SECONDARY, "See all");
    let tools = [
        ("Instagram Caption", "22k uses"),
        ("Facebook Ad Copy", "18.5k uses"),
        ("Product Description", "16.8k uses"),
        ("Instagram Reels Script", "15.6k uses"),
        ("Google Ads Headline", "15.2k uses"),
        ("Meme Generator", "28.5k uses"),
    ];
    canvas.rounded_rect(80, 1620, w - 80, 2420, 20, CARD);
    for (i, (name, uses)) in tools.iter().enumerate() {
        let y = 1640 + i as i32 * 130;
        canvas.rounded_rect(120, y + 10, 180, y + 70, 10, with_alpha(SECONDARY, 25));
        canvas.text(&fonts.regular, 32.0, 210, y + 12, WHITE, name);
        canvas.text(&fonts.regular, 26.0, 210, y + 50, TEXT_SECONDARY, uses);
        // Trending badge sits just past the uses label
        let badge_x = 210 + uses.chars().count() as i32 * 14;
        canvas.rounded_rect(badge_x, y + 50, badge_x + 30, y + 74, 4, with_alpha(SUCCESS, 30));
        canvas.text(&fonts.bold, 36.0, w - 160, y + 30, TEXT_TERTIARY, ">");
        if i < tools.len() - 1 {
            canvas.line(120, y + 110, w - 120, y + 110, BORDER, 1);
        }
    }

    widgets::tab_bar(canvas, fonts, 0);
}
