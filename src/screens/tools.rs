//! Tool catalog mockup: search bar, platform filter pills and a two-column
//! card grid with badges and stats.

use image::Rgba;

use super::widgets::{self, PillRow};
use crate::canvas::{Canvas, Gradient};
use crate::theme::{
    lighten, with_alpha, ACCENT, BORDER, CARD, GOLD, SECONDARY, SUCCESS, SURFACE, TEXT_SECONDARY,
    TEXT_TERTIARY, WHITE,
};
use crate::typeface::FontSet;

struct ToolCard {
    name: &'static str,
    category: &'static str,
    color: Rgba<u8>,
    is_new: bool,
    is_pro: bool,
    uses: &'static str,
    rating: &'static str,
}

const TOOL_GRID: [ToolCard; 8] = [
    ToolCard {
        name: "Google Ads Bid\nOptimization",
        category: "google-ads",
        color: SECONDARY,
        is_new: true,
        is_pro: false,
        uses: "15.2k",
        rating: "4.8",
    },
    ToolCard {
        name: "Facebook Ad\nCopy Generator",
        category: "facebook-ads",
        color: Rgba([24, 119, 242, 255]),
        is_new: false,
        is_pro: true,
        uses: "18.5k",
        rating: "4.9",
    },
    ToolCard {
        name: "Instagram Caption\nGenerator",
        category: "instagram",
        color: Rgba([228, 64, 95, 255]),
        is_new: true,
        is_pro: true,
        uses: "22k",
        rating: "4.9",
    },
    ToolCard {
        name: "SEO Keyword\nResearch",
        category: "google-seo",
        color: Rgba([52, 168, 83, 255]),
        is_new: false,
        is_pro: false,
        uses: "12.1k",
        rating: "4.7",
    },
    ToolCard {
        name: "Product Description\nWriter",
        category: "shopify",
        color: SUCCESS,
        is_new: true,
        is_pro: false,
        uses: "16.8k",
        rating: "4.8",
    },
    ToolCard {
        name: "Email Subject\nLine Generator",
        category: "email",
        color: Rgba([255, 107, 107, 255]),
        is_new: false,
        is_pro: true,
        uses: "13.5k",
        rating: "4.6",
    },
    ToolCard {
        name: "Blog Post\nWriter",
        category: "content",
        color: ACCENT,
        is_new: true,
        is_pro: false,
        uses: "14.2k",
        rating: "4.7",
    },
    ToolCard {
        name: "LinkedIn Ad\nCopy Generator",
        category: "linkedin",
        color: Rgba([0, 119, 181, 255]),
        is_new: false,
        is_pro: false,
        uses: "8.9k",
        rating: "4.5",
    },
];

pub(super) fn compose(canvas: &mut Canvas, fonts: &FontSet) {
    let w = canvas.width() as i32;

    widgets::status_bar(canvas, fonts);

    // Header
    canvas.text(&fonts.bold, 52.0, 80, 130, WHITE, "AI Marketing Tools");
    canvas.text(
        &fonts.regular,
        32.0,
        80,
        195,
        TEXT_SECONDARY,
        "206+ tools to grow your business",
    );

    // Search bar
    canvas.rounded_rect(80, 260, w - 80, 340, 16, SURFACE);
    canvas.outline_rounded_rect(80, 260, w - 80, 340, 16, 2, BORDER);
    canvas.text(&fonts.regular, 32.0, 130, 280, TEXT_TERTIARY, "Search tools...");

    // Platform filters
    let platforms = [
        ("All", true),
        ("Google", false),
        ("Meta", false),
        ("Shopify", false),
        ("Content", false),
    ];
    widgets::pill_row(
        canvas,
        &fonts.regular,
        80,
        370,
        &platforms,
        &PillRow {
            height: 50,
            radius: 20,
            char_width: 24,
            padding: 50,
            gap: 16,
            text_size: 26.0,
            text_dx: 25,
            text_dy: 8,
        },
    );

    // Tool cards, two columns
    let col_w = (w - 80 * 2 - 30) / 2;
    for (i, tool) in TOOL_GRID.iter().enumerate() {
        let col = (i % 2) as i32;
        let row = (i / 2) as i32;
        let x = 80 + col * (col_w + 30);
        let y = 460 + row * 480;

        canvas.rounded_rect(x, y, x + col_w, y + 450, 20, CARD);
        canvas.outline_rounded_rect(x, y, x + col_w, y + 450, 20, 1, BORDER);

        // Icon area
        canvas.rounded_rect(x + 30, y + 30, x + 100, y + 100, 14, with_alpha(tool.color, 40));

        // Badges
        let mut badge_x = x + 120;
        if tool.is_new {
            canvas.rounded_rect(badge_x, y + 35, badge_x + 70, y + 62, 6, SUCCESS);
            canvas.text(&fonts.bold, 22.0, badge_x + 8, y + 38, WHITE, "NEW");
            badge_x += 80;
        }
        if tool.is_pro {
            canvas.rounded_rect(badge_x, y + 35, badge_x + 65, y + 62, 6, ACCENT);
            canvas.text(&fonts.bold, 22.0, badge_x + 8, y + 38, WHITE, "PRO");
        }

        // Name, one draw call per line
        for (j, line) in tool.name.split('\n').enumerate() {
            canvas.text(&fonts.bold, 36.0, x + 30, y + 120 + j as i32 * 42, WHITE, line);
        }

        canvas.text(
            &fonts.regular,
            26.0,
            x + 30,
            y + 240,
            TEXT_SECONDARY,
            &title_case(tool.category),
        );

        // Stats row
        canvas.text(
            &fonts.regular,
            26.0,
            x + 30,
            y + 300,
            TEXT_SECONDARY,
            &format!("{} uses", tool.uses),
        );
        canvas.text(
            &fonts.regular,
            26.0,
            x + 30,
            y + 340,
            GOLD,
            &format!("* {}", tool.rating),
        );

        // Status dot
        canvas.ellipse(x + col_w - 60, y + 350, x + col_w - 40, y + 370, SUCCESS);

        // Bottom accent strip
        canvas.gradient_rect(
            x + 2,
            y + 430,
            x + col_w - 2,
            y + 448,
            tool.color,
            lighten(tool.color, 40),
            Gradient::Vertical,
        );
    }

    widgets::tab_bar(canvas, fonts, 1);
}

/// "google-ads" -> "Google Ads"
fn title_case(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
