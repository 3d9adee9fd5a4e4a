//! AI chat mockup: alternating assistant/user bubbles over a fixed
//! transcript, plus the message input bar.

use super::widgets;
use crate::canvas::Canvas;
use crate::theme::{CARD, PRIMARY, SURFACE, TEXT_TERTIARY, WHITE};
use crate::typeface::FontSet;

enum Role {
    Bot,
    User,
}

/// Fixed transcript; the y coordinates are hand-tuned to the bubble sizes.
const MESSAGES: [(&str, i32); 5] = [
    (
        "Hi! I'm your AI Marketing Assistant. I can help you create ads, optimize campaigns, \
         write content, and more. What would you like to work on today?",
        280,
    ),
    (
        "I need help creating a Facebook ad campaign for my new running shoes. Target audience: \
         fitness enthusiasts aged 25-45.",
        620,
    ),
    (
        "Great choice! Here's a strategy for your running shoes Facebook campaign:\n\n\
         1. Campaign Objective: Conversions\n2. Audience: Fitness enthusiasts, 25-45\n\
         3. Placements: FB Feed + Instagram\n4. Budget: Start with $50/day\n\n\
         Want me to generate the ad copy?",
        900,
    ),
    ("Yes, please generate 3 variations of ad copy.", 1380),
    (
        "Here are 3 ad copy variations:\n\nVariation 1:\n\"Run further. Run faster. Our new \
         [Brand] runners are engineered for peak performance. 30-day comfort guarantee.\"\n\n\
         Variation 2:\n\"Your next PR starts here. Lightweight, responsive, unstoppable. Try \
         risk-free for 30 days.\"\n\nVariation 3:\n\"Built for runners who demand more. Advanced \
         cushioning meets race-day speed. Shop now - free shipping!\"",
        1560,
    ),
];

fn role_of(index: usize) -> Role {
    if index % 2 == 0 {
        Role::Bot
    } else {
        Role::User
    }
}

pub(super) fn compose(canvas: &mut Canvas, fonts: &FontSet) {
    let w = canvas.width() as i32;
    let h = canvas.height() as i32;

    widgets::status_bar(canvas, fonts);

    canvas.text(&fonts.bold, 52.0, 80, 130, WHITE, "AI Marketing Assistant");

    let max_w = w - 260;
    for (index, (text, y)) in MESSAGES.iter().enumerate() {
        match role_of(index) {
            Role::Bot => {
                canvas.ellipse(80, *y, 140, y + 60, PRIMARY);
                canvas.text(&fonts.bold, 24.0, 98, y + 10, WHITE, "AI");
                widgets::chat_bubble(canvas, &fonts.regular, 160, *y, max_w, CARD, text);
            }
            Role::User => {
                // Right-aligned; width scales with message length up to the cap
                let msg_w = max_w.min(text.chars().count() as i32 * 14 + 40);
                let x = w - 80 - msg_w;
                widgets::chat_bubble(canvas, &fonts.regular, x, *y, msg_w, PRIMARY, text);
            }
        }
    }

    // Input bar
    let y_input = h - 240;
    canvas.rounded_rect(80, y_input, w - 80, y_input + 90, 24, SURFACE);
    canvas.outline_rounded_rect(80, y_input, w - 80, y_input + 90, 24, 2, PRIMARY);
    canvas.text(
        &fonts.regular,
        32.0,
        130,
        y_input + 25,
        TEXT_TERTIARY,
        "Ask me anything about marketing...",
    );
    canvas.ellipse(w - 160, y_input + 10, w - 100, y_input + 70, PRIMARY);

    widgets::tab_bar(canvas, fonts, 2);
}
