//! Dark-theme palette shared by every screen.
//!
//! The values mirror the app's design system; all screens read these
//! constants and never mutate them.

use image::Rgba;

/// Screen background
pub const BG: Rgba<u8> = Rgba([13, 15, 28, 255]);
/// Card background
pub const CARD: Rgba<u8> = Rgba([22, 24, 40, 255]);
/// Raised surface (inputs, search bars)
pub const SURFACE: Rgba<u8> = Rgba([30, 32, 50, 255]);
/// Primary brand purple
pub const PRIMARY: Rgba<u8> = Rgba([108, 92, 231, 255]);
/// Secondary orange, used for CTAs
pub const SECONDARY: Rgba<u8> = Rgba([247, 84, 30, 255]);
/// Magenta accent
pub const ACCENT: Rgba<u8> = Rgba([175, 21, 195, 255]);
/// Gold, used for Pro/upgrade affordances
pub const GOLD: Rgba<u8> = Rgba([253, 151, 7, 255]);
/// Success green
pub const SUCCESS: Rgba<u8> = Rgba([34, 197, 94, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
/// Secondary text
pub const TEXT_SECONDARY: Rgba<u8> = Rgba([156, 163, 175, 255]);
/// Tertiary text (hints, placeholders)
pub const TEXT_TERTIARY: Rgba<u8> = Rgba([107, 114, 128, 255]);
/// Hairline borders and separators
pub const BORDER: Rgba<u8> = Rgba([45, 48, 65, 255]);

/// Tab bar background, slightly darker than cards
pub const TAB_BAR: Rgba<u8> = Rgba([18, 20, 35, 255]);
/// Logout red
pub const DANGER: Rgba<u8> = Rgba([220, 38, 38, 255]);

/// Replace a color's alpha, keeping its channels.
pub const fn with_alpha(color: Rgba<u8>, alpha: u8) -> Rgba<u8> {
    Rgba([color.0[0], color.0[1], color.0[2], alpha])
}

/// Subtract `amount` from each channel, clamping at zero.
pub fn darken(color: Rgba<u8>, amount: u8) -> Rgba<u8> {
    let [r, g, b, a] = color.0;
    Rgba([
        r.saturating_sub(amount),
        g.saturating_sub(amount),
        b.saturating_sub(amount),
        a,
    ])
}

/// Add `amount` to each channel, clamping at 255.
pub fn lighten(color: Rgba<u8>, amount: u8) -> Rgba<u8> {
    let [r, g, b, a] = color.0;
    Rgba([
        r.saturating_add(amount),
        g.saturating_add(amount),
        b.saturating_add(amount),
        a,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_alpha_keeps_channels() {
        let c = with_alpha(PRIMARY, 40);
        assert_eq!(c.0[..3], PRIMARY.0[..3]);
        assert_eq!(c.0[3], 40);
    }

    #[test]
    fn darken_and_lighten_clamp() {
        assert_eq!(darken(Rgba([10, 200, 0, 255]), 60).0, [0, 140, 0, 255]);
        assert_eq!(lighten(Rgba([250, 10, 0, 255]), 40).0, [255, 50, 40, 255]);
    }
}
