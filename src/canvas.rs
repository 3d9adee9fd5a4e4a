//! The drawing surface and its primitive operations.
//!
//! A `Canvas` owns one RGBA pixel buffer for the lifetime of a single screen
//! composition and exposes the primitive set the composers are written
//! against: solid and rounded rectangles, outlines, ellipses, axis-aligned
//! lines, linear gradient fills and text placement. Draw colors carry an
//! alpha channel and are blended over existing pixels; the buffer is
//! flattened to RGB when encoded, so the output PNGs have no transparency.
//!
//! Coordinates follow the convention of the layout constants: rectangles are
//! given as corner pairs `(x1, y1, x2, y2)` with both corners inclusive.
//! Out-of-range coordinates clip silently; a malformed rectangle (negative
//! extent) draws nothing.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_line_segment_mut, Blend, Canvas as _};
use imageproc::rect::Rect;

use crate::error::Result;
use crate::typeface::Typeface;

/// Direction of a linear gradient fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gradient {
    /// Top-to-bottom transition
    Vertical,
    /// Left-to-right transition
    Horizontal,
}

/// An in-memory pixel buffer targeted by drawing operations.
pub struct Canvas {
    buf: Blend<RgbaImage>,
}

impl Canvas {
    /// Allocate a canvas filled with a background color.
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        let background = Rgba([background.0[0], background.0[1], background.0[2], 255]);
        Self {
            buf: Blend(RgbaImage::from_pixel(width, height, background)),
        }
    }

    pub fn width(&self) -> u32 {
        self.buf.0.width()
    }

    pub fn height(&self) -> u32 {
        self.buf.0.height()
    }

    /// Read back a pixel. Panics when out of range; only used by tests and
    /// internal invariant checks.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.buf.0.get_pixel(x, y)
    }

    /// Fill a rectangle, blending by the color's alpha.
    pub fn fill_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgba<u8>) {
        if x2 < x1 || y2 < y1 {
            return;
        }
        let rect = Rect::at(x1, y1).of_size((x2 - x1 + 1) as u32, (y2 - y1 + 1) as u32);
        draw_filled_rect_mut(&mut self.buf, rect, color);
    }

    /// Fill a rounded rectangle. Every covered pixel is touched exactly once
    /// so translucent fills show no seams.
    pub fn rounded_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, radius: i32, color: Rgba<u8>) {
        if x2 < x1 || y2 < y1 {
            return;
        }
        let radius = radius.min((x2 - x1 + 1) / 2).min((y2 - y1 + 1) / 2).max(0);
        let (width, height) = self.buf.dimensions();
        for y in y1.max(0)..=y2.min(height as i32 - 1) {
            for x in x1.max(0)..=x2.min(width as i32 - 1) {
                if in_rounded_rect(x, y, x1, y1, x2, y2, radius) {
                    self.buf.draw_pixel(x as u32, y as u32, color);
                }
            }
        }
    }

    /// Stroke the border of a rounded rectangle with the given width.
    pub fn outline_rounded_rect(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        radius: i32,
        stroke: i32,
        color: Rgba<u8>,
    ) {
        if x2 < x1 || y2 < y1 || stroke <= 0 {
            return;
        }
        let radius = radius.min((x2 - x1 + 1) / 2).min((y2 - y1 + 1) / 2).max(0);
        let inner_radius = (radius - stroke).max(0);
        let (width, height) = self.buf.dimensions();
        for y in y1.max(0)..=y2.min(height as i32 - 1) {
            for x in x1.max(0)..=x2.min(width as i32 - 1) {
                let outer = in_rounded_rect(x, y, x1, y1, x2, y2, radius);
                let inner = in_rounded_rect(
                    x,
                    y,
                    x1 + stroke,
                    y1 + stroke,
                    x2 - stroke,
                    y2 - stroke,
                    inner_radius,
                );
                if outer && !inner {
                    self.buf.draw_pixel(x as u32, y as u32, color);
                }
            }
        }
    }

    /// Fill the ellipse inscribed in the bounding box `(x1, y1, x2, y2)`.
    pub fn ellipse(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgba<u8>) {
        if x2 < x1 || y2 < y1 {
            return;
        }
        let cx = (x1 + x2) as f32 / 2.0;
        let cy = (y1 + y2) as f32 / 2.0;
        let rx = (x2 - x1) as f32 / 2.0;
        let ry = (y2 - y1) as f32 / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let (width, height) = self.buf.dimensions();
        for y in y1.max(0)..=y2.min(height as i32 - 1) {
            for x in x1.max(0)..=x2.min(width as i32 - 1) {
                let nx = (x as f32 - cx) / rx;
                let ny = (y as f32 - cy) / ry;
                if nx * nx + ny * ny <= 1.0 {
                    self.buf.draw_pixel(x as u32, y as u32, color);
                }
            }
        }
    }

    /// Draw a line of the given stroke width. Axis-aligned lines become
    /// rectangles; anything else falls back to repeated one-pixel segments.
    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgba<u8>, stroke: i32) {
        if stroke <= 0 {
            return;
        }
        if y1 == y2 {
            self.fill_rect(x1.min(x2), y1, x1.max(x2), y1 + stroke - 1, color);
        } else if x1 == x2 {
            self.fill_rect(x1, y1.min(y2), x1 + stroke - 1, y1.max(y2), color);
        } else {
            for offset in 0..stroke {
                draw_line_segment_mut(
                    &mut self.buf,
                    (x1 as f32, (y1 + offset) as f32),
                    (x2 as f32, (y2 + offset) as f32),
                    color,
                );
            }
        }
    }

    /// Fill a rectangle with a linear blend from `start` to `end`.
    ///
    /// Covers rows `y1..y2` (columns `x1..x2` when horizontal), half-open
    /// along the gradient axis. The first row (or column) is exactly `start`
    /// and the last exactly `end`; each channel transitions monotonically in
    /// between. Degenerate rectangles draw nothing. The fill is opaque
    /// regardless of the input alphas.
    pub fn gradient_rect(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        start: Rgba<u8>,
        end: Rgba<u8>,
        direction: Gradient,
    ) {
        let span = match direction {
            Gradient::Vertical => y2 - y1,
            Gradient::Horizontal => x2 - x1,
        };
        if span <= 0 || x2 <= x1 || y2 <= y1 {
            return;
        }
        let denom = (span - 1).max(1) as f32;
        for step in 0..span {
            let ratio = step as f32 / denom;
            let color = lerp_color(start, end, ratio);
            match direction {
                Gradient::Vertical => self.opaque_row(x1, x2, y1 + step, color),
                Gradient::Horizontal => self.opaque_column(x1 + step, y1, y2, color),
            }
        }
    }

    fn opaque_row(&mut self, x1: i32, x2: i32, y: i32, color: Rgba<u8>) {
        let (width, height) = self.buf.dimensions();
        if y < 0 || y >= height as i32 {
            return;
        }
        for x in x1.max(0)..=x2.min(width as i32 - 1) {
            self.buf.0.put_pixel(x as u32, y as u32, color);
        }
    }

    fn opaque_column(&mut self, x: i32, y1: i32, y2: i32, color: Rgba<u8>) {
        let (width, height) = self.buf.dimensions();
        if x < 0 || x >= width as i32 {
            return;
        }
        for y in y1.max(0)..=y2.min(height as i32 - 1) {
            self.buf.0.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Place text with its top-left corner at (x, y).
    pub fn text(&mut self, face: &Typeface, size: f32, x: i32, y: i32, color: Rgba<u8>, s: &str) {
        face.draw(&mut self.buf, x, y, size, color, s);
    }

    /// Place text horizontally centered on `cx`.
    pub fn text_centered(
        &mut self,
        face: &Typeface,
        size: f32,
        cx: i32,
        y: i32,
        color: Rgba<u8>,
        s: &str,
    ) {
        let width = face.measure(s, size);
        self.text(face, size, cx - (width / 2.0) as i32, y, color, s);
    }

    /// Encode the canvas as an RGB PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let rgb = DynamicImage::ImageRgba8(self.buf.0.clone()).to_rgb8();
        let mut bytes = Vec::new();
        rgb.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Encode and write the canvas to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let bytes = self.encode_png()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

/// Rounded-rectangle membership test with both corners inclusive.
fn in_rounded_rect(x: i32, y: i32, x1: i32, y1: i32, x2: i32, y2: i32, radius: i32) -> bool {
    if x < x1 || x > x2 || y < y1 || y > y2 {
        return false;
    }
    let dx = if x < x1 + radius {
        x1 + radius - x
    } else if x > x2 - radius {
        x - (x2 - radius)
    } else {
        0
    };
    let dy = if y < y1 + radius {
        y1 + radius - y
    } else if y > y2 - radius {
        y - (y2 - radius)
    } else {
        0
    };
    dx * dx + dy * dy <= radius * radius
}

fn lerp_color(start: Rgba<u8>, end: Rgba<u8>, ratio: f32) -> Rgba<u8> {
    let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * ratio) as u8;
    Rgba([
        channel(start.0[0], end.0[0]),
        channel(start.0[1], end.0[1]),
        channel(start.0[2], end.0[2]),
        255,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: Rgba<u8> = Rgba([40, 30, 80, 255]);
    const END: Rgba<u8> = Rgba([20, 15, 45, 255]);

    #[test]
    fn vertical_gradient_endpoints_are_exact() {
        let mut canvas = Canvas::new(64, 64, Rgba([0, 0, 0, 255]));
        canvas.gradient_rect(10, 10, 50, 50, START, END, Gradient::Vertical);
        assert_eq!(canvas.pixel(30, 10), START);
        assert_eq!(canvas.pixel(30, 49), END);
        // Rows below the fill keep the background
        assert_eq!(canvas.pixel(30, 50), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn horizontal_gradient_endpoints_are_exact() {
        let mut canvas = Canvas::new(64, 64, Rgba([0, 0, 0, 255]));
        canvas.gradient_rect(4, 4, 60, 20, START, END, Gradient::Horizontal);
        assert_eq!(canvas.pixel(4, 10), START);
        assert_eq!(canvas.pixel(59, 10), END);
    }

    #[test]
    fn gradient_channels_are_monotonic() {
        let mut canvas = Canvas::new(32, 128, Rgba([0, 0, 0, 255]));
        canvas.gradient_rect(0, 0, 31, 128, START, END, Gradient::Vertical);
        let mut prev = canvas.pixel(16, 0);
        for y in 1..127 {
            let cur = canvas.pixel(16, y);
            for ch in 0..3 {
                // START -> END is strictly darkening, so channels never rise
                assert!(cur.0[ch] <= prev.0[ch], "channel {ch} rose at row {y}");
            }
            prev = cur;
        }
    }

    #[test]
    fn degenerate_gradient_draws_nothing() {
        let bg = Rgba([1, 2, 3, 255]);
        let mut canvas = Canvas::new(16, 16, bg);
        canvas.gradient_rect(5, 5, 5, 5, START, END, Gradient::Vertical);
        canvas.gradient_rect(8, 8, 4, 12, START, END, Gradient::Horizontal);
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(canvas.pixel(x, y), bg);
            }
        }
    }

    #[test]
    fn fill_rect_clips_and_ignores_malformed() {
        let bg = Rgba([0, 0, 0, 255]);
        let mut canvas = Canvas::new(16, 16, bg);
        // Partially off-canvas clips silently
        canvas.fill_rect(-10, -10, 5, 5, Rgba([255, 0, 0, 255]));
        assert_eq!(canvas.pixel(0, 0), Rgba([255, 0, 0, 255]));
        // Negative extent draws nothing
        canvas.fill_rect(10, 10, 2, 2, Rgba([0, 255, 0, 255]));
        assert_eq!(canvas.pixel(10, 10), bg);
    }

    #[test]
    fn translucent_fill_blends_over_background() {
        let mut canvas = Canvas::new(8, 8, Rgba([0, 0, 0, 255]));
        canvas.fill_rect(0, 0, 7, 7, Rgba([200, 100, 50, 128]));
        let px = canvas.pixel(4, 4);
        // Blended result sits strictly between background and source
        assert!(px.0[0] > 0 && px.0[0] < 200);
        assert!(px.0[1] > 0 && px.0[1] < 100);
        assert_eq!(px.0[3], 255);
    }

    #[test]
    fn rounded_rect_clears_corners() {
        let bg = Rgba([0, 0, 0, 255]);
        let fill = Rgba([255, 255, 255, 255]);
        let mut canvas = Canvas::new(64, 64, bg);
        canvas.rounded_rect(0, 0, 63, 63, 20, fill);
        // Extreme corner stays background, center and edge midpoints fill
        assert_eq!(canvas.pixel(0, 0), bg);
        assert_eq!(canvas.pixel(32, 32), fill);
        assert_eq!(canvas.pixel(32, 0), fill);
        assert_eq!(canvas.pixel(0, 32), fill);
    }

    #[test]
    fn outline_leaves_interior_untouched() {
        let bg = Rgba([0, 0, 0, 255]);
        let stroke = Rgba([255, 0, 0, 255]);
        let mut canvas = Canvas::new(64, 64, bg);
        canvas.outline_rounded_rect(8, 8, 55, 55, 12, 2, stroke);
        assert_eq!(canvas.pixel(32, 8), stroke);
        assert_eq!(canvas.pixel(32, 32), bg);
    }

    #[test]
    fn ellipse_fills_center_not_bounding_corners() {
        let bg = Rgba([0, 0, 0, 255]);
        let fill = Rgba([0, 0, 255, 255]);
        let mut canvas = Canvas::new(64, 64, bg);
        canvas.ellipse(10, 10, 50, 50, fill);
        assert_eq!(canvas.pixel(30, 30), fill);
        assert_eq!(canvas.pixel(10, 10), bg);
    }

    #[test]
    fn encode_png_produces_rgb_png() {
        let canvas = Canvas::new(32, 16, Rgba([13, 15, 28, 255]));
        let bytes = canvas.encode_png().expect("encode");
        assert_eq!(&bytes[0..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image::load_from_memory(&bytes).expect("decode");
        assert_eq!(decoded.width(), 32);
        assert_eq!(decoded.height(), 16);
        assert_eq!(decoded.color(), image::ColorType::Rgb8);
    }
}
