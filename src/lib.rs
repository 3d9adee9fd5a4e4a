//! storeshots
//!
//! A procedural generator for the MarketingTool App Store listing: it renders
//! six static mockups of the app's screens (dashboard, tools, chat, tool
//! detail, results, profile) and writes them as 2048x2732 RGB PNGs, the
//! iPad 13" screenshot size.
//!
//! # Features
//!
//! - **Self-contained**: all layout geometry, copy text and colors are
//!   built-in constants; no input is required
//! - **Deterministic**: with the same resolved font, repeated runs produce
//!   byte-identical files
//! - **Degrades gracefully**: when no candidate font file exists, a built-in
//!   bitmap glyph set is used instead of failing
//!
//! # Example
//!
//! ```no_run
//! use storeshots::RenderConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RenderConfig {
//!     out_dir: "ipad".into(),
//!     ..Default::default()
//! };
//!
//! let written = storeshots::generate_all(&config)?;
//! assert_eq!(written.len(), 6);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use log::info;

pub mod error;
pub use error::{Error, Result};

pub mod canvas;
pub mod screens;
pub mod theme;
pub mod typeface;

use canvas::Canvas;
use screens::Screen;
use typeface::FontSet;

/// Output canvas dimensions in pixels
#[derive(Debug, Clone, Copy)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        // iPad 12.9"/13" App Store screenshot resolution
        Self {
            width: 2048,
            height: 2732,
        }
    }
}

/// Configuration for a generation run
///
/// The defaults reproduce the shipped marketing set: iPad-sized canvases,
/// output under `ipad/`, and the app's bundled Poppins faces with DejaVu as
/// the system fallback.
///
/// # Examples
///
/// ```
/// let cfg = storeshots::RenderConfig::default();
/// assert_eq!(cfg.canvas.width, 2048);
/// ```
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Directory the PNGs are written into; created when missing
    pub out_dir: PathBuf,
    /// Canvas dimensions
    pub canvas: CanvasSize,
    /// Ordered candidates for the semi-bold face; first existing file wins
    pub bold_fonts: Vec<PathBuf>,
    /// Ordered candidates for the regular face
    pub regular_fonts: Vec<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("ipad"),
            canvas: CanvasSize::default(),
            bold_fonts: vec![
                PathBuf::from("assets/fonts/Poppins-SemiBold.ttf"),
                PathBuf::from("assets/fonts/Poppins-Bold.ttf"),
                PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"),
                PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
            ],
            regular_fonts: vec![
                PathBuf::from("assets/fonts/Poppins-Regular.ttf"),
                PathBuf::from("assets/fonts/Poppins-Medium.ttf"),
                PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
            ],
        }
    }
}

/// Render every screen and write `01_dashboard.png` through `06_profile.png`
/// into the configured output directory.
///
/// Screens are generated sequentially; each composition gets its own canvas
/// and freshly resolved fonts, both dropped once the file is on disk.
/// Returns the written paths in order.
pub fn generate_all(config: &RenderConfig) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(&config.out_dir).map_err(|e| Error::OutputDir {
        path: config.out_dir.display().to_string(),
        source: e,
    })?;

    let mut written = Vec::new();
    for (index, screen) in screens::all_screens().iter().enumerate() {
        let path = config
            .out_dir
            .join(format!("{:02}_{}.png", index + 1, screen.slug()));

        let fonts = FontSet::resolve(&config.bold_fonts, &config.regular_fonts);
        let mut canvas = Canvas::new(config.canvas.width, config.canvas.height, theme::BG);
        screen.compose(&mut canvas, &fonts);
        canvas.save(&path)?;

        info!("Wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.canvas.width, 2048);
        assert_eq!(config.canvas.height, 2732);
        assert!(!config.bold_fonts.is_empty());
        assert!(!config.regular_fonts.is_empty());
    }

    #[test]
    fn test_canvas_size() {
        let size = CanvasSize {
            width: 1170,
            height: 2532,
        };
        assert_eq!(size.width, 1170);
        assert_eq!(size.height, 2532);
    }
}
