//! The six screen composers.
//!
//! Each screen is a straight-line sequence of primitive draw calls against
//! hard-coded layout constants; the only branching is presentation toggles
//! (active tab, NEW/PRO badges) driven by built-in flags.

mod chat;
mod dashboard;
mod profile;
mod results;
mod tool_detail;
mod tools;
pub(crate) mod widgets;

use crate::canvas::Canvas;
use crate::typeface::FontSet;

/// One App Store mockup screen.
///
/// Implementations draw a complete image onto a fresh canvas; they never
/// read external state, so composing the same screen twice yields identical
/// pixels.
pub trait Screen {
    /// File-name slug, e.g. `dashboard` for `01_dashboard.png`
    fn slug(&self) -> &'static str;

    /// Draw the complete screen onto `canvas`.
    fn compose(&self, canvas: &mut Canvas, fonts: &FontSet);
}

struct Dashboard;
struct Tools;
struct Chat;
struct ToolDetail;
struct Results;
struct Profile;

impl Screen for Dashboard {
    fn slug(&self) -> &'static str {
        "dashboard"
    }

    fn compose(&self, canvas: &mut Canvas, fonts: &FontSet) {
        dashboard::compose(canvas, fonts);
    }
}

impl Screen for Tools {
    fn slug(&self) -> &'static str {
        "tools"
    }

    fn compose(&self, canvas: &mut Canvas, fonts: &FontSet) {
        tools::compose(canvas, fonts);
    }
}

impl Screen for Chat {
    fn slug(&self) -> &'static str {
        "chat"
    }

    fn compose(&self, canvas: &mut Canvas, fonts: &FontSet) {
        chat::compose(canvas, fonts);
    }
}

impl Screen for ToolDetail {
    fn slug(&self) -> &'static str {
        "tool_detail"
    }

    fn compose(&self, canvas: &mut Canvas, fonts: &FontSet) {
        tool_detail::compose(canvas, fonts);
    }
}

impl Screen for Results {
    fn slug(&self) -> &'static str {
        "results"
    }

    fn compose(&self, canvas: &mut Canvas, fonts: &FontSet) {
        results::compose(canvas, fonts);
    }
}

impl Screen for Profile {
    fn slug(&self) -> &'static str {
        "profile"
    }

    fn compose(&self, canvas: &mut Canvas, fonts: &FontSet) {
        profile::compose(canvas, fonts);
    }
}

/// All six screens in output order; index + 1 is the file-name prefix.
pub fn all_screens() -> Vec<Box<dyn Screen>> {
    vec![
        Box::new(Dashboard),
        Box::new(Tools),
        Box::new(Chat),
        Box::new(ToolDetail),
        Box::new(Results),
        Box::new(Profile),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screens_are_ordered_and_named() {
        let slugs: Vec<_> = all_screens().iter().map(|s| s.slug()).collect();
        assert_eq!(
            slugs,
            ["dashboard", "tools", "chat", "tool_detail", "results", "profile"]
        );
    }
}
