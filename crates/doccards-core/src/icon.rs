//! Icon glyphs used by the quick start cards.
//!
//! Outline glyphs on a 24x24 view box, stroked with `currentColor` so they
//! pick up the card accent.

use serde::Serialize;

/// Size the quick start grid requests for its icons, in pixels
pub const DEFAULT_ICON_SIZE: u32 = 26;

/// SVG view box shared by every glyph
pub const VIEW_BOX: &str = "0 0 24 24";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    /// API key
    Key,
    /// HTTP API / source code
    Code,
    /// TypeScript SDK
    TypeScript,
    /// Subscription upgrade
    Premium,
}

impl IconKind {
    /// Path data (`d` attributes) for this glyph.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            IconKind::Key => &[
                "M2.586 17.414A2 2 0 0 0 2 18.828V21a1 1 0 0 0 1 1h3a1 1 0 0 0 1-1v-1a1 1 0 0 1 1-1h1a1 1 0 0 0 1-1v-1a1 1 0 0 1 1-1h.172a2 2 0 0 0 1.414-.586l.814-.814a6.5 6.5 0 1 0-4-4z",
                "M16.5 7.5h.01",
            ],
            IconKind::Code => &["m16 18 6-6-6-6", "m8 6-6 6 6 6"],
            IconKind::TypeScript => &[
                "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
                "M7 11h6",
                "M10 11v6",
                "M18 11h-2a1.5 1.5 0 0 0 0 3h1a1.5 1.5 0 0 1 0 3h-2",
            ],
            IconKind::Premium => &[
                "M11.562 3.266a.5.5 0 0 1 .876 0L15.39 8.87a1 1 0 0 0 1.516.294L21.183 5.5a.5.5 0 0 1 .798.519l-2.834 10.246a1 1 0 0 1-.956.734H5.81a1 1 0 0 1-.957-.734L2.02 6.02a.5.5 0 0 1 .798-.519l4.276 3.664a1 1 0 0 0 1.516-.294z",
                "M5 21h14",
            ],
        }
    }

    /// Accessible label for the glyph.
    pub fn label(self) -> &'static str {
        match self {
            IconKind::Key => "Key",
            IconKind::Code => "Code",
            IconKind::TypeScript => "TypeScript",
            IconKind::Premium => "Premium",
        }
    }
}
