//! Icon rendering
//!
//! Inline SVG glyphs stroked with `currentColor`, so they inherit the accent
//! colour of whatever row they sit in.

use dioxus::prelude::*;
use doccards_core::icon::VIEW_BOX;
use doccards_core::{IconKind, DEFAULT_ICON_SIZE};

/// Glyph for `kind`, drawn `size` pixels square.
#[component]
pub fn Icon(kind: IconKind, #[props(default = DEFAULT_ICON_SIZE)] size: u32) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: VIEW_BOX,
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            role: "img",
            "aria-label": kind.label(),
            for d in kind.paths() {
                path { d: *d }
            }
        }
    }
}
