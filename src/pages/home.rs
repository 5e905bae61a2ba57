//! Home page - the quick start grid.

use dioxus::prelude::*;
use doccards_ui::QuickStartGrid;

use crate::context::{use_links, use_theme_mode, use_theme_name};

/// Home page component.
///
/// Hosts the quick start grid and a toggle that flips the host theme.
#[component]
pub fn Home() -> Element {
    let mut theme = use_theme_name();
    let mode = use_theme_mode();
    let links = use_links();

    let toggle_theme = move |_| {
        let next = mode.toggled();
        tracing::debug!(from = %mode, to = %next, "Theme toggled");
        theme.set(next.as_str().to_string());
    };

    rsx! {
        main { class: "docs-page",
            header { class: "docs-header",
                h1 { class: "docs-title", "Quick start" }
                button {
                    class: "theme-toggle",
                    onclick: toggle_theme,
                    "aria-label": "Toggle theme",
                    if mode.is_light() { "Dark mode" } else { "Light mode" }
                }
            }
            p { class: "docs-intro",
                "Everything you need to start building: an API key, the HTTP API, the SDKs and plans."
            }

            QuickStartGrid { theme: mode, links: links() }
        }
    }
}
