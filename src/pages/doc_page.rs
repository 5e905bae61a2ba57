//! Documentation page - destination for internal card links.
//!
//! Matches every path the home page does not, so any internal href in the
//! link registry lands somewhere.

use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn DocPage(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        main { class: "docs-page",
            h1 { class: "docs-title", "Documentation" }
            p { class: "doc-path", "{path}" }
            Link { class: "back-link", to: Route::Home {}, "\u{2190} Back to quick start" }
        }
    }
}
