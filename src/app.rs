use dioxus::prelude::*;
use doccards_core::{LinkRegistry, ThemeMode};

use crate::context::launch_settings;
use crate::pages::{DocPage, Home};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Home page with the quick start grid
/// - anything else - Documentation page for internal card destinations
#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    DocPage { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, theme and link context, and routing.
#[component]
pub fn App() -> Element {
    let settings = launch_settings();
    let theme: Signal<String> = use_signal(|| settings.theme.clone());
    let links: Signal<LinkRegistry> = use_signal(|| settings.links.clone());

    use_context_provider(|| theme);
    use_context_provider(|| links);

    let mode = theme.with(|name| ThemeMode::from_resolved(Some(name.as_str())));

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "app theme-{mode}",
            Router::<Route> {}
        }
    }
}
