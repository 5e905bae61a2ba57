//! Selection Card Component
//!
//! One clickable card: icon, title, description, wrapped in a router link.

use dioxus::prelude::*;
use doccards_core::style::{self, CardStyle};
use doccards_core::{CardEvent, Destination, HoverState, IconKind, ThemeMode, DEFAULT_ICON_SIZE};

use super::icons::Icon;

/// Clickable card leading to `href`.
///
/// Background and accent follow `theme`; a 1px accent border appears while
/// the pointer is over the card. Each instance owns its hover state.
/// Hrefs other than root-relative paths open in a new tab (the system
/// browser on desktop); `/...` paths route in-app.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SelectionCard {
///         title: "Get API key",
///         description: "Experience seamless integration with our API.",
///         href: "/authentication",
///         icon: IconKind::Key,
///         theme: ThemeMode::Light,
///     }
/// }
/// ```
#[component]
pub fn SelectionCard(
    title: String,
    description: String,
    href: String,
    #[props(default)] icon: Option<IconKind>,
    #[props(default)] theme: ThemeMode,
) -> Element {
    let mut hover = use_signal(HoverState::default);

    let card = CardStyle::resolve(theme, hover());
    let container_css = card.container();
    let icon_css = card.icon_row();
    let title_css = style::title();
    let description_css = style::description();

    let external = Destination::classify(&href).is_external();
    let activated_href = href.clone();

    rsx! {
        Link {
            to: href.clone(),
            new_tab: external,
            div {
                class: "selection-card",
                style: "{container_css}",
                onmouseenter: move |_| {
                    if hover.write().apply(CardEvent::PointerEnter) {
                        tracing::trace!("Card hovered");
                    }
                },
                onmouseleave: move |_| {
                    if hover.write().apply(CardEvent::PointerLeave) {
                        tracing::trace!("Card left");
                    }
                },
                onclick: move |_| {
                    tracing::debug!(href = %activated_href, external, "Card activated");
                },

                div { style: "{icon_css}",
                    if let Some(kind) = icon {
                        Icon { kind, size: DEFAULT_ICON_SIZE }
                    }
                }
                h3 { style: "{title_css}", "{title}" }
                p { style: "{description_css}", "{description}" }
            }
        }
    }
}
