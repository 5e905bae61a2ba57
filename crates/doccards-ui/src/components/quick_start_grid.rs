//! Quick Start Grid Component
//!
//! The four quick start cards in an auto-fitting grid.

use dioxus::prelude::*;
use doccards_core::{quick_start_cards, style, LinkRegistry, ThemeMode};

use super::selection_card::SelectionCard;

/// Quick start cards, in their fixed order.
///
/// Columns reflow with the available width (270px minimum each). Card
/// destinations come from `links`, which defaults to the built-in registry.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     QuickStartGrid { theme: ThemeMode::Dark }
/// }
/// ```
#[component]
pub fn QuickStartGrid(
    #[props(default)] theme: ThemeMode,
    #[props(default)] links: LinkRegistry,
) -> Element {
    let cards = quick_start_cards(&links);
    let grid_css = style::grid();

    rsx! {
        div { class: "quick-start-grid", style: "{grid_css}",
            for card in cards {
                SelectionCard {
                    key: "{card.title}",
                    title: card.title.clone(),
                    description: card.description.clone(),
                    href: card.href.clone(),
                    icon: card.icon,
                    theme,
                }
            }
        }
    }
}
