//! Property-based tests for card rendering
//!
//! Uses proptest to check the hover state machine and the theme/hover style
//! rules against arbitrary inputs.

use doccards_core::view::{card_grid, selection_card};
use doccards_core::{CardEvent, CardSpec, CardStyle, HoverState, ThemeMode, ViewNode};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(".{0,200}").expect("valid regex")
}

fn href_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("/[a-z0-9/_-]{0,40}").expect("valid regex"),
        prop::string::string_regex("https://[a-z]{1,12}\\.com/[a-z/]{0,20}").expect("valid regex"),
        text_strategy(),
    ]
}

fn card_strategy() -> impl Strategy<Value = CardSpec> {
    (text_strategy(), text_strategy(), href_strategy())
        .prop_map(|(title, description, href)| CardSpec::new(title, description, href))
}

fn theme_name_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(Some("light".to_string())),
        Just(Some("dark".to_string())),
        Just(None),
        text_strategy().prop_map(Some),
    ]
}

fn event_strategy() -> impl Strategy<Value = CardEvent> {
    prop_oneof![
        Just(CardEvent::PointerEnter),
        Just(CardEvent::PointerLeave),
        Just(CardEvent::Activate),
    ]
}

fn hover_strategy() -> impl Strategy<Value = HoverState> {
    prop_oneof![Just(HoverState::Idle), Just(HoverState::Hovered)]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every card is exactly one link, targeting its href
    #[test]
    fn card_renders_one_link_to_href(
        spec in card_strategy(),
        theme in theme_name_strategy(),
        hover in hover_strategy(),
    ) {
        let mode = ThemeMode::from_resolved(theme.as_deref());
        let node = selection_card(&spec, mode, hover);
        prop_assert_eq!(node.link_targets(), vec![spec.href.as_str()]);
        let is_link = matches!(node, ViewNode::Link { .. });
        prop_assert!(is_link);
    }

    /// Hover follows the last pointer event; activation never changes it
    #[test]
    fn hover_tracks_last_pointer_event(events in prop::collection::vec(event_strategy(), 0..50)) {
        let mut state = HoverState::default();
        let mut expected = false;

        for event in events {
            state.apply(event);
            match event {
                CardEvent::PointerEnter => expected = true,
                CardEvent::PointerLeave => expected = false,
                CardEvent::Activate => {}
            }
            prop_assert_eq!(state.is_hovered(), expected);
        }
    }

    /// Border is present exactly while hovered, for any theme
    #[test]
    fn border_only_while_hovered(theme in theme_name_strategy(), hover in hover_strategy()) {
        let mode = ThemeMode::from_resolved(theme.as_deref());
        let style = CardStyle::resolve(mode, hover);
        if hover.is_hovered() {
            prop_assert!(style.border.starts_with("1px solid "));
        } else {
            prop_assert_eq!(style.border.as_str(), "none");
        }
    }

    /// Background and accent depend on theme mode only
    #[test]
    fn colours_depend_only_on_theme(theme in theme_name_strategy()) {
        let mode = ThemeMode::from_resolved(theme.as_deref());
        let idle = CardStyle::resolve(mode, HoverState::Idle);
        let hovered = CardStyle::resolve(mode, HoverState::Hovered);

        prop_assert_eq!(idle.background, hovered.background);
        prop_assert_eq!(idle.accent, hovered.accent);

        let (background, accent) = if theme.as_deref() == Some("light") {
            ("#E0EFFF", "#52BAFF77")
        } else {
            ("#52BAFF1A", "#52BAFF")
        };
        prop_assert_eq!(idle.background, background);
        prop_assert_eq!(idle.accent, accent);
    }

    /// A grid renders one card per spec, in input order
    #[test]
    fn grid_preserves_order(
        cards in prop::collection::vec(card_strategy(), 0..8),
        hovered in prop::option::of(0..10usize),
    ) {
        let grid = card_grid(&cards, ThemeMode::Dark, hovered);
        let expected: Vec<&str> = cards.iter().map(|c| c.href.as_str()).collect();
        prop_assert_eq!(grid.link_targets(), expected);
        prop_assert_eq!(grid.children().len(), cards.len());
    }
}
