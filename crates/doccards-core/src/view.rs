//! Typed view tree.
//!
//! A card is built as a small tree of [`ViewNode`]s with explicit inline
//! styles. The desktop components mirror this structure; the tree itself
//! serializes to JSON and renders to static HTML for pages that embed the
//! cards without a running UI.

use std::fmt::{self, Write};

use serde::Serialize;

use crate::card::CardSpec;
use crate::hover::HoverState;
use crate::icon::{IconKind, DEFAULT_ICON_SIZE, VIEW_BOX};
use crate::style::{self, CardStyle};
use crate::theme::ThemeMode;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum ViewNode {
    /// Navigable wrapper handed to the host's link capability
    Link {
        href: String,
        external: bool,
        children: Vec<ViewNode>,
    },
    Container {
        style: String,
        children: Vec<ViewNode>,
    },
    Heading {
        level: u8,
        style: String,
        text: String,
    },
    Text {
        style: String,
        text: String,
    },
    Icon {
        icon: IconKind,
        size: u32,
    },
}

impl ViewNode {
    pub fn children(&self) -> &[ViewNode] {
        match self {
            ViewNode::Link { children, .. } | ViewNode::Container { children, .. } => children,
            _ => &[],
        }
    }

    /// Depth-first, pre-order walk over this node and its descendants.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a ViewNode)) {
        f(self);
        for child in self.children() {
            child.visit(f);
        }
    }

    /// Targets of every link node, in document order.
    pub fn link_targets(&self) -> Vec<&str> {
        let mut targets = Vec::new();
        self.visit(&mut |node| {
            if let ViewNode::Link { href, .. } = node {
                targets.push(href.as_str());
            }
        });
        targets
    }

    /// Text of every heading, in document order.
    pub fn headings(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.visit(&mut |node| {
            if let ViewNode::Heading { text, .. } = node {
                out.push(text.as_str());
            }
        });
        out
    }

    /// Static HTML for this subtree (same output as `Display`).
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ViewNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewNode::Link {
                href,
                external,
                children,
            } => {
                write!(f, "<a href=\"{}\"", escape(href))?;
                if *external {
                    f.write_str(" target=\"_blank\" rel=\"noopener noreferrer\"")?;
                }
                f.write_char('>')?;
                write_children(children, f)?;
                f.write_str("</a>")
            }
            ViewNode::Container { style, children } => {
                write!(f, "<div style=\"{}\">", escape(style))?;
                write_children(children, f)?;
                f.write_str("</div>")
            }
            ViewNode::Heading { level, style, text } => write!(
                f,
                "<h{level} style=\"{}\">{}</h{level}>",
                escape(style),
                escape(text)
            ),
            ViewNode::Text { style, text } => {
                write!(f, "<p style=\"{}\">{}</p>", escape(style), escape(text))
            }
            ViewNode::Icon { icon, size } => {
                write!(
                    f,
                    "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" \
                     viewBox=\"{VIEW_BOX}\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\" \
                     stroke-linecap=\"round\" stroke-linejoin=\"round\" role=\"img\" aria-label=\"{}\">",
                    icon.label()
                )?;
                for d in icon.paths() {
                    write!(f, "<path d=\"{d}\"/>")?;
                }
                f.write_str("</svg>")
            }
        }
    }
}

fn write_children(children: &[ViewNode], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for child in children {
        write!(f, "{child}")?;
    }
    Ok(())
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// One selection card.
pub fn selection_card(spec: &CardSpec, theme: ThemeMode, hover: HoverState) -> ViewNode {
    let card = CardStyle::resolve(theme, hover);
    let destination = spec.destination();

    let icon_row = ViewNode::Container {
        style: card.icon_row().render(),
        children: spec
            .icon
            .map(|icon| ViewNode::Icon {
                icon,
                size: DEFAULT_ICON_SIZE,
            })
            .into_iter()
            .collect(),
    };

    ViewNode::Link {
        href: spec.href.clone(),
        external: destination.is_external(),
        children: vec![ViewNode::Container {
            style: card.container().render(),
            children: vec![
                icon_row,
                ViewNode::Heading {
                    level: 3,
                    style: style::title().render(),
                    text: spec.title.clone(),
                },
                ViewNode::Text {
                    style: style::description().render(),
                    text: spec.description.clone(),
                },
            ],
        }],
    }
}

/// A grid of cards. `hovered` marks at most one card as under the pointer.
pub fn card_grid(cards: &[CardSpec], theme: ThemeMode, hovered: Option<usize>) -> ViewNode {
    ViewNode::Container {
        style: style::grid().render(),
        children: cards
            .iter()
            .enumerate()
            .map(|(i, spec)| selection_card(spec, theme, HoverState::from(hovered == Some(i))))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::LinkRegistry;
    use crate::quick_start::quick_start_cards;

    fn sample() -> CardSpec {
        CardSpec::new("Get API key", "Grab a key.", "/authentication").with_icon(IconKind::Key)
    }

    #[test]
    fn card_has_single_link_to_href() {
        let node = selection_card(&sample(), ThemeMode::Dark, HoverState::Idle);
        assert_eq!(node.link_targets(), ["/authentication"]);
        assert!(matches!(node, ViewNode::Link { external: false, .. }));
    }

    #[test]
    fn display_renders_html() {
        let node = selection_card(&sample(), ThemeMode::Light, HoverState::Hovered);
        assert_eq!(format!("{node}"), node.to_html());
        assert!(format!("{node}").ends_with("</div></a>"));
    }

    #[test]
    fn card_html_structure() {
        let html = selection_card(&sample(), ThemeMode::Dark, HoverState::Idle).to_html();
        assert!(html.starts_with("<a href=\"/authentication\">"));
        assert!(html.contains("background-color: #52BAFF1A; border: none;"));
        assert!(html.contains("<h3 style=\"font-size: 20px; font-weight: bold;\">Get API key</h3>"));
        assert!(html.contains("<p style=\"font-size: 15px;\">Grab a key.</p>"));
        assert!(html.contains("width=\"26\""));
        assert!(html.ends_with("</a>"));
    }

    #[test]
    fn hovered_light_card_draws_border() {
        let html = selection_card(&sample(), ThemeMode::Light, HoverState::Hovered).to_html();
        assert!(html.contains("background-color: #E0EFFF; border: 1px solid #52BAFF77;"));
    }

    #[test]
    fn external_links_open_elsewhere() {
        let spec = CardSpec::new("Pricing", "Plans", "https://example.com/pricing");
        let html = selection_card(&spec, ThemeMode::Dark, HoverState::Idle).to_html();
        assert!(html.starts_with(
            "<a href=\"https://example.com/pricing\" target=\"_blank\" rel=\"noopener noreferrer\">"
        ));
    }

    #[test]
    fn iconless_card_keeps_empty_icon_row() {
        let spec = CardSpec::new("T", "D", "/x");
        let node = selection_card(&spec, ThemeMode::Dark, HoverState::Idle);
        let mut icons = 0;
        node.visit(&mut |n| {
            if matches!(n, ViewNode::Icon { .. }) {
                icons += 1;
            }
        });
        assert_eq!(icons, 0);
        assert!(!node.to_html().contains("<svg"));
    }

    #[test]
    fn text_is_escaped() {
        let spec = CardSpec::new("<b>&</b>", "\"quoted\"", "/a?b=1&c=2");
        let html = selection_card(&spec, ThemeMode::Dark, HoverState::Idle).to_html();
        assert!(html.contains("&lt;b&gt;&amp;&lt;/b&gt;"));
        assert!(html.contains("&quot;quoted&quot;"));
        assert!(html.contains("href=\"/a?b=1&amp;c=2\""));
    }

    #[test]
    fn grid_keeps_order_and_hovers_one() {
        let cards = quick_start_cards(&LinkRegistry::default());
        let grid = card_grid(&cards, ThemeMode::Light, Some(2));

        assert_eq!(grid.children().len(), 4);
        assert_eq!(
            grid.headings(),
            [
                "Get API key",
                "Develop with API",
                "Develop with TypeScript SDK",
                "Upgrade subscription",
            ]
        );
        let hovered = grid.to_html().matches("border: 1px solid").count();
        assert_eq!(hovered, 1);
    }

    #[test]
    fn grid_out_of_range_hover_is_ignored() {
        let cards = quick_start_cards(&LinkRegistry::default());
        let html = card_grid(&cards, ThemeMode::Dark, Some(9)).to_html();
        assert_eq!(html.matches("border: none;").count(), 4);
    }

    #[test]
    fn json_is_tagged_by_node() {
        let node = selection_card(&sample(), ThemeMode::Dark, HoverState::Idle);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["node"], "link");
        assert_eq!(json["href"], "/authentication");
        assert_eq!(json["children"][0]["node"], "container");
    }
}
