//! doccards Core Library
//!
//! Framework-free model behind the documentation quick start cards.
//!
//! ## Overview
//!
//! A [`CardSpec`] describes one selectable card (title, description,
//! destination, icon). How a card looks is a function of two inputs only:
//! the resolved [`ThemeMode`] and the card's own [`HoverState`].
//! [`CardStyle::resolve`] turns those into concrete CSS, and the
//! [`view`] module builds a typed node tree that the desktop UI and the
//! static renderer both follow.
//!
//! ## Quick Start
//!
//! ```
//! use doccards_core::{quick_start_cards, view, HoverState, LinkRegistry, ThemeMode};
//!
//! let links = LinkRegistry::default();
//! let cards = quick_start_cards(&links);
//! assert_eq!(cards.len(), 4);
//!
//! let mode = ThemeMode::from_resolved(Some("dark"));
//! let card = view::selection_card(&cards[0], mode, HoverState::Idle);
//! assert!(card.to_html().contains("Get API key"));
//! ```

pub mod card;
pub mod error;
pub mod hover;
pub mod icon;
pub mod links;
pub mod quick_start;
pub mod style;
pub mod theme;
pub mod view;

// Re-exports
pub use card::{CardSpec, Destination};
pub use error::{CardError, Result};
pub use hover::{CardEvent, HoverState};
pub use icon::{IconKind, DEFAULT_ICON_SIZE};
pub use links::{ExternalLinks, InternalLinks, LinkRegistry};
pub use quick_start::quick_start_cards;
pub use style::{CardStyle, Css};
pub use theme::{Palette, ThemeMode};
pub use view::ViewNode;
