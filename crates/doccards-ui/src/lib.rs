//! doccards UI Components
//!
//! Dioxus components for the documentation quick start cards.
//!
//! The components take the resolved [`ThemeMode`](doccards_core::ThemeMode)
//! as a prop instead of reading it from context, and hand navigation to the
//! router's `Link`, so they must be rendered inside a `Router`.

pub mod components;

pub use components::*;
