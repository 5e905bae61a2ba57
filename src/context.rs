//! Host context for doccards.
//!
//! The desktop host owns the resolved theme name and the link registry and
//! shares them with pages via `use_context`. Pages convert the theme name to
//! a [`ThemeMode`] and pass it down to the card components explicitly.
//!
//! ## Usage
//!
//! ```ignore
//! // In a page
//! let mode = use_theme_mode();
//! let links = use_links();
//! rsx! { QuickStartGrid { theme: mode, links: links() } }
//! ```

use dioxus::prelude::*;
use doccards_core::{LinkRegistry, ThemeMode};

/// Settings parsed from the command line before launch.
#[derive(Clone, Debug, Default)]
pub struct LaunchSettings {
    /// Initial resolved theme name
    pub theme: String,
    pub links: LinkRegistry,
}

/// Get the settings the app was launched with.
pub fn launch_settings() -> LaunchSettings {
    crate::launch_settings()
}

/// Hook to access the resolved theme name.
///
/// Writable: the theme toggle sets it.
pub fn use_theme_name() -> Signal<String> {
    use_context::<Signal<String>>()
}

/// Hook to read the current theme mode.
///
/// Only the exact name "light" is light; everything else is dark.
pub fn use_theme_mode() -> ThemeMode {
    use_theme_name().with(|name| ThemeMode::from_resolved(Some(name.as_str())))
}

/// Hook to access the link registry.
pub fn use_links() -> Signal<LinkRegistry> {
    use_context::<Signal<LinkRegistry>>()
}
