//! Theme mode and card palette.
//!
//! The host resolves a theme name (for example from the OS preference or a
//! user toggle). Cards only distinguish "light" from everything else, so an
//! unset or still-loading theme renders with the dark palette.

use serde::{Deserialize, Serialize};

/// Card background in light mode
pub const LIGHT_BACKGROUND: &str = "#E0EFFF";
/// Card background in every non-light mode
pub const DARK_BACKGROUND: &str = "#52BAFF1A";
/// Border and icon accent in light mode
pub const LIGHT_ACCENT: &str = "#52BAFF77";
/// Border and icon accent in every non-light mode
pub const DARK_ACCENT: &str = "#52BAFF";

/// Binary classification of the active colour scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// Classify a resolved theme name.
    ///
    /// Only the exact literal `"light"` selects [`ThemeMode::Light`].
    pub fn from_resolved(name: Option<&str>) -> Self {
        match name {
            Some("light") => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }

    pub fn is_light(self) -> bool {
        self == ThemeMode::Light
    }

    /// The other mode (used by the host's theme toggle).
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ThemeMode::Light => Palette {
                background: LIGHT_BACKGROUND,
                accent: LIGHT_ACCENT,
            },
            ThemeMode::Dark => Palette {
                background: DARK_BACKGROUND,
                accent: DARK_ACCENT,
            },
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colours a card draws with for one theme mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: &'static str,
    pub accent: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_light_is_light() {
        assert_eq!(ThemeMode::from_resolved(Some("light")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_resolved(Some("dark")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_resolved(Some("Light")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_resolved(Some("system")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_resolved(Some("")), ThemeMode::Dark);
    }

    #[test]
    fn unresolved_theme_falls_back_to_dark() {
        assert_eq!(ThemeMode::from_resolved(None), ThemeMode::Dark);
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }

    #[test]
    fn palettes() {
        let light = ThemeMode::Light.palette();
        assert_eq!(light.background, "#E0EFFF");
        assert_eq!(light.accent, "#52BAFF77");

        let dark = ThemeMode::Dark.palette();
        assert_eq!(dark.background, "#52BAFF1A");
        assert_eq!(dark.accent, "#52BAFF");
    }

    #[test]
    fn toggle_flips_and_returns() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&ThemeMode::Light).unwrap();
        assert_eq!(json, "\"light\"");
        let mode: ThemeMode = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(mode, ThemeMode::Dark);
    }
}
