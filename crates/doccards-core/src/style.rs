//! Inline styles for cards and the quick start grid.

use serde::Serialize;

use crate::hover::HoverState;
use crate::theme::ThemeMode;

/// Minimum grid column width before the grid drops a column
pub const GRID_MIN_COLUMN_PX: u32 = 270;

/// Ordered list of CSS declarations rendered as an inline `style` value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Css {
    decls: Vec<(&'static str, String)>,
}

impl Css {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.decls.push((property, value.into()));
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.decls
            .iter()
            .rev()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn render(&self) -> String {
        self.decls
            .iter()
            .map(|(p, v)| format!("{p}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for Css {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Colours and border of one card for a given theme and hover state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardStyle {
    pub theme: ThemeMode,
    pub hover: HoverState,
    /// Fill colour, decided by theme alone
    pub background: &'static str,
    /// Border colour and icon colour, decided by theme alone
    pub accent: &'static str,
    /// `none`, or a 1px solid line in the accent colour while hovered
    pub border: String,
}

impl CardStyle {
    pub fn resolve(theme: ThemeMode, hover: HoverState) -> Self {
        let palette = theme.palette();
        let border = if hover.is_hovered() {
            format!("1px solid {}", palette.accent)
        } else {
            "none".to_string()
        };
        Self {
            theme,
            hover,
            background: palette.background,
            accent: palette.accent,
            border,
        }
    }

    /// Outer card box.
    pub fn container(&self) -> Css {
        Css::new()
            .set("background-color", self.background)
            .set("border", self.border.clone())
            .set("padding", "20px 25px")
            .set("border-radius", "10px")
            .set("height", "200px")
            .set("display", "flex")
            .set("flex-direction", "column")
            .set("justify-content", "center")
            .set("gap", "8px")
    }

    /// Row holding the icon, tinted with the accent.
    pub fn icon_row(&self) -> Css {
        Css::new()
            .set("display", "flex")
            .set("align-items", "center")
            .set("color", self.accent)
            .set("margin-bottom", "8px")
    }
}

pub fn title() -> Css {
    Css::new().set("font-size", "20px").set("font-weight", "bold")
}

pub fn description() -> Css {
    Css::new().set("font-size", "15px")
}

/// Auto-fitting grid: as many columns as fit at the minimum width, each
/// growing to share leftover space.
pub fn grid() -> Css {
    Css::new()
        .set("display", "grid")
        .set(
            "grid-template-columns",
            format!("repeat(auto-fit, minmax({GRID_MIN_COLUMN_PX}px, 1fr))"),
        )
        .set("justify-content", "flex-start")
        .set("gap", "15px")
        .set("margin-top", "30px")
        .set("max-width", "750px")
}
