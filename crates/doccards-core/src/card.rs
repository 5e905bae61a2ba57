//! Card data.

use serde::Serialize;

use crate::icon::IconKind;

/// Static description of one selectable card.
///
/// Nothing here is validated. An empty title renders as an empty heading and
/// a malformed href is left for the navigation layer to reject.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CardSpec {
    pub title: String,
    pub description: String,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconKind>,
}

impl CardSpec {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        href: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            href: href.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: IconKind) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn destination(&self) -> Destination<'_> {
        Destination::classify(&self.href)
    }
}

/// Where activating a card leads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination<'a> {
    /// Root-relative path (`/...`), routed client-side
    Internal(&'a str),
    /// Everything else: URLs, `//host` references, relative paths, fragments
    External(&'a str),
}

impl<'a> Destination<'a> {
    pub fn classify(href: &'a str) -> Self {
        // The router only parses root-relative paths; anything else leaves the app.
        if href.starts_with('/') && !href.starts_with("//") {
            Destination::Internal(href)
        } else {
            Destination::External(href)
        }
    }

    pub fn href(&self) -> &'a str {
        match self {
            Destination::Internal(href) | Destination::External(href) => href,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Destination::External(_))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Destination::Internal(_) => "internal",
            Destination::External(_) => "external",
        }
    }
}
