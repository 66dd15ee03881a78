//! Preview list entries.

use serde::{Deserialize, Serialize};

/// One entry of the hover preview list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewItem {
    /// Stable identifier.
    pub id: u32,
    /// Headline.
    pub title: String,
    /// One-line description.
    pub subtitle: String,
    /// Image shown in the floating preview.
    pub image: String,
    /// Link target. Items without one still preview but do not navigate.
    #[serde(default, alias = "href", skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl PreviewItem {
    /// Creates an item without a link.
    #[must_use]
    pub fn new(
        id: u32,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            subtitle: subtitle.into(),
            image: image.into(),
            link: None,
        }
    }

    /// Sets the link target.
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Where clicking this item goes, if anywhere.
    #[must_use]
    pub fn navigation(&self) -> Option<Navigation> {
        self.link.as_deref().map(Navigation::to)
    }
}

/// A navigation request produced by activating an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Target URL or route.
    pub href: String,
    /// External links open in a new tab without an opener.
    pub new_tab: bool,
}

impl Navigation {
    /// Builds a navigation for `href`.
    #[must_use]
    pub fn to(href: &str) -> Self {
        Self {
            href: href.to_owned(),
            new_tab: href.starts_with("http"),
        }
    }
}
