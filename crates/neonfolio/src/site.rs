//! # Site Configuration
//!
//! One TOML file describes the site: name, navbar, social links, the
//! projects shown in the hover preview list, and the background tuning.
//!
//! ```toml
//! [site]
//! name = "Andre Junior"
//!
//! [[navbar]]
//! label = "Projects"
//! href = "/Project"
//!
//! [[projects]]
//! id = 1
//! title = "Website RT 14"
//! subtitle = "Documentation recap and announcements"
//! image = "/web1.png"
//! link = "https://rt14perumkorpri.vercel.app/"
//!
//! [background]
//! attraction_radius = 200.0
//!
//! [preview]
//! swap_delay = 100
//! leave_delay = 200
//! ```

use std::collections::HashSet;
use std::path::Path;

use neonfolio_effects::NetworkConfig;
use neonfolio_ui::{PreviewItem, PreviewMenu, PreviewMenuConfig};
use serde::{Deserialize, Serialize};

use crate::error::SiteError;

/// Site identity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SiteInfo {
    /// Owner / site name shown in the header.
    pub name: String,
    /// Optional one-line description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
}

/// A navbar link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Visible label.
    pub label: String,
    /// Route or URL.
    pub href: String,
}

impl NavEntry {
    /// Returns true if this entry should be highlighted on `path`.
    ///
    /// The home route only matches itself; other routes also match their
    /// sub-paths.
    #[must_use]
    pub fn is_active(&self, path: &str) -> bool {
        let path = path.trim_end_matches('/');
        let href = self.href.trim_end_matches('/');
        if href.is_empty() {
            return path.is_empty();
        }
        path == href
            || path
                .strip_prefix(href)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// A social / contact link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Display name.
    pub name: String,
    /// Target URL.
    pub url: String,
}

/// The whole site config.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site identity.
    #[serde(default)]
    pub site: SiteInfo,
    /// Navbar entries, in order.
    #[serde(default)]
    pub navbar: Vec<NavEntry>,
    /// Social links, in order.
    #[serde(default)]
    pub social: Vec<SocialLink>,
    /// Hover preview list entries, in order.
    #[serde(default)]
    pub projects: Vec<PreviewItem>,
    /// Particle network tuning.
    #[serde(default)]
    pub background: NetworkConfig,
    /// Hover preview timing and placement.
    #[serde(default)]
    pub preview: PreviewMenuConfig,
}

impl SiteConfig {
    /// Parses and validates a config.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML, does not match the
    /// schema, or fails validation.
    pub fn from_toml_str(text: &str) -> Result<Self, SiteError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or
    /// [`Self::from_toml_str`] fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SiteError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SiteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            "Loaded site config from {} ({} projects)",
            path.display(),
            config.projects.len()
        );
        Ok(config)
    }

    /// Checks cross-field rules serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns the first rule violated.
    pub fn validate(&self) -> Result<(), SiteError> {
        let mut ids = HashSet::with_capacity(self.projects.len());
        for project in &self.projects {
            if !ids.insert(project.id) {
                tracing::warn!("Rejected site config: duplicate project id {}", project.id);
                return Err(SiteError::DuplicateProject(project.id));
            }
        }

        if let Some(index) = self
            .navbar
            .iter()
            .position(|entry| entry.label.trim().is_empty() || entry.href.trim().is_empty())
        {
            tracing::warn!("Rejected site config: incomplete navbar entry {}", index);
            return Err(SiteError::IncompleteNavEntry(index));
        }

        self.background.validate().map_err(|err| {
            tracing::warn!("Rejected site config: {}", err);
            SiteError::Background(err)
        })
    }

    /// Navbar entry highlighted on `path`, if any.
    #[must_use]
    pub fn active_nav(&self, path: &str) -> Option<&NavEntry> {
        self.navbar.iter().find(|entry| entry.is_active(path))
    }

    /// A fresh hover preview menu over the configured projects.
    #[must_use]
    pub fn preview_menu(&self) -> PreviewMenu {
        PreviewMenu::new(self.projects.clone(), self.preview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav(href: &str) -> NavEntry {
        NavEntry {
            label: "x".into(),
            href: href.into(),
        }
    }

    #[test]
    fn test_home_only_matches_home() {
        let home = nav("/");
        assert!(home.is_active("/"));
        assert!(home.is_active(""));
        assert!(!home.is_active("/About"));
    }

    #[test]
    fn test_section_matches_subpaths() {
        let projects = nav("/Project");
        assert!(projects.is_active("/Project"));
        assert!(projects.is_active("/Project/"));
        assert!(projects.is_active("/Project/3"));
        assert!(!projects.is_active("/Projects"));
        assert!(!projects.is_active("/About"));
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert!(config.projects.is_empty());
        assert_eq!(config.background, NetworkConfig::default());
    }
}
