//! # Site Error Types

use std::path::PathBuf;

use neonfolio_effects::ConfigError;
use thiserror::Error;

/// Errors that can occur while loading the site config.
#[derive(Error, Debug)]
pub enum SiteError {
    /// The config file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or does not match the schema.
    #[error("invalid site config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Two projects share an id.
    #[error("duplicate project id {0}")]
    DuplicateProject(u32),

    /// A navbar entry has an empty label or href.
    #[error("navbar entry {0} is missing a label or href")]
    IncompleteNavEntry(usize),

    /// The background network config was rejected.
    #[error("invalid background: {0}")]
    Background(#[from] ConfigError),
}
