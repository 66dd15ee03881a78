//! # NEONFOLIO
//!
//! Motion core of a personal portfolio site, integrating all crates.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                          NEONFOLIO                            │
//! ├───────────────────────────────────────────────────────────────┤
//! │                                                               │
//! │  ┌──────────────────┐            ┌──────────────────┐         │
//! │  │ neonfolio_ui     │            │ neonfolio_effects│         │
//! │  │  • Preview menu  │            │  • Particles     │         │
//! │  │  • Placement     │<───────────│  • Simulation    │         │
//! │  │  • DrawSurface   │  commands  │  • Host seam     │         │
//! │  └────────┬─────────┘            └────────┬─────────┘         │
//! │           │                               │                   │
//! │           └────────────┬──────────────────┘                   │
//! │                        v                                      │
//! │               ┌──────────────────┐                            │
//! │               │ neonfolio        │                            │
//! │               │  • Site TOML     │                            │
//! │               │  • Intro gate    │                            │
//! │               │  • web (canvas)  │                            │
//! │               └──────────────────┘                            │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `site`: site config loading and validation
//! - `intro`: once-per-session intro gate and preloader timeline
//! - `web`: browser host binding (feature `web`)

#![deny(unsafe_code)]

pub mod error;
pub mod intro;
pub mod site;

#[cfg(feature = "web")]
pub mod web;

// Re-export the crates
pub use neonfolio_effects as effects;
pub use neonfolio_shared as shared;
pub use neonfolio_ui as ui;

// Re-export commonly used types
pub use error::SiteError;
pub use intro::{
    IntroGate, IntroPlan, MemoryFlags, PreloaderPhase, PreloaderTimeline, SessionFlags,
    HOME_ROUTE, INTRO_FLAG,
};
pub use neonfolio_effects::{NetworkConfig, ParticleNetwork};
pub use neonfolio_ui::{PreviewItem, PreviewMenu, PreviewMenuConfig};
pub use site::{NavEntry, SiteConfig, SiteInfo, SocialLink};
