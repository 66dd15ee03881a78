//! # NEONFOLIO Shared
//!
//! Common types used by the UI widgets and the background effects.
//!
//! ## RULE
//!
//! This crate must NEVER depend on a drawing surface or a host binding.
//! If you need colors or render commands, put them in `neonfolio_ui`.

#![deny(unsafe_code)]

pub mod constants;
pub mod math;

pub use constants::{
    DESKTOP_MIN_WIDTH, FRAME_RATE, LEAVE_DELAY, MAX_FRAME_DELTA, MAX_PARTICLES, SWAP_DELAY,
    TABLET_MIN_WIDTH, VIEWPORT_INSET,
};
pub use math::Vec2;
