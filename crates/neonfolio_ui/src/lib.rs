//! # NEONFOLIO UI System
//!
//! Drawing primitives and interactive widgets for the portfolio pages:
//! - A backend-agnostic 2D command stream (`RenderCommand` + `DrawSurface`)
//! - Exponential fade animations
//! - The hover preview menu (item list with a floating, pointer-following image)
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                       UI PIPELINE                          │
//! ├────────────────────────────────────────────────────────────┤
//! │  Pointer Events → Preview FSM → Placement → Render Commands │
//! │        ↓               ↓            ↓              ↓        │
//! │   Hit Testing    Timer Ticks   Breakpoints   DrawSurface    │
//! └────────────────────────────────────────────────────────────┘
//! ```

#![deny(unsafe_code)]

pub mod animation;
pub mod input;
pub mod layout;
pub mod render;
pub mod style;
pub mod widget;

pub use animation::{Animation, Easing};
pub use input::PointerState;
pub use layout::{Breakpoint, Rect, RowStack, Viewport};
pub use render::{CommandBuffer, DrawSurface, GradientStop, RenderCommand};
pub use style::{Color, ColorError};
pub use widget::{
    MenuState, Navigation, Placement, PlacementConfig, PreviewFrame, PreviewItem, PreviewMenu,
    PreviewMenuConfig,
};
