//! Interactive widgets.
//!
//! The project list with its floating hover preview.

mod item;
mod placement;
mod preview_menu;

pub use item::{Navigation, PreviewItem};
pub use placement::{Placement, PlacementConfig};
pub use preview_menu::{MenuState, PreviewFrame, PreviewMenu, PreviewMenuConfig};
