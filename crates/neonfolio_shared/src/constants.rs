//! # Tunables
//!
//! Timing and layout constants shared by the widgets and the effects.
//!
//! **NOTE:** `SWAP_DELAY` and `LEAVE_DELAY` are independent knobs.
//! Neither is derived from the other.

use std::time::Duration;

// =============================================================================
// FRAME TIMING
// =============================================================================

/// Reference frame rate the per-frame constants are tuned for.
pub const FRAME_RATE: f32 = 60.0;

/// Largest delta a single simulation step accepts (seconds).
///
/// A tab coming back from the background reports huge deltas;
/// stepping them in one go would fling every particle off-screen.
pub const MAX_FRAME_DELTA: f32 = 0.1;

// =============================================================================
// PARTICLE FIELD
// =============================================================================

/// Most particles one network seeds.
///
/// Links are checked pairwise every frame, so the per-frame cost grows
/// with the square of the count.
pub const MAX_PARTICLES: usize = 300;

// =============================================================================
// HOVER PREVIEW
// =============================================================================

/// Fade-out time before the preview swaps to a different item.
pub const SWAP_DELAY: Duration = Duration::from_millis(100);

/// Grace period after leaving an item before the preview is cleared.
pub const LEAVE_DELAY: Duration = Duration::from_millis(200);

/// Minimum distance between a floating preview and the viewport edges (px).
pub const VIEWPORT_INSET: f32 = 20.0;

// =============================================================================
// BREAKPOINTS
// =============================================================================

/// Viewports at least this wide use the tablet layout (px).
pub const TABLET_MIN_WIDTH: f32 = 768.0;

/// Viewports at least this wide use the desktop layout (px).
pub const DESKTOP_MIN_WIDTH: f32 = 1024.0;
