//! # Hover Preview Menu
//!
//! A vertical list of items. Hovering one shows a floating image that follows
//! the pointer.
//!
//! ## States
//!
//! - **Idle**: nothing hovered, nothing rendered.
//! - **Showing**: one item's preview is visible and tracks the pointer.
//! - **HidingForSwap**: a different item was entered; the current preview is
//!   fading out and the swap happens at `swap_at`.
//! - **PendingClear**: the pointer left; the preview is fading out and is
//!   dropped at `clear_at` unless an item is entered again first.
//!
//! ## Timing
//!
//! The host supplies `now` (time since mount) on every call and calls
//! [`PreviewMenu::tick`] when [`PreviewMenu::next_deadline`] passes. Swapping
//! between two items therefore always goes through a hidden interval: the
//! content never changes while the preview is visible.

use std::time::Duration;

use neonfolio_shared::{Vec2, LEAVE_DELAY, SWAP_DELAY};
use serde::{Deserialize, Serialize};

use super::item::{Navigation, PreviewItem};
use super::placement::PlacementConfig;
use crate::animation::FadeTransition;
use crate::layout::{Breakpoint, Rect, Viewport};
use crate::render::{CommandBuffer, RenderCommand};
use crate::style::Color;

/// Timing and placement knobs for the preview menu.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewMenuConfig {
    /// Fade-out time before swapping to another item.
    #[serde(with = "millis")]
    pub swap_delay: Duration,
    /// Grace period after leaving before the preview is cleared.
    #[serde(with = "millis")]
    pub leave_delay: Duration,
    /// Preview size/offset per breakpoint.
    pub placement: PlacementConfig,
}

impl Default for PreviewMenuConfig {
    fn default() -> Self {
        Self {
            swap_delay: SWAP_DELAY,
            leave_delay: LEAVE_DELAY,
            placement: PlacementConfig::default(),
        }
    }
}

/// Durations are written as integer milliseconds in config files.
mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

/// Hover state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    /// Nothing hovered.
    Idle,
    /// `item` is hovered and its preview is shown.
    Showing {
        /// Index of the shown item.
        item: usize,
    },
    /// Fading `current` out before showing `next`.
    HidingForSwap {
        /// Item whose preview is fading out.
        current: usize,
        /// Item to show once the fade-out is done.
        next: usize,
        /// When the swap happens.
        swap_at: Duration,
    },
    /// The pointer left `item`; cleared at `clear_at`.
    PendingClear {
        /// Item whose preview is fading out.
        item: usize,
        /// When the preview is dropped.
        clear_at: Duration,
    },
}

impl MenuState {
    fn name(self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Showing { .. } => "SHOWING",
            Self::HidingForSwap { .. } => "HIDING_FOR_SWAP",
            Self::PendingClear { .. } => "PENDING_CLEAR",
        }
    }
}

/// What the floating preview looks like this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewFrame<'a> {
    /// Item whose image is displayed.
    pub item: &'a PreviewItem,
    /// Visibility flag (target of the fade).
    pub visible: bool,
    /// Animated opacity (0-1).
    pub opacity: f32,
    /// Animated scale.
    pub scale: f32,
    /// Animated tilt in degrees.
    pub tilt_deg: f32,
    /// Unscaled placement rectangle.
    pub bounds: Rect,
}

/// The hover preview list.
pub struct PreviewMenu {
    items: Vec<PreviewItem>,
    config: PreviewMenuConfig,
    state: MenuState,
    visible: bool,
    /// Pointer position the preview is placed against.
    pointer: Vec2,
    /// Pointer position captured when the pending swap target was entered.
    swap_pointer: Vec2,
    fade: FadeTransition,
    /// Row under the pointer during the last `track` call.
    hovered_row: Option<usize>,
}

impl PreviewMenu {
    /// Creates a menu over a fixed item list.
    #[must_use]
    pub fn new(items: Vec<PreviewItem>, config: PreviewMenuConfig) -> Self {
        Self {
            items,
            config,
            state: MenuState::Idle,
            visible: false,
            pointer: Vec2::ZERO,
            swap_pointer: Vec2::ZERO,
            fade: FadeTransition::hidden(),
            hovered_row: None,
        }
    }

    /// The items, in display order.
    #[must_use]
    pub fn items(&self) -> &[PreviewItem] {
        &self.items
    }

    /// Index of the item with `id`.
    #[must_use]
    pub fn index_of(&self, id: u32) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Visibility flag (what the fade is heading toward).
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Pointer position the preview is placed against.
    #[must_use]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Item whose image is currently in the preview, if any.
    #[must_use]
    pub fn displayed_item(&self) -> Option<&PreviewItem> {
        let index = match self.state {
            MenuState::Idle => return None,
            MenuState::Showing { item } | MenuState::PendingClear { item, .. } => item,
            MenuState::HidingForSwap { current, .. } => current,
        };
        self.items.get(index)
    }

    /// Earliest pending timer, if any. The host should call [`Self::tick`] then.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        match self.state {
            MenuState::HidingForSwap { swap_at, .. } => Some(swap_at),
            MenuState::PendingClear { clear_at, .. } => Some(clear_at),
            MenuState::Idle | MenuState::Showing { .. } => None,
        }
    }

    /// Pointer entered row `index`.
    pub fn enter(&mut self, index: usize, pointer: Vec2, now: Duration) {
        if index >= self.items.len() {
            tracing::debug!("Preview enter ignored: row {} of {}", index, self.items.len());
            return;
        }

        let next_state = match self.state {
            MenuState::Idle => {
                self.pointer = pointer;
                MenuState::Showing { item: index }
            }
            MenuState::Showing { item } | MenuState::PendingClear { item, .. } if item == index => {
                self.pointer = pointer;
                MenuState::Showing { item }
            }
            MenuState::HidingForSwap { current, .. } if current == index => {
                self.pointer = pointer;
                MenuState::Showing { item: current }
            }
            MenuState::Showing { item } | MenuState::PendingClear { item, .. } => {
                self.swap_pointer = pointer;
                MenuState::HidingForSwap {
                    current: item,
                    next: index,
                    swap_at: now + self.config.swap_delay,
                }
            }
            MenuState::HidingForSwap {
                current, swap_at, ..
            } => {
                // Fade-out already under way; just retarget
                self.swap_pointer = pointer;
                MenuState::HidingForSwap {
                    current,
                    next: index,
                    swap_at,
                }
            }
        };

        let visible = matches!(next_state, MenuState::Showing { .. });
        self.transition_to(next_state, visible);
    }

    /// Pointer left the hovered row.
    pub fn leave(&mut self, now: Duration) {
        let item = match self.state {
            MenuState::Idle => return,
            MenuState::Showing { item }
            | MenuState::PendingClear { item, .. }
            | MenuState::HidingForSwap { current: item, .. } => item,
        };
        let clear_at = now + self.config.leave_delay;
        self.transition_to(MenuState::PendingClear { item, clear_at }, false);
    }

    /// Pointer moved over the list. Only a visible preview follows it.
    pub fn pointer_moved(&mut self, pointer: Vec2) {
        if self.visible && matches!(self.state, MenuState::Showing { .. }) {
            self.pointer = pointer;
        }
    }

    /// Fires any timer whose deadline has passed.
    ///
    /// Returns true if the state changed.
    pub fn tick(&mut self, now: Duration) -> bool {
        match self.state {
            MenuState::HidingForSwap { next, swap_at, .. } if now >= swap_at => {
                self.pointer = self.swap_pointer;
                self.transition_to(MenuState::Showing { item: next }, true);
                true
            }
            MenuState::PendingClear { clear_at, .. } if now >= clear_at => {
                self.transition_to(MenuState::Idle, false);
                self.fade.reset();
                true
            }
            _ => false,
        }
    }

    /// Advances the fade animations by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.fade.update(dt);
    }

    /// Returns true once the fade has stopped moving.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.fade.is_settled()
    }

    /// Clicking row `index`: where to go, if the item has a link.
    #[must_use]
    pub fn activate(&self, index: usize) -> Option<Navigation> {
        self.items.get(index).and_then(PreviewItem::navigation)
    }

    /// Row containing `pointer`, if any.
    #[must_use]
    pub fn hit_test(rows: &[Rect], pointer: Vec2) -> Option<usize> {
        rows.iter().position(|row| row.contains(pointer))
    }

    /// Feeds raw pointer motion over the list, deriving enter/leave per row.
    pub fn track(&mut self, rows: &[Rect], pointer: Vec2, now: Duration) {
        let hit = Self::hit_test(rows, pointer);
        match (self.hovered_row, hit) {
            (Some(prev), Some(row)) if prev == row => self.pointer_moved(pointer),
            (prev, row) => {
                if prev.is_some() {
                    self.leave(now);
                }
                if let Some(row) = row {
                    self.enter(row, pointer, now);
                }
            }
        }
        self.hovered_row = hit;
    }

    /// Current preview, or `None` when idle.
    #[must_use]
    pub fn preview(&self, viewport: &Viewport) -> Option<PreviewFrame<'_>> {
        let item = self.displayed_item()?;
        Some(PreviewFrame {
            item,
            visible: self.visible,
            opacity: self.fade.opacity.value(),
            scale: self.fade.scale.value(),
            tilt_deg: self.fade.tilt.value(),
            bounds: self.config.placement.place(self.pointer, viewport),
        })
    }

    /// Emits the floating preview: drop shadow, image, title caption.
    pub fn render(&self, viewport: &Viewport, commands: &mut CommandBuffer) {
        let Some(frame) = self.preview(viewport) else {
            return;
        };
        if frame.opacity <= f32::EPSILON {
            return;
        }

        let bounds = frame.bounds.scale_about_center(frame.scale);
        let opacity = frame.opacity;

        commands.push(RenderCommand::Rect {
            bounds: bounds.translate(4.0, 4.0),
            color: Color::BLACK.with_alpha(0.2 * opacity),
            corner_radius: 8.0,
        });
        commands.push(RenderCommand::Image {
            bounds,
            source: frame.item.image.clone(),
            opacity,
            rotation_deg: frame.tilt_deg,
        });

        let (caption_height, font_size) = match viewport.breakpoint() {
            Breakpoint::Mobile => (40.0, 14.0),
            Breakpoint::Tablet | Breakpoint::Desktop => (48.0, 16.0),
        };
        let caption = Rect::new(
            bounds.x,
            bounds.bottom() - caption_height,
            bounds.width,
            caption_height,
        );
        commands.push(RenderCommand::Rect {
            bounds: caption,
            color: Color::BLACK.with_alpha(0.7 * opacity),
            corner_radius: 0.0,
        });
        commands.push(RenderCommand::Text {
            text: frame.item.title.clone(),
            position: Vec2::new(caption.x + 12.0, caption.y + (caption_height - font_size) * 0.5),
            color: Color::WHITE.with_alpha(opacity),
            font_size,
        });
    }

    fn transition_to(&mut self, next: MenuState, visible: bool) {
        if next != self.state {
            tracing::debug!(
                "Preview transition: {} -> {} (visible: {})",
                self.state.name(),
                next.name(),
                visible
            );
        }
        self.state = next;
        if visible != self.visible {
            self.visible = visible;
            self.fade.set_visible(visible);
        }
    }
}
