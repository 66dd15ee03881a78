//! # Intro Gate
//!
//! The home page plays a short count-up intro the first time it is opened in
//! a browser session. Session state is injected through [`SessionFlags`] so
//! the gate can be driven by `sessionStorage` in the browser or a map in tests.
//!
//! ## Timeline
//!
//! ```text
//! 0s        1s                 3s          4s
//! │ count   │ hold at 100      │ screen    │ hidden, content shown
//! │ 0..100  │                  │ fades     │
//! ```

use std::collections::HashMap;
use std::time::Duration;

/// Session flag recording that the intro was shown.
///
/// Shared with the site's existing client, so a session that already saw
/// the intro there skips it here too.
pub const INTRO_FLAG: &str = "hasSeenPreloader";

/// Route the intro plays on.
pub const HOME_ROUTE: &str = "/";

/// Per-session key/value flags.
pub trait SessionFlags {
    /// Value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory session flags.
#[derive(Debug, Clone, Default)]
pub struct MemoryFlags {
    values: HashMap<String, String>,
}

impl MemoryFlags {
    /// Creates empty flags (a fresh session).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionFlags for MemoryFlags {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }
}

/// Whether to play the intro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroPlan {
    /// Show the preloader, then the content.
    Play,
    /// Show the content immediately.
    Skip,
}

/// Decides whether the intro plays and when content may show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroGate {
    /// How long content is held back when the intro plays.
    pub duration: Duration,
}

impl Default for IntroGate {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs(4),
        }
    }
}

impl IntroGate {
    /// Plan for opening `route` with the given session state.
    #[must_use]
    pub fn resolve<F: SessionFlags + ?Sized>(&self, route: &str, flags: &F) -> IntroPlan {
        if route == HOME_ROUTE && flags.get(INTRO_FLAG).is_none() {
            IntroPlan::Play
        } else {
            IntroPlan::Skip
        }
    }

    /// Records that the intro was shown in this session.
    pub fn finish<F: SessionFlags + ?Sized>(&self, flags: &mut F) {
        flags.set(INTRO_FLAG, "true");
        tracing::debug!("Intro finished");
    }

    /// Returns true once page content may be shown.
    #[must_use]
    pub fn content_visible(&self, plan: IntroPlan, elapsed: Duration) -> bool {
        match plan {
            IntroPlan::Skip => true,
            IntroPlan::Play => elapsed >= self.duration,
        }
    }
}

/// What the preloader shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreloaderPhase {
    /// Counting up; the number shown.
    Counting(u32),
    /// Count done, holding at 100.
    Holding,
    /// Screen and text fading out.
    Fading,
    /// Gone.
    Hidden,
}

/// Preloader timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreloaderTimeline {
    /// Count-up duration.
    pub count: Duration,
    /// Delay after the count before the screen starts fading.
    pub screen_fade_after: Duration,
    /// Delay after the count before the preloader is removed.
    pub hide_after: Duration,
}

impl Default for PreloaderTimeline {
    fn default() -> Self {
        Self {
            count: Duration::from_secs(1),
            screen_fade_after: Duration::from_secs(2),
            hide_after: Duration::from_secs(3),
        }
    }
}

impl PreloaderTimeline {
    /// Target value of the count-up.
    pub const COUNT_TO: u32 = 100;

    /// Phase at `elapsed` since the preloader appeared.
    #[must_use]
    pub fn phase_at(&self, elapsed: Duration) -> PreloaderPhase {
        if elapsed < self.count {
            let t = elapsed.as_secs_f32() / self.count.as_secs_f32();
            return PreloaderPhase::Counting((t * Self::COUNT_TO as f32).floor() as u32);
        }

        let after_count = elapsed - self.count;
        if after_count < self.screen_fade_after {
            PreloaderPhase::Holding
        } else if after_count < self.hide_after {
            PreloaderPhase::Fading
        } else {
            PreloaderPhase::Hidden
        }
    }

    /// Total time until the preloader is gone.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.count + self.hide_after
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_flags() {
        let mut flags = MemoryFlags::new();
        assert_eq!(flags.get("x"), None);
        flags.set("x", "1");
        assert_eq!(flags.get("x").as_deref(), Some("1"));
    }

    #[test]
    fn test_session_flagged_by_existing_client_skips() {
        let mut flags = MemoryFlags::new();
        flags.set("hasSeenPreloader", "true");
        assert_eq!(IntroGate::default().resolve("/", &flags), IntroPlan::Skip);

        let mut fresh = MemoryFlags::new();
        IntroGate::default().finish(&mut fresh);
        assert_eq!(fresh.get("hasSeenPreloader").as_deref(), Some("true"));
    }

    #[test]
    fn test_content_gating() {
        let gate = IntroGate::default();
        assert!(!gate.content_visible(IntroPlan::Play, Duration::from_millis(3_999)));
        assert!(gate.content_visible(IntroPlan::Play, Duration::from_secs(4)));
        assert!(gate.content_visible(IntroPlan::Skip, Duration::ZERO));
    }
}
