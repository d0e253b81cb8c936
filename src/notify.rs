//! User-facing notifications
//!
//! Every success and error shown to the user goes through [`Notifier`].
//! [`Banner`] models the auto-dismissing banner those notices appear in.

use std::time::{Duration, Instant};

/// How long a notice stays fully visible
pub const DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Length of the fade-out once dismissal starts
pub const FADE_DURATION: Duration = Duration::from_millis(500);

/// Kind of notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Something failed
    Error,
    /// Something succeeded
    Success,
}

/// A message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Kind of notice
    pub kind: NoticeKind,
    /// Message text
    pub message: String,
}

impl Notice {
    /// Error notice
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    /// Success notice
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }
}

/// Reporting interface for user-visible notices
pub trait Notifier: Send + Sync {
    /// Show a notice
    fn notify(&self, notice: Notice);

    /// Show an error notice
    fn error(&self, message: &str) {
        self.notify(Notice::error(message));
    }

    /// Show a success notice
    fn success(&self, message: &str) {
        self.notify(Notice::success(message));
    }
}

/// Visibility of the banner at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerPhase {
    /// Fully visible
    Visible,
    /// Fading out
    Fading,
    /// Not shown
    Hidden,
}

/// Auto-dismissing notification banner
///
/// A notice is visible for [`DISMISS_AFTER`], then fades for
/// [`FADE_DURATION`]. Showing a new notice replaces the current one and
/// restarts the timer.
#[derive(Debug, Default)]
pub struct Banner {
    current: Option<(Notice, Instant)>,
}

impl Banner {
    /// Create a hidden banner
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Show `notice` at `now`, replacing any pending one
    pub fn show(&mut self, notice: Notice, now: Instant) {
        self.current = Some((notice, now));
    }

    /// Banner phase at `now`
    pub fn phase(&self, now: Instant) -> BannerPhase {
        let Some((_, shown_at)) = &self.current else {
            return BannerPhase::Hidden;
        };

        let elapsed = now.saturating_duration_since(*shown_at);
        if elapsed < DISMISS_AFTER {
            BannerPhase::Visible
        } else if elapsed < DISMISS_AFTER + FADE_DURATION {
            BannerPhase::Fading
        } else {
            BannerPhase::Hidden
        }
    }

    /// Notice on screen at `now` (visible or fading)
    pub fn displayed(&self, now: Instant) -> Option<&Notice> {
        match self.phase(now) {
            BannerPhase::Hidden => None,
            BannerPhase::Visible | BannerPhase::Fading => {
                self.current.as_ref().map(|(notice, _)| notice)
            }
        }
    }
}
