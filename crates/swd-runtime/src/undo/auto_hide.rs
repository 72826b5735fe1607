#![forbid(unsafe_code)]

//! Token-based auto-hide timer.
//!
//! The coordinator never cancels a scheduled fire. Instead every interrupt
//! bumps a token, and a fire only acts if it carries the current token.
//!
//! # Invariants
//!
//! - Exactly one increment per [`AutoHideTimer::interrupt`].
//! - A token handed out before an interrupt never matches again.

use std::time::Duration;

/// Default delay before the undo prompt hides itself.
pub const DEFAULT_AUTO_HIDE_DELAY: Duration = Duration::from_millis(5_000);

/// Opaque identity of one scheduled auto-hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HideToken(pub u64);

impl std::fmt::Display for HideToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Current token plus the configured delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoHideTimer {
    token: HideToken,
    delay: Duration,
}

impl Default for AutoHideTimer {
    fn default() -> Self {
        Self::new(DEFAULT_AUTO_HIDE_DELAY)
    }
}

impl AutoHideTimer {
    /// Create a timer with the given delay.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            token: HideToken(0),
            delay,
        }
    }

    /// Invalidate every outstanding fire and return the new token.
    pub fn interrupt(&mut self) -> HideToken {
        self.token = HideToken(self.token.0.wrapping_add(1));
        self.token
    }

    /// Token a fire scheduled now would carry.
    #[inline]
    #[must_use]
    pub const fn current(&self) -> HideToken {
        self.token
    }

    /// Whether a fire carrying `token` should act.
    #[inline]
    #[must_use]
    pub fn is_current(&self, token: HideToken) -> bool {
        self.token == token
    }

    /// Delay between scheduling and firing.
    #[inline]
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Change the delay for future schedules.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interrupt_invalidates_older_tokens() {
        let mut timer = AutoHideTimer::default();
        let t0 = timer.current();
        assert!(timer.is_current(t0));
        let t1 = timer.interrupt();
        assert_eq!(t1, HideToken(t0.0 + 1));
        assert!(!timer.is_current(t0));
        assert!(timer.is_current(t1));
    }

    #[test]
    fn delay_defaults_to_five_seconds() {
        let mut timer = AutoHideTimer::default();
        assert_eq!(timer.delay(), Duration::from_secs(5));
        timer.set_delay(Duration::from_millis(250));
        assert_eq!(timer.delay(), Duration::from_millis(250));
    }
}
