//! Auto-dismissing status banner.
//!
//! `Idle -> Showing(message) -> Idle`. Each `show` arms a new generation;
//! an expiry only clears the banner if it belongs to the current
//! generation, so a superseded timer is a no-op.

/// How long a banner stays visible.
pub const BANNER_MILLIS: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Error,
    Success,
}

/// Token identifying the timer armed by one `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken(u64);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Banner {
    #[default]
    Idle,
    Showing { kind: BannerKind, message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BannerState {
    banner: Banner,
    generation: u64,
}

impl BannerState {
    pub fn current(&self) -> &Banner {
        &self.banner
    }

    /// Show a message, replacing any visible one. Returns the token the
    /// caller's timer must present to `expire`.
    pub fn show(&mut self, kind: BannerKind, message: impl Into<String>) -> TimerToken {
        self.generation += 1;
        self.banner = Banner::Showing {
            kind,
            message: message.into(),
        };
        TimerToken(self.generation)
    }

    pub fn error(&mut self, message: impl Into<String>) -> TimerToken {
        self.show(BannerKind::Error, message)
    }

    pub fn success(&mut self, message: impl Into<String>) -> TimerToken {
        self.show(BannerKind::Success, message)
    }

    /// Timer fired. Returns whether the banner was dismissed.
    pub fn expire(&mut self, token: TimerToken) -> bool {
        if token.0 != self.generation || self.banner == Banner::Idle {
            return false;
        }
        self.banner = Banner::Idle;
        true
    }

    /// Dismiss immediately and disarm any pending timer.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.banner = Banner::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_then_expire() {
        let mut state = BannerState::default();
        assert_eq!(state.current(), &Banner::Idle);
        let token = state.error("Server error");
        assert_eq!(
            state.current(),
            &Banner::Showing {
                kind: BannerKind::Error,
                message: "Server error".to_string()
            }
        );
        assert!(state.expire(token));
        assert_eq!(state.current(), &Banner::Idle);
    }

    #[test]
    fn test_superseded_timer_is_disarmed() {
        let mut state = BannerState::default();
        let first = state.error("Both Asset and Threat are required");
        let second = state.success("Risk added successfully");
        assert!(!state.expire(first));
        assert!(matches!(
            state.current(),
            Banner::Showing { kind: BannerKind::Success, .. }
        ));
        assert!(state.expire(second));
    }

    #[test]
    fn test_clear_disarms() {
        let mut state = BannerState::default();
        let token = state.success("ok");
        state.clear();
        let later = state.error("again");
        assert!(!state.expire(token));
        assert!(state.expire(later));
        assert!(!state.expire(later));
    }
}
