//! Request-code cooldown.

/// Countdown phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    /// Not running; a new code may be requested.
    Idle,
    /// Running; requests are disabled.
    Counting,
}

/// One-shot countdown decremented once per tick.
///
/// Reaching zero returns to [`CountdownState::Idle`] and resets `remaining`
/// to the full duration, so a full cycle takes exactly `duration` ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    duration: u32,
    remaining: u32,
    state: CountdownState,
}

impl Countdown {
    /// Default cooldown in seconds.
    pub const DEFAULT_SECONDS: u32 = 60;

    /// Creates idle countdown. Zero is clamped to one tick.
    #[must_use]
    pub fn new(duration: u32) -> Self {
        let duration = duration.max(1);
        Self {
            duration,
            remaining: duration,
            state: CountdownState::Idle,
        }
    }

    /// Starts or restarts from the full duration.
    pub fn start(&mut self) {
        self.state = CountdownState::Counting;
        self.remaining = self.duration;
    }

    /// Advances one tick. Returns `true` when this tick finished the countdown.
    pub fn tick(&mut self) -> bool {
        if self.state != CountdownState::Counting {
            return false;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.stop();
            return true;
        }
        false
    }

    /// Stops and resets.
    pub fn stop(&mut self) {
        self.state = CountdownState::Idle;
        self.remaining = self.duration;
    }

    /// Returns whether the countdown is running.
    #[must_use]
    pub const fn is_counting(&self) -> bool {
        matches!(self.state, CountdownState::Counting)
    }

    /// Returns remaining ticks.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SECONDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let countdown = Countdown::default();
        assert_eq!(countdown.state, CountdownState::Idle);
        assert_eq!(countdown.remaining(), 60);
    }

    #[test]
    fn test_full_cycle_takes_sixty_ticks() {
        let mut countdown = Countdown::default();
        countdown.start();

        for expected in (1..60).rev() {
            assert!(!countdown.tick());
            assert!(countdown.is_counting());
            assert_eq!(countdown.remaining(), expected);
        }

        assert!(countdown.tick());
        assert_eq!(countdown.state, CountdownState::Idle);
        assert_eq!(countdown.remaining(), 60);
    }

    #[test]
    fn test_tick_while_idle_is_noop() {
        let mut countdown = Countdown::default();
        assert!(!countdown.tick());
        assert_eq!(countdown.remaining(), 60);
        assert!(!countdown.is_counting());
    }

    #[test]
    fn test_stop_resets() {
        let mut countdown = Countdown::new(10);
        countdown.start();
        countdown.tick();
        countdown.tick();
        countdown.stop();

        assert_eq!(countdown.state, CountdownState::Idle);
        assert_eq!(countdown.remaining(), 10);
    }

    #[test]
    fn test_zero_duration_is_clamped() {
        let mut countdown = Countdown::new(0);
        countdown.start();
        assert!(countdown.tick());
        assert_eq!(countdown.remaining(), 1);
    }
}
