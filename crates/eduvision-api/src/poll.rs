//! Bounded polling for slow backend artifacts (audio, rendered video).
//!
//! Polling never runs unbounded: each loop carries a fixed budget and
//! reports a terminal state once it is spent, which the UI surfaces as an
//! error instead of spinning forever.

/// Verdict after one poll attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollStatus {
    /// Keep polling after the configured interval.
    Continue,
    /// Budget spent; show the terminal error state.
    Exhausted,
}

/// Countdown over a fixed number of poll attempts.
#[derive(Debug, Clone)]
pub struct PollBudget {
    interval_ms: u32,
    remaining: u32,
}

impl PollBudget {
    pub fn new(interval_ms: u32, attempts: u32) -> Self {
        Self {
            interval_ms,
            remaining: attempts,
        }
    }

    /// Budget for audio availability: 30 polls at 500 ms.
    pub fn audio() -> Self {
        Self::new(500, 30)
    }

    /// Budget for rendered video availability: 300 polls at 1 s.
    pub fn video() -> Self {
        Self::new(1000, 300)
    }

    /// Milliseconds the host should wait between attempts.
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Attempts left before giving up.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Record one failed attempt.
    pub fn tick(&mut self) -> PollStatus {
        if self.remaining == 0 {
            return PollStatus::Exhausted;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            PollStatus::Exhausted
        } else {
            PollStatus::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausts_after_exact_attempt_count() {
        let mut budget = PollBudget::new(500, 3);
        assert_eq!(budget.tick(), PollStatus::Continue);
        assert_eq!(budget.tick(), PollStatus::Continue);
        assert_eq!(budget.tick(), PollStatus::Exhausted);
        // Further ticks stay exhausted.
        assert_eq!(budget.tick(), PollStatus::Exhausted);
    }

    #[test]
    fn presets_match_documented_budgets() {
        let audio = PollBudget::audio();
        assert_eq!(audio.interval_ms(), 500);
        assert_eq!(audio.remaining(), 30);

        let video = PollBudget::video();
        assert_eq!(video.interval_ms(), 1000);
        assert_eq!(video.remaining(), 300);
    }
}
