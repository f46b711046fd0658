//! Countdown clock.
//!
//! A pure function of wall time: `remaining = max(0, budget - (now - start))`.
//! Callers sample a monotonic millisecond clock every frame and pass it in;
//! nothing here counts ticks, so the frame cadence never affects the result.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameClock {
    budget_ms: u64,
    start_ms: u64,
}

impl GameClock {
    pub fn new(budget_secs: u32, now_ms: u64) -> Self {
        Self {
            budget_ms: u64::from(budget_secs) * 1000,
            start_ms: now_ms,
        }
    }

    /// Start counting down from the full budget at `now_ms`.
    pub fn restart(&mut self, now_ms: u64) {
        self.start_ms = now_ms;
    }

    pub fn set_budget(&mut self, budget_secs: u32) {
        self.budget_ms = u64::from(budget_secs) * 1000;
    }

    pub fn budget_secs(&self) -> u32 {
        (self.budget_ms / 1000) as u32
    }

    /// Milliseconds left, floored at zero.
    ///
    /// A `now_ms` earlier than the start counts as no time elapsed.
    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        self.budget_ms.saturating_sub(elapsed)
    }

    pub fn is_expired(&self, now_ms: u64) -> bool {
        self.remaining_ms(now_ms) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_from_budget() {
        let clock = GameClock::new(30, 0);
        assert_eq!(clock.remaining_ms(0), 30_000);
        assert_eq!(clock.remaining_ms(12_500), 17_500);
    }

    #[test]
    fn floors_at_zero() {
        let clock = GameClock::new(30, 0);
        assert_eq!(clock.remaining_ms(30_000), 0);
        assert_eq!(clock.remaining_ms(31_000), 0);
        assert!(clock.is_expired(31_000));
    }

    #[test]
    fn restart_resets_start() {
        let mut clock = GameClock::new(30, 0);
        clock.restart(50_000);
        assert_eq!(clock.remaining_ms(50_000), 30_000);
        assert!(!clock.is_expired(60_000));
    }

    #[test]
    fn time_before_start_is_not_elapsed() {
        let clock = GameClock::new(10, 5_000);
        assert_eq!(clock.remaining_ms(1_000), 10_000);
    }

    #[test]
    fn budget_change_keeps_start() {
        let mut clock = GameClock::new(30, 1_000);
        clock.set_budget(40);
        assert_eq!(clock.budget_secs(), 40);
        assert_eq!(clock.remaining_ms(11_000), 30_000);
    }
}
