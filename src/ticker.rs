use std::time::{Duration, Instant};

/// Stopwatch cadence: one tick is one second of task time
pub const TICK_MS: u64 = 1000;

/// Default UI poll interval in milliseconds
pub const DEFAULT_POLL_MS: u64 = 250;

/// Get tick duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(TICK_MS)
}

/// Source of the periodic task clock.
///
/// The event loop polls it once per iteration and feeds the returned tick
/// count into the store. After `stop` a ticker never reports ticks again.
pub trait Ticker {
    /// Whole ticks that became due since the previous poll
    fn poll(&mut self) -> u64;

    /// How long the caller may block before the next tick is due
    fn until_next(&self) -> Duration;

    fn stop(&mut self);

    fn is_active(&self) -> bool;
}

/// Wall-clock ticker firing every `period`
#[derive(Debug)]
pub struct IntervalTicker {
    period: Duration,
    next_due: Option<Instant>,
}

impl IntervalTicker {
    pub fn new(period: Duration) -> Self {
        Self::starting_at(period, Instant::now())
    }

    pub fn starting_at(period: Duration, start: Instant) -> Self {
        Self {
            period,
            next_due: Some(start + period),
        }
    }

    /// Ticks due at `now`; keeps the schedule anchored so slow polls
    /// catch up instead of drifting
    pub fn poll_at(&mut self, now: Instant) -> u64 {
        let Some(mut next_due) = self.next_due else {
            return 0;
        };

        let mut due = 0;
        while now >= next_due {
            due += 1;
            next_due += self.period;
        }
        self.next_due = Some(next_due);
        due
    }
}

impl Ticker for IntervalTicker {
    fn poll(&mut self) -> u64 {
        self.poll_at(Instant::now())
    }

    fn until_next(&self) -> Duration {
        match self.next_due {
            Some(next_due) => next_due.saturating_duration_since(Instant::now()),
            None => self.period,
        }
    }

    fn stop(&mut self) {
        self.next_due = None;
    }

    fn is_active(&self) -> bool {
        self.next_due.is_some()
    }
}

/// Virtual-time ticker for tests: ticks only when told to
#[cfg(test)]
#[derive(Debug)]
pub struct ManualTicker {
    pending: u64,
    active: bool,
}

#[cfg(test)]
impl Default for ManualTicker {
    fn default() -> Self {
        Self {
            pending: 0,
            active: true,
        }
    }
}

#[cfg(test)]
impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `ticks` ticks for the next poll
    pub fn advance(&mut self, ticks: u64) {
        if self.active {
            self.pending += ticks;
        }
    }
}

#[cfg(test)]
impl Ticker for ManualTicker {
    fn poll(&mut self) -> u64 {
        std::mem::take(&mut self.pending)
    }

    fn until_next(&self) -> Duration {
        Duration::ZERO
    }

    fn stop(&mut self) {
        self.active = false;
        self.pending = 0;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        assert_eq!(tick_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_interval_ticker_counts_whole_periods() {
        let start = Instant::now();
        let mut ticker = IntervalTicker::starting_at(Duration::from_secs(1), start);

        assert_eq!(ticker.poll_at(start + Duration::from_millis(999)), 0);
        assert_eq!(ticker.poll_at(start + Duration::from_millis(1000)), 1);
        assert_eq!(ticker.poll_at(start + Duration::from_millis(1500)), 0);
        // A stalled loop catches up on the next poll
        assert_eq!(ticker.poll_at(start + Duration::from_millis(4200)), 3);
        assert_eq!(ticker.poll_at(start + Duration::from_millis(4900)), 0);
    }

    #[test]
    fn test_interval_ticker_silent_after_stop() {
        let start = Instant::now();
        let mut ticker = IntervalTicker::starting_at(Duration::from_secs(1), start);
        assert!(ticker.is_active());
        ticker.stop();

        assert!(!ticker.is_active());
        assert_eq!(ticker.poll_at(start + Duration::from_secs(10)), 0);
    }

    #[test]
    fn test_manual_ticker() {
        let mut ticker = ManualTicker::new();
        ticker.advance(2);
        ticker.advance(3);
        assert_eq!(ticker.poll(), 5);
        assert_eq!(ticker.poll(), 0);

        ticker.advance(1);
        ticker.stop();
        ticker.advance(4);
        assert_eq!(ticker.poll(), 0);
        assert!(!ticker.is_active());
    }
}
