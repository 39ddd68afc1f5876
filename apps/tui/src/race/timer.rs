use std::time::{Duration, Instant};

/// A periodic deadline. Dropping it is cancelling it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickTimer {
    period: Duration,
    next_due: Instant,
}

impl TickTimer {
    pub fn arm(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next_due: now + period,
        }
    }

    pub const fn next_due(&self) -> Instant {
        self.next_due
    }

    /// Returns true once per elapsed period. Late polls fire a single time
    /// and schedule the next deadline from `now`, so missed periods are
    /// dropped rather than replayed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = now + self.period;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::TickTimer;
    use std::time::{Duration, Instant};

    #[test]
    fn fires_once_per_period() {
        let start = Instant::now();
        let mut timer = TickTimer::arm(Duration::from_millis(500), start);

        assert!(!timer.poll(start + Duration::from_millis(499)));
        assert!(timer.poll(start + Duration::from_millis(500)));
        assert!(!timer.poll(start + Duration::from_millis(600)));
        assert!(timer.poll(start + Duration::from_millis(1_000)));
    }

    #[test]
    fn late_poll_does_not_replay_missed_periods() {
        let start = Instant::now();
        let mut timer = TickTimer::arm(Duration::from_millis(100), start);

        let late = start + Duration::from_secs(5);
        assert!(timer.poll(late));
        assert!(!timer.poll(late + Duration::from_millis(50)));
        assert_eq!(timer.next_due(), late + Duration::from_millis(100));
    }
}
