use std::time::{Duration, Instant};

/// A repeating deadline polled from the frame loop.
///
/// Fires at most once per poll and re-arms from the poll time, so a stalled
/// frame never produces a burst of catch-up ticks.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    next_due: Instant,
}

impl Interval {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self { period, next_due: now + period }
    }

    pub fn due(&mut self, now: Instant) -> bool {
        if now >= self.next_due {
            self.next_due = now + self.period;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self, now: Instant) {
        self.next_due = now + self.period;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_period() {
        let start = Instant::now();
        let mut interval = Interval::new(Duration::from_millis(100), start);
        assert!(!interval.due(start + Duration::from_millis(99)));
        assert!(interval.due(start + Duration::from_millis(100)));
        assert!(!interval.due(start + Duration::from_millis(150)));
        assert!(interval.due(start + Duration::from_millis(200)));
    }

    #[test]
    fn late_poll_does_not_burst() {
        let start = Instant::now();
        let mut interval = Interval::new(Duration::from_millis(100), start);
        let late = start + Duration::from_secs(1);
        assert!(interval.due(late));
        assert!(!interval.due(late));
    }
}
