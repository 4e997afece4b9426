use std::time::{Duration, Instant};

/// A fixed-delay timer for the game loop.
///
/// The ticker is armed with the instant at which the next tick is due; after
/// each tick it is either re-armed one period later or cancelled.  A cancelled
/// ticker never fires until it is started again.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Ticker {
    period: Duration,
    next_tick: Option<Instant>,
}

impl Ticker {
    /// Create a cancelled ticker that fires every `period` once started
    pub(crate) fn new(period: Duration) -> Ticker {
        Ticker {
            period,
            next_tick: None,
        }
    }

    /// Schedule the next tick one period from now
    pub(crate) fn start(&mut self) {
        self.start_at(Instant::now());
    }

    fn start_at(&mut self, now: Instant) {
        self.next_tick = Some(now + self.period);
    }

    pub(crate) fn cancel(&mut self) {
        self.next_tick = None;
    }

    pub(crate) fn is_armed(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Return how long until the next tick is due, or `None` if the ticker is
    /// cancelled.  A tick that is already overdue yields `Duration::ZERO`.
    pub(crate) fn remaining(&self) -> Option<Duration> {
        self.remaining_at(Instant::now())
    }

    fn remaining_at(&self, now: Instant) -> Option<Duration> {
        self.next_tick
            .map(|when| when.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(90);

    #[test]
    fn new_is_cancelled() {
        let ticker = Ticker::new(PERIOD);
        assert!(!ticker.is_armed());
        assert_eq!(ticker.remaining(), None);
    }

    #[test]
    fn countdown() {
        let mut ticker = Ticker::new(PERIOD);
        let now = Instant::now();
        ticker.start_at(now);
        assert!(ticker.is_armed());
        assert_eq!(ticker.remaining_at(now), Some(PERIOD));
        assert_eq!(
            ticker.remaining_at(now + Duration::from_millis(30)),
            Some(Duration::from_millis(60))
        );
        assert_eq!(ticker.remaining_at(now + PERIOD), Some(Duration::ZERO));
        assert_eq!(
            ticker.remaining_at(now + PERIOD * 2),
            Some(Duration::ZERO)
        );
    }

    #[test]
    fn rearm_and_cancel() {
        let mut ticker = Ticker::new(PERIOD);
        let now = Instant::now();
        ticker.start_at(now);
        let later = now + PERIOD;
        ticker.start_at(later);
        assert_eq!(ticker.remaining_at(later), Some(PERIOD));
        ticker.cancel();
        assert!(!ticker.is_armed());
        assert_eq!(ticker.remaining_at(later), None);
    }
}
