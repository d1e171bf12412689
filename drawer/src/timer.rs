use std::time::{Duration, Instant};

/// A single-slot delayed hide.
///
/// Scheduling replaces whatever was pending, so there is never more than one
/// outstanding hide. The owner polls `fire` from its tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HideTimer {
    deadline: Option<Instant>,
}

impl HideTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the hide `delay` after `now`, dropping any earlier one.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Drop the pending hide. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Consume the pending hide if it is due.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(150);

    #[test]
    fn test_fires_once_after_delay() {
        let start = Instant::now();
        let mut timer = HideTimer::new();
        timer.schedule(start, DELAY);

        assert!(!timer.fire(start + Duration::from_millis(149)));
        assert!(timer.fire(start + DELAY));
        assert!(!timer.fire(start + Duration::from_millis(500)));
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_reschedule_replaces_pending() {
        let start = Instant::now();
        let mut timer = HideTimer::new();
        timer.schedule(start, DELAY);
        timer.schedule(start + Duration::from_millis(100), DELAY);

        assert_eq!(timer.deadline(), Some(start + Duration::from_millis(250)));
        assert!(!timer.fire(start + Duration::from_millis(200)));
        assert!(timer.fire(start + Duration::from_millis(250)));
    }

    #[test]
    fn test_cancel() {
        let start = Instant::now();
        let mut timer = HideTimer::new();
        assert!(!timer.cancel());

        timer.schedule(start, DELAY);
        assert!(timer.cancel());
        assert!(!timer.fire(start + DELAY));
    }
}
