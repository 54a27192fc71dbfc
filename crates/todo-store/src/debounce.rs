//! Trailing-edge debounce.
//!
//! Timer-agnostic: callers pass the current time in milliseconds and are
//! responsible for waking up at [`Debouncer::deadline`]. The browser build
//! drives it with a `gloo_timers` timeout.

/// Coalesces a burst of values into the last one, released once no new value
/// has arrived for a full window.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window_ms: u64,
    pending: Option<(T, u64)>,
}

impl<T> Debouncer<T> {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            pending: None,
        }
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Record `value` at `now_ms`, superseding any pending value and
    /// restarting the quiet window.
    pub fn push(&mut self, value: T, now_ms: u64) {
        self.pending = Some((value, now_ms.saturating_add(self.window_ms)));
    }

    /// Release the pending value if its window has elapsed
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        match self.pending {
            Some((_, deadline)) if now_ms >= deadline => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    /// When the pending value becomes due
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending value without releasing it
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Advance a simulated clock in 10ms steps, collecting released values
    fn run_until(debouncer: &mut Debouncer<String>, from: u64, to: u64) -> Vec<(u64, String)> {
        let mut released = Vec::new();
        let mut now = from;
        while now <= to {
            if let Some(value) = debouncer.poll(now) {
                released.push((now, value));
            }
            now += 10;
        }
        released
    }

    #[test]
    fn test_burst_commits_last_value_once() {
        let mut debouncer = Debouncer::new(500);
        let mut released = Vec::new();

        for (at, value) in [(0u64, "a"), (100, "ab"), (200, "abc")] {
            released.extend(run_until(&mut debouncer, at.saturating_sub(90), at.saturating_sub(10)));
            debouncer.push(value.to_string(), at);
        }
        released.extend(run_until(&mut debouncer, 210, 2000));

        assert_eq!(released, vec![(700, "abc".to_string())]);
    }

    #[test]
    fn test_not_released_early() {
        let mut debouncer = Debouncer::new(500);
        debouncer.push(1, 0);
        assert_eq!(debouncer.poll(499), None);
        assert_eq!(debouncer.deadline(), Some(500));
        assert_eq!(debouncer.poll(500), Some(1));
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(1000), None);
    }

    #[test]
    fn test_push_restarts_window() {
        let mut debouncer = Debouncer::new(500);
        debouncer.push("a", 0);
        debouncer.push("b", 400);
        assert_eq!(debouncer.poll(600), None);
        assert_eq!(debouncer.poll(900), Some("b"));
    }

    #[test]
    fn test_separate_bursts_release_separately() {
        let mut debouncer = Debouncer::new(500);
        debouncer.push("first", 0);
        assert_eq!(debouncer.poll(500), Some("first"));
        debouncer.push("second", 1200);
        assert_eq!(debouncer.poll(1699), None);
        assert_eq!(debouncer.poll(1700), Some("second"));
    }

    #[test]
    fn test_cancel() {
        let mut debouncer = Debouncer::new(500);
        debouncer.push("draft", 0);
        assert_eq!(debouncer.cancel(), Some("draft"));
        assert_eq!(debouncer.poll(1000), None);
        assert_eq!(debouncer.deadline(), None);
    }
}
