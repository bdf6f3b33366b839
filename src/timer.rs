use std::time::{Duration, Instant};

/// Repeating timer handle owned by a running session.
///
/// The timer does not fire callbacks on its own. The event loop polls it and
/// it reports how many whole periods have passed since the last poll, so
/// ticks are always delivered on the same thread as user actions. Dropping
/// the handle disarms it.
#[derive(Debug)]
pub struct SessionTimer {
    armed_at: Instant,
    period: Duration,
    reported: u64,
}

impl SessionTimer {
    pub fn arm(now: Instant, period: Duration) -> Self {
        // a zero period would report an unbounded number of ticks
        let period = period.max(Duration::from_millis(1));
        tracing::trace!(period_ms = period.as_millis() as u64, "session timer armed");
        Self {
            armed_at: now,
            period,
            reported: 0,
        }
    }

    /// Number of periods that elapsed since the previous call (or since arming)
    pub fn due(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.armed_at);
        let total = (elapsed.as_nanos() / self.period.as_nanos()) as u64;
        if total <= self.reported {
            return 0;
        }
        let fresh = total - self.reported;
        self.reported = total;
        u32::try_from(fresh).unwrap_or(u32::MAX)
    }
}

impl Drop for SessionTimer {
    fn drop(&mut self) {
        tracing::trace!(reported = self.reported, "session timer released");
    }
}
