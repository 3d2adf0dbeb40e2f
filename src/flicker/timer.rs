use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// A fixed-period schedule polled by the host event loop.
///
/// The timer never fires on its own; `fire_due` is called with the current
/// instant and reports whether a period has elapsed since the last firing.
#[derive(Debug)]
pub(crate) struct RepeatingTimer {
    period: Duration,
    next_due: Instant,
    cancelled: Rc<Cell<bool>>,
}

impl RepeatingTimer {
    /// Starts a timer whose first firing is one period after `start`,
    /// together with the handle that owns it.
    pub(crate) fn start(period: Duration, start: Instant) -> (Self, TimerHandle) {
        let cancelled = Rc::new(Cell::new(false));
        let timer = Self {
            period,
            next_due: start + period,
            cancelled: Rc::clone(&cancelled),
        };
        (timer, TimerHandle { cancelled: Some(cancelled) })
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    pub(crate) fn period(&self) -> Duration {
        self.period
    }

    /// Reports whether a firing is due at `now`. Periods missed while the
    /// host was not polling collapse into this single firing, and the next
    /// due instant keeps the original phase.
    pub(crate) fn fire_due(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        let behind = now.duration_since(self.next_due).as_nanos();
        let into_period = behind % self.period.as_nanos();
        let into_period = Duration::from_nanos(u64::try_from(into_period).unwrap_or(0));
        self.next_due = now + (self.period - into_period);
        true
    }
}

/// Owner of a running flicker schedule.
///
/// Dropping the handle stops the schedule, so the flicker lives exactly as
/// long as whoever holds this. The handle returned for a steady (reduced
/// motion) flicker is inert.
#[derive(Debug)]
#[must_use = "dropping the handle stops the flicker"]
pub struct TimerHandle {
    cancelled: Option<Rc<Cell<bool>>>,
}

impl TimerHandle {
    pub(crate) fn inert() -> Self {
        Self { cancelled: None }
    }

    pub fn is_active(&self) -> bool {
        self.cancelled.as_ref().is_some_and(|c| !c.get())
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if let Some(cancelled) = &self.cancelled {
            cancelled.set(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(2000);

    #[test]
    fn nothing_due_before_first_period() {
        let start = Instant::now();
        let (mut timer, _handle) = RepeatingTimer::start(PERIOD, start);
        assert!(!timer.fire_due(start));
        assert!(!timer.fire_due(start + Duration::from_millis(1999)));
        assert!(timer.fire_due(start + PERIOD));
        assert!(!timer.fire_due(start + PERIOD));
    }

    #[test]
    fn missed_periods_collapse_into_one_firing() {
        let start = Instant::now();
        let (mut timer, _handle) = RepeatingTimer::start(PERIOD, start);
        assert!(timer.fire_due(start + Duration::from_millis(6500)));
        assert!(!timer.fire_due(start + Duration::from_millis(6500)));
        assert!(!timer.fire_due(start + Duration::from_millis(7999)));
        assert!(timer.fire_due(start + Duration::from_millis(8000)));
    }

    #[test]
    fn long_pause_with_short_period_fires_once() {
        let start = Instant::now();
        let (mut timer, _handle) = RepeatingTimer::start(Duration::from_millis(1), start);
        let resumed = start + Duration::from_secs(3600);
        assert!(timer.fire_due(resumed));
        assert!(!timer.fire_due(resumed));
        assert!(timer.fire_due(resumed + Duration::from_millis(1)));
    }

    #[test]
    fn dropping_handle_cancels() {
        let (timer, handle) = RepeatingTimer::start(PERIOD, Instant::now());
        assert!(handle.is_active());
        assert!(!timer.is_cancelled());
        handle.cancel();
        assert!(timer.is_cancelled());
    }

    #[test]
    fn inert_handle_is_never_active() {
        let handle = TimerHandle::inert();
        assert!(!handle.is_active());
    }
}
