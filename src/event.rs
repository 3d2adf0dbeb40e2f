use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::app::{App, AppEvent};

const TICK_RATE: Duration = Duration::from_millis(250);

/// Polls for a crossterm key press, waiting at most `timeout`.
pub fn poll(timeout: Duration) -> Result<Option<AppEvent>> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(Some(AppEvent::KeyPress(key.code)));
            }
        }
    }
    Ok(None)
}

/// Time left until the next tick is owed, zero once it is overdue.
fn until_next_tick(last_tick: Instant, now: Instant) -> Duration {
    TICK_RATE.saturating_sub(now.saturating_duration_since(last_tick))
}

/// Runs the main event loop. Ticks follow a deadline, so a stream of key
/// presses cannot hold them back.
pub fn run(app: &mut App, terminal: &mut crate::tui::Terminal) -> Result<()> {
    let mut last_tick = Instant::now();

    while app.running {
        terminal.draw(|frame| crate::ui::draw(frame, app))?;

        if let Some(event) = poll(until_next_tick(last_tick, Instant::now()))? {
            app.update(event);
        }

        let now = Instant::now();
        if until_next_tick(last_tick, now).is_zero() {
            app.update(AppEvent::Tick(now));
            last_tick = now;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_out_the_rest_of_the_tick() {
        let last_tick = Instant::now();
        assert_eq!(until_next_tick(last_tick, last_tick), TICK_RATE);
        assert_eq!(
            until_next_tick(last_tick, last_tick + Duration::from_millis(100)),
            Duration::from_millis(150)
        );
    }

    #[test]
    fn overdue_tick_is_due_immediately() {
        let last_tick = Instant::now();
        assert!(until_next_tick(last_tick, last_tick + TICK_RATE).is_zero());
        assert!(until_next_tick(last_tick, last_tick + Duration::from_secs(5)).is_zero());
    }
}
