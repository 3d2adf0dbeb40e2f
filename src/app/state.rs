use std::time::Instant;

use chrono::{DateTime, Local};
use crossterm::event::KeyCode;

use crate::error::FlickerError;
use crate::flicker::{ColorFlicker, FlickerConfig, TimerHandle};

use super::AppEvent;

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub flicker: ColorFlicker,
    timer: Option<TimerHandle>,
    pub show_help: bool,
    pub status: Option<String>,
    pub last_change: Option<DateTime<Local>>,
}

impl App {
    /// Initializes the flicker once for the lifetime of the app.
    pub fn new(config: FlickerConfig, now: Instant) -> Result<Self, FlickerError> {
        let (mut flicker, timer) = ColorFlicker::initialize(config, now)?;
        flicker.subscribe(|color| tracing::trace!(color, "color changed"));

        Ok(Self {
            running: true,
            flicker,
            timer: Some(timer),
            show_help: false,
            status: None,
            last_change: Some(Local::now()),
        })
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick(now) => {
                if self.flicker.tick(now) {
                    self.last_change = Some(Local::now());
                }
            }
            AppEvent::KeyPress(key) => self.handle_key(key),
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.show_help && matches!(key, KeyCode::Esc | KeyCode::Char('?')) {
            self.show_help = false;
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char(' ') => {
                let color = self.flicker.pick_color().to_string();
                self.last_change = Some(Local::now());
                self.status = Some(format!("Picked {color}"));
            }
            KeyCode::Char('s') => self.stop_flicker(),
            _ => {}
        }
    }

    fn stop_flicker(&mut self) {
        match self.timer.take() {
            Some(timer) if timer.is_active() => {
                timer.cancel();
                tracing::info!(color = self.flicker.current_color(), "flicker stopped by user");
                self.status = Some("Flicker stopped".to_string());
            }
            _ => self.status = Some("Color is already steady".to_string()),
        }
    }
}
