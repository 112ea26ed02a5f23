//! Main TUI application state and logic

use crate::driver::{Command, Driver};
use crate::ui::keymap;
use crate::ui::panes::{self, controls::CONTROLS_HEIGHT};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::ops::ControlFlow;
use std::time::{Duration, Instant};

/// How long to wait for input while nothing is playing
const IDLE_POLL: Duration = Duration::from_millis(100);

/// The main application state
pub struct App {
    /// Owns the buffer and the active session
    pub driver: Driver,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Last time a step was taken in play mode
    pub last_tick: Instant,
}

impl App {
    pub fn new(driver: Driver) -> Self {
        App {
            driver,
            should_quit: false,
            last_tick: Instant::now(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let interval = self.tick_interval();
            if self.driver.is_running() && self.last_tick.elapsed() >= interval {
                self.driver.tick();
                self.last_tick = Instant::now();
            }

            // Wake up in time for the next tick, or idle while stopped
            let timeout = if self.driver.is_running() {
                interval.saturating_sub(self.last_tick.elapsed())
            } else {
                IDLE_POLL
            };

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Time between steps at the current tick rate
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.driver.tick_rate().max(1)
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(CONTROLS_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let snapshot = self.driver.snapshot();
        panes::render_controls_pane(frame, chunks[0], &snapshot);
        panes::render_bars_pane(frame, chunks[1], &snapshot);
        panes::render_status_bar(frame, chunks[2], &snapshot);
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let Some(command) = keymap::command_for(key) else {
            return;
        };

        if let ControlFlow::Break(()) = self.driver.apply(command) {
            self.should_quit = true;
            return;
        }

        if command == Command::TogglePlay && self.driver.is_running() {
            // Take the first step right away
            self.last_tick = Instant::now()
                .checked_sub(self.tick_interval())
                .unwrap_or_else(Instant::now);
        }
    }
}
