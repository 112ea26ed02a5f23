// Tick-driven scheduler for sorting sessions

use crate::buffer::{Distribution, Order, WorkingBuffer};
use crate::driver::command::Command;
use crate::driver::constants::*;
use crate::driver::session::Session;
use crate::snapshot::Snapshot;
use crate::sorting::{Algorithm, Progress, Step};
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::ops::ControlFlow;

/// Whether ticks currently advance the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Nothing to resume: fresh configuration or a finished run
    Idle,
    Running,
    /// Stopped by the operator, the session is kept
    Paused,
}

/// What the last tick (or reconfiguration) left behind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ready,
    InProgress,
    Sorted,
}

/// Startup configuration for a [`Driver`]
#[derive(Debug, Clone)]
pub struct Settings {
    pub bars: usize,
    pub tick_rate: u32,
    pub algorithm: Algorithm,
    pub order: Order,
    pub distribution: Distribution,
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            bars: DEFAULT_BARS,
            tick_rate: DEFAULT_TICK_RATE,
            algorithm: Algorithm::default(),
            order: Order::default(),
            distribution: Distribution::default(),
            seed: 0,
        }
    }
}

/// Owns the working buffer and the active session, and advances the session
/// by exactly one step per tick while running.
#[derive(Debug)]
pub struct Driver {
    buffer: WorkingBuffer,
    algorithm: Algorithm,

    /// Built lazily on the first tick after any invalidation
    session: Option<Session>,

    state: RunState,
    status: Status,
    tick_rate: u32,

    /// Seeds buffer generation and crazy sort shuffles
    rng: StdRng,

    /// Most recent step, for highlighting
    last_step: Option<Step>,

    /// Steps taken by the current (or just finished) session
    steps: usize,
}

impl Driver {
    pub fn new(settings: Settings) -> Self {
        let mut rng = StdRng::seed_from_u64(settings.seed);
        let bars = settings.bars.clamp(MIN_BARS, MAX_BARS);
        let buffer =
            WorkingBuffer::generate(bars, settings.distribution, settings.order, &mut rng);
        let driver = Driver::with_buffer(buffer, settings.algorithm, settings.tick_rate, rng);
        info!(
            "driver started: {} bars, {} ticks/s, {}, {}",
            bars, driver.tick_rate, settings.algorithm, settings.order
        );
        driver
    }

    /// Drive an existing buffer, e.g. a scripted input
    pub fn from_buffer(buffer: WorkingBuffer, algorithm: Algorithm, seed: u64) -> Self {
        let rng = StdRng::seed_from_u64(seed);
        Driver::with_buffer(buffer, algorithm, DEFAULT_TICK_RATE, rng)
    }

    fn with_buffer(
        buffer: WorkingBuffer,
        algorithm: Algorithm,
        tick_rate: u32,
        rng: StdRng,
    ) -> Self {
        Driver {
            buffer,
            algorithm,
            session: None,
            state: RunState::Idle,
            status: Status::Ready,
            tick_rate: tick_rate.clamp(MIN_TICK_RATE, MAX_TICK_RATE),
            rng,
            last_step: None,
            steps: 0,
        }
    }

    /// Advance the active session once if running.
    ///
    /// Returns `None` when not running.
    pub fn tick(&mut self) -> Option<Progress> {
        if self.state != RunState::Running {
            return None;
        }

        if self.session.is_none() {
            debug!(
                "new {} session over {} values ({} inversions)",
                self.algorithm,
                self.buffer.len(),
                self.buffer.inversions()
            );
            self.session = Some(Session::new(self.algorithm, &self.buffer, &mut self.rng));
        }
        let session = self.session.as_mut()?;

        let progress = session.advance(&mut self.buffer);
        self.steps = session.steps();
        match progress {
            Progress::Progressed(step) => {
                trace!("step {}: {:?}", self.steps, step);
                self.last_step = Some(step);
                self.status = Status::InProgress;
            }
            Progress::Completed => {
                info!("{} finished in {} steps", self.algorithm, self.steps);
                self.session = None;
                self.last_step = None;
                self.state = RunState::Idle;
                self.status = Status::Sorted;
            }
        }
        Some(progress)
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.state = if playing {
            RunState::Running
        } else {
            RunState::Paused
        };
    }

    pub fn toggle_playing(&mut self) {
        self.set_playing(!self.is_running());
    }

    /// Fill the buffer with fresh random values and stop
    pub fn reset(&mut self) {
        let len = self.buffer.len();
        self.buffer.regenerate(len, &mut self.rng);
        self.invalidate("reset");
    }

    pub fn set_order(&mut self, order: Order) {
        self.buffer.set_order(order);
        self.invalidate("order changed");
    }

    pub fn select_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        self.invalidate("algorithm changed");
    }

    /// Regenerate the buffer at `bars` elements, clamped to the allowed range.
    ///
    /// Returns the size actually used.
    pub fn resize(&mut self, bars: usize) -> usize {
        let bars = bars.clamp(MIN_BARS, MAX_BARS);
        self.buffer.regenerate(bars, &mut self.rng);
        self.invalidate("resized");
        bars
    }

    pub fn grow(&mut self) -> usize {
        self.resize(self.buffer.len().saturating_mul(2))
    }

    pub fn shrink(&mut self) -> usize {
        self.resize(self.buffer.len() / 2)
    }

    /// Set the tick rate, clamped. Does not touch the session.
    pub fn set_tick_rate(&mut self, tick_rate: u32) -> u32 {
        self.tick_rate = tick_rate.clamp(MIN_TICK_RATE, MAX_TICK_RATE);
        self.tick_rate
    }

    pub fn faster(&mut self) -> u32 {
        self.set_tick_rate(self.tick_rate.saturating_mul(2))
    }

    pub fn slower(&mut self) -> u32 {
        self.set_tick_rate(self.tick_rate / 2)
    }

    /// Execute one operator command. Breaks on quit.
    pub fn apply(&mut self, command: Command) -> ControlFlow<()> {
        match command {
            Command::TogglePlay => self.toggle_playing(),
            Command::Reset => self.reset(),
            Command::SetOrder(order) => self.set_order(order),
            Command::Grow => {
                self.grow();
            }
            Command::Shrink => {
                self.shrink();
            }
            Command::Faster => {
                self.faster();
            }
            Command::Slower => {
                self.slower();
            }
            Command::Select(algorithm) => self.select_algorithm(algorithm),
            Command::Quit => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    /// Drop the session; the next tick rebuilds it from the current buffer
    fn invalidate(&mut self, reason: &str) {
        if let Some(session) = self.session.take() {
            debug!(
                "{} session dropped after {} steps: {}",
                session.algorithm(),
                session.steps(),
                reason
            );
        }
        self.state = RunState::Idle;
        self.status = Status::Ready;
        self.last_step = None;
        self.steps = 0;
    }

    // ========== Getter methods for UI ==========

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            values: self.buffer.values(),
            order: self.buffer.order(),
            algorithm: self.algorithm,
            state: self.state,
            status: self.status,
            tick_rate: self.tick_rate,
            bars: self.buffer.len(),
            steps: self.steps,
            last_step: self.last_step,
        }
    }

    pub fn buffer(&self) -> &WorkingBuffer {
        &self.buffer
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn order(&self) -> Order {
        self.buffer.order()
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    pub fn tick_rate(&self) -> u32 {
        self.tick_rate
    }

    pub fn steps(&self) -> usize {
        self.steps
    }
}
