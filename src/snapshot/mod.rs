// Read-only view of the driver state handed to the renderer

use crate::buffer::Order;
use crate::driver::{RunState, Status};
use crate::sorting::{Algorithm, Step};

/// Everything a frame needs, borrowed from the driver
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub values: &'a [u32],
    pub order: Order,
    pub algorithm: Algorithm,
    pub state: RunState,
    pub status: Status,
    pub tick_rate: u32,
    pub bars: usize,
    pub steps: usize,
    pub last_step: Option<Step>,
}

impl Snapshot<'_> {
    pub fn is_playing(&self) -> bool {
        self.state == RunState::Running
    }

    /// Indices touched by the most recent step
    pub fn highlighted(&self) -> Vec<usize> {
        self.last_step.map(|step| step.touched()).unwrap_or_default()
    }

    /// Status line text
    pub fn message(&self) -> &'static str {
        match (self.status, self.state) {
            (Status::Sorted, _) => "Sorted",
            (Status::Ready, RunState::Running) => "Starting...",
            (Status::Ready, _) => "Ready!",
            (Status::InProgress, RunState::Running) => "Sorting...",
            (Status::InProgress, _) => "Paused",
        }
    }
}
