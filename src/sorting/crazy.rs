//! Crazy sort: shuffle until sorted
//!
//! Has no upper bound on the number of steps. It owns a seeded RNG so that a
//! given seed replays the same sequence of shuffles.

use super::{Progress, Step, StepProducer};
use crate::buffer::{Order, WorkingBuffer};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone)]
pub struct CrazySort {
    order: Order,
    rng: StdRng,
}

impl CrazySort {
    pub fn new(order: Order, seed: u64) -> Self {
        CrazySort {
            order,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl StepProducer for CrazySort {
    fn advance(&mut self, buffer: &mut WorkingBuffer) -> Progress {
        debug_assert_eq!(buffer.order(), self.order);
        if buffer.is_sorted() {
            return Progress::Completed;
        }
        buffer.shuffle(&mut self.rng);
        Progress::Progressed(Step::Shuffle)
    }
}
