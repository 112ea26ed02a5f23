//! One algorithm run bound to the working buffer

use crate::buffer::{Order, WorkingBuffer};
use crate::sorting::{Algorithm, Producer, Progress, StepProducer};
use rand::Rng;

/// A live binding of one producer to one buffer generation and order.
///
/// Sessions are never reconfigured. Changing the algorithm, the order or the
/// buffer drops the session and a new one is built over whatever the buffer
/// holds at that moment.
#[derive(Debug, Clone)]
pub struct Session {
    algorithm: Algorithm,
    producer: Producer,
    order: Order,
    generation: u64,
    len: usize,
    steps: usize,
}

impl Session {
    pub fn new<R: Rng + ?Sized>(algorithm: Algorithm, buffer: &WorkingBuffer, rng: &mut R) -> Self {
        let order = buffer.order();
        Session {
            algorithm,
            producer: algorithm.producer(buffer.len(), order, rng),
            order,
            generation: buffer.generation(),
            len: buffer.len(),
            steps: 0,
        }
    }

    /// Resume the producer once
    pub fn advance(&mut self, buffer: &mut WorkingBuffer) -> Progress {
        debug_assert_eq!(self.order, buffer.order(), "session order diverged from buffer");
        debug_assert_eq!(self.generation, buffer.generation(), "session outlived its buffer");
        debug_assert_eq!(self.len, buffer.len(), "buffer resized under a live session");

        let progress = self.producer.advance(buffer);
        if !progress.is_completed() {
            self.steps += 1;
        }
        progress
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Number of suspensions so far
    pub fn steps(&self) -> usize {
        self.steps
    }
}
