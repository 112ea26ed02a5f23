//! Selection sort

use super::{Progress, Step, StepProducer};
use crate::buffer::{Order, WorkingBuffer};

/// Selection sort. Every position except the last gets exactly one swap,
/// including no-op swaps when the extremum is already in place.
#[derive(Debug, Clone)]
pub struct SelectionSort {
    order: Order,
    len: usize,
    /// Next position to fill
    i: usize,
}

impl SelectionSort {
    pub fn new(len: usize, order: Order) -> Self {
        SelectionSort { order, len, i: 0 }
    }
}

impl StepProducer for SelectionSort {
    fn advance(&mut self, buffer: &mut WorkingBuffer) -> Progress {
        if self.i + 1 >= self.len {
            return Progress::Completed;
        }

        let i = self.i;
        let mut best = i;
        for j in i + 1..self.len {
            // strict: ties keep the first occurrence
            if self.order.precedes(buffer.get(j), buffer.get(best)) {
                best = j;
            }
        }

        buffer.swap(i, best);
        self.i += 1;
        Progress::Progressed(Step::Swap { a: i, b: best })
    }
}
