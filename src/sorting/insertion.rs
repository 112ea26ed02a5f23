//! Insertion sort

use super::{Progress, Step, StepProducer};
use crate::buffer::{Order, WorkingBuffer};

/// Insertion sort by adjacent swaps: the element at `next` is carried left
/// one position per step until its predecessor no longer follows it.
#[derive(Debug, Clone)]
pub struct InsertionSort {
    order: Order,
    len: usize,
    /// Index of the element currently being inserted (0 before the first)
    next: usize,
    /// Current position of that element
    cursor: usize,
}

impl InsertionSort {
    pub fn new(len: usize, order: Order) -> Self {
        InsertionSort {
            order,
            len,
            next: 0,
            cursor: 0,
        }
    }
}

impl StepProducer for InsertionSort {
    fn advance(&mut self, buffer: &mut WorkingBuffer) -> Progress {
        loop {
            if self.next >= self.len {
                return Progress::Completed;
            }

            let k = self.cursor;
            if k > 0 && self.order.precedes(buffer.get(k), buffer.get(k - 1)) {
                buffer.swap(k - 1, k);
                self.cursor -= 1;
                return Progress::Progressed(Step::Swap { a: k - 1, b: k });
            }

            self.next += 1;
            self.cursor = self.next;
        }
    }
}
