//! Quicksort
//!
//! Lomuto partitioning around the last element of the range. Ranges are
//! half-open and kept on an explicit stack. After a pivot lands, the smaller
//! side is pushed as a fresh range and the current frame shrinks to the larger
//! side, so the stack stays logarithmic even though the step count can be
//! quadratic on adversarial input.

use super::{Progress, Step, StepProducer};
use crate::buffer::{Order, WorkingBuffer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Range {
    start: usize,
    end: usize,
    /// Set until the range is first resumed; only fresh ranges report `Trivial`
    fresh: bool,
}

impl Range {
    fn new(start: usize, end: usize) -> Self {
        Range {
            start,
            end,
            fresh: true,
        }
    }

    fn len(&self) -> usize {
        self.end - self.start
    }
}

/// Lomuto partition in progress over `[start, end)` with the pivot at `end - 1`
#[derive(Debug, Clone)]
struct Partition {
    end: usize,
    /// Boundary of the pivot side: `[start, store)` holds elements not after the pivot
    store: usize,
    /// Next element to examine
    scan: usize,
}

impl Partition {
    fn new(start: usize, end: usize) -> Self {
        Partition {
            end,
            store: start,
            scan: start,
        }
    }

    fn advance(&mut self, buffer: &mut WorkingBuffer, order: Order) -> Step {
        let pivot_index = self.end - 1;
        let pivot = buffer.get(pivot_index);

        while self.scan < pivot_index {
            let j = self.scan;
            self.scan += 1;
            if order.in_order(buffer.get(j), pivot) {
                let i = self.store;
                self.store += 1;
                buffer.swap(i, j);
                return Step::Probe { a: i, b: j };
            }
        }

        buffer.swap(self.store, pivot_index);
        Step::PivotPlaced {
            index: self.store,
            from: pivot_index,
        }
    }
}

#[derive(Debug, Clone)]
pub struct QuickSort {
    order: Order,
    stack: Vec<Range>,
    partition: Option<Partition>,
}

impl QuickSort {
    pub fn new(len: usize, order: Order) -> Self {
        QuickSort {
            order,
            stack: vec![Range::new(0, len)],
            partition: None,
        }
    }

    /// Recurse into the smaller side of `pivot` and keep the larger one as
    /// the current frame.
    fn descend(&mut self, pivot: usize) {
        let Some(current) = self.stack.last_mut() else {
            return;
        };

        let left = (current.start, pivot);
        let right = (pivot + 1, current.end);
        let smaller = if left.1 - left.0 < right.1 - right.0 {
            current.start = right.0;
            left
        } else {
            current.end = left.1;
            right
        };

        self.stack.push(Range::new(smaller.0, smaller.1));
    }
}

impl StepProducer for QuickSort {
    fn advance(&mut self, buffer: &mut WorkingBuffer) -> Progress {
        loop {
            if let Some(partition) = self.partition.as_mut() {
                let step = partition.advance(buffer, self.order);
                if let Step::PivotPlaced { index, .. } = step {
                    self.partition = None;
                    self.descend(index);
                }
                return Progress::Progressed(step);
            }

            let Some(range) = self.stack.last_mut() else {
                return Progress::Completed;
            };

            let fresh = std::mem::replace(&mut range.fresh, false);
            if range.len() < 2 {
                self.stack.pop();
                if fresh {
                    return Progress::Progressed(Step::Trivial);
                }
                continue;
            }

            self.partition = Some(Partition::new(range.start, range.end));
        }
    }
}
