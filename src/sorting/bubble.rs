//! Bubble sort

use super::{Progress, Step, StepProducer};
use crate::buffer::{Order, WorkingBuffer};

/// Adjacent-swap bubble sort. Suspends once per swap, so a full run takes
/// exactly as many steps as the input has inversions.
#[derive(Debug, Clone)]
pub struct BubbleSort {
    order: Order,
    len: usize,
    /// Completed passes
    pass: usize,
    /// Next left index to compare within the current pass
    j: usize,
}

impl BubbleSort {
    pub fn new(len: usize, order: Order) -> Self {
        BubbleSort {
            order,
            len,
            pass: 0,
            j: 0,
        }
    }
}

impl StepProducer for BubbleSort {
    fn advance(&mut self, buffer: &mut WorkingBuffer) -> Progress {
        while self.pass + 1 < self.len {
            while self.j + 1 < self.len - self.pass {
                let j = self.j;
                self.j += 1;
                if self.order.precedes(buffer.get(j + 1), buffer.get(j)) {
                    buffer.swap(j, j + 1);
                    return Progress::Progressed(Step::Swap { a: j, b: j + 1 });
                }
            }
            self.pass += 1;
            self.j = 0;
        }
        Progress::Completed
    }
}
