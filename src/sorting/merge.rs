//! Merge sort
//!
//! Recursion is replaced by an explicit stack of [`Frame`]s. Splitting a
//! range pushes its merge first and its halves on top, right then left, so the
//! left subtree is fully resolved before the right one and both before their
//! merge. A merge in progress copies the two halves out once and then writes
//! one element back per step.

use super::{Progress, Step, StepProducer};
use crate::buffer::{Order, WorkingBuffer};

/// Pending work over a half-open range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Split { start: usize, end: usize },
    Merge { start: usize, mid: usize, end: usize },
}

/// A merge currently writing back into the buffer
#[derive(Debug, Clone)]
struct ActiveMerge {
    left: Vec<u32>,
    right: Vec<u32>,
    a: usize,
    b: usize,
    /// Next index to write
    dest: usize,
}

impl ActiveMerge {
    fn new(buffer: &WorkingBuffer, start: usize, mid: usize, end: usize) -> Self {
        ActiveMerge {
            left: buffer.values()[start..mid].to_vec(),
            right: buffer.values()[mid..end].to_vec(),
            a: 0,
            b: 0,
            dest: start,
        }
    }

    /// Pick the next element; the right half wins only when it strictly
    /// precedes the left head.
    fn next_value(&mut self, order: Order) -> Option<u32> {
        let value = match (self.left.get(self.a), self.right.get(self.b)) {
            (Some(&l), Some(&r)) => {
                if order.precedes(r, l) {
                    self.b += 1;
                    r
                } else {
                    self.a += 1;
                    l
                }
            }
            (Some(&l), None) => {
                self.a += 1;
                l
            }
            (None, Some(&r)) => {
                self.b += 1;
                r
            }
            (None, None) => return None,
        };
        Some(value)
    }
}

#[derive(Debug, Clone)]
pub struct MergeSort {
    order: Order,
    stack: Vec<Frame>,
    active: Option<ActiveMerge>,
}

impl MergeSort {
    pub fn new(len: usize, order: Order) -> Self {
        MergeSort {
            order,
            stack: vec![Frame::Split { start: 0, end: len }],
            active: None,
        }
    }
}

impl StepProducer for MergeSort {
    fn advance(&mut self, buffer: &mut WorkingBuffer) -> Progress {
        loop {
            if let Some(merge) = self.active.as_mut() {
                if let Some(value) = merge.next_value(self.order) {
                    let index = merge.dest;
                    merge.dest += 1;
                    buffer.set(index, value);
                    return Progress::Progressed(Step::Write { index, value });
                }
                self.active = None;
            }

            match self.stack.pop() {
                None => return Progress::Completed,
                Some(Frame::Split { start, end }) => {
                    if end - start > 1 {
                        let mid = (start + end) / 2;
                        self.stack.push(Frame::Merge { start, mid, end });
                        self.stack.push(Frame::Split { start: mid, end });
                        self.stack.push(Frame::Split { start, end: mid });
                    }
                }
                Some(Frame::Merge { start, mid, end }) => {
                    self.active = Some(ActiveMerge::new(buffer, start, mid, end));
                }
            }
        }
    }
}
