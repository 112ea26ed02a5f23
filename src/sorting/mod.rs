//! Resumable sorting algorithms
//!
//! Every algorithm is an explicit state machine whose fields act as the
//! program counter. Each call to [`StepProducer::advance`] runs until exactly
//! one observable mutation has been applied to the buffer (or the algorithm
//! has finished) and then returns.
//!
//! - [`bubble`], [`insertion`], [`selection`]: quadratic, adjacent/selection swaps
//! - [`merge`]: top-down merge sort over an explicit split/merge stack
//! - [`quick`]: Lomuto quicksort, smaller side first, larger side by tail iteration
//! - [`crazy`]: shuffle until sorted
//!
//! [`Algorithm`] is the static registry mapping keys and names to constructors.

pub mod bubble;
pub mod crazy;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

use crate::buffer::{Order, WorkingBuffer};
use rand::Rng;
use std::fmt;

pub use bubble::BubbleSort;
pub use crazy::CrazySort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;

/// The single mutation a producer performed before suspending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Two positions exchanged (bubble, insertion, selection)
    Swap { a: usize, b: usize },
    /// A merged element written back into place
    Write { index: usize, value: u32 },
    /// An element moved to the pivot's side during partitioning
    Probe { a: usize, b: usize },
    /// The pivot swapped from `from` into its final `index`
    PivotPlaced { index: usize, from: usize },
    /// An empty or single-element quicksort range was entered
    Trivial,
    /// The whole buffer was reshuffled
    Shuffle,
}

impl Step {
    /// Indices touched by this step, for highlighting
    pub fn touched(&self) -> Vec<usize> {
        match *self {
            Step::Swap { a, b } | Step::Probe { a, b } => vec![a, b],
            Step::PivotPlaced { index, from } => vec![index, from],
            Step::Write { index, .. } => vec![index],
            Step::Trivial | Step::Shuffle => Vec::new(),
        }
    }

    /// Whether this step may have changed the buffer
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Step::Trivial)
    }
}

/// Result of resuming a producer once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Progressed(Step),
    Completed,
}

impl Progress {
    pub fn is_completed(&self) -> bool {
        matches!(self, Progress::Completed)
    }
}

/// A suspendable sorting computation.
///
/// Implementations must apply at most one mutation to `buffer` per call and
/// keep returning [`Progress::Completed`] once finished.
pub trait StepProducer {
    fn advance(&mut self, buffer: &mut WorkingBuffer) -> Progress;
}

/// Supported algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Algorithm {
    #[default]
    Bubble,
    Insertion,
    Merge,
    Quick,
    Crazy,
    Selection,
}

impl Algorithm {
    /// Display order for the controls pane
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Crazy,
        Algorithm::Selection,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Crazy => "Crazy Sort",
            Algorithm::Selection => "Selection Sort",
        }
    }

    /// Key that selects this algorithm
    pub fn key(self) -> char {
        match self {
            Algorithm::Bubble => 'b',
            Algorithm::Insertion => 'i',
            Algorithm::Merge => 'm',
            Algorithm::Quick => 'q',
            Algorithm::Crazy => 'c',
            Algorithm::Selection => 's',
        }
    }

    pub fn from_key(key: char) -> Option<Self> {
        let key = key.to_ascii_lowercase();
        Self::ALL.into_iter().find(|algorithm| algorithm.key() == key)
    }

    /// Build a fresh producer for a buffer of `len` elements
    pub fn producer<R: Rng + ?Sized>(self, len: usize, order: Order, rng: &mut R) -> Producer {
        match self {
            Algorithm::Bubble => Producer::Bubble(BubbleSort::new(len, order)),
            Algorithm::Insertion => Producer::Insertion(InsertionSort::new(len, order)),
            Algorithm::Merge => Producer::Merge(MergeSort::new(len, order)),
            Algorithm::Quick => Producer::Quick(QuickSort::new(len, order)),
            Algorithm::Crazy => Producer::Crazy(CrazySort::new(order, rng.gen())),
            Algorithm::Selection => Producer::Selection(SelectionSort::new(len, order)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tagged union over the concrete producers
#[derive(Debug, Clone)]
pub enum Producer {
    Bubble(BubbleSort),
    Insertion(InsertionSort),
    Selection(SelectionSort),
    Merge(MergeSort),
    Quick(QuickSort),
    Crazy(CrazySort),
}

impl StepProducer for Producer {
    fn advance(&mut self, buffer: &mut WorkingBuffer) -> Progress {
        match self {
            Producer::Bubble(p) => p.advance(buffer),
            Producer::Insertion(p) => p.advance(buffer),
            Producer::Selection(p) => p.advance(buffer),
            Producer::Merge(p) => p.advance(buffer),
            Producer::Quick(p) => p.advance(buffer),
            Producer::Crazy(p) => p.advance(buffer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(Algorithm::from_key(algorithm.key()), Some(algorithm));
        }
        assert_eq!(Algorithm::from_key('M'), Some(Algorithm::Merge));
        assert_eq!(Algorithm::from_key('x'), None);
    }

    #[test]
    fn test_trivial_is_not_a_mutation() {
        assert!(!Step::Trivial.is_mutation());
        assert!(Step::Shuffle.is_mutation());
        assert!(Step::Trivial.touched().is_empty());
        assert_eq!(Step::Swap { a: 1, b: 4 }.touched(), vec![1, 4]);
    }
}
