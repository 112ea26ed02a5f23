//! The working buffer being sorted
//!
//! This module provides the single mutable array every algorithm operates on:
//! - [`WorkingBuffer`]: the values, the target [`Order`] and a regeneration counter
//! - [`Distribution`]: how fresh contents are generated
//! - [`order`]: the ascending/descending flag and its comparison helpers
//!
//! # Mutation Model
//!
//! Algorithms only ever touch the buffer through [`WorkingBuffer::swap`] and
//! [`WorkingBuffer::set`]. Each call is one observable mutation and is what a
//! step producer reports before suspending.

pub mod order;

pub use order::Order;

use rand::seq::SliceRandom;
use rand::Rng;

/// Largest value a generated buffer holds; bars are scaled against it
pub const VALUE_RANGE: u32 = 1024;

/// How a freshly generated buffer is filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Distribution {
    /// Shuffled, evenly spaced, distinct values spanning `1..=VALUE_RANGE`.
    /// Buffers longer than the range hold `1..=size` instead.
    #[default]
    Permutation,
    /// Independent random values in `1..=VALUE_RANGE` (duplicates allowed)
    Uniform,
}

/// The array being sorted plus its target order
#[derive(Debug, Clone)]
pub struct WorkingBuffer {
    values: Vec<u32>,
    order: Order,
    distribution: Distribution,
    /// Bumped every time the contents are regenerated
    generation: u64,
}

impl WorkingBuffer {
    /// Create a buffer of `size` random values
    pub fn generate<R: Rng + ?Sized>(
        size: usize,
        distribution: Distribution,
        order: Order,
        rng: &mut R,
    ) -> Self {
        WorkingBuffer {
            values: fill(size, distribution, rng),
            order,
            distribution,
            generation: 0,
        }
    }

    /// Wrap existing values (used by tests and scripted scenarios)
    pub fn from_values(values: Vec<u32>, order: Order) -> Self {
        WorkingBuffer {
            values,
            order,
            distribution: Distribution::Permutation,
            generation: 0,
        }
    }

    /// Replace the contents with `size` fresh random values
    pub fn regenerate<R: Rng + ?Sized>(&mut self, size: usize, rng: &mut R) {
        self.values = fill(size, self.distribution, rng);
        self.generation += 1;
    }

    /// Randomly permute the current contents in place
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.values.shuffle(rng);
    }

    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        self.values.swap(i, j);
    }

    #[inline]
    pub fn set(&mut self, index: usize, value: u32) {
        self.values[index] = value;
    }

    #[inline]
    pub fn get(&self, index: usize) -> u32 {
        self.values[index]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn set_order(&mut self, order: Order) {
        self.order = order;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Check whether every adjacent pair satisfies the buffer's order
    pub fn is_sorted(&self) -> bool {
        self.values
            .windows(2)
            .all(|pair| self.order.in_order(pair[0], pair[1]))
    }

    /// Count pairs `(i, j)` with `i < j` whose values are out of order.
    ///
    /// Quadratic, but buffers are capped at a few hundred elements.
    pub fn inversions(&self) -> usize {
        let mut count = 0;
        for (i, &a) in self.values.iter().enumerate() {
            count += self.values[i + 1..]
                .iter()
                .filter(|&&b| self.order.precedes(b, a))
                .count();
        }
        count
    }
}

fn fill<R: Rng + ?Sized>(size: usize, distribution: Distribution, rng: &mut R) -> Vec<u32> {
    match distribution {
        Distribution::Permutation => {
            let len = size as u64;
            let span = len.max(u64::from(VALUE_RANGE));
            let mut values: Vec<u32> = (1..=len).map(|i| (i * span / len) as u32).collect();
            values.shuffle(rng);
            values
        }
        Distribution::Uniform => (0..size).map(|_| rng.gen_range(1..=VALUE_RANGE)).collect(),
    }
}
