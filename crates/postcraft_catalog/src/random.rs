//! Randomness sources for keyword sampling.

use postcraft_interface::RandomSource;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Thread-local OS-seeded randomness. Use in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn below(&self, upper: usize) -> usize {
        rand::thread_rng().gen_range(0..upper.max(1))
    }
}

/// Deterministic randomness from a fixed seed.
///
/// # Example
///
/// ```
/// use postcraft_catalog::SeededRandom;
/// use postcraft_interface::RandomSource;
///
/// let a = SeededRandom::new(7);
/// let b = SeededRandom::new(7);
/// assert_eq!(a.below(100), b.below(100));
/// ```
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    /// Create a source seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn below(&self, upper: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..upper.max(1))
    }
}

/// Replays a fixed sequence, cycling when exhausted. Each value is reduced modulo `upper`.
///
/// An empty sequence always yields zero.
#[derive(Debug, Default)]
pub struct SequenceRandom {
    values: Vec<usize>,
    cursor: AtomicUsize,
}

impl SequenceRandom {
    /// Create a source replaying `values`.
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            cursor: AtomicUsize::new(0),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn below(&self, upper: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let position = self.cursor.fetch_add(1, Ordering::Relaxed) % self.values.len();
        self.values[position] % upper.max(1)
    }
}

/// Pick up to `count` distinct items without replacement, in draw order.
///
/// Runs a partial Fisher-Yates shuffle over the indices, drawing from `random`.
pub fn sample<T: Clone>(items: &[T], count: usize, random: &dyn RandomSource) -> Vec<T> {
    let mut indices: Vec<usize> = (0..items.len()).collect();
    let take = count.min(items.len());
    for slot in 0..take {
        let pick = slot + random.below(indices.len() - slot);
        indices.swap(slot, pick);
    }
    indices[..take].iter().map(|&i| items[i].clone()).collect()
}
