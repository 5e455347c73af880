use std::sync::{Arc, Mutex, MutexGuard};

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Handle to the one random number generator used for a whole generation run.
///
/// Clones share the same underlying stream, so a fixed seed gives the same
/// sequence of decisions no matter how many algorithms draw from it. The
/// generator sits behind a mutex and the handle can be sent to worker threads.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: Arc<Mutex<StdRng>>,
}

impl RandomSource {
    /// Get a random source, optionally seeded for reproducibility.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    fn from_rng(rng: StdRng) -> Self {
        RandomSource {
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StdRng> {
        // A panic elsewhere cannot leave the rng half-updated, so poisoning is ignored.
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Uniform integer in `[low, high)`. Returns `low` when the range is empty.
    pub fn next_in_range(&self, low: usize, high: usize) -> usize {
        if high <= low {
            return low;
        }
        self.lock().random_range(low..high)
    }

    /// Uniformly selected element, or `None` for an empty slice.
    pub fn choose<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_in_range(0, items.len()))
    }

    pub fn shuffle<T>(&self, items: &mut [T]) {
        items.shuffle(&mut *self.lock());
    }

    pub fn coin_flip(&self) -> bool {
        self.lock().random_bool(0.5)
    }
}
