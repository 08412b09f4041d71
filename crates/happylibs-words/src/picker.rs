//! Random index sources used to pick words.
//!
//! [`WordStore`](crate::WordStore) never touches a random generator directly;
//! it asks an [`IndexPicker`] for a position inside a category. The default
//! picker draws from the calling thread's generator, so a shared store can be
//! used from several threads without extra locking. Tests substitute a
//! [`SeededPicker`] or their own implementation for deterministic output.

use std::fmt;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed indices.
pub trait IndexPicker: Send + Sync {
    /// Return an index in `0..len`.
    ///
    /// Callers guarantee `len > 0`.
    fn pick(&self, len: usize) -> usize;
}

/// Picks with `rand::thread_rng()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngPicker;

impl IndexPicker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Reproducible picker backed by a seeded `StdRng`.
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl fmt::Debug for SeededPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeededPicker").finish_non_exhaustive()
    }
}

impl IndexPicker for SeededPicker {
    fn pick(&self, len: usize) -> usize {
        // Poisoning leaves the generator state valid.
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        rng.gen_range(0..len)
    }
}

impl<F> IndexPicker for F
where
    F: Fn(usize) -> usize + Send + Sync,
{
    fn pick(&self, len: usize) -> usize {
        self(len)
    }
}
