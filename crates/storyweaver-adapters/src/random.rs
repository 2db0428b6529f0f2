//! Random source adapters.

use std::sync::Mutex;

use rand::{Rng, SeedableRng, rngs::StdRng};
use storyweaver_core::application::ports::RandomSource;

/// Production source backed by the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

/// Reproducible source: the same seed yields the same sequence of picks.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick(&self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        // A poisoned lock still holds a usable generator.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen_range(0..len)
    }
}

/// Always returns the same index, wrapped into range.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedRandom(pub usize);

impl RandomSource for FixedRandom {
    fn pick(&self, len: usize) -> usize {
        if len == 0 { 0 } else { self.0 % len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_random_stays_in_range() {
        let random = ThreadRandom;
        for len in 1..10 {
            for _ in 0..50 {
                assert!(random.pick(len) < len);
            }
        }
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);
        let first: Vec<_> = (0..20).map(|_| a.pick(5)).collect();
        let second: Vec<_> = (0..20).map(|_| b.pick(5)).collect();
        assert_eq!(first, second);
        assert!(first.iter().all(|&i| i < 5));
    }

    #[test]
    fn single_choice_is_always_zero() {
        assert_eq!(ThreadRandom.pick(1), 0);
        assert_eq!(SeededRandom::new(7).pick(1), 0);
        assert_eq!(FixedRandom(3).pick(1), 0);
    }

    #[test]
    fn fixed_random_wraps() {
        assert_eq!(FixedRandom(1).pick(2), 1);
        assert_eq!(FixedRandom(5).pick(2), 1);
        assert_eq!(FixedRandom(4).pick(2), 0);
    }
}
