use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{SeedableRng, rng};

use quiz_core::model::Permutation;

/// Randomness source for question selection and option order.
///
/// `Seeded` and `Identity` make runs reproducible; `Thread` is the default for
/// interactive use.
#[derive(Debug, Clone, Default)]
pub enum Shuffler {
    #[default]
    Thread,
    Seeded(StdRng),
    Identity,
}

impl Shuffler {
    #[must_use]
    pub fn thread() -> Self {
        Self::Thread
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn identity() -> Self {
        Self::Identity
    }

    /// An independent shuffler for a new run. Seeded shufflers derive their
    /// child from their own stream, so a seed reproduces every run in order.
    pub fn fork(&mut self) -> Self {
        match self {
            Shuffler::Thread => Shuffler::Thread,
            Shuffler::Seeded(rng) => Shuffler::Seeded(StdRng::from_rng(rng)),
            Shuffler::Identity => Shuffler::Identity,
        }
    }

    /// Uniform in-place Fisher–Yates shuffle. `Identity` leaves `items` untouched.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        match self {
            Shuffler::Thread => items.shuffle(&mut rng()),
            Shuffler::Seeded(rng) => items.shuffle(rng),
            Shuffler::Identity => {}
        }
    }

    /// A fresh display order over `len` options.
    pub fn permutation(&mut self, len: usize) -> Permutation {
        let mut order: Vec<usize> = (0..len).collect();
        self.shuffle(&mut order);
        // a reordered identity is always a bijection
        Permutation::from_order(order).unwrap_or_else(|_| Permutation::identity(len))
    }
}
