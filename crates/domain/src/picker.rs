use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_chacha::ChaCha8Rng;

/// Source of the "pick one of N" decisions made during exercise selection.
pub trait Picker {
    /// Index in `0..len`. Only called with `len > 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform choice backed by a random number generator.
pub struct RandomPicker<R> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicker<StdRng> {
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl RandomPicker<ChaCha8Rng> {
    /// Reproducible picks for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Picker for RandomPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed sequence of picks, wrapping each into the candidate range.
///
/// Once the sequence is exhausted it keeps picking the first candidate.
#[derive(Debug, Default, Clone)]
pub struct FixedPicker {
    picks: Vec<usize>,
    next: usize,
}

impl FixedPicker {
    #[must_use]
    pub fn new(picks: Vec<usize>) -> Self {
        Self { picks, next: 0 }
    }

    #[must_use]
    pub fn first() -> Self {
        Self::default()
    }
}

impl Picker for FixedPicker {
    fn pick(&mut self, len: usize) -> usize {
        let pick = self.picks.get(self.next).copied().unwrap_or(0);
        self.next += 1;
        pick % len
    }
}

impl<P: Picker + ?Sized> Picker for &mut P {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

impl<P: Picker + ?Sized> Picker for Box<P> {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}
