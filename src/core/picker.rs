/// Random sources for template draws.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses one index out of `len` candidates.
///
/// Callers never pass `len == 0`.
pub trait Picker {
    fn pick(&mut self, len: usize) -> usize;
}

/// Pick one element of a non-empty slice.
pub fn choose<'a, T, P: Picker + ?Sized>(picker: &mut P, items: &'a [T]) -> &'a T {
    let idx = picker.pick(items.len());
    &items[idx % items.len()]
}

/// Uniform picker backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomPicker<R = StdRng> {
    rng: R,
}

impl RandomPicker<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Picker for RandomPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Deterministic picker that replays a fixed list of indices, cycling when
/// exhausted. Indices past the end of a pool wrap around.
#[derive(Debug, Clone)]
pub struct SequencePicker {
    indices: Vec<usize>,
    cursor: usize,
}

impl SequencePicker {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, cursor: 0 }
    }

    /// Always picks the first candidate.
    pub fn first() -> Self {
        Self::new(vec![0])
    }
}

impl Picker for SequencePicker {
    fn pick(&mut self, len: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let idx = self.indices[self.cursor % self.indices.len()];
        self.cursor += 1;
        idx % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_picker_is_deterministic() {
        let mut a = RandomPicker::seeded(42);
        let mut b = RandomPicker::seeded(42);
        let xs: Vec<usize> = (0..20).map(|_| a.pick(7)).collect();
        let ys: Vec<usize> = (0..20).map(|_| b.pick(7)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn random_picker_stays_in_range() {
        let mut p = RandomPicker::seeded(7);
        for len in 1..10 {
            for _ in 0..50 {
                assert!(p.pick(len) < len);
            }
        }
    }

    #[test]
    fn sequence_picker_cycles_and_wraps() {
        let mut p = SequencePicker::new(vec![1, 2, 5]);
        assert_eq!(p.pick(3), 1);
        assert_eq!(p.pick(3), 2);
        assert_eq!(p.pick(3), 2); // 5 % 3
        assert_eq!(p.pick(3), 1);
    }

    #[test]
    fn empty_sequence_picks_first() {
        let mut p = SequencePicker::new(Vec::new());
        assert_eq!(p.pick(4), 0);
    }

    #[test]
    fn choose_from_slice() {
        let items = ["a", "b", "c"];
        let mut p = SequencePicker::new(vec![2]);
        assert_eq!(*choose(&mut p, &items), "c");
    }
}
