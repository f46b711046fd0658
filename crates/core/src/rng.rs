//! RNG module - seeded randomness for board generation
//!
//! Both board policies draw from a [`SimpleRng`] so that a seed reproduces a
//! board exactly. The session owns one generator for its whole lifetime and
//! keeps drawing from it across restarts.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by the high bits; the low bits of an LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Pick one element uniformly. `None` on an empty slice.
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            return None;
        }
        let i = self.next_range(slice.len() as u32) as usize;
        slice.get(i)
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for max in 1..50 {
            for _ in 0..20 {
                assert!(rng.next_range(max) < max);
            }
        }
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = SimpleRng::new(99);
        let mut values: Vec<u32> = (0..36).collect();
        rng.shuffle(&mut values);

        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..36).collect::<Vec<_>>());
    }

    #[test]
    fn test_choose_covers_every_element() {
        let mut rng = SimpleRng::new(3);
        let items = [0usize, 1, 2, 3, 4, 5];
        let mut seen = [false; 6];
        for _ in 0..500 {
            let v = *rng.choose(&items).unwrap();
            seen[v] = true;
        }
        assert!(seen.iter().all(|s| *s));
        assert!(rng.choose::<u8>(&[]).is_none());
    }
}
