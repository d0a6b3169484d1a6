use crate::error::{Result, UtilError};
use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Generate a uniformly distributed integer in `[min, max]` (inclusive).
///
/// Uses the thread-local RNG. Returns [`UtilError::InvalidRange`] when
/// `min > max`.
///
/// # Examples
///
/// ```
/// use plain_util::number::random_num;
///
/// let n = random_num(1, 10).unwrap();
/// assert!((1..=10).contains(&n));
/// assert!(random_num(10, 1).is_err());
/// ```
pub fn random_num(min: i64, max: i64) -> Result<i64> {
    random_num_with(&mut rand::thread_rng(), min, max)
}

/// Same as [`random_num`], drawing from a caller-supplied RNG.
pub fn random_num_with<R: Rng>(rng: &mut R, min: i64, max: i64) -> Result<i64> {
    if min > max {
        tracing::debug!(min, max, "rejecting empty random range");
        return Err(UtilError::InvalidRange { min, max });
    }
    Ok(rng.gen_range(min..=max))
}

/// A reproducible random number source.
///
/// Uses the xoshiro256** PRNG, so two generators built from the same seed
/// produce the same sequence.
///
/// # Examples
///
/// ```
/// use plain_util::number::SeededRandom;
///
/// let mut a = SeededRandom::new(Some(42));
/// let mut b = SeededRandom::new(Some(42));
/// assert_eq!(a.random_num(0, 1000).unwrap(), b.random_num(0, 1000).unwrap());
///
/// let choices = ["a", "b", "c"];
/// let picked = a.pick(&choices).unwrap();
/// assert!(choices.contains(picked));
/// ```
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: Xoshiro256StarStar,
}

impl SeededRandom {
    /// Create a generator with an optional seed.
    ///
    /// If no seed is provided, one is drawn from `OsRng`.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| OsRng.next_u64());
        Self {
            seed,
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }

    /// The seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate an integer in `[min, max]` (inclusive).
    pub fn random_num(&mut self, min: i64, max: i64) -> Result<i64> {
        random_num_with(&mut self.rng, min, max)
    }

    /// Pick a random element from a slice, `None` if it is empty.
    pub fn pick<'a, T>(&mut self, elements: &'a [T]) -> Option<&'a T> {
        if elements.is_empty() {
            return None;
        }
        let idx = self.rng.gen_range(0..elements.len());
        elements.get(idx)
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_num_in_range() {
        for _ in 0..100 {
            let n = random_num(1, 10).unwrap();
            assert!((1..=10).contains(&n));
        }
    }

    #[test]
    fn test_random_num_single_value_range() {
        assert_eq!(random_num(7, 7), Ok(7));
    }

    #[test]
    fn test_random_num_negative_bounds() {
        for _ in 0..100 {
            let n = random_num(-5, -1).unwrap();
            assert!((-5..=-1).contains(&n));
        }
    }

    #[test]
    fn test_random_num_rejects_inverted_range() {
        assert_eq!(
            random_num(10, 1),
            Err(UtilError::InvalidRange { min: 10, max: 1 })
        );
    }

    #[test]
    fn test_random_num_full_range() {
        assert!(random_num(i64::MIN, i64::MAX).is_ok());
    }

    #[test]
    fn test_random_num_hits_both_bounds() {
        let mut rng = SeededRandom::new(Some(7));
        let mut seen = [false; 3];
        for _ in 0..200 {
            let n = rng.random_num(0, 2).unwrap();
            seen[n as usize] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn test_seeded_random_reproducible() {
        let mut a = SeededRandom::new(Some(0x5eed));
        let mut b = SeededRandom::new(Some(0x5eed));
        let xs: Vec<i64> = (0..20).map(|_| a.random_num(-100, 100).unwrap()).collect();
        let ys: Vec<i64> = (0..20).map(|_| b.random_num(-100, 100).unwrap()).collect();
        assert_eq!(xs, ys);
        assert_eq!(a.seed(), 0x5eed);
    }

    #[test]
    fn test_seeded_random_without_seed() {
        let mut rng = SeededRandom::default();
        let n = rng.random_num(1, 6).unwrap();
        assert!((1..=6).contains(&n));
    }

    #[test]
    fn test_pick() {
        let mut rng = SeededRandom::new(Some(1));
        let choices = [1, 2, 3];
        for _ in 0..50 {
            assert!(choices.contains(rng.pick(&choices).unwrap()));
        }
        let empty: [i32; 0] = [];
        assert_eq!(rng.pick(&empty), None);
    }
}
