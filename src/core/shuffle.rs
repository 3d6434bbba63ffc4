//! # Answer Randomizer
//!
//! Unbiased Fisher–Yates shuffle over a copy of the input. Pass a seeded
//! `SmallRng` for reproducible orderings, `thread_rng()` otherwise.

use rand::Rng;

/// Returns a uniformly random permutation of `items`. The input is not touched.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::HashMap;

    #[test]
    fn test_shuffle_is_permutation_for_random_inputs() {
        let mut rng = SmallRng::seed_from_u64(0xC0FFEE);
        for _ in 0..500 {
            let len = rng.gen_range(1..40);
            let items: Vec<u8> = (0..len).map(|_| rng.gen_range(0..10)).collect();
            let shuffled = shuffle(&items, &mut rng);

            assert_eq!(shuffled.len(), items.len());
            let mut a = items.clone();
            let mut b = shuffled.clone();
            a.sort();
            b.sort();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_shuffle_does_not_mutate_input() {
        let items = vec!["a", "b", "c", "d"];
        let mut rng = SmallRng::seed_from_u64(1);
        let _ = shuffle(&items, &mut rng);
        assert_eq!(items, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_shuffle_deterministic_with_seed() {
        let items: Vec<u32> = (0..10).collect();
        let a = shuffle(&items, &mut SmallRng::seed_from_u64(42));
        let b = shuffle(&items, &mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut rng = SmallRng::seed_from_u64(3);
        assert!(shuffle::<u8, _>(&[], &mut rng).is_empty());
        assert_eq!(shuffle(&[9], &mut rng), vec![9]);
    }

    #[test]
    fn test_shuffle_covers_all_orderings() {
        // 3 elements → 6 permutations, each should show up roughly 1/6 of the time.
        let items = [1, 2, 3];
        let mut rng = SmallRng::seed_from_u64(99);
        let mut counts: HashMap<Vec<i32>, usize> = HashMap::new();
        let trials = 6000;
        for _ in 0..trials {
            *counts.entry(shuffle(&items, &mut rng)).or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        for count in counts.values() {
            assert!(*count > 800 && *count < 1200, "skewed count {count}");
        }
    }
}
