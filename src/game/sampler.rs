use rand::{seq::SliceRandom, Rng};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("asked for {requested} items but only {available} are available")]
pub struct NotEnoughItems {
    pub requested: usize,
    pub available: usize,
}

/// Uniformly shuffles its own copy of `items` and keeps the first `k`.
///
/// `rand`'s in-place shuffle is a Fisher-Yates walk from the back of the
/// slice, so every permutation is equally likely and the prefix is an
/// unbiased sample.
pub fn sample<T>(mut items: Vec<T>, k: usize, rng: &mut impl Rng) -> Result<Vec<T>, NotEnoughItems> {
    if k > items.len() {
        return Err(NotEnoughItems {
            requested: k,
            available: items.len(),
        });
    }

    items.shuffle(rng);
    items.truncate(k);

    Ok(items)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{rngs::StdRng, SeedableRng};

    use super::{sample, NotEnoughItems};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn keeps_exactly_k_distinct_inputs() {
        let picked = sample(vec![1, 2, 3, 4, 5, 6, 7], 3, &mut rng()).expect("7 choose 3 is fine");

        assert_eq!(picked.len(), 3);

        let unique: HashSet<i32> = picked.iter().copied().collect();
        assert_eq!(unique.len(), 3, "sampled items should not repeat");

        for item in picked {
            assert!((1..=7).contains(&item), "sampler invented {item}");
        }
    }

    #[test]
    fn full_draw_is_a_permutation() {
        let mut picked = sample(vec![4, 1, 3, 2], 4, &mut rng()).expect("k == len is allowed");
        picked.sort_unstable();

        pretty_assertions::assert_eq!(picked, vec![1, 2, 3, 4]);
    }

    #[test]
    fn zero_draw_is_empty() {
        let picked = sample(vec!["a", "b"], 0, &mut rng()).expect("k == 0 is allowed");
        assert!(picked.is_empty());
    }

    #[test]
    fn refuses_oversized_draw() {
        let err = sample(vec![1, 2, 3], 5, &mut rng()).expect_err("only 3 items to draw from");

        pretty_assertions::assert_eq!(
            err,
            NotEnoughItems {
                requested: 5,
                available: 3,
            }
        );
    }

    #[test]
    fn draws_each_item_about_equally_often() {
        let mut rng = rng();
        let mut counts = [0usize; 6];

        const ROUNDS: usize = 2000;
        for _ in 0..ROUNDS {
            for item in sample((0..6).collect(), 3, &mut rng).expect("6 choose 3 is fine") {
                counts[item] += 1;
            }
        }

        // each of the 6 items should land in roughly half of the draws
        let expected = ROUNDS * 3 / 6;
        for (item, count) in counts.iter().enumerate() {
            assert!(
                (expected * 85 / 100..=expected * 115 / 100).contains(count),
                "item {item} drawn {count} times, expected about {expected}"
            );
        }
    }
}
