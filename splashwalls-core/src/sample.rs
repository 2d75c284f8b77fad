use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SampleError {
    #[error("cannot draw {requested} unique indices from a population of {population}")]
    CountExceedsPopulation { requested: usize, population: usize },
}

/// Draws `count` distinct indices uniformly from `[0, population)`, in no
/// particular order.
///
/// Rejection sampling: redraw on a duplicate until enough distinct indices
/// accumulate. Fine while `count` stays small next to `population` (the app
/// asks for 5 out of a list of dozens); it slows down as the two approach.
pub fn unique_random_indices(count: usize, population: usize) -> Result<Vec<usize>, SampleError> {
    if count > population {
        return Err(SampleError::CountExceedsPopulation {
            requested: count,
            population,
        });
    }

    let mut rng = rand::thread_rng();
    let mut picked: Vec<usize> = Vec::with_capacity(count);

    while picked.len() < count {
        let candidate = rng.gen_range(0..population);
        if !picked.contains(&candidate) {
            picked.push(candidate);
        }
    }

    Ok(picked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_distinct_and_in_range() {
        for (count, population) in [(5, 30), (1, 1), (3, 4), (10, 200)] {
            let indices = unique_random_indices(count, population).unwrap();
            assert_eq!(indices.len(), count);
            for &index in &indices {
                assert!(index < population);
            }
            let mut sorted = indices.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), count, "duplicate index in {:?}", indices);
        }
    }

    #[test]
    fn zero_count_returns_empty() {
        assert!(unique_random_indices(0, 10).unwrap().is_empty());
        assert!(unique_random_indices(0, 0).unwrap().is_empty());
    }

    #[test]
    fn full_count_is_a_permutation() {
        let mut indices = unique_random_indices(7, 7).unwrap();
        indices.sort_unstable();
        assert_eq!(indices, (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn oversized_count_is_rejected() {
        let err = unique_random_indices(6, 5).unwrap_err();
        assert_eq!(
            err,
            SampleError::CountExceedsPopulation {
                requested: 6,
                population: 5,
            }
        );
        assert!(unique_random_indices(1, 0).is_err());
    }
}
