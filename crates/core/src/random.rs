//! Randomized ordering helpers shared by every session engine.
//!
//! All functions take the generator explicitly so callers can inject a
//! seeded one in tests.

use rand::Rng;
use thiserror::Error;

use crate::model::CardIndex;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DistractorError {
    #[error("pool of {pool_size} cannot supply {required} distinct options")]
    PoolTooSmall { pool_size: usize, required: usize },

    #[error("correct index {index} is outside a pool of {pool_size}")]
    CorrectOutOfRange { index: usize, pool_size: usize },
}

/// Uniform in-place Fisher–Yates shuffle.
///
/// Walks from the last position down to 1, swapping each element with a
/// uniformly chosen one in `[0, i]`.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Pick `distractors` wrong indices from `[0, pool_size)` without replacement,
/// add `correct`, and return all of them in random order.
///
/// Only indices are guaranteed distinct. Two cards with the same text still
/// render as two identical options.
///
/// # Errors
///
/// Returns `DistractorError::CorrectOutOfRange` if `correct >= pool_size` and
/// `DistractorError::PoolTooSmall` if the pool holds fewer than
/// `distractors + 1` entries.
pub fn sample_distractors<R: Rng + ?Sized>(
    correct: CardIndex,
    pool_size: usize,
    distractors: usize,
    rng: &mut R,
) -> Result<Vec<CardIndex>, DistractorError> {
    let correct_value = correct.value();
    if correct_value >= pool_size {
        return Err(DistractorError::CorrectOutOfRange {
            index: correct_value,
            pool_size,
        });
    }
    let required = distractors + 1;
    if pool_size < required {
        return Err(DistractorError::PoolTooSmall {
            pool_size,
            required,
        });
    }

    // Sample from the complement by skipping over the correct position.
    let mut picked: Vec<CardIndex> = rand::seq::index::sample(rng, pool_size - 1, distractors)
        .into_iter()
        .map(|i| if i >= correct_value { i + 1 } else { i })
        .map(CardIndex::new)
        .collect();
    picked.push(correct);
    shuffle(&mut picked, rng);
    Ok(picked)
}
