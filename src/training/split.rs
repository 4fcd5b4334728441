//! Seeded train/test partitioning
//!
//! The partition must be reproducible across runs so fitted weights and
//! metrics can be compared; everything downstream of the seed is
//! deterministic.

use crate::{HoopsError, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Partition row indices `0..n_rows` into (train, test).
///
/// Rows are shuffled with a seeded RNG and the test set is taken from
/// the tail: `n_test = clamp(floor(n * fraction), 1, n - 1)`. The same
/// seed, row count and fraction always produce the same partition.
pub fn train_test_split(
    n_rows: usize,
    test_fraction: f64,
    seed: u64,
) -> Result<(Vec<usize>, Vec<usize>)> {
    if n_rows < 2 {
        return Err(HoopsError::InsufficientData(format!(
            "need at least 2 rows to split, have {}",
            n_rows
        )));
    }
    if !(0.0..=1.0).contains(&test_fraction) {
        return Err(HoopsError::Config(format!(
            "test fraction must be in [0, 1], got {}",
            test_fraction
        )));
    }

    let n_test = ((n_rows as f64 * test_fraction).floor() as usize).clamp(1, n_rows - 1);

    let mut indices: Vec<usize> = (0..n_rows).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let test = indices.split_off(n_rows - n_test);
    Ok((indices, test))
}
