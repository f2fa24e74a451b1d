use fj_matrix::Matrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;

/// Returns a `StdRng` seeded from `seed`, or from OS entropy when `None`.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Create a `rows x cols` matrix of values drawn uniformly from `[0, 1)`.
pub fn random_matrix<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Matrix> {
    let data = (0..rows * cols).map(|_| rng.gen::<f64>()).collect();
    Ok(Matrix::from_vec(rows, cols, data)?)
}
