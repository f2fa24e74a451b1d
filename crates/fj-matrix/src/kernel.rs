// Row kernel shared by the sequential and fork-join multipliers.
//
// Both paths run exactly this loop nest, so every output cell is accumulated
// in the same `k = 0..n` order and the results agree bit for bit.

use crate::matrix::Matrix;

/// Computes output rows `first_row..first_row + out.len() / b.cols()` of `a @ b`
/// into `out`, calling `on_row` after each row is fully written.
///
/// `out` must hold whole rows of the result (its length is a multiple of
/// `b.cols()`), and `a.cols() == b.rows()` must already have been validated.
pub(crate) fn multiply_rows<F>(
    a: &Matrix,
    b: &Matrix,
    first_row: usize,
    out: &mut [f64],
    mut on_row: F,
) where
    F: FnMut(),
{
    let n = a.cols();
    let p = b.cols();
    let a_data = a.as_slice();
    let b_data = b.as_slice();
    debug_assert_eq!(n, b.rows());
    debug_assert_eq!(out.len() % p, 0);

    for (offset, out_row) in out.chunks_mut(p).enumerate() {
        let i = first_row + offset;
        let a_row = &a_data[i * n..(i + 1) * n];
        for (j, cell) in out_row.iter_mut().enumerate() {
            let mut sum = 0.0f64;
            for (k, &a_ik) in a_row.iter().enumerate() {
                sum += a_ik * b_data[k * p + j];
            }
            *cell = sum;
        }
        on_row();
    }
}
