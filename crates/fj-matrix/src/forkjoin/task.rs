// Recursive row-range task.
//
// A task owns `&mut` access to exactly the output rows it covers. Splitting
// hands the two halves to the children via `split_at_mut`, so two in-flight
// tasks can never write the same row and the buffer needs no locking.

use tracing::trace;

use crate::kernel::multiply_rows;
use crate::matrix::Matrix;
use crate::progress::Progress;

/// State shared by every node of one multiplication's task tree.
pub(super) struct RowTask<'a> {
    pub(super) a: &'a Matrix,
    pub(super) b: &'a Matrix,
    pub(super) threshold: usize,
    pub(super) progress: &'a Progress<'a>,
}

impl RowTask<'_> {
    /// Computes output rows `[start, end)` into `out`, which holds exactly
    /// those rows.
    pub(super) fn compute(&self, start: usize, end: usize, out: &mut [f64]) {
        debug_assert_eq!(out.len(), (end - start) * self.b.cols());

        let count = end - start;
        if count <= self.threshold {
            trace!(start, end, "leaf task");
            multiply_rows(self.a, self.b, start, out, || {
                self.progress.row_completed();
            });
            return;
        }

        // Floor split: the right half gets the extra row when `count` is odd.
        let mid = start + count / 2;
        let (left, right) = out.split_at_mut((mid - start) * self.b.cols());

        // `rayon::join` runs its first closure on this worker and offers the
        // second one to thieves: the right half continues here, the left half
        // is forked. Both halves recurse with the same rule.
        rayon::join(
            || self.compute(mid, end, right),
            || self.compute(start, mid, left),
        );
    }
}

/// Splits `[start, end)` the way [`RowTask::compute`] does and returns the
/// leaf ranges in row order.
#[cfg(test)]
fn leaf_ranges(start: usize, end: usize, threshold: usize) -> Vec<(usize, usize)> {
    let count = end - start;
    if count <= threshold {
        return vec![(start, end)];
    }
    let mid = start + count / 2;
    let mut ranges = leaf_ranges(start, mid, threshold);
    ranges.extend(leaf_ranges(mid, end, threshold));
    ranges
}
