use fj_matrix::{
    ForkJoinMultiplier, Matrix, MatrixError, MatrixMultiplier, ProgressFn, SequentialMultiplier,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicUsize, Ordering};

fn random_rows(rng: &mut StdRng, rows: usize, cols: usize) -> Vec<Vec<f64>> {
    (0..rows)
        .map(|_| (0..cols).map(|_| rng.gen_range(-10.0..10.0)).collect())
        .collect()
}

#[test]
fn parallel_matches_sequential_for_every_threshold() {
    let mut rng = StdRng::seed_from_u64(42);
    let a = Matrix::new(&random_rows(&mut rng, 23, 11)).unwrap();
    let b = Matrix::new(&random_rows(&mut rng, 11, 7)).unwrap();
    let expected = SequentialMultiplier::new().multiply(&a, &b).unwrap();

    for threshold in 1..=a.rows() {
        let actual = ForkJoinMultiplier::new(threshold)
            .unwrap()
            .multiply(&a, &b)
            .unwrap();
        assert_eq!(actual.rows(), a.rows());
        assert_eq!(actual.cols(), b.cols());
        for i in 0..actual.rows() {
            for j in 0..actual.cols() {
                approx::assert_abs_diff_eq!(
                    actual.get(i, j).unwrap(),
                    expected.get(i, j).unwrap(),
                    epsilon = 1e-9
                );
            }
        }
    }
}

#[test]
fn dot_product_scenario() {
    let a = Matrix::new(&[vec![1.0, 2.0, 3.0]]).unwrap();
    let b = Matrix::new(&[vec![4.0], vec![5.0], vec![6.0]]).unwrap();
    assert_eq!(
        SequentialMultiplier::new().multiply(&a, &b).unwrap().to_rows(),
        vec![vec![32.0]]
    );
    for threshold in 1..=3 {
        let c = ForkJoinMultiplier::new(threshold)
            .unwrap()
            .multiply(&a, &b)
            .unwrap();
        assert_eq!(c.to_rows(), vec![vec![32.0]]);
    }
}

#[test]
fn incompatible_shapes_rejected_by_both() {
    let a = Matrix::new(&[vec![1.0, 2.0]]).unwrap();
    let b = Matrix::new(&[vec![1.0, 2.0]]).unwrap();
    let multipliers: [Box<dyn MatrixMultiplier>; 2] = [
        Box::new(SequentialMultiplier::new()),
        Box::new(ForkJoinMultiplier::new(1).unwrap()),
    ];
    for mm in &multipliers {
        assert!(
            matches!(
                mm.multiply(&a, &b),
                Err(MatrixError::DimensionMismatch { .. })
            ),
            "{} accepted incompatible shapes",
            mm.name()
        );
    }
}

#[test]
fn malformed_construction_rejected() {
    let empty: Vec<Vec<f64>> = Vec::new();
    assert!(matches!(Matrix::new(&empty), Err(MatrixError::Shape(_))));
    assert!(matches!(Matrix::new(&[vec![]]), Err(MatrixError::Shape(_))));
    assert!(matches!(
        Matrix::new(&[vec![1.0, 2.0], vec![3.0]]),
        Err(MatrixError::Shape(_))
    ));
}

#[test]
fn progress_final_count_equals_rows() {
    let mut rng = StdRng::seed_from_u64(9);
    let a = Matrix::new(&random_rows(&mut rng, 50, 6)).unwrap();
    let b = Matrix::new(&random_rows(&mut rng, 6, 3)).unwrap();
    let calls = AtomicUsize::new(0);
    let max_seen = AtomicUsize::new(0);
    let cb: &ProgressFn<'_> = &|n| {
        calls.fetch_add(1, Ordering::Relaxed);
        max_seen.fetch_max(n, Ordering::Relaxed);
    };

    for threshold in [1, 4, 50] {
        calls.store(0, Ordering::Relaxed);
        max_seen.store(0, Ordering::Relaxed);
        ForkJoinMultiplier::new(threshold)
            .unwrap()
            .multiply_with_progress(&a, &b, Some(cb))
            .unwrap();
        assert_eq!(calls.load(Ordering::Relaxed), 50);
        assert_eq!(max_seen.load(Ordering::Relaxed), 50);
    }
}

#[test]
fn full_recursion_and_single_leaf_agree_on_100x100() {
    let mut rng = StdRng::seed_from_u64(2024);
    let a = Matrix::new(&random_rows(&mut rng, 100, 100)).unwrap();
    let fine = ForkJoinMultiplier::new(1).unwrap().multiply(&a, &a).unwrap();
    let coarse = ForkJoinMultiplier::new(100).unwrap().multiply(&a, &a).unwrap();
    assert_eq!(fine.as_slice(), coarse.as_slice());
}
