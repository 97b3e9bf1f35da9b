//! Hand-written distance matrices that are easy to check by eye.

use hamming_matrix::{hamming_distance_matrix, pairwise, Error, Matrix, Mismatches};

fn users_and_groups() -> (Matrix<f64>, Matrix<f64>) {
    let users = Matrix::from_rows(
        4,
        &[
            [1.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 0.0],
            [1.0, 1.0, 1.0, 1.0],
        ],
    )
    .unwrap();
    let groups = Matrix::from_rows(4, &[[1.0, 0.0, 1.0, 1.0], [0.0, 1.0, 0.0, 1.0]]).unwrap();
    (users, groups)
}

#[test]
fn single_user_two_groups() {
    let x = Matrix::from_rows(3, &[[1, 0, 1]]).unwrap();
    let y = Matrix::from_rows(3, &[[1, 1, 1], [0, 0, 0]]).unwrap();
    let d = hamming_distance_matrix(&x, &y).unwrap();
    assert_eq!(d, Matrix::from_rows(2, &[[1, 2]]).unwrap());
}

#[test]
fn users_against_groups() {
    let (users, groups) = users_and_groups();
    let d = hamming_distance_matrix(&users, &groups).unwrap();
    assert_eq!(d.shape(), (3, 2));
    assert_eq!(d.row(0), &[1.0, 4.0]);
    assert_eq!(d.row(1), &[3.0, 2.0]);
    assert_eq!(d.row(2), &[1.0, 2.0]);
}

#[test]
fn swapping_inputs_transposes() {
    let (users, groups) = users_and_groups();
    let d = hamming_distance_matrix(&users, &groups).unwrap();
    let swapped = hamming_distance_matrix(&groups, &users).unwrap();
    assert_eq!(swapped, d.transpose());
}

#[test]
fn binary_distance_counts_mismatches() {
    let (users, groups) = users_and_groups();
    let d = hamming_distance_matrix(&users, &groups).unwrap();
    let counted = pairwise(&Mismatches, &users, &groups).unwrap();
    for i in 0..d.rows() {
        for j in 0..d.cols() {
            assert_eq!(d[(i, j)], counted[(i, j)] as f64);
        }
    }
}

#[test]
fn self_distance_is_zero() {
    let (users, _) = users_and_groups();
    let d = hamming_distance_matrix(&users, &users).unwrap();
    for i in 0..users.rows() {
        assert_eq!(d[(i, i)], 0.0);
    }
}

#[test]
fn empty_users() {
    let x = Matrix::<f64>::zeros(0, 3);
    let y = Matrix::from_rows(3, &[[1.0, 1.0, 1.0], [0.0, 0.0, 0.0]]).unwrap();
    let d = hamming_distance_matrix(&x, &y).unwrap();
    assert_eq!(d.shape(), (0, 2));
    assert!(d.is_empty());
}

#[test]
fn non_binary_values_are_accepted() {
    let x = Matrix::from_rows(2, &[[0.5, -2.0]]).unwrap();
    let y = Matrix::from_rows(2, &[[1.5, 2.0]]).unwrap();
    let d = hamming_distance_matrix(&x, &y).unwrap();
    assert_eq!(d[(0, 0)], 5.0);
}

#[test]
fn column_major_input() {
    // Column-major, as R hands over `matrix(c(1, 0, 0, 0, 1, 0), ncol = 3)`.
    let x = Matrix::from_column_major(2, 3, vec![1u32, 0, 0, 0, 1, 0]).unwrap();
    let y = Matrix::from_rows(3, &[[1u32, 0, 1]]).unwrap();
    let d = hamming_distance_matrix(&x, &y).unwrap();
    assert_eq!(d.row(0), &[0]);
    assert_eq!(d.row(1), &[2]);
}

#[test]
fn dimension_mismatch() {
    let x = Matrix::<f64>::zeros(1, 3);
    let y = Matrix::<f64>::zeros(1, 2);
    let err = hamming_distance_matrix(&x, &y).unwrap_err();
    assert_eq!(
        err,
        Error::DimensionMismatch {
            x_cols: 3,
            y_cols: 2
        }
    );
    assert_eq!(
        err.to_string(),
        "dimension mismatch: x has 3 columns but y has 2"
    );
}

#[test]
fn random_demo_matrices() {
    let x = Matrix::<f64>::random_binary_seeded(5, 5, 1);
    let y = Matrix::<f64>::random_binary_seeded(3, 5, 2);
    let d = hamming_distance_matrix(&x, &y).unwrap();
    assert_eq!(d.shape(), (5, 3));
    assert!(d.as_slice().iter().all(|&v| (0.0..=5.0).contains(&v)));
}
