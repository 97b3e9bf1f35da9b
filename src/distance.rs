use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::metric::{Hamming, Metric};
use core::ops::Sub;
use num_traits::Zero;
use tracing::debug;

/// Computes the distance between every row of `x` and every row of `y`.
///
/// Cell `(i, j)` of the result holds `metric.distance(x.row(i), y.row(j))`,
/// so the result is `x.rows() x y.rows()`. If either input has no rows the
/// result has no cells on that side. If the inputs have no columns every
/// cell is zero apart.
///
/// Fails with [`Error::DimensionMismatch`] before doing any work when the
/// column counts differ.
pub fn pairwise<T, Met>(metric: &Met, x: &Matrix<T>, y: &Matrix<T>) -> Result<Matrix<Met::Unit>>
where
    Met: Metric<T>,
{
    if x.cols() != y.cols() {
        debug!(
            x_cols = x.cols(),
            y_cols = y.cols(),
            "refusing to compare rows of different widths"
        );
        return Err(Error::DimensionMismatch {
            x_cols: x.cols(),
            y_cols: y.cols(),
        });
    }
    debug!(
        x_rows = x.rows(),
        y_rows = y.rows(),
        cols = x.cols(),
        "computing distance matrix"
    );

    // Rows of the output correspond to rows of x, columns to rows of y.
    let mut output = Matrix::zeros(x.rows(), y.rows());
    for (ix, x_row) in x.iter_rows().enumerate() {
        for (iy, y_row) in y.iter_rows().enumerate() {
            output[(ix, iy)] = metric.distance(x_row, y_row);
        }
    }
    Ok(output)
}

/// Pairwise [`Hamming`] distances between the rows of `x` and the rows of `y`.
///
/// Intended for 0/1 behavioural matrices, e.g. users in `x` against the
/// reference groups they should be matched to in `y`. Values outside {0, 1}
/// are accepted and give the Manhattan distance.
///
/// Distances are accumulated in `T`. With `u8` rows wider than 255 columns a
/// sum can overflow, which panics in debug builds and wraps in release
/// builds. Use `pairwise(&Mismatches, x, y)` for wide binary `u8` data, it
/// counts into `usize`.
///
/// ```
/// use hamming_matrix::{hamming_distance_matrix, Matrix};
///
/// let users = Matrix::from_rows(3, &[[1.0, 0.0, 1.0]]).unwrap();
/// let groups = Matrix::from_rows(3, &[[1.0, 1.0, 1.0], [0.0, 0.0, 0.0]]).unwrap();
/// let d = hamming_distance_matrix(&users, &groups).unwrap();
/// assert_eq!(d.row(0), &[1.0, 2.0]);
/// ```
pub fn hamming_distance_matrix<T>(x: &Matrix<T>, y: &Matrix<T>) -> Result<Matrix<T>>
where
    T: Copy + PartialOrd + Sub<Output = T> + Zero,
{
    pairwise(&Hamming, x, y)
}
