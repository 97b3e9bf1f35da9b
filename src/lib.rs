//! Pairwise Hamming distance matrices.
//!
//! Given a matrix `x` of behavioural vectors (one row per user) and a matrix
//! `y` of reference vectors (one row per group), [`hamming_distance_matrix`]
//! returns the `x.rows() x y.rows()` matrix of distances between them.
//! Picking the closest group for each user is left to the caller.

pub use distance::{hamming_distance_matrix, pairwise};
pub use error::{Error, Result};
pub use matrix::Matrix;
pub use metric::{Hamming, Metric, Mismatches};

mod distance;
mod error;
mod matrix;
mod metric;
