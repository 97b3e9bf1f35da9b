//! Error types for matrix construction and distance computation

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The two matrices passed to a distance computation have a different
    /// number of columns, so their rows cannot be compared.
    #[error("dimension mismatch: x has {x_cols} columns but y has {y_cols}")]
    DimensionMismatch { x_cols: usize, y_cols: usize },

    #[error("a {rows}x{cols} matrix cannot hold {len} values")]
    Shape { rows: usize, cols: usize, len: usize },

    #[error("row {row} has {found} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
