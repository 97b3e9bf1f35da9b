use crate::error::{Error, Result};
use core::fmt;
use core::ops::{Index, IndexMut};
use num_traits::{One, Zero};
use rand_core::{RngCore, SeedableRng};
use rand_pcg::Pcg64;
#[cfg(feature = "serde")]
use core::convert::TryFrom;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{vec, vec::Vec};

/// A dense, rectangular, row-major matrix.
///
/// A matrix can have zero rows, zero columns, or both. A matrix with zero
/// rows still knows how many columns it has, which matters when it is
/// compared against another matrix.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMatrix<T>"))]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    /// Row `r` occupies `data[r * cols..(r + 1) * cols]`.
    data: Vec<T>,
}

/// Unchecked wire form of a [`Matrix`], validated on the way in.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawMatrix<T>> for Matrix<T> {
    type Error = Error;

    fn try_from(raw: RawMatrix<T>) -> Result<Self> {
        Self::from_shape_vec(raw.rows, raw.cols, raw.data)
    }
}

fn checked_len(rows: usize, cols: usize, len: usize) -> Result<usize> {
    match rows.checked_mul(cols) {
        Some(expected) if expected == len => Ok(expected),
        _ => Err(Error::Shape { rows, cols, len }),
    }
}

impl<T> Matrix<T> {
    /// Creates a matrix from `rows * cols` values laid out row by row.
    pub fn from_shape_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        checked_len(rows, cols, data.len())?;
        Ok(Self { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether the matrix has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Returns row `row` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[T] {
        assert!(
            row < self.rows,
            "row index {} out of range for {} rows",
            row,
            self.rows
        );
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterates over the rows in order, including for matrices with zero
    /// columns (each row is then an empty slice).
    pub fn iter_rows(&self) -> impl '_ + ExactSizeIterator<Item = &[T]> {
        (0..self.rows).map(move |row| self.row(row))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Clone> Matrix<T> {
    /// Creates a matrix from column-major values, the layout R and Fortran
    /// use for their matrices.
    pub fn from_column_major(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        checked_len(rows, cols, data.len())?;
        let data = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| col * rows + row))
            .map(|ix| data[ix].clone())
            .collect();
        Ok(Self { rows, cols, data })
    }

    /// Creates a matrix from a list of rows, each of which must hold exactly
    /// `cols` values. An empty list gives a `0 x cols` matrix.
    pub fn from_rows<R: AsRef<[T]>>(cols: usize, rows: &[R]) -> Result<Self> {
        for (ix, row) in rows.iter().enumerate() {
            let found = row.as_ref().len();
            if found != cols {
                return Err(Error::RaggedRow {
                    row: ix,
                    expected: cols,
                    found,
                });
            }
        }
        // Only zero-sized `T` can get here with a length that overflows.
        let len = rows.len().checked_mul(cols).ok_or(Error::Shape {
            rows: rows.len(),
            cols,
            len: usize::MAX,
        })?;
        let mut data = Vec::with_capacity(len);
        for row in rows {
            data.extend_from_slice(row.as_ref());
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    pub fn transpose(&self) -> Self {
        let data = (0..self.cols)
            .flat_map(|col| (0..self.rows).map(move |row| row * self.cols + col))
            .map(|ix| self.data[ix].clone())
            .collect();
        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }
}

impl<T: Zero + Clone> Matrix<T> {
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize` or the allocation fails.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }
}

impl<T: Zero + One> Matrix<T> {
    /// Fills a `rows x cols` matrix with values drawn uniformly from {0, 1}.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize` or the allocation fails.
    pub fn random_binary<R: RngCore + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let data = (0..rows * cols)
            .map(|_| {
                if rng.next_u32() & 1 == 1 {
                    T::one()
                } else {
                    T::zero()
                }
            })
            .collect();
        Self { rows, cols, data }
    }

    /// Like [`Matrix::random_binary`], but reproducible from `seed`.
    pub fn random_binary_seeded(rows: usize, cols: usize, seed: u64) -> Self {
        let mut rng = Pcg64::seed_from_u64(seed);
        Self::random_binary(rows, cols, &mut rng)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of range for a {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of range for a {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            let mut values = row.iter();
            if let Some(first) = values.next() {
                write!(f, "{}", first)?;
            }
            for value in values {
                write!(f, " {}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
