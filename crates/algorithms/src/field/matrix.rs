//! Rectangular matrices over GF(2^m)

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use zeroize::Zeroize;

use super::{BinaryField, FieldElement};
use crate::code::BinaryMatrix;
use crate::error::{Error, Result};

/// A rectangular matrix of GF(2^m) elements, stored row-major.
///
/// Every element shares the field carried by the type parameter, so a
/// field matrix can never be mixed with a plain bit matrix without an
/// explicit lift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatrix<F: BinaryField> {
    rows: usize,
    cols: usize,
    data: Vec<FieldElement<F>>,
}

impl<F: BinaryField> FieldMatrix<F> {
    /// Creates an all-zero matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![FieldElement::zero(); rows * cols],
        }
    }

    /// Lifts a binary matrix into the field: each 0/1 entry becomes the
    /// corresponding field constant.
    pub fn from_binary(bits: &BinaryMatrix) -> Self {
        let mut out = Self::zeros(bits.rows(), bits.cols());
        for i in 0..bits.rows() {
            for j in 0..bits.cols() {
                if bits.get(i, j) == 1 {
                    out.set(i, j, FieldElement::one());
                }
            }
        }
        out
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Element at (row, col).
    pub fn get(&self, row: usize, col: usize) -> FieldElement<F> {
        self.data[row * self.cols + col]
    }

    /// Overwrites the element at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: FieldElement<F>) {
        self.data[row * self.cols + col] = value;
    }

    /// Standard triple-loop matrix product over the field.
    ///
    /// Operand shape disagreement is a fatal precondition violation and
    /// reports [`Error::Dimension`].
    pub fn mul(&self, rhs: &Self) -> Result<Self> {
        if self.cols != rhs.rows {
            return Err(Error::Dimension {
                context: "field matrix multiply",
                expected: (self.cols, rhs.cols),
                actual: (rhs.rows, rhs.cols),
            });
        }
        let mut out = Self::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a = self.get(i, k);
                if a.is_zero() {
                    continue;
                }
                for j in 0..rhs.cols {
                    let sum = out.get(i, j) + a * rhs.get(k, j);
                    out.set(i, j, sum);
                }
            }
        }
        Ok(out)
    }

    /// Matrix transpose.
    pub fn transpose(&self) -> Self {
        let mut out = Self::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.set(j, i, self.get(i, j));
            }
        }
        out
    }

    /// Whether every element of the matrix is zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|e| e.is_zero())
    }
}

impl<F: BinaryField> Zeroize for FieldMatrix<F> {
    fn zeroize(&mut self) {
        self.data.zeroize();
    }
}
