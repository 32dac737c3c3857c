//! Dense binary matrices over GF(2)

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng, RngCore};
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// A dense matrix over GF(2), one byte (0 or 1) per entry, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMatrix {
    rows: usize,
    cols: usize,
    bits: Vec<u8>,
}

impl BinaryMatrix {
    /// Creates an all-zero matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            bits: vec![0; rows * cols],
        }
    }

    /// The n×n identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut out = Self::zeros(n, n);
        for i in 0..n {
            out.set(i, i, 1);
        }
        out
    }

    /// Builds a matrix from explicit rows of 0/1 entries.
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        let mut out = Self::zeros(height, width);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(Error::Length {
                    context: "matrix row",
                    expected: width,
                    actual: row.len(),
                });
            }
            for (j, &bit) in row.iter().enumerate() {
                if bit > 1 {
                    return Err(Error::param("matrix entry", "entries must be 0 or 1"));
                }
                out.set(i, j, bit);
            }
        }
        Ok(out)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Entry at (row, col), as 0 or 1.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.bits[row * self.cols + col]
    }

    /// Overwrites the entry at (row, col).
    pub fn set(&mut self, row: usize, col: usize, bit: u8) {
        self.bits[row * self.cols + col] = bit & 1;
    }

    /// Row-major view of the entries, one byte per bit.
    pub fn entries(&self) -> &[u8] {
        &self.bits
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for j in 0..self.cols {
            let tmp = self.get(a, j);
            let other = self.get(b, j);
            self.set(a, j, other);
            self.set(b, j, tmp);
        }
    }

    // XORs row `src` into row `dst`.
    fn add_row(&mut self, dst: usize, src: usize) {
        for j in 0..self.cols {
            let v = self.get(dst, j) ^ self.get(src, j);
            self.set(dst, j, v);
        }
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

    /// GF(2) matrix product.
    pub fn mul(&self, rhs: &Self) -> Result<Self> {
        if self.cols != rhs.rows {
            return Err(Error::Dimension {
                context: "binary matrix multiply",
                expected: (self.cols, rhs.cols),
                actual: (rhs.rows, rhs.cols),
            });
        }
        let mut out = Self::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                if self.get(i, k) == 0 {
                    continue;
                }
                for j in 0..rhs.cols {
                    let v = out.get(i, j) ^ rhs.get(k, j);
                    out.set(i, j, v);
                }
            }
        }
        Ok(out)
    }

    /// Row-vector product v·M for a length-`rows` bit vector v.
    pub fn left_mul_vec(&self, v: &[u8]) -> Result<Vec<u8>> {
        if v.len() != self.rows {
            return Err(Error::Length {
                context: "row vector product",
                expected: self.rows,
                actual: v.len(),
            });
        }
        let mut out = vec![0u8; self.cols];
        for (i, &bit) in v.iter().enumerate() {
            if bit & 1 == 0 {
                continue;
            }
            for j in 0..self.cols {
                out[j] ^= self.get(i, j);
            }
        }
        Ok(out)
    }

    /// Invertibility over GF(2) by Gaussian elimination with partial
    /// pivoting: rows are swapped to bring a pivot into place, and a
    /// column with no available pivot means the matrix is singular.
    pub fn is_invertible(&self) -> bool {
        if self.rows != self.cols {
            return false;
        }
        let mut a = self.clone();
        for i in 0..a.rows {
            let pivot = match (i..a.rows).find(|&r| a.get(r, i) == 1) {
                Some(p) => p,
                None => return false,
            };
            a.swap_rows(i, pivot);
            for r in i + 1..a.rows {
                if a.get(r, i) == 1 {
                    a.add_row(r, i);
                }
            }
        }
        true
    }

    /// Inverse over GF(2) by Gauss–Jordan elimination on the augmented
    /// matrix [A | I].
    pub fn inverse(&self) -> Result<Self> {
        if self.rows != self.cols {
            return Err(Error::Dimension {
                context: "binary matrix inverse",
                expected: (self.rows, self.rows),
                actual: (self.rows, self.cols),
            });
        }
        let n = self.rows;
        let mut a = self.clone();
        let mut inv = Self::identity(n);
        for i in 0..n {
            let pivot = (i..n).find(|&r| a.get(r, i) == 1).ok_or(Error::NotInvertible {
                context: "GF(2) matrix",
            })?;
            a.swap_rows(i, pivot);
            inv.swap_rows(i, pivot);
            for r in 0..n {
                if r != i && a.get(r, i) == 1 {
                    a.add_row(r, i);
                    inv.add_row(r, i);
                }
            }
        }
        Ok(inv)
    }

    /// Basis of the right null space { v : M·vᵀ = 0 }, returned as the
    /// rows of a (cols − rank) × cols matrix.
    pub fn null_space(&self) -> Self {
        let mut a = self.clone();
        let mut pivots: Vec<usize> = Vec::new();
        let mut row = 0;
        for col in 0..a.cols {
            if row == a.rows {
                break;
            }
            let pivot = match (row..a.rows).find(|&r| a.get(r, col) == 1) {
                Some(p) => p,
                None => continue,
            };
            a.swap_rows(row, pivot);
            for r in 0..a.rows {
                if r != row && a.get(r, col) == 1 {
                    a.add_row(r, row);
                }
            }
            pivots.push(col);
            row += 1;
        }

        let free: Vec<usize> = (0..a.cols).filter(|c| !pivots.contains(c)).collect();
        let mut basis = Self::zeros(free.len(), a.cols);
        for (bi, &fc) in free.iter().enumerate() {
            basis.set(bi, fc, 1);
            for (r, &pc) in pivots.iter().enumerate() {
                if a.get(r, fc) == 1 {
                    basis.set(bi, pc, 1);
                }
            }
        }
        basis
    }

    /// Rank over GF(2).
    pub fn rank(&self) -> usize {
        self.cols - self.null_space().rows
    }

    /// Draws a uniformly random matrix.
    pub fn random<R: CryptoRng + RngCore>(rng: &mut R, rows: usize, cols: usize) -> Self {
        let mut out = Self::zeros(rows, cols);
        for bit in out.bits.iter_mut() {
            *bit = rng.gen::<bool>() as u8;
        }
        out
    }

    /// Rejection-samples a random invertible matrix, giving up after
    /// `max_attempts` candidates.
    pub fn random_invertible<R: CryptoRng + RngCore>(
        rng: &mut R,
        size: usize,
        max_attempts: usize,
    ) -> Result<Self> {
        for _ in 0..max_attempts {
            let candidate = Self::random(rng, size, size);
            if candidate.is_invertible() {
                return Ok(candidate);
            }
        }
        Err(Error::Exhausted {
            operation: "invertible matrix sampling",
            attempts: max_attempts,
        })
    }

    /// A uniformly random n×n permutation matrix: the identity with its
    /// rows shuffled.
    pub fn random_permutation<R: CryptoRng + RngCore>(rng: &mut R, n: usize) -> Self {
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(rng);
        let mut out = Self::zeros(n, n);
        for (i, &j) in order.iter().enumerate() {
            out.set(i, j, 1);
        }
        out
    }

    /// Whether the matrix is a permutation matrix (square, exactly one 1
    /// per row and per column).
    pub fn is_permutation(&self) -> bool {
        if self.rows != self.cols {
            return false;
        }
        for i in 0..self.rows {
            let row_sum: u32 = (0..self.cols).map(|j| u32::from(self.get(i, j))).sum();
            if row_sum != 1 {
                return false;
            }
        }
        for j in 0..self.cols {
            let col_sum: u32 = (0..self.rows).map(|i| u32::from(self.get(i, j))).sum();
            if col_sum != 1 {
                return false;
            }
        }
        true
    }
}

impl Zeroize for BinaryMatrix {
    fn zeroize(&mut self) {
        self.bits.zeroize();
    }
}
