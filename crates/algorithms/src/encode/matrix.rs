//! Binary matrix wire format
//!
//! A matrix is flattened row-major and packed 8 bits per byte, MSB
//! first, with the final byte zero-padded. The format carries no shape
//! information; decoding requires the dimensions out of band.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::code::BinaryMatrix;
use crate::error::{Error, Result};

/// Packs a binary matrix into its byte representation.
pub fn matrix_to_bytes(matrix: &BinaryMatrix) -> Vec<u8> {
    let bits = matrix.entries();
    let mut out = vec![0u8; bits.len().div_ceil(8)];
    for (i, &bit) in bits.iter().enumerate() {
        if bit == 1 {
            out[i / 8] |= 1 << (7 - (i % 8));
        }
    }
    out
}

/// Unpacks a byte buffer back into a matrix of the given shape,
/// ignoring any trailing padding bits.
pub fn bytes_to_matrix(bytes: &[u8], rows: usize, cols: usize) -> Result<BinaryMatrix> {
    let needed = rows * cols;
    if bytes.len() * 8 < needed {
        return Err(Error::Length {
            context: "matrix bytes",
            expected: needed.div_ceil(8),
            actual: bytes.len(),
        });
    }
    let mut out = BinaryMatrix::zeros(rows, cols);
    for i in 0..needed {
        let bit = (bytes[i / 8] >> (7 - (i % 8))) & 1;
        out.set(i / cols, i % cols, bit);
    }
    Ok(out)
}
