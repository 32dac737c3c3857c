//! Wire formats
//!
//! Bit-exact serialization for the three shapes of data the schemes
//! persist or embed:
//!
//! - [`matrix`]: row-major, MSB-first bit packing of binary matrices
//!   (no embedded dimensions; the caller supplies them on decode);
//! - [`poly`]: fixed-width bit-packed coefficient vectors and a
//!   base64-framed textual form with optional deflate compression;
//! - [`ternary`]: the fixed-width base-3 codec that embeds printable
//!   ASCII into ring coefficients.

pub mod matrix;
pub mod poly;
pub mod ternary;

pub use matrix::{bytes_to_matrix, matrix_to_bytes};
pub use poly::{compress_coefficients, decompress_coefficients};
#[cfg(feature = "std")]
pub use poly::{base64_to_coeffs, coeffs_to_base64};
pub use ternary::{string_to_ternary, ternary_to_string};

#[cfg(test)]
mod tests;
