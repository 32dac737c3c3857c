//! Code-based cryptography primitives
//!
//! Binary (GF(2)) matrix linear algebra (Gaussian elimination,
//! invertibility testing, null-space computation, permutation and
//! invertible-matrix sampling) and the binary Goppa code construction
//! used by the McEliece scheme.

mod goppa;
mod matrix;

pub use goppa::{binary_expansion, support_set, GoppaCode};
pub use matrix::BinaryMatrix;
