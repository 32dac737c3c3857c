//! Mathematical and encoding primitives for the pqcrypt library
//!
//! This crate implements everything the scheme crates build on: GF(2^m)
//! field and matrix arithmetic, binary-matrix linear algebra and the Goppa
//! code construction, the truncated polynomial ring Z[x]/(x^N − 1), an
//! in-crate SHA-1, OAEP/MGF1 padding, and the wire formats for matrices,
//! coefficient vectors and ternary-embedded text.
//!
//! Nothing in this crate is constant time; see the workspace README for
//! the security caveats.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{Error, Result};

// Finite field GF(2^m) arithmetic
pub mod field;
pub use field::{BinaryField, FieldElement, FieldMatrix, FieldPoly, Gf1024, Gf16, Gf256, Gf32};

// Binary (GF(2)) linear algebra and the Goppa code construction
pub mod code;
pub use code::{BinaryMatrix, GoppaCode};

// Truncated polynomial ring Z[x]/(x^N - 1)
pub mod ring;
pub use ring::{Domain, RingPoly};

// Hash function implementations
pub mod hash;
pub use hash::{HashFunction, Sha1};

// OAEP padding and MGF1
pub mod pad;
pub use pad::{mgf1, oaep_decode, oaep_encode};

// Wire formats
pub mod encode;
