//! Constant parameter sets for the pqcrypt library
//!
//! This crate holds the named parameter sets the scheme crates are
//! instantiated with. It is a constants-only crate with no dependencies.

#![no_std]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod mceliece;
pub mod ntru;

pub use mceliece::{GoppaParams, MCELIECE_1024, MCELIECE_TOY};
pub use ntru::{NtruParams, NTRU_503, NTRU_TOY};
