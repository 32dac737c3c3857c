//! # pqcrypt
//!
//! Post-quantum public-key encryption from first principles: McEliece over
//! binary Goppa codes and NTRU over truncated polynomial rings, sharing an
//! OAEP/MGF1 padding layer and compact binary wire formats.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! pqcrypt = "0.1"
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`pqcrypt-api`]: Error types and the `Pke` trait
//! - [`pqcrypt-params`]: Named parameter sets
//! - [`pqcrypt-algorithms`]: Field, code, ring, hash, padding and encoding
//!   primitives
//! - [`pqcrypt-pke`]: The McEliece and NTRU schemes
//!
//! ## Security Warning
//!
//! This library exists to demonstrate the mathematics of the two schemes at
//! demonstration parameter sizes. Nothing here is constant time and the
//! schemes are implemented in their textbook form.

#![cfg_attr(not(feature = "std"), no_std)]

pub use pqcrypt_api as api;
pub use pqcrypt_params as params;
pub use pqcrypt_algorithms as algorithms;
pub use pqcrypt_pke as pke;

/// Common imports for pqcrypt users
pub mod prelude {
    pub use pqcrypt_api::{Error, Pke, Result};
    pub use pqcrypt_params::mceliece::{GoppaParams, MCELIECE_1024, MCELIECE_TOY};
    pub use pqcrypt_params::ntru::{NtruParams, NTRU_503, NTRU_TOY};
    pub use pqcrypt_pke::mceliece::McEliece;
    pub use pqcrypt_pke::ntru::{Ntru, Ntru503};
}
