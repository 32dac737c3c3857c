//! Public Key Encryption schemes for the pqcrypt library.
//!
//! Two schemes built entirely on [`pqcrypt_algorithms`]:
//!
//! - [`mceliece`]: code-based encryption over binary Goppa codes. Key
//!   generation and encryption follow the textbook construction
//!   (public key G′ = S·G·P, ciphertext = m·G′ + e with |e| = t);
//!   syndrome decoding is deliberately left to the
//!   [`mceliece::SyndromeDecoder`] extension point.
//! - [`ntru`]: lattice-based encryption over Z[x]/(x^N − 1) with
//!   ternary keys, OAEP-padded and base64/ternary-embedded plaintext,
//!   and the scheme's inherent (documented) decryption failure
//!   probability.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(all(not(feature = "std"), feature = "alloc"))]
extern crate alloc;

pub mod error;
pub mod mceliece;
pub mod ntru;

// Re-export key items
pub use error::{Error, Result};
pub use mceliece::McEliece;
pub use ntru::{Ntru, Ntru503};
