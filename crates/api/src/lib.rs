//! Public API traits and types for the pqcrypt library
//!
//! This crate provides the public API surface for the pqcrypt workspace:
//! trait definitions and the error type shared by every scheme crate.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use traits::Pke;
