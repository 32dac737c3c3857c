//! Hash function implementations
//!
//! The OAEP layer is generic over [`HashFunction`]; [`Sha1`] is the
//! default instantiation used by both schemes.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

pub mod sha1;

// Re-exports
pub use sha1::Sha1;

/// Hash function result
pub type Hash = Vec<u8>;

/// Trait for cryptographic hash functions
pub trait HashFunction {
    /// Creates a new instance of the hash function
    fn new() -> Self;

    /// Updates the hash function state with new data
    fn update(&mut self, data: &[u8]);

    /// Finalizes the hash computation and returns the digest
    fn finalize(&mut self) -> Hash;

    /// Returns the output size of the hash function in bytes
    fn output_size() -> usize;

    /// Returns the block size of the hash function in bytes
    fn block_size() -> usize;

    /// Convenience method to hash data in a single call
    fn digest(data: &[u8]) -> Hash
    where
        Self: Sized,
    {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }

    /// Returns the name of the hash function
    fn name() -> &'static str;
}
