//! Trait definition for Public Key Encryption (PKE) schemes.

use crate::error::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::string::String;

/// Trait for Public Key Encryption schemes over ASCII plaintext.
///
/// The plaintext side of this trait is a string rather than raw bytes:
/// both schemes in this workspace embed printable ASCII into their
/// algebraic message space (a bit vector for McEliece, a base-3 digit
/// sequence for NTRU) and cannot carry arbitrary bytes directly.
pub trait Pke {
    /// Public key type for the PKE scheme.
    type PublicKey: Clone;

    /// Secret key type for the PKE scheme.
    ///
    /// # Security Note
    /// Implements `Zeroize` for secure memory cleanup.
    type SecretKey: Zeroize + Clone;

    /// Ciphertext type produced by the PKE scheme, as serialized bytes.
    type Ciphertext: AsRef<[u8]> + Clone;

    /// Returns the PKE algorithm name.
    fn name() -> &'static str;

    /// Generates a new key pair.
    ///
    /// # Security Requirements
    /// Must use the provided CSPRNG for all randomness.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Encrypts a plaintext message using the recipient's public key.
    fn encrypt<R: CryptoRng + RngCore>(
        pk_recipient: &Self::PublicKey,
        plaintext: &str,
        rng: &mut R,
    ) -> Result<Self::Ciphertext>;

    /// Decrypts a ciphertext using the recipient's secret key.
    ///
    /// Returns the original plaintext if decryption and padding
    /// verification succeed.
    fn decrypt(sk_recipient: &Self::SecretKey, ciphertext: &Self::Ciphertext) -> Result<String>;
}
