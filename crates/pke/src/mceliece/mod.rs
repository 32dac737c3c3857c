//! McEliece public-key encryption over binary Goppa codes.
//!
//! Key generation searches for an irreducible Goppa polynomial g of
//! degree t over GF(2^m), collects a support set of n non-roots, builds
//! the parity check H = X·Y·Z and the generator matrix G from its
//! binary null space, and masks G as G′ = S·G·P with a random invertible
//! S and permutation P. Encryption OAEP-pads the plaintext to k/8
//! bytes, multiplies the bit vector by G′ and flips exactly t random
//! positions.
//!
//! Decryption requires a syndrome decoder for the underlying Goppa
//! code, which this crate does not ship; implement
//! [`SyndromeDecoder`] to plug one in.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::vec::Vec;

use core::marker::PhantomData;

use rand::seq::SliceRandom;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use pqcrypt_algorithms::code::{support_set, BinaryMatrix, GoppaCode};
use pqcrypt_algorithms::encode::{bytes_to_matrix, matrix_to_bytes};
use pqcrypt_algorithms::field::{BinaryField, FieldElement, FieldMatrix, FieldPoly};
use pqcrypt_algorithms::hash::Sha1;
use pqcrypt_algorithms::pad::oaep_encode;
use pqcrypt_params::mceliece::GoppaParams;

use crate::error::{Error, Result};


/// McEliece public key: the masked generator matrix G′ = S·G·P plus the
/// error weight t used at encryption time.
#[derive(Debug, Clone)]
pub struct McEliecePublicKey {
    g_prime: BinaryMatrix,
    t: usize,
}

impl McEliecePublicKey {
    /// Code length n (ciphertext bit length).
    pub fn code_length(&self) -> usize {
        self.g_prime.cols()
    }

    /// Code dimension k (message bit length).
    pub fn dimension(&self) -> usize {
        self.g_prime.rows()
    }

    /// Number of error bits injected per ciphertext.
    pub fn error_weight(&self) -> usize {
        self.t
    }

    /// The masked generator matrix.
    pub fn matrix(&self) -> &BinaryMatrix {
        &self.g_prime
    }

    /// Serializes G′ in the bit-packed matrix wire format. The format
    /// carries no dimensions; keep (k, n, t) alongside the bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        matrix_to_bytes(&self.g_prime)
    }

    /// Rebuilds a public key from wire bytes and its out-of-band shape.
    pub fn from_bytes(bytes: &[u8], params: &GoppaParams) -> Result<Self> {
        let g_prime = bytes_to_matrix(bytes, params.dimension(), params.n)?;
        Ok(Self {
            g_prime,
            t: params.t,
        })
    }
}

/// McEliece secret key: the masking pair (S, P), the unmasked generator
/// G, and the Goppa code data (g, L, H) a future decoder needs.
#[derive(Debug, Clone)]
pub struct McElieceSecretKey<F: BinaryField> {
    scrambler: BinaryMatrix,
    permutation: BinaryMatrix,
    generator: BinaryMatrix,
    goppa_poly: FieldPoly<F>,
    support: Vec<FieldElement<F>>,
    parity_check: FieldMatrix<F>,
}

impl<F: BinaryField> McElieceSecretKey<F> {
    /// The invertible scrambler matrix S.
    pub fn scrambler(&self) -> &BinaryMatrix {
        &self.scrambler
    }

    /// The permutation matrix P.
    pub fn permutation(&self) -> &BinaryMatrix {
        &self.permutation
    }

    /// The unmasked generator matrix G.
    pub fn generator(&self) -> &BinaryMatrix {
        &self.generator
    }

    /// The Goppa polynomial g.
    pub fn goppa_poly(&self) -> &FieldPoly<F> {
        &self.goppa_poly
    }

    /// The support set L.
    pub fn support(&self) -> &[FieldElement<F>] {
        &self.support
    }

    /// The parity-check matrix H over the field.
    pub fn parity_check(&self) -> &FieldMatrix<F> {
        &self.parity_check
    }
}

impl<F: BinaryField> Zeroize for McElieceSecretKey<F> {
    fn zeroize(&mut self) {
        self.scrambler.zeroize();
        self.permutation.zeroize();
        self.generator.zeroize();
        self.goppa_poly.zeroize();
        self.support.zeroize();
        self.parity_check.zeroize();
    }
}

/// A generated key pair.
#[derive(Debug, Clone)]
pub struct McElieceKeyPair<F: BinaryField> {
    public: McEliecePublicKey,
    secret: McElieceSecretKey<F>,
}

impl<F: BinaryField> McElieceKeyPair<F> {
    /// The public half.
    pub fn public(&self) -> &McEliecePublicKey {
        &self.public
    }

    /// The secret half.
    pub fn secret(&self) -> &McElieceSecretKey<F> {
        &self.secret
    }
}

/// Extension point for syndrome decoding.
///
/// The scheme as implemented here stops at key generation and
/// encryption; recovering the plaintext requires a decoder for the
/// underlying Goppa code (e.g. Patterson's algorithm) working from the
/// secret (S, g, L, H, P).
pub trait SyndromeDecoder<F: BinaryField> {
    /// Decodes a length-n ciphertext bit vector back to the plaintext.
    fn decode(&self, secret: &McElieceSecretKey<F>, ciphertext: &[u8]) -> Result<Vec<u8>>;
}

/// The McEliece scheme over the field `F`.
///
/// The field's extension degree must match the parameter set's `m`;
/// [`MCELIECE_TOY`](pqcrypt_params::mceliece::MCELIECE_TOY) pairs with
/// [`Gf16`](pqcrypt_algorithms::field::Gf16) and
/// [`MCELIECE_1024`](pqcrypt_params::mceliece::MCELIECE_1024) with
/// [`Gf1024`](pqcrypt_algorithms::field::Gf1024).
pub struct McEliece<F: BinaryField> {
    _marker: PhantomData<F>,
}

impl<F: BinaryField> McEliece<F> {
    /// Algorithm name.
    pub fn name() -> &'static str {
        "McEliece"
    }

    /// Generates a key pair for the given parameters.
    pub fn keypair<R: CryptoRng + RngCore>(
        params: &GoppaParams,
        rng: &mut R,
    ) -> Result<McElieceKeyPair<F>> {
        if params.m != F::M {
            return Err(Error::UnsupportedParameters(
                "field extension degree does not match the parameter set",
            ));
        }
        if params.n > (1usize << F::M) {
            return Err(Error::UnsupportedParameters(
                "code length exceeds the field order",
            ));
        }
        let k = params
            .n
            .checked_sub(params.t * params.m)
            .filter(|&k| k > 0)
            .ok_or(Error::UnsupportedParameters("code dimension k = n - t*m must be positive"))?;

        // The binary expansion of H can lose rank for an unlucky g, in
        // which case the null space is larger than k and the scrambler
        // shapes no longer line up; redraw g when that happens.
        let mut code = None;
        for _ in 0..params.poly_attempts {
            let g = FieldPoly::<F>::random_irreducible(rng, params.t, params.poly_attempts)?;
            let support = support_set(&g, params.n)?;
            let candidate = GoppaCode::build(&g, &support)?;
            if candidate.dimension() == k {
                code = Some((g, support, candidate));
                break;
            }
        }
        let (goppa_poly, support, code) = code.ok_or(Error::KeyGenerationFailed(
            "no full-rank Goppa code within the attempt budget",
        ))?;

        let scrambler = BinaryMatrix::random_invertible(rng, k, params.matrix_attempts)?;
        let permutation = BinaryMatrix::random_permutation(rng, params.n);

        let g_prime = scrambler.mul(code.generator())?.mul(&permutation)?;

        Ok(McElieceKeyPair {
            public: McEliecePublicKey {
                g_prime,
                t: params.t,
            },
            secret: McElieceSecretKey {
                scrambler,
                permutation,
                generator: code.generator().clone(),
                goppa_poly,
                support,
                parity_check: code.parity_check().clone(),
            },
        })
    }

    /// Encrypts an ASCII plaintext into a length-n GF(2) vector, one
    /// byte per bit: OAEP-pad to k/8 bytes, multiply the padded bit
    /// vector by G′, then flip exactly t uniformly chosen positions.
    pub fn encrypt<R: CryptoRng + RngCore>(
        public: &McEliecePublicKey,
        plaintext: &str,
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        if !plaintext.is_ascii() {
            return Err(Error::EncryptionFailed("plaintext must be ASCII"));
        }
        let k = public.dimension();
        if k % 8 != 0 {
            return Err(Error::UnsupportedParameters(
                "code dimension is not a whole number of bytes",
            ));
        }

        let padded = oaep_encode::<Sha1, _>(rng, plaintext.as_bytes(), b"", k / 8)?;

        let mut bits = Vec::with_capacity(k);
        for byte in &padded {
            for shift in (0..8).rev() {
                bits.push((byte >> shift) & 1);
            }
        }
        debug_assert_eq!(bits.len(), k);

        let mut codeword = public.g_prime.left_mul_vec(&bits)?;

        // Error vector of weight exactly t via a full-range shuffle
        let n = public.code_length();
        let mut positions: Vec<usize> = (0..n).collect();
        positions.shuffle(rng);
        for &pos in &positions[..public.t] {
            codeword[pos] ^= 1;
        }

        Ok(codeword)
    }
}
