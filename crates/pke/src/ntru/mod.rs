//! NTRU public-key encryption over Z[x]/(x^N − 1).
//!
//! The private key is a random ternary polynomial f together with its
//! inverses f_p (extended Euclid over GF(p)[x]) and f_q (Hensel-lifted
//! from the inverse mod 2); the public key is h = p·f_q·g mod q for a
//! second ternary polynomial g. Plaintext is OAEP-padded, base64-framed
//! (the ternary codec accepts only printable ASCII) and embedded into
//! ring coefficients five base-3 digits per character.
//!
//! # Decryption failures
//!
//! Decryption center-lifts f·c mod q into (−q/2, q/2] and only then
//! reduces mod p. When a coefficient of the underlying integer
//! polynomial falls outside that window the lift picks the wrong
//! representative and decryption fails, with overwhelming probability
//! noisily as a padding or framing error. This is an
//! inherent property of the scheme at these parameters, not a bug; its
//! probability shrinks as q grows relative to N.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::{string::String, vec::Vec};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use pqcrypt_algorithms::encode::poly::{compress_coefficients, decompress_coefficients};
use pqcrypt_algorithms::encode::ternary::{string_to_ternary, ternary_to_string};
use pqcrypt_algorithms::error::Error as PrimitiveError;
use pqcrypt_algorithms::hash::Sha1;
use pqcrypt_algorithms::pad::{oaep_decode, oaep_encode};
use pqcrypt_algorithms::ring::{invert_mod_power_of_two, invert_mod_prime, RingPoly};
use pqcrypt_api::Pke;
use pqcrypt_params::ntru::{NtruParams, DIGITS_PER_CHAR, NTRU_503};

use crate::error::{Error, Result};

#[cfg(test)]
mod tests;

/// NTRU public key: the ring parameters and h = p·f_q·g mod q.
#[derive(Debug, Clone)]
pub struct NtruPublicKey {
    n: usize,
    p: i64,
    q: i64,
    h: RingPoly,
}

impl NtruPublicKey {
    /// Ring degree N.
    pub fn ring_degree(&self) -> usize {
        self.n
    }

    /// Small modulus p.
    pub fn small_modulus(&self) -> i64 {
        self.p
    }

    /// Large modulus q.
    pub fn large_modulus(&self) -> i64 {
        self.q
    }

    /// The public polynomial h, reduced mod q.
    pub fn h(&self) -> &RingPoly {
        &self.h
    }

    /// Serializes h in the fixed-width wire format (⌈log2 q⌉ bits per
    /// coefficient). The format carries neither q nor N; keep the
    /// parameter set alongside the bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(compress_coefficients(self.h.coeffs(), self.q)?)
    }

    /// Rebuilds a public key from wire bytes and the parameter set.
    pub fn from_bytes(bytes: &[u8], params: &NtruParams) -> Result<Self> {
        let coeffs = decompress_coefficients(bytes, params.q, params.n)?;
        let h = RingPoly::from_coeffs(params.n, &coeffs)?.reduce_mod(params.q)?;
        Ok(Self {
            n: params.n,
            p: params.p,
            q: params.q,
            h,
        })
    }
}

/// NTRU secret key: f and its two inverses, plus the ring parameters
/// needed to decrypt.
#[derive(Debug, Clone)]
pub struct NtruSecretKey {
    n: usize,
    p: i64,
    q: i64,
    f: RingPoly,
    f_p: RingPoly,
    f_q: RingPoly,
}

impl NtruSecretKey {
    /// The private ternary polynomial f.
    pub fn f(&self) -> &RingPoly {
        &self.f
    }

    /// f⁻¹ mod (p, x^N − 1).
    pub fn f_p(&self) -> &RingPoly {
        &self.f_p
    }

    /// f⁻¹ mod (q, x^N − 1).
    pub fn f_q(&self) -> &RingPoly {
        &self.f_q
    }
}

impl Zeroize for NtruSecretKey {
    fn zeroize(&mut self) {
        self.f.zeroize();
        self.f_p.zeroize();
        self.f_q.zeroize();
    }
}

/// A generated key pair.
#[derive(Debug, Clone)]
pub struct NtruKeyPair {
    public: NtruPublicKey,
    secret: NtruSecretKey,
}

impl NtruKeyPair {
    /// The public half.
    pub fn public(&self) -> &NtruPublicKey {
        &self.public
    }

    /// The secret half.
    pub fn secret(&self) -> &NtruSecretKey {
        &self.secret
    }
}

/// The NTRU scheme, parameterized at call time by [`NtruParams`].
pub struct Ntru;

impl Ntru {
    /// Algorithm name.
    pub fn name() -> &'static str {
        "NTRUEncrypt"
    }

    /// Generates a key pair: rejection-samples a ternary f invertible
    /// both mod p and mod q (at most `max_attempts` candidates), then
    /// draws the ternary g and publishes h = p·f_q·g mod q.
    pub fn keypair<R: CryptoRng + RngCore>(
        params: &NtruParams,
        rng: &mut R,
    ) -> Result<NtruKeyPair> {
        if params.n < 3 {
            return Err(Error::UnsupportedParameters("ring degree is too small"));
        }
        if params.p < 3 || params.p % 2 == 0 {
            return Err(Error::UnsupportedParameters("p must be an odd prime"));
        }

        for _ in 0..params.max_attempts {
            let f = RingPoly::sample_ternary(rng, params.n);

            let f_p = match invert_mod_prime(&f, params.p) {
                Ok(inv) => inv,
                Err(PrimitiveError::NotInvertible { .. }) => continue,
                Err(e) => return Err(e.into()),
            };
            let f_q = match invert_mod_power_of_two(&f, params.q) {
                Ok(inv) => inv,
                Err(PrimitiveError::NotInvertible { .. }) => continue,
                Err(e) => return Err(e.into()),
            };
            if f_p.is_zero() || f_q.is_zero() {
                continue;
            }

            let g = RingPoly::sample_ternary(rng, params.n);
            let h = f_q
                .lift()
                .scalar_mul(params.p)
                .mul(&g)?
                .reduce_mod(params.q)?;

            return Ok(NtruKeyPair {
                public: NtruPublicKey {
                    n: params.n,
                    p: params.p,
                    q: params.q,
                    h,
                },
                secret: NtruSecretKey {
                    n: params.n,
                    p: params.p,
                    q: params.q,
                    f,
                    f_p,
                    f_q,
                },
            });
        }

        Err(Error::KeyGenerationFailed(
            "no invertible private polynomial within the attempt budget",
        ))
    }

    // OAEP output length for ring degree n; every 5 ternary digits carry
    // one base64 character and every 4 base64 characters 3 bytes.
    fn padded_len(n: usize) -> Result<usize> {
        (n / DIGITS_PER_CHAR * 3 / 4).checked_sub(5).ok_or(
            Error::UnsupportedParameters(
                "ring degree is too small to embed an OAEP block",
            ),
        )
    }

    /// Encrypts an ASCII plaintext: OAEP-pad, base64-frame, embed as
    /// ternary digits, then blind with a fresh random ternary r as
    /// e = p·r·h + m mod q.
    pub fn encrypt<R: CryptoRng + RngCore>(
        public: &NtruPublicKey,
        plaintext: &str,
        rng: &mut R,
    ) -> Result<RingPoly> {
        if !plaintext.is_ascii() {
            return Err(Error::EncryptionFailed("plaintext must be ASCII"));
        }
        let padded_len = Self::padded_len(public.n)?;
        let padded = oaep_encode::<Sha1, _>(rng, plaintext.as_bytes(), b"", padded_len)?;

        // The ternary codec accepts only printable ASCII
        let framed = BASE64.encode(&padded);
        let digits = string_to_ternary(&framed, public.n - 1)?;
        let digit_coeffs: Vec<i64> = digits.iter().map(|&d| i64::from(d)).collect();
        let message = RingPoly::from_coeffs(public.n, &digit_coeffs)?;

        let r = RingPoly::sample_ternary(rng, public.n);
        let blinded = r.mul(&public.h.lift())?.scalar_mul(public.p);

        Ok(blinded.add(&message)?.reduce_mod(public.q)?)
    }

    /// Decrypts a ciphertext polynomial: a = f·e mod q, center-lift,
    /// reduce mod p, multiply by f_p, then peel the ternary, base64 and
    /// OAEP layers back off.
    pub fn decrypt(secret: &NtruSecretKey, ciphertext: &RingPoly) -> Result<String> {
        if ciphertext.ring_degree() != secret.n {
            return Err(Error::UnsupportedParameters(
                "ciphertext ring degree does not match the key",
            ));
        }

        let a = secret
            .f
            .mul(&ciphertext.lift())?
            .reduce_mod(secret.q)?
            .center_lift()?;
        let b = a.reduce_mod(secret.p)?;
        let c = secret.f_p.lift().mul(&b.lift())?.reduce_mod(secret.p)?;

        // Digits live in the first ⌊(N−1)/5⌋·5 coefficients; the codec
        // requires a whole number of characters.
        let digit_count = (secret.n - 1) / DIGITS_PER_CHAR * DIGITS_PER_CHAR;
        let digits: Vec<u8> = c.coeffs()[..digit_count]
            .iter()
            .map(|&d| d as u8)
            .collect();

        let framed = ternary_to_string(&digits)
            .map_err(|_| Error::DecryptionFailed("ternary embedding is corrupt"))?;
        let padded = BASE64
            .decode(framed.as_bytes())
            .map_err(|_| Error::DecryptionFailed("base64 frame is corrupt"))?;

        let padded_len = Self::padded_len(secret.n)?;
        let message = oaep_decode::<Sha1>(&padded, b"", padded_len)?;

        String::from_utf8(message)
            .map_err(|_| Error::DecryptionFailed("plaintext is not valid ASCII"))
    }
}

/// NTRU at the [`NTRU_503`] parameter set, with ciphertexts in the
/// fixed-width coefficient wire format.
pub struct Ntru503;

impl Pke for Ntru503 {
    type PublicKey = NtruPublicKey;
    type SecretKey = NtruSecretKey;
    type Ciphertext = Vec<u8>;

    fn name() -> &'static str {
        "NTRUEncrypt-503"
    }

    fn keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
    ) -> pqcrypt_api::Result<(Self::PublicKey, Self::SecretKey)> {
        let keypair = Ntru::keypair(&NTRU_503, rng).map_err(pqcrypt_api::Error::from)?;
        Ok((keypair.public, keypair.secret))
    }

    fn encrypt<R: CryptoRng + RngCore>(
        pk_recipient: &Self::PublicKey,
        plaintext: &str,
        rng: &mut R,
    ) -> pqcrypt_api::Result<Self::Ciphertext> {
        let ciphertext = Ntru::encrypt(pk_recipient, plaintext, rng)
            .map_err(pqcrypt_api::Error::from)?;
        compress_coefficients(ciphertext.coeffs(), pk_recipient.q)
            .map_err(pqcrypt_api::Error::from)
    }

    fn decrypt(
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> pqcrypt_api::Result<String> {
        let coeffs = decompress_coefficients(ciphertext, sk_recipient.q, sk_recipient.n)
            .map_err(pqcrypt_api::Error::from)?;
        let poly = RingPoly::from_coeffs(sk_recipient.n, &coeffs)
            .and_then(|p| p.reduce_mod(sk_recipient.q))
            .map_err(pqcrypt_api::Error::from)?;
        Ntru::decrypt(sk_recipient, &poly).map_err(pqcrypt_api::Error::from)
    }
}
