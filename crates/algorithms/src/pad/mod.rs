//! OAEP padding and the MGF1 mask generation function
//!
//! RFC 2437-style Optimal Asymmetric Encryption Padding, generic over
//! the [`HashFunction`] used for the label hash and the masks. Both
//! schemes in this workspace pad their plaintext through [`oaep_encode`]
//! before embedding it into their message space, and recover it through
//! [`oaep_decode`], which rejects any malformed block outright.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use byteorder::{BigEndian, ByteOrder};
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;

use crate::error::{Error, Result};
use crate::hash::HashFunction;


/// MGF1: the first `length` bytes of Hash(seed‖counter) for the 4-byte
/// big-endian counter 0, 1, 2, ….
///
/// Fails with [`Error::MaskTooLong`] when `length` exceeds 2^32 hash
/// blocks.
pub fn mgf1<H: HashFunction>(seed: &[u8], length: usize) -> Result<Vec<u8>> {
    let h = H::output_size();
    if (length as u64) > (h as u64) << 32 {
        return Err(Error::MaskTooLong { requested: length });
    }

    let mut mask = Vec::with_capacity(length);
    let mut counter_bytes = [0u8; 4];
    let mut counter: u32 = 0;
    while mask.len() < length {
        BigEndian::write_u32(&mut counter_bytes, counter);
        let mut hasher = H::new();
        hasher.update(seed);
        hasher.update(&counter_bytes);
        mask.extend_from_slice(&hasher.finalize());
        counter = counter.wrapping_add(1);
    }
    mask.truncate(length);
    Ok(mask)
}

/// OAEP-encodes `message` into a `k`-byte block:
/// `0x00 ‖ maskedSeed (h bytes) ‖ maskedDB (k − h − 1 bytes)`.
///
/// The data block is `Hash(label) ‖ 0x00… ‖ 0x01 ‖ message`; a fresh
/// h-byte seed is drawn from the supplied CSPRNG. The block only forms
/// when `k ≥ 2h + 2 + |message|`.
pub fn oaep_encode<H: HashFunction, R: CryptoRng + RngCore>(
    rng: &mut R,
    message: &[u8],
    label: &[u8],
    k: usize,
) -> Result<Vec<u8>> {
    let h = H::output_size();
    let needed = 2 * h + 2 + message.len();
    if k < needed {
        return Err(Error::Capacity {
            context: "OAEP message",
            needed,
            available: k,
        });
    }

    let l_hash = H::digest(label);

    // DB = lHash || PS || 0x01 || M, exactly k - h - 1 bytes
    let mut db = Vec::with_capacity(k - h - 1);
    db.extend_from_slice(&l_hash);
    db.resize(k - message.len() - h - 2, 0);
    db.push(0x01);
    db.extend_from_slice(message);

    let mut seed = vec![0u8; h];
    rng.fill_bytes(&mut seed);

    let db_mask = mgf1::<H>(&seed, k - h - 1)?;
    let masked_db: Vec<u8> = db.iter().zip(&db_mask).map(|(&a, &b)| a ^ b).collect();

    let seed_mask = mgf1::<H>(&masked_db, h)?;
    let masked_seed: Vec<u8> = seed.iter().zip(&seed_mask).map(|(&a, &b)| a ^ b).collect();

    let mut em = Vec::with_capacity(k);
    em.push(0x00);
    em.extend_from_slice(&masked_seed);
    em.extend_from_slice(&masked_db);
    Ok(em)
}

/// Inverts [`oaep_encode`], verifying the label hash, the zero padding
/// and the 0x01 separator. Any mismatch is fatal; no partially valid
/// message is ever returned.
pub fn oaep_decode<H: HashFunction>(em: &[u8], label: &[u8], k: usize) -> Result<Vec<u8>> {
    let h = H::output_size();
    if em.len() != k {
        return Err(Error::Length {
            context: "OAEP encoded message",
            expected: k,
            actual: em.len(),
        });
    }
    if k < 2 * h + 2 {
        return Err(Error::Capacity {
            context: "OAEP block",
            needed: 2 * h + 2,
            available: k,
        });
    }

    let masked_seed = &em[1..h + 1];
    let masked_db = &em[h + 1..];

    let seed_mask = mgf1::<H>(masked_db, h)?;
    let seed: Vec<u8> = masked_seed.iter().zip(&seed_mask).map(|(&a, &b)| a ^ b).collect();

    let db_mask = mgf1::<H>(&seed, k - h - 1)?;
    let db: Vec<u8> = masked_db.iter().zip(&db_mask).map(|(&a, &b)| a ^ b).collect();

    let l_hash = H::digest(label);
    if db[..h].ct_eq(&l_hash).unwrap_u8() != 1 {
        return Err(Error::Padding {
            context: "label hash mismatch",
        });
    }

    // The first non-zero byte after the label hash must be the 0x01
    // separator; everything before it is the zero padding string.
    let separator = db[h..].iter().position(|&b| b != 0).ok_or(Error::Padding {
        context: "separator not found",
    })?;
    if db[h + separator] != 0x01 {
        return Err(Error::Padding {
            context: "incorrect separator",
        });
    }

    Ok(db[h + separator + 1..].to_vec())
}
